//! PIR occupancy sensors, one per office quadrant.
//!
//! HC-SR501 modules output a digital HIGH while presence is detected.
//! Each quadrant's sensor is wired to its own GPIO input; readings are
//! instantaneous level reads with no debouncing or caching.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init helpers.
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use crate::channels::Quadrant;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_OCCUPIED: [AtomicBool; Quadrant::COUNT] = [
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
];

/// Inject a quadrant reading for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_occupied(quadrant: Quadrant, occupied: bool) {
    SIM_OCCUPIED[quadrant.index()].store(occupied, Ordering::Relaxed);
}

/// The four PIR inputs as one driver.
pub struct OccupancyGrid {
    _gpios: [i32; Quadrant::COUNT],
}

impl OccupancyGrid {
    pub fn new() -> Self {
        let mut gpios = [0; Quadrant::COUNT];
        for quadrant in Quadrant::ALL {
            gpios[quadrant.index()] = quadrant.gpio();
        }
        Self { _gpios: gpios }
    }

    /// Instantaneous occupancy level for one quadrant.
    pub fn read(&mut self, quadrant: Quadrant) -> bool {
        self.read_gpio(quadrant)
    }

    #[cfg(target_os = "espidf")]
    fn read_gpio(&self, quadrant: Quadrant) -> bool {
        hw_init::gpio_read(quadrant.gpio())
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_gpio(&self, quadrant: Quadrant) -> bool {
        SIM_OCCUPIED[quadrant.index()].load(Ordering::Relaxed)
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    #[test]
    fn quadrants_read_independently() {
        let mut grid = OccupancyGrid::new();
        sim_set_occupied(Quadrant::Q2, true);
        assert!(!grid.read(Quadrant::Q1));
        assert!(grid.read(Quadrant::Q2));
        assert!(!grid.read(Quadrant::Q3));
        sim_set_occupied(Quadrant::Q2, false);
        assert!(!grid.read(Quadrant::Q2));
    }
}
