//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver; the hardware adapter exposes it to the
//! domain through the read-side port traits.

pub mod clock;
pub mod light;
pub mod occupancy;

use clock::RtcClock;
use light::AmbientLightSensor;
use occupancy::OccupancyGrid;

/// Aggregates all sensor drivers behind one handle.
pub struct SensorHub {
    pub occupancy: OccupancyGrid,
    pub light: AmbientLightSensor,
    pub rtc: RtcClock,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(occupancy: OccupancyGrid, light: AmbientLightSensor, rtc: RtcClock) -> Self {
        Self {
            occupancy,
            light,
            rtc,
        }
    }
}
