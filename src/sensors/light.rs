//! VEML7700 ambient light sensor (I²C, 16-bit ALS counts).
//!
//! Configured for gain ×1 and 100 ms integration, which puts one count at
//! 0.0576 lx — comfortably covering the 0 – 3 klx range of a daylit
//! office.  The raw-count-to-lux scaling is pure and host-tested.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ALS register over I²C via hw_init helpers.
//! On host/test: reads from a static AtomicU16 for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// 7-bit I²C address of the VEML7700.
pub const VEML7700_ADDR: u8 = 0x10;
/// ALS configuration register.
const REG_ALS_CONF: u8 = 0x00;
/// ALS output register (little-endian u16).
const REG_ALS: u8 = 0x04;
/// Gain ×1, 100 ms integration, no interrupts, powered on.
const ALS_CONF_DEFAULT: u16 = 0x0000;

/// Lux per ALS count at gain ×1 / 100 ms (datasheet resolution table).
const LUX_PER_COUNT: f32 = 0.0576;

static SIM_ALS_RAW: AtomicU16 = AtomicU16::new(0);

/// Inject a raw ALS count for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_als_raw(raw: u16) {
    SIM_ALS_RAW.store(raw, Ordering::Relaxed);
}

/// Inject an approximate lux value for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_lux(lux: f32) {
    let raw = (lux / LUX_PER_COUNT).clamp(0.0, f32::from(u16::MAX)) as u16;
    sim_set_als_raw(raw);
}

/// Convert a raw ALS count to lux.
pub fn counts_to_lux(raw: u16) -> f32 {
    f32::from(raw) * LUX_PER_COUNT
}

#[derive(Debug, Clone, Copy)]
pub struct LightReading {
    pub raw: u16,
    pub lux: f32,
}

pub struct AmbientLightSensor {
    _addr: u8,
}

impl AmbientLightSensor {
    /// Construct the driver and (on target) push the ALS configuration.
    pub fn new() -> Self {
        let sensor = Self {
            _addr: VEML7700_ADDR,
        };
        sensor.configure();
        sensor
    }

    pub fn read(&mut self) -> LightReading {
        let raw = self.read_raw();
        LightReading {
            raw,
            lux: counts_to_lux(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn configure(&self) {
        if !hw_init::i2c_write_reg_u16_le(VEML7700_ADDR, REG_ALS_CONF, ALS_CONF_DEFAULT) {
            log::warn!("veml7700: configuration write failed");
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn configure(&self) {}

    #[cfg(target_os = "espidf")]
    fn read_raw(&self) -> u16 {
        hw_init::i2c_read_reg_u16_le(VEML7700_ADDR, REG_ALS).unwrap_or(0)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self) -> u16 {
        SIM_ALS_RAW.load(Ordering::Relaxed)
    }
}
