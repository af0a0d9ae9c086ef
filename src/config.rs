//! System configuration parameters
//!
//! All tunable parameters for the OfficeCtl system.  Defaults encode the
//! building-management policy: blinds open during workday hours, lights
//! follow occupancy whenever daylight falls below the lux threshold.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Blind schedule ---
    /// First hour of the workday window (inclusive): blinds open from here.
    pub open_hour: u8,
    /// End of the workday window (exclusive): blinds close from this hour on.
    pub close_hour: u8,
    /// Servo position commanded when opening the blind.
    pub blind_open_angle: u8,
    /// Servo position commanded when closing the blind.
    pub blind_closed_angle: u8,

    // --- Lighting ---
    /// Ambient illuminance (lux) below which an occupied room gets
    /// artificial light.  Readings at or above this are "bright enough".
    pub lux_threshold: f32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Blind schedule: 08:00 – 20:00, Monday through Friday
            open_hour: 8,
            close_hour: 20,
            blind_open_angle: 12,
            blind_closed_angle: 2,

            // Lighting
            lux_threshold: 500.0,

            // Timing
            control_loop_interval_ms: 1000, // 1 Hz
            telemetry_interval_secs: 60,    // 1/min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.open_hour < c.close_hour);
        assert!(c.close_hour <= 24);
        assert!(c.lux_threshold > 0.0);
        assert_ne!(c.blind_open_angle, c.blind_closed_angle);
        assert!(c.control_loop_interval_ms > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.open_hour, c2.open_hour);
        assert_eq!(c.close_hour, c2.close_hour);
        assert!((c.lux_threshold - c2.lux_threshold).abs() < 0.001);
        assert_eq!(c.blind_open_angle, c2.blind_open_angle);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = SystemConfig::default();
        assert!(
            c.control_loop_interval_ms < c.telemetry_interval_secs * 1000,
            "control loop should be faster than telemetry"
        );
    }

    #[test]
    fn postcard_roundtrip() {
        let c = SystemConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: SystemConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.blind_closed_angle, c2.blind_closed_angle);
        assert!((c.lux_threshold - c2.lux_threshold).abs() < 0.001);
    }
}
