//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both actuator drivers, exposing them through
//! the sensor and actuator ports.  This is the only module in the system
//! that touches actual hardware.  On non-espidf targets, the underlying
//! drivers use cfg-gated simulation stubs.

use log::warn;
use time::PrimitiveDateTime;

use crate::app::ports::{BlindPort, ClockPort, LightSensorPort, OccupancyPort, RelayPort};
use crate::channels::{Quadrant, SensorChannel};
use crate::drivers::relay::RelayDriver;
use crate::drivers::servo::BlindServo;
use crate::sensors::SensorHub;

#[cfg(target_os = "espidf")]
type RelayPin =
    esp_idf_hal::gpio::PinDriver<'static, esp_idf_hal::gpio::AnyOutputPin, esp_idf_hal::gpio::Output>;
#[cfg(not(target_os = "espidf"))]
type RelayPin = crate::drivers::relay::SimPin;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensors: SensorHub,
    servo: BlindServo,
    relay: RelayDriver<RelayPin>,
}

impl HardwareAdapter {
    pub fn new(sensors: SensorHub, servo: BlindServo, relay: RelayDriver<RelayPin>) -> Self {
        Self {
            sensors,
            servo,
            relay,
        }
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl OccupancyPort for HardwareAdapter {
    fn is_occupied(&mut self, quadrant: Quadrant) -> bool {
        self.sensors.occupancy.read(quadrant)
    }
}

impl ClockPort for HardwareAdapter {
    fn now(&mut self) -> PrimitiveDateTime {
        self.sensors.rtc.now()
    }
}

impl LightSensorPort for HardwareAdapter {
    fn read_lux(&mut self) -> f32 {
        self.sensors.light.read().lux
    }
}

// ── Actuator ports ────────────────────────────────────────────

impl BlindPort for HardwareAdapter {
    fn set_angle(&mut self, angle: u8) {
        self.servo.set_angle(angle);
    }
}

impl RelayPort for HardwareAdapter {
    fn set(&mut self, channel: SensorChannel, on: bool) {
        match channel {
            SensorChannel::LightRelay => self.relay.set(on),
            other => warn!("relay command addressed to non-relay channel {other}"),
        }
    }
}
