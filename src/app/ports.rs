//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OfficeService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, event sinks) implement these traits.
//! The [`OfficeService`](super::service::OfficeService) consumes them via
//! generics, so the domain core never touches hardware directly.  Each
//! capability is a single-method trait, which keeps test doubles trivial.
//!
//! Driver-level faults stay on the adapter side of this boundary: ports
//! return plain values and the domain adds no retry or fallback of its own.

use time::PrimitiveDateTime;

use crate::channels::{Quadrant, SensorChannel};

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: current occupancy of one office quadrant, uncached.
pub trait OccupancyPort {
    fn is_occupied(&mut self, quadrant: Quadrant) -> bool;
}

/// Read-side port: current local wall-clock date and time.
pub trait ClockPort {
    fn now(&mut self) -> PrimitiveDateTime;
}

/// Read-side port: current ambient illuminance in lux.
pub trait LightSensorPort {
    fn read_lux(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: position the blind servo.  Fire-and-forget — there is
/// no feedback read; the domain tracks the last commanded position itself.
pub trait BlindPort {
    fn set_angle(&mut self, angle: u8);
}

/// Write-side port: drive a relay output channel.  Fire-and-forget.
pub trait RelayPort {
    fn set(&mut self, channel: SensorChannel, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, future
/// building-bus uplink, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
