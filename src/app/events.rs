//! Outbound application events.
//!
//! The [`OfficeService`](super::service::OfficeService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, feed a future
//! building-management uplink, etc.

use serde::Serialize;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// The blind actuator was commanded to a new position.
    BlindsChanged { open: bool, angle: u8 },

    /// The light relay was commanded to a new state.
    LightChanged { on: bool },

    /// Configuration was replaced at runtime.
    ConfigUpdated,

    /// The application service has started.
    Started,
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryData {
    pub blinds_open: bool,
    pub light_on: bool,
    /// Most recent ambient reading (lux).
    pub lux: f32,
    /// Occupancy bitmap, Q1 = bit 0 .. Q4 = bit 3.
    pub occupancy_mask: u8,
    pub tick_count: u64,
}
