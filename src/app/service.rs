//! Application service — the hexagonal core.
//!
//! [`OfficeService`] owns the [`ControllerState`] and the configuration,
//! and exposes the three decision operations.  All I/O flows through port
//! traits injected at call sites, making the entire service testable with
//! mock adapters.
//!
//! ```text
//!  OccupancyPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  ClockPort     ──▶ │      OfficeService      │
//!  LightSensor   ──▶ │  blind + light policy   │──▶ BlindPort
//!                    └────────────────────────┘ ──▶ RelayPort
//! ```
//!
//! Every operation validates before it mutates: an invalid channel aborts
//! the call with no sensor read and no state change.

use log::info;

use crate::channels::{Quadrant, SensorChannel};
use crate::config::SystemConfig;
use crate::control::{ControllerState, blinds, lighting};
use crate::error::Result;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{
    BlindPort, ClockPort, EventSink, LightSensorPort, OccupancyPort, RelayPort,
};

// ───────────────────────────────────────────────────────────────
// OfficeService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct OfficeService {
    state: ControllerState,
    config: SystemConfig,
    tick_count: u64,
    /// Most recent ambient reading, cached for telemetry only.
    last_lux: f32,
    /// Most recent occupancy bitmap, cached for telemetry only.
    last_occupancy_mask: u8,
}

impl OfficeService {
    /// Construct the service from configuration.  Blinds closed, light off.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            state: ControllerState::new(),
            config,
            tick_count: 0,
            last_lux: 0.0,
            last_occupancy_mask: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "OfficeService started (workday {:02}:00-{:02}:00, lux threshold {})",
            self.config.open_hour, self.config.close_hour, self.config.lux_threshold
        );
    }

    // ── Occupancy query ───────────────────────────────────────

    /// Current occupancy of one quadrant, returned exactly as the sensor
    /// reports it — no debouncing, no aggregation.
    ///
    /// The channel is validated **before** any driver access: the light
    /// relay (or any other non-occupancy channel) fails with
    /// [`Error::InvalidChannel`](crate::error::Error::InvalidChannel) and
    /// leaves every sensor untouched.
    pub fn check_quadrant_occupancy(
        &mut self,
        channel: SensorChannel,
        hw: &mut impl OccupancyPort,
    ) -> Result<bool> {
        let quadrant = Quadrant::try_from(channel)?;
        Ok(hw.is_occupied(quadrant))
    }

    // ── Blind schedule ────────────────────────────────────────

    /// Evaluate the blind schedule against the current wall clock and
    /// issue at most one servo command.
    ///
    /// Weekends leave the blinds untouched entirely; on weekdays only a
    /// transition (scheduled position differing from the last-commanded
    /// one) drives the actuator, so this is safe to poll at any cadence.
    pub fn manage_blinds_based_on_time(
        &mut self,
        hw: &mut (impl ClockPort + BlindPort),
        sink: &mut impl EventSink,
    ) {
        let now = hw.now();
        let Some(cmd) = blinds::decide(self.state, now, &self.config) else {
            return;
        };

        let angle = cmd.angle(&self.config);
        hw.set_angle(angle);
        self.state = cmd.apply(self.state);

        info!(
            "blinds {} (angle {}) at {:?} {:02}:00",
            if self.state.blinds_open { "opened" } else { "closed" },
            angle,
            now.weekday(),
            now.hour()
        );
        sink.emit(&AppEvent::BlindsChanged {
            open: self.state.blinds_open,
            angle,
        });
    }

    // ── Light level management ────────────────────────────────

    /// Take a fresh occupancy snapshot across all four quadrants plus one
    /// lux sample, and issue at most one relay command.
    ///
    /// Occupancy is the aggregate OR of the quadrants; the reads happen
    /// through the same per-quadrant port as the occupancy query (the
    /// `Quadrant` values make them valid by construction).  An all-vacant
    /// snapshot short-circuits to a single off command — it never drives
    /// the relay once per quadrant.
    pub fn manage_light_level(
        &mut self,
        hw: &mut (impl OccupancyPort + LightSensorPort + RelayPort),
        sink: &mut impl EventSink,
    ) {
        let mut snapshot = [false; Quadrant::COUNT];
        let mut mask = 0u8;
        for quadrant in Quadrant::ALL {
            let occupied = hw.is_occupied(quadrant);
            snapshot[quadrant.index()] = occupied;
            if occupied {
                mask |= quadrant.mask();
            }
        }
        let lux = hw.read_lux();

        self.last_occupancy_mask = mask;
        self.last_lux = lux;

        let occupied = lighting::any_occupied(snapshot);
        let Some(cmd) = lighting::decide(self.state, occupied, lux, &self.config) else {
            return;
        };

        hw.set(SensorChannel::LightRelay, cmd.is_on());
        self.state = cmd.apply(self.state);

        info!(
            "light {} (occupied={}, lux={:.0})",
            if self.state.light_on { "on" } else { "off" },
            occupied,
            lux
        );
        sink.emit(&AppEvent::LightChanged {
            on: self.state.light_on,
        });
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full decision poll: blind schedule first, then lighting.
    ///
    /// The `hw` parameter satisfies every sensor and actuator port — this
    /// avoids a double mutable borrow while keeping the port boundary
    /// explicit.  The caller owns the cadence; nothing here sleeps.
    pub fn poll(
        &mut self,
        hw: &mut (impl OccupancyPort + ClockPort + LightSensorPort + BlindPort + RelayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        self.manage_blinds_based_on_time(hw, sink);
        self.manage_light_level(hw, sink);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (from the timer loop, serial, etc.).
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut (impl OccupancyPort + ClockPort + LightSensorPort + BlindPort + RelayPort),
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::PollNow => self.poll(hw, sink),
            AppCommand::ManageBlinds => self.manage_blinds_based_on_time(hw, sink),
            AppCommand::ManageLight => self.manage_light_level(hw, sink),
            AppCommand::UpdateConfig(config) => {
                self.config = config;
                info!("configuration updated at runtime");
                sink.emit(&AppEvent::ConfigUpdated);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            blinds_open: self.state.blinds_open,
            light_on: self.state.light_on,
            lux: self.last_lux,
            occupancy_mask: self.last_occupancy_mask,
            tick_count: self.tick_count,
        }
    }

    /// Current controller state (last-commanded actuator positions).
    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn blinds_open(&self) -> bool {
        self.state.blinds_open
    }

    pub fn light_on(&self) -> bool {
        self.state.light_on
    }

    /// Total decision polls executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct CountingOccupancy {
        reads: usize,
    }

    impl OccupancyPort for CountingOccupancy {
        fn is_occupied(&mut self, _quadrant: Quadrant) -> bool {
            self.reads += 1;
            true
        }
    }

    struct NullSink;
    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    #[test]
    fn invalid_channel_fails_before_any_sensor_read() {
        let mut app = OfficeService::new(SystemConfig::default());
        let mut hw = CountingOccupancy { reads: 0 };

        let result = app.check_quadrant_occupancy(SensorChannel::LightRelay, &mut hw);
        assert_eq!(
            result,
            Err(Error::InvalidChannel(SensorChannel::LightRelay))
        );
        assert_eq!(hw.reads, 0, "validation must precede every driver read");
        assert_eq!(app.state(), ControllerState::new());
    }

    #[test]
    fn valid_channels_pass_the_reading_through() {
        let mut app = OfficeService::new(SystemConfig::default());
        let mut hw = CountingOccupancy { reads: 0 };

        for quadrant in Quadrant::ALL {
            let channel = SensorChannel::from(quadrant);
            assert_eq!(app.check_quadrant_occupancy(channel, &mut hw), Ok(true));
        }
        assert_eq!(hw.reads, 4);
    }

    #[test]
    fn telemetry_reflects_power_on_state() {
        let app = OfficeService::new(SystemConfig::default());
        let t = app.build_telemetry();
        assert!(!t.blinds_open);
        assert!(!t.light_on);
        assert_eq!(t.occupancy_mask, 0);
        assert_eq!(t.tick_count, 0);
    }
}
