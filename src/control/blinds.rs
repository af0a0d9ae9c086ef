//! Blind schedule policy.
//!
//! ```text
//!  Mon–Fri, hour in [open, close)   ──▶ blinds OPEN
//!  Mon–Fri, hour outside the window ──▶ blinds CLOSED
//!  Sat/Sun                          ──▶ leave untouched, whatever the hour
//! ```
//!
//! The window is half-open: the open hour itself is "open" territory, the
//! close hour itself is "closed" territory.  A command is produced only
//! when the scheduled position differs from the last-commanded one, so
//! repeated polling in steady state never re-drives the servo.

use time::{PrimitiveDateTime, Weekday};

use super::ControllerState;
use crate::config::SystemConfig;

/// A blind transition due now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindCommand {
    Open,
    Close,
}

impl BlindCommand {
    /// Servo position for this transition, from config.
    pub fn angle(self, config: &SystemConfig) -> u8 {
        match self {
            Self::Open => config.blind_open_angle,
            Self::Close => config.blind_closed_angle,
        }
    }

    /// The `blinds_open` value this command leaves behind.
    pub fn leaves_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// State after the command has been issued to the actuator.
    pub fn apply(self, state: ControllerState) -> ControllerState {
        ControllerState {
            blinds_open: self.leaves_open(),
            ..state
        }
    }
}

/// Decide the blind transition for one time sample, if any.
///
/// Weekends take precedence over every hour rule: Saturday and Sunday
/// produce no command regardless of hour or current state.
pub fn decide(
    state: ControllerState,
    now: PrimitiveDateTime,
    config: &SystemConfig,
) -> Option<BlindCommand> {
    if matches!(now.weekday(), Weekday::Saturday | Weekday::Sunday) {
        return None;
    }

    let in_window = now.hour() >= config.open_hour && now.hour() < config.close_hour;
    match (in_window, state.blinds_open) {
        (true, false) => Some(BlindCommand::Open),
        (false, true) => Some(BlindCommand::Close),
        _ => None,
    }
}
