//! Light level policy.
//!
//! The room counts as occupied if **any** quadrant reads occupied; the
//! light goes on only when the room is occupied *and* darker than the lux
//! threshold, and goes off when either condition lapses.  The threshold
//! is strict: a reading exactly at the threshold is "bright enough" and
//! never turns the light on.

use super::ControllerState;
use crate::channels::Quadrant;
use crate::config::SystemConfig;

/// A relay transition due now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    On,
    Off,
}

impl LightCommand {
    /// The relay level this command drives.
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// State after the command has been issued to the actuator.
    pub fn apply(self, state: ControllerState) -> ControllerState {
        ControllerState {
            light_on: self.is_on(),
            ..state
        }
    }
}

/// Aggregate occupancy: logical OR over the four quadrant readings.
/// A single occupied quadrant keeps the room "occupied"; the vacancy
/// path requires all four to read false at once.
pub fn any_occupied(snapshot: [bool; Quadrant::COUNT]) -> bool {
    snapshot.iter().any(|&occupied| occupied)
}

/// Decide the relay transition for one occupancy/lux sample, if any.
///
/// The off path fires for *either* reason — everyone left, or the room is
/// bright enough — but only when the light is actually on, so an
/// all-vacant snapshot yields at most one off command per held state.
pub fn decide(
    state: ControllerState,
    occupied: bool,
    lux: f32,
    config: &SystemConfig,
) -> Option<LightCommand> {
    if occupied && lux < config.lux_threshold && !state.light_on {
        return Some(LightCommand::On);
    }
    if (!occupied || lux >= config.lux_threshold) && state.light_on {
        return Some(LightCommand::Off);
    }
    None
}
