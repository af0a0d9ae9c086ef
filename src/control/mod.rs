//! Pure decision policy — no I/O, no clocks, no hardware.
//!
//! Each policy function takes the current [`ControllerState`] plus fresh
//! sensor samples and returns `Some(command)` only when a transition is
//! due.  Applying the command yields the next state; the service layer
//! performs the actuator call and commits the state.  Steady-state calls
//! return `None` and must stay silent on the actuators.

pub mod blinds;
pub mod lighting;

/// Last-commanded actuator positions.
///
/// These are the controller's ground truth: the blind and relay offer no
/// position feedback, so the controller trusts its own prior commands and
/// never reads actuator state back.  Both start `false` (blinds closed,
/// light off) at power-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    pub blinds_open: bool,
    pub light_on: bool,
}

impl ControllerState {
    /// Power-on state: blinds closed, light off.
    pub const fn new() -> Self {
        Self {
            blinds_open: false,
            light_on: false,
        }
    }
}
