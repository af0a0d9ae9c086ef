//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (timer loop,
//! serial console, future wall panel) that the
//! [`OfficeService`](super::service::OfficeService) interprets and acts upon.

use crate::config::SystemConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Run a full decision poll now (blinds, then lighting).
    PollNow,

    /// Re-evaluate only the blind schedule.
    ManageBlinds,

    /// Re-evaluate only the lighting policy.
    ManageLight,

    /// Hot-reload configuration at runtime.
    UpdateConfig(SystemConfig),
}
