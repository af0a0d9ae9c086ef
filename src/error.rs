//! Unified error types for the OfficeCtl firmware.
//!
//! The decision core has exactly one failure mode — an occupancy query
//! handed a channel that is not an occupancy input.  That is a
//! configuration fault at the call site, not a transient condition: it is
//! never retried and propagates straight to the caller.  All variants are
//! `Copy` so they pass through the control loop without allocation.

use core::fmt;

use crate::channels::SensorChannel;

/// Every fallible operation in the decision core funnels into this type.
/// Peripheral bring-up has its own error kind in the driver layer
/// ([`HwInitError`](crate::drivers::hw_init::HwInitError)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An occupancy query was given a channel outside the four occupancy
    /// inputs (e.g. the light-relay output).  Fix the call site.
    InvalidChannel(SensorChannel),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(channel) => {
                write!(f, "{channel} is not an occupancy channel")
            }
        }
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
