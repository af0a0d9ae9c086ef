//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the OfficeCtl system:
//! the occupancy query, the blind schedule, and the light-level policy.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
