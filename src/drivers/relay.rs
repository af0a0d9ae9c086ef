//! Light relay driver over an `embedded-hal` output pin.
//!
//! The relay module is active HIGH and opto-isolated; the driver is a dumb
//! actuator with no feedback.  It is generic over
//! [`OutputPin`] so the same code drives an ESP-IDF pin on target and a
//! plain in-memory pin in host tests.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct RelayDriver<P: OutputPin> {
    pin: P,
    energised: bool,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            energised: false,
        }
    }

    /// Drive the relay coil.  Fire-and-forget; a failed GPIO write is
    /// logged and leaves the tracked state untouched.
    pub fn set(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            warn!("relay: GPIO write failed");
            return;
        }
        self.energised = on;
    }

    /// Last coil state this driver successfully commanded.
    pub fn is_energised(&self) -> bool {
        self.energised
    }
}

// ── Host-side pin ─────────────────────────────────────────────

/// In-memory pin for host tests and simulation.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct SimPin {
    pub level: bool,
}

#[cfg(not(target_os = "espidf"))]
impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

#[cfg(not(target_os = "espidf"))]
impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level = true;
        Ok(())
    }
}
