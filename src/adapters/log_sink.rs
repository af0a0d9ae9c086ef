//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A future building-bus
//! adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                // One JSON object per line — trivially machine-scrapable.
                let line = serde_json::to_string(t).unwrap_or_default();
                info!("TELEM | {}", line);
            }
            AppEvent::BlindsChanged { open, angle } => {
                info!(
                    "BLINDS | {} (angle {})",
                    if *open { "open" } else { "closed" },
                    angle
                );
            }
            AppEvent::LightChanged { on } => {
                info!("LIGHT | {}", if *on { "on" } else { "off" });
            }
            AppEvent::ConfigUpdated => {
                info!("CONFIG | updated");
            }
            AppEvent::Started => {
                info!("START | controller online");
            }
        }
    }
}
