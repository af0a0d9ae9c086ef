//! OfficeCtl Firmware — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │   HardwareAdapter                      LogEventSink          │
//! │   (Occupancy+Clock+Light+Blind+Relay)  (EventSink)           │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            OfficeService (pure logic)              │      │
//! │  │  occupancy query · blind schedule · light policy   │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
pub mod channels;
pub mod config;
pub mod control;
mod error;
mod events;
mod pins;

mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::events::AppEvent;
use app::service::OfficeService;
use config::SystemConfig;
use drivers::relay::RelayDriver;
use drivers::servo::BlindServo;
use events::Event;
use sensors::SensorHub;
use sensors::clock::RtcClock;
use sensors::light::AmbientLightSensor;
use sensors::occupancy::OccupancyGrid;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("OfficeCtl v{}", env!("CARGO_PKG_VERSION"));

    // ── 1b. Initialise hardware peripherals ───────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        log::error!("ISR init failed: {} — continuing without PIR wakeups", e);
    }

    let config = SystemConfig::default();

    if let Err(e) = drivers::hw_init::start_poll_timer(config.control_loop_interval_ms) {
        log::error!("poll timer failed: {} — continuing without control ticks", e);
    }

    // ── 2. Construct adapters ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    let relay_pin = {
        use esp_idf_hal::gpio::{AnyOutputPin, PinDriver};
        // SAFETY: LIGHT_RELAY_GPIO is not claimed by any other driver.
        PinDriver::output(unsafe { AnyOutputPin::new(pins::LIGHT_RELAY_GPIO) })?
    };
    #[cfg(not(target_os = "espidf"))]
    let relay_pin = drivers::relay::SimPin::default();

    let sensor_hub = SensorHub::new(
        OccupancyGrid::new(),
        AmbientLightSensor::new(),
        RtcClock::new(),
    );
    let mut hw = HardwareAdapter::new(sensor_hub, BlindServo::new(), RelayDriver::new(relay_pin));
    let mut log_sink = LogEventSink::new();

    // ── 3. Construct app service ──────────────────────────────
    let mut service = OfficeService::new(config.clone());
    service.start(&mut log_sink);

    info!("System ready. Entering event loop.");

    // ── 4. Event loop ─────────────────────────────────────────
    let ticks_per_telemetry = (u64::from(config.telemetry_interval_secs) * 1000)
        / u64::from(config.control_loop_interval_ms.max(1));
    let mut telemetry_counter: u64 = 0;

    loop {
        // Simulate the poll timer via sleep on non-espidf targets.
        // On real hardware the esp_timer callback pushes ControlTick and
        // the PIR ISRs push OccupancyChanged.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(
                config.control_loop_interval_ms,
            )));
            events::push_event(Event::ControlTick);
        }
        #[cfg(target_os = "espidf")]
        std::thread::sleep(std::time::Duration::from_millis(20));

        events::drain_events(|event| match event {
            Event::ControlTick => {
                service.poll(&mut hw, &mut log_sink);

                telemetry_counter += 1;
                if telemetry_counter >= ticks_per_telemetry {
                    telemetry_counter = 0;
                    events::push_event(Event::TelemetryTick);
                }
            }

            Event::OccupancyChanged => {
                // Early lighting re-evaluation between ticks; the blind
                // schedule stays on its own cadence.
                service.manage_light_level(&mut hw, &mut log_sink);
            }

            Event::TelemetryTick => {
                log_sink.emit(&AppEvent::Telemetry(service.build_telemetry()));
            }
        });
    }
}
