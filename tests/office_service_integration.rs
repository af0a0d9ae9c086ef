//! Integration tests: OfficeService → policy → actuator ports.
//!
//! Every test drives the service through mock ports that record the full
//! actuator call history, so idempotence means "no second call", not just
//! "same end state".

use officectl::app::events::AppEvent;
use officectl::app::ports::{
    BlindPort, ClockPort, EventSink, LightSensorPort, OccupancyPort, RelayPort,
};
use officectl::app::service::OfficeService;
use officectl::channels::{Quadrant, SensorChannel};
use officectl::config::SystemConfig;
use officectl::error::Error;
use time::PrimitiveDateTime;
use time::macros::datetime;

// ── Mock implementations ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum ActCall {
    BlindAngle(u8),
    Relay { on: bool },
}

struct MockHw {
    occupancy: [bool; 4],
    lux: f32,
    now: PrimitiveDateTime,
    occupancy_reads: usize,
    calls: Vec<ActCall>,
}

impl MockHw {
    fn new() -> Self {
        Self {
            occupancy: [false; 4],
            lux: 1000.0,
            // A Monday, mid-morning.
            now: datetime!(2024-01-01 10:00),
            occupancy_reads: 0,
            calls: Vec::new(),
        }
    }

    fn blind_calls(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActCall::BlindAngle(angle) => Some(*angle),
                ActCall::Relay { .. } => None,
            })
            .collect()
    }

    fn relay_calls(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActCall::Relay { on } => Some(*on),
                ActCall::BlindAngle(_) => None,
            })
            .collect()
    }
}

impl OccupancyPort for MockHw {
    fn is_occupied(&mut self, quadrant: Quadrant) -> bool {
        self.occupancy_reads += 1;
        self.occupancy[quadrant.index()]
    }
}

impl ClockPort for MockHw {
    fn now(&mut self) -> PrimitiveDateTime {
        self.now
    }
}

impl LightSensorPort for MockHw {
    fn read_lux(&mut self) -> f32 {
        self.lux
    }
}

impl BlindPort for MockHw {
    fn set_angle(&mut self, angle: u8) {
        self.calls.push(ActCall::BlindAngle(angle));
    }
}

impl RelayPort for MockHw {
    fn set(&mut self, channel: SensorChannel, on: bool) {
        assert_eq!(
            channel,
            SensorChannel::LightRelay,
            "relay commands must address the light relay channel"
        );
        self.calls.push(ActCall::Relay { on });
    }
}

struct LogSink {
    events: Vec<String>,
}

impl LogSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(format!("{:?}", e));
    }
}

fn make_app() -> (OfficeService, MockHw, LogSink) {
    let mut app = OfficeService::new(SystemConfig::default());
    let hw = MockHw::new();
    let mut sink = LogSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

// ── Occupancy query ───────────────────────────────────────────

#[test]
fn occupancy_readings_pass_through_unmodified() {
    let (mut app, mut hw, _sink) = make_app();
    hw.occupancy = [true, true, false, true];

    for (quadrant, expected) in Quadrant::ALL.into_iter().zip([true, true, false, true]) {
        let channel = SensorChannel::from(quadrant);
        assert_eq!(
            app.check_quadrant_occupancy(channel, &mut hw),
            Ok(expected),
            "reading for {quadrant} must come back verbatim"
        );
    }
    assert_eq!(hw.occupancy_reads, 4);
}

#[test]
fn light_relay_channel_is_rejected_without_a_read() {
    let (mut app, mut hw, _sink) = make_app();
    hw.occupancy = [true; 4];

    let result = app.check_quadrant_occupancy(SensorChannel::LightRelay, &mut hw);
    assert_eq!(
        result,
        Err(Error::InvalidChannel(SensorChannel::LightRelay))
    );
    assert_eq!(hw.occupancy_reads, 0, "no sensor may be touched");
    assert!(hw.calls.is_empty());
    assert!(!app.blinds_open());
    assert!(!app.light_on());
}

// ── Blind schedule ────────────────────────────────────────────

#[test]
fn weekday_hour_8_opens_the_blind_exactly_once() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-01 08:00); // Monday

    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert_eq!(hw.blind_calls(), vec![12]);
    assert!(app.blinds_open());

    // Second immediate call: no actuator traffic.
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert_eq!(hw.blind_calls(), vec![12]);
    assert!(app.blinds_open());
}

#[test]
fn weekday_hour_20_closes_an_open_blind() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-01 09:00);
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert!(app.blinds_open());

    hw.now = datetime!(2024-01-01 20:00);
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert_eq!(hw.blind_calls(), vec![12, 2]);
    assert!(!app.blinds_open());

    // Already closed outside the window: silent at 21:00 and next-day 07:00.
    hw.now = datetime!(2024-01-01 21:00);
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    hw.now = datetime!(2024-01-02 07:00);
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert_eq!(hw.blind_calls(), vec![12, 2]);
}

#[test]
fn weekend_never_actuates_or_mutates() {
    let (mut app, mut hw, mut sink) = make_app();

    // Open the blind on Friday so the weekend has something to tempt it.
    hw.now = datetime!(2024-01-05 10:00); // Friday
    app.manage_blinds_based_on_time(&mut hw, &mut sink);
    assert!(app.blinds_open());
    let calls_before = hw.calls.len();

    // 2024-01-06 Saturday, 2024-01-07 Sunday: every hour is a no-op.
    for day in [6, 7] {
        for hour in 0..24u8 {
            hw.now = PrimitiveDateTime::new(
                time::Date::from_calendar_date(2024, time::Month::January, day).unwrap(),
                time::Time::from_hms(hour, 30, 0).unwrap(),
            );
            app.manage_blinds_based_on_time(&mut hw, &mut sink);
        }
    }
    assert_eq!(hw.calls.len(), calls_before);
    assert!(app.blinds_open(), "weekend must not mutate blind state");
}

// ── Light level management ────────────────────────────────────

#[test]
fn occupied_and_dim_turns_the_light_on_once() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.occupancy = [false, false, true, false];
    hw.lux = 499.0;

    app.manage_light_level(&mut hw, &mut sink);
    assert_eq!(hw.relay_calls(), vec![true]);
    assert!(app.light_on());

    // Same inputs again: no second relay command.
    app.manage_light_level(&mut hw, &mut sink);
    assert_eq!(hw.relay_calls(), vec![true]);
}

#[test]
fn bright_room_turns_the_light_off() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.occupancy = [true; 4];
    hw.lux = 300.0;
    app.manage_light_level(&mut hw, &mut sink);
    assert!(app.light_on());

    hw.lux = 551.0;
    app.manage_light_level(&mut hw, &mut sink);
    assert_eq!(hw.relay_calls(), vec![true, false]);
    assert!(!app.light_on());
}

#[test]
fn threshold_lux_never_turns_the_light_on() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.occupancy = [true, false, false, false];

    hw.lux = 500.0;
    app.manage_light_level(&mut hw, &mut sink);
    hw.lux = 550.0;
    app.manage_light_level(&mut hw, &mut sink);

    assert!(hw.relay_calls().is_empty(), "500 lux is already too bright");
    assert!(!app.light_on());
}

#[test]
fn vacancy_turns_off_only_a_lit_light() {
    let (mut app, mut hw, mut sink) = make_app();

    // All vacant, dark, light off: the off path must stay silent.
    hw.occupancy = [false; 4];
    hw.lux = 100.0;
    app.manage_light_level(&mut hw, &mut sink);
    assert!(hw.relay_calls().is_empty());

    // Light on, then everyone leaves: exactly one off command, even
    // though four quadrants were read within the call.
    hw.occupancy = [false, true, false, false];
    app.manage_light_level(&mut hw, &mut sink);
    assert!(app.light_on());

    hw.occupancy = [false; 4];
    let reads_before = hw.occupancy_reads;
    app.manage_light_level(&mut hw, &mut sink);
    assert_eq!(hw.occupancy_reads, reads_before + 4);
    assert_eq!(hw.relay_calls(), vec![true, false]);
    assert!(!app.light_on());
}

// ── Polling orchestration ─────────────────────────────────────

#[test]
fn repeated_polls_with_stable_inputs_settle_after_one_pass() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-03 09:00); // Wednesday
    hw.occupancy = [true, false, false, false];
    hw.lux = 200.0;

    for _ in 0..5 {
        app.poll(&mut hw, &mut sink);
    }

    assert_eq!(hw.blind_calls(), vec![12]);
    assert_eq!(hw.relay_calls(), vec![true]);
    assert_eq!(app.tick_count(), 5);
}

#[test]
fn events_are_emitted_per_transition() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-03 09:00);
    hw.occupancy = [true; 4];
    hw.lux = 100.0;

    app.poll(&mut hw, &mut sink);
    app.poll(&mut hw, &mut sink);

    let blinds_events = sink
        .events
        .iter()
        .filter(|e| e.contains("BlindsChanged"))
        .count();
    let light_events = sink
        .events
        .iter()
        .filter(|e| e.contains("LightChanged"))
        .count();
    assert_eq!(blinds_events, 1);
    assert_eq!(light_events, 1);
}

#[test]
fn telemetry_tracks_the_last_snapshot() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-03 09:00);
    hw.occupancy = [true, false, true, false];
    hw.lux = 420.0;

    app.poll(&mut hw, &mut sink);
    let t = app.build_telemetry();
    assert!(t.blinds_open);
    assert!(t.light_on);
    assert_eq!(t.occupancy_mask, 0b0101);
    assert!((t.lux - 420.0).abs() < f32::EPSILON);
    assert_eq!(t.tick_count, 1);
}

// ── Command handling ──────────────────────────────────────────

#[test]
fn update_config_changes_policy_at_runtime() {
    use officectl::app::commands::AppCommand;

    let (mut app, mut hw, mut sink) = make_app();
    hw.now = datetime!(2024-01-03 06:00); // before the default window
    app.handle_command(AppCommand::ManageBlinds, &mut hw, &mut sink);
    assert!(hw.blind_calls().is_empty());

    let early_start = SystemConfig {
        open_hour: 6,
        ..SystemConfig::default()
    };
    app.handle_command(AppCommand::UpdateConfig(early_start), &mut hw, &mut sink);
    app.handle_command(AppCommand::PollNow, &mut hw, &mut sink);
    assert_eq!(hw.blind_calls(), vec![12]);
    assert_eq!(app.current_config().open_hour, 6);
}
