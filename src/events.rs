//! Interrupt-to-main-loop event plumbing.
//!
//! Events are produced by:
//! - GPIO ISRs (PIR edges on any quadrant)
//! - Timer callbacks (periodic control tick)
//! - Software (telemetry cadence)
//!
//! Events are consumed by the main control loop, which drains them one at
//! a time in FIFO order.  The queue is a fixed-capacity lock-free MPMC
//! ring, safe to push from ISR context.

use heapless::mpmc::MpMcQueue;

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 16;

/// System event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Control loop tick — run one full decision poll.
    ControlTick,
    /// A PIR sensor saw an edge; re-evaluate lighting ahead of the next tick.
    OccupancyChanged,
    /// Telemetry report timer fired.
    TelemetryTick,
}

// ── Lock-free event queue ─────────────────────────────────────

/// Fixed-capacity MPMC event queue.  Instantiable so tests can use a local
/// queue; production code goes through the module-level [`push_event`] /
/// [`pop_event`] helpers over the shared static.
pub struct EventQueue {
    inner: MpMcQueue<Event, EVENT_QUEUE_CAP>,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            inner: MpMcQueue::new(),
        }
    }

    /// Push an event.  Safe to call from ISR context (lock-free).
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: Event) -> bool {
        self.inner.enqueue(event).is_ok()
    }

    /// Pop the next pending event, oldest first.
    pub fn pop(&self) -> Option<Event> {
        self.inner.dequeue()
    }

    /// Drain all pending events into a callback, FIFO order.
    pub fn drain(&self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }
}

static EVENTS: EventQueue = EventQueue::new();

/// Push an event into the shared queue (ISR-safe).
pub fn push_event(event: Event) -> bool {
    EVENTS.push(event)
}

/// Pop the next event from the shared queue (main loop).
pub fn pop_event() -> Option<Event> {
    EVENTS.pop()
}

/// Drain all pending events from the shared queue.
pub fn drain_events(handler: impl FnMut(Event)) {
    EVENTS.drain(handler);
}
