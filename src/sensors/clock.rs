//! DS3231 real-time clock (I²C, BCD register file).
//!
//! The blind schedule needs local weekday and hour; the DS3231 keeps full
//! calendar time through power cycles on its coin cell.  Registers 0x00
//! through 0x06 hold seconds/minutes/hours/weekday/day/month/year in BCD;
//! the decode is pure and host-tested.  Weekday is derived from the
//! calendar date rather than the chip's free-running day counter.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the register file over I²C via hw_init helpers.
//! On host/test: reads a static unix-timestamp atomic for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicI64, Ordering};

use time::{Date, Month, PrimitiveDateTime, Time};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// 7-bit I²C address of the DS3231.
pub const DS3231_ADDR: u8 = 0x68;
/// First timekeeping register (seconds).
#[cfg(target_os = "espidf")]
const REG_SECONDS: u8 = 0x00;

#[cfg(not(target_os = "espidf"))]
static SIM_UNIX_SECS: AtomicI64 = AtomicI64::new(0);

/// Inject a wall-clock sample for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_datetime(datetime: PrimitiveDateTime) {
    SIM_UNIX_SECS.store(datetime.assume_utc().unix_timestamp(), Ordering::Relaxed);
}

/// Decode one BCD byte (two packed decimal digits).
pub fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Decode the seven DS3231 timekeeping registers into a calendar datetime.
///
/// Returns `None` for register contents that do not form a valid date —
/// a fresh chip with a dead coin cell can hold anything.
pub fn decode_datetime(regs: &[u8; 7]) -> Option<PrimitiveDateTime> {
    let second = bcd_to_dec(regs[0] & 0x7F);
    let minute = bcd_to_dec(regs[1] & 0x7F);
    // Bit 6 low = 24-hour mode, which hw_init configures at boot.
    let hour = bcd_to_dec(regs[2] & 0x3F);
    // regs[3] is the chip's weekday counter — unused; the date is authoritative.
    let day = bcd_to_dec(regs[4] & 0x3F);
    let month = bcd_to_dec(regs[5] & 0x1F);
    let year = 2000 + i32::from(bcd_to_dec(regs[6]));

    let month = Month::try_from(month).ok()?;
    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = Time::from_hms(hour, minute, second).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

pub struct RtcClock {
    _addr: u8,
}

impl RtcClock {
    pub fn new() -> Self {
        Self { _addr: DS3231_ADDR }
    }

    /// Current local date and time.
    ///
    /// Falls back to midnight (and logs) if the chip returns an
    /// undecodable register file — hour 0 is outside the workday window,
    /// so the blinds fail safe to "closed".
    pub fn now(&mut self) -> PrimitiveDateTime {
        self.read_datetime().unwrap_or_else(|| {
            log::warn!("ds3231: undecodable register file, using fallback");
            PrimitiveDateTime::MIN
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_datetime(&self) -> Option<PrimitiveDateTime> {
        let mut regs = [0u8; 7];
        if !hw_init::i2c_read_regs(DS3231_ADDR, REG_SECONDS, &mut regs) {
            return None;
        }
        decode_datetime(&regs)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_datetime(&self) -> Option<PrimitiveDateTime> {
        let secs = SIM_UNIX_SECS.load(Ordering::Relaxed);
        let odt = time::OffsetDateTime::from_unix_timestamp(secs).ok()?;
        Some(PrimitiveDateTime::new(odt.date(), odt.time()))
    }
}
