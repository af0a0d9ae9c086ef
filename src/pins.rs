//! GPIO / peripheral pin assignments for the OfficeCtl main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Occupancy sensors (HC-SR501 PIR, one per office quadrant)
// ---------------------------------------------------------------------------

/// Digital input: HIGH = presence detected in quadrant 1 (north-east).
pub const PIR_QUADRANT1_GPIO: i32 = 11;
/// Digital input: HIGH = presence detected in quadrant 2 (north-west).
pub const PIR_QUADRANT2_GPIO: i32 = 12;
/// Digital input: HIGH = presence detected in quadrant 3 (south-west).
pub const PIR_QUADRANT3_GPIO: i32 = 13;
/// Digital input: HIGH = presence detected in quadrant 4 (south-east).
pub const PIR_QUADRANT4_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// Light relay (ceiling luminaire, opto-isolated relay module, active HIGH)
// ---------------------------------------------------------------------------

pub const LIGHT_RELAY_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Blind servo (SG90-class, LEDC PWM)
// ---------------------------------------------------------------------------

/// LEDC PWM output for the blind positioning servo.
pub const SERVO_PWM_GPIO: i32 = 18;
/// Servo frame rate — standard 50 Hz (20 ms frame).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// LEDC timer resolution for the servo channel (13-bit: 0 – 8191 counts).
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 13;

// ---------------------------------------------------------------------------
// I²C bus (DS3231 RTC + VEML7700 ambient light sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
/// Standard-mode bus clock; both peripherals are 400 kHz capable but the
/// wiring run to the window frame is long.
pub const I2C_FREQ_HZ: u32 = 100_000;
