//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions, the servo LEDC timer/channel, and the I²C
//! bus using raw ESP-IDF sys calls.  Called once from `main()` before the
//! event loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed,
    I2cInitFailed(i32),
    IsrInstallFailed(i32),
    TimerInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed => write!(f, "LEDC timer/channel config failed"),
            Self::I2cInitFailed(rc) => write!(f, "I2C master init failed (rc={})", rc),
            Self::IsrInstallFailed(rc) => write!(f, "GPIO ISR service install failed (rc={})", rc),
            Self::TimerInitFailed(rc) => write!(f, "poll timer init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before event loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_ledc()?;
        init_i2c()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    let input_pins = [
        pins::PIR_QUADRANT1_GPIO,
        pins::PIR_QUADRANT2_GPIO,
        pins::PIR_QUADRANT3_GPIO,
        pins::PIR_QUADRANT4_GPIO,
    ];

    for &pin in &input_pins {
        // PIR modules push-pull their output; pull-down keeps a detached
        // sensor reading "vacant" instead of floating.
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    info!("hw_init: GPIO inputs configured (PIR ×4)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

// ── LEDC PWM (blind servo) ───────────────────────────────────

pub const LEDC_CH_SERVO: u32 = 0;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    // Timer 0: servo frame (50 Hz, 13-bit)
    // SAFETY: Called from single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_13_BIT,
        freq_hz: pins::SERVO_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed);
    }

    // Channel 0: servo PWM
    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: ledc_channel_t_LEDC_CHANNEL_0,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pins::SERVO_PWM_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed);
    }

    info!("hw_init: LEDC configured (servo=CH0 @ 50Hz)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u32) {
    // SAFETY: LEDC channel was configured in init_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        esp_idf_svc::sys::ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty);
        esp_idf_svc::sys::ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u32) {}

// ── I²C master (DS3231 + VEML7700) ───────────────────────────

#[cfg(target_os = "espidf")]
const I2C_PORT: i32 = 0;
#[cfg(target_os = "espidf")]
const I2C_TIMEOUT_TICKS: u32 = 100;

#[cfg(target_os = "espidf")]
unsafe fn init_i2c() -> Result<(), HwInitError> {
    let cfg = i2c_config_t {
        mode: i2c_mode_t_I2C_MODE_MASTER,
        sda_io_num: pins::I2C_SDA_GPIO,
        scl_io_num: pins::I2C_SCL_GPIO,
        sda_pullup_en: true,
        scl_pullup_en: true,
        __bindgen_anon_1: i2c_config_t__bindgen_ty_1 {
            master: i2c_config_t__bindgen_ty_1__bindgen_ty_1 {
                clk_speed: pins::I2C_FREQ_HZ,
            },
        },
        ..Default::default()
    };

    // SAFETY: single init-path call; port 0 is not used elsewhere.
    let ret = unsafe { i2c_param_config(I2C_PORT, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }
    let ret = unsafe { i2c_driver_install(I2C_PORT, i2c_mode_t_I2C_MODE_MASTER, 0, 0, 0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }

    info!("hw_init: I2C master configured (DS3231 + VEML7700)");
    Ok(())
}

/// Burst-read consecutive registers starting at `start_reg`.
/// Returns `false` on any bus error.
#[cfg(target_os = "espidf")]
pub fn i2c_read_regs(addr: u8, start_reg: u8, buf: &mut [u8]) -> bool {
    // SAFETY: the I2C driver was installed in init_i2c(); only the main
    // loop touches the bus, so transactions never interleave.
    let ret = unsafe {
        i2c_master_write_read_device(
            I2C_PORT,
            addr,
            &start_reg,
            1,
            buf.as_mut_ptr(),
            buf.len(),
            I2C_TIMEOUT_TICKS,
        )
    };
    ret == ESP_OK as i32
}

/// Read one little-endian u16 register.
#[cfg(target_os = "espidf")]
pub fn i2c_read_reg_u16_le(addr: u8, reg: u8) -> Option<u16> {
    let mut buf = [0u8; 2];
    if !i2c_read_regs(addr, reg, &mut buf) {
        return None;
    }
    Some(u16::from_le_bytes(buf))
}

/// Write one little-endian u16 register.  Returns `false` on bus error.
#[cfg(target_os = "espidf")]
pub fn i2c_write_reg_u16_le(addr: u8, reg: u8, value: u16) -> bool {
    let [lo, hi] = value.to_le_bytes();
    let frame = [reg, lo, hi];
    // SAFETY: see i2c_read_regs.
    let ret = unsafe {
        i2c_master_write_to_device(I2C_PORT, addr, frame.as_ptr(), frame.len(), I2C_TIMEOUT_TICKS)
    };
    ret == ESP_OK as i32
}

// ── GPIO ISR Service (PIR edges) ─────────────────────────────

#[cfg(target_os = "espidf")]
use crate::events::{Event, push_event};

#[cfg(target_os = "espidf")]
unsafe extern "C" fn pir_gpio_isr(_arg: *mut core::ffi::c_void) {
    // Any PIR edge: wake the main loop for an early lighting re-evaluation.
    push_event(Event::OccupancyChanged);
}

/// Install the GPIO ISR service and register a handler on every PIR pin.
/// Call after init_peripherals() and before the event loop.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<(), HwInitError> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable).  The handler registered
    // below only pushes to the lock-free event queue.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK && ret != ESP_ERR_INVALID_STATE {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        for quadrant in crate::channels::Quadrant::ALL {
            let pin = quadrant.gpio();
            gpio_set_intr_type(pin, gpio_int_type_t_GPIO_INTR_ANYEDGE);
            gpio_isr_handler_add(pin, Some(pir_gpio_isr), core::ptr::null_mut());
            gpio_intr_enable(pin);
        }

        info!("hw_init: ISR service installed (PIR ×4)");
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}

// ── Poll timer ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut POLL_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn poll_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::ControlTick);
}

/// Start the periodic control-poll timer.
///
/// The callback executes in the ESP timer task context (not ISR), so it
/// can safely call `push_event()`.
#[cfg(target_os = "espidf")]
pub fn start_poll_timer(interval_ms: u32) -> Result<(), HwInitError> {
    // SAFETY: POLL_TIMER is written here once at boot from the single
    // main-task context before any timer callbacks fire.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(poll_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"poll\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut POLL_TIMER);
        if ret != ESP_OK {
            return Err(HwInitError::TimerInitFailed(ret));
        }
        let ret = esp_timer_start_periodic(POLL_TIMER, u64::from(interval_ms) * 1000);
        if ret != ESP_OK {
            return Err(HwInitError::TimerInitFailed(ret));
        }
    }
    info!("hw_init: poll timer started ({} ms)", interval_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_poll_timer(_interval_ms: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): poll timer not started (events driven by sleep loop)");
    Ok(())
}
