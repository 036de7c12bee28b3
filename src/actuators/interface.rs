use crate::{error::AppError, sensors::interface::PinLevel};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Outputs driven once per cycle with the decision.
pub trait Actuators: Send + Sync {
    fn set_relay(&self, on: bool) -> Result<(), AppError>;
    fn set_status_led(&self, on: bool) -> Result<(), AppError>;
}

pub fn relay_level(on: bool, active_low: bool) -> PinLevel {
    if on != active_low {
        PinLevel::High
    } else {
        PinLevel::Low
    }
}

/// Host stand-in for the relay and LED pins. Keeps the logical state, the level
/// the relay pin would be driven to, and logs changes.
#[derive(Debug)]
pub struct LogActuators {
    relay_active_low: bool,
    relay_on: AtomicBool,
    relay_pin_high: AtomicBool,
    led_on: AtomicBool,
}

impl LogActuators {
    /// The relay pin starts at its released level.
    pub fn new(relay_active_low: bool) -> Self {
        Self {
            relay_active_low,
            relay_on: AtomicBool::new(false),
            relay_pin_high: AtomicBool::new(relay_level(false, relay_active_low) == PinLevel::High),
            led_on: AtomicBool::new(false),
        }
    }

    pub fn relay_on(&self) -> bool {
        self.relay_on.load(Ordering::Relaxed)
    }

    pub fn relay_pin(&self) -> PinLevel {
        if self.relay_pin_high.load(Ordering::Relaxed) {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }

    pub fn led_on(&self) -> bool {
        self.led_on.load(Ordering::Relaxed)
    }
}

impl Actuators for LogActuators {
    fn set_relay(&self, on: bool) -> Result<(), AppError> {
        let level = relay_level(on, self.relay_active_low);
        self.relay_pin_high.store(level == PinLevel::High, Ordering::Relaxed);
        if self.relay_on.swap(on, Ordering::Relaxed) != on {
            debug!(output = "relay", on, level = ?level, "Relay switched.");
        }
        Ok(())
    }

    fn set_status_led(&self, on: bool) -> Result<(), AppError> {
        if self.led_on.swap(on, Ordering::Relaxed) != on {
            debug!(output = "led", on, "Status LED switched.");
        }
        Ok(())
    }
}
