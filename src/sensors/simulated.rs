use super::interface::{PinLevel, SoilSensors, ADC_MAX};
use crate::error::AppError;
use std::sync::atomic::{AtomicU32, Ordering};

const HUMIDITY_MIN: f32 = 10.;
const HUMIDITY_MAX: f32 = 90.;
const HUMIDITY_PERIOD: u32 = 40;
const PH_PERIOD: u32 = 64;
const PHOSPHORUS_PERIOD: u32 = 7;
const POTASSIUM_PERIOD: u32 = 11;

/// Deterministic board for running without hardware.
///
/// Every humidity read moves the simulation one step: humidity follows a triangle
/// wave between 10 and 90 %, the pH ADC a slower one, and each nutrient button
/// flips on its own period.
#[derive(Debug, Default)]
pub struct SimulatedSensors {
    step: AtomicU32,
}

impl SimulatedSensors {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> u32 {
        self.step.load(Ordering::Relaxed)
    }
}

/// 0..=1..=0 over `period` steps
fn triangle(step: u32, period: u32) -> f32 {
    let half = period as f32 / 2.;
    let pos = (step % period) as f32;
    if pos <= half {
        pos / half
    } else {
        (period as f32 - pos) / half
    }
}

fn button(step: u32, period: u32) -> PinLevel {
    if (step / period) % 2 == 0 {
        PinLevel::High
    } else {
        PinLevel::Low
    }
}

impl SoilSensors for SimulatedSensors {
    fn phosphorus_pin(&self) -> Result<PinLevel, AppError> {
        Ok(button(self.current(), PHOSPHORUS_PERIOD))
    }

    fn potassium_pin(&self) -> Result<PinLevel, AppError> {
        Ok(button(self.current(), POTASSIUM_PERIOD))
    }

    fn ph_adc(&self) -> Result<u16, AppError> {
        Ok((triangle(self.current(), PH_PERIOD) * ADC_MAX as f32).round() as u16)
    }

    fn humidity(&self) -> Result<f32, AppError> {
        let step = self.step.fetch_add(1, Ordering::Relaxed);
        Ok(HUMIDITY_MIN + triangle(step, HUMIDITY_PERIOD) * (HUMIDITY_MAX - HUMIDITY_MIN))
    }

    fn temperature(&self) -> Result<f32, AppError> {
        Ok(22. + 4. * triangle(self.current(), PH_PERIOD))
    }
}
