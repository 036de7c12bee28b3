use crate::{decision::ds::SoilReading, error::AppError};
use tracing::warn;

pub const ADC_MAX: u16 = 4095;
pub const PH_SCALE_MAX: f32 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Raw board inputs. The nutrient buttons pull to ground when pressed.
pub trait SoilSensors: Send + Sync {
    fn phosphorus_pin(&self) -> Result<PinLevel, AppError>;
    fn potassium_pin(&self) -> Result<PinLevel, AppError>;
    /// 12-bit light sensor standing in for a pH probe
    fn ph_adc(&self) -> Result<u16, AppError>;
    /// soil humidity percent from the humidity/temperature driver
    fn humidity(&self) -> Result<f32, AppError>;
    /// air temperature °C from the same driver
    fn temperature(&self) -> Result<f32, AppError>;
}

/// Active low: a grounded pin means the nutrient is present.
pub fn is_present(level: PinLevel) -> bool {
    level == PinLevel::Low
}

pub fn ph_from_adc(raw: u16) -> f32 {
    (raw.min(ADC_MAX) as f32 / ADC_MAX as f32) * PH_SCALE_MAX
}

/// Reads every input once. Any failed read flags the reading as a sensor fault so
/// the decision never runs the rules on a guessed value. A failed analog read
/// also becomes NaN; a failed presence pin reads as absent.
pub fn sample(sensors: &dyn SoilSensors, rain_forecast: bool) -> SoilReading {
    let mut sensor_fault = false;
    let phosphorus_present = read_presence(sensors.phosphorus_pin(), "phosphorus", &mut sensor_fault);
    let potassium_present = read_presence(sensors.potassium_pin(), "potassium", &mut sensor_fault);
    let ph = read_analog(sensors.ph_adc().map(ph_from_adc), "ph", &mut sensor_fault);
    let humidity = read_analog(sensors.humidity(), "humidity", &mut sensor_fault);
    SoilReading { humidity, ph, phosphorus_present, potassium_present, rain_forecast, sensor_fault }
}

fn read_presence(level: Result<PinLevel, AppError>, name: &str, fault: &mut bool) -> bool {
    match level {
        Ok(level) => is_present(level),
        Err(e) => {
            warn!(sensor = name, "{}", e);
            *fault = true;
            false
        }
    }
}

fn read_analog(value: Result<f32, AppError>, name: &str, fault: &mut bool) -> f32 {
    value.unwrap_or_else(|e| {
        warn!(sensor = name, "{}", e);
        *fault = true;
        f32::NAN
    })
}
