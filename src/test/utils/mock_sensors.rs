use crate::{
    error::AppError,
    sensors::interface::{PinLevel, SoilSensors},
};
use mockall::mock;
use std::sync::Arc;
use tracing::trace;

mock! {
    pub SoilSensors {}

    impl SoilSensors for SoilSensors {
        fn phosphorus_pin(&self) -> Result<PinLevel, AppError>;
        fn potassium_pin(&self) -> Result<PinLevel, AppError>;
        fn ph_adc(&self) -> Result<u16, AppError>;
        fn humidity(&self) -> Result<f32, AppError>;
        fn temperature(&self) -> Result<f32, AppError>;
    }
}

fn level(present: bool) -> PinLevel {
    if present {
        PinLevel::Low
    } else {
        PinLevel::High
    }
}

/// Board that reports the same values on every read.
pub fn set_sensors(humidity: f32, ph_adc: u16, phosphorus: bool, potassium: bool) -> Arc<MockSoilSensors> {
    let mut mock_sensors = MockSoilSensors::new();
    mock_sensors.expect_phosphorus_pin().times(0..).returning(move || Ok(level(phosphorus)));
    mock_sensors.expect_potassium_pin().times(0..).returning(move || Ok(level(potassium)));
    mock_sensors.expect_ph_adc().times(0..).returning(move || Ok(ph_adc));
    mock_sensors.expect_humidity().times(0..).returning(move || {
        trace!("Mocked humidity {}", humidity);
        Ok(humidity)
    });
    mock_sensors.expect_temperature().times(0..).returning(|| Ok(24.0));
    Arc::new(mock_sensors)
}

/// Board whose humidity driver always fails.
pub fn set_failing_humidity(ph_adc: u16) -> Arc<MockSoilSensors> {
    let mut mock_sensors = MockSoilSensors::new();
    mock_sensors.expect_phosphorus_pin().times(0..).returning(|| Ok(PinLevel::Low));
    mock_sensors.expect_potassium_pin().times(0..).returning(|| Ok(PinLevel::High));
    mock_sensors.expect_ph_adc().times(0..).returning(move || Ok(ph_adc));
    mock_sensors
        .expect_humidity()
        .times(1..)
        .returning(|| Err(AppError::SensorError("humidity read timed out".to_owned())));
    mock_sensors.expect_temperature().times(0..).returning(|| Ok(f32::NAN));
    Arc::new(mock_sensors)
}

/// Board whose phosphorus pin cannot be read while every other input looks
/// like a nutrient-starved soil in the humidity band.
pub fn set_failing_phosphorus(humidity: f32, ph_adc: u16) -> Arc<MockSoilSensors> {
    let mut mock_sensors = MockSoilSensors::new();
    mock_sensors
        .expect_phosphorus_pin()
        .times(1..)
        .returning(|| Err(AppError::SensorError("phosphorus pin not responding".to_owned())));
    mock_sensors.expect_potassium_pin().times(0..).returning(|| Ok(PinLevel::Low));
    mock_sensors.expect_ph_adc().times(0..).returning(move || Ok(ph_adc));
    mock_sensors.expect_humidity().times(0..).returning(move || Ok(humidity));
    mock_sensors.expect_temperature().times(0..).returning(|| Ok(24.0));
    Arc::new(mock_sensors)
}

/// ADC value that maps to roughly pH 6.0.
pub const PH_6_ADC: u16 = 1755;
