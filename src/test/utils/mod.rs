pub mod mock_sensors;
pub mod mock_time;

use crate::{
    config::{Config, Variant},
    error::AppError,
    irrigation::{ds::AppState, irrigation_system::IrrigationSystem},
};
use mock_outputs::{set_actuators0, set_display0, set_serial0, MockActuators, MockSerialOut, MockStatusDisplay};
use mock_sensors::MockSoilSensors;
use mock_time::MockTimeProvider;
use std::sync::Arc;

pub fn mock_config(variant: Variant, climate_json: Option<&str>) -> Config {
    let mut cfg = Config::default();
    cfg.controller.variant = variant;
    if let Some(json) = climate_json {
        cfg.climate.json = json.to_owned();
    }
    cfg
}

pub fn set_app_state(
    sensors: Arc<MockSoilSensors>, actuators: Arc<MockActuators>, display: Arc<MockStatusDisplay>,
    serial: Arc<MockSerialOut>, time_provider: Arc<MockTimeProvider>,
) -> Arc<AppState> {
    AppState::new(sensors, actuators, display, serial, time_provider)
}

/// System over the given board with permissive outputs.
pub fn set_ws0(
    start_time: i64, sensors: Arc<MockSoilSensors>, cfg: &Config,
) -> Result<(IrrigationSystem, Arc<MockTimeProvider>), AppError> {
    let time_provider = Arc::new(MockTimeProvider::new(start_time));
    let app_state = set_app_state(sensors, set_actuators0(), set_display0(), set_serial0(), time_provider.clone());
    Ok((IrrigationSystem::new(&app_state, cfg)?, time_provider))
}

pub fn set_ws(
    start_time: i64, sensors: Arc<MockSoilSensors>, actuators: Arc<MockActuators>, display: Arc<MockStatusDisplay>,
    cfg: &Config,
) -> Result<(IrrigationSystem, Arc<MockTimeProvider>), AppError> {
    set_ws_serial(start_time, sensors, actuators, display, set_serial0(), cfg)
}

/// Like `set_ws`, with the serial console under test as well.
pub fn set_ws_serial(
    start_time: i64, sensors: Arc<MockSoilSensors>, actuators: Arc<MockActuators>, display: Arc<MockStatusDisplay>,
    serial: Arc<MockSerialOut>, cfg: &Config,
) -> Result<(IrrigationSystem, Arc<MockTimeProvider>), AppError> {
    let time_provider = Arc::new(MockTimeProvider::new(start_time));
    let app_state = set_app_state(sensors, actuators, display, serial, time_provider.clone());
    Ok((IrrigationSystem::new(&app_state, cfg)?, time_provider))
}
