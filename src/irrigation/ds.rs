use crate::{
    actuators::interface::Actuators,
    report::{display::StatusDisplay, serial::SerialOut},
    sensors::interface::SoilSensors,
    time::TimeProvider,
};
use std::sync::Arc;

/// The collaborators around the decision: board inputs, outputs, display, serial
/// console and clock.
#[derive(Clone)]
pub struct AppState {
    pub sensors: Arc<dyn SoilSensors>,
    pub actuators: Arc<dyn Actuators>,
    pub display: Arc<dyn StatusDisplay>,
    pub serial: Arc<dyn SerialOut>,
    pub time_provider: Arc<dyn TimeProvider>,
}

impl AppState {
    pub fn new(
        sensors: Arc<dyn SoilSensors>, actuators: Arc<dyn Actuators>, display: Arc<dyn StatusDisplay>,
        serial: Arc<dyn SerialOut>, time_provider: Arc<dyn TimeProvider>,
    ) -> Arc<Self> {
        Arc::new(Self { sensors, actuators, display, serial, time_provider })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub cycles: u64,
    pub irrigating: u64,
    pub faults: u64,
}
