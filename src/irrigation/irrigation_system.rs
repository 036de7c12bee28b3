use super::ds::{AppState, CycleStats};
use crate::{
    actuators::interface::Actuators,
    climate::ClimateFeed,
    config::{Config, Variant},
    decision::{
        decide,
        ds::{Cause, Decision, Thresholds},
    },
    error::AppError,
    report::{
        display::{DisplayFrame, StatusDisplay},
        plotter_line,
        serial::SerialOut,
        status_line,
    },
    sensors::interface::{sample, SoilSensors},
    time::TimeProvider,
    utils::display_time,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::{debug, error, info};

pub struct IrrigationSystem {
    pub sensors: Arc<dyn SoilSensors>,
    pub actuators: Arc<dyn Actuators>,
    pub display: Arc<dyn StatusDisplay>,
    pub serial: Arc<dyn SerialOut>,
    pub time_provider: Arc<dyn TimeProvider>,
    pub variant: Variant,
    pub thresholds: Thresholds,
    pub interval: Duration,
    /// only loaded by the extended variant
    pub climate: Option<ClimateFeed>,
    pub stats: CycleStats,
}

impl IrrigationSystem {
    /// Loads the climate feed (extended variant) and switches the outputs off.
    pub fn new(app_state: &AppState, cfg: &Config) -> Result<Self, AppError> {
        let variant = cfg.controller.variant;
        let climate = variant.is_extended().then(|| ClimateFeed::load(&cfg.climate.json));
        if climate.is_some_and(|feed| feed.fallback) {
            app_state.display.show(&DisplayFrame::climate_fallback())?;
        }

        app_state.actuators.set_relay(false)?;
        app_state.actuators.set_status_led(false)?;

        let interval = cfg.controller.interval();
        info!(
            event = "startup",
            variant = %variant,
            interval_secs = interval.as_secs(),
            "Irrigation system initialised."
        );
        Ok(Self {
            sensors: app_state.sensors.clone(),
            actuators: app_state.actuators.clone(),
            display: app_state.display.clone(),
            serial: app_state.serial.clone(),
            time_provider: app_state.time_provider.clone(),
            variant,
            thresholds: cfg.thresholds,
            interval,
            climate,
            stats: CycleStats::default(),
        })
    }

    pub fn rain_forecast(&self) -> bool {
        self.climate.is_some_and(|feed| feed.data.rain_forecast)
    }

    /// Sense, decide, actuate and report once.
    ///
    /// Both outputs are attempted and the cycle is reported even when an output
    /// write fails; the first failure is returned afterwards.
    pub fn run_cycle(&mut self, now: i64) -> Result<Decision, AppError> {
        let reading = sample(self.sensors.as_ref(), self.rain_forecast());
        let decision = decide(&reading, &self.thresholds);

        self.stats.cycles += 1;
        if decision.irrigate {
            self.stats.irrigating += 1;
        }
        if decision.cause == Cause::SensorFault {
            self.stats.faults += 1;
        }

        let outputs = self.drive_outputs(decision.irrigate);

        self.serial.status(&status_line(&reading, &decision));
        debug!(
            cycle = self.stats.cycles,
            at = display_time(now),
            cause = %decision.cause,
            fired = ?decision.fired,
        );

        let mut shown = Ok(());
        if self.variant.is_extended() {
            let temperature = self.sensors.temperature().unwrap_or(f32::NAN);
            shown = self.display.show(&DisplayFrame::cycle(&reading, &decision, temperature));
            self.serial.plot(&plotter_line(&reading, &decision));
        }
        outputs.and(shown)?;
        Ok(decision)
    }

    /// Writes the relay and the LED, in that order, whatever happens to the other.
    fn drive_outputs(&self, irrigate: bool) -> Result<(), AppError> {
        let relay = self.actuators.set_relay(irrigate);
        let led = self.actuators.set_status_led(irrigate);
        relay.and(led)
    }
}

/// Polls until `stop_signal` turns true or `max_cycles` cycles have run.
/// A failed cycle is logged and the loop carries on.
pub async fn run_irrigation_system(
    ws: &mut IrrigationSystem, mut stop_signal: watch::Receiver<bool>, max_cycles: Option<u64>,
) -> Result<(), AppError> {
    while !*stop_signal.borrow() {
        let now = ws.time_provider.now();
        if let Err(e) = ws.run_cycle(now) {
            error!(event = "cycle_failed", "{}", e);
        }

        if max_cycles.is_some_and(|max| ws.stats.cycles >= max) {
            break;
        }

        let time_provider = ws.time_provider.clone();
        tokio::select! {
            _ = time_provider.sleep(ws.interval) => {}
            Ok(()) = stop_signal.changed() => {}
        }
    }
    info!(
        event = "shutdown",
        cycles = ws.stats.cycles,
        irrigating = ws.stats.irrigating,
        faults = ws.stats.faults,
        "Ending irrigation system."
    );
    Ok(())
}
