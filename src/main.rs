use irrig::actuators::interface::LogActuators;
use irrig::config::run_options::{get_args, print_usage};
use irrig::config::Config;
use irrig::irrigation::ds::AppState;
use irrig::irrigation::irrigation_system::{run_irrigation_system, IrrigationSystem};
use irrig::report::display::LogDisplay;
use irrig::report::serial::ConsoleSerial;
use irrig::sensors::simulated::SimulatedSensors;
use irrig::time::RealTimeProvider;
use irrig::utils::start_log;
use std::{error::Error, sync::Arc};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    start_log::<RealTimeProvider>(None);

    let args = get_args();
    if args.help {
        print_usage("irrig");
        return Ok(());
    }

    info!("Starting application...");
    let cfg = Config::load(&args)?;

    let app_state = AppState::new(
        Arc::new(SimulatedSensors::new()),
        Arc::new(LogActuators::new(cfg.controller.relay_active_low)),
        Arc::new(LogDisplay),
        Arc::new(ConsoleSerial),
        Arc::new(RealTimeProvider),
    );
    let mut ws = IrrigationSystem::new(&app_state, &cfg)?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Unable to listen for Ctrl-C: {}", e);
            return;
        }
        _ = shutdown_tx.send(true);
    });

    run_irrigation_system(&mut ws, shutdown_rx, args.cycles).await?;
    Ok(())
}
