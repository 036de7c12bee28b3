use crate::{
    decision::ds::{Cause, Decision, SoilReading},
    error::AppError,
};
use tracing::info;

pub const DISPLAY_COLS: usize = 16;

/// Two rows of a 16x2 character display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFrame {
    pub lines: [String; 2],
}

impl DisplayFrame {
    /// Rows longer than the display are cut.
    pub fn new(top: &str, bottom: &str) -> Self {
        Self { lines: [fit(top), fit(bottom)] }
    }

    /// `temperature` is the air temperature from the humidity driver, °C.
    pub fn cycle(reading: &SoilReading, decision: &Decision, temperature: f32) -> Self {
        let top = format!("U:{:.1}% pH:{:.1}", reading.humidity, reading.ph);
        let bottom = match decision.cause {
            Cause::RainVeto => "Chuva: sem irrig".to_owned(),
            Cause::SensorFault => "Falha sensor".to_owned(),
            _ => format!("Irr:{} T:{:.1}C", if decision.irrigate { "ON" } else { "OFF" }, temperature),
        };
        Self::new(&top, &bottom)
    }

    pub fn climate_fallback() -> Self {
        Self::new("Erro JSON clima", "Usando padrao")
    }
}

fn fit(line: &str) -> String {
    line.chars().take(DISPLAY_COLS).collect()
}

pub trait StatusDisplay: Send + Sync {
    fn show(&self, frame: &DisplayFrame) -> Result<(), AppError>;
}

/// Host stand-in that writes each frame to the log.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl StatusDisplay for LogDisplay {
    fn show(&self, frame: &DisplayFrame) -> Result<(), AppError> {
        info!(target: "display", "[{:<16}] [{:<16}]", frame.lines[0], frame.lines[1]);
        Ok(())
    }
}
