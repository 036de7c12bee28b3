use crate::error::AppError;
use serde::Deserialize;
use tracing::{error, info};

/// Stand-in for a weather feed. Parsed once at startup by the extended variant.
pub const SIMULATED_CLIMATE_JSON: &str = r#"{"temperature":27.5,"air_humidity":64.0,"rain_forecast":false}"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct ClimateData {
    /// °C
    pub temperature: f32,
    /// percent
    pub air_humidity: f32,
    pub rain_forecast: bool,
}

pub fn parse_climate(json: &str) -> Result<ClimateData, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse result plus whether the zeroed fallback is in use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClimateFeed {
    pub data: ClimateData,
    pub fallback: bool,
}

impl ClimateFeed {
    /// Never fails: a bad payload logs an error and keeps zeroed values with no rain.
    pub fn load(json: &str) -> Self {
        match parse_climate(json) {
            Ok(data) => {
                info!(
                    event = "climate_loaded",
                    temperature = data.temperature,
                    air_humidity = data.air_humidity,
                    rain_forecast = data.rain_forecast,
                );
                Self { data, fallback: false }
            }
            Err(e) => {
                error!(event = "climate_parse_failed", "{}", e);
                Self { data: ClimateData::default(), fallback: true }
            }
        }
    }
}
