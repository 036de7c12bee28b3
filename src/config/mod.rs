pub mod run_options;

use crate::{climate::SIMULATED_CLIMATE_JSON, decision::ds::Thresholds, error::AppError};
use run_options::Args;
use serde::Deserialize;
use std::{fmt::Display, fs, str::FromStr, time::Duration};

pub const CONFIG_FILE: &str = "./irrig.toml";

pub const BASIC_INTERVAL_SECS: u64 = 2;
pub const EXTENDED_INTERVAL_SECS: u64 = 10;

/// The basic board only drives the relay. The extended one adds the climate feed,
/// the rain veto, the display and the plotter line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Basic,
    Extended,
}

impl Variant {
    pub fn is_extended(&self) -> bool {
        matches!(self, Variant::Extended)
    }

    pub fn default_interval_secs(&self) -> u64 {
        match self {
            Variant::Basic => BASIC_INTERVAL_SECS,
            Variant::Extended => EXTENDED_INTERVAL_SECS,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match self {
            Variant::Basic => "basic",
            Variant::Extended => "extended",
        };
        f.write_str(variant)
    }
}

impl FromStr for Variant {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "basic" => Ok(Variant::Basic),
            "extended" => Ok(Variant::Extended),
            _ => Err("Invalid variant"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Controller {
    pub variant: Variant,
    /// falls back to the variant's cadence when absent
    pub interval_secs: Option<u64>,
    pub relay_active_low: bool,
}

impl Controller {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unwrap_or_else(|| self.variant.default_interval_secs()))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Climate {
    pub json: String,
}

impl Default for Climate {
    fn default() -> Self {
        Self { json: SIMULATED_CLIMATE_JSON.to_owned() }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controller: Controller,
    pub thresholds: Thresholds,
    pub climate: Climate,
}

impl Config {
    /// Reads the file named in `args`, or `args.cfg_str` when set, then applies
    /// command line overrides.
    pub fn load(args: &Args) -> Result<Self, AppError> {
        let mut config = match &args.cfg_str {
            Some(cfg_str) => Self::load_from_str(cfg_str)?,
            None if args.cfg_file.exists() => Self::load_from_str(&fs::read_to_string(&args.cfg_file)?)?,
            None => Config::default(),
        };
        if let Some(variant) = args.variant {
            config.controller.variant = variant;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let th = &self.thresholds;
        if th.ph_min >= th.ph_max {
            return Err(AppError::InvalidConfig(format!("ph_min {} must be below ph_max {}", th.ph_min, th.ph_max)));
        }
        if th.humidity_band_low > th.humidity_band_high {
            return Err(AppError::InvalidConfig(format!(
                "humidity_band_low {} is above humidity_band_high {}",
                th.humidity_band_low, th.humidity_band_high
            )));
        }
        if self.controller.interval().is_zero() {
            return Err(AppError::InvalidConfig("interval_secs must be positive".to_owned()));
        }
        Ok(())
    }
}
