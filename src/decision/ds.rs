use serde::Deserialize;
use std::fmt::Display;

use super::{
    DEFAULT_HUMIDITY_BAND_HIGH, DEFAULT_HUMIDITY_BAND_LOW, DEFAULT_HUMIDITY_CEILING, DEFAULT_HUMIDITY_DRY,
    DEFAULT_HUMIDITY_WET, DEFAULT_PH_MAX, DEFAULT_PH_MIN,
};

/// One cycle's snapshot of the soil. Built fresh every cycle, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoilReading {
    /// percent, 0..=100
    pub humidity: f32,
    /// 0..=14
    pub ph: f32,
    pub phosphorus_present: bool,
    pub potassium_present: bool,
    /// only ever true in the extended variant
    pub rain_forecast: bool,
    /// at least one input could not be read this cycle
    pub sensor_fault: bool,
}

impl SoilReading {
    pub fn new(humidity: f32, ph: f32, phosphorus_present: bool, potassium_present: bool) -> Self {
        Self { humidity, ph, phosphorus_present, potassium_present, rain_forecast: false, sensor_fault: false }
    }

    pub fn with_rain(mut self, rain_forecast: bool) -> Self {
        self.rain_forecast = rain_forecast;
        self
    }

    pub fn with_fault(mut self, sensor_fault: bool) -> Self {
        self.sensor_fault = sensor_fault;
        self
    }

    /// Both scalars are finite and inside their physical range.
    pub fn is_plausible(&self) -> bool {
        self.humidity.is_finite()
            && self.ph.is_finite()
            && (0.0..=100.0).contains(&self.humidity)
            && (0.0..=14.0).contains(&self.ph)
    }
}

/// Rule constants. The defaults are the values the demonstrator ships with.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// rules a and c: strictly below is "dry"
    pub humidity_dry: f32,
    /// rule b: strictly above is "wet" when potassium is present
    pub humidity_wet: f32,
    /// rule d: strictly above never irrigates
    pub humidity_ceiling: f32,
    /// rule e: inclusive band
    pub humidity_band_low: f32,
    pub humidity_band_high: f32,
    /// rule c: inclusive acceptable pH range
    pub ph_min: f32,
    pub ph_max: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            humidity_dry: DEFAULT_HUMIDITY_DRY,
            humidity_wet: DEFAULT_HUMIDITY_WET,
            humidity_ceiling: DEFAULT_HUMIDITY_CEILING,
            humidity_band_low: DEFAULT_HUMIDITY_BAND_LOW,
            humidity_band_high: DEFAULT_HUMIDITY_BAND_HIGH,
            ph_min: DEFAULT_PH_MIN,
            ph_max: DEFAULT_PH_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleId {
    /// dry soil with phosphorus
    A,
    /// potassium with wet soil
    B,
    /// dry soil with pH out of range
    C,
    /// humidity ceiling
    D,
    /// nutrient missing inside the humidity band
    E,
}

impl Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = match self {
            RuleId::A => "rule_a",
            RuleId::B => "rule_b",
            RuleId::C => "rule_c",
            RuleId::D => "rule_d",
            RuleId::E => "rule_e",
        };
        f.write_str(rule)
    }
}

/// What set the final value of a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    RainVeto,
    SensorFault,
    /// no rule matched, initial `false` kept
    Default,
    Rule(RuleId),
}

impl Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cause::RainVeto => f.write_str("rain_veto"),
            Cause::SensorFault => f.write_str("sensor_fault"),
            Cause::Default => f.write_str("default"),
            Cause::Rule(rule) => rule.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub irrigate: bool,
    pub cause: Cause,
    /// every rule whose predicate matched, in evaluation order
    pub fired: Vec<RuleId>,
}

impl Decision {
    pub fn vetoed(cause: Cause) -> Self {
        Self { irrigate: false, cause, fired: Vec::new() }
    }
}
