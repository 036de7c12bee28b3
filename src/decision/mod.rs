pub mod ds;
pub mod rules;

use ds::{Cause, Decision, SoilReading, Thresholds};
use rules::{apply_rules, RULES};
use tracing::warn;

pub const DEFAULT_HUMIDITY_DRY: f32 = 40.;
pub const DEFAULT_HUMIDITY_WET: f32 = 60.;
pub const DEFAULT_HUMIDITY_CEILING: f32 = 70.;
pub const DEFAULT_HUMIDITY_BAND_LOW: f32 = 30.;
pub const DEFAULT_HUMIDITY_BAND_HIGH: f32 = 50.;
pub const DEFAULT_PH_MIN: f32 = 5.5;
pub const DEFAULT_PH_MAX: f32 = 7.0;

/// Decides whether to irrigate this cycle.
///
/// A rain forecast vetoes everything. A failed read or an implausible reading
/// (NaN, infinite or outside the physical range) fails safe to `false` without
/// consulting the rules.
/// Otherwise the rule table runs in order from an initial `false`.
pub fn decide(reading: &SoilReading, th: &Thresholds) -> Decision {
    if reading.rain_forecast {
        return Decision::vetoed(Cause::RainVeto);
    }
    if reading.sensor_fault || !reading.is_plausible() {
        warn!(humidity = reading.humidity, ph = reading.ph, "Sensor fault, irrigation disabled.");
        return Decision::vetoed(Cause::SensorFault);
    }
    apply_rules(&RULES, reading, th)
}
