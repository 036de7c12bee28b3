use super::ds::{Cause, Decision, RuleId, SoilReading, Thresholds};
use tracing::trace;

pub type Predicate = fn(&SoilReading, &Thresholds) -> bool;

/// One entry of the rule table: when `predicate` holds, `irrigate` becomes `effect`.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub predicate: Predicate,
    pub effect: bool,
}

impl Rule {
    pub fn applies(&self, reading: &SoilReading, th: &Thresholds) -> bool {
        (self.predicate)(reading, th)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).field("effect", &self.effect).finish()
    }
}

pub fn dry_with_phosphorus(r: &SoilReading, th: &Thresholds) -> bool {
    r.humidity < th.humidity_dry && r.phosphorus_present
}

pub fn wet_with_potassium(r: &SoilReading, th: &Thresholds) -> bool {
    r.potassium_present && r.humidity > th.humidity_wet
}

pub fn dry_with_bad_ph(r: &SoilReading, th: &Thresholds) -> bool {
    r.humidity < th.humidity_dry && (r.ph < th.ph_min || r.ph > th.ph_max)
}

pub fn above_ceiling(r: &SoilReading, th: &Thresholds) -> bool {
    r.humidity > th.humidity_ceiling
}

pub fn nutrient_missing_in_band(r: &SoilReading, th: &Thresholds) -> bool {
    (!r.phosphorus_present || !r.potassium_present)
        && r.humidity >= th.humidity_band_low
        && r.humidity <= th.humidity_band_high
}

/// Evaluated front to back; a later match overrides an earlier one.
pub const RULES: [Rule; 5] = [
    Rule { id: RuleId::A, predicate: dry_with_phosphorus, effect: true },
    Rule { id: RuleId::B, predicate: wet_with_potassium, effect: false },
    Rule { id: RuleId::C, predicate: dry_with_bad_ph, effect: false },
    Rule { id: RuleId::D, predicate: above_ceiling, effect: false },
    Rule { id: RuleId::E, predicate: nutrient_missing_in_band, effect: true },
];

/// Runs `rules` in order starting from `irrigate = false`. No veto handling here.
pub fn apply_rules(rules: &[Rule], reading: &SoilReading, th: &Thresholds) -> Decision {
    let mut decision = Decision { irrigate: false, cause: Cause::Default, fired: Vec::with_capacity(rules.len()) };
    for rule in rules.iter().filter(|rule| rule.applies(reading, th)) {
        trace!(rule = %rule.id, effect = rule.effect, "Rule matched.");
        decision.irrigate = rule.effect;
        decision.cause = Cause::Rule(rule.id);
        decision.fired.push(rule.id);
    }
    decision
}
