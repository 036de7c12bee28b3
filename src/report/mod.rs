pub mod display;
pub mod serial;

use crate::decision::ds::{Decision, SoilReading};

pub fn presence_label(present: bool) -> &'static str {
    if present {
        "Presente"
    } else {
        "Ausente"
    }
}

pub fn irrigation_label(irrigate: bool) -> &'static str {
    if irrigate {
        "ATIVADA"
    } else {
        "DESLIGADA"
    }
}

/// Human readable, one per cycle.
pub fn status_line(reading: &SoilReading, decision: &Decision) -> String {
    format!(
        "Umidade: {:.2}% | Fosforo: {} | Potassio: {} | pH: {:.1} | Irrigacao: {}",
        reading.humidity,
        presence_label(reading.phosphorus_present),
        presence_label(reading.potassium_present),
        reading.ph,
        irrigation_label(decision.irrigate)
    )
}

/// Serial plotter format: `Umidade:<v>,pH:<v>,Irrigacao:<0|100>`.
pub fn plotter_line(reading: &SoilReading, decision: &Decision) -> String {
    format!(
        "Umidade:{:.1},pH:{:.1},Irrigacao:{}",
        reading.humidity,
        reading.ph,
        if decision.irrigate { 100 } else { 0 }
    )
}
