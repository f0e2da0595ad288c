//! Soil advisory
//!
//! Reports each soil parameter against general field guidance. This is
//! informational and has no influence on crop ranking.

use serde::Serialize;

use super::comparator::{compare_to_range, RangeFit};
use crate::data::SoilSample;

/// General guidance ranges: (parameter, lo, hi, unit)
const GUIDANCE: [(&str, f64, f64, &str); 5] = [
    ("pH", 6.0, 7.5, ""),
    ("Moisture", 40.0, 70.0, "%"),
    ("Nitrogen", 20.0, 40.0, " mg/kg"),
    ("Phosphorus", 10.0, 25.0, " mg/kg"),
    ("Potassium", 20.0, 40.0, " mg/kg"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LevelStatus {
    Low,
    Good,
    High,
}

impl From<RangeFit> for LevelStatus {
    fn from(fit: RangeFit) -> Self {
        match fit {
            RangeFit::BelowRange => LevelStatus::Low,
            RangeFit::WithinRange => LevelStatus::Good,
            RangeFit::AboveRange => LevelStatus::High,
        }
    }
}

/// One parameter's reading against its guidance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilAdvisory {
    pub parameter: &'static str,
    pub value: f64,
    pub status: LevelStatus,
    /// E.g. "Good: 20-40 mg/kg"
    pub guidance: String,
    /// E.g. "Nitrogen: 12.0 mg/kg (optimal 20.0-40.0 mg/kg)"
    pub detail: String,
    /// Distance outside the guidance range, 0 when Good
    pub deviation: f64,
}

pub fn soil_advisory(soil: &SoilSample) -> Vec<SoilAdvisory> {
    let values = [soil.ph, soil.moisture, soil.nitrogen, soil.phosphorus, soil.potassium];

    GUIDANCE
        .iter()
        .zip(values)
        .map(|(&(parameter, lo, hi, unit), value)| {
            let comp = compare_to_range(value, lo, hi);
            SoilAdvisory {
                parameter,
                value,
                status: comp.fit.into(),
                guidance: format!("Good: {}-{}{}", lo, hi, unit),
                detail: comp.format_with_context(parameter, unit),
                deviation: comp.distance_from_range,
            }
        })
        .collect()
}
