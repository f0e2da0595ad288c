//! Scoring terms
//!
//! Each term awards points for one input against one crop profile:
//!
//! | term     | 3 points                | 2 points               | 1 point                          |
//! |----------|-------------------------|------------------------|----------------------------------|
//! | pH       | within optimal range    | within 1.0 of midpoint | otherwise                        |
//! | moisture | within optimal range    | within 15 of midpoint  | otherwise                        |
//! | nitrogen | soil class == crop need | -                      | otherwise                        |
//!
//! The weather term gives 2 points for 20-35 °C and is skipped entirely when no
//! weather snapshot is available.

use super::assessment::{ScoreFactor, TermScore};
use super::comparator::compare_to_range;
use crate::data::{CropProfile, NitrogenLevel, SoilSample, WeatherSnapshot};

pub const PH_MIDPOINT_TOLERANCE: f64 = 1.0;
pub const MOISTURE_MIDPOINT_TOLERANCE: f64 = 15.0;
pub const FAVORABLE_TEMPERATURE_C: (f64, f64) = (20.0, 35.0);

pub fn ph_term(soil: &SoilSample, crop: &CropProfile) -> TermScore {
    let [lo, hi] = crop.optimal_ph;
    let comp = compare_to_range(soil.ph, lo, hi);

    let (points, reason) = if comp.is_within_range() {
        (3, "Optimal pH level")
    } else if comp.is_near_midpoint(PH_MIDPOINT_TOLERANCE) {
        (2, "Acceptable pH level")
    } else {
        (1, "pH needs adjustment")
    };

    TermScore { factor: ScoreFactor::Ph, points, reason }
}

pub fn moisture_term(soil: &SoilSample, crop: &CropProfile) -> TermScore {
    let [lo, hi] = crop.optimal_moisture;
    let comp = compare_to_range(soil.moisture, lo, hi);

    let (points, reason) = if comp.is_within_range() {
        (3, "Good moisture content")
    } else if comp.is_near_midpoint(MOISTURE_MIDPOINT_TOLERANCE) {
        (2, "Adequate moisture")
    } else {
        (1, "Moisture management needed")
    };

    TermScore { factor: ScoreFactor::Moisture, points, reason }
}

pub fn nitrogen_term(soil: &SoilSample, crop: &CropProfile) -> TermScore {
    let (points, reason) = if NitrogenLevel::classify(soil.nitrogen) == crop.nitrogen_need {
        (3, "Perfect nitrogen match")
    } else {
        (1, "Consider fertilizer application")
    };

    TermScore { factor: ScoreFactor::Nitrogen, points, reason }
}

/// `None` when weather is absent or the temperature is outside 20-35 °C
pub fn weather_term(weather: Option<&WeatherSnapshot>) -> Option<TermScore> {
    let (min_c, max_c) = FAVORABLE_TEMPERATURE_C;
    let weather = weather?;

    (weather.temperature >= min_c && weather.temperature <= max_c).then_some(TermScore {
        factor: ScoreFactor::Weather,
        points: 2,
        reason: "Favorable weather conditions",
    })
}
