//! Crop scorer
//!
//! Ranks every crop in a table against one soil sample (and optional weather)
//! and returns the best four. Scoring is pure: the same inputs always give the
//! same ranking.

use rayon::prelude::*;
use smallvec::SmallVec;

use crate::data::{CropProfile, CropTable, SoilSample, WeatherSnapshot};
use crate::suitability::terms::{moisture_term, nitrogen_term, ph_term, weather_term};
use crate::suitability::{CropRecommendation, CropScore};

/// Number of crops returned by a recommendation
pub const TOP_N: usize = 4;

/// Score one crop. Terms are recorded in pH, moisture, nitrogen, weather order.
pub fn score_crop(
    table_index: usize,
    crop: &CropProfile,
    soil: &SoilSample,
    weather: Option<&WeatherSnapshot>,
) -> CropScore {
    let mut terms = SmallVec::new();
    terms.push(ph_term(soil, crop));
    terms.push(moisture_term(soil, crop));
    terms.push(nitrogen_term(soil, crop));
    if let Some(term) = weather_term(weather) {
        terms.push(term);
    }

    CropScore {
        table_index,
        name: crop.name.clone(),
        icon: crop.icon.clone(),
        expected_yield: crop.expected_yield.clone(),
        growth_period: crop.growth_period.clone(),
        terms,
    }
}

/// Score every crop in table order
pub fn score_all(table: &CropTable, soil: &SoilSample, weather: Option<&WeatherSnapshot>) -> Vec<CropScore> {
    table
        .crops()
        .iter()
        .enumerate()
        .map(|(i, crop)| score_crop(i, crop, soil, weather))
        .collect()
}

/// Top crops by descending score. Equal scores keep table order.
pub fn ranked(table: &CropTable, soil: &SoilSample, weather: Option<&WeatherSnapshot>) -> Vec<CropScore> {
    let mut scored = score_all(table, soil, weather);
    // sort_by is stable
    scored.sort_by(|a, b| b.score().cmp(&a.score()));
    scored.truncate(TOP_N);
    scored
}

/// Recommend up to four crops from `table`, best first
pub fn recommend_with(
    table: &CropTable,
    soil: &SoilSample,
    weather: Option<&WeatherSnapshot>,
) -> Vec<CropRecommendation> {
    let top = ranked(table, soil, weather);

    if let Some(best) = top.first() {
        tracing::debug!(
            "Scored {} crops (weather: {}), best: {} ({})",
            table.len(),
            weather.is_some(),
            best.name,
            best.score()
        );
    }

    top.into_iter().map(CropScore::into_recommendation).collect()
}

/// Recommend four crops from the built-in reference table, best first
pub fn recommend(soil: &SoilSample, weather: Option<&WeatherSnapshot>) -> Vec<CropRecommendation> {
    recommend_with(CropTable::builtin(), soil, weather)
}

/// Recommendations for many samples under the same weather, in input order
pub fn recommend_batch(
    table: &CropTable,
    samples: &[SoilSample],
    weather: Option<&WeatherSnapshot>,
) -> Vec<Vec<CropRecommendation>> {
    tracing::debug!("Scoring batch of {} soil samples", samples.len());

    samples
        .par_iter()
        .map(|soil| recommend_with(table, soil, weather))
        .collect()
}
