//! Input snapshots and the crop reference table
//!
//! - `SoilSample`: one soil submission (pH, moisture, N/P/K)
//! - `WeatherSnapshot`: optional current conditions
//! - `CropProfile` / `CropTable`: the ordered reference crops the scorer ranks
//!
//! The built-in table is created once per process and never mutated. Table order
//! is significant: it breaks ties between equally scored crops.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

// ============================================================================
// Soil
// ============================================================================

/// A single soil analysis submitted by the user.
///
/// Nutrient concentrations are in mg/kg. The scorer accepts any numeric value;
/// use [`SoilSample::validate`] when the declared bounds must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    /// Soil reaction (0-14)
    pub ph: f64,
    /// Volumetric moisture (%)
    pub moisture: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Default for SoilSample {
    /// Values the input form starts with.
    fn default() -> Self {
        Self {
            ph: 7.0,
            moisture: 50.0,
            nitrogen: 20.0,
            phosphorus: 15.0,
            potassium: 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoilValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} is outside {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} must not be negative")]
    Negative { field: &'static str, value: f64 },
}

impl SoilSample {
    /// Check the declared input bounds (pH 0-14, moisture 0-100, nutrients >= 0).
    pub fn validate(&self) -> Result<(), SoilValidationError> {
        check_bounded("ph", self.ph, 0.0, 14.0)?;
        check_bounded("moisture", self.moisture, 0.0, 100.0)?;
        check_non_negative("nitrogen", self.nitrogen)?;
        check_non_negative("phosphorus", self.phosphorus)?;
        check_non_negative("potassium", self.potassium)?;
        Ok(())
    }
}

fn check_bounded(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SoilValidationError> {
    if !value.is_finite() {
        return Err(SoilValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(SoilValidationError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), SoilValidationError> {
    if !value.is_finite() {
        return Err(SoilValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(SoilValidationError::Negative { field, value });
    }
    Ok(())
}

// ============================================================================
// Weather
// ============================================================================

/// Current conditions reported by a weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Rainfall (mm)
    pub rainfall: f64,
    /// Free-text label, e.g. "Partly Cloudy"
    pub condition: String,
    pub location: String,
}

// ============================================================================
// Crop reference table
// ============================================================================

/// Nitrogen availability class, used both for soil readings and crop demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NitrogenLevel {
    Low,
    Medium,
    High,
}

impl NitrogenLevel {
    /// Classify a soil nitrogen reading (mg/kg): > 30 high, > 15 medium, else low.
    pub fn classify(nitrogen: f64) -> Self {
        if nitrogen > 30.0 {
            NitrogenLevel::High
        } else if nitrogen > 15.0 {
            NitrogenLevel::Medium
        } else {
            NitrogenLevel::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            NitrogenLevel::Low => "low",
            NitrogenLevel::Medium => "medium",
            NitrogenLevel::High => "high",
        }
    }
}

/// Growing requirements and expectations for one candidate crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub icon: String,
    /// Optimal pH range [lo, hi]
    pub optimal_ph: [f64; 2],
    /// Optimal moisture range [lo, hi] (%)
    pub optimal_moisture: [f64; 2],
    pub nitrogen_need: NitrogenLevel,
    pub expected_yield: String,
    pub growth_period: String,
}

impl CropProfile {
    fn new(
        name: &str,
        icon: &str,
        optimal_ph: [f64; 2],
        optimal_moisture: [f64; 2],
        nitrogen_need: NitrogenLevel,
        expected_yield: &str,
        growth_period: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            optimal_ph,
            optimal_moisture,
            nitrogen_need,
            expected_yield: expected_yield.to_string(),
            growth_period: growth_period.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CropTableError {
    #[error("failed to read crop table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse crop table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("crop table is empty")]
    Empty,

    #[error("crop #{index} has a blank name")]
    BlankName { index: usize },

    #[error("crop '{crop}' has an invalid {field} range [{lo}, {hi}]")]
    InvalidRange {
        crop: String,
        field: &'static str,
        lo: f64,
        hi: f64,
    },
}

/// Ordered, immutable list of crop profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CropProfile>", into = "Vec<CropProfile>")]
pub struct CropTable {
    crops: Vec<CropProfile>,
}

impl TryFrom<Vec<CropProfile>> for CropTable {
    type Error = CropTableError;

    fn try_from(crops: Vec<CropProfile>) -> Result<Self, Self::Error> {
        Self::new(crops)
    }
}

impl From<CropTable> for Vec<CropProfile> {
    fn from(table: CropTable) -> Self {
        table.crops
    }
}

static BUILTIN_TABLE: OnceLock<CropTable> = OnceLock::new();

impl CropTable {
    /// Build a table after checking names and ranges
    pub fn new(crops: Vec<CropProfile>) -> Result<Self, CropTableError> {
        if crops.is_empty() {
            return Err(CropTableError::Empty);
        }
        for (index, crop) in crops.iter().enumerate() {
            if crop.name.trim().is_empty() {
                return Err(CropTableError::BlankName { index });
            }
            check_range(&crop.name, "pH", crop.optimal_ph)?;
            check_range(&crop.name, "moisture", crop.optimal_moisture)?;
        }
        Ok(Self { crops })
    }

    /// The six reference crops shipped with the advisor
    pub fn builtin() -> &'static CropTable {
        BUILTIN_TABLE.get_or_init(|| CropTable {
            crops: builtin_crops(),
        })
    }

    /// Load a replacement table from a JSON array of profiles
    pub fn from_json_str(json: &str) -> Result<Self, CropTableError> {
        let crops: Vec<CropProfile> = serde_json::from_str(json)?;
        Self::new(crops)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CropTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CropTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} crop profiles from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

fn check_range(crop: &str, field: &'static str, range: [f64; 2]) -> Result<(), CropTableError> {
    let [lo, hi] = range;
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(CropTableError::InvalidRange {
            crop: crop.to_string(),
            field,
            lo,
            hi,
        });
    }
    Ok(())
}

fn builtin_crops() -> Vec<CropProfile> {
    use NitrogenLevel::*;

    vec![
        CropProfile::new("Rice", "🌾", [5.5, 6.5], [60.0, 80.0], High, "4-6 tons/hectare", "120-150 days"),
        CropProfile::new("Wheat", "🌾", [6.0, 7.5], [40.0, 60.0], Medium, "3-5 tons/hectare", "110-130 days"),
        CropProfile::new("Corn", "🌽", [6.0, 7.0], [50.0, 70.0], High, "8-12 tons/hectare", "90-120 days"),
        CropProfile::new("Soybeans", "🫘", [6.0, 7.0], [45.0, 65.0], Low, "2-4 tons/hectare", "100-130 days"),
        CropProfile::new("Tomatoes", "🍅", [6.0, 6.8], [60.0, 80.0], Medium, "40-60 tons/hectare", "70-100 days"),
        CropProfile::new("Potatoes", "🥔", [5.0, 6.5], [50.0, 70.0], Medium, "20-40 tons/hectare", "80-120 days"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nitrogen_boundaries() {
        assert_eq!(NitrogenLevel::classify(30.0), NitrogenLevel::Medium);
        assert_eq!(NitrogenLevel::classify(30.01), NitrogenLevel::High);
        assert_eq!(NitrogenLevel::classify(15.0), NitrogenLevel::Low);
        assert_eq!(NitrogenLevel::classify(15.01), NitrogenLevel::Medium);
        assert_eq!(NitrogenLevel::classify(-4.0), NitrogenLevel::Low);
        assert_eq!(NitrogenLevel::classify(35.0).display_text(), "high");
    }

    #[test]
    fn test_builtin_table_order() {
        let names: Vec<&str> = CropTable::builtin().crops().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rice", "Wheat", "Corn", "Soybeans", "Tomatoes", "Potatoes"]);
        // Same instance on every call
        assert!(std::ptr::eq(CropTable::builtin(), CropTable::builtin()));
    }

    #[test]
    fn test_builtin_table_is_valid() {
        let crops = CropTable::builtin().crops().to_vec();
        assert!(CropTable::new(crops).is_ok());
    }

    #[test]
    fn test_default_soil_is_valid() {
        assert!(SoilSample::default().validate().is_ok());
    }

    #[test]
    fn test_soil_validation() {
        let soil = SoilSample { ph: 14.5, ..SoilSample::default() };
        assert!(matches!(soil.validate(), Err(SoilValidationError::OutOfRange { field: "ph", .. })));

        let soil = SoilSample { moisture: f64::NAN, ..SoilSample::default() };
        assert_eq!(soil.validate(), Err(SoilValidationError::NotFinite { field: "moisture" }));

        let soil = SoilSample { potassium: -1.0, ..SoilSample::default() };
        assert!(matches!(soil.validate(), Err(SoilValidationError::Negative { field: "potassium", .. })));

        let soil = SoilSample { ph: 0.0, moisture: 100.0, nitrogen: 0.0, ..SoilSample::default() };
        assert!(soil.validate().is_ok());
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"[
            {"name": "Millet", "icon": "🌾", "optimal_ph": [5.5, 7.0], "optimal_moisture": [30, 50],
             "nitrogen_need": "low", "expected_yield": "1-2 tons/hectare", "growth_period": "60-90 days"}
        ]"#;
        let table = CropTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 1);
        let millet = table.get("millet").unwrap();
        assert_eq!(millet.nitrogen_need, NitrogenLevel::Low);
        assert_eq!(millet.optimal_moisture, [30.0, 50.0]);
    }

    #[test]
    fn test_deserialize_validates_table() {
        assert!(serde_json::from_str::<CropTable>("[]").is_err());

        let json = r#"[
            {"name": " ", "icon": "🌾", "optimal_ph": [7.0, 6.0], "optimal_moisture": [80, 10],
             "nitrogen_need": "low", "expected_yield": "-", "growth_period": "-"}
        ]"#;
        assert!(serde_json::from_str::<CropTable>(json).is_err());

        let json = serde_json::to_string(CropTable::builtin()).unwrap();
        let table: CropTable = serde_json::from_str(&json).unwrap();
        assert_eq!(&table, CropTable::builtin());
    }

    #[test]
    fn test_table_rejects_bad_input() {
        assert!(matches!(CropTable::from_json_str("[]"), Err(CropTableError::Empty)));
        assert!(matches!(CropTable::from_json_str("{"), Err(CropTableError::Parse(_))));

        let mut crops = CropTable::builtin().crops().to_vec();
        crops[2].optimal_ph = [7.0, 6.0];
        match CropTable::new(crops) {
            Err(CropTableError::InvalidRange { crop, field, .. }) => {
                assert_eq!(crop, "Corn");
                assert_eq!(field, "pH");
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }

        let mut crops = CropTable::builtin().crops().to_vec();
        crops[0].name = "  ".to_string();
        assert!(matches!(CropTable::new(crops), Err(CropTableError::BlankName { index: 0 })));
    }
}
