//! Crop Suitability
//!
//! Building blocks of the crop scorer.
//!
//! ## Architecture
//! - `comparator.rs` - value vs optimal range comparison
//! - `terms.rs` - the four scoring terms (pH, moisture, nitrogen, weather)
//! - `assessment.rs` - Suitability tier, per-term and per-crop score structs
//! - `advice.rs` - soil parameter advisory against field guidance

pub mod comparator;
pub mod terms;
pub mod assessment;
pub mod advice;

// Re-export public API
pub use comparator::{compare_to_range, RangeComparison, RangeFit};
pub use assessment::{CropRecommendation, CropScore, ScoreFactor, Suitability, TermScore};
pub use advice::{soil_advisory, LevelStatus, SoilAdvisory};
