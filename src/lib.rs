//! Crop Advisor
//!
//! Crop-suitability scoring for an agriculture dashboard, plus the data feeds
//! the dashboard displays next to it.
//!
//! - `data`: soil/weather snapshots and the crop reference table
//! - `suitability/`: range comparison, scoring terms, tiers, soil advisory
//! - `scorer`: ranks crops and returns the top four
//! - `providers/`: weather and price feeds (mocked)
//! - `seasonal`: season-by-month planting guide
//! - `utils/`: display formatting
//! - `api_server` (feature `api`): JSON HTTP backend

pub mod config;
pub mod data;
pub mod providers;
pub mod scorer;
pub mod seasonal;
pub mod suitability;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{AdvisorConfig, ConfigError};
pub use data::{CropProfile, CropTable, CropTableError, NitrogenLevel, SoilSample, SoilValidationError, WeatherSnapshot};
pub use providers::{PriceFeed, WeatherProvider};
pub use scorer::{recommend, recommend_batch, recommend_with};
pub use seasonal::{Season, SeasonalGuide};
pub use suitability::{soil_advisory, CropRecommendation, Suitability};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
