//! External data feeds
//!
//! Weather and market prices come from collaborators the advisor does not
//! control. A feed that cannot produce data returns `None`; consumers then skip
//! the weather term or show no prices.

pub mod weather;
pub mod prices;

pub use weather::{StaticWeatherProvider, UnavailableWeatherProvider};
pub use prices::{percent_change, CropPrice, Demand, PriceBoard, StaticPriceFeed};

use crate::data::WeatherSnapshot;

/// Source of the current weather snapshot
pub trait WeatherProvider: Send + Sync {
    fn get_weather(&self) -> Option<WeatherSnapshot>;
}

/// Source of commodity price quotes
pub trait PriceFeed: Send + Sync {
    fn get_prices(&self) -> Option<Vec<CropPrice>>;
}
