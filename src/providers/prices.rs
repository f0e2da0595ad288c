//! Commodity price quotes
//!
//! `StaticPriceFeed` serves a fixed set of mandi quotes (INR per ton) with an
//! optional random jitter on the current price so periodic refreshes look live.

use chrono::{DateTime, Utc};
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::PriceFeed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrice {
    pub name: String,
    pub current_price: f64,
    pub previous_price: f64,
    /// E.g. "₹/ton"
    pub unit: String,
    pub market: String,
    pub icon: String,
    pub demand: Demand,
}

impl CropPrice {
    pub fn change_percent(&self) -> f64 {
        percent_change(self.current_price, self.previous_price)
    }
}

/// (current - previous) / previous * 100
///
/// A zero previous price yields an infinite or NaN result, as the division does.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    (current - previous) / previous * 100.0
}

pub const DEFAULT_JITTER: f64 = 0.05;

/// Fixed quotes with optional jitter
#[derive(Debug, Clone)]
pub struct StaticPriceFeed {
    quotes: Vec<CropPrice>,
    jitter: f64,
}

impl StaticPriceFeed {
    /// `jitter` is the maximum relative deviation applied to each current price.
    /// Values outside [0, 1) are clamped.
    pub fn new(quotes: Vec<CropPrice>, jitter: f64) -> Self {
        let jitter = if jitter.is_finite() { jitter.clamp(0.0, 0.99) } else { 0.0 };
        Self { quotes, jitter }
    }

    pub fn with_jitter(jitter: f64) -> Self {
        Self::new(base_quotes(), jitter)
    }

    /// Base quotes, no jitter
    pub fn fixed() -> Self {
        Self::new(base_quotes(), 0.0)
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    fn jittered(&self, price: f64, rng: &mut impl Rng) -> f64 {
        if self.jitter == 0.0 {
            return price;
        }
        let factor = 1.0 - self.jitter + rng.gen::<f64>() * 2.0 * self.jitter;
        (price * factor).round()
    }
}

impl Default for StaticPriceFeed {
    fn default() -> Self {
        Self::with_jitter(DEFAULT_JITTER)
    }
}

impl PriceFeed for StaticPriceFeed {
    fn get_prices(&self) -> Option<Vec<CropPrice>> {
        let mut rng = rand::thread_rng();
        let prices = self
            .quotes
            .iter()
            .map(|quote| CropPrice {
                current_price: self.jittered(quote.current_price, &mut rng),
                ..quote.clone()
            })
            .collect();
        Some(prices)
    }
}

fn quote(name: &str, current: f64, previous: f64, market: &str, icon: &str, demand: Demand) -> CropPrice {
    CropPrice {
        name: name.to_string(),
        current_price: current,
        previous_price: previous,
        unit: "₹/ton".to_string(),
        market: market.to_string(),
        icon: icon.to_string(),
        demand,
    }
}

fn base_quotes() -> Vec<CropPrice> {
    use Demand::*;

    vec![
        quote("Wheat", 23500.0, 23200.0, "APMC", "🌾", High),
        quote("Rice", 34500.0, 35800.0, "Local", "🌾", Medium),
        quote("Corn", 19800.0, 19600.0, "APMC", "🌽", High),
        quote("Soybeans", 42800.0, 42400.0, "APMC", "🫘", Medium),
        quote("Tomatoes", 98800.0, 103000.0, "Local", "🍅", High),
        quote("Potatoes", 31300.0, 30900.0, "Local", "🥔", Medium),
    ]
}

// ============================================================================
// Price board
// ============================================================================

/// One fetch of the price feed, indexed by crop name
#[derive(Debug, Clone)]
pub struct PriceBoard {
    prices: Vec<CropPrice>,
    index: FxHashMap<String, usize>,
    pub fetched_at: DateTime<Utc>,
}

impl PriceBoard {
    pub fn new(prices: Vec<CropPrice>, fetched_at: DateTime<Utc>) -> Self {
        let index = prices
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.to_lowercase(), i))
            .collect();
        Self { prices, index, fetched_at }
    }

    /// Fetch now. An unavailable feed gives an empty board.
    pub fn fetch(feed: &dyn PriceFeed) -> Self {
        let prices = feed.get_prices().unwrap_or_else(|| {
            tracing::warn!("Price feed unavailable, nothing to display");
            Vec::new()
        });
        Self::new(prices, Utc::now())
    }

    pub fn prices(&self) -> &[CropPrice] {
        &self.prices
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&CropPrice> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.prices[i])
    }
}
