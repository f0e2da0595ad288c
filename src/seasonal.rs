//! Seasonal growing guide
//!
//! Maps the calendar month to a season and lists what to plant and what to
//! attend to. Seasons follow the northern-hemisphere meteorological split.

use chrono::{Datelike, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// `month` is 1-12: Mar-May Spring, Jun-Aug Summer, Sep-Nov Autumn, else Winter
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn current() -> Self {
        Self::from_month(Local::now().month())
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalGuide {
    pub season: Season,
    /// E.g. "Spring Growing Guide"
    pub title: String,
    pub crops: [&'static str; 4],
    pub tips: [&'static str; 4],
    pub advisory: &'static str,
}

const WEATHER_ADVISORY: &str = "Monitor local weather forecasts for optimal planting and harvesting times. \
     Consider climate variations in your specific region.";

impl SeasonalGuide {
    pub fn for_season(season: Season) -> Self {
        let (crops, tips) = match season {
            Season::Spring => (
                ["Tomatoes", "Peppers", "Lettuce", "Spinach"],
                [
                    "Perfect time for seed germination",
                    "Prepare soil with organic matter",
                    "Start pest control measures",
                    "Plan irrigation systems",
                ],
            ),
            Season::Summer => (
                ["Corn", "Beans", "Squash", "Melons"],
                [
                    "Ensure adequate water supply",
                    "Mulch to retain moisture",
                    "Monitor for heat stress",
                    "Harvest early crops",
                ],
            ),
            Season::Autumn => (
                ["Wheat", "Barley", "Carrots", "Cabbage"],
                [
                    "Plant winter crops",
                    "Harvest summer produce",
                    "Prepare for storage",
                    "Soil preparation for next season",
                ],
            ),
            Season::Winter => (
                ["Peas", "Broad Beans", "Onions", "Garlic"],
                [
                    "Focus on greenhouse cultivation",
                    "Plan next year's crop rotation",
                    "Maintain equipment",
                    "Study market trends",
                ],
            ),
        };

        Self {
            season,
            title: format!("{} Growing Guide", season.display_text()),
            crops,
            tips,
            advisory: WEATHER_ADVISORY,
        }
    }

    pub fn for_month(month: u32) -> Self {
        Self::for_season(Season::from_month(month))
    }

    pub fn current() -> Self {
        Self::for_season(Season::current())
    }
}
