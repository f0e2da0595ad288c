use super::WeatherProvider;
use crate::data::WeatherSnapshot;

/// Always reports the same conditions
#[derive(Debug, Clone)]
pub struct StaticWeatherProvider {
    snapshot: WeatherSnapshot,
}

impl StaticWeatherProvider {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }

    /// Mild, partly cloudy conditions at the given location
    pub fn with_location(location: &str) -> Self {
        Self::new(WeatherSnapshot {
            temperature: 28.0,
            humidity: 65.0,
            rainfall: 12.5,
            condition: "Partly Cloudy".to_string(),
            location: location.to_string(),
        })
    }
}

impl Default for StaticWeatherProvider {
    fn default() -> Self {
        Self::with_location("Current Location")
    }
}

impl WeatherProvider for StaticWeatherProvider {
    fn get_weather(&self) -> Option<WeatherSnapshot> {
        Some(self.snapshot.clone())
    }
}

/// A provider whose upstream is down
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableWeatherProvider;

impl WeatherProvider for UnavailableWeatherProvider {
    fn get_weather(&self) -> Option<WeatherSnapshot> {
        tracing::warn!("Weather data unavailable");
        None
    }
}
