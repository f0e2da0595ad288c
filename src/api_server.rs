// Axum API Server Module
//
// Purpose: JSON backend for the dashboard (weather, prices, seasonal guide,
// crop recommendations). Feeds are refreshed through TTL caches so price and
// weather updates run on independent schedules.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::AdvisorConfig;
use crate::data::{CropTable, SoilSample, WeatherSnapshot};
use crate::providers::{PriceBoard, PriceFeed, StaticPriceFeed, StaticWeatherProvider, WeatherProvider};
use crate::scorer::{recommend_batch, recommend_with};
use crate::seasonal::SeasonalGuide;
use crate::suitability::soil_advisory;
use crate::utils::{format_inr, format_percent_change, unit_basis};

const WEATHER_KEY: &str = "weather";
const PRICES_KEY: &str = "prices";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub crop_table: Arc<CropTable>,
    pub weather_provider: Arc<dyn WeatherProvider>,
    pub price_feed: Arc<dyn PriceFeed>,
    weather_cache: Cache<&'static str, Option<WeatherSnapshot>>,
    price_cache: Cache<&'static str, Arc<PriceBoard>>,
}

impl AppState {
    /// State backed by the static providers, as configured
    pub fn new(config: &AdvisorConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading crop table...");
        let crop_table = config.load_crop_table()?;
        tracing::info!("Crop table ready ({} crops)", crop_table.len());

        let weather = Arc::new(StaticWeatherProvider::with_location(&config.weather_location));
        let prices = Arc::new(StaticPriceFeed::with_jitter(config.price_jitter));

        Ok(Self::with_providers(crop_table, weather, prices, config))
    }

    pub fn with_providers(
        crop_table: Arc<CropTable>,
        weather_provider: Arc<dyn WeatherProvider>,
        price_feed: Arc<dyn PriceFeed>,
        config: &AdvisorConfig,
    ) -> Self {
        tracing::info!(
            "Initializing feed caches (prices every {:?}, weather every {:?})",
            config.price_refresh,
            config.weather_refresh
        );

        Self {
            crop_table,
            weather_provider,
            price_feed,
            weather_cache: Cache::builder()
                .max_capacity(1)
                .time_to_live(config.weather_refresh)
                .build(),
            price_cache: Cache::builder()
                .max_capacity(1)
                .time_to_live(config.price_refresh)
                .build(),
        }
    }

    async fn current_weather(&self) -> Option<WeatherSnapshot> {
        let provider = self.weather_provider.clone();
        self.weather_cache
            .get_with(WEATHER_KEY, async move {
                tracing::debug!("Refreshing weather snapshot");
                provider.get_weather()
            })
            .await
    }

    async fn current_prices(&self) -> Arc<PriceBoard> {
        let feed = self.price_feed.clone();
        self.price_cache
            .get_with(PRICES_KEY, async move {
                tracing::debug!("Refreshing price board");
                Arc::new(PriceBoard::fetch(feed.as_ref()))
            })
            .await
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Data feeds
        .route("/api/crops", get(list_crops))
        .route("/api/weather", get(get_weather))
        .route("/api/prices", get(get_prices))
        .route("/api/seasonal", get(get_seasonal))

        // Crop recommendations
        .route("/api/recommendations", post(recommend_crops))
        .route("/api/recommendations/batch", post(recommend_crops_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops(State(state): State<AppState>) -> Json<CropTable> {
    Json(state.crop_table.as_ref().clone())
}

async fn get_weather(State(state): State<AppState>) -> Json<serde_json::Value> {
    let weather = state.current_weather().await;

    Json(serde_json::json!({
        "available": weather.is_some(),
        "weather": weather,
    }))
}

async fn get_prices(State(state): State<AppState>) -> Json<serde_json::Value> {
    let board = state.current_prices().await;

    let prices: Vec<serde_json::Value> = board
        .prices()
        .iter()
        .map(|p| {
            let change = p.change_percent();
            serde_json::json!({
                "name": p.name,
                "icon": p.icon,
                "market": p.market,
                "unit": p.unit,
                "demand": p.demand,
                "current_price": p.current_price,
                "previous_price": p.previous_price,
                "change_percent": change,
                "display_price": format_inr(p.current_price),
                "display_previous": format_inr(p.previous_price),
                "display_change": format_percent_change(change),
                "per_unit": unit_basis(&p.unit),
            })
        })
        .collect();

    Json(serde_json::json!({
        "available": !board.is_empty(),
        "updated_at": board.fetched_at.to_rfc3339(),
        "prices": prices,
    }))
}

async fn get_seasonal(AppQuery(params): AppQuery<SeasonalQuery>) -> Result<Json<SeasonalGuide>, AppError> {
    let guide = match params.month {
        Some(month) if (1..=12).contains(&month) => SeasonalGuide::for_month(month),
        Some(month) => {
            return Err(AppError::BadRequest(format!("month must be 1-12, got {}", month)));
        }
        None => SeasonalGuide::current(),
    };
    Ok(Json(guide))
}

/// POST /api/recommendations
/// Body: { "soil": {...}, "weather": {...}?, "use_current_weather": true }
async fn recommend_crops(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecommendationRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.soil
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let weather = match req.weather {
        Some(weather) => Some(weather),
        None if req.use_current_weather => state.current_weather().await,
        None => None,
    };

    tracing::info!("Soil data submitted: {:?}", req.soil);

    let recommendations = recommend_with(&state.crop_table, &req.soil, weather.as_ref());

    Ok(Json(serde_json::json!({
        "recommendations": recommendations,
        "soil_advisory": soil_advisory(&req.soil),
        "weather_used": weather.is_some(),
    })))
}

/// POST /api/recommendations/batch
/// Body: { "samples": [{...}, ...], "weather": {...}? }
async fn recommend_crops_batch(
    State(state): State<AppState>,
    AppJson(req): AppJson<BatchRecommendationRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    for (i, soil) in req.samples.iter().enumerate() {
        soil.validate()
            .map_err(|e| AppError::InvalidInput(format!("sample {}: {}", i, e)))?;
    }

    tracing::info!("Scoring batch of {} samples", req.samples.len());

    // CPU-bound work: run in blocking thread pool
    let table = state.crop_table.clone();
    let results = tokio::task::spawn_blocking(move || {
        recommend_batch(&table, &req.samples, req.weather.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(serde_json::json!({ "results": results })))
}

// ============================================================================
// Request Types
// ============================================================================

/// `Json` whose rejections are reported as `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
struct AppJson<T>(T);

/// `Query` whose rejections are reported as `AppError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
struct AppQuery<T>(T);

#[derive(serde::Deserialize)]
struct RecommendationRequest {
    soil: SoilSample,
    weather: Option<WeatherSnapshot>,
    #[serde(default = "default_use_current_weather")]
    use_current_weather: bool,
}

fn default_use_current_weather() -> bool {
    true
}

#[derive(serde::Deserialize)]
struct BatchRecommendationRequest {
    samples: Vec<SoilSample>,
    weather: Option<WeatherSnapshot>,
}

#[derive(serde::Deserialize)]
struct SeasonalQuery {
    month: Option<u32>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    InvalidInput(String),
    Internal(String),
    Rejected(StatusCode, String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Rejected(status, msg) => (status, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
