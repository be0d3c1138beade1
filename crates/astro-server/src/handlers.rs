//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use astro_engine::{
    AstroError, BirthInput, InsightReport, MarketContext, MarketTrend, NatalCalculator, NatalReport,
    ZodiacSign, guidance,
    natal::{CurrentTransits, TransitSnapshot},
    zodiac::{CosmicWeather, Energy, compatibility, cosmic_weather},
};

use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub market_feed: String,
    pub market_feed_healthy: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct NatalResponse {
    pub report_id: Uuid,
    #[serde(flatten)]
    pub report: NatalReport,
}

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    #[serde(flatten)]
    pub birth: BirthInput,

    /// bullish / bearish / neutral
    #[serde(default)]
    pub market_trend: Option<String>,

    /// Also return the language-model grounding context
    #[serde(default)]
    pub include_grounding: bool,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub report_id: Uuid,
    pub natal: NatalReport,
    pub insight: InsightReport,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    pub sign_a: String,
    pub sign_b: String,
}

#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub sign_a: ZodiacSign,
    pub sign_b: ZodiacSign,
    pub score: u8,
    pub rating: Energy,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub sign: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        market_feed: state.market.name().to_string(),
        market_feed_healthy: state.market.health_check().await,
    })
}

/// Natal report; an unreadable date still answers 200 with a degraded report
pub async fn natal_handler(Json(input): Json<BirthInput>) -> Json<NatalResponse> {
    let report = NatalCalculator::new(Utc::now()).calculate_or_degraded(&input);

    Json(NatalResponse {
        report_id: Uuid::new_v4(),
        report,
    })
}

/// Natal report plus the insight bundle
pub async fn insight_handler(
    State(state): State<AppState>,
    Json(payload): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, ApiError> {
    let requested = payload
        .market_trend
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse::<MarketTrend>)
        .transpose()
        .map_err(|e| bad_request("INVALID_MARKET_TREND", &e))?;

    let market = resolve_market(&state, requested).await;
    let now = Utc::now();
    let natal = NatalCalculator::new(now).calculate_or_degraded(&payload.birth);
    let insight = state.insight.synthesize(&natal, market.as_ref(), now);

    let grounding = if payload.include_grounding {
        let prompt = guidance::grounding_prompt(&natal, &insight, market.as_ref()).map_err(|e| {
            tracing::error!("Grounding context failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.user_message(),
                    code: "GROUNDING_ERROR".into(),
                }),
            )
        })?;
        Some(prompt)
    } else {
        None
    };

    Ok(Json(InsightResponse {
        report_id: Uuid::new_v4(),
        natal,
        insight,
        grounding,
    }))
}

/// Market context: request trend, else the configured trend, else the feed
async fn resolve_market(
    state: &AppState,
    requested: Option<MarketTrend>,
) -> Option<MarketContext> {
    if let Some(trend) = requested.or(state.config.market_trend) {
        return Some(MarketContext::with_trend(trend));
    }

    match state.market.market_context().await {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            tracing::warn!("Market feed {} unavailable: {}", state.market.name(), e);
            None
        }
    }
}

/// Pairwise sign compatibility
pub async fn compatibility_handler(
    Json(payload): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityResponse>, ApiError> {
    let sign_a = parse_sign(&payload.sign_a)?;
    let sign_b = parse_sign(&payload.sign_b)?;
    let score = compatibility(sign_a, sign_b);

    Ok(Json(CompatibilityResponse {
        sign_a,
        sign_b,
        score,
        rating: Energy::from_score(score),
    }))
}

/// Today's cosmic weather for `?sign=`
pub async fn cosmic_weather_handler(
    Query(query): Query<WeatherQuery>,
) -> Result<Json<CosmicWeather>, ApiError> {
    let sign = parse_sign(&query.sign)?;
    let sky = CurrentTransits::on(Utc::now().date_naive());

    Ok(Json(cosmic_weather(sign, sky.sun, sky.moon)))
}

/// Today's general transit snapshot
pub async fn transits_handler() -> Json<TransitSnapshot> {
    Json(TransitSnapshot::at(Utc::now(), None))
}

fn parse_sign(raw: &str) -> Result<ZodiacSign, ApiError> {
    raw.parse::<ZodiacSign>().map_err(|e| bad_request("UNKNOWN_SIGN", &e))
}

fn bad_request(code: &str, err: &AstroError) -> ApiError {
    tracing::debug!("Rejected request: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use astro_engine::{InsightEngine, StaticMarketFeed};
    use rust_decimal_macros::dec;

    use crate::config::ServerConfig;

    fn state(config: ServerConfig) -> AppState {
        AppState {
            market: Arc::new(StaticMarketFeed::with_change(dec!(-5))),
            insight: InsightEngine::new(),
            config: Arc::new(config),
        }
    }

    fn insight_request(date: &str, trend: Option<&str>) -> InsightRequest {
        InsightRequest {
            birth: BirthInput::new(date).with_time("09:45").with_place("Paris"),
            market_trend: trend.map(String::from),
            include_grounding: false,
        }
    }

    #[tokio::test]
    async fn test_health_reports_feed() {
        let Json(health) = health_check(State(state(ServerConfig::default()))).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.market_feed, "StaticMarket");
        assert!(health.market_feed_healthy);
    }

    #[tokio::test]
    async fn test_natal_degrades_on_bad_date() {
        let Json(response) = natal_handler(Json(BirthInput::new("31/31/2020"))).await;
        assert!(response.report.is_degraded());
        assert_eq!(response.report.profile.sun_sign, None);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["profile"]["sun_sign"], "Unknown");
        assert!(json["error"].is_string());
        assert!(json["report_id"].is_string());
    }

    #[tokio::test]
    async fn test_insight_market_precedence() {
        // request trend wins over config and feed
        let configured = state(ServerConfig {
            market_trend: Some(MarketTrend::Bullish),
            ..ServerConfig::default()
        });
        let request = insight_request("1992-05-10", Some("neutral"));
        let Json(resp) = insight_handler(State(configured.clone()), Json(request)).await.unwrap();
        assert_eq!(resp.insight.market.unwrap().trend, MarketTrend::Neutral);

        // then the configured trend
        let request = insight_request("1992-05-10", None);
        let Json(resp) = insight_handler(State(configured), Json(request)).await.unwrap();
        assert_eq!(resp.insight.market.unwrap().trend, MarketTrend::Bullish);

        // then the feed (-5% is bearish)
        let request = insight_request("1992-05-10", None);
        let Json(resp) = insight_handler(State(state(ServerConfig::default())), Json(request))
            .await
            .unwrap();
        let market = resp.insight.market.unwrap();
        assert_eq!(market.trend, MarketTrend::Bearish);
        assert_eq!(market.btc_change_24h, Some(dec!(-5)));
    }

    #[tokio::test]
    async fn test_insight_rejects_bad_trend() {
        let result = insight_handler(
            State(state(ServerConfig::default())),
            Json(insight_request("1992-05-10", Some("to the moon"))),
        )
        .await;
        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_MARKET_TREND");
    }

    #[tokio::test]
    async fn test_insight_for_degraded_birth_data() {
        let request = insight_request("garbage", None);
        let Json(resp) = insight_handler(State(state(ServerConfig::default())), Json(request))
            .await
            .unwrap();
        assert!(resp.natal.is_degraded());
        assert_eq!(resp.insight.alignment.score, 50);
        assert!(resp.grounding.is_none());
    }

    #[tokio::test]
    async fn test_insight_with_grounding() {
        let mut request = insight_request("1993-12-30", Some("bearish"));
        request.include_grounding = true;
        let Json(resp) = insight_handler(State(state(ServerConfig::default())), Json(request))
            .await
            .unwrap();

        let grounding = resp.grounding.unwrap();
        let json_start = grounding.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&grounding[json_start..]).unwrap();
        assert_eq!(value["natal"]["profile"]["sun_sign"], "Capricorn");
        assert_eq!(value["market"]["trend"], "bearish");
    }

    #[tokio::test]
    async fn test_natal_survives_impossible_latitude() {
        let input = BirthInput::new("1993-12-30")
            .with_time("14:30")
            .with_coordinates(1e300, 0.0);
        let Json(response) = natal_handler(Json(input)).await;
        assert!(!response.report.is_degraded());
        assert!(response.report.profile.rising_sign.is_some());
    }

    #[tokio::test]
    async fn test_compatibility_endpoint() {
        let Json(resp) = compatibility_handler(Json(CompatibilityRequest {
            sign_a: "aries".into(),
            sign_b: "LEO".into(),
        }))
        .await
        .unwrap();
        assert_eq!(resp.score, 100);
        assert_eq!(resp.rating, Energy::HighlyFavorable);

        let (status, Json(body)) = compatibility_handler(Json(CompatibilityRequest {
            sign_a: "Ophiuchus".into(),
            sign_b: "Leo".into(),
        }))
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "UNKNOWN_SIGN");
    }

    #[tokio::test]
    async fn test_cosmic_weather_endpoint() {
        let Json(weather) = cosmic_weather_handler(Query(WeatherQuery { sign: "Pisces".into() }))
            .await
            .unwrap();
        assert!(weather.solar_score <= 100);
        assert!(!weather.advice.is_empty());

        assert!(cosmic_weather_handler(Query(WeatherQuery { sign: String::new() })).await.is_err());
    }

    #[tokio::test]
    async fn test_transits_endpoint() {
        let Json(snapshot) = transits_handler().await;
        assert!(snapshot.natal_sun.is_none());
        assert!(!snapshot.solar_return);
    }
}
