//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the ladder use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::application::dto::{LadderDefaultsDto, PlanLadderRequestDto, PlanLadderResponseDto};
use crate::application::ports::PriceFeedPort;
use crate::application::use_cases::PlanLadderUseCase;
use crate::domain::ladder::{LadderMode, nudge_price};

use super::request::{DefaultsQuery, NudgeRequest};
use super::response::{
    ApiError, HealthResponse, NudgeResponse, PriceResponse, require_positive_price,
};

/// Application state shared across handlers.
pub struct AppState<P>
where
    P: PriceFeedPort + ?Sized,
{
    /// Use case for planning ladders.
    pub plan_ladder: Arc<PlanLadderUseCase<P>>,
    /// Application version.
    pub version: String,
}

impl<P> Clone for AppState<P>
where
    P: PriceFeedPort + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            plan_ladder: Arc::clone(&self.plan_ladder),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: PriceFeedPort + ?Sized + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/defaults", get(defaults))
        .route("/api/v1/ladder", post(plan_ladder))
        .route("/api/v1/ladder/table", post(plan_ladder_table))
        .route("/api/v1/price/nudge", post(nudge))
        .route("/api/v1/price/{symbol}", get(latest_price))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<P>(State(state): State<AppState<P>>) -> Json<HealthResponse>
where
    P: PriceFeedPort + ?Sized,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Default form values for a mode.
async fn defaults<P>(
    State(state): State<AppState<P>>,
    Query(query): Query<DefaultsQuery>,
) -> Json<LadderDefaultsDto>
where
    P: PriceFeedPort + ?Sized,
{
    let mode = query.mode.unwrap_or(LadderMode::Pyramid);
    Json(state.plan_ladder.defaults(mode))
}

/// Plan a ladder and return levels, summary and display model.
async fn plan_ladder<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<PlanLadderRequestDto>,
) -> Result<Json<PlanLadderResponseDto>, ApiError>
where
    P: PriceFeedPort + ?Sized,
{
    let response = state.plan_ladder.execute(&request).await?;
    Ok(Json(response))
}

/// Plan a ladder and return it as a plain-text table.
async fn plan_ladder_table<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<PlanLadderRequestDto>,
) -> Result<String, ApiError>
where
    P: PriceFeedPort + ?Sized,
{
    let response = state.plan_ladder.execute(&request).await?;
    Ok(response.view.to_table())
}

/// Latest public price for a symbol.
async fn latest_price<P>(
    State(state): State<AppState<P>>,
    Path(symbol): Path<String>,
) -> Result<Json<PriceResponse>, ApiError>
where
    P: PriceFeedPort + ?Sized,
{
    let quote = state.plan_ladder.latest_price(&symbol).await?;
    Ok(Json(PriceResponse::from(quote)))
}

/// Jitter a price within the nudge band.
async fn nudge(Json(request): Json<NudgeRequest>) -> Result<Json<NudgeResponse>, ApiError> {
    let price = require_positive_price(request.price)?;
    let nudged = nudge_price(price, &mut rand::rng());
    Ok(Json(NudgeResponse { price: nudged }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;
    use crate::infrastructure::http::response::ErrorResponse;
    use crate::infrastructure::price_feed::MockPriceFeed;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let feed = MockPriceFeed::new();
        feed.set_price("BTCUSDT", dec!(95000));
        let state = AppState {
            plan_ladder: Arc::new(PlanLadderUseCase::new(
                Arc::new(feed),
                DefaultsConfig::default(),
            )),
            version: "1.0.0-test".to_string(),
        };
        create_router(state)
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    fn pyramid_request() -> serde_json::Value {
        serde_json::json!({
            "mode": "pyramid",
            "anchor_price": "95000",
            "total_size": "1",
            "order_count": 5,
            "multiplier": "0.5",
            "boundary_price": "90000"
        })
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn defaults_for_reverse_pyramid() {
        let response = create_test_app()
            .oneshot(get("/api/v1/defaults?mode=reverse_pyramid"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let defaults: LadderDefaultsDto =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(defaults.mode, LadderMode::ReversePyramid);
        assert_eq!(defaults.boundary_price, dec!(100000));
        assert_eq!(defaults.boundary_label, "highest sell price");
    }

    #[tokio::test]
    async fn defaults_without_mode_is_pyramid() {
        let response = create_test_app()
            .oneshot(get("/api/v1/defaults"))
            .await
            .unwrap();

        let defaults: LadderDefaultsDto =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(defaults.mode, LadderMode::Pyramid);
    }

    #[tokio::test]
    async fn plan_ladder_returns_levels_and_summary() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder", &pyramid_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let planned: PlanLadderResponseDto =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(planned.levels.len(), 5);
        assert_eq!(planned.levels[1].size, dec!(0.15));
        assert_eq!(planned.summary.volume_weighted_average_price, dec!(91875));
        assert_eq!(planned.summary.insertion_index, 3);
        assert_eq!(planned.view.entries.len(), 6);
    }

    #[tokio::test]
    async fn plan_ladder_with_symbol_lookup() {
        let body = serde_json::json!({
            "mode": "reverse_pyramid",
            "symbol": "btc",
            "total_size": "0.5",
            "order_count": "4",
            "multiplier": "1",
            "boundary_price": "98000"
        });

        // The mock feed only knows exact symbols, so "btc" is not found
        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let mut body = body;
        body["symbol"] = serde_json::json!("btcusdt");
        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let planned: PlanLadderResponseDto =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(planned.quote.unwrap().price, dec!(95000));
        assert_eq!(planned.levels[3].price, dec!(98000));
        let total: Decimal = planned.levels.iter().map(|level| level.size).sum();
        assert_eq!(total.round_dp(20), dec!(0.5));
    }

    #[tokio::test]
    async fn plan_ladder_rejects_single_order() {
        let mut body = pyramid_request();
        body["order_count"] = serde_json::json!(1);

        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_SCENARIO");
    }

    #[tokio::test]
    async fn plan_ladder_requires_anchor_or_symbol() {
        let mut body = pyramid_request();
        body.as_object_mut().unwrap().remove("anchor_price");

        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MISSING_ANCHOR");
    }

    #[tokio::test]
    async fn plan_ladder_table_is_plain_text() {
        let response = create_test_app()
            .oneshot(post_json("/api/v1/ladder/table", &pyramid_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let table = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(table.contains("average 91875.00"));
        assert!(table.contains("average entry price: 91875.00"));
    }

    #[tokio::test]
    async fn latest_price_known_and_unknown() {
        let response = create_test_app()
            .oneshot(get("/api/v1/price/BTCUSDT"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let price: PriceResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(price.price, dec!(95000));

        let response = create_test_app()
            .oneshot(get("/api/v1/price/XYZUSDT"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn nudge_stays_near_price() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/v1/price/nudge",
                &serde_json::json!({ "price": "95000" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let nudged: NudgeResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!((nudged.price - dec!(95000)).abs() <= dec!(4.76));
    }

    #[tokio::test]
    async fn nudge_rejects_zero() {
        let response = create_test_app()
            .oneshot(post_json(
                "/api/v1/price/nudge",
                &serde_json::json!({ "price": 0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
