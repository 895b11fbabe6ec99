mod market;
mod portfolio;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        HistoryResponse, PerformancePoint, PerformanceResponse, PerformanceSummaryResponse,
        PortfolioBody, PortfolioConfigResponse, QuoteBar, SavedPortfolioResponse,
        StatusResponse, StockAllocation, StockInfoResponse,
    },
};

#[utoipa::path(get, path = "/", responses((status = 200, body = StatusResponse)))]
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Stock Portfolio Performance API".to_string(),
        status: "running".to_string(),
    })
}

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        healthz,
        market::get_benchmark_history,
        market::get_stock_history,
        market::get_stock_info,
        portfolio::calculate_performance,
        portfolio::get_default_portfolio,
        portfolio::save_default_portfolio,
    ),
    components(schemas(
        StatusResponse,
        QuoteBar,
        HistoryResponse,
        StockInfoResponse,
        StockAllocation,
        PortfolioBody,
        PerformancePoint,
        PerformanceSummaryResponse,
        PerformanceResponse,
        PortfolioConfigResponse,
        SavedPortfolioResponse,
    )),
    tags((name = "vnfolio"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_headers(Any)
            .allow_methods(Any)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(market::router())
        .merge(portfolio::router());

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
