use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use vnfolio_core::{performance::PerformanceServiceTrait, DefaultPortfolioServiceTrait};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        DaysQuery, PerformanceResponse, PortfolioBody, PortfolioConfigResponse,
        SavedPortfolioResponse,
    },
};

#[utoipa::path(
    post,
    path = "/api/portfolio/performance",
    params(DaysQuery),
    request_body = PortfolioBody,
    responses(
        (status = 200, body = PerformanceResponse),
        (status = 400, description = "Invalid portfolio"),
        (status = 404, description = "No data")
    )
)]
pub async fn calculate_performance(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DaysQuery>, QueryRejection>,
    payload: Result<Json<PortfolioBody>, JsonRejection>,
) -> ApiResult<Json<PerformanceResponse>> {
    let Query(query) = query?;
    let Json(body) = payload?;
    let request = body.into_request(query.days());

    let report = state
        .performance_service
        .calculate_performance(&request, state.today())
        .await?;
    Ok(Json(report.into()))
}

#[utoipa::path(
    get,
    path = "/api/portfolio/default",
    responses((status = 200, body = PortfolioConfigResponse))
)]
pub async fn get_default_portfolio(
    State(state): State<Arc<AppState>>,
) -> Json<PortfolioConfigResponse> {
    Json(state.default_portfolio_service.get_default().into())
}

#[utoipa::path(
    post,
    path = "/api/portfolio/default",
    request_body = PortfolioBody,
    responses(
        (status = 200, body = SavedPortfolioResponse),
        (status = 400, description = "Invalid portfolio"),
        (status = 500, description = "Save failed")
    )
)]
pub async fn save_default_portfolio(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PortfolioBody>, JsonRejection>,
) -> ApiResult<Json<SavedPortfolioResponse>> {
    let Json(body) = payload?;
    let saved = state
        .default_portfolio_service
        .save_default(&body.holdings())?;

    tracing::info!("Saved default portfolio with {} holdings", saved.holdings.len());
    Ok(Json(SavedPortfolioResponse {
        message: "Default portfolio saved successfully".to_string(),
        portfolio: saved.into(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/performance", post(calculate_performance))
        .route(
            "/portfolio/default",
            get(get_default_portfolio).post(save_default_portfolio),
        )
}
