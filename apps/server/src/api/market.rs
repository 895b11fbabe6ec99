use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use vnfolio_core::performance::PerformanceServiceTrait;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DaysQuery, HistoryResponse, StockInfoResponse},
};

#[utoipa::path(
    get,
    path = "/api/vnindex",
    params(DaysQuery),
    responses((status = 200, body = HistoryResponse), (status = 404, description = "No data"))
)]
pub async fn get_benchmark_history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> ApiResult<Json<HistoryResponse>> {
    let Query(query) = query?;
    let history = state
        .performance_service
        .get_benchmark_history(query.days(), state.today())
        .await?;
    Ok(Json(history.into()))
}

#[utoipa::path(
    get,
    path = "/api/stock/{symbol}",
    params(("symbol" = String, Path, description = "Ticker, e.g. VNM"), DaysQuery),
    responses((status = 200, body = HistoryResponse), (status = 404, description = "No data"))
)]
pub async fn get_stock_history(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> ApiResult<Json<HistoryResponse>> {
    let Query(query) = query?;
    let history = state
        .performance_service
        .get_symbol_history(&symbol, query.days(), state.today())
        .await?;
    Ok(Json(history.into()))
}

#[utoipa::path(
    get,
    path = "/api/stock/{symbol}/info",
    params(("symbol" = String, Path, description = "Ticker, e.g. VNM")),
    responses((status = 200, body = StockInfoResponse), (status = 404, description = "No data"))
)]
pub async fn get_stock_info(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StockInfoResponse>> {
    let snapshot = state
        .performance_service
        .get_symbol_snapshot(&symbol, state.today())
        .await?;
    Ok(Json(snapshot.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/vnindex", get(get_benchmark_history))
        .route("/stock/{symbol}", get(get_stock_history))
        .route("/stock/{symbol}/info", get(get_stock_info))
}
