//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Filtering and rendering are in-memory and run inline.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    AppLayout, ForestMapFigure, ForestMapQuery, HealthResponse, ParkListResponse,
    TrendChartSpec, VisitorTrendsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::routes::landing::app_layout;
use crate::services::map_raster::{MAX_RASTER_WIDTH, MIN_RASTER_WIDTH};
use crate::services::{self, RasterOptions};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports the service status and what was loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        datasets: state.repository.summary(),
    }))
}

/// GET /v1/app
///
/// Page list and widget configuration for the shell.
pub async fn get_app_layout(State(state): State<AppState>) -> HandlerResult<AppLayout> {
    Ok(Json(app_layout(state.years, state.repository.park_names())))
}

// =============================================================================
// Forest Cover
// =============================================================================

fn selected_year(state: &AppState, requested: Option<i32>) -> Result<i32, AppError> {
    let year = requested.unwrap_or(state.years.default);
    if !state.years.contains(year) {
        return Err(AppError::BadRequest(format!(
            "year {} is outside {}..={}",
            year, state.years.min, state.years.max
        )));
    }
    Ok(year)
}

/// GET /v1/forest-cover?year=Y
///
/// Scatter map figure of vegetation cover for one year.
pub async fn get_forest_map(
    State(state): State<AppState>,
    Query(query): Query<ForestMapQuery>,
) -> HandlerResult<ForestMapFigure> {
    let year = selected_year(&state, query.year)?;
    let figure = services::get_forest_map(state.repository.as_ref(), year);
    Ok(Json(figure))
}

/// GET /v1/forest-cover/map.png?year=Y&width=W
///
/// The same map rendered as a PNG image.
pub async fn get_forest_map_png(
    State(state): State<AppState>,
    Query(query): Query<ForestMapQuery>,
) -> Result<Response, AppError> {
    let year = selected_year(&state, query.year)?;
    let options = match query.width {
        Some(width) if !(MIN_RASTER_WIDTH..=MAX_RASTER_WIDTH).contains(&width) => {
            return Err(AppError::BadRequest(format!(
                "width must be within {}..={}",
                MIN_RASTER_WIDTH, MAX_RASTER_WIDTH
            )));
        }
        Some(width) => RasterOptions::with_width(width),
        None => RasterOptions::default(),
    };

    let figure = services::get_forest_map(state.repository.as_ref(), year);
    let png = services::rasterize_map(&figure, &options)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

// =============================================================================
// Tourism
// =============================================================================

/// GET /v1/parks
///
/// Park names in source column order.
pub async fn list_parks(State(state): State<AppState>) -> HandlerResult<ParkListResponse> {
    let parks = state.repository.park_names().to_vec();
    let total = parks.len();
    Ok(Json(ParkListResponse { parks, total }))
}

/// GET /v1/visitors?compare=bool&park=name
///
/// Visitor trend chart for one park, or all parks in comparison mode.
pub async fn get_visitor_trends(
    State(state): State<AppState>,
    Query(query): Query<VisitorTrendsQuery>,
) -> HandlerResult<TrendChartSpec> {
    let selection = query.to_selection();
    let spec = services::get_visitor_trends(state.repository.as_ref(), &selection);
    Ok(Json(spec))
}
