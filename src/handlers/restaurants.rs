//! Restaurant handlers: list, detail, delete.

use crate::error::AppError;
use crate::models::{Restaurant, RestaurantView};
use crate::service::CrudService;
use crate::sql::Table;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

/// An id segment that is not an integer names no restaurant.
fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    let Path(id) = path.map_err(|_| AppError::NotFound(Restaurant::KIND))?;
    Ok(id)
}

/// Flat views only; associations are not expanded in lists.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RestaurantView>>, AppError> {
    let rows = CrudService::fetch_all::<Restaurant>(&state.pool).await?;
    Ok(Json(rows.iter().map(Restaurant::to_view).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantView>, AppError> {
    let view = CrudService::restaurant_detail(&state.pool, restaurant_id(path)?).await?;
    Ok(Json(view))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    CrudService::delete_restaurant(&state.pool, restaurant_id(path)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
