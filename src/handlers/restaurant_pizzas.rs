use crate::error::AppError;
use crate::models::{NewRestaurantPizza, RestaurantPizzaExpand};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;

/// Create an association; the response embeds both the pizza and the restaurant.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewRestaurantPizza::from_json(&body)?;
    let (row, restaurant, pizza) = CrudService::create_restaurant_pizza(&state.pool, &input).await?;
    let view = row.to_view(RestaurantPizzaExpand::both(&pizza, &restaurant));
    Ok((StatusCode::CREATED, Json(view)))
}
