use crate::error::AppError;
use crate::models::{Pizza, PizzaView};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PizzaView>>, AppError> {
    let rows = CrudService::fetch_all::<Pizza>(&state.pool).await?;
    Ok(Json(rows.iter().map(Pizza::to_view).collect()))
}
