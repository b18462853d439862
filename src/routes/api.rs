//! Restaurant, pizza and association routes.

use crate::handlers::{pizzas, restaurant_pizzas, restaurants};
use crate::state::AppState;
use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

async fn index() -> Html<&'static str> {
    Html("<h1>Pizza Restaurants</h1>")
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/restaurants", get(restaurants::list))
        .route(
            "/restaurants/:id",
            get(restaurants::read).delete(restaurants::delete),
        )
        .route("/pizzas", get(pizzas::list))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create))
        .with_state(state)
}
