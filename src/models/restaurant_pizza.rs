use crate::models::{Pizza, PizzaView, Restaurant, RestaurantView};
use crate::sql::Table;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

impl Table for RestaurantPizza {
    const TABLE: &'static str = "restaurant_pizzas";
    const KIND: &'static str = "RestaurantPizza";
    const COLUMNS: &'static [&'static str] = &["id", "price", "restaurant_id", "pizza_id"];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// Which related rows to embed in a [`RestaurantPizzaView`]. Each side is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestaurantPizzaExpand<'a> {
    pub pizza: Option<&'a Pizza>,
    pub restaurant: Option<&'a Restaurant>,
}

impl<'a> RestaurantPizzaExpand<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pizza(pizza: &'a Pizza) -> Self {
        Self {
            pizza: Some(pizza),
            restaurant: None,
        }
    }

    pub fn both(pizza: &'a Pizza, restaurant: &'a Restaurant) -> Self {
        Self {
            pizza: Some(pizza),
            restaurant: Some(restaurant),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pizza: Option<PizzaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantView>,
}

impl RestaurantPizza {
    /// The nested restaurant, when requested, is always the flat view.
    pub fn to_view(&self, expand: RestaurantPizzaExpand<'_>) -> RestaurantPizzaView {
        RestaurantPizzaView {
            id: self.id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
            pizza: expand.pizza.map(Pizza::to_view),
            restaurant: expand.restaurant.map(Restaurant::to_view),
        }
    }
}
