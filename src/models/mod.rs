//! Entities, creation inputs and their JSON views.
//!
//! Relations are held as integer ids only. Nested objects appear in a view
//! only when the caller hands the related row to the view builder, one hop
//! at a time; `Pizza` has no expansion at all.

mod pizza;
mod restaurant;
mod restaurant_pizza;

pub use pizza::{NewPizza, Pizza, PizzaView};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantView};
pub use restaurant_pizza::{
    NewRestaurantPizza, RestaurantPizza, RestaurantPizzaExpand, RestaurantPizzaView,
};
