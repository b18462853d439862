use crate::models::RestaurantPizzaView;
use crate::sql::Table;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Table for Restaurant {
    const TABLE: &'static str = "restaurants";
    const KIND: &'static str = "Restaurant";
    const COLUMNS: &'static [&'static str] = &["id", "name", "address"];
}

#[derive(Clone, Debug)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestaurantView {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Present only on the detail representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_pizzas: Option<Vec<RestaurantPizzaView>>,
}

impl Restaurant {
    /// `id`, `name` and `address` only; used for lists and nested references.
    pub fn to_view(&self) -> RestaurantView {
        RestaurantView {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            restaurant_pizzas: None,
        }
    }

    /// Flat fields plus the given association views.
    pub fn to_detail_view(&self, restaurant_pizzas: Vec<RestaurantPizzaView>) -> RestaurantView {
        RestaurantView {
            restaurant_pizzas: Some(restaurant_pizzas),
            ..self.to_view()
        }
    }
}
