use crate::sql::Table;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl Table for Pizza {
    const TABLE: &'static str = "pizzas";
    const KIND: &'static str = "Pizza";
    const COLUMNS: &'static [&'static str] = &["id", "name", "ingredients"];
}

#[derive(Clone, Debug)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

/// Flat pizza representation. Never carries restaurants or associations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PizzaView {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl Pizza {
    pub fn to_view(&self) -> PizzaView {
        PizzaView {
            id: self.id,
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
        }
    }
}
