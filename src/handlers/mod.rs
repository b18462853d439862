//! HTTP handlers: thin glue from method + path to `CrudService`.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;
