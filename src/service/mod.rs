//! Data access: typed CRUD over the three tables plus creation-input validation.

mod crud;
mod validation;
pub use crud::{CrudService, Record};
pub use validation::{validate_price, MAX_PRICE, MIN_PRICE};
