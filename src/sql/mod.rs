//! Safe SQL builder: identifiers from `Table` constants only, values as parameters.

mod builder;
pub use builder::*;
