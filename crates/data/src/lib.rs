//! Loading and validation of the slot configuration from an assets directory.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
