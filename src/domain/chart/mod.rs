//! Bar chart aggregate: input entities, value objects and the layout service.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
