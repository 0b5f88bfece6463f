//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod example;

pub use example::{ActiveModel as ExampleActiveModel, Entity as ExampleEntity, Model as ExampleModel};
