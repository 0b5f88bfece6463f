//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::Page;
pub use response::{Created, CreatedId, NoContent};
