//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: the `Example` entity, its query descriptor, the field
//! validation rules and the credential hasher.

pub mod example;
pub mod filter;
pub mod password;
pub mod validation;

pub use example::{Example, ExampleDraft, ExampleResponse};
pub use filter::{ExampleField, ExampleFilter, ExampleSort, SortDirection};
pub use password::{Argon2Hasher, CredentialHasher, PasswordCheck};
