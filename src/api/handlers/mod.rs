//! HTTP request handlers.

pub mod example_handler;

pub use example_handler::example_routes;
