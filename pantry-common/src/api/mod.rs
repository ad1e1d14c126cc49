//! API types for the recipe generation endpoint

pub mod types;

pub use types::{GenerateRequest, GenerateResponse, Recipe};
