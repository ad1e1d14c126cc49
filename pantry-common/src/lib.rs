//! # Pantry Common Library
//!
//! Shared code for the Pantry recipe client including:
//! - Error types
//! - Configuration loading (CLI / environment / TOML / compiled defaults)
//! - Request/response types of the recipe generation endpoint

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
