//! pantry-ui - Ingredient picker and recipe client
//!
//! The user builds a selection of ingredients (from a catalog or typed in),
//! sends it to the recipe generation service and gets back rendered recipes.
//!
//! Layout:
//! - [`selection`] / [`catalog`]: the selection store and the catalog it is picked from
//! - [`session`]: the recipe session state machine and derived display state
//! - [`client`]: the HTTP client for the generation endpoint
//! - [`render`]: pure state → panel rendering
//! - [`app`]: event handling, owns all client state
//! - [`runtime`]: single-threaded event loop driving [`app::App`]
//! - [`terminal`]: terminal front end (command parsing + text view)

pub mod app;
pub mod catalog;
pub mod client;
pub mod events;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod terminal;

pub use app::{App, Effect, View};
pub use client::{GenerateError, HttpRecipeClient, RecipeService};
pub use events::{AppEvent, UiEvent};
