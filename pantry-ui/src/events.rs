//! Events processed by the app, one at a time

use crate::client::GenerateError;
use pantry_common::api::Recipe;

/// User interaction on the interface surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Catalog item clicked, keyed by its identifier
    CatalogItemClicked(String),
    /// Custom ingredient field edited
    CustomInputChanged(String),
    /// Custom ingredient add button (or Enter in the field)
    CustomInputSubmitted,
    /// Removal affordance on a selected tag
    RemoveClicked(String),
    GenerateClicked,
    ClearClicked,
}

/// Everything the event loop feeds into [`crate::App::handle`]
#[derive(Debug, Clone)]
pub enum AppEvent {
    Ui(UiEvent),
    /// The outstanding generate request finished
    RequestSettled(Result<Vec<Recipe>, GenerateError>),
}

impl From<UiEvent> for AppEvent {
    fn from(event: UiEvent) -> Self {
        AppEvent::Ui(event)
    }
}
