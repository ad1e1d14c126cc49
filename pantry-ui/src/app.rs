//! Application state and event handling
//!
//! [`App`] owns every piece of client state (selection, custom input field,
//! recipe session). Events are handled one at a time; after each mutation
//! the affected panels are pushed to the [`View`]. Network work is not done
//! here: starting a request returns an [`Effect`] for the event loop to run,
//! and the outcome comes back later as [`AppEvent::RequestSettled`].

use crate::catalog::Catalog;
use crate::client::GenerateError;
use crate::events::{AppEvent, UiEvent};
use crate::render::{CatalogPanel, RecipePanel, SelectionPanel};
use crate::selection::{Ingredient, Selection};
use crate::session::{RecipeSession, SessionEvent};
use pantry_common::api::GenerateRequest;
use tracing::{debug, error, info, warn};

/// Rendering surface driven by the app
pub trait View {
    fn show_catalog(&mut self, panel: &CatalogPanel);
    fn show_selection(&mut self, panel: &SelectionPanel);
    fn show_recipes(&mut self, panel: &RecipePanel);
    fn set_generate_enabled(&mut self, enabled: bool);
    fn set_custom_input(&mut self, text: &str);
}

/// Work requested from the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send this request to the recipe service
    Generate(GenerateRequest),
}

pub struct App {
    catalog: Catalog,
    selection: Selection,
    session: RecipeSession,
    custom_input: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            session: RecipeSession::new(),
            custom_input: String::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn session(&self) -> &RecipeSession {
        &self.session
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    /// Loading flag
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Generate is enabled iff something is selected and no request is outstanding
    pub fn can_generate(&self) -> bool {
        !self.selection.is_empty() && !self.session.is_loading()
    }

    /// Push the full initial state to the view
    pub fn render_all<V: View>(&self, view: &mut V) {
        view.show_catalog(&CatalogPanel::render(&self.catalog, &self.selection));
        view.show_selection(&SelectionPanel::render(&self.selection));
        view.show_recipes(&RecipePanel::render(self.session.display()));
        view.set_custom_input(&self.custom_input);
        view.set_generate_enabled(self.can_generate());
    }

    pub fn handle<V: View>(&mut self, event: AppEvent, view: &mut V) -> Option<Effect> {
        match event {
            AppEvent::Ui(ui) => self.handle_ui(ui, view),
            AppEvent::RequestSettled(result) => {
                match &result {
                    Ok(recipes) => info!(count = recipes.len(), "Recipe request succeeded"),
                    Err(e @ GenerateError::Transport(_)) => error!("Recipe request failed: {}", e),
                    Err(e) => warn!("Recipe request failed: {}", e),
                }

                if let Err(e) = self.session.apply(SessionEvent::Settle(result)) {
                    warn!("Ignoring request outcome: {}", e);
                    return None;
                }

                self.refresh_recipes(view);
                view.set_generate_enabled(self.can_generate());
                None
            }
        }
    }

    fn handle_ui<V: View>(&mut self, event: UiEvent, view: &mut V) -> Option<Effect> {
        match event {
            UiEvent::CatalogItemClicked(id) => {
                let Some(ingredient) = Ingredient::normalize(&id) else {
                    debug!("Blank catalog identifier ignored");
                    return None;
                };
                let selected = self.selection.toggle(ingredient);
                debug!(ingredient = %id, selected, "Catalog item toggled");
                self.refresh_selection(view);
                None
            }
            UiEvent::CustomInputChanged(text) => {
                self.custom_input = text;
                None
            }
            UiEvent::CustomInputSubmitted => {
                let raw = std::mem::take(&mut self.custom_input);
                if self.selection.add_custom(&raw) {
                    self.refresh_selection(view);
                } else {
                    debug!(input = %raw, "Custom ingredient ignored (blank or duplicate)");
                }
                view.set_custom_input(&self.custom_input);
                None
            }
            UiEvent::RemoveClicked(name) => {
                if self.selection.remove(&name) {
                    self.refresh_selection(view);
                }
                None
            }
            UiEvent::ClearClicked => {
                self.selection.clear();
                self.session.hide();
                self.refresh_selection(view);
                self.refresh_recipes(view);
                None
            }
            UiEvent::GenerateClicked => self.start_request(view),
        }
    }

    fn start_request<V: View>(&mut self, view: &mut V) -> Option<Effect> {
        if !self.can_generate() {
            debug!("Generate ignored: action disabled");
            return None;
        }

        let event = SessionEvent::Start {
            ingredient_count: self.selection.len(),
        };
        if let Err(e) = self.session.apply(event) {
            warn!("Cannot start recipe request: {}", e);
            return None;
        }

        info!(ingredients = self.selection.len(), "Requesting recipes");

        self.refresh_recipes(view);
        view.set_generate_enabled(self.can_generate());
        Some(Effect::Generate(self.selection.to_request()))
    }

    fn refresh_selection<V: View>(&self, view: &mut V) {
        view.show_selection(&SelectionPanel::render(&self.selection));
        view.show_catalog(&CatalogPanel::render(&self.catalog, &self.selection));
        view.set_generate_enabled(self.can_generate());
    }

    fn refresh_recipes<V: View>(&self, view: &mut V) {
        view.show_recipes(&RecipePanel::render(self.session.display()));
    }
}
