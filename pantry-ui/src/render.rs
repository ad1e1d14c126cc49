//! Display rendering
//!
//! Pure functions from client state to panels. Panels are plain data so they
//! can be compared in tests; their `Display` impls give the text form used by
//! the terminal front end.

use crate::catalog::Catalog;
use crate::selection::Selection;
use crate::session::DisplayState;
use pantry_common::api::Recipe;
use std::fmt;

pub const EMPTY_SELECTION_MESSAGE: &str = "No ingredients selected yet";
pub const LOADING_MESSAGE: &str = "Generating delicious recipes with your ingredients...";
pub const EMPTY_RESULTS_TITLE: &str = "No recipes found";
pub const EMPTY_RESULTS_HINT: &str = "Try selecting different ingredients or check back later!";
pub const ERROR_PREFIX: &str = "Oops!";

const REMOVE_MARK: &str = "×";
const SPINNER: &str = "⏳";

/// Selected-ingredient area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPanel {
    Placeholder,
    /// One tag per ingredient, each removable
    Tags(Vec<String>),
}

impl SelectionPanel {
    pub fn render(selection: &Selection) -> Self {
        if selection.is_empty() {
            SelectionPanel::Placeholder
        } else {
            SelectionPanel::Tags(selection.iter().map(|i| i.to_string()).collect())
        }
    }
}

impl fmt::Display for SelectionPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPanel::Placeholder => f.write_str(EMPTY_SELECTION_MESSAGE),
            SelectionPanel::Tags(tags) => {
                let rendered: Vec<String> = tags
                    .iter()
                    .map(|tag| format!("[{} {}]", tag, REMOVE_MARK))
                    .collect();
                f.write_str(&rendered.join(" "))
            }
        }
    }
}

/// Catalog item as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemView {
    pub id: String,
    pub selected: bool,
}

/// Catalog area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPanel {
    pub items: Vec<CatalogItemView>,
}

impl CatalogPanel {
    pub fn render(catalog: &Catalog, selection: &Selection) -> Self {
        Self {
            items: catalog
                .entries(selection)
                .into_iter()
                .map(|entry| CatalogItemView {
                    id: entry.id.to_string(),
                    selected: entry.selected,
                })
                .collect(),
        }
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id.as_str())
            .collect()
    }
}

impl fmt::Display for CatalogPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("  ")?;
            }
            let mark = if item.selected { "x" } else { " " };
            write!(f, "[{}] {}", mark, item.id)?;
        }
        Ok(())
    }
}

/// One recipe summary in the results grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub ingredients: String,
    /// Instructions split on line breaks
    pub instruction_lines: Vec<String>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            instruction_lines: recipe.instruction_lines().map(str::to_string).collect(),
        }
    }
}

/// Recipe results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipePanel {
    Hidden,
    Loading,
    Grid(Vec<RecipeCard>),
    Empty,
    Error(String),
}

impl RecipePanel {
    pub fn render(display: DisplayState<'_>) -> Self {
        match display {
            DisplayState::Hidden => RecipePanel::Hidden,
            DisplayState::Loading => RecipePanel::Loading,
            DisplayState::Results(recipes) => {
                RecipePanel::Grid(recipes.iter().map(RecipeCard::from).collect())
            }
            DisplayState::Empty => RecipePanel::Empty,
            DisplayState::Error(message) => RecipePanel::Error(message.to_string()),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, RecipePanel::Hidden)
    }
}

impl fmt::Display for RecipePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipePanel::Hidden => Ok(()),
            RecipePanel::Loading => write!(f, "{} {}", SPINNER, LOADING_MESSAGE),
            RecipePanel::Grid(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "== {} ==", card.title)?;
                    writeln!(f, "Ingredients:")?;
                    writeln!(f, "  {}", card.ingredients)?;
                    writeln!(f, "Instructions:")?;
                    for line in &card.instruction_lines {
                        writeln!(f, "  {}", line)?;
                    }
                }
                Ok(())
            }
            RecipePanel::Empty => write!(f, "{}\n{}", EMPTY_RESULTS_TITLE, EMPTY_RESULTS_HINT),
            RecipePanel::Error(message) => write!(f, "{} {}", ERROR_PREFIX, message),
        }
    }
}
