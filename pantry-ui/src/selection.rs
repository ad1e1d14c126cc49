//! Selection store
//!
//! Ordered, duplicate-free list of chosen ingredients. Order is the order of
//! add actions (catalog clicks and custom additions alike); no sorting is
//! ever applied.
//!
//! An ingredient is identified by its trimmed, lowercased text, whether it
//! came from the catalog or the custom input. Lookups normalize their
//! argument the same way, so "Tomato" and "tomato" are one ingredient.

use pantry_common::api::GenerateRequest;
use std::fmt;

/// Trimmed, lowercased form of `raw`
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A single ingredient, identified by its normalized text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient(String);

impl Ingredient {
    /// Normalize a known non-blank value (catalog identifiers, tag names)
    pub fn new(value: &str) -> Self {
        Self(normalize_key(value))
    }

    /// Trim and lowercase free text; `None` when nothing is left
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = normalize_key(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user's current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Ingredient>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the ingredient if present, append it otherwise
    ///
    /// Returns `true` when the ingredient is selected afterwards.
    pub fn toggle(&mut self, ingredient: Ingredient) -> bool {
        if self.remove(ingredient.as_str()) {
            false
        } else {
            self.items.push(ingredient);
            true
        }
    }

    /// Normalize free text and append it unless empty or already selected
    ///
    /// Returns `true` if the selection changed.
    pub fn add_custom(&mut self, raw: &str) -> bool {
        match Ingredient::normalize(raw) {
            Some(ingredient) if !self.contains(ingredient.as_str()) => {
                self.items.push(ingredient);
                true
            }
            _ => false,
        }
    }

    /// Remove the ingredient if present; returns `true` if it was
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let key = normalize_key(ingredient);
        let before = self.items.len();
        self.items.retain(|item| item.as_str() != key);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        let key = normalize_key(ingredient);
        self.items.iter().any(|item| item.as_str() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    /// Request body for the generation endpoint, in selection order
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            ingredients: self.items.iter().map(|i| i.0.clone()).collect(),
        }
    }
}
