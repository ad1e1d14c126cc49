//! Ingredient catalog
//!
//! Fixed list of clickable items. Selection state is never stored here: an
//! item counts as selected exactly when its identifier is in the
//! [`Selection`], so removing a tag or clearing all un-highlights it too.
//! Identifiers are normalized like any ingredient.

use crate::selection::{normalize_key, Selection};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<String>,
}

/// Catalog item paired with its selected marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub id: &'a str,
    pub selected: bool,
}

impl Catalog {
    /// Build a catalog, dropping blank and repeated identifiers
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for item in items {
            let item = normalize_key(item.as_ref());
            if !item.is_empty() && !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    pub fn contains(&self, id: &str) -> bool {
        let key = normalize_key(id);
        self.items.iter().any(|item| *item == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in catalog order, marked against the current selection
    pub fn entries<'a>(&'a self, selection: &Selection) -> Vec<CatalogEntry<'a>> {
        self.items
            .iter()
            .map(|id| CatalogEntry {
                id: id.as_str(),
                selected: selection.contains(id),
            })
            .collect()
    }
}
