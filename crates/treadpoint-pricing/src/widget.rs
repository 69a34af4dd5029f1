//! Explicit per-widget state for the pricing tabs and sliders.
//!
//! The page keeps one slider per category and re-renders the table on tab
//! clicks and slider drags. All of that state lives here so the selection
//! logic is testable without any UI runtime: current diameter per category,
//! plus the last rendered `category-diameter` key used to suppress
//! redundant rebuilds when a drag resolves to the same nearest diameter.

use std::collections::BTreeMap;

use crate::book::PriceBook;
use crate::nearest::nearest;
use crate::PricingError;

/// Everything the glue needs to rebuild one table and its slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRender {
    pub category: String,
    pub diameter: u32,
    pub slider_min: u32,
    pub slider_max: u32,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct PricingWidget {
    current: BTreeMap<String, u32>,
    rendered: BTreeMap<String, String>,
}

impl PricingWidget {
    /// Create widget state seeded with per-category default diameters
    /// (normally the category registry's `default_diameter` values).
    #[must_use]
    pub fn new(defaults: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            current: defaults.into_iter().collect(),
            rendered: BTreeMap::new(),
        }
    }

    /// The diameter the category's slider currently points at.
    #[must_use]
    pub fn current_diameter(&self, category: &str) -> Option<u32> {
        self.current.get(category).copied()
    }

    /// Activate a category tab: sync the slider into the category's range
    /// (a diameter that left the range snaps to the smallest available),
    /// then render its table.
    ///
    /// Returns `Ok(None)` when the effective table is the one already
    /// rendered for this category.
    ///
    /// # Errors
    ///
    /// `PricingError::UnknownCategory` when the book has no such category.
    pub fn activate_category(
        &mut self,
        book: &PriceBook,
        category: &str,
    ) -> Result<Option<TableRender>, PricingError> {
        let diameters = self.known_diameters(book, category)?;

        let current = self
            .current
            .get(category)
            .copied()
            .filter(|d| diameters.contains(d))
            .unwrap_or(diameters[0]);
        self.current.insert(category.to_string(), current);

        self.select(book, category, current)
    }

    /// Handle a slider move: resolve the requested diameter to the nearest
    /// available one, remember it, and return the table, or `None` when
    /// the effective `(category, diameter)` pair did not change.
    ///
    /// # Errors
    ///
    /// `PricingError::UnknownCategory` when the book has no such category.
    pub fn select(
        &mut self,
        book: &PriceBook,
        category: &str,
        requested: u32,
    ) -> Result<Option<TableRender>, PricingError> {
        let diameters = self.known_diameters(book, category)?;

        let resolved = if diameters.contains(&requested) {
            requested
        } else {
            nearest(&diameters, requested).unwrap_or(requested)
        };
        self.current.insert(category.to_string(), resolved);

        let key = format!("{category}-{resolved}");
        if self.rendered.get(category) == Some(&key) {
            return Ok(None);
        }
        self.rendered.insert(category.to_string(), key);

        let rows = book.rows(category, resolved).unwrap_or_default().to_vec();
        Ok(Some(TableRender {
            category: category.to_string(),
            diameter: resolved,
            slider_min: diameters[0],
            slider_max: diameters[diameters.len() - 1],
            columns: book.columns().to_vec(),
            rows,
        }))
    }

    fn known_diameters(
        &self,
        book: &PriceBook,
        category: &str,
    ) -> Result<Vec<u32>, PricingError> {
        book.diameters(category)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| PricingError::UnknownCategory(category.to_string()))
    }
}
