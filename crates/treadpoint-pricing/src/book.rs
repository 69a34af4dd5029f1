//! The price book: per-category tables keyed by rim diameter.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::PricingError;

/// Column headers used when the fixture does not supply its own.
pub const DEFAULT_COLUMNS: [&str; 2] = ["Услуга", "Цена"];

/// Fixture shape: an optional `columns` list, then one key per vehicle
/// category mapping diameter strings to row lists.
#[derive(Debug, Deserialize)]
struct RawPriceBook {
    #[serde(default)]
    columns: Option<Vec<String>>,
    #[serde(flatten)]
    categories: BTreeMap<String, BTreeMap<String, Vec<Vec<String>>>>,
}

/// Read-only price data, loaded once per process.
///
/// Diameter keys are integers after parsing; fixture keys that are not
/// numeric are skipped with a warning rather than failing the load.
#[derive(Debug, Clone)]
pub struct PriceBook {
    columns: Vec<String>,
    categories: BTreeMap<String, BTreeMap<u32, Vec<Vec<String>>>>,
}

/// One renderable table: the effective diameter plus the rows to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub diameter: u32,
    pub columns: &'a [String],
    pub rows: &'a [Vec<String>],
}

impl PriceBook {
    /// Parse a price book from fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document does not
    /// match the fixture shape at all. Individual non-numeric diameter keys
    /// are tolerated and skipped.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawPriceBook = serde_json::from_str(json)?;

        let columns = raw
            .columns
            .unwrap_or_else(|| DEFAULT_COLUMNS.iter().map(ToString::to_string).collect());

        let mut categories = BTreeMap::new();
        for (category, tables) in raw.categories {
            let mut by_diameter = BTreeMap::new();
            for (key, rows) in tables {
                match key.trim().parse::<u32>() {
                    Ok(diameter) => {
                        by_diameter.insert(diameter, rows);
                    }
                    Err(_) => {
                        tracing::warn!(category = %category, key = %key, "skipping non-numeric diameter key");
                    }
                }
            }
            categories.insert(category, by_diameter);
        }

        Ok(Self {
            columns,
            categories,
        })
    }

    /// An empty book: the degraded state after a failed prices load.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(ToString::to_string).collect(),
            categories: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeMap::is_empty)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn category_slugs(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Available diameters for a category, ascending. `None` for an unknown
    /// category.
    #[must_use]
    pub fn diameters(&self, category: &str) -> Option<Vec<u32>> {
        self.categories
            .get(category)
            .map(|tables| tables.keys().copied().collect())
    }

    #[must_use]
    pub fn rows(&self, category: &str, diameter: u32) -> Option<&[Vec<String>]> {
        self.categories
            .get(category)?
            .get(&diameter)
            .map(Vec::as_slice)
    }

    /// Resolve the table to display for a requested diameter: the exact
    /// entry when present, otherwise the nearest available one.
    ///
    /// # Errors
    ///
    /// `PricingError::UnknownCategory` when the category is absent or has no
    /// tables at all.
    pub fn resolve(&self, category: &str, requested: u32) -> Result<TableView<'_>, PricingError> {
        let tables = self
            .categories
            .get(category)
            .filter(|tables| !tables.is_empty())
            .ok_or_else(|| PricingError::UnknownCategory(category.to_string()))?;

        let diameters: Vec<u32> = tables.keys().copied().collect();
        let diameter = crate::nearest(&diameters, requested)
            .unwrap_or(requested);

        let rows = tables
            .get(&diameter)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(TableView {
            diameter,
            columns: &self.columns,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PriceBook, DEFAULT_COLUMNS};

    fn fixture() -> PriceBook {
        PriceBook::parse(
            r#"{
                "columns": ["Услуга", "Цена"],
                "sedan": {
                    "15": [["Снятие и установка", "150 ₽"]],
                    "16": [["Снятие и установка", "180 ₽"], ["Балансировка", "250 ₽"]],
                    "18": [["Снятие и установка", "220 ₽"]]
                },
                "suv": {
                    "18": [["Снятие и установка", "280 ₽"]],
                    "20": [["Снятие и установка", "340 ₽"]]
                }
            }"#,
        )
        .expect("fixture parses")
    }

    #[test]
    fn diameters_are_ascending() {
        let book = fixture();
        assert_eq!(book.diameters("sedan"), Some(vec![15, 16, 18]));
        assert_eq!(book.diameters("suv"), Some(vec![18, 20]));
        assert_eq!(book.diameters("gaz"), None);
    }

    #[test]
    fn missing_columns_fall_back_to_defaults() {
        let book = PriceBook::parse(r#"{"sedan": {"16": []}}"#).expect("parses");
        assert_eq!(book.columns(), DEFAULT_COLUMNS);
    }

    #[test]
    fn non_numeric_diameter_keys_are_skipped() {
        let book = PriceBook::parse(
            r#"{"sedan": {"16": [["x", "1"]], "любой": [["y", "2"]]}}"#,
        )
        .expect("parses");
        assert_eq!(book.diameters("sedan"), Some(vec![16]));
    }

    #[test]
    fn resolve_exact_diameter() {
        let book = fixture();
        let view = book.resolve("sedan", 16).expect("resolves");
        assert_eq!(view.diameter, 16);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn resolve_falls_back_to_nearest() {
        let book = fixture();
        // 17 is equally close to 16 and 18; the smaller wins.
        let view = book.resolve("sedan", 17).expect("resolves");
        assert_eq!(view.diameter, 16);
    }

    #[test]
    fn resolve_unknown_category_errors() {
        let book = fixture();
        let err = book.resolve("gaz", 19).unwrap_err();
        assert!(err.to_string().contains("gaz"));
    }

    #[test]
    fn empty_book_is_empty() {
        assert!(PriceBook::empty().is_empty());
        assert!(!fixture().is_empty());
    }
}
