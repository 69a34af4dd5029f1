use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One vehicle category tab: a price-book key plus its display label and
/// the diameter the slider starts at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub slug: String,
    pub label: String,
    pub default_diameter: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryConfig>,
}

impl CategoriesFile {
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

/// Load and validate the vehicle category registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let categories_file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    validate_categories(&categories_file)?;

    Ok(categories_file)
}

fn validate_categories(categories_file: &CategoriesFile) -> Result<(), ConfigError> {
    if categories_file.categories.is_empty() {
        return Err(ConfigError::Validation(
            "category registry must list at least one category".to_string(),
        ));
    }

    let mut seen_slugs = HashSet::new();

    for category in &categories_file.categories {
        if category.slug.is_empty()
            || !category
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigError::Validation(format!(
                "invalid category slug '{}'; must be non-empty lowercase ascii",
                category.slug
            )));
        }

        if category.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has an empty label",
                category.slug
            )));
        }

        // Rim diameters outside this range do not exist in the price data.
        if !(10..=30).contains(&category.default_diameter) {
            return Err(ConfigError::Validation(format!(
                "category '{}' has default diameter {} outside 10..=30",
                category.slug, category.default_diameter
            )));
        }

        if !seen_slugs.insert(category.slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category slug: '{}'",
                category.slug
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str, label: &str, default_diameter: u32) -> CategoryConfig {
        CategoryConfig {
            slug: slug.to_string(),
            label: label.to_string(),
            default_diameter,
        }
    }

    #[test]
    fn validate_accepts_valid_registry() {
        let file = CategoriesFile {
            categories: vec![
                category("sedan", "Легковые", 16),
                category("suv", "Кроссоверы и внедорожники", 18),
                category("gaz", "Газель", 19),
            ],
        };
        assert!(validate_categories(&file).is_ok());
    }

    #[test]
    fn validate_rejects_empty_registry() {
        let file = CategoriesFile { categories: vec![] };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn validate_rejects_bad_slug() {
        let file = CategoriesFile {
            categories: vec![category("Sedan Cars", "Легковые", 16)],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("invalid category slug"));
    }

    #[test]
    fn validate_rejects_empty_label() {
        let file = CategoriesFile {
            categories: vec![category("sedan", "  ", 16)],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("empty label"));
    }

    #[test]
    fn validate_rejects_out_of_range_default() {
        let file = CategoriesFile {
            categories: vec![category("sedan", "Легковые", 42)],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("outside 10..=30"));
    }

    #[test]
    fn validate_rejects_duplicate_slug() {
        let file = CategoriesFile {
            categories: vec![
                category("sedan", "Легковые", 16),
                category("sedan", "Ещё легковые", 15),
            ],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate category slug"));
    }

    #[test]
    fn get_finds_category_by_slug() {
        let file = CategoriesFile {
            categories: vec![category("suv", "Кроссоверы", 18)],
        };
        assert_eq!(file.get("suv").map(|c| c.default_diameter), Some(18));
        assert!(file.get("sedan").is_none());
    }

    #[test]
    fn load_categories_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("categories.yaml");
        assert!(
            path.exists(),
            "categories.yaml missing at {path:?} — required for this test"
        );
        let result = load_categories(&path);
        assert!(result.is_ok(), "failed to load categories.yaml: {result:?}");
        let file = result.unwrap();
        assert!(!file.categories.is_empty());
    }
}
