//! One-shot fixture loading into the process-lifetime snapshot.
//!
//! Each load is a single asynchronous file read with no retry: a failed
//! locations load is terminal for the directory, a failed prices load
//! degrades the pricing surface to an empty book. Individual bad records
//! never fail a load; they are skipped and counted.

use std::path::Path;

use thiserror::Error;

use treadpoint_directory::{normalize_location, Location, RawLocation};
use treadpoint_pricing::PriceBook;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read fixture {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The in-memory data both surfaces serve from, immutable after load.
#[derive(Debug)]
pub struct Snapshot {
    pub locations: Vec<Location>,
    pub price_book: PriceBook,
}

/// Load and normalize the locations fixture.
///
/// `null` entries are skipped with a warning; every surviving entry is
/// normalized into a [`Location`].
///
/// # Errors
///
/// `StoreError::Io` / `StoreError::Json` when the file cannot be read or is
/// not a JSON array of records.
pub async fn load_locations(path: &Path) -> Result<Vec<Location>, StoreError> {
    let content = read_fixture(path).await?;
    let raw: Vec<Option<RawLocation>> =
        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let total = raw.len();
    let locations: Vec<Location> = raw
        .into_iter()
        .flatten()
        .map(|record| normalize_location(&record))
        .collect();

    let skipped = total - locations.len();
    if skipped > 0 {
        tracing::warn!(skipped, "dropped null location records during load");
    }
    tracing::info!(count = locations.len(), "locations fixture loaded");

    Ok(locations)
}

/// Load the price book fixture.
///
/// # Errors
///
/// `StoreError::Io` / `StoreError::Json` when the file cannot be read or
/// parsed. Callers that can keep serving without prices should fall back to
/// [`PriceBook::empty`].
pub async fn load_price_book(path: &Path) -> Result<PriceBook, StoreError> {
    let content = read_fixture(path).await?;
    let book = PriceBook::parse(&content).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(categories = book.category_slugs().len(), "price book loaded");
    Ok(book)
}

async fn read_fixture(path: &Path) -> Result<String, StoreError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{load_locations, load_price_book, StoreError};

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("fixtures")
            .join(name)
    }

    #[tokio::test]
    async fn loads_real_locations_fixture() {
        let locations = load_locations(&fixture_path("locations.json"))
            .await
            .expect("fixture loads");
        assert!(!locations.is_empty());
        for location in &locations {
            assert!(!location.id.is_empty());
            assert!(!location.search_key.is_empty());
        }
    }

    #[tokio::test]
    async fn loads_real_price_book_fixture() {
        let book = load_price_book(&fixture_path("prices.json"))
            .await
            .expect("fixture loads");
        assert!(!book.is_empty());
        for slug in ["sedan", "suv", "gaz"] {
            let diameters = book.diameters(slug).expect("category present");
            assert!(!diameters.is_empty(), "no diameters for {slug}");
        }
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = load_locations(&fixture_path("no-such.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn null_records_are_skipped_not_fatal() {
        let dir = std::env::temp_dir().join("treadpoint-store-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("locations-with-nulls.json");
        std::fs::write(
            &path,
            r#"[null, {"name": "Центр", "address": "ул. Мира, 3"}, null]"#,
        )
        .expect("write fixture");

        let locations = load_locations(&path).await.expect("loads");
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Центр");
    }

    #[tokio::test]
    async fn malformed_document_is_json_error() {
        let dir = std::env::temp_dir().join("treadpoint-store-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("broken.json");
        std::fs::write(&path, "{not json").expect("write fixture");

        let err = load_locations(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }
}
