//! Domain types for the location directory.

use serde::{Deserialize, Serialize};

/// A location record as it appears in the fixture: every field optional,
/// nothing trusted. Coordinates may arrive as JSON numbers or numeric
/// strings, so they are kept raw until normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLocation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub area: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<serde_json::Value>,
    pub longitude: Option<serde_json::Value>,
    pub route: Option<String>,
    pub phone: Option<String>,
}

/// Phone in both machine and human form.
///
/// `tel` is empty when the raw input held no digits at all; `display` then
/// falls back to the trimmed raw text so the card still shows something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub tel: String,
    pub display: String,
}

/// A normalized, immutable directory record.
///
/// `search_key` is a lower-cased, ё-folded, whitespace-collapsed projection
/// of the raw fields, computed once at normalization time. Query matching
/// reads only this field.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub area: String,
    pub region: String,
    pub address: String,
    /// NaN when the fixture held nothing parseable.
    pub latitude: f64,
    /// NaN when the fixture held nothing parseable.
    pub longitude: f64,
    pub route: String,
    pub phone: Phone,
    pub search_key: String,
}

impl Location {
    /// Whether this record can be placed on the map.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
