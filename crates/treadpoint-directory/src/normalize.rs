//! Normalization from raw fixture records to [`Location`].
//!
//! Every branch here tolerates missing or malformed input: a bad field
//! degrades to a default, it never fails the record, and a bad record never
//! fails the load.

use crate::key::location_key;
use crate::types::{Location, Phone, RawLocation};

const DEFAULT_NAME: &str = "Без названия";
const DEFAULT_REGION: &str = "Московская область";
const MAPS_BASE_URL: &str = "https://yandex.ru/maps";

/// Normalize free text for matching: lower-case, fold `ё` to `е`, collapse
/// whitespace runs to a single space, trim.
///
/// Applied both when building a record's `search_key` and to the user's
/// query; the two sides must agree or legitimate matches are missed.
#[must_use]
pub fn normalize_search_text(value: &str) -> String {
    value
        .to_lowercase()
        .replace('ё', "е")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize one raw record into a [`Location`].
///
/// The `search_key` is built from the fields as supplied, not from the
/// defaulted display values, so a record with no region is not findable by
/// the default region text.
#[must_use]
pub fn normalize_location(raw: &RawLocation) -> Location {
    let latitude = coerce_coordinate(raw.latitude.as_ref());
    let longitude = coerce_coordinate(raw.longitude.as_ref());

    let route_raw = raw.route.as_deref().map(str::trim).unwrap_or_default();
    let route = if route_raw.is_empty() {
        fallback_route(latitude, longitude)
    } else {
        route_raw.to_string()
    };

    let search_key = normalize_search_text(&format!(
        "{} {} {} {} {} {}",
        raw.name.as_deref().unwrap_or_default(),
        raw.area.as_deref().unwrap_or_default(),
        raw.region.as_deref().unwrap_or_default(),
        raw.address.as_deref().unwrap_or_default(),
        raw.phone.as_deref().unwrap_or_default(),
        raw.route.as_deref().unwrap_or_default(),
    ));

    let name = non_empty(raw.name.as_deref()).unwrap_or(DEFAULT_NAME).to_string();
    let region = non_empty(raw.region.as_deref())
        .unwrap_or(DEFAULT_REGION)
        .to_string();
    let address = raw.address.clone().unwrap_or_default();

    let id = non_empty(raw.id.as_deref()).map_or_else(
        || location_key(&name, &address, &region),
        ToString::to_string,
    );

    Location {
        id,
        name,
        area: raw.area.clone().unwrap_or_default(),
        region,
        address,
        latitude,
        longitude,
        route,
        phone: format_phone(raw.phone.as_deref()),
        search_key,
    }
}

/// Normalize a raw phone string into `{ tel, display }`.
///
/// Branch order is load-bearing and matches observed real-world input:
/// - no digits at all → non-callable, display the trimmed raw text;
/// - 11 digits with the domestic trunk `8` → swap the lead for `7`;
/// - 10 digits → national number, prefix `7`;
/// - 11 digits already led by `7` → keep;
/// - more than 11 digits → keep the last 11 (stray separators and
///   extensions miscounted as digits);
/// - anything else passes through unchanged.
#[must_use]
pub fn format_phone(phone: Option<&str>) -> Phone {
    let raw = phone.unwrap_or_default();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Phone {
            tel: String::new(),
            display: raw.trim().to_string(),
        };
    }

    let normalized = if digits.len() == 11 && digits.starts_with('8') {
        format!("7{}", &digits[1..])
    } else if digits.len() == 10 {
        format!("7{digits}")
    } else if digits.len() > 11 {
        digits[digits.len() - 11..].to_string()
    } else {
        digits
    };

    let tel = format!("+{normalized}");
    let display = if normalized.len() >= 11 {
        format!(
            "+{} ({}) {}-{}-{}",
            &normalized[0..1],
            &normalized[1..4],
            &normalized[4..7],
            &normalized[7..9],
            &normalized[9..11],
        )
    } else {
        tel.clone()
    };

    Phone { tel, display }
}

/// Coerce a fixture coordinate (JSON number or numeric string) to `f64`.
/// Anything unparseable is NaN; downstream falls back, it is not an error.
fn coerce_coordinate(value: Option<&serde_json::Value>) -> f64 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn fallback_route(latitude: f64, longitude: f64) -> String {
    if latitude.is_finite() && longitude.is_finite() {
        format!("{MAPS_BASE_URL}/?rtext=~{latitude},{longitude}")
    } else {
        MAPS_BASE_URL.to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
