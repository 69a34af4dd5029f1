//! Stable identifiers for records the fixture did not assign one.

/// Compute a stable id for a location.
///
/// SHA-256 over `name || address || region`, NUL-joined, lower-cased and
/// trimmed, hex-encoded with a `loc-` prefix. Deterministic across reloads,
/// unlike a timestamp-derived id.
#[must_use]
pub fn location_key(name: &str, address: &str, region: &str) -> String {
    use sha2::{Digest, Sha256};
    let input = format!(
        "{}\x00{}\x00{}",
        name.trim().to_lowercase(),
        address.trim().to_lowercase(),
        region.trim().to_lowercase(),
    );
    format!("loc-{:x}", Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::location_key;

    #[test]
    fn key_is_stable() {
        let a = location_key("Шинный центр", "ул. Ленина, 1", "Московская область");
        let b = location_key("Шинный центр", "ул. Ленина, 1", "Московская область");
        assert_eq!(a, b);
    }

    #[test]
    fn key_ignores_case_and_padding() {
        let a = location_key("Шинный Центр", " ул. Ленина, 1 ", "Московская область");
        let b = location_key("шинный центр", "ул. ленина, 1", "московская область");
        assert_eq!(a, b);
    }

    #[test]
    fn key_differs_per_address() {
        let a = location_key("Шинный центр", "ул. Ленина, 1", "Московская область");
        let b = location_key("Шинный центр", "ул. Ленина, 2", "Московская область");
        assert_ne!(a, b);
    }

    #[test]
    fn key_has_prefix_and_hex_body() {
        let key = location_key("a", "b", "c");
        let hex = key.strip_prefix("loc-").expect("loc- prefix");
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
