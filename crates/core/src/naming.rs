//! Name normalization for textual lookups.
//!
//! A `GET /characters/{key}` with a non-numeric key is resolved by name.
//! Clients send names in arbitrary case, so the key is normalized to the
//! canonical stored form: all lowercase with the first character uppercased.

/// Normalize a lookup key to canonical name form.
///
/// Lowercases the whole string, then uppercases the first character.
/// Unicode-aware on both steps; an uppercased character may expand to
/// multiple characters.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
