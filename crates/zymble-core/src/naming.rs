//! Entity name normalization

use crate::error::{Result, ScaffoldError};

/// Normalize free-form input into a pascal-case identifier.
///
/// Every character outside `[A-Za-z0-9]` separates words; each word has its
/// first character upper-cased and the words are concatenated. The rest of
/// each word is kept as typed, so `my button` and `my-Button` both become
/// `MyButton` while `XMLParser` stays `XMLParser`.
pub fn normalize_name(input: &str, field: &str) -> Result<String> {
    let name: String = input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if name.is_empty() {
        return Err(ScaffoldError::empty_input(field));
    }
    Ok(name)
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a normalized name into a hook name carrying `prefix`.
///
/// A name that already starts with the prefix (any case) has the prefix
/// rewritten in its canonical case; anything else gets it prepended.
pub fn hook_name(normalized: &str, prefix: &str) -> String {
    match normalized.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => {
            format!("{}{}", prefix, &normalized[prefix.len()..])
        }
        _ => format!("{}{}", prefix, normalized),
    }
}
