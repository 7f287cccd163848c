//! Canonical spellings for modifier and key names
//!
//! Nothing here fails: callers validate first. Every function returns a
//! fresh value, so a descriptor shared between calls is never rewritten.

use super::descriptor::Names;
use super::modifier::Modifier;

/// Canonical spelling of one modifier name.
///
/// "ctrl" becomes "Control" and "altgraph" becomes "AltGraph". Names outside
/// the vocabulary come back lower-cased with a capital first letter.
pub fn normalize_modifier(name: &str) -> String {
    let name = capitalize_first(&name.to_lowercase());
    let name = match name.as_str() {
        "Ctrl" => "Control".to_string(),
        _ => name,
    };

    match name.parse::<Modifier>() {
        Ok(modifier) => modifier.as_str().to_string(),
        Err(_) => name,
    }
}

/// [`normalize_modifier`] over every name
pub fn normalize_modifiers(names: &Names) -> Vec<String> {
    names.iter().map(normalize_modifier).collect()
}

/// Canonical spelling of one key name.
///
/// Named keys get a capital first letter and their aliases resolved. Single
/// characters are only touched when `case_sensitive` is off, in which case
/// they are lower-cased.
pub fn normalize_key(key: &str, case_sensitive: bool) -> String {
    if key.chars().count() > 1 {
        let key = capitalize_first(key);
        match key.as_str() {
            "Esc" => "Escape".to_string(),
            "Del" => "Delete".to_string(),
            "Space" | "Spacebar" => " ".to_string(),
            "Ctrl" => "Control".to_string(),
            _ => key,
        }
    } else if !case_sensitive {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}

/// [`normalize_key`] over every key
pub fn normalize_keys(keys: &Names, case_sensitive: bool) -> Vec<String> {
    keys.iter()
        .map(|key| normalize_key(key, case_sensitive))
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
