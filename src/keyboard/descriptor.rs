//! Shortcut descriptors: `{ mod, key }` pairs as callers write them

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::InvalidArgument;
use super::validate::{validate_key_type, validate_mod_type, validate_modifiers};

/// One name or a list of names, the accepted shape of both `mod` and `key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Names {
    One(String),
    Many(Vec<String>),
}

impl Names {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Names::One(name) => std::slice::from_ref(name),
            Names::Many(names) => names,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Names::One(name.to_string())
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Names::One(name)
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Names::Many(names)
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Names::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Names::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

/// One accepted shortcut: the modifiers that must be held and the key(s)
/// that trigger it.
///
/// A `Shortcut` is never rewritten once built. Deserializing one runs the
/// same validation as the matching calls, so a bad binding file fails at
/// load time instead of at the first key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Shortcut {
    #[serde(rename = "mod")]
    modifiers: Names,
    key: Names,
}

impl Shortcut {
    pub fn new(modifiers: impl Into<Names>, key: impl Into<Names>) -> Self {
        Self {
            modifiers: modifiers.into(),
            key: key.into(),
        }
    }

    /// Build from a JSON object shaped `{"mod": ..., "key": ...}`
    pub fn from_value(value: &Value) -> Result<Self, InvalidArgument> {
        let modifiers = validate_mod_type(value.get("mod").unwrap_or(&Value::Null))?;
        let key = validate_key_type(value.get("key").unwrap_or(&Value::Null))?;
        validate_modifiers(&modifiers)?;
        Ok(Self { modifiers, key })
    }

    pub fn modifiers(&self) -> &Names {
        &self.modifiers
    }

    pub fn key(&self) -> &Names {
        &self.key
    }
}

impl TryFrom<Value> for Shortcut {
    type Error = InvalidArgument;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Lets a single shortcut go wherever a list of them is accepted
impl AsRef<[Shortcut]> for Shortcut {
    fn as_ref(&self) -> &[Shortcut] {
        std::slice::from_ref(self)
    }
}

/// A JSON value holding either one descriptor or an array of them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Vec<Shortcut>")]
pub struct ShortcutList(Vec<Shortcut>);

impl ShortcutList {
    pub fn from_value(value: &Value) -> Result<Self, InvalidArgument> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(Shortcut::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            single => Shortcut::from_value(single).map(|s| Self(vec![s])),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for ShortcutList {
    type Error = InvalidArgument;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<Vec<Shortcut>> for ShortcutList {
    fn from(shortcuts: Vec<Shortcut>) -> Self {
        Self(shortcuts)
    }
}

impl From<ShortcutList> for Vec<Shortcut> {
    fn from(list: ShortcutList) -> Self {
        list.0
    }
}

impl AsRef<[Shortcut]> for ShortcutList {
    fn as_ref(&self) -> &[Shortcut] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::keyboard::error::Param;

    #[test]
    fn test_from_value_accepts_strings_and_lists() {
        let shortcut = Shortcut::from_value(&json!({"mod": "Control", "key": ["X", "Y"]})).unwrap();
        assert_eq!(shortcut.modifiers(), &Names::from("Control"));
        assert_eq!(shortcut.key(), &Names::from(["X", "Y"]));
    }

    #[test]
    fn test_from_value_keeps_caller_spelling() {
        let shortcut = Shortcut::from_value(&json!({"mod": "ctrl", "key": "z"})).unwrap();
        assert_eq!(shortcut.modifiers(), &Names::from("ctrl"));
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        let err = Shortcut::from_value(&json!({"key": "Z"})).unwrap_err();
        assert_eq!(err, InvalidArgument::WrongType(Param::Mod));

        let err = Shortcut::from_value(&json!({"mod": []})).unwrap_err();
        assert_eq!(err, InvalidArgument::WrongType(Param::Key));
    }

    #[test]
    fn test_from_value_rejects_unknown_modifier() {
        let err = Shortcut::from_value(&json!({"mod": "Turbo", "key": "Z"})).unwrap_err();
        assert_eq!(err, InvalidArgument::UnknownModifier("Turbo".to_string()));
    }

    #[test]
    fn test_deserialize_reports_invalid_argument() {
        let err = serde_json::from_str::<Shortcut>(r#"{"mod": 5, "key": "Z"}"#).unwrap_err();
        assert!(err.to_string().contains("wrong parameter-type for 'mod'"));
    }

    #[test]
    fn test_list_accepts_one_or_many() {
        let one: ShortcutList = serde_json::from_str(r#"{"mod": "Alt", "key": "R"}"#).unwrap();
        assert_eq!(one.len(), 1);

        let many: ShortcutList = serde_json::from_str(
            r#"[{"mod": "Control", "key": "X"}, {"mod": "Control", "key": "Y"}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_serialize_uses_mod_field() {
        let json = serde_json::to_value(Shortcut::new(["Control", "Shift"], "Z")).unwrap();
        assert_eq!(json, json!({"mod": ["Control", "Shift"], "key": "Z"}));
    }
}
