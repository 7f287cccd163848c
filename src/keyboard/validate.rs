//! Argument checks run before any matching work

use serde_json::Value;

use super::descriptor::Names;
use super::error::{InvalidArgument, Param};
use super::modifier::{Modifier, ModifierSet};

/// The `mod` field must be a string or an array of strings
pub fn validate_mod_type(value: &Value) -> Result<Names, InvalidArgument> {
    names_from_value(value).ok_or(InvalidArgument::WrongType(Param::Mod))
}

/// The `key` field must be a string or an array of strings
pub fn validate_key_type(value: &Value) -> Result<Names, InvalidArgument> {
    names_from_value(value).ok_or(InvalidArgument::WrongType(Param::Key))
}

/// Resolve every modifier name against the vocabulary.
///
/// Aliases and any letter case are accepted. An empty list resolves to the
/// empty set.
pub fn validate_modifiers(names: &Names) -> Result<ModifierSet, InvalidArgument> {
    names
        .iter()
        .map(|name| Modifier::try_from(name.to_string()))
        .collect()
}

fn names_from_value(value: &Value) -> Option<Names> {
    match value {
        Value::String(name) => Some(Names::One(name.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(Names::Many),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_string_and_string_arrays() {
        assert_eq!(validate_mod_type(&json!("Control")), Ok(Names::from("Control")));
        assert_eq!(
            validate_key_type(&json!(["X", "Y"])),
            Ok(Names::from(["X", "Y"]))
        );
        assert_eq!(validate_key_type(&json!([])), Ok(Names::Many(Vec::new())));
    }

    #[test]
    fn test_rejects_other_types() {
        for bad in [json!(5), json!({"a": 1}), json!(null), json!(true), json!(["X", 1])] {
            assert_eq!(
                validate_mod_type(&bad),
                Err(InvalidArgument::WrongType(Param::Mod)),
                "accepted {bad}"
            );
            assert_eq!(
                validate_key_type(&bad),
                Err(InvalidArgument::WrongType(Param::Key)),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_modifier_names_resolve() {
        let set = validate_modifiers(&Names::from(["ctrl", "SHIFT", "Control"])).unwrap();
        assert_eq!(set, ModifierSet::new().with(Modifier::Control).with(Modifier::Shift));

        assert_eq!(validate_modifiers(&Names::Many(Vec::new())), Ok(ModifierSet::EMPTY));
    }

    #[test]
    fn test_modifier_names_fail_loud() {
        assert_eq!(
            validate_modifiers(&Names::from("Cmd")),
            Err(InvalidArgument::UnknownModifier("Cmd".to_string()))
        );
        assert_eq!(
            validate_modifiers(&Names::from(["Control", ""])),
            Err(InvalidArgument::EmptyModifier)
        );
    }
}
