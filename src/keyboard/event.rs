//! The input side of the matcher
//!
//! The matcher only needs two things from an event: the key it carries and
//! whether a given modifier is held. Anything exposing those can be matched.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::modifier::{Modifier, ModifierSet};

/// A discrete key event that can report its modifier state
pub trait KeyboardEvent {
    /// Logical key identifier, e.g. "z", "Z", "Escape" or " "
    fn key(&self) -> Cow<'_, str>;

    /// Whether `modifier` is held while this event fires
    fn modifier_state(&self, modifier: Modifier) -> bool;
}

impl<E: KeyboardEvent + ?Sized> KeyboardEvent for &E {
    fn key(&self) -> Cow<'_, str> {
        (**self).key()
    }

    fn modifier_state(&self, modifier: Modifier) -> bool {
        (**self).modifier_state(modifier)
    }
}

/// An owned key event: a key plus the modifiers held with it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    pub key: String,
    #[serde(default)]
    pub modifiers: ModifierSet,
}

impl KeyStroke {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: ModifierSet::EMPTY,
        }
    }

    /// Add a held modifier
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Key stroke from a native macOS key event
    #[cfg(target_os = "macos")]
    pub fn from_flags(key: impl Into<String>, flags: core_graphics::event::CGEventFlags) -> Self {
        Self {
            key: key.into(),
            modifiers: ModifierSet::from_flags(flags),
        }
    }
}

impl KeyboardEvent for KeyStroke {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.key)
    }

    fn modifier_state(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(modifier)
    }
}

#[cfg(feature = "web")]
impl KeyboardEvent for web_sys::KeyboardEvent {
    fn key(&self) -> Cow<'_, str> {
        Cow::Owned(web_sys::KeyboardEvent::key(self))
    }

    fn modifier_state(&self, modifier: Modifier) -> bool {
        self.get_modifier_state(modifier.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystroke_reports_held_modifiers() {
        let stroke = KeyStroke::new("z").with(Modifier::Control);
        assert_eq!(stroke.key(), "z");
        assert!(stroke.modifier_state(Modifier::Control));
        assert!(!stroke.modifier_state(Modifier::Alt));
    }

    #[test]
    fn test_keystroke_deserialization() {
        let stroke: KeyStroke =
            serde_json::from_str(r#"{"key":"Escape","modifiers":["ctrl","shift"]}"#).unwrap();
        assert_eq!(
            stroke,
            KeyStroke::new("Escape")
                .with(Modifier::Control)
                .with(Modifier::Shift)
        );

        let bare: KeyStroke = serde_json::from_str(r#"{"key":"a"}"#).unwrap();
        assert!(bare.modifiers.is_empty());
    }
}
