//! Named shortcut bindings
//!
//! A binding file maps each binding name to one descriptor or a list of
//! them:
//!
//! ```json
//! {
//!     "undo": {"mod": "Ctrl", "key": "Z"},
//!     "redo": [{"mod": ["Ctrl", "Shift"], "key": "Z"}, {"mod": "Ctrl", "key": "Y"}]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::keyboard::{is_shortcut_hit, InvalidArgument, KeyboardEvent, Names, Shortcut, ShortcutList};

/// Immutable table of named bindings, kept in name order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingTable {
    bindings: BTreeMap<String, ShortcutList>,
}

impl BindingTable {
    pub fn new(bindings: BTreeMap<String, ShortcutList>) -> Self {
        Self { bindings }
    }

    /// Parse a binding file. Descriptors are validated while parsing.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&ShortcutList> {
        self.bindings.get(name)
    }

    /// Names of every binding the event triggers, in name order
    pub fn matching<E>(&self, event: &E) -> Result<Vec<&str>, InvalidArgument>
    where
        E: KeyboardEvent + ?Sized,
    {
        let mut hits = Vec::new();
        for (name, shortcuts) in &self.bindings {
            if is_shortcut_hit(event, shortcuts)? {
                hits.push(name.as_str());
            }
        }
        Ok(hits)
    }
}

/// The editor's stock bindings
impl Default for BindingTable {
    fn default() -> Self {
        let none = || Names::Many(Vec::new());
        let bindings = [
            (
                "delete-hotspot",
                vec![Shortcut::new(none(), ["Delete", "Backspace"])],
            ),
            ("deselect", vec![Shortcut::new(none(), "Esc")]),
            ("undo", vec![Shortcut::new("Ctrl", "Z")]),
            (
                "redo",
                vec![
                    Shortcut::new(["Ctrl", "Shift"], "Z"),
                    Shortcut::new("Ctrl", "Y"),
                ],
            ),
        ];

        Self::new(
            bindings
                .into_iter()
                .map(|(name, shortcuts)| (name.to_string(), ShortcutList::from(shortcuts)))
                .collect(),
        )
    }
}
