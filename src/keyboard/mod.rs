//! Keyboard shortcut matching
//!
//! Decides whether a key event satisfies a declarative shortcut such as
//! `{ mod: "Ctrl", key: ["Z", "Y"] }`. Modifier and key names are
//! normalized before comparison, so "ctrl", "Ctrl" and "Control" all name
//! the same modifier and "Esc" names the "Escape" key.

mod descriptor;
mod error;
mod event;
mod matcher;
mod modifier;
mod normalize;
mod validate;

pub use descriptor::{Names, Shortcut, ShortcutList};
pub use error::{InvalidArgument, Param};
pub use event::{KeyStroke, KeyboardEvent};
pub use matcher::{
    is_a_modifier_hit, is_key_hit, is_modifier_hit, is_modifier_not_hit, is_no_modifier_hit,
    is_shortcut_hit, KeyOptions, ModifierOptions,
};
pub use modifier::{Modifier, ModifierSet, MODIFIER_LIST};
pub use normalize::{normalize_key, normalize_keys, normalize_modifier, normalize_modifiers};
pub use validate::{validate_key_type, validate_mod_type, validate_modifiers};
