//! Shortcut, modifier and key matching against a single event
//!
//! Nothing is cached between calls: every call validates its arguments,
//! normalizes fresh copies and evaluates them against the event.

use tracing::{debug, trace};

use super::descriptor::{Names, Shortcut};
use super::error::InvalidArgument;
use super::event::KeyboardEvent;
use super::modifier::{ModifierSet, MODIFIER_LIST};
use super::normalize::normalize_keys;
use super::validate::validate_modifiers;

/// Options for [`is_modifier_hit`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierOptions {
    /// Also require every modifier outside the given set to be released
    pub sole: bool,
}

impl ModifierOptions {
    pub fn sole() -> Self {
        Self { sole: true }
    }
}

/// Options for [`is_key_hit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    pub case_sensitive: bool,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl KeyOptions {
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

/// Match the exact keystroke of any of `shortcuts`.
///
/// A shortcut hits when all of its modifiers are held, no other modifier is
/// held, and the event key equals one of its keys ignoring case. An empty
/// modifier list therefore only hits while no modifier is held at all.
///
/// ```
/// use hotspot_input::keyboard::{is_shortcut_hit, KeyStroke, Modifier, Shortcut};
///
/// let event = KeyStroke::new("z").with(Modifier::Control);
/// assert!(is_shortcut_hit(&event, Shortcut::new("Ctrl", "Z")).unwrap());
/// ```
pub fn is_shortcut_hit<E>(event: &E, shortcuts: impl AsRef<[Shortcut]>) -> Result<bool, InvalidArgument>
where
    E: KeyboardEvent + ?Sized,
{
    let shortcuts = shortcuts.as_ref();

    // Reject the whole call before looking at the event
    let resolved = shortcuts
        .iter()
        .map(|shortcut| validate_modifiers(shortcut.modifiers()).map(|set| (set, shortcut)))
        .collect::<Result<Vec<_>, _>>()?;

    let hit = resolved.iter().any(|(required, shortcut)| {
        let hit = modifier_hit(event, *required, true) && key_hit(event, shortcut.key(), false);
        trace!(modifiers = %required, key = ?shortcut.key(), hit, "shortcut evaluated");
        hit
    });

    if hit {
        debug!(key = %event.key(), "shortcut hit");
    }
    Ok(hit)
}

/// Whether every modifier in `modifiers` is held.
///
/// With [`ModifierOptions::sole`] the remaining modifiers of the vocabulary
/// must all be released as well.
pub fn is_modifier_hit<E>(
    event: &E,
    modifiers: impl Into<Names>,
    options: ModifierOptions,
) -> Result<bool, InvalidArgument>
where
    E: KeyboardEvent + ?Sized,
{
    let required = validate_modifiers(&modifiers.into())?;
    Ok(modifier_hit(event, required, options.sole))
}

pub fn is_modifier_not_hit<E>(
    event: &E,
    modifiers: impl Into<Names>,
    options: ModifierOptions,
) -> Result<bool, InvalidArgument>
where
    E: KeyboardEvent + ?Sized,
{
    is_modifier_hit(event, modifiers, options).map(|hit| !hit)
}

/// Whether any modifier at all is held
pub fn is_a_modifier_hit<E>(event: &E) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    MODIFIER_LIST.iter().any(|m| event.modifier_state(*m))
}

pub fn is_no_modifier_hit<E>(event: &E) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    !is_a_modifier_hit(event)
}

/// Whether the event key is one of `key`.
///
/// Key names are already string-typed here, so there is nothing left to
/// reject; dynamic input goes through
/// [`validate_key_type`](super::validate_key_type) first.
pub fn is_key_hit<E>(event: &E, key: impl Into<Names>, options: KeyOptions) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    key_hit(event, &key.into(), options.case_sensitive)
}

fn modifier_hit<E>(event: &E, required: ModifierSet, sole: bool) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    if sole && additional_modifier_hit(event, required) {
        return false;
    }
    required.iter().all(|m| event.modifier_state(m))
}

fn additional_modifier_hit<E>(event: &E, required: ModifierSet) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    required.complement().iter().any(|m| event.modifier_state(m))
}

fn key_hit<E>(event: &E, keys: &Names, case_sensitive: bool) -> bool
where
    E: KeyboardEvent + ?Sized,
{
    let pressed = event.key();
    let keys = normalize_keys(keys, case_sensitive);

    if case_sensitive {
        keys.iter().any(|k| *k == *pressed)
    } else {
        let pressed = pressed.to_lowercase();
        keys.iter().any(|k| k.to_lowercase() == pressed)
    }
}
