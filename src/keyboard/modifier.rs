//! Modifier vocabulary and modifier set tracking
//!
//! The vocabulary is closed: these eight names are the only modifiers the
//! matcher knows about. Strings are converted at the API boundary and the
//! evaluators only ever see [`Modifier`] values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidArgument;
use super::normalize::normalize_modifier;

/// A keyboard modifier, named the way browsers report them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Modifier {
    Alt,
    AltGraph,
    Control,
    Fn,
    Hyper,
    Meta,
    Shift,
    Super,
}

/// Every modifier, in canonical order
pub const MODIFIER_LIST: [Modifier; 8] = [
    Modifier::Alt,
    Modifier::AltGraph,
    Modifier::Control,
    Modifier::Fn,
    Modifier::Hyper,
    Modifier::Meta,
    Modifier::Shift,
    Modifier::Super,
];

impl Modifier {
    /// Canonical name, as accepted by `getModifierState`
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Alt => "Alt",
            Modifier::AltGraph => "AltGraph",
            Modifier::Control => "Control",
            Modifier::Fn => "Fn",
            Modifier::Hyper => "Hyper",
            Modifier::Meta => "Meta",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a canonical name, ignoring case. Aliases such as "Ctrl" are
/// resolved by [`normalize_modifier`], not here.
impl FromStr for Modifier {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODIFIER_LIST
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidArgument::UnknownModifier(s.to_string()))
    }
}

impl TryFrom<String> for Modifier {
    type Error = InvalidArgument;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if name.is_empty() {
            return Err(InvalidArgument::EmptyModifier);
        }
        normalize_modifier(&name)
            .parse()
            .map_err(|_| InvalidArgument::UnknownModifier(name))
    }
}

/// A set of modifiers, e.g. the ones a shortcut requires or the ones an
/// event reports as held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Modifier>", into = "Vec<Modifier>")]
pub struct ModifierSet(u8);

impl ModifierSet {
    /// No modifiers
    pub const EMPTY: ModifierSet = ModifierSet(0);
    /// The whole vocabulary
    pub const ALL: ModifierSet = ModifierSet(0xff);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub fn remove(&mut self, modifier: Modifier) {
        self.0 &= !modifier.bit();
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Every modifier of the vocabulary that is not in this set
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }

    /// Members in canonical order
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        MODIFIER_LIST.into_iter().filter(move |m| self.contains(*m))
    }

    /// Build a set from macOS event flags.
    ///
    /// Command is reported as Meta and Option as Alt, matching what a
    /// browser on macOS reports for the same keys.
    #[cfg(target_os = "macos")]
    pub fn from_flags(flags: core_graphics::event::CGEventFlags) -> Self {
        use core_graphics::event::CGEventFlags;

        let mut set = Self::EMPTY;
        let pairs = [
            (CGEventFlags::CGEventFlagAlternate, Modifier::Alt),
            (CGEventFlags::CGEventFlagControl, Modifier::Control),
            (CGEventFlags::CGEventFlagSecondaryFn, Modifier::Fn),
            (CGEventFlags::CGEventFlagCommand, Modifier::Meta),
            (CGEventFlags::CGEventFlagShift, Modifier::Shift),
        ];
        for (flag, modifier) in pairs {
            if flags.contains(flag) {
                set.insert(modifier);
            }
        }
        set
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Modifier> for ModifierSet {
    fn extend<I: IntoIterator<Item = Modifier>>(&mut self, iter: I) {
        for modifier in iter {
            self.insert(modifier);
        }
    }
}

impl From<Vec<Modifier>> for ModifierSet {
    fn from(modifiers: Vec<Modifier>) -> Self {
        modifiers.into_iter().collect()
    }
}

impl From<ModifierSet> for Vec<Modifier> {
    fn from(set: ModifierSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for modifier in self.iter() {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(modifier.as_str())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ModifierSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.complement(), ModifierSet::ALL);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: ModifierSet = [Modifier::Control, Modifier::Shift, Modifier::Control]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Modifier::Control));
        assert!(set.contains(Modifier::Shift));
        assert!(!set.contains(Modifier::Alt));
    }

    #[test]
    fn test_complement_excludes_members() {
        let set = ModifierSet::new().with(Modifier::Control);
        let rest = set.complement();
        assert_eq!(rest.len(), 7);
        assert!(!rest.contains(Modifier::Control));
        assert!(rest.contains(Modifier::Super));
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let set = ModifierSet::new()
            .with(Modifier::Shift)
            .with(Modifier::Alt)
            .with(Modifier::Control);
        let names: Vec<_> = set.iter().map(Modifier::as_str).collect();
        assert_eq!(names, ["Alt", "Control", "Shift"]);
        assert_eq!(set.to_string(), "Alt+Control+Shift");
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("control".parse::<Modifier>(), Ok(Modifier::Control));
        assert_eq!("ALTGRAPH".parse::<Modifier>(), Ok(Modifier::AltGraph));
        assert!("Ctrl".parse::<Modifier>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let set: ModifierSet = serde_json::from_str(r#"["ctrl", "Shift"]"#).unwrap();
        assert_eq!(set, ModifierSet::new().with(Modifier::Control).with(Modifier::Shift));

        let err = serde_json::from_str::<ModifierSet>(r#"["Hyperdrive"]"#).unwrap_err();
        assert!(err.to_string().contains("unknown modifier"));
    }

    #[test]
    fn test_serialize_canonical_names() {
        let set = ModifierSet::new().with(Modifier::Meta).with(Modifier::Fn);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Fn","Meta"]"#);
    }
}
