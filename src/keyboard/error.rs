//! The matcher's single error kind

use std::fmt;

/// Which argument of a matching call was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// The modifier field (`mod`)
    Mod,
    /// The key field (`key`)
    Key,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Mod => write!(f, "mod"),
            Param::Key => write!(f, "key"),
        }
    }
}

/// Raised during validation, before any event is inspected.
///
/// These are programming errors on the caller's side: the same input
/// always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("wrong parameter-type for '{0}': must be string or array of strings")]
    WrongType(Param),

    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),

    #[error("modifier name must not be empty")]
    EmptyModifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_type_message_names_param() {
        let err = InvalidArgument::WrongType(Param::Key);
        assert!(err.to_string().contains("'key'"));

        let err = InvalidArgument::WrongType(Param::Mod);
        assert!(err.to_string().contains("'mod'"));
    }
}
