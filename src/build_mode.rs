//! Build mode flag
//!
//! Read once from the environment and shared, read-only, for the rest of
//! the process.

use std::sync::OnceLock;

/// Environment variable holding the build mode name
pub const BUILD_MODE_VAR: &str = "HOTSPOT_BUILD_MODE";

const DEVELOPMENT: &str = "development";
const PRODUCTION: &str = "production";

/// The mode this process was built or deployed in, e.g. "development"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMode(String);

impl BuildMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Mode from an optional variable value. Unset falls back to the
    /// compile profile: debug builds are development builds.
    pub fn from_env_value(value: Option<String>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(name) => Self(name),
            None if cfg!(debug_assertions) => Self::new(DEVELOPMENT),
            None => Self::new(PRODUCTION),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BUILD_MODE_VAR).ok())
    }

    /// The process-wide mode, initialized on first use
    pub fn current() -> &'static BuildMode {
        static MODE: OnceLock<BuildMode> = OnceLock::new();
        MODE.get_or_init(Self::from_env)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_dev(&self) -> bool {
        self.0 == DEVELOPMENT
    }

    /// Anything that is not a development build
    pub fn is_prod(&self) -> bool {
        !self.is_dev()
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development() {
        let mode = BuildMode::from_env_value(Some("development".to_string()));
        assert!(mode.is_dev());
        assert!(!mode.is_prod());
    }

    #[test]
    fn test_other_names_are_prod() {
        for name in ["production", "test", "staging"] {
            let mode = BuildMode::new(name);
            assert!(!mode.is_dev());
            assert!(mode.is_prod());
            assert_eq!(mode.as_str(), name);
        }
    }

    #[test]
    fn test_unset_follows_profile() {
        let mode = BuildMode::from_env_value(None);
        assert_eq!(mode.is_dev(), cfg!(debug_assertions));
        assert_eq!(BuildMode::from_env_value(Some(String::new())), mode);
    }

    #[test]
    fn test_current_is_stable() {
        assert!(std::ptr::eq(BuildMode::current(), BuildMode::current()));
    }
}
