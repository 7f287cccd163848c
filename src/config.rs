//! Configuration loading and management

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::build_mode::BuildMode;
use crate::probe::BindingTable;

/// Environment variable naming the binding file
pub const BINDINGS_VAR: &str = "HOTSPOT_INPUT_BINDINGS";

/// Probe configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Binding file to load; `None` means the built-in table
    pub bindings_path: Option<PathBuf>,

    pub build_mode: BuildMode,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Ok(Self::from_lookup(
            |name| std::env::var(name).ok(),
            BuildMode::current().clone(),
        ))
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// An explicit binding path is taken as is. Otherwise the per-user file
    /// under `$HOME/.config` is used when it exists.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, build_mode: BuildMode) -> Self {
        let bindings_path = lookup(BINDINGS_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                let home = lookup("HOME")?;
                let path = PathBuf::from(home)
                    .join(".config")
                    .join("hotspot-input")
                    .join("bindings.json");
                path.exists().then_some(path)
            });

        Self {
            bindings_path,
            build_mode,
        }
    }

    /// Read the configured binding table
    pub fn load_bindings(&self) -> Result<BindingTable> {
        let Some(path) = &self.bindings_path else {
            return Ok(BindingTable::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bindings from {}", path.display()))?;
        BindingTable::from_json(&text)
            .with_context(|| format!("invalid bindings in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_explicit_bindings_path() {
        let config = Config::from_lookup(
            lookup(&[(BINDINGS_VAR, "/tmp/keys.json")]),
            BuildMode::new("production"),
        );
        assert_eq!(config.bindings_path, Some(PathBuf::from("/tmp/keys.json")));
        assert!(config.build_mode.is_prod());
    }

    #[test]
    fn test_missing_user_file_means_defaults() {
        let config = Config::from_lookup(
            lookup(&[("HOME", "/nonexistent/home")]),
            BuildMode::new("development"),
        );
        assert_eq!(config.bindings_path, None);

        let table = config.load_bindings().unwrap();
        assert_eq!(table.len(), BindingTable::default().len());
    }

    #[test]
    fn test_unreadable_bindings_file_is_an_error() {
        let config = Config::from_lookup(
            lookup(&[(BINDINGS_VAR, "/nonexistent/bindings.json")]),
            BuildMode::new("development"),
        );
        let err = config.load_bindings().unwrap_err();
        assert!(err.to_string().contains("failed to read bindings"));
    }

    #[test]
    fn test_bindings_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("hotspot-input-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"save": {"mod": "Ctrl", "key": "S"}}"#).unwrap();

        let config = Config {
            bindings_path: Some(path.clone()),
            build_mode: BuildMode::new("test"),
        };
        let table = config.load_bindings().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(table.names().collect::<Vec<_>>(), ["save"]);
    }
}
