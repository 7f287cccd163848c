//! hotspot-input: input handling for the hotspot field type
//!
//! - [`keyboard`]: keyboard shortcut matching (modifier and key
//!   normalization, sole-modifier semantics, multi-shortcut matching)
//! - [`hotspot`]: the hotspot data holder
//! - [`mouse`]: mouse coordinates relative to a container
//! - [`build_mode`]: the process-wide development/production flag
//!
//! Native builds also carry the [`probe`] used by the `shortcut-probe`
//! binary to resolve key presses against a binding file.

pub mod build_mode;
pub mod hotspot;
pub mod keyboard;
pub mod mouse;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod lifecycle;
#[cfg(not(target_arch = "wasm32"))]
pub mod probe;
