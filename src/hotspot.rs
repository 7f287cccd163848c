//! Hotspot data holder
//!
//! A hotspot is a marker placed on an image at a normalized position. Only
//! `position` is required; everything else is optional metadata carried
//! through from the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A point; for hotspots both coordinates are relative to the image, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Errors building a [`Hotspot`]
#[derive(Debug, thiserror::Error)]
pub enum HotspotError {
    #[error("hotspot requires at least a 'position' with 'x' and 'y' coordinates")]
    MissingPosition,

    #[error("malformed hotspot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A hotspot and its runtime state.
///
/// `N` is whatever handle the editor uses for the rendered marker. The
/// `selected` flag and the node are runtime-only and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot<N = ()> {
    pub position: Position,
    pub sku: Option<String>,
    #[serde(rename = "fallbackURL")]
    pub fallback_url: Option<String>,
    pub id: String,
    pub creator_id: Option<String>,
    pub shared_id: Option<String>,
    #[serde(skip)]
    pub selected: bool,
    #[serde(skip)]
    pub node: Option<N>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotspotInit {
    position: Option<Value>,
    sku: Option<String>,
    #[serde(rename = "fallbackURL")]
    fallback_url: Option<String>,
    id: Option<String>,
    creator_id: Option<String>,
    shared_id: Option<String>,
}

impl<N> Hotspot<N> {
    /// A fresh hotspot with a generated id and no metadata
    pub fn new(position: Position) -> Self {
        Self {
            position,
            sku: None,
            fallback_url: None,
            id: generate_id(),
            creator_id: None,
            shared_id: None,
            selected: false,
            node: None,
        }
    }

    /// Build from the host's JSON representation.
    ///
    /// `x` and `y` may be numbers or numeric strings. Empty strings in the
    /// optional fields count as absent, and a missing id is generated.
    pub fn from_value(value: &Value) -> Result<Self, HotspotError> {
        let init = HotspotInit::deserialize(value)?;
        let position = init
            .position
            .as_ref()
            .and_then(parse_position)
            .ok_or(HotspotError::MissingPosition)?;

        Ok(Self {
            position,
            sku: non_empty(init.sku),
            fallback_url: non_empty(init.fallback_url),
            id: non_empty(init.id).unwrap_or_else(generate_id),
            creator_id: init.creator_id,
            shared_id: non_empty(init.shared_id),
            selected: false,
            node: None,
        })
    }

    /// Attach the rendered marker
    pub fn with_node(mut self, node: N) -> Self {
        self.node = Some(node);
        self
    }
}

fn parse_position(value: &Value) -> Option<Position> {
    Some(Position {
        x: coordinate(value.get("x")?)?,
        y: coordinate(value.get("y")?)?,
    })
}

fn coordinate(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
