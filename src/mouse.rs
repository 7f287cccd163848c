//! Mouse coordinates relative to a container element

use serde::{Deserialize, Serialize};

use crate::hotspot::Position;

/// A bounding box in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MouseError {
    #[error("the container does not have the 'Element' interface")]
    NoContainer,

    #[error("the container has no area ({width}x{height})")]
    EmptyContainer { width: f64, height: f64 },
}

/// Position of `client` relative to `container`, scaled so the box spans
/// [0, 1] on both axes.
///
/// Offsets are rounded to whole pixels before scaling. Points outside the box
/// are not clamped.
pub fn relative_position(client: Position, container: Option<Rect>) -> Result<Position, MouseError> {
    let rect = container.ok_or(MouseError::NoContainer)?;
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(MouseError::EmptyContainer {
            width: rect.width,
            height: rect.height,
        });
    }

    Ok(Position {
        x: round_half_up(client.x - rect.left) / rect.width,
        y: round_half_up(client.y - rect.top) / rect.height,
    })
}

/// Mouse position relative to `container`, or to the event target when no
/// container is given.
#[cfg(feature = "web")]
pub fn mouse_position(
    event: &web_sys::MouseEvent,
    container: Option<&web_sys::Element>,
) -> Result<Position, MouseError> {
    use wasm_bindgen::JsCast;

    let target = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    let element = container.or(target.as_ref());

    let rect = element.map(|el| {
        let r = el.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    });

    let client = Position::new(f64::from(event.client_x()), f64::from(event.client_y()));
    relative_position(client, rect)
}

// Half-way cases round towards positive infinity, as browsers do
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_corners_and_center() {
        assert_eq!(
            relative_position(Position::new(100.0, 50.0), Some(BOX)),
            Ok(Position::new(0.0, 0.0))
        );
        assert_eq!(
            relative_position(Position::new(300.0, 150.0), Some(BOX)),
            Ok(Position::new(1.0, 1.0))
        );
        assert_eq!(
            relative_position(Position::new(200.0, 100.0), Some(BOX)),
            Ok(Position::new(0.5, 0.5))
        );
    }

    #[test]
    fn test_offsets_round_to_whole_pixels() {
        let pos = relative_position(Position::new(150.4, 75.5), Some(BOX)).unwrap();
        assert_eq!(pos, Position::new(50.0 / 200.0, 26.0 / 100.0));
    }

    #[test]
    fn test_outside_points_are_not_clamped() {
        let pos = relative_position(Position::new(0.0, 250.0), Some(BOX)).unwrap();
        assert_eq!(pos, Position::new(-0.5, 2.0));
    }

    #[test]
    fn test_missing_or_empty_container() {
        assert_eq!(
            relative_position(Position::new(1.0, 1.0), None),
            Err(MouseError::NoContainer)
        );

        let flat = Rect { height: 0.0, ..BOX };
        assert!(matches!(
            relative_position(Position::new(1.0, 1.0), Some(flat)),
            Err(MouseError::EmptyContainer { .. })
        ));
    }
}
