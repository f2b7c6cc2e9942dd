//! Pointer-Events und Koordinaten-Umrechnung.

use crate::layout::Viewport;
use glam::Vec2;

/// Ein rohes Pointer-Event in Client-Pixel-Koordinaten.
///
/// Ursprung ist die linke obere Ecke der Zeichenfläche, Y wächst nach
/// unten — so liefern es DOM und Fenstersysteme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in Client-Pixeln
    pub position: Vec2,
}

impl PointerEvent {
    /// Erstellt ein Pointer-Event.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

/// Rechnet Client-Pixel in Kamera-Koordinaten um.
///
/// Kamera-Raum: Ursprung in der Bildschirmmitte, Y wächst nach oben —
/// derselbe Raum, in dem `layout::resolve` Geometrien liefert. Die
/// Umrechnung muss vor jedem Hit-Test passieren.
pub fn pointer_to_camera(position: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        position.x - viewport.width / 2.0,
        viewport.height / 2.0 - position.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_origin() {
        let camera_pos = pointer_to_camera(Vec2::new(400.0, 300.0), Viewport::new(800.0, 600.0));
        assert_relative_eq!(camera_pos.x, 0.0);
        assert_relative_eq!(camera_pos.y, 0.0);
    }

    #[test]
    fn test_top_left_maps_to_negative_x_positive_y() {
        let camera_pos = pointer_to_camera(Vec2::new(0.0, 0.0), Viewport::new(800.0, 600.0));
        assert_relative_eq!(camera_pos.x, -400.0);
        assert_relative_eq!(camera_pos.y, 300.0);
    }

    #[test]
    fn test_conversion_matches_layout_convention() {
        // Ein Element bei (25%, 25%) muss von einem Klick auf dieselbe
        // prozentuale Bildschirmposition getroffen werden.
        let viewport = Viewport::new(1920.0, 1080.0);
        let geometry = crate::layout::resolve(
            &crate::layout::LayoutSpec::new(Vec2::new(0.25, 0.25), 0.1, 0.1),
            viewport,
        );
        let camera_pos = pointer_to_camera(Vec2::new(1920.0 * 0.25, 1080.0 * 0.25), viewport);

        assert_relative_eq!(camera_pos.x, geometry.position.x);
        assert_relative_eq!(camera_pos.y, geometry.position.y);
    }
}
