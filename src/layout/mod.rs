//! Viewport-Layout-Engine: Design-Space-Prozente → Pixel-Geometrie.
//!
//! Layouts werden als Prozent des Viewports verfasst und hier für eine
//! konkrete Viewport-Größe aufgelöst. Alle Funktionen sind pur; bei
//! Resize wird immer aus den ursprünglichen Prozenten neu gerechnet,
//! nie ein vorheriges Ergebnis skaliert — sonst akkumuliert Drift.
//!
//! Ursprungs-Konvention (einheitlich für alle Aufrufer):
//! Bildschirmmitte ist der Ursprung, `x = (px − 0.5)·Breite`,
//! `y = (0.5 − py)·Höhe`. Wachsende Prozent-Y wandern also nach unten,
//! Pixel-Y wächst nach oben (orthographische Kamera).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Aktuelle Viewport-Größe in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl Viewport {
    /// Erstellt einen Viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Seitenverhältnis Breite/Höhe.
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Als Vektor [Breite, Höhe].
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Design-seitige, unveränderliche Layout-Angabe eines Elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    /// Position des Element-Zentrums in Prozent des Viewports, ∈ [0,1]²
    pub position_percent: Vec2,
    /// Breite in Prozent der Viewport-Breite
    pub width_percent: f32,
    /// Höhe in Prozent der Viewport-Höhe
    pub height_percent: f32,
}

impl LayoutSpec {
    /// Erstellt eine Layout-Angabe aus Prozentwerten.
    pub const fn new(position_percent: Vec2, width_percent: f32, height_percent: f32) -> Self {
        Self {
            position_percent,
            width_percent,
            height_percent,
        }
    }

    /// Erstellt eine Layout-Angabe aus Pixelmaßen der Design-Auflösung
    /// (z.B. ein 300x300-Button bei 1920x1080).
    pub fn from_design_px(position_px: Vec2, size_px: Vec2, design_size: Vec2) -> Self {
        Self {
            position_percent: position_px / design_size,
            width_percent: size_px.x / design_size.x,
            height_percent: size_px.y / design_size.y,
        }
    }

    /// Vollflächiges Element (Hintergrundbild).
    pub const fn fullscreen() -> Self {
        Self {
            position_percent: Vec2::new(0.5, 0.5),
            width_percent: 1.0,
            height_percent: 1.0,
        }
    }
}

/// Aufgelöste Pixel-Geometrie eines Elements.
///
/// Wird pro Resize neu abgeleitet und nie über Resizes hinweg
/// persistiert; Eigentümer ist ausschließlich das anfordernde Drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    /// Element-Zentrum in Kamera-Koordinaten (Ursprung = Bildschirmmitte)
    pub position: Vec2,
    /// Größe in Pixeln [Breite, Höhe]
    pub size: Vec2,
}

/// Symmetrisches orthographisches Kamera-Frustum.
///
/// 1:1-Pixel-zu-Einheit-Abbildung: die Grenzen entsprechen exakt dem
/// halben Viewport. Wird bei jedem Resize neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicFrustum {
    /// Linke Grenze (−Breite/2)
    pub left: f32,
    /// Rechte Grenze (+Breite/2)
    pub right: f32,
    /// Obere Grenze (+Höhe/2)
    pub top: f32,
    /// Untere Grenze (−Höhe/2)
    pub bottom: f32,
}

impl OrthographicFrustum {
    /// Sichtbare Breite in Einheiten.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Sichtbare Höhe in Einheiten.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Löst eine Layout-Angabe für einen Viewport auf. Pure Funktion.
///
/// Wiederholte Aufrufe mit identischen Eingaben liefern bit-identische
/// Ergebnisse (keine Akkumulation über Resizes).
pub fn resolve(spec: &LayoutSpec, viewport: Viewport) -> ResolvedGeometry {
    ResolvedGeometry {
        position: Vec2::new(
            (spec.position_percent.x - 0.5) * viewport.width,
            (0.5 - spec.position_percent.y) * viewport.height,
        ),
        size: Vec2::new(
            spec.width_percent * viewport.width,
            spec.height_percent * viewport.height,
        ),
    }
}

/// Berechnet das Kamera-Frustum für einen Viewport. Pure Funktion.
pub fn resolve_camera(viewport: Viewport) -> OrthographicFrustum {
    let half_width = viewport.aspect() * viewport.height / 2.0;
    let half_height = viewport.height / 2.0;
    OrthographicFrustum {
        left: -half_width,
        right: half_width,
        top: half_height,
        bottom: -half_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_centers_midpoint_at_origin() {
        let spec = LayoutSpec::new(Vec2::new(0.5, 0.5), 0.25, 0.5);
        let geometry = resolve(&spec, Viewport::new(1920.0, 1080.0));

        assert_relative_eq!(geometry.position.x, 0.0);
        assert_relative_eq!(geometry.position.y, 0.0);
        assert_relative_eq!(geometry.size.x, 480.0);
        assert_relative_eq!(geometry.size.y, 540.0);
    }

    #[test]
    fn test_resolve_y_axis_points_down_in_percent_space() {
        // Prozent-Y nahe 0 = oben am Bildschirm = positive Kamera-Y
        let top_left = LayoutSpec::new(Vec2::new(0.0, 0.0), 0.1, 0.1);
        let geometry = resolve(&top_left, Viewport::new(800.0, 600.0));

        assert_relative_eq!(geometry.position.x, -400.0);
        assert_relative_eq!(geometry.position.y, 300.0);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let spec = LayoutSpec::new(Vec2::new(0.04761, 0.07534), 0.09415, 0.06458);
        let viewport = Viewport::new(1366.0, 768.0);

        let a = resolve(&spec, viewport);
        let b = resolve(&spec, viewport);
        // Bit-identisch, nicht nur ungefähr gleich
        assert_eq!(a, b);
    }

    #[test]
    fn test_resize_roundtrip_has_no_drift() {
        let spec = LayoutSpec::new(Vec2::new(0.3, 0.7), 0.15625, 0.2777);
        let v1 = Viewport::new(1920.0, 1080.0);
        let v2 = Viewport::new(1024.0, 768.0);

        let original = resolve(&spec, v1);
        let _resized = resolve(&spec, v2);
        let back = resolve(&spec, v1);

        // Nach Resize-Hin-und-Zurück exakt die Ausgangsgeometrie
        assert_eq!(original, back);
    }

    #[test]
    fn test_camera_frustum_is_symmetric_and_pixel_true() {
        let frustum = resolve_camera(Viewport::new(1920.0, 1080.0));

        assert_relative_eq!(frustum.left, -960.0);
        assert_relative_eq!(frustum.right, 960.0);
        assert_relative_eq!(frustum.top, 540.0);
        assert_relative_eq!(frustum.bottom, -540.0);
        assert_relative_eq!(frustum.width(), 1920.0);
        assert_relative_eq!(frustum.height(), 1080.0);
    }

    #[test]
    fn test_from_design_px_matches_manual_percentages() {
        let design = Vec2::new(1920.0, 1080.0);
        let spec = LayoutSpec::from_design_px(
            Vec2::new(960.0, 540.0),
            Vec2::new(300.0, 300.0),
            design,
        );

        assert_relative_eq!(spec.position_percent.x, 0.5);
        assert_relative_eq!(spec.position_percent.y, 0.5);
        assert_relative_eq!(spec.width_percent, 300.0 / 1920.0);
        assert_relative_eq!(spec.height_percent, 300.0 / 1080.0);
    }
}
