//! `DrawableEntity` — ein sichtbares Rechteck mit Scoped-Lifecycle.
//!
//! Lifecycle: `create → (reposition | set_visible)* → dispose`.
//! Dispose gibt den Surface-Knoten auf jedem Pfad frei; Zugriff nach
//! Dispose und Doppel-Dispose sind Programmierfehler und schlagen laut
//! fehl, statt still absorbiert zu werden.

use crate::layout::ResolvedGeometry;
use crate::render::{DrawSurface, SurfaceNodeId, Visual};

/// Ein positioniertes, größenbehaftetes visuelles Primitive.
///
/// Die `id` ist über Resizes hinweg stabil und dient gleichzeitig als
/// Owner-Id für Klick-Regionen. Der Surface-Knoten gehört exklusiv
/// diesem Drawable.
#[derive(Debug)]
pub struct DrawableEntity {
    /// Stabile, opake Id (Element-Slug des View-Plans)
    id: String,
    /// Surface-Handle; `None` nach Dispose
    node: Option<SurfaceNodeId>,
    /// Zuletzt gesetzte Geometrie
    geometry: ResolvedGeometry,
    /// Aktuelle Sichtbarkeit
    visible: bool,
}

impl DrawableEntity {
    /// Erstellt das Drawable und fügt es dem Szenengraph hinzu.
    pub fn create(
        surface: &mut dyn DrawSurface,
        id: impl Into<String>,
        geometry: ResolvedGeometry,
        visual: Visual,
    ) -> Self {
        let id = id.into();
        let node = surface.create_node(geometry, visual);
        log::debug!("Drawable '{}' erstellt (Surface-Knoten {})", id, node);
        Self {
            id,
            node: Some(node),
            geometry,
            visible: true,
        }
    }

    /// Stabile Id des Drawables.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Zuletzt gesetzte Geometrie.
    pub fn geometry(&self) -> ResolvedGeometry {
        self.geometry
    }

    /// Aktuelle Sichtbarkeit.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ob das Drawable bereits freigegeben wurde.
    pub fn is_disposed(&self) -> bool {
        self.node.is_none()
    }

    /// Setzt die Geometrie neu (z.B. nach Resize).
    ///
    /// Beliebig oft aufrufbar; die vorherige Geometrie wird ersetzt,
    /// ohne einen Surface-Knoten zu verlieren.
    pub fn reposition(&mut self, surface: &mut dyn DrawSurface, geometry: ResolvedGeometry) {
        let node = self.node_or_panic("reposition");
        surface.set_geometry(node, geometry);
        self.geometry = geometry;
    }

    /// Blendet das Drawable ein oder aus, ohne es zu zerstören.
    pub fn set_visible(&mut self, surface: &mut dyn DrawSurface, visible: bool) {
        let node = self.node_or_panic("set_visible");
        surface.set_visible(node, visible);
        self.visible = visible;
    }

    /// Gibt den Surface-Knoten frei.
    ///
    /// Doppel-Dispose ist ein Programmierfehler und panikt.
    pub fn dispose(&mut self, surface: &mut dyn DrawSurface) {
        let node = self.node_or_panic("dispose");
        surface.dispose_node(node);
        self.node = None;
        log::debug!("Drawable '{}' freigegeben", self.id);
    }

    fn node_or_panic(&self, operation: &str) -> SurfaceNodeId {
        self.node.unwrap_or_else(|| {
            panic!(
                "{} auf bereits freigegebenem Drawable '{}'",
                operation, self.id
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, LayoutSpec, Viewport};
    use crate::render::MemorySurface;
    use glam::Vec2;

    fn geometry_at(percent: Vec2) -> ResolvedGeometry {
        resolve(
            &LayoutSpec::new(percent, 0.1, 0.1),
            Viewport::new(1000.0, 500.0),
        )
    }

    #[test]
    fn test_create_reposition_dispose_roundtrip() {
        let mut surface = MemorySurface::new();
        let mut drawable = DrawableEntity::create(
            &mut surface,
            "lobby_button",
            geometry_at(Vec2::new(0.5, 0.5)),
            Visual::Solid { color: [1.0; 4] },
        );
        assert_eq!(surface.node_count(), 1);

        // Mehrfaches Reposition darf keine Knoten leaken
        for step in 1..=5 {
            let g = geometry_at(Vec2::new(0.1 * step as f32, 0.5));
            drawable.reposition(&mut surface, g);
            assert_eq!(drawable.geometry(), g);
        }
        assert_eq!(surface.node_count(), 1);

        drawable.dispose(&mut surface);
        assert!(drawable.is_disposed());
        assert_eq!(surface.node_count(), 0);
    }

    #[test]
    fn test_set_visible_toggles_without_destroying() {
        let mut surface = MemorySurface::new();
        let mut drawable = DrawableEntity::create(
            &mut surface,
            "select_screen",
            geometry_at(Vec2::new(0.5, 0.5)),
            Visual::Solid { color: [1.0; 4] },
        );

        drawable.set_visible(&mut surface, false);
        assert!(!drawable.is_visible());
        assert_eq!(surface.node_count(), 1);
        assert_eq!(surface.visible_count(), 0);

        drawable.set_visible(&mut surface, true);
        assert_eq!(surface.visible_count(), 1);
    }

    #[test]
    #[should_panic(expected = "dispose auf bereits freigegebenem Drawable")]
    fn test_double_dispose_panics() {
        let mut surface = MemorySurface::new();
        let mut drawable = DrawableEntity::create(
            &mut surface,
            "doppelt",
            geometry_at(Vec2::new(0.5, 0.5)),
            Visual::Solid { color: [1.0; 4] },
        );
        drawable.dispose(&mut surface);
        drawable.dispose(&mut surface);
    }

    #[test]
    #[should_panic(expected = "reposition auf bereits freigegebenem Drawable")]
    fn test_reposition_after_dispose_panics() {
        let mut surface = MemorySurface::new();
        let mut drawable = DrawableEntity::create(
            &mut surface,
            "zu_spaet",
            geometry_at(Vec2::new(0.5, 0.5)),
            Visual::Solid { color: [1.0; 4] },
        );
        drawable.dispose(&mut surface);
        drawable.reposition(&mut surface, geometry_at(Vec2::new(0.2, 0.2)));
    }
}
