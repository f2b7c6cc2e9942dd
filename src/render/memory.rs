//! In-Memory-Zeichenfläche für Tests und Headless-Betrieb.

use super::surface::{DrawSurface, SurfaceNodeId, Visual};
use crate::layout::{OrthographicFrustum, ResolvedGeometry, Viewport};
use indexmap::IndexMap;

/// Ein Knoten im In-Memory-Szenengraph.
#[derive(Debug, Clone)]
pub struct MemoryNode {
    /// Aktuelle Geometrie
    pub geometry: ResolvedGeometry,
    /// Darstellung
    pub visual: Visual,
    /// Sichtbarkeit
    pub visible: bool,
}

/// CPU-seitige Zeichenfläche.
///
/// Hält den Szenengraph als geordnete Map (Einfüge-Reihenfolge =
/// Zeichen-Reihenfolge) und zählt gezeichnete Knoten statt tatsächlich
/// zu rastern. Dient Tests und Hosts ohne GPU-Backend als Referenz.
#[derive(Default)]
pub struct MemorySurface {
    nodes: IndexMap<SurfaceNodeId, MemoryNode>,
    next_id: SurfaceNodeId,
    viewport: Option<Viewport>,
    frames_rendered: u64,
    last_drawn: usize,
}

impl MemorySurface {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl lebender Knoten (sichtbar oder nicht).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl aktuell sichtbarer Knoten.
    pub fn visible_count(&self) -> usize {
        self.nodes.values().filter(|n| n.visible).count()
    }

    /// Knoten-Zugriff für Assertions.
    pub fn node(&self, id: SurfaceNodeId) -> Option<&MemoryNode> {
        self.nodes.get(&id)
    }

    /// Anzahl bisher gezeichneter Frames.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Anzahl der im letzten Frame gezeichneten Knoten.
    pub fn last_drawn(&self) -> usize {
        self.last_drawn
    }

    /// Zuletzt gesetzte Viewport-Größe.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl DrawSurface for MemorySurface {
    fn set_size(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    fn create_node(&mut self, geometry: ResolvedGeometry, visual: Visual) -> SurfaceNodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            MemoryNode {
                geometry,
                visual,
                visible: true,
            },
        );
        id
    }

    fn set_geometry(&mut self, id: SurfaceNodeId, geometry: ResolvedGeometry) {
        let node = self
            .nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("set_geometry auf unbekanntem Surface-Knoten {}", id));
        node.geometry = geometry;
    }

    fn set_visible(&mut self, id: SurfaceNodeId, visible: bool) {
        let node = self
            .nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("set_visible auf unbekanntem Surface-Knoten {}", id));
        node.visible = visible;
    }

    fn dispose_node(&mut self, id: SurfaceNodeId) {
        // shift_remove hält die Zeichen-Reihenfolge der übrigen Knoten stabil
        if self.nodes.shift_remove(&id).is_none() {
            panic!("dispose_node auf unbekanntem Surface-Knoten {}", id);
        }
    }

    fn render_frame(&mut self, _camera: &OrthographicFrustum) -> usize {
        self.frames_rendered += 1;
        self.last_drawn = self.visible_count();
        self.last_drawn
    }
}
