//! `DrawSurface` — Vertrag zwischen Runtime und Grafik-Backend.

use crate::layout::{OrthographicFrustum, ResolvedGeometry, Viewport};
use crate::resource::Texture;
use std::sync::Arc;

/// Handle eines Knotens im Szenengraph der Zeichenfläche.
pub type SurfaceNodeId = u64;

/// Darstellung eines Szenengraph-Knotens.
#[derive(Debug, Clone)]
pub enum Visual {
    /// Texturiertes Rechteck (Kartenbild, Button, Hintergrund)
    Textured(Arc<Texture>),
    /// Einfarbiges Rechteck mit Deckkraft (Klick-Hotspots, Overlays)
    Solid {
        /// Farbe als RGBA, Komponenten ∈ [0,1]
        color: [f32; 4],
    },
}

/// Opake Zeichenfläche.
///
/// Implementierungen besitzen den Szenengraph; die Runtime mutiert ihn
/// ausschließlich über diese Methoden und nur aus dem Haupt-Tick heraus.
/// Gezeichnet wird in Szenengraph-Reihenfolge (Einfüge-Reihenfolge),
/// nicht nach einer benutzerdefinierten Priorität.
pub trait DrawSurface {
    /// Setzt die Pixel-Größe der Zeichenfläche (Resize).
    fn set_size(&mut self, viewport: Viewport);

    /// Erstellt einen Knoten und gibt sein Handle zurück.
    fn create_node(&mut self, geometry: ResolvedGeometry, visual: Visual) -> SurfaceNodeId;

    /// Setzt Position und Größe eines Knotens neu.
    fn set_geometry(&mut self, id: SurfaceNodeId, geometry: ResolvedGeometry);

    /// Blendet einen Knoten ein oder aus, ohne ihn zu zerstören.
    fn set_visible(&mut self, id: SurfaceNodeId, visible: bool);

    /// Entfernt einen Knoten und gibt seine Ressourcen frei.
    fn dispose_node(&mut self, id: SurfaceNodeId);

    /// Zeichnet einen Frame mit der gegebenen Kamera.
    /// Gibt die Anzahl gezeichneter (sichtbarer) Knoten zurück.
    fn render_frame(&mut self, camera: &OrthographicFrustum) -> usize;
}
