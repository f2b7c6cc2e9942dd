//! Registry interaktiver Klick-Regionen mit Hit-Testing.
//!
//! Die Registry muss mit dem Drawable-Lifecycle konsistent bleiben:
//! `View::hide` deregistriert Regionen, bevor die zugehörigen Drawables
//! freigegeben werden — ein Handler auf einem zerstörten Visual ist die
//! Defektklasse, die dieses Design ausschließt.
//!
//! Registrier-Reihenfolge ist Stapel-Reihenfolge: bei überlappenden
//! Regionen gewinnt die zuletzt registrierte. Re-Registrierung unter
//! derselben Owner-Id ersetzt den alten Eintrag atomar und hebt die
//! Region an die Spitze des Stapels.

use super::pointer::{pointer_to_camera, PointerEvent};
use crate::layout::{ResolvedGeometry, Viewport};
use glam::Vec2;
use indexmap::IndexMap;

/// Achsenparalleles Trefferrechteck im Kamera-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    /// Linke untere Ecke
    pub min: Vec2,
    /// Rechte obere Ecke
    pub max: Vec2,
}

impl HitArea {
    /// Leitet das Trefferrechteck aus einer aufgelösten Geometrie ab.
    pub fn from_geometry(geometry: &ResolvedGeometry) -> Self {
        let half = geometry.size / 2.0;
        Self {
            min: geometry.position - half,
            max: geometry.position + half,
        }
    }

    /// Ob der Punkt innerhalb liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Logische Aktion einer Region.
///
/// Geschlossene Variante statt String-Lookup: neue interaktive Typen
/// sind eine compile-zeit-geprüfte Änderung. Ausgeführt werden Aktionen
/// vom Client-Controller, nicht von der Registry selbst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionAction {
    /// Zu einem Pfad navigieren (z.B. Lobby-Hotspot im Shop)
    Navigate {
        /// Ziel-Pfad
        path: String,
    },
    /// Ein Element des aktiven Views einblenden (z.B. Shop-Auswahlscreen)
    RevealElement {
        /// Slug des Ziel-Elements
        slug: String,
    },
    /// Seite im aktiven View blättern (Deck-Ansicht)
    TurnPage {
        /// Richtung: +1 vor, −1 zurück
        delta: i32,
    },
}

/// Ergebnis eines erfolgreichen Hit-Tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHit {
    /// Owner-Id (Drawable-Id) der getroffenen Region
    pub owner: String,
    /// Hinterlegte Aktion
    pub action: RegionAction,
}

/// Registrierte Region.
#[derive(Debug, Clone)]
struct RegisteredRegion {
    hit_area: HitArea,
    action: RegionAction,
}

/// Registry aller aktiven Klick-Regionen.
///
/// Pro Owner-Id existiert höchstens eine aktive Region.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: IndexMap<String, RegisteredRegion>,
}

impl RegionRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl aktiver Regionen.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Ob keine Region registriert ist.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Ob für die Owner-Id eine Region registriert ist.
    pub fn contains(&self, owner: &str) -> bool {
        self.regions.contains_key(owner)
    }

    /// Registriert eine Region.
    ///
    /// Existiert bereits eine Region für `owner`, wird sie atomar
    /// ersetzt (kein Fenster mit Doppel-Dispatch) und ans Stapel-Ende
    /// gehoben.
    pub fn register(&mut self, owner: impl Into<String>, hit_area: HitArea, action: RegionAction) {
        let owner = owner.into();
        if self.regions.shift_remove(&owner).is_some() {
            log::debug!("Region '{}' ersetzt", owner);
        }
        self.regions.insert(owner, RegisteredRegion { hit_area, action });
    }

    /// Passt nur das Trefferrechteck an (Resize), ohne die
    /// Stapel-Reihenfolge zu verändern.
    pub fn update_hit_area(&mut self, owner: &str, hit_area: HitArea) {
        if let Some(region) = self.regions.get_mut(owner) {
            region.hit_area = hit_area;
        }
    }

    /// Entfernt die Region einer Owner-Id. Unbekannte Ids sind ein No-op.
    pub fn unregister(&mut self, owner: &str) {
        self.regions.shift_remove(owner);
    }

    /// Entfernt alle Regionen.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Hit-Test für ein Pointer-Event.
    ///
    /// Rechnet zuerst in den Kamera-Raum um, testet dann von der Spitze
    /// des Stapels abwärts und liefert höchstens einen Treffer — bei
    /// Überlappung gewinnt die zuletzt registrierte Region.
    pub fn dispatch(&self, event: &PointerEvent, viewport: Viewport) -> Option<RegionHit> {
        let camera_pos = pointer_to_camera(event.position, viewport);

        for (owner, region) in self.regions.iter().rev() {
            if region.hit_area.contains(camera_pos) {
                log::debug!("Region '{}' getroffen bei {:?}", owner, camera_pos);
                return Some(RegionHit {
                    owner: owner.clone(),
                    action: region.action.clone(),
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Region um das Kamera-Zentrum mit halber Kantenlänge `half`.
    fn area_around(center: Vec2, half: f32) -> HitArea {
        HitArea {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    fn navigate(path: &str) -> RegionAction {
        RegionAction::Navigate {
            path: path.to_string(),
        }
    }

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_hit_inside_single_region_dispatches_exactly_once() {
        let mut registry = RegionRegistry::new();
        registry.register("lobby_button", area_around(Vec2::ZERO, 50.0), navigate("/lobby"));

        // Bildschirmmitte = Kamera-Ursprung
        let hit = registry
            .dispatch(&PointerEvent::new(400.0, 300.0), VIEWPORT)
            .expect("Klick in die Region muss treffen");
        assert_eq!(hit.owner, "lobby_button");

        // Klick weit außerhalb trifft nichts
        assert!(registry
            .dispatch(&PointerEvent::new(10.0, 10.0), VIEWPORT)
            .is_none());
    }

    #[test]
    fn test_overlap_last_registered_wins() {
        let mut registry = RegionRegistry::new();
        registry.register("unten", area_around(Vec2::ZERO, 100.0), navigate("/a"));
        registry.register("oben", area_around(Vec2::ZERO, 100.0), navigate("/b"));

        let hit = registry
            .dispatch(&PointerEvent::new(400.0, 300.0), VIEWPORT)
            .expect("Überlappungspunkt muss treffen");
        assert_eq!(hit.owner, "oben");
    }

    #[test]
    fn test_reregistration_replaces_and_lifts_to_top() {
        let mut registry = RegionRegistry::new();
        registry.register("a", area_around(Vec2::ZERO, 100.0), navigate("/alt"));
        registry.register("b", area_around(Vec2::ZERO, 100.0), navigate("/b"));
        // Re-Registrierung: ersetzt, stapelt nicht, hebt 'a' über 'b'
        registry.register("a", area_around(Vec2::ZERO, 100.0), navigate("/neu"));

        assert_eq!(registry.len(), 2);
        let hit = registry
            .dispatch(&PointerEvent::new(400.0, 300.0), VIEWPORT)
            .expect("muss treffen");
        assert_eq!(hit.owner, "a");
        assert_eq!(hit.action, navigate("/neu"));
    }

    #[test]
    fn test_unregister_unknown_owner_is_noop() {
        let mut registry = RegionRegistry::new();
        registry.register("a", area_around(Vec2::ZERO, 10.0), navigate("/a"));

        registry.unregister("gibt_es_nicht");
        assert_eq!(registry.len(), 1);

        registry.unregister("a");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_hit_area_keeps_stacking_order() {
        let mut registry = RegionRegistry::new();
        registry.register("unten", area_around(Vec2::ZERO, 100.0), navigate("/a"));
        registry.register("oben", area_around(Vec2::ZERO, 100.0), navigate("/b"));

        // Resize passt 'unten' an, darf es aber nicht über 'oben' heben
        registry.update_hit_area("unten", area_around(Vec2::ZERO, 200.0));
        let hit = registry
            .dispatch(&PointerEvent::new(400.0, 300.0), VIEWPORT)
            .expect("muss treffen");
        assert_eq!(hit.owner, "oben");
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut registry = RegionRegistry::new();
        registry.register("a", area_around(Vec2::ZERO, 10.0), navigate("/a"));
        registry.register("b", area_around(Vec2::ZERO, 10.0), navigate("/b"));

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry
            .dispatch(&PointerEvent::new(400.0, 300.0), VIEWPORT)
            .is_none());
    }

    #[test]
    fn test_hit_area_from_geometry_centers_box() {
        let geometry = ResolvedGeometry {
            position: Vec2::new(100.0, -50.0),
            size: Vec2::new(40.0, 20.0),
        };
        let area = HitArea::from_geometry(&geometry);

        assert_eq!(area.min, Vec2::new(80.0, -60.0));
        assert_eq!(area.max, Vec2::new(120.0, -40.0));
        assert!(area.contains(Vec2::new(100.0, -50.0)));
        assert!(!area.contains(Vec2::new(121.0, -50.0)));
    }
}
