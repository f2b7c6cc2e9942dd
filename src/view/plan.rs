//! Deklarative View-Pläne.
//!
//! Ein `ViewPlan` beschreibt einen Screen vollständig als Daten:
//! welche Elemente es gibt, wo sie liegen (Design-Space-Prozente),
//! wie sie aussehen und was ein Klick auslöst. Das dünne Wiring pro
//! Screen reduziert sich damit auf das Bauen eines Plans.

use crate::input::RegionAction;
use crate::layout::LayoutSpec;
use crate::resource::ResourceKey;

/// Darstellung eines geplanten Elements.
#[derive(Debug, Clone)]
pub enum ElementVisual {
    /// Texturiertes Rechteck; die Texture kommt aus dem Cache
    Texture {
        /// Cache-Key der Texture
        key: ResourceKey,
    },
    /// Einfarbiges Rechteck (Klick-Hotspot, Overlay); braucht kein I/O
    Solid {
        /// Farbe als RGBA, Komponenten ∈ [0,1]
        color: [f32; 4],
    },
}

/// Ein geplantes Element eines Views.
#[derive(Debug, Clone)]
pub struct ElementPlan {
    /// Eindeutiger Slug innerhalb des Views; zugleich Drawable- und
    /// Region-Owner-Id
    pub slug: String,
    /// Darstellung
    pub visual: ElementVisual,
    /// Layout in Design-Space-Prozenten
    pub layout: LayoutSpec,
    /// Klick-Aktion; `None` = rein dekorativ
    pub action: Option<RegionAction>,
    /// Seiten-Zuordnung für blätterbare Views (Deck-Seiten)
    pub page: Option<u32>,
    /// Startet unsichtbar (z.B. Shop-Auswahlscreens, die erst ein
    /// Button-Klick einblendet)
    pub hidden_on_create: bool,
}

impl ElementPlan {
    /// Texturiertes Element.
    pub fn textured(slug: impl Into<String>, key: ResourceKey, layout: LayoutSpec) -> Self {
        Self {
            slug: slug.into(),
            visual: ElementVisual::Texture { key },
            layout,
            action: None,
            page: None,
            hidden_on_create: false,
        }
    }

    /// Einfarbiges Element.
    pub fn solid(slug: impl Into<String>, color: [f32; 4], layout: LayoutSpec) -> Self {
        Self {
            slug: slug.into(),
            visual: ElementVisual::Solid { color },
            layout,
            action: None,
            page: None,
            hidden_on_create: false,
        }
    }

    /// Hinterlegt eine Klick-Aktion.
    pub fn with_action(mut self, action: RegionAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Ordnet das Element einer Seite zu.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Lässt das Element unsichtbar starten.
    pub fn hidden(mut self) -> Self {
        self.hidden_on_create = true;
        self
    }
}

/// Vollständiger Plan eines Screens.
#[derive(Debug, Clone)]
pub struct ViewPlan {
    /// View-Name (Registry-Schlüssel)
    pub name: String,
    /// Musik-Track, der beim Aktivieren gespielt wird
    pub music: Option<String>,
    /// Elemente in Zeichen-Reihenfolge (vorne = hinten im Bild)
    pub elements: Vec<ElementPlan>,
}

impl ViewPlan {
    /// Erstellt einen leeren Plan.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            music: None,
            elements: Vec::new(),
        }
    }

    /// Hinterlegt den Musik-Track.
    pub fn with_music(mut self, track: impl Into<String>) -> Self {
        self.music = Some(track.into());
        self
    }

    /// Fügt ein Element hinzu.
    ///
    /// Slugs müssen eindeutig sein — sie sind Owner-Ids für Drawables
    /// und Regionen. Ein Duplikat ist ein Programmierfehler.
    pub fn with_element(mut self, element: ElementPlan) -> Self {
        assert!(
            !self.elements.iter().any(|e| e.slug == element.slug),
            "Doppelter Element-Slug '{}' im View '{}'",
            element.slug,
            self.name
        );
        self.elements.push(element);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn any_layout() -> LayoutSpec {
        LayoutSpec::new(Vec2::new(0.5, 0.5), 0.1, 0.1)
    }

    #[test]
    fn test_plan_builder_collects_elements_in_order() {
        let plan = ViewPlan::new("shop")
            .with_music("shop/card-shop")
            .with_element(ElementPlan::solid("hintergrund", [1.0; 4], any_layout()))
            .with_element(
                ElementPlan::textured(
                    "button_all",
                    ResourceKey::new("shop_buttons", 1),
                    any_layout(),
                )
                .with_action(RegionAction::RevealElement {
                    slug: "screen_all".to_string(),
                }),
            );

        assert_eq!(plan.elements.len(), 2);
        assert_eq!(plan.elements[0].slug, "hintergrund");
        assert!(plan.elements[1].action.is_some());
        assert_eq!(plan.music.as_deref(), Some("shop/card-shop"));
    }

    #[test]
    #[should_panic(expected = "Doppelter Element-Slug")]
    fn test_duplicate_slug_panics() {
        let _ = ViewPlan::new("kaputt")
            .with_element(ElementPlan::solid("x", [1.0; 4], any_layout()))
            .with_element(ElementPlan::solid("x", [1.0; 4], any_layout()));
    }
}
