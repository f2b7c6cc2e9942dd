//! Die Deck-Übersicht: blätterbares Kartenraster mit Vor- und
//! Zurück-Buttons.

use glam::Vec2;

use crate::input::RegionAction;
use crate::layout::LayoutSpec;
use crate::resource::ResourceKey;
use crate::shared::options::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::view::{ElementPlan, ViewPlan};

use super::LOBBY_PATH;

/// Hintergrundmusik der Deck-Übersicht.
pub const MY_DECK_MUSIC: &str = "my-deck/deck-browser";

/// Kartenmaße in Design-Pixeln.
const CARD_WIDTH_PX: f32 = 150.0;
const CARD_HEIGHT_PX: f32 = CARD_WIDTH_PX * 1.615;

/// Raster: 4 Spalten x 2 Reihen pro Seite.
const GRID_COLUMNS: u32 = 4;
const GRID_ROWS: u32 = 2;
/// Karten pro Seite.
pub const CARDS_PER_PAGE: u32 = GRID_COLUMNS * GRID_ROWS;

/// Die beiden Blätter-Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButtonKind {
    Prev,
    Next,
}

impl PageButtonKind {
    /// Texture-Id in der Kategorie `deck_buttons`.
    pub fn texture_id(self) -> u32 {
        match self {
            PageButtonKind::Prev => 1,
            PageButtonKind::Next => 2,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageButtonKind::Prev => "prev_button",
            PageButtonKind::Next => "next_button",
        }
    }

    /// Seitendelta beim Klick.
    pub fn delta(self) -> i32 {
        match self {
            PageButtonKind::Prev => -1,
            PageButtonKind::Next => 1,
        }
    }

    fn position_percent(self) -> Vec2 {
        match self {
            PageButtonKind::Prev => Vec2::new(0.08, 0.5),
            PageButtonKind::Next => Vec2::new(0.92, 0.5),
        }
    }
}

/// Baut die Deck-Übersicht für die Karten-Ids `1..=card_count`.
///
/// Jede Karte wird genau einer Seite zugeordnet; nur die Karten der
/// aktuellen Seite sind sichtbar, die Buttons blättern um.
pub fn plan_with_cards(card_count: u32) -> ViewPlan {
    let mut plan = ViewPlan::new("my_deck")
        .with_music(MY_DECK_MUSIC)
        .with_element(ElementPlan::textured(
            "background",
            ResourceKey::new("my_deck_background", 1),
            LayoutSpec::fullscreen(),
        ));

    for card_id in 1..=card_count {
        let index = card_id - 1;
        let page = index / CARDS_PER_PAGE;
        plan = plan.with_element(
            ElementPlan::textured(
                format!("deck_card_{}", card_id),
                ResourceKey::new("deck_cards", card_id),
                card_slot_layout(index % CARDS_PER_PAGE),
            )
            .on_page(page),
        );
    }

    for kind in [PageButtonKind::Prev, PageButtonKind::Next] {
        plan = plan.with_element(
            ElementPlan::textured(
                kind.slug(),
                ResourceKey::new("deck_buttons", kind.texture_id()),
                LayoutSpec::new(kind.position_percent(), 80.0 / DESIGN_WIDTH, 80.0 / DESIGN_HEIGHT),
            )
            .with_action(RegionAction::TurnPage {
                delta: kind.delta(),
            }),
        );
    }

    plan.with_element(
        ElementPlan::solid(
            "lobby_hotspot",
            [1.0, 1.0, 1.0, 0.8],
            LayoutSpec::new(Vec2::new(0.04761, 0.07534), 0.09415, 0.06458),
        )
        .with_action(RegionAction::Navigate {
            path: LOBBY_PATH.to_string(),
        }),
    )
}

/// Default-Deck mit zwei vollen Seiten.
pub fn plan() -> ViewPlan {
    plan_with_cards(2 * CARDS_PER_PAGE)
}

/// Raster-Position eines Seiten-Slots als Design-Space-Layout.
fn card_slot_layout(slot: u32) -> LayoutSpec {
    let column = slot % GRID_COLUMNS;
    let row = slot / GRID_COLUMNS;
    // Raster mittig im Screen, mit Luft zwischen den Karten
    let x = 0.26 + column as f32 * 0.16;
    let y = 0.32 + row as f32 * 0.36;
    LayoutSpec::new(
        Vec2::new(x, y),
        CARD_WIDTH_PX / DESIGN_WIDTH,
        CARD_HEIGHT_PX / DESIGN_HEIGHT,
    )
}
