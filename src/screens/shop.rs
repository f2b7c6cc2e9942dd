//! Der Karten-Shop: Kaufen-Buttons je Rasse, Auswahlscreens und
//! Hotspots zurück zur Lobby bzw. ins Deck.

use glam::Vec2;

use crate::input::RegionAction;
use crate::layout::LayoutSpec;
use crate::resource::ResourceKey;
use crate::shared::options::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::view::{ElementPlan, ViewPlan};

use super::{LOBBY_PATH, MY_DECK_PATH};

/// Hintergrundmusik des Shops.
pub const SHOP_MUSIC: &str = "shop/card-shop";

/// Button-Kantenlänge in Design-Pixeln (300x300 bei 1920x1080).
const BUTTON_SIZE_PX: Vec2 = Vec2::new(300.0, 300.0);
/// Auswahlscreen-Größe in Design-Pixeln (400x600 bei 1920x1080).
const SELECT_SCREEN_SIZE_PX: Vec2 = Vec2::new(400.0, 600.0);

/// Hotspot-Maße in Viewport-Prozenten.
const HOTSPOT_WIDTH: f32 = 0.09415;
const HOTSPOT_HEIGHT: f32 = 0.06458;
/// Weiß mit 80% Deckkraft.
const HOTSPOT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];

/// Die vier Kaufen-Buttons des Shops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopButtonKind {
    /// Karten aller Rassen
    All,
    /// Nur Untote
    Undead,
    /// Nur Trents
    Trent,
    /// Nur Menschen
    Human,
}

impl ShopButtonKind {
    pub const ALL_KINDS: [ShopButtonKind; 4] = [
        ShopButtonKind::All,
        ShopButtonKind::Undead,
        ShopButtonKind::Trent,
        ShopButtonKind::Human,
    ];

    /// Texture-Id in der Kategorie `shop_buttons`.
    pub fn texture_id(self) -> u32 {
        match self {
            ShopButtonKind::All => 1,
            ShopButtonKind::Undead => 2,
            ShopButtonKind::Trent => 3,
            ShopButtonKind::Human => 4,
        }
    }

    /// Element-Slug des Buttons.
    pub fn slug(self) -> &'static str {
        match self {
            ShopButtonKind::All => "button_all",
            ShopButtonKind::Undead => "button_undead",
            ShopButtonKind::Trent => "button_trent",
            ShopButtonKind::Human => "button_human",
        }
    }

    /// Element-Slug des zugehörigen Auswahlscreens.
    pub fn select_screen_slug(self) -> &'static str {
        match self {
            ShopButtonKind::All => "select_screen_all",
            ShopButtonKind::Undead => "select_screen_undead",
            ShopButtonKind::Trent => "select_screen_trent",
            ShopButtonKind::Human => "select_screen_human",
        }
    }

    /// Button-Zentrum in Design-Pixeln: eine Reihe auf halber Höhe.
    fn position_px(self) -> Vec2 {
        let x = match self {
            ShopButtonKind::All => 0.2,
            ShopButtonKind::Undead => 0.4,
            ShopButtonKind::Trent => 0.6,
            ShopButtonKind::Human => 0.8,
        };
        Vec2::new(x * DESIGN_WIDTH, 0.5 * DESIGN_HEIGHT)
    }
}

/// Baut den Shop-Plan.
///
/// Die Auswahlscreens starten unsichtbar und werden erst durch den
/// Klick auf ihren Button eingeblendet; die beiden Hotspots links oben
/// navigieren zurück zur Lobby bzw. ins Deck.
pub fn plan() -> ViewPlan {
    let design = Vec2::new(DESIGN_WIDTH, DESIGN_HEIGHT);
    let mut plan = ViewPlan::new("shop")
        .with_music(SHOP_MUSIC)
        .with_element(ElementPlan::textured(
            "background",
            ResourceKey::new("shop_background", 1),
            LayoutSpec::fullscreen(),
        ));

    for kind in ShopButtonKind::ALL_KINDS {
        plan = plan.with_element(
            ElementPlan::textured(
                kind.slug(),
                ResourceKey::new("shop_buttons", kind.texture_id()),
                LayoutSpec::from_design_px(kind.position_px(), BUTTON_SIZE_PX, design),
            )
            .with_action(RegionAction::RevealElement {
                slug: kind.select_screen_slug().to_string(),
            }),
        );
    }

    for kind in ShopButtonKind::ALL_KINDS {
        plan = plan.with_element(
            ElementPlan::textured(
                kind.select_screen_slug(),
                ResourceKey::new("shop_select_screens", kind.texture_id()),
                LayoutSpec::from_design_px(
                    Vec2::new(kind.position_px().x, 0.5 * DESIGN_HEIGHT),
                    SELECT_SCREEN_SIZE_PX,
                    design,
                ),
            )
            .hidden(),
        );
    }

    plan.with_element(hotspot("lobby_hotspot", 0.04761, 0.07534, LOBBY_PATH))
        .with_element(hotspot("my_deck_hotspot", 0.04761, 0.14734, MY_DECK_PATH))
}

fn hotspot(slug: &str, x_percent: f32, y_percent: f32, target: &str) -> ElementPlan {
    ElementPlan::solid(
        slug,
        HOTSPOT_COLOR,
        LayoutSpec::new(
            Vec2::new(x_percent, y_percent),
            HOTSPOT_WIDTH,
            HOTSPOT_HEIGHT,
        ),
    )
    .with_action(RegionAction::Navigate {
        path: target.to_string(),
    })
}
