//! Das Schlachtfeld: eine Einheiten-Karte mit angehefteten
//! Status-Icons (Waffe, HP, Energie, Rasse).
//!
//! Die Icons sind relativ zum Karten-Zentrum in Design-Pixeln
//! verankert; beim Resize wandern sie mit, weil alle Angaben als
//! Prozente desselben Design-Space abgelegt sind.

use glam::Vec2;

use crate::input::RegionAction;
use crate::layout::LayoutSpec;
use crate::resource::ResourceKey;
use crate::shared::options::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::view::{ElementPlan, ViewPlan};

use super::LOBBY_PATH;

/// Hintergrundmusik des Schlachtfelds.
pub const BATTLE_FIELD_MUSIC: &str = "battle-field/battle";

/// Kartenmaße in Design-Pixeln; Seitenverhältnis der Kartenscans.
const CARD_WIDTH_PX: f32 = 150.0;
const CARD_HEIGHT_PX: f32 = CARD_WIDTH_PX * 1.615;

/// Waffen-Icon-Maße in Design-Pixeln.
const WEAPON_WIDTH_PX: f32 = 100.0;
const WEAPON_HEIGHT_PX: f32 = WEAPON_WIDTH_PX * 1.651;

/// Kantenlänge der kleinen Status-Icons.
const ICON_SIZE_PX: f32 = 50.0;

/// Baut den Schlachtfeld-Plan.
pub fn plan() -> ViewPlan {
    let design = Vec2::new(DESIGN_WIDTH, DESIGN_HEIGHT);
    let card_center = Vec2::new(0.5 * DESIGN_WIDTH, 0.5 * DESIGN_HEIGHT);
    let card_size = Vec2::new(CARD_WIDTH_PX, CARD_HEIGHT_PX);

    // Waffe in der rechten unteren Ecke der Karte, leicht eingerückt
    let weapon_center = card_center + Vec2::new(CARD_WIDTH_PX / 2.0 - 8.0, CARD_HEIGHT_PX / 2.0 - 8.0);
    // HP links unten, Energie links oben, Rasse rechts oben
    let hp_center = card_center + Vec2::new(-CARD_WIDTH_PX / 2.0, CARD_HEIGHT_PX / 2.0);
    let energy_center = card_center + Vec2::new(-CARD_WIDTH_PX / 2.0, -CARD_HEIGHT_PX / 2.0);
    let race_center = card_center + Vec2::new(CARD_WIDTH_PX / 2.0, -CARD_HEIGHT_PX / 2.0);
    let icon_size = Vec2::splat(ICON_SIZE_PX);

    ViewPlan::new("battle_field")
        .with_music(BATTLE_FIELD_MUSIC)
        .with_element(ElementPlan::textured(
            "background",
            ResourceKey::new("battle_field_background", 1),
            LayoutSpec::fullscreen(),
        ))
        .with_element(ElementPlan::textured(
            "unit_card",
            ResourceKey::new("field_card", 19),
            LayoutSpec::from_design_px(card_center, card_size, design),
        ))
        .with_element(ElementPlan::textured(
            "unit_weapon",
            ResourceKey::new("sword_power", 40),
            LayoutSpec::from_design_px(
                weapon_center,
                Vec2::new(WEAPON_WIDTH_PX, WEAPON_HEIGHT_PX),
                design,
            ),
        ))
        .with_element(ElementPlan::textured(
            "unit_hp",
            ResourceKey::new("hp", 1),
            LayoutSpec::from_design_px(hp_center, icon_size, design),
        ))
        .with_element(ElementPlan::textured(
            "unit_energy",
            ResourceKey::new("energy", 1),
            LayoutSpec::from_design_px(energy_center, icon_size, design),
        ))
        .with_element(ElementPlan::textured(
            "unit_race",
            ResourceKey::new("race", 2),
            LayoutSpec::from_design_px(race_center, icon_size, design),
        ))
        .with_element(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{self, Viewport};

    #[test]
    fn test_weapon_is_anchored_to_card_corner() {
        let plan = plan();
        let viewport = Viewport::new(DESIGN_WIDTH, DESIGN_HEIGHT);

        let card = plan
            .elements
            .iter()
            .find(|e| e.slug == "unit_card")
            .expect("Karte geplant");
        let weapon = plan
            .elements
            .iter()
            .find(|e| e.slug == "unit_weapon")
            .expect("Waffe geplant");

        let card_geo = layout::resolve(&card.layout, viewport);
        let weapon_geo = layout::resolve(&weapon.layout, viewport);

        // Rechte untere Ecke: x rechts vom Kartenzentrum, y darunter
        // (Kamera-y zeigt nach oben)
        assert!(weapon_geo.position.x > card_geo.position.x);
        assert!(weapon_geo.position.y < card_geo.position.y);
        let dx = weapon_geo.position.x - card_geo.position.x;
        assert!((dx - (CARD_WIDTH_PX / 2.0 - 8.0)).abs() < 1e-3);
    }

    #[test]
    fn test_battle_field_elements_complete() {
        let plan = plan();
        let slugs: Vec<_> = plan.elements.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "background",
                "unit_card",
                "unit_weapon",
                "unit_hp",
                "unit_energy",
                "unit_race",
                "lobby_hotspot"
            ]
        );
    }
}
