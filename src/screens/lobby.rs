//! Die Haupt-Lobby: Einstiegs-Screen mit Navigation zu den anderen
//! Screens.

use glam::Vec2;

use crate::input::RegionAction;
use crate::layout::LayoutSpec;
use crate::resource::ResourceKey;
use crate::view::{ElementPlan, ViewPlan};

use super::{BATTLE_FIELD_PATH, MY_DECK_PATH, SHOP_PATH};

/// Hintergrundmusik der Lobby.
pub const LOBBY_MUSIC: &str = "lobby/main-menu";

/// Baut den Lobby-Plan: Hintergrund plus eine Button-Spalte links.
pub fn plan() -> ViewPlan {
    ViewPlan::new("lobby")
        .with_music(LOBBY_MUSIC)
        .with_element(ElementPlan::textured(
            "background",
            ResourceKey::new("lobby_background", 1),
            LayoutSpec::fullscreen(),
        ))
        .with_element(button("button_shop", 1, 0.35, SHOP_PATH))
        .with_element(button("button_my_deck", 2, 0.5, MY_DECK_PATH))
        .with_element(button("button_battle_field", 3, 0.65, BATTLE_FIELD_PATH))
}

fn button(slug: &str, texture_id: u32, y_percent: f32, target: &str) -> ElementPlan {
    ElementPlan::textured(
        slug,
        ResourceKey::new("lobby_buttons", texture_id),
        LayoutSpec::new(Vec2::new(0.2, y_percent), 0.15625, 0.0926),
    )
    .with_action(RegionAction::Navigate {
        path: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lobby_plan_links_all_screens() {
        let plan = plan();
        assert_eq!(plan.name, "lobby");

        let targets: Vec<_> = plan
            .elements
            .iter()
            .filter_map(|e| match &e.action {
                Some(RegionAction::Navigate { path }) => Some(path.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec![SHOP_PATH, MY_DECK_PATH, BATTLE_FIELD_PATH]);
    }
}
