//! Die konkreten Screens des TCG-Clients als View-Pläne.
//!
//! Jeder Screen ist eine Funktion, die einen [`ViewPlan`] baut —
//! reines Daten-Wiring, keine eigene Logik. `install` registriert
//! alle Screens samt Routen an einem Client.

pub mod battle_field;
pub mod lobby;
pub mod my_deck;
pub mod shop;

use crate::audio::AudioSink;
use crate::client::SceneClient;
use crate::render::DrawSurface;
use crate::resource::TextureLoader;
use crate::view::ViewPlan;

/// Pfad der Haupt-Lobby; zugleich Default-Route des Clients.
pub const LOBBY_PATH: &str = "/tcg-main-lobby";
/// Pfad des Karten-Shops.
pub const SHOP_PATH: &str = "/tcg-shop";
/// Pfad der Deck-Übersicht.
pub const MY_DECK_PATH: &str = "/tcg-my-deck";
/// Pfad des Schlachtfelds.
pub const BATTLE_FIELD_PATH: &str = "/tcg-battle-field";

/// Registriert alle Screens und ihre Routen am Client.
pub fn install<L, S, A>(client: &mut SceneClient<L, S, A>)
where
    L: TextureLoader,
    S: DrawSurface,
    A: AudioSink,
{
    for (path, plan) in [
        (LOBBY_PATH, lobby::plan()),
        (SHOP_PATH, shop::plan()),
        (MY_DECK_PATH, my_deck::plan()),
        (BATTLE_FIELD_PATH, battle_field::plan()),
    ] {
        register_screen(client, path, plan);
    }
}

fn register_screen<L, S, A>(client: &mut SceneClient<L, S, A>, path: &str, plan: ViewPlan)
where
    L: TextureLoader,
    S: DrawSurface,
    A: AudioSink,
{
    let name = plan.name.clone();
    client.register_view(plan);
    client.register_route(path, name);
}
