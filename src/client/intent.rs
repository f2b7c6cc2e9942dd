//! Eingangs-Ereignisse des Clients.
//!
//! Alles, was von außen (Host-Fenster, Eingabegeräte, Frame-Timer)
//! hereinkommt, wird als [`ClientIntent`] formuliert und zentral in
//! `SceneClient::handle_intent` verarbeitet. Die Gegenseite — was als
//! Reaktion auf einen Klick passiert — steckt in
//! [`crate::input::RegionAction`].

use glam::Vec2;

/// Ein Ereignis von außen, das der Client verarbeiten soll.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientIntent {
    /// Programmatische Navigation zu einem Pfad
    NavigateRequested { path: String },
    /// Historien-Schritt zurück (No-op am Anfang der Historie)
    HistoryBackRequested,
    /// Historien-Schritt vor (No-op am Ende der Historie)
    HistoryForwardRequested,
    /// Pointer-Klick in Fensterkoordinaten (Ursprung oben links)
    PointerClicked { position: Vec2 },
    /// Das Host-Fenster hat seine Größe geändert
    ViewportResized { width: f32, height: f32 },
    /// Ein Frame-Tick des Hosts
    FrameTicked,
}
