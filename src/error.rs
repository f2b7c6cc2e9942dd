//! Erwartbare Laufzeit-Fehler des Clients.
//!
//! Hier landet nur, was im Betrieb tatsächlich passieren kann
//! (fehlende Dateien, kaputte Manifeste, unbekannte Routen).
//! Programmierfehler — doppeltes `dispose`, `hide()` vor dem ersten
//! `show()` — sind keine Fehlerwerte, sondern Panics.

use thiserror::Error;

use crate::resource::ResourceKey;

/// Erwartbarer Fehler der Client-Runtime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// Eine Texture konnte nicht geladen oder dekodiert werden.
    #[error("Texture-Load fehlgeschlagen für {key}: {reason}")]
    TextureLoad {
        /// Der angefragte Cache-Key
        key: ResourceKey,
        /// Loader-Begründung (Datei fehlt, Dekodierfehler, ...)
        reason: String,
    },

    /// Das Resource-Manifest ist unbrauchbar (fehlende Kategorie,
    /// kaputtes Pfad-Template).
    #[error("Manifest-Fehler: {0}")]
    ManifestRead(String),

    /// Für den Pfad ist keine Route registriert (und die
    /// Default-Umleitung greift nicht).
    #[error("Keine Route für Pfad '{path}' registriert")]
    RouteNotFound {
        /// Der angefragte Pfad
        path: String,
    },
}
