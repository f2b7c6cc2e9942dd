//! Audio als externer Kollaborateur.
//!
//! Die Runtime hängt nur am schmalen `play(track)`-Vertrag; Dekodierung
//! und Ausgabe liegen beim Host.

/// Abspiel-Senke für View-Musik.
pub trait AudioSink {
    /// Spielt einen Track ab (z.B. beim Aktivieren eines Views).
    fn play(&mut self, track: &str);
}

/// Stumme Senke für Tests und Headless-Betrieb.
///
/// Merkt sich die angeforderten Tracks, spielt aber nichts ab.
#[derive(Debug, Default)]
pub struct NullAudio {
    played: Vec<String>,
}

impl NullAudio {
    /// Erstellt eine stumme Senke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bisher angeforderte Tracks in Aufrufreihenfolge.
    pub fn played_tracks(&self) -> &[String] {
        &self.played
    }
}

impl AudioSink for NullAudio {
    fn play(&mut self, track: &str) {
        log::debug!("Audio (stumm): '{}'", track);
        self.played.push(track.to_string());
    }
}
