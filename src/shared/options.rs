//! Zentrale Konfiguration des TCG-Scene-Clients.
//!
//! `RuntimeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Design-Space ────────────────────────────────────────────────────

/// Referenz-Breite des Design-Space in Pixeln. Layouts werden als
/// Prozent dieser Auflösung verfasst und zur Laufzeit auf den
/// tatsächlichen Viewport umgerechnet.
pub const DESIGN_WIDTH: f32 = 1920.0;
/// Referenz-Höhe des Design-Space in Pixeln.
pub const DESIGN_HEIGHT: f32 = 1080.0;

// ── Resource-Loading ────────────────────────────────────────────────

/// Maximale Anzahl Texture-Loads, die pro Frame-Tick abgearbeitet
/// werden. Hält den kooperativen Single-Thread-Tick kurz.
pub const LOADS_PER_FRAME: usize = 8;

// ── Routing ─────────────────────────────────────────────────────────

/// Default-Pfad, auf den bei unbekannten Routen umgeleitet wird.
pub const DEFAULT_ROUTE: &str = "/tcg-main-lobby";

/// Laufzeit-Optionen des Clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeOptions {
    /// Design-Space-Auflösung [Breite, Höhe] in Pixeln
    pub design_size: [f32; 2],
    /// Default-Pfad für Redirects bei unbekannten Routen
    pub default_path: String,
    /// Texture-Loads pro Frame-Tick
    pub loads_per_frame: usize,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            design_size: [DESIGN_WIDTH, DESIGN_HEIGHT],
            default_path: DEFAULT_ROUTE.to_string(),
            loads_per_frame: LOADS_PER_FRAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_consts() {
        let options = RuntimeOptions::default();
        assert_eq!(options.design_size, [DESIGN_WIDTH, DESIGN_HEIGHT]);
        assert_eq!(options.default_path, DEFAULT_ROUTE);
        assert_eq!(options.loads_per_frame, LOADS_PER_FRAME);
    }

    #[test]
    fn test_options_roundtrip_json() {
        let options = RuntimeOptions::default();
        let json = serde_json::to_string(&options).expect("Serialisierung sollte klappen");
        let back: RuntimeOptions =
            serde_json::from_str(&json).expect("Deserialisierung sollte klappen");
        assert_eq!(back.default_path, options.default_path);
    }
}
