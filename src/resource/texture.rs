//! Dekodierte Texture als Cache-Payload.

use super::ResourceKey;
use image::{DynamicImage, RgbaImage};

/// Eine fertig dekodierte Texture.
///
/// Die Runtime behandelt die Grafik-API als opake Zeichenfläche; hier
/// liegen nur die CPU-seitigen RGBA-Daten, die eine Surface-Implementierung
/// bei Bedarf hochlädt.
#[derive(Debug, Clone)]
pub struct Texture {
    /// Key, unter dem die Texture gecacht ist
    key: ResourceKey,
    /// Bilddaten (zu RGBA8 konvertiert)
    rgba: RgbaImage,
}

impl Texture {
    /// Erstellt eine Texture aus einem dekodierten Bild.
    /// Konvertiert wie üblich zu RGBA8.
    pub fn from_image(key: ResourceKey, image: DynamicImage) -> Self {
        Self {
            key,
            rgba: image.to_rgba8(),
        }
    }

    /// Gibt den Cache-Key zurück.
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Breite in Pixeln.
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Höhe in Pixeln.
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Roh-Zugriff auf die RGBA-Daten (für Surface-Uploads).
    pub fn rgba(&self) -> &RgbaImage {
        &self.rgba
    }
}
