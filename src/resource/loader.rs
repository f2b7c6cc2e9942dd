//! Texture-Loader: I/O-Seite des Resource-Caches.
//!
//! Der Cache selbst macht kein I/O; er reicht Pfade an einen
//! `TextureLoader` weiter. Die Datei-Implementierung dekodiert über das
//! `image`-Crate, die In-Memory-Implementierung dient Tests und
//! Headless-Hosts.

use super::{ResourceKey, Texture};
use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::collections::{HashMap, HashSet};
use std::io::BufReader;
use std::path::PathBuf;

/// Lädt und dekodiert eine Texture für einen Key.
pub trait TextureLoader {
    /// Lädt die Bilddatei unter `path` und dekodiert sie.
    ///
    /// Wird ausschließlich vom Cache-Pump aufgerufen; pro Key ist zu
    /// jedem Zeitpunkt höchstens ein Load unterwegs.
    fn load(&mut self, key: &ResourceKey, path: &str) -> Result<Texture>;
}

/// Datei-basierter Loader relativ zu einem Resource-Root.
pub struct FileTextureLoader {
    /// Wurzelverzeichnis, gegen das Manifest-Pfade aufgelöst werden
    root: PathBuf,
}

impl FileTextureLoader {
    /// Erstellt einen Loader mit dem gegebenen Wurzelverzeichnis.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Dekodiert eine Bilddatei.
    ///
    /// Zuerst versuchen wir die Erkennung anhand der Dateiendung.
    /// Falls das fehlschlägt (z.B. .png-Datei die eigentlich JPEG ist),
    /// erkennen wir das Format anhand der Magic Bytes im Dateiinhalt.
    fn decode(path: &std::path::Path) -> Result<DynamicImage> {
        match image::open(path) {
            Ok(image) => Ok(image),
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    path.display(),
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", path.display()))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| {
                        format!("Format-Erkennung fehlgeschlagen für: {}", path.display())
                    })?;
                if let Some(fmt) = reader.format() {
                    log::info!(
                        "Tatsächliches Bildformat erkannt: {:?} für '{}'",
                        fmt,
                        path.display()
                    );
                }
                reader.decode().with_context(|| {
                    format!("Fehler beim Dekodieren der Texture: {}", path.display())
                })
            }
        }
    }
}

impl TextureLoader for FileTextureLoader {
    fn load(&mut self, key: &ResourceKey, path: &str) -> Result<Texture> {
        let full_path = self.root.join(path);
        let image = Self::decode(&full_path)
            .with_context(|| format!("Texture-Load für Key {} fehlgeschlagen", key))?;
        log::debug!(
            "Texture {} geladen: {}x{} Pixel aus '{}'",
            key,
            image.width(),
            image.height(),
            full_path.display()
        );
        Ok(Texture::from_image(key.clone(), image))
    }
}

/// In-Memory-Loader für Tests und Headless-Betrieb.
///
/// Liefert für jeden Pfad eine generierte Texture fester Größe, sofern
/// der Pfad nicht explizit als fehlschlagend markiert wurde. Registrierte
/// Bilder übersteuern die generierte Default-Texture.
#[derive(Default)]
pub struct MemoryTextureLoader {
    /// Explizit hinterlegte Bilder pro Pfad
    images: HashMap<String, DynamicImage>,
    /// Pfade, deren Load fehlschlagen soll
    failing: HashSet<String>,
    /// Alle bisher angefragten Pfade in Aufrufreihenfolge
    load_log: Vec<String>,
    /// Kantenlänge generierter Default-Texturen
    default_size: u32,
}

impl MemoryTextureLoader {
    /// Erstellt einen Loader, der 2x2-Texturen generiert.
    pub fn new() -> Self {
        Self {
            default_size: 2,
            ..Self::default()
        }
    }

    /// Hinterlegt ein konkretes Bild für einen Pfad.
    pub fn insert_image(&mut self, path: impl Into<String>, image: DynamicImage) {
        self.images.insert(path.into(), image);
    }

    /// Markiert einen Pfad als fehlschlagend.
    pub fn fail_path(&mut self, path: impl Into<String>) {
        self.failing.insert(path.into());
    }

    /// Anzahl tatsächlich ausgeführter Loads.
    pub fn load_count(&self) -> usize {
        self.load_log.len()
    }

    /// Bisher angefragte Pfade in Aufrufreihenfolge.
    pub fn load_log(&self) -> &[String] {
        &self.load_log
    }
}

impl TextureLoader for MemoryTextureLoader {
    fn load(&mut self, key: &ResourceKey, path: &str) -> Result<Texture> {
        self.load_log.push(path.to_string());

        if self.failing.contains(path) {
            anyhow::bail!("simulierter Load-Fehler für '{}'", path);
        }

        let image = self
            .images
            .get(path)
            .cloned()
            .unwrap_or_else(|| DynamicImage::new_rgba8(self.default_size, self.default_size));
        Ok(Texture::from_image(key.clone(), image))
    }
}
