//! Resource-Layer: keyed Texture-Cache mit asynchronem Laden.
//!
//! Aufgeteilt in:
//! - `key` — `ResourceKey` (Kategorie + Id) als Cache-Schlüssel
//! - `texture` — dekodierte Bilddaten als Cache-Payload
//! - `manifest` — JSON-Manifest mit `{id}`-Pfad-Templates
//! - `loader` — Loader-Trait plus Datei- und In-Memory-Implementierung
//! - `cache` — der eigentliche Cache mit Pending/Ready/Failed-Einträgen

pub mod cache;
pub mod key;
pub mod loader;
pub mod manifest;
pub mod texture;

pub use cache::{PreloadTicket, TextureCache, TexturePromise, TextureState};
pub use key::ResourceKey;
pub use loader::{FileTextureLoader, MemoryTextureLoader, TextureLoader};
pub use manifest::{CategoryManifest, ResourceManifest};
pub use texture::Texture;
