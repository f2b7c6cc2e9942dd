//! Resource-Manifest: Kategorie → Pfad-Template + Id-Liste.
//!
//! Das Manifest ist eine JSON-Datei der Form
//!
//! ```json
//! {
//!     "shop_buttons": { "path": "resource/shop/buttons/{id}.png", "ids": [1, 2, 3, 4] },
//!     "shop_background": { "path": "resource/background/shop_{id}.png", "ids": [1] }
//! }
//! ```
//!
//! Pfad-Templates unterstützen genau einen `{id}`-Platzhalter, der pro
//! Instanz substituiert wird (Kartenbilder, Waffen-Icons usw.).

use super::ResourceKey;
use crate::error::RuntimeError;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Platzhalter im Pfad-Template.
const ID_PLACEHOLDER: &str = "{id}";

/// Manifest-Eintrag einer Kategorie.
///
/// Die ladbaren Ids werden entweder explizit (`ids`) oder als
/// lückenloser Bereich `1..=count` angegeben; explizite Ids gewinnen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryManifest {
    /// Pfad-Template, optional mit `{id}`-Platzhalter
    pub path: String,
    /// Ids, die beim `preload` geladen werden
    #[serde(default)]
    pub ids: Vec<u32>,
    /// Alternative zu `ids`: Anzahl fortlaufender Ids ab 1
    #[serde(default)]
    pub count: Option<u32>,
}

impl CategoryManifest {
    /// Effektive Ids der Kategorie.
    pub fn effective_ids(&self) -> Vec<u32> {
        if !self.ids.is_empty() {
            self.ids.clone()
        } else {
            (1..=self.count.unwrap_or(0)).collect()
        }
    }
}

/// Geparstes Resource-Manifest.
///
/// Die Kategorien behalten ihre Dateireihenfolge, damit `preload`
/// deterministisch lädt.
#[derive(Debug, Clone, Default)]
pub struct ResourceManifest {
    categories: IndexMap<String, CategoryManifest>,
}

impl ResourceManifest {
    /// Erstellt ein leeres Manifest (nur für Hosts, die Kategorien
    /// programmatisch registrieren).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parst ein Manifest aus einem JSON-String.
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: IndexMap<String, CategoryManifest> =
            serde_json::from_str(json).context("Resource-Manifest ist kein gültiges JSON")?;
        Ok(Self { categories })
    }

    /// Lädt ein Manifest aus einer Datei.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Manifest nicht gefunden: {}", path))?;
        Self::from_json(&json)
            .with_context(|| format!("Manifest nicht parsbar: {}", path))
    }

    /// Registriert eine Kategorie programmatisch.
    /// Ersetzt einen bestehenden Eintrag gleichen Namens.
    pub fn register_category(&mut self, name: impl Into<String>, entry: CategoryManifest) {
        self.categories.insert(name.into(), entry);
    }

    /// Anzahl registrierter Kategorien.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Löst den Dateipfad für einen Key auf (substituiert `{id}`).
    pub fn resolve_path(&self, key: &ResourceKey) -> Result<String, RuntimeError> {
        let entry = self.categories.get(&key.category).ok_or_else(|| {
            RuntimeError::ManifestRead(format!(
                "Kategorie '{}' ist nicht im Manifest registriert",
                key.category
            ))
        })?;
        Ok(entry.path.replace(ID_PLACEHOLDER, &key.id.to_string()))
    }

    /// Alle Keys des Manifests in Dateireihenfolge (für `preload`).
    pub fn all_keys(&self) -> Vec<ResourceKey> {
        self.categories
            .iter()
            .flat_map(|(category, entry)| {
                entry
                    .effective_ids()
                    .into_iter()
                    .map(|id| ResourceKey::new(category.clone(), id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> ResourceManifest {
        ResourceManifest::from_json(
            r#"{
                "shop_buttons": { "path": "resource/shop/buttons/{id}.png", "ids": [1, 2, 3] },
                "shop_background": { "path": "resource/background/shop_{id}.png", "ids": [1] }
            }"#,
        )
        .expect("Beispiel-Manifest sollte parsbar sein")
    }

    #[test]
    fn test_resolve_path_substitutes_id() {
        let manifest = sample_manifest();
        let path = manifest
            .resolve_path(&ResourceKey::new("shop_buttons", 2))
            .expect("Kategorie ist registriert");
        assert_eq!(path, "resource/shop/buttons/2.png");
    }

    #[test]
    fn test_resolve_path_unknown_category_fails() {
        let manifest = sample_manifest();
        let err = manifest
            .resolve_path(&ResourceKey::new("unbekannt", 1))
            .expect_err("Unbekannte Kategorie muss fehlschlagen");
        assert!(matches!(err, RuntimeError::ManifestRead(_)));
    }

    #[test]
    fn test_all_keys_preserve_manifest_order() {
        let manifest = sample_manifest();
        let keys = manifest.all_keys();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[0], ResourceKey::new("shop_buttons", 1));
        assert_eq!(keys[3], ResourceKey::new("shop_background", 1));
    }

    #[test]
    fn test_count_expands_to_consecutive_ids() {
        let manifest = ResourceManifest::from_json(
            r#"{ "deck_cards": { "path": "deck/{id}.png", "count": 3 } }"#,
        )
        .expect("Manifest mit count sollte parsbar sein");

        let keys = manifest.all_keys();
        assert_eq!(
            keys,
            vec![
                ResourceKey::new("deck_cards", 1),
                ResourceKey::new("deck_cards", 2),
                ResourceKey::new("deck_cards", 3)
            ]
        );
    }

    #[test]
    fn test_explicit_ids_win_over_count() {
        let manifest = ResourceManifest::from_json(
            r#"{ "hp": { "path": "hp/{id}.png", "ids": [7], "count": 3 } }"#,
        )
        .expect("Manifest sollte parsbar sein");
        assert_eq!(manifest.all_keys(), vec![ResourceKey::new("hp", 7)]);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(ResourceManifest::from_json("{ kaputt").is_err());
    }
}
