//! `ResourceKey` — Schlüssel für ladbare Texturen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eindeutiger Schlüssel einer ladbaren Texture.
///
/// Kategorien sind disjunkte Namespaces (z.B. `shop_buttons`,
/// `shop_background`); innerhalb einer Kategorie identifiziert die `id`
/// genau eine Bilddatei. Ein Key löst für die Lebensdauer des Prozesses
/// zu genau einer gecachten Texture auf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Kategorie-Namespace
    pub category: String,
    /// Id innerhalb der Kategorie
    pub id: u32,
}

impl ResourceKey {
    /// Erstellt einen neuen Key.
    pub fn new(category: impl Into<String>, id: u32) -> Self {
        Self {
            category: category.into(),
            id,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_with_same_fields_are_equal() {
        let a = ResourceKey::new("shop_buttons", 3);
        let b = ResourceKey::new("shop_buttons", 3);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_categories_are_disjoint_namespaces() {
        // Gleiche Id, andere Kategorie → anderer Key
        let buttons = ResourceKey::new("shop_buttons", 1);
        let background = ResourceKey::new("shop_background", 1);
        assert_ne!(buttons, background);
    }

    #[test]
    fn test_display_format() {
        let key = ResourceKey::new("hp", 40);
        assert_eq!(key.to_string(), "hp:40");
    }
}
