//! Keyed Texture-Cache mit Pending/Ready/Failed-Einträgen.
//!
//! Der Cache ist prozessweiter, single-threaded Zustand: Einträge werden
//! beim ersten `request` angelegt und nie entfernt. Geschrieben wird ein
//! Eintrag ausschließlich im `pump`-Abschlusspfad — Views und andere
//! Konsumenten sehen Loads nur über das geteilte `TexturePromise`.
//!
//! Failed-Einträge werden beim nächsten `request` erneut angestoßen:
//! ein als "gecacht" maskierter alter Fehler würde späte Aufrufer
//! dauerhaft brechen.

use super::loader::TextureLoader;
use super::{ResourceKey, ResourceManifest, Texture};
use crate::error::RuntimeError;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Beobachtbarer Zustand eines Cache-Eintrags.
#[derive(Debug, Clone)]
pub enum TextureState {
    /// Load ist angefordert, aber noch nicht abgeschlossen
    Pending,
    /// Texture ist geladen; alle Promises desselben Keys teilen dieses `Arc`
    Ready(Arc<Texture>),
    /// Load ist fehlgeschlagen (flachgemachte Fehlerkette)
    Failed(String),
}

/// Geteilte Sicht auf einen Cache-Eintrag.
///
/// Alle `request`-Aufrufer desselben Keys erhalten Promises auf dieselbe
/// Zelle; der Abschluss eines Loads löst damit sämtliche Warter auf
/// einmal auf. Konsumenten pollen den Zustand im Frame-Tick und prüfen
/// vor dem Verbauen die Liveness ihres Views.
#[derive(Debug, Clone)]
pub struct TexturePromise {
    key: ResourceKey,
    slot: Rc<RefCell<TextureState>>,
}

impl TexturePromise {
    /// Key, auf den dieses Promise wartet.
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// Aktueller Zustand (Snapshot).
    pub fn state(&self) -> TextureState {
        self.slot.borrow().clone()
    }

    /// Gibt die Texture zurück, falls der Load abgeschlossen ist.
    pub fn ready(&self) -> Option<Arc<Texture>> {
        match &*self.slot.borrow() {
            TextureState::Ready(texture) => Some(Arc::clone(texture)),
            _ => None,
        }
    }

    /// Gibt den Fehler zurück, falls der Load fehlgeschlagen ist.
    /// Trägt den Key, damit der Aufrufer das betroffene Element kennt.
    pub fn error(&self) -> Option<RuntimeError> {
        match &*self.slot.borrow() {
            TextureState::Failed(reason) => Some(RuntimeError::TextureLoad {
                key: self.key.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        }
    }

    /// Ob der Load abgeschlossen ist (erfolgreich oder nicht).
    pub fn is_settled(&self) -> bool {
        !matches!(&*self.slot.borrow(), TextureState::Pending)
    }
}

/// Sammel-Promise eines `preload`-Aufrufs.
///
/// Gilt als abgeschlossen, sobald jeder Eintrag abgeschlossen ist;
/// einzelne Fehlschläge brechen die Geschwister nicht ab.
#[derive(Debug, Default)]
pub struct PreloadTicket {
    promises: Vec<TexturePromise>,
}

impl PreloadTicket {
    /// Anzahl angeforderter Keys.
    pub fn total(&self) -> usize {
        self.promises.len()
    }

    /// Ob alle Einträge abgeschlossen sind (Ready oder Failed).
    pub fn is_settled(&self) -> bool {
        self.promises.iter().all(TexturePromise::is_settled)
    }

    /// Anzahl erfolgreich geladener Einträge.
    pub fn ready_count(&self) -> usize {
        self.promises
            .iter()
            .filter(|p| p.ready().is_some())
            .count()
    }

    /// Fehler der fehlgeschlagenen Einträge.
    pub fn failures(&self) -> Vec<RuntimeError> {
        self.promises
            .iter()
            .filter_map(TexturePromise::error)
            .collect()
    }
}

/// Cache-Eintrag: geteilte Zustandszelle plus Queue-Flag.
struct CacheEntry {
    /// Von allen Promises dieses Keys geteilte Zelle
    slot: Rc<RefCell<TextureState>>,
    /// Ob der Key gerade in der Load-Queue steht
    queued: bool,
}

/// Prozessweiter Texture-Cache.
///
/// Garantiert höchstens einen laufenden Load pro Key und synchrone
/// Wiederverwendung, sobald ein Eintrag Ready ist.
pub struct TextureCache {
    manifest: ResourceManifest,
    entries: HashMap<ResourceKey, CacheEntry>,
    load_queue: VecDeque<ResourceKey>,
    completed_loads: u64,
}

impl TextureCache {
    /// Erstellt einen Cache über dem gegebenen Manifest.
    pub fn new(manifest: ResourceManifest) -> Self {
        Self {
            manifest,
            entries: HashMap::new(),
            load_queue: VecDeque::new(),
            completed_loads: 0,
        }
    }

    /// Fordert eine Texture an.
    ///
    /// - Ready → Promise löst sofort auf (kein I/O)
    /// - Pending → Promise hängt sich an den laufenden Load
    /// - Failed → Eintrag wird auf Pending zurückgesetzt und neu eingeplant
    /// - unbekannt → Pending-Eintrag + genau ein Load wird eingeplant
    pub fn request(&mut self, key: &ResourceKey) -> TexturePromise {
        if let Some(entry) = self.entries.get_mut(key) {
            let retry = matches!(&*entry.slot.borrow(), TextureState::Failed(_));
            if retry {
                log::warn!("Erneuter Load-Versuch für zuvor fehlgeschlagenen Key {}", key);
                *entry.slot.borrow_mut() = TextureState::Pending;
                if !entry.queued {
                    entry.queued = true;
                    self.load_queue.push_back(key.clone());
                }
            }
            return TexturePromise {
                key: key.clone(),
                slot: Rc::clone(&entry.slot),
            };
        }

        let slot = Rc::new(RefCell::new(TextureState::Pending));
        self.entries.insert(
            key.clone(),
            CacheEntry {
                slot: Rc::clone(&slot),
                queued: true,
            },
        );
        self.load_queue.push_back(key.clone());
        log::debug!("Load eingeplant für Key {}", key);

        TexturePromise {
            key: key.clone(),
            slot,
        }
    }

    /// Fordert alle Manifest-Einträge an.
    ///
    /// Das Ticket ist abgeschlossen, sobald jeder Key Ready oder Failed
    /// ist; ein Fehlschlag bricht die übrigen Loads nicht ab.
    pub fn preload(&mut self) -> PreloadTicket {
        let keys = self.manifest.all_keys();
        log::info!("Preload: {} Manifest-Einträge angefordert", keys.len());
        PreloadTicket {
            promises: keys.iter().map(|key| self.request(key)).collect(),
        }
    }

    /// Arbeitet bis zu `budget` eingeplante Loads ab.
    ///
    /// Einziger Ort, an dem Cache-Einträge geschrieben werden. Wird vom
    /// Host einmal pro Frame-Tick aufgerufen; Abschlüsse werden dadurch
    /// kooperativ in den Tick eingereiht statt nebenläufig zu mutieren.
    ///
    /// Gibt die Anzahl abgearbeiteter Loads zurück.
    pub fn pump(&mut self, loader: &mut dyn TextureLoader, budget: usize) -> usize {
        let mut processed = 0;

        while processed < budget {
            let Some(key) = self.load_queue.pop_front() else {
                break;
            };
            processed += 1;

            let outcome = match self.manifest.resolve_path(&key) {
                Ok(path) => loader.load(&key, &path),
                Err(manifest_err) => Err(anyhow::Error::new(manifest_err)),
            };

            let entry = self
                .entries
                .get_mut(&key)
                .unwrap_or_else(|| panic!("Load-Queue enthält Key {} ohne Cache-Eintrag", key));
            entry.queued = false;

            match outcome {
                Ok(texture) => {
                    self.completed_loads += 1;
                    *entry.slot.borrow_mut() = TextureState::Ready(Arc::new(texture));
                }
                Err(err) => {
                    let reason = format!("{:#}", err);
                    log::warn!("Load für Key {} fehlgeschlagen: {}", key, reason);
                    *entry.slot.borrow_mut() = TextureState::Failed(reason);
                }
            }
        }

        processed
    }

    /// Anzahl noch eingeplanter Loads.
    pub fn queued_loads(&self) -> usize {
        self.load_queue.len()
    }

    /// Anzahl insgesamt erfolgreich abgeschlossener Loads.
    pub fn completed_loads(&self) -> u64 {
        self.completed_loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryTextureLoader;

    fn test_cache() -> TextureCache {
        let manifest = ResourceManifest::from_json(
            r#"{
                "shop_buttons": { "path": "shop/buttons/{id}.png", "ids": [1, 2, 3] },
                "shop_background": { "path": "background/shop_{id}.png", "ids": [1] }
            }"#,
        )
        .expect("Test-Manifest parsbar");
        TextureCache::new(manifest)
    }

    #[test]
    fn test_double_request_issues_single_load_with_identical_payload() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        let key = ResourceKey::new("shop_buttons", 1);

        let first = cache.request(&key);
        let second = cache.request(&key);
        cache.pump(&mut loader, usize::MAX);

        // Genau ein unterliegender Load ...
        assert_eq!(loader.load_count(), 1);
        // ... und beide Promises sehen dasselbe Payload (Referenzgleichheit)
        let a = first.ready().expect("erstes Promise Ready");
        let b = second.ready().expect("zweites Promise Ready");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_ready_entry_resolves_without_new_io() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        let key = ResourceKey::new("shop_buttons", 2);

        cache.request(&key);
        cache.pump(&mut loader, usize::MAX);
        assert_eq!(loader.load_count(), 1);

        // Späterer Request: Cache-Hit, keine weitere Queue-Arbeit
        let late = cache.request(&key);
        assert!(late.ready().is_some());
        assert_eq!(cache.queued_loads(), 0);
        cache.pump(&mut loader, usize::MAX);
        assert_eq!(loader.load_count(), 1);
    }

    #[test]
    fn test_failed_entry_is_retried_on_next_request() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        loader.fail_path("shop/buttons/3.png");
        let key = ResourceKey::new("shop_buttons", 3);

        let promise = cache.request(&key);
        cache.pump(&mut loader, usize::MAX);
        let err = promise.error().expect("Load muss fehlschlagen");
        assert!(matches!(err, RuntimeError::TextureLoad { .. }));
        assert!(err.to_string().contains("shop_buttons:3"));

        // Nächster Request plant den Load neu ein — kein maskierter Altfehler
        let mut healed_loader = MemoryTextureLoader::new();
        let retry = cache.request(&key);
        assert!(!retry.is_settled());
        cache.pump(&mut healed_loader, usize::MAX);
        assert!(retry.ready().is_some());
    }

    #[test]
    fn test_retry_while_queued_does_not_duplicate_load() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        loader.fail_path("shop/buttons/3.png");
        let key = ResourceKey::new("shop_buttons", 3);

        cache.request(&key);
        cache.pump(&mut loader, usize::MAX);

        // Zwei Requests nach dem Fehlschlag → trotzdem nur ein neuer Load
        cache.request(&key);
        cache.request(&key);
        assert_eq!(cache.queued_loads(), 1);
    }

    #[test]
    fn test_preload_settles_despite_single_failure() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        loader.fail_path("shop/buttons/2.png");

        let ticket = cache.preload();
        assert_eq!(ticket.total(), 4);
        assert!(!ticket.is_settled());

        cache.pump(&mut loader, usize::MAX);

        assert!(ticket.is_settled());
        assert_eq!(ticket.ready_count(), 3);
        let failures = ticket.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].to_string().contains("shop_buttons:2"));
    }

    #[test]
    fn test_pump_respects_frame_budget() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();
        cache.preload();

        assert_eq!(cache.pump(&mut loader, 2), 2);
        assert_eq!(cache.queued_loads(), 2);
        assert_eq!(cache.pump(&mut loader, 2), 2);
        assert_eq!(cache.pump(&mut loader, 2), 0);
    }

    #[test]
    fn test_unknown_category_fails_via_manifest() {
        let mut cache = test_cache();
        let mut loader = MemoryTextureLoader::new();

        let promise = cache.request(&ResourceKey::new("nirgendwo", 7));
        cache.pump(&mut loader, usize::MAX);

        let err = promise.error().expect("Manifest-Miss muss als Failed enden");
        assert!(err.to_string().contains("nirgendwo"));
        // Der Loader wurde gar nicht erst gefragt
        assert_eq!(loader.load_count(), 0);
    }
}
