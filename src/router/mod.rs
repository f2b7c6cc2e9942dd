//! Client-seitiger Router: bildet Pfade auf View-Namen ab.
//!
//! Der Router kennt nur Namen, keine View-Objekte — die eigentlichen
//! Lifecycle-Aufrufe macht der Client anhand des zurückgegebenen
//! [`ViewSwitch`]. Unbekannte Pfade werden auf die Default-Route
//! umgeleitet; ist die Default-Route selbst nicht registriert, wird
//! der Fehler geloggt und die Navigation verworfen statt zu schleifen.
//! Routing-Fehler verlassen den Router nie — Aufrufer sehen höchstens
//! "kein Wechsel nötig".

pub mod history;

use indexmap::IndexMap;

use crate::error::RuntimeError;
pub use history::MemoryHistory;

/// Ergebnis einer Navigation: welcher View geht, welcher kommt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSwitch {
    /// Zu verbergender View (None beim allerersten Routing)
    pub hide: Option<String>,
    /// Anzuzeigender View
    pub show: String,
}

/// Pfad-zu-View-Tabelle mit aktivem Pfad.
pub struct Router {
    /// Registrierungs-Reihenfolge bleibt erhalten (Debug-Ausgaben)
    routes: IndexMap<String, String>,
    default_path: String,
    active: Option<String>,
}

impl Router {
    pub fn new(default_path: impl Into<String>) -> Self {
        Self {
            routes: IndexMap::new(),
            default_path: default_path.into(),
            active: None,
        }
    }

    /// Registriert eine Route.
    ///
    /// Routen sind nach der Registrierung unveränderlich; eine zweite
    /// Registrierung desselben Pfads ist ein Programmierfehler und
    /// panikt.
    pub fn register(&mut self, path: impl Into<String>, view: impl Into<String>) {
        let path = path.into();
        let view = view.into();
        assert!(
            !self.routes.contains_key(&path),
            "Route '{}' ist bereits registriert",
            path
        );
        log::debug!("Route '{}' → View '{}' registriert", path, view);
        self.routes.insert(path, view);
    }

    /// Registriert mehrere Routen auf einmal.
    pub fn register_routes<P, V>(&mut self, routes: impl IntoIterator<Item = (P, V)>)
    where
        P: Into<String>,
        V: Into<String>,
    {
        for (path, view) in routes {
            self.register(path, view);
        }
    }

    /// View-Name für einen Pfad, ohne Umleitung.
    pub fn route_for(&self, path: &str) -> Result<&str, RuntimeError> {
        self.routes
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| RuntimeError::RouteNotFound {
                path: path.to_string(),
            })
    }

    /// Aktuell aktiver Pfad.
    pub fn active_path(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Default-Pfad des Clients.
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Navigiert zu `path`: legt den aufgelösten Pfad in der Historie
    /// ab und liefert den nötigen View-Wechsel.
    ///
    /// `None` heißt: nichts zu tun — der Pfad ist bereits aktiv (kein
    /// Historien-Eintrag), oder die Navigation war nicht auflösbar und
    /// wurde geloggt und verworfen.
    pub fn navigate(&mut self, history: &mut MemoryHistory, path: &str) -> Option<ViewSwitch> {
        let (resolved, view) = self.resolve_or_log(path)?;
        if self.active.as_deref() == Some(resolved.as_str()) {
            log::debug!("Pfad '{}' ist bereits aktiv", resolved);
            return None;
        }
        history.push(resolved.clone());
        Some(self.switch_to(resolved, view))
    }

    /// Reagiert auf eine Cursor-Bewegung der Historie (back/forward).
    ///
    /// Legt keinen neuen Historien-Eintrag ab; der Pfad stammt aus der
    /// Historie und ist dort bereits aufgelöst abgelegt worden.
    pub fn handle_location_change(&mut self, path: &str) -> Option<ViewSwitch> {
        let (resolved, view) = self.resolve_or_log(path)?;
        if self.active.as_deref() == Some(resolved.as_str()) {
            return None;
        }
        Some(self.switch_to(resolved, view))
    }

    /// Routing-Fehler werden hier konsumiert: loggen, verwerfen.
    fn resolve_or_log(&self, path: &str) -> Option<(String, String)> {
        match self.resolve(path) {
            Ok(hit) => Some(hit),
            Err(err) => {
                log::error!("Navigation zu '{}' verworfen: {}", path, err);
                None
            }
        }
    }

    /// Löst einen Pfad auf, mit einmaliger Umleitung auf die
    /// Default-Route bei unbekannten Pfaden.
    fn resolve(&self, path: &str) -> Result<(String, String), RuntimeError> {
        if let Some(view) = self.routes.get(path) {
            return Ok((path.to_string(), view.clone()));
        }
        if path == self.default_path {
            // Schleifen-Wächter: die Default-Route selbst fehlt
            return Err(RuntimeError::RouteNotFound {
                path: path.to_string(),
            });
        }
        log::error!(
            "Unbekannter Pfad '{}', Umleitung auf '{}'",
            path,
            self.default_path
        );
        match self.routes.get(&self.default_path) {
            Some(view) => Ok((self.default_path.clone(), view.clone())),
            None => Err(RuntimeError::RouteNotFound {
                path: self.default_path.clone(),
            }),
        }
    }

    fn switch_to(&mut self, path: String, view: String) -> ViewSwitch {
        let hide = match self.active.replace(path) {
            Some(previous) => self
                .routes
                .get(&previous)
                .cloned()
                .or_else(|| {
                    log::warn!("Aktiver Pfad '{}' hat keine Route mehr", previous);
                    None
                }),
            None => None,
        };
        log::info!(
            "Routing: {} → View '{}'",
            self.active.as_deref().unwrap_or("?"),
            view
        );
        ViewSwitch { hide, show: view }
    }
}
