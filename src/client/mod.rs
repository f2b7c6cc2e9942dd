//! Der Client-Shell: verdrahtet Cache, Surface, Regionen, Router und
//! Views zu einer lauffähigen Runtime.
//!
//! Alle Eingaben laufen als [`ClientIntent`] durch `handle_intent`;
//! der Host ruft zusätzlich einmal pro Tick [`SceneClient::frame`]
//! auf. Der Client ist single-threaded: Loads werden im Frame-Tick
//! abgearbeitet (`TextureCache::pump`), nie nebenläufig.

pub mod intent;

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;

use crate::audio::AudioSink;
use crate::input::{PointerEvent, RegionAction, RegionRegistry};
use crate::layout::{self, Viewport};
use crate::render::DrawSurface;
use crate::resource::{PreloadTicket, ResourceManifest, TextureCache, TextureLoader};
use crate::router::{MemoryHistory, Router, ViewSwitch};
use crate::shared::options::RuntimeOptions;
use crate::view::{SceneContext, View, ViewPlan};

pub use intent::ClientIntent;

/// Die zusammengesetzte Client-Runtime.
///
/// Generisch über Loader, Zeichenfläche und Audio-Senke; Tests stecken
/// hier die In-Memory-Implementierungen hinein, der echte Host seine
/// Backends.
pub struct SceneClient<L, S, A>
where
    L: TextureLoader,
    S: DrawSurface,
    A: AudioSink,
{
    options: RuntimeOptions,
    cache: TextureCache,
    loader: L,
    surface: S,
    audio: A,
    regions: RegionRegistry,
    router: Router,
    history: MemoryHistory,
    views: IndexMap<String, View>,
    viewport: Viewport,
    frames: u64,
}

impl<L, S, A> SceneClient<L, S, A>
where
    L: TextureLoader,
    S: DrawSurface,
    A: AudioSink,
{
    /// Baut den Client auf. Der Viewport startet in Design-Auflösung;
    /// der Host meldet die echte Größe per `ViewportResized` nach.
    pub fn new(
        options: RuntimeOptions,
        manifest: ResourceManifest,
        loader: L,
        mut surface: S,
        audio: A,
    ) -> Self {
        let viewport = Viewport::new(options.design_size[0], options.design_size[1]);
        surface.set_size(viewport);
        let router = Router::new(options.default_path.clone());
        Self {
            options,
            cache: TextureCache::new(manifest),
            loader,
            surface,
            audio,
            regions: RegionRegistry::new(),
            router,
            history: MemoryHistory::new(),
            views: IndexMap::new(),
            viewport,
            frames: 0,
        }
    }

    /// Registriert einen View unter dem Namen seines Plans.
    pub fn register_view(&mut self, plan: ViewPlan) {
        let name = plan.name.clone();
        if self.views.insert(name.clone(), View::new(plan)).is_some() {
            log::warn!("View '{}' wurde ersetzt", name);
        }
    }

    /// Registriert eine Route auf einen View-Namen.
    pub fn register_route(&mut self, path: impl Into<String>, view: impl Into<String>) {
        self.router.register(path, view);
    }

    /// Startet den Client auf der Default-Route.
    pub fn start(&mut self) -> Result<()> {
        let default = self.options.default_path.clone();
        self.navigate(&default)
            .with_context(|| format!("Start auf Default-Route '{}' fehlgeschlagen", default))
    }

    /// Fordert alle Manifest-Einträge im Voraus an. Geladen wird
    /// weiterhin im Frame-Tick; das Ticket berichtet den Fortschritt.
    pub fn preload_all(&mut self) -> PreloadTicket {
        self.cache.preload()
    }

    /// Verarbeitet ein Ereignis von außen.
    pub fn handle_intent(&mut self, intent: ClientIntent) -> Result<()> {
        log::debug!("Intent: {:?}", intent);
        match intent {
            ClientIntent::NavigateRequested { path } => self.navigate(&path),
            ClientIntent::HistoryBackRequested => self.history_back(),
            ClientIntent::HistoryForwardRequested => self.history_forward(),
            ClientIntent::PointerClicked { position } => self.pointer_clicked(position),
            ClientIntent::ViewportResized { width, height } => {
                self.resize(width, height);
                Ok(())
            }
            ClientIntent::FrameTicked => {
                self.frame();
                Ok(())
            }
        }
    }

    /// Ein Frame-Tick: Loads abarbeiten, initialisierende Views
    /// weitertreiben, zeichnen. Gibt die Anzahl gezeichneter Knoten
    /// zurück.
    pub fn frame(&mut self) -> usize {
        self.frames += 1;
        self.cache
            .pump(&mut self.loader, self.options.loads_per_frame);

        let Self {
            cache,
            surface,
            regions,
            audio,
            views,
            viewport,
            ..
        } = self;
        let mut ctx = SceneContext {
            cache,
            surface: &mut *surface,
            regions,
            audio,
            viewport: *viewport,
        };
        for view in views.values_mut() {
            view.advance(&mut ctx);
        }
        surface.render_frame(&layout::resolve_camera(*viewport))
    }

    /// Anzahl bisher getickter Frames.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Aktuell aktiver Pfad.
    pub fn active_path(&self) -> Option<&str> {
        self.router.active_path()
    }

    /// Registrierter View, für Zustandsabfragen.
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.get(name)
    }

    /// Zeichenfläche (Tests inspizieren hierüber den Szenengraph).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Loader, z.B. zum Vorbereiten von Testdaten.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Audio-Senke.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Regionen-Registry (read-only).
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// Navigationshistorie (read-only).
    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        match self.router.navigate(&mut self.history, path) {
            Some(switch) => self.apply_switch(switch),
            None => Ok(()),
        }
    }

    fn history_back(&mut self) -> Result<()> {
        let Some(path) = self.history.back().map(str::to_string) else {
            log::debug!("Historie: bereits am Anfang");
            return Ok(());
        };
        match self.router.handle_location_change(&path) {
            Some(switch) => self.apply_switch(switch),
            None => Ok(()),
        }
    }

    fn history_forward(&mut self) -> Result<()> {
        let Some(path) = self.history.forward().map(str::to_string) else {
            log::debug!("Historie: bereits am Ende");
            return Ok(());
        };
        match self.router.handle_location_change(&path) {
            Some(switch) => self.apply_switch(switch),
            None => Ok(()),
        }
    }

    /// Führt einen View-Wechsel aus: erst den alten View verbergen,
    /// dann den neuen anzeigen.
    fn apply_switch(&mut self, switch: ViewSwitch) -> Result<()> {
        let Self {
            cache,
            surface,
            regions,
            audio,
            views,
            viewport,
            ..
        } = self;
        let mut ctx = SceneContext {
            cache,
            surface,
            regions,
            audio,
            viewport: *viewport,
        };

        if let Some(hide) = &switch.hide {
            match views.get_mut(hide) {
                Some(view) => view.hide(&mut ctx),
                None => log::warn!("Zu verbergender View '{}' ist nicht registriert", hide),
            }
        }
        views
            .get_mut(&switch.show)
            .ok_or_else(|| anyhow!("View '{}' ist nicht registriert", switch.show))?
            .show(&mut ctx);
        Ok(())
    }

    /// Klick: Trefferprüfung über die Regionen, dann die hinterlegte
    /// Aktion ausführen. Klicks ins Leere sind kein Fehler.
    fn pointer_clicked(&mut self, position: glam::Vec2) -> Result<()> {
        let event = PointerEvent::new(position.x, position.y);
        let Some(hit) = self.regions.dispatch(&event, self.viewport) else {
            return Ok(());
        };
        log::info!("Region '{}' getroffen: {:?}", hit.owner, hit.action);
        match hit.action {
            RegionAction::Navigate { path } => self.navigate(&path),
            RegionAction::RevealElement { slug } => {
                let Some(name) = self.active_view_name() else {
                    log::warn!("RevealElement '{}' ohne aktiven View", slug);
                    return Ok(());
                };
                let Self { surface, views, .. } = self;
                if let Some(view) = views.get_mut(&name) {
                    view.reveal(surface, &slug);
                }
                Ok(())
            }
            RegionAction::TurnPage { delta } => {
                let Some(name) = self.active_view_name() else {
                    log::warn!("TurnPage ohne aktiven View");
                    return Ok(());
                };
                let Self { surface, views, .. } = self;
                if let Some(view) = views.get_mut(&name) {
                    view.turn_page(surface, delta);
                }
                Ok(())
            }
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.surface.set_size(self.viewport);
        log::debug!("Viewport: {}x{}", width, height);

        let Self {
            cache,
            surface,
            regions,
            audio,
            views,
            viewport,
            ..
        } = self;
        let mut ctx = SceneContext {
            cache,
            surface,
            regions,
            audio,
            viewport: *viewport,
        };
        for view in views.values_mut() {
            view.resize(&mut ctx);
        }
    }

    fn active_view_name(&self) -> Option<String> {
        let path = self.router.active_path()?;
        self.router.route_for(path).ok().map(str::to_string)
    }
}
