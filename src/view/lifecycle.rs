//! View-Zustandsautomat: `Uninitialized → Initializing → Active ⇄ Hidden`.
//!
//! Views sind langlebige Singletons (kein Terminalzustand). `show()`
//! stößt die asynchrone Resource-Akquise an (Fan-out über alle
//! Elemente); gezeichnet wird ein Element erst, wenn *seine* Texture
//! aufgelöst ist. `hide()` deregistriert Regionen und gibt Drawables
//! frei, der Plan und die gecachten Texturen bleiben — ein erneutes
//! `show()` ist dann ein Cache-Hit.
//!
//! Abbruch-Toleranz: wird ein View während `Initializing` verborgen,
//! verfallen seine Promises. Späte Load-Abschlüsse schreiben nur den
//! Cache; konsumiert wird ausschließlich in `advance`, das den
//! View-Zustand prüft. Freigegebene Drawables können so nicht
//! wiederauferstehen.

use super::plan::{ElementPlan, ElementVisual, ViewPlan};
use crate::audio::AudioSink;
use crate::input::{HitArea, RegionRegistry};
use crate::layout::{self, Viewport};
use crate::render::{DrawSurface, Visual};
use crate::resource::{TextureCache, TexturePromise, TextureState};
use crate::scene::DrawableEntity;

/// Lifecycle-Phase eines Views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Konstruiert, aber noch nie gezeigt
    Uninitialized,
    /// Resource-Akquise läuft; einzelne Elemente können schon stehen
    Initializing,
    /// Sichtbar, alle Elemente abgearbeitet
    Active,
    /// Verborgen; Drawables und Regionen sind freigegeben
    Hidden,
}

/// Bündelt die geteilten Runtime-Teile für View-Operationen.
pub struct SceneContext<'a> {
    /// Prozessweiter Texture-Cache
    pub cache: &'a mut TextureCache,
    /// Zeichenfläche
    pub surface: &'a mut dyn DrawSurface,
    /// Klick-Regionen-Registry
    pub regions: &'a mut RegionRegistry,
    /// Audio-Senke
    pub audio: &'a mut dyn AudioSink,
    /// Aktuelle Viewport-Größe
    pub viewport: Viewport,
}

/// Element, dessen Texture noch aussteht.
struct PendingElement {
    /// Index in `plan.elements`
    element_index: usize,
    /// Geteiltes Promise auf den Cache-Eintrag
    promise: TexturePromise,
}

/// Element mit lebendem Drawable.
struct LiveElement {
    /// Index in `plan.elements`
    element_index: usize,
    /// Das Drawable im Szenengraph
    drawable: DrawableEntity,
}

/// Ein routbarer Vollbild-Screen.
pub struct View {
    plan: ViewPlan,
    phase: ViewPhase,
    pending: Vec<PendingElement>,
    live: Vec<LiveElement>,
    current_page: u32,
}

impl View {
    /// Erstellt einen View aus seinem Plan. Billig; Resourcen werden
    /// erst beim ersten `show()` angefordert.
    pub fn new(plan: ViewPlan) -> Self {
        Self {
            plan,
            phase: ViewPhase::Uninitialized,
            pending: Vec::new(),
            live: Vec::new(),
            current_page: 0,
        }
    }

    /// View-Name (Registry-Schlüssel).
    pub fn name(&self) -> &str {
        &self.plan.name
    }

    /// Aktuelle Lifecycle-Phase.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Ob der View gerade sichtbar ist (Active oder Initializing).
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, ViewPhase::Active | ViewPhase::Initializing)
    }

    /// Anzahl lebender Drawables.
    pub fn drawable_count(&self) -> usize {
        self.live.len()
    }

    /// Anzahl noch ausstehender Texture-Elemente.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Aktuelle Seite blätterbarer Elemente.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Sichtbarkeit eines lebenden Drawables, falls vorhanden.
    pub fn drawable_visible(&self, slug: &str) -> Option<bool> {
        self.live
            .iter()
            .find(|live| live.drawable.id() == slug)
            .map(|live| live.drawable.is_visible())
    }

    /// Zeigt den View an.
    ///
    /// - `Uninitialized`/`Hidden` → startet die Akquise (Fan-out) und
    ///   verbaut sofort, was ohne I/O oder per Cache-Hit verfügbar ist
    /// - `Initializing` → re-entrant-sicherer No-op (keine doppelte
    ///   Akquise)
    /// - `Active` → No-op
    pub fn show(&mut self, ctx: &mut SceneContext<'_>) {
        match self.phase {
            ViewPhase::Active => {
                log::debug!("View '{}' ist bereits aktiv", self.plan.name);
            }
            ViewPhase::Initializing => {
                log::debug!(
                    "View '{}': Initialisierung läuft bereits, kein zweiter Start",
                    self.plan.name
                );
            }
            ViewPhase::Uninitialized | ViewPhase::Hidden => {
                log::info!("View '{}' wird angezeigt", self.plan.name);
                self.phase = ViewPhase::Initializing;
                self.current_page = 0;

                if let Some(track) = &self.plan.music {
                    ctx.audio.play(track);
                }

                for index in 0..self.plan.elements.len() {
                    match &self.plan.elements[index].visual {
                        ElementVisual::Texture { key } => {
                            let promise = ctx.cache.request(key);
                            self.pending.push(PendingElement {
                                element_index: index,
                                promise,
                            });
                        }
                        ElementVisual::Solid { color } => {
                            // Hotspots/Overlays brauchen kein I/O
                            let color = *color;
                            let drawable = {
                                let element = &self.plan.elements[index];
                                Self::spawn_drawable(
                                    ctx,
                                    element,
                                    Visual::Solid { color },
                                    self.current_page,
                                )
                            };
                            self.live.push(LiveElement {
                                element_index: index,
                                drawable,
                            });
                        }
                    }
                }

                // Cache-Hits sofort verbauen statt einen Frame zu warten
                self.advance(ctx);
            }
        }
    }

    /// Verbaut aufgelöste Texturen in Drawables.
    ///
    /// Wird vom Client einmal pro Frame-Tick aufgerufen (und von
    /// `show()` direkt). Fehlgeschlagene Elemente werden geloggt und
    /// übersprungen — der View rendert ohne sie, statt abzubrechen.
    /// Gibt die Anzahl neu erstellter Drawables zurück.
    pub fn advance(&mut self, ctx: &mut SceneContext<'_>) -> usize {
        if self.phase != ViewPhase::Initializing {
            return 0;
        }

        let mut created = 0;
        let mut still_pending = Vec::new();

        for pending in std::mem::take(&mut self.pending) {
            match pending.promise.state() {
                TextureState::Pending => still_pending.push(pending),
                TextureState::Ready(texture) => {
                    let drawable = {
                        let element = &self.plan.elements[pending.element_index];
                        Self::spawn_drawable(
                            ctx,
                            element,
                            Visual::Textured(texture),
                            self.current_page,
                        )
                    };
                    self.live.push(LiveElement {
                        element_index: pending.element_index,
                        drawable,
                    });
                    created += 1;
                }
                TextureState::Failed(_) => {
                    let err = pending
                        .promise
                        .error()
                        .expect("Failed-Zustand trägt immer einen Fehler");
                    log::warn!(
                        "View '{}': Element '{}' wird ohne Texture übersprungen: {}",
                        self.plan.name,
                        self.plan.elements[pending.element_index].slug,
                        err
                    );
                }
            }
        }

        self.pending = still_pending;
        if self.pending.is_empty() {
            self.phase = ViewPhase::Active;
            log::info!(
                "View '{}' aktiv ({} Drawables)",
                self.plan.name,
                self.live.len()
            );
        }

        created
    }

    /// Verbirgt den View und gibt seine Resourcen frei.
    ///
    /// Regionen werden vor den Drawables entfernt, damit kein Handler
    /// auf ein zerstörtes Visual feuern kann. `hide()` auf einem
    /// bereits verborgenen View ist ein No-op; `hide()` vor dem ersten
    /// `show()` ist ein Programmierfehler.
    pub fn hide(&mut self, ctx: &mut SceneContext<'_>) {
        match self.phase {
            ViewPhase::Uninitialized => {
                panic!("hide() auf nie initialisiertem View '{}'", self.plan.name)
            }
            ViewPhase::Hidden => {
                log::debug!("View '{}' ist bereits verborgen", self.plan.name);
            }
            ViewPhase::Active | ViewPhase::Initializing => {
                log::info!("View '{}' wird verborgen", self.plan.name);
                for live in &self.live {
                    ctx.regions.unregister(live.drawable.id());
                }
                for live in &mut self.live {
                    live.drawable.dispose(ctx.surface);
                }
                self.live.clear();
                // Laufende Promises verfallen; späte Abschlüsse finden
                // keinen Konsumenten mehr
                self.pending.clear();
                self.phase = ViewPhase::Hidden;
            }
        }
    }

    /// Leitet alle Geometrien aus den Original-Prozenten neu ab.
    ///
    /// Niemals inkrementell skalieren — das driftet über mehrere
    /// Resizes. Trefferrechtecke werden in-place angepasst, die
    /// Stapel-Reihenfolge der Regionen bleibt erhalten.
    pub fn resize(&mut self, ctx: &mut SceneContext<'_>) {
        if !self.is_shown() {
            return;
        }

        for live in &mut self.live {
            let element = &self.plan.elements[live.element_index];
            let geometry = layout::resolve(&element.layout, ctx.viewport);
            live.drawable.reposition(ctx.surface, geometry);
            if element.action.is_some() {
                ctx.regions
                    .update_hit_area(live.drawable.id(), HitArea::from_geometry(&geometry));
            }
        }
    }

    /// Blendet ein verstecktes Element ein (z.B. Shop-Auswahlscreen).
    pub fn reveal(&mut self, surface: &mut dyn DrawSurface, slug: &str) {
        match self.live.iter_mut().find(|live| live.drawable.id() == slug) {
            Some(live) => live.drawable.set_visible(surface, true),
            None => log::warn!(
                "View '{}': einzublendendes Element '{}' existiert (noch) nicht",
                self.plan.name,
                slug
            ),
        }
    }

    /// Blättert Seiten-gebundene Elemente um `delta` weiter.
    ///
    /// Klemmt an den Seitenrändern; Elemente ohne Seiten-Zuordnung
    /// bleiben unberührt.
    pub fn turn_page(&mut self, surface: &mut dyn DrawSurface, delta: i32) {
        let max_page = self
            .plan
            .elements
            .iter()
            .filter_map(|element| element.page)
            .max()
            .unwrap_or(0);
        let new_page =
            (i64::from(self.current_page) + i64::from(delta)).clamp(0, i64::from(max_page)) as u32;

        if new_page == self.current_page {
            log::debug!(
                "View '{}': Seite {} ist bereits der Rand",
                self.plan.name,
                self.current_page
            );
            return;
        }

        self.current_page = new_page;
        for live in &mut self.live {
            if let Some(page) = self.plan.elements[live.element_index].page {
                live.drawable.set_visible(surface, page == new_page);
            }
        }
    }

    /// Erstellt Drawable + Region für ein Element.
    fn spawn_drawable(
        ctx: &mut SceneContext<'_>,
        element: &ElementPlan,
        visual: Visual,
        current_page: u32,
    ) -> DrawableEntity {
        let geometry = layout::resolve(&element.layout, ctx.viewport);
        let mut drawable =
            DrawableEntity::create(ctx.surface, element.slug.clone(), geometry, visual);

        let initially_visible = !element.hidden_on_create
            && element.page.map_or(true, |page| page == current_page);
        if !initially_visible {
            drawable.set_visible(ctx.surface, false);
        }

        if let Some(action) = &element.action {
            ctx.regions.register(
                element.slug.clone(),
                HitArea::from_geometry(&geometry),
                action.clone(),
            );
        }

        drawable
    }
}
