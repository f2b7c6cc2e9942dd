//! View-Layer: routbare Vollbild-Screens mit eigenem Lifecycle.
//!
//! - `plan` — deklarative Beschreibung eines Screens (Elemente, Layout,
//!   Aktionen, Musik)
//! - `lifecycle` — der View-Zustandsautomat samt asynchroner
//!   Resource-Akquise

pub mod lifecycle;
pub mod plan;

pub use lifecycle::{SceneContext, View, ViewPhase};
pub use plan::{ElementPlan, ElementVisual, ViewPlan};
