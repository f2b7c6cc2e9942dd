//! TCG Scene Client Library.
//! Runtime eines 2D-Kartenspiel-Clients: Texture-Cache, prozentuales
//! Layout, View-Lifecycle, Klick-Regionen und Router, exportiert als
//! Library für Tests und Host-Einbettung.

pub mod audio;
pub mod client;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod resource;
pub mod router;
pub mod scene;
pub mod screens;
pub mod shared;
pub mod view;

pub use audio::{AudioSink, NullAudio};
pub use client::{ClientIntent, SceneClient};
pub use error::RuntimeError;
pub use input::{HitArea, PointerEvent, RegionAction, RegionHit, RegionRegistry};
pub use layout::{LayoutSpec, OrthographicFrustum, ResolvedGeometry, Viewport};
pub use render::{DrawSurface, MemorySurface, SurfaceNodeId, Visual};
pub use resource::{
    FileTextureLoader, MemoryTextureLoader, PreloadTicket, ResourceKey, ResourceManifest, Texture,
    TextureCache, TextureLoader, TexturePromise, TextureState,
};
pub use router::{MemoryHistory, Router, ViewSwitch};
pub use scene::DrawableEntity;
pub use shared::RuntimeOptions;
pub use view::{ElementPlan, ElementVisual, SceneContext, View, ViewPhase, ViewPlan};
