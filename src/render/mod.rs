//! Render-Layer: opake Zeichenfläche als expliziter Übergabevertrag.
//!
//! Die eigentliche Grafik-API (GPU-Backend, Fenster, Canvas) ist ein
//! externer Kollaborateur. Die Runtime spricht ausschließlich den
//! `DrawSurface`-Trait; `MemorySurface` ist die mitgelieferte
//! Headless-Implementierung.

pub mod memory;
pub mod surface;

pub use memory::MemorySurface;
pub use surface::{DrawSurface, SurfaceNodeId, Visual};
