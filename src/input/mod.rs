//! Input-Layer: Pointer-Events und Klick-Regionen.
//!
//! - `pointer` — rohe Pointer-Koordinaten und die Umrechnung in den
//!   Kamera-Raum
//! - `regions` — Registry interaktiver Regionen mit Hit-Testing

pub mod pointer;
pub mod regions;

pub use pointer::{pointer_to_camera, PointerEvent};
pub use regions::{HitArea, RegionAction, RegionHit, RegionRegistry};
