//! Scene-Layer: positionierte, texturierte Primitives mit Lifecycle.

pub mod drawable;

pub use drawable::DrawableEntity;
