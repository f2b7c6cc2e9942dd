//! Geteilte Typen und Konfiguration für Client und Runtime.

pub mod options;

pub use options::RuntimeOptions;
