//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die von `app` und der Binary gemeinsam genutzt
//! wird.

pub mod options;

pub use options::LayoutOptions;
pub use options::{ITEM_COUNT, RESOLUTION};
