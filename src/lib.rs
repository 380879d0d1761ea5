//! Curve-Spacer Library.
//! Konfiguration und Platzierungs-Logik um die Engine, exportiert für Tests
//! und Wiederverwendung.

pub mod app;
pub mod shared;

pub use app::{run_layout, ItemPlacement};
pub use curve_spacer_engine::{
    distribute_evenly_on_curve, CurveShape, EvenlySpacedDot, HeightCurve, Keyframe,
    KeyframeCurve, LayoutError, LayoutRequest, Rect,
};
pub use shared::LayoutOptions;
