//! Curve-Spacer Engine.
//!
//! Reine, zustandslose Geometrie ohne UI- oder Szenen-Abhängigkeit:
//! - `sampler`: Höhenkurve → skalierte Polyline mit Gesamtlänge
//! - `spacer`: Polyline → gleichmäßig (Bogenlänge) verteilte Punkte mit Normale
//! - `layout`: beide Stufen hintereinander, mit Eingabeprüfung

pub mod curve;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod sampler;
pub mod spacer;

pub use curve::{CurveShape, HeightCurve, Keyframe, KeyframeCurve};
pub use error::LayoutError;
pub use geometry::{polyline_length, unit_perpendicular};
pub use layout::{LayoutRequest, Rect, distribute_evenly_on_curve};
pub use sampler::{
    Polyline, PolylinePoint, RESOLUTION_MAX, RESOLUTION_MIN, clamp_resolution, sample_curve,
};
pub use spacer::{EvenlySpacedDot, SpacingPlan, distribute};
