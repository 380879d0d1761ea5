//! Einstiegspunkt: Kurve + Rechteck + Anzahl → gleichmäßig verteilte Punkte.

use serde::{Deserialize, Serialize};

use crate::curve::HeightCurve;
use crate::error::LayoutError;
use crate::sampler::sample_curve;
use crate::spacer::{EvenlySpacedDot, distribute};

/// Zielrechteck; Breite und Höhe skalieren die normierte Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Verteilt `requested_count` Punkte gleichmäßig (Bogenlänge) entlang `curve`.
///
/// - `requested_count == 0` → leere Liste, die Kurve wird nicht ausgewertet
/// - `requested_count < 0` → `LayoutError::NegativeItemCount`
/// - `resolution` wird auf `[0.0001, 0.5]` geklemmt
/// - `min_spacing_cap` begrenzt den Abstand nach oben; negativ zählt als 0
///
/// `NaN` aus der Kurve wird nicht abgefangen.
pub fn distribute_evenly_on_curve<C>(
    curve: &C,
    rect: Rect,
    requested_count: i64,
    resolution: f32,
    min_spacing_cap: f32,
) -> Result<Vec<EvenlySpacedDot>, LayoutError>
where
    C: HeightCurve + ?Sized,
{
    let count = usize::try_from(requested_count).map_err(|_| LayoutError::NegativeItemCount {
        count: requested_count,
    })?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let polyline = sample_curve(curve, rect, resolution);
    let dots = distribute(&polyline, count, min_spacing_cap);

    if dots.iter().any(|dot| !dot.is_finite()) {
        log::warn!("Layout enthält nicht-endliche Koordinaten (Kurve liefert NaN/inf?)");
    }
    Ok(dots)
}

/// Gebündelte Parameter einer Layout-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub rect: Rect,
    pub requested_count: i64,
    pub resolution: f32,
    pub min_spacing_cap: f32,
}

impl LayoutRequest {
    /// Standard-Schrittweite im normierten Kurvenparameter.
    pub const DEFAULT_RESOLUTION: f32 = 0.01;

    /// Anfrage ohne Abstands-Obergrenze und mit Standard-Auflösung.
    pub fn new(rect: Rect, requested_count: i64) -> Self {
        Self {
            rect,
            requested_count,
            resolution: Self::DEFAULT_RESOLUTION,
            min_spacing_cap: f32::INFINITY,
        }
    }

    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_spacing_cap(mut self, min_spacing_cap: f32) -> Self {
        self.min_spacing_cap = min_spacing_cap;
        self
    }

    /// Führt die Berechnung für `curve` aus.
    pub fn run<C>(&self, curve: &C) -> Result<Vec<EvenlySpacedDot>, LayoutError>
    where
        C: HeightCurve + ?Sized,
    {
        distribute_evenly_on_curve(
            curve,
            self.rect,
            self.requested_count,
            self.resolution,
            self.min_spacing_cap,
        )
    }
}
