//! Gleichmäßige Verteilung (Arc-Length) von Punkten entlang einer Polyline.
//!
//! Die Punkte werden auf der Bogenlänge zentriert: links und rechts der
//! belegten Spanne bleibt gleich viel Kurve frei.

use glam::Vec2;

use crate::geometry::{point_along, unit_perpendicular};
use crate::sampler::Polyline;

/// Abstand und Startversatz für `count` Punkte auf einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingPlan {
    /// Bogenlängen-Abstand zwischen benachbarten Punkten
    pub effective_spacing: f32,
    /// Bogenlänge bis zum ersten Punkt (darf negativ sein)
    pub initial_offset: f32,
}

impl SpacingPlan {
    /// Leitet den Plan aus Gesamtlänge, Anzahl und Abstands-Obergrenze ab.
    ///
    /// `min_spacing_cap` wirkt trotz des Namens als Obergrenze:
    /// `effective_spacing = min(total_length / count, max(cap, 0))`.
    /// Negative Werte zählen als 0.
    pub fn new(total_length: f32, count: usize, min_spacing_cap: f32) -> Self {
        let honest_spacing = total_length / count as f32;
        let cap = min_spacing_cap.max(0.0);
        let effective_spacing = honest_spacing.min(cap);
        let half_span = effective_spacing * count.saturating_sub(1) as f32 / 2.0;
        Self {
            effective_spacing,
            initial_offset: total_length / 2.0 - half_span,
        }
    }
}

/// Ergebnis-Punkt: Position auf der Kurve plus Normale zur Ausrichtung.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EvenlySpacedDot {
    /// Position im Rechteck-Koordinatensystem
    pub point: Vec2,
    /// Einheitsnormale zur lokalen Kurventangente (+90° gedreht)
    pub normal: Vec2,
}

impl EvenlySpacedDot {
    /// `true`, wenn Punkt und Normale keine `NaN`/`inf` enthalten.
    pub fn is_finite(&self) -> bool {
        self.point.is_finite() && self.normal.is_finite()
    }
}

/// Verteilt `count` Punkte gleichmäßig entlang `polyline`.
///
/// Liefert genau `count` Punkte. Läuft der Durchgang vorzeitig aus, wird der
/// letzte Punkt wiederholt.
pub fn distribute(polyline: &Polyline, count: usize, min_spacing_cap: f32) -> Vec<EvenlySpacedDot> {
    if count == 0 {
        return Vec::new();
    }

    let plan = SpacingPlan::new(polyline.total_length(), count, min_spacing_cap);
    log::debug!(
        "Verteilung: {} Punkte, Abstand {:.4}, Versatz {:.4}, Länge {:.4}",
        count,
        plan.effective_spacing,
        plan.initial_offset,
        polyline.total_length()
    );

    let mut dots = walk(polyline, count, plan);
    pad_to_count(&mut dots, polyline, count);
    dots
}

/// Läuft die Polyline ab und setzt an jeder Abstandsgrenze einen Punkt.
fn walk(polyline: &Polyline, count: usize, plan: SpacingPlan) -> Vec<EvenlySpacedDot> {
    let mut dots = Vec::with_capacity(count);

    let mut index = 0usize;
    let mut covered = 0.0f32;
    let mut remaining = plan.initial_offset;
    // Punkt, der seit dem letzten Weiterschalten von `index` gesetzt wurde
    let mut last_dot: Option<Vec2> = None;

    while index + 1 < polyline.len() && dots.len() < count {
        let current = polyline.position(index);
        let next = polyline.position(index + 1);
        let origin = last_dot.unwrap_or(current);
        let segment_length = origin.distance(next);

        if covered + segment_length < remaining {
            covered += segment_length;
            index += 1;
            last_dot = None;
            continue;
        }

        let partial = remaining - covered;
        let t = if segment_length > f32::EPSILON {
            partial / segment_length
        } else {
            0.0
        };
        let point = point_along(origin, next, t);
        // Normale aus dem abgetasteten Segment, nicht aus origin → next
        let normal = unit_perpendicular(next - current);

        dots.push(EvenlySpacedDot { point, normal });
        last_dot = Some(point);
        covered = 0.0;
        remaining = plan.effective_spacing;
    }

    dots
}

/// Füllt auf `count` Punkte auf, indem der letzte Punkt wiederholt wird.
fn pad_to_count(dots: &mut Vec<EvenlySpacedDot>, polyline: &Polyline, count: usize) {
    if dots.len() >= count {
        return;
    }

    let (filler, source) = match dots.last() {
        Some(dot) => (*dot, "letztem Punkt"),
        None => (fallback_dot(polyline), "erstem Kurvenpunkt"),
    };
    log::warn!(
        "Polyline erschöpft nach {} von {} Punkten, fülle mit {} auf",
        dots.len(),
        count,
        source
    );
    dots.resize(count, filler);
}

/// Erster Abtastpunkt mit der Normale des ersten Segments.
fn fallback_dot(polyline: &Polyline) -> EvenlySpacedDot {
    let points = polyline.points();
    match points {
        [first, second, ..] => EvenlySpacedDot {
            point: first.position,
            normal: unit_perpendicular(second.position - first.position),
        },
        [only] => EvenlySpacedDot {
            point: only.position,
            normal: Vec2::ZERO,
        },
        [] => EvenlySpacedDot {
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
        },
    }
}

#[cfg(test)]
mod tests;
