//! Kurven-Abtastung: Höhenkurve → skalierte Polyline mit Gesamtlänge.

use glam::Vec2;

use crate::curve::HeightCurve;
use crate::geometry::polyline_length;
use crate::layout::Rect;

/// Kleinste erlaubte Schrittweite im normierten Kurvenparameter.
pub const RESOLUTION_MIN: f32 = 0.0001;
/// Größte erlaubte Schrittweite im normierten Kurvenparameter.
pub const RESOLUTION_MAX: f32 = 0.5;

/// Abgetasteter Punkt der skalierten Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylinePoint {
    /// Normierter Kurvenparameter `x ∈ [0, 1]`
    pub x_normalized: f32,
    /// Position im Rechteck: `(x · width, f(x) · height)`
    pub position: Vec2,
}

/// Geordnete Abtastpunkte (aufsteigendes `x`) plus Gesamtlänge.
///
/// Aus `sample_curve` enthält sie immer mindestens die Endpunkte `x = 0`
/// und `x = 1`. Über `from_positions` gebaut kann sie auch leer sein.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<PolylinePoint>,
    total_length: f32,
}

impl Polyline {
    /// Baut eine Polyline aus beliebigen Positionen (z.B. einem eigenen Pfad).
    ///
    /// `x_normalized` wird gleichmäßig über die Indizes verteilt.
    pub fn from_positions(positions: &[Vec2]) -> Self {
        let last_index = positions.len().saturating_sub(1).max(1) as f32;
        let points = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| PolylinePoint {
                x_normalized: i as f32 / last_index,
                position,
            })
            .collect();
        Self {
            points,
            total_length: polyline_length(positions),
        }
    }

    /// Abtastpunkte in Kurvenreihenfolge.
    pub fn points(&self) -> &[PolylinePoint] {
        &self.points
    }

    /// Summe der euklidischen Abstände aufeinanderfolgender Punkte.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Anzahl der Abtastpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position des Punkts `index`.
    pub fn position(&self, index: usize) -> Vec2 {
        self.points[index].position
    }

    /// Nur die Positionen.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }
}

/// Klemmt die Schrittweite auf `[RESOLUTION_MIN, RESOLUTION_MAX]`.
///
/// `NaN` wird wie die feinste Auflösung behandelt.
pub fn clamp_resolution(resolution: f32) -> f32 {
    if resolution.is_nan() {
        return RESOLUTION_MIN;
    }
    resolution.clamp(RESOLUTION_MIN, RESOLUTION_MAX)
}

/// Tastet `curve` mit Schrittweite `resolution` ab und skaliert in `rect`.
///
/// Abtaststellen sind `x = k · resolution` solange `x < 1`, danach folgt
/// immer der Endpunkt `x = 1`. Die Gesamtlänge wird beim Abtasten
/// mitsummiert.
pub fn sample_curve<C>(curve: &C, rect: Rect, resolution: f32) -> Polyline
where
    C: HeightCurve + ?Sized,
{
    let step = clamp_resolution(resolution);
    let capacity = (1.0 / step).ceil() as usize + 2;
    let mut points = Vec::with_capacity(capacity);
    let mut total_length = 0.0f32;

    let sample = |x: f32| PolylinePoint {
        x_normalized: x,
        position: Vec2::new(x * rect.width, curve.height_at(x) * rect.height),
    };

    let mut push = |point: PolylinePoint, points: &mut Vec<PolylinePoint>| {
        if let Some(prev) = points.last() {
            total_length += prev.position.distance(point.position);
        }
        points.push(point);
    };

    let mut k = 0usize;
    loop {
        let x = k as f32 * step;
        if x >= 1.0 {
            break;
        }
        push(sample(x), &mut points);
        k += 1;
    }
    push(sample(1.0), &mut points);

    log::debug!(
        "Kurve abgetastet: {} Punkte, Schrittweite {}, Länge {:.3}",
        points.len(),
        step,
        total_length
    );

    Polyline {
        points,
        total_length,
    }
}
