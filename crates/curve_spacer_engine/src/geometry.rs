//! Reine Geometrie-Hilfsfunktionen für Polylines.

use glam::Vec2;

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Einheits-Normale zu einer Richtung: `(dx, dy)` → `normalize((-dy, dx))`.
///
/// Dreht immer um +90° (gegen den Uhrzeigersinn). Eine Null-Richtung liefert
/// `Vec2::ZERO` statt `NaN`.
pub fn unit_perpendicular(direction: Vec2) -> Vec2 {
    direction.perp().normalize_or_zero()
}

/// Punkt bei Anteil `t` auf der Strecke `from → to`.
///
/// Entspricht der gewichteten Form `(from + r·to) / (1 + r)` mit
/// `r = t / (1 - t)`, bleibt aber auch bei `t = 1` endlich.
pub fn point_along(from: Vec2, to: Vec2, t: f32) -> Vec2 {
    from.lerp(to, t)
}
