//! Übersetzt berechnete Kurvenpunkte in Element-Platzierungen.

use curve_spacer_engine::EvenlySpacedDot;
use glam::Vec2;
use serde::Serialize;

/// Position und Drehung eines einzelnen Elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemPlacement {
    /// Index des Elements in der Ausgangsreihenfolge
    pub index: usize,
    /// Position relativ zum Pivot
    pub position: Vec2,
    /// Drehung in Radiant (gegen den Uhrzeigersinn, 0 = Normale zeigt nach +Y)
    pub rotation: f32,
}

impl ItemPlacement {
    /// Baut die Platzierung aus einem Kurvenpunkt.
    ///
    /// Gibt `None` zurück, wenn Punkt oder Normale nicht endlich sind; der
    /// Aufrufer lässt das Element dann unverändert.
    pub fn from_dot(
        index: usize,
        dot: &EvenlySpacedDot,
        pivot: Vec2,
        rotate_to_normal: bool,
    ) -> Option<Self> {
        if !dot.is_finite() {
            return None;
        }
        let rotation = if rotate_to_normal {
            rotation_from_normal(dot.normal)
        } else {
            0.0
        };
        Some(Self {
            index,
            position: dot.point - pivot,
            rotation,
        })
    }
}

/// Winkel, um den +Y gedreht werden muss, um auf `normal` zu zeigen.
pub fn rotation_from_normal(normal: Vec2) -> f32 {
    (-normal.x).atan2(normal.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn dot(point: Vec2, normal: Vec2) -> EvenlySpacedDot {
        EvenlySpacedDot { point, normal }
    }

    #[test]
    fn test_upward_normal_has_no_rotation() {
        assert_relative_eq!(rotation_from_normal(Vec2::Y), 0.0);
    }

    #[test]
    fn test_left_normal_is_quarter_turn() {
        assert_relative_eq!(rotation_from_normal(Vec2::NEG_X), FRAC_PI_2);
        assert_relative_eq!(rotation_from_normal(Vec2::X), -FRAC_PI_2);
    }

    #[test]
    fn test_pivot_is_subtracted() {
        let placement = ItemPlacement::from_dot(
            2,
            &dot(Vec2::new(50.0, 10.0), Vec2::Y),
            Vec2::new(20.0, 5.0),
            true,
        )
        .expect("endlicher Punkt");
        assert_eq!(placement.index, 2);
        assert_eq!(placement.position, Vec2::new(30.0, 5.0));
    }

    #[test]
    fn test_rotation_disabled() {
        let placement = ItemPlacement::from_dot(0, &dot(Vec2::ZERO, Vec2::NEG_X), Vec2::ZERO, false)
            .expect("endlicher Punkt");
        assert_relative_eq!(placement.rotation, 0.0);
    }

    #[test]
    fn test_nan_dot_is_skipped() {
        let nan = dot(Vec2::new(f32::NAN, 0.0), Vec2::Y);
        assert!(ItemPlacement::from_dot(0, &nan, Vec2::ZERO, true).is_none());
    }
}
