//! Höhenkurven: Abbildung `x ∈ [0, 1]` → Höhe `y`.
//!
//! Jede Closure `Fn(f32) -> f32` ist eine Höhenkurve. Für konfigurierbare
//! Layouts gibt es zusätzlich serialisierbare Presets (`CurveShape`) und
//! Keyframe-Kurven mit Hermite-Interpolation (`KeyframeCurve`).

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Höhenfeld-Kurve über dem normierten Bereich `[0, 1]`.
///
/// Wird nur lesend ausgewertet. Liefert die Kurve `NaN`, wird das nicht
/// abgefangen, sondern landet in den berechneten Punkten.
pub trait HeightCurve {
    /// Höhe an der normierten Stelle `x`.
    fn height_at(&self, x: f32) -> f32;
}

impl<F> HeightCurve for F
where
    F: Fn(f32) -> f32,
{
    fn height_at(&self, x: f32) -> f32 {
        self(x)
    }
}

// ── Keyframe-Kurve ──────────────────────────────────────────────────

/// Stützpunkt einer Keyframe-Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position auf der x-Achse
    pub time: f32,
    /// Höhe am Stützpunkt
    pub value: f32,
    /// Steigung beim Eintritt (von links)
    #[serde(default)]
    pub in_tangent: f32,
    /// Steigung beim Austritt (nach rechts)
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Erstellt einen flachen Keyframe (beide Tangenten 0).
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// Erstellt einen Keyframe mit expliziten Tangenten.
    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Stückweise kubische Hermite-Kurve durch sortierte Keyframes.
///
/// Außerhalb des Keyframe-Bereichs wird auf den ersten bzw. letzten Wert
/// geklemmt. Ohne Keyframes ist die Kurve konstant 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl From<Vec<Keyframe>> for KeyframeCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<KeyframeCurve> for Vec<Keyframe> {
    fn from(curve: KeyframeCurve) -> Self {
        curve.keys
    }
}

impl KeyframeCurve {
    /// Erstellt die Kurve; Keyframes werden nach `time` sortiert.
    ///
    /// Keyframes mit `time = NaN` haben keine Position und werden verworfen.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        let before = keys.len();
        keys.retain(|k| !k.time.is_nan());
        if keys.len() < before {
            log::warn!(
                "{} Keyframe(s) ohne gültige Zeit verworfen",
                before - keys.len()
            );
        }
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Polygonzug durch `(time, value)`-Paare: Tangenten = Sehnensteigungen.
    pub fn linear(points: &[(f32, f32)]) -> Self {
        let mut sorted: Vec<(f32, f32)> =
            points.iter().copied().filter(|p| !p.0.is_nan()).collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let slope = |a: (f32, f32), b: (f32, f32)| {
            let dt = b.0 - a.0;
            if dt.abs() > f32::EPSILON {
                (b.1 - a.1) / dt
            } else {
                0.0
            }
        };

        let keys = (0..sorted.len())
            .map(|i| {
                let (time, value) = sorted[i];
                let in_tangent = if i > 0 {
                    slope(sorted[i - 1], sorted[i])
                } else {
                    0.0
                };
                let out_tangent = if i + 1 < sorted.len() {
                    slope(sorted[i], sorted[i + 1])
                } else {
                    0.0
                };
                Keyframe::with_tangents(time, value, in_tangent, out_tangent)
            })
            .collect();
        Self { keys }
    }

    /// Sortierte Keyframes.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Wertet die Kurve an der Stelle `time` aus.
    ///
    /// `time = NaN` ergibt `NaN`.
    pub fn evaluate(&self, time: f32) -> f32 {
        if time.is_nan() {
            return f32::NAN;
        }
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // erster Key mit k.time > time; liegt wegen der Klemmung in 1..len
        let upper = self.keys.partition_point(|k| k.time <= time);
        let lower = upper.checked_sub(1).and_then(|i| self.keys.get(i));
        match (lower, self.keys.get(upper)) {
            (Some(&k0), Some(&k1)) => hermite(k0, k1, time),
            _ => f32::NAN,
        }
    }
}

/// Kubische Hermite-Interpolation zwischen zwei Keyframes.
fn hermite(k0: Keyframe, k1: Keyframe, time: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= f32::EPSILON {
        return k0.value;
    }
    let t = (time - k0.time) / dt;
    let t2 = t * t;
    let t3 = t2 * t;

    let m0 = k0.out_tangent * dt;
    let m1 = k1.in_tangent * dt;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * k0.value + h10 * m0 + h01 * k1.value + h11 * m1
}

impl HeightCurve for KeyframeCurve {
    fn height_at(&self, x: f32) -> f32 {
        self.evaluate(x)
    }
}

// ── Presets ─────────────────────────────────────────────────────────

/// Serialisierbare Kurvenform für konfigurationsgetriebene Layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveShape {
    /// Konstant 0 (gerade Linie)
    Flat,
    /// `sin(2π · (periods · x + phase))`
    Sine {
        periods: f32,
        #[serde(default)]
        phase: f32,
    },
    /// Parabel `4x(1 − x)`, Scheitel 1 bei `x = 0.5`
    Arch,
    /// Frei definierte Keyframe-Kurve
    Keyframes { keys: KeyframeCurve },
}

impl HeightCurve for CurveShape {
    fn height_at(&self, x: f32) -> f32 {
        match self {
            CurveShape::Flat => 0.0,
            CurveShape::Sine { periods, phase } => (TAU * (periods * x + phase)).sin(),
            CurveShape::Arch => 4.0 * x * (1.0 - x),
            CurveShape::Keyframes { keys } => keys.evaluate(x),
        }
    }
}
