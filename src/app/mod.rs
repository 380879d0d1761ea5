//! Anwendungsschicht: Optionen → Layout-Berechnung → Platzierungen.

pub mod placement;

pub use placement::{rotation_from_normal, ItemPlacement};

use crate::shared::LayoutOptions;
use anyhow::Context;
use curve_spacer_engine::LayoutError;
use glam::Vec2;

/// Berechnet die Platzierungen für alle Elemente gemäß `options`.
///
/// Elemente mit nicht-endlichen Koordinaten fehlen im Ergebnis; ihr `index`
/// taucht dann nicht auf.
pub fn run_layout(options: &LayoutOptions) -> anyhow::Result<Vec<ItemPlacement>> {
    options.validate().context("Layout-Optionen ungültig")?;
    let curve = options.curve.as_ref().ok_or(LayoutError::MissingCurve)?;

    let dots = options
        .to_request()
        .run(curve)
        .context("Layout-Berechnung fehlgeschlagen")?;

    let pivot = Vec2::from(options.pivot);
    let placements: Vec<ItemPlacement> = dots
        .iter()
        .enumerate()
        .filter_map(|(index, dot)| {
            ItemPlacement::from_dot(index, dot, pivot, options.rotate_to_normal)
        })
        .collect();

    let skipped = dots.len() - placements.len();
    if skipped > 0 {
        log::warn!("{} von {} Elementen übersprungen (NaN)", skipped, dots.len());
    }
    log::info!("{} Elemente platziert", placements.len());

    Ok(placements)
}
