//! Zentrale Konfiguration für Curve-Spacer.
//!
//! `LayoutOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use curve_spacer_engine::{CurveShape, LayoutError, LayoutRequest, Rect};
use serde::{Deserialize, Serialize};

// ── Rechteck ────────────────────────────────────────────────────────

/// Standard-Breite des Zielrechtecks.
pub const RECT_WIDTH: f32 = 400.0;
/// Standard-Höhe des Zielrechtecks.
pub const RECT_HEIGHT: f32 = 100.0;

// ── Verteilung ──────────────────────────────────────────────────────

/// Standard-Anzahl der Elemente.
pub const ITEM_COUNT: i64 = 5;
/// Standard-Schrittweite beim Abtasten der Kurve.
pub const RESOLUTION: f32 = LayoutRequest::DEFAULT_RESOLUTION;
/// Standard-Obergrenze für den Abstand (unendlich = keine Begrenzung).
pub const MIN_SPACING_CAP: f32 = f32::INFINITY;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Layout-Optionen.
/// Wird als `curve_spacer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    // ── Rechteck ────────────────────────────────────────────────
    /// Breite des Zielrechtecks
    pub rect_width: f32,
    /// Höhe des Zielrechtecks
    pub rect_height: f32,
    /// Pivot-Versatz, der von jeder Position abgezogen wird
    #[serde(default)]
    pub pivot: [f32; 2],

    // ── Verteilung ──────────────────────────────────────────────
    /// Anzahl der zu verteilenden Elemente (negativ = Fehler)
    pub item_count: i64,
    /// Schrittweite im normierten Kurvenparameter (geklemmt auf [0.0001, 0.5])
    #[serde(default = "default_resolution")]
    pub resolution: f32,
    /// Obergrenze für den Abstand; fehlt der Eintrag, gibt es keine Begrenzung
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "min_spacing_cap"
    )]
    pub spacing_cap: Option<f32>,
    /// Elemente entlang der Kurvennormale drehen
    #[serde(default = "default_rotate_to_normal")]
    pub rotate_to_normal: bool,

    // ── Kurve ───────────────────────────────────────────────────
    /// Kurvenform; ohne Kurve schlägt `validate()` fehl
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveShape>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rect_width: RECT_WIDTH,
            rect_height: RECT_HEIGHT,
            pivot: [0.0, 0.0],

            item_count: ITEM_COUNT,
            resolution: RESOLUTION,
            spacing_cap: None,
            rotate_to_normal: true,

            curve: Some(CurveShape::Arch),
        }
    }
}

/// Serde-Default für `resolution` (ältere TOML-Dateien ohne Eintrag).
fn default_resolution() -> f32 {
    RESOLUTION
}

/// Serde-Default für `rotate_to_normal`.
fn default_rotate_to_normal() -> bool {
    true
}

impl LayoutOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Optionen konnten nicht als TOML serialisiert werden")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve-spacer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_spacer.toml")
    }

    /// Obergrenze für den Abstand (`inf`, wenn nicht gesetzt).
    pub fn min_spacing_cap(&self) -> f32 {
        self.spacing_cap.unwrap_or(MIN_SPACING_CAP)
    }

    /// Prüft die strukturellen Vorbedingungen.
    ///
    /// Numerische Sonderfälle (Breite 0, `NaN`) sind kein Fehler.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.item_count < 0 {
            return Err(LayoutError::NegativeItemCount {
                count: self.item_count,
            });
        }
        if self.curve.is_none() {
            return Err(LayoutError::MissingCurve);
        }
        Ok(())
    }

    /// Baut die Layout-Anfrage für die Engine.
    pub fn to_request(&self) -> LayoutRequest {
        LayoutRequest::new(Rect::new(self.rect_width, self.rect_height), self.item_count)
            .with_resolution(self.resolution)
            .with_spacing_cap(self.min_spacing_cap())
    }
}
