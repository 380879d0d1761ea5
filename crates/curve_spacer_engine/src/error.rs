//! Strukturelle Fehler der Layout-Berechnung.
//!
//! Numerische Sonderfälle (Länge 0, `NaN` aus der Kurve) sind keine Fehler:
//! sie werden per Auffüllen bzw. Durchreichen behandelt.

/// Fehler, die eine Layout-Anfrage sofort abbrechen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Negative Element-Anzahl angefragt.
    #[error("Element-Anzahl darf nicht negativ sein, erhalten: {count}")]
    NegativeItemCount { count: i64 },

    /// Es wurde keine Kurvenfunktion angegeben.
    #[error("keine Kurvenfunktion angegeben")]
    MissingCurve,
}
