#![no_main]

use curve_spacer_engine::{Keyframe, KeyframeCurve, Rect, distribute_evenly_on_curve};
use libfuzzer_sys::fuzz_target;

/// Liest `f32`-Werte aus den Rohdaten; fehlende Bytes ergeben 0.
fn floats(data: &[u8]) -> impl Iterator<Item = f32> + '_ {
    data.chunks(4).map(|chunk| {
        let mut bytes = [0u8; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        f32::from_le_bytes(bytes)
    })
}

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let mut values = floats(rest);
    let width = values.next().unwrap_or(1.0);
    let height = values.next().unwrap_or(1.0);
    let resolution = values.next().unwrap_or(0.01).max(0.001);
    let cap = values.next().unwrap_or(f32::INFINITY);

    // Paare (time, value), Zeiten ungeordnet und auch NaN/inf
    let raw: Vec<f32> = values.take(32).collect();
    let keys: Vec<Keyframe> = raw
        .chunks_exact(2)
        .map(|pair| Keyframe::new(pair[0], pair[1]))
        .collect();
    let curve = KeyframeCurve::new(keys);
    let _ = curve.evaluate(f32::NAN);

    let dots = distribute_evenly_on_curve(
        &curve,
        Rect::new(width, height),
        i64::from(count),
        resolution,
        cap,
    )
    .expect("nicht-negative Anzahl ist immer gültig");
    assert_eq!(dots.len(), usize::from(count));
});
