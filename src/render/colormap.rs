//! Plasma colormap via piecewise-linear anchor interpolation

use image::Rgb;

/// Matplotlib plasma sampled at nine evenly spaced anchors
const PLASMA_ANCHORS: [(f32, [u8; 3]); 9] = [
    (0.000, [13, 8, 135]),
    (0.125, [70, 3, 159]),
    (0.250, [114, 1, 168]),
    (0.375, [156, 23, 158]),
    (0.500, [189, 55, 134]),
    (0.625, [216, 87, 107]),
    (0.750, [237, 121, 83]),
    (0.875, [251, 159, 58]),
    (1.000, [240, 249, 33]),
];

/// Map a normalized value in [0, 1] to a plasma color
///
/// Values outside the range are clamped; NaN maps to the low end.
pub fn plasma(t: f32) -> Rgb<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let mut segment = (PLASMA_ANCHORS.first(), PLASMA_ANCHORS.first());
    for pair in PLASMA_ANCHORS.windows(2) {
        if let [low, high] = pair {
            segment = (Some(low), Some(high));
            if t <= high.0 {
                break;
            }
        }
    }

    let (Some(&(t0, low)), Some(&(t1, high))) = segment else {
        return Rgb([0, 0, 0]);
    };

    let span = t1 - t0;
    let frac = if span > 0.0 { (t - t0) / span } else { 0.0 };

    let mut channels = [0u8; 3];
    for ((out, &a), &b) in channels.iter_mut().zip(low.iter()).zip(high.iter()) {
        let value = f32::from(a) + frac * (f32::from(b) - f32::from(a));
        *out = value.round().clamp(0.0, 255.0) as u8;
    }
    Rgb(channels)
}
