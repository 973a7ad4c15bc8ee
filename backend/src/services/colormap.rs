//! Sequential colour ramp for vegetation cover.

/// ColorBrewer "Greens", light to dark.
pub const GREENS: [[u8; 3]; 9] = [
    [0xf7, 0xfc, 0xf5],
    [0xe5, 0xf5, 0xe0],
    [0xc7, 0xe9, 0xc0],
    [0xa1, 0xd9, 0x9b],
    [0x74, 0xc4, 0x76],
    [0x41, 0xab, 0x5d],
    [0x23, 0x8b, 0x45],
    [0x00, 0x6d, 0x2c],
    [0x00, 0x44, 0x1b],
];

pub const GREENS_NAME: &str = "Greens";

/// Linear normalization of values into `[0, 1]` over a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub min: f64,
    pub max: f64,
}

impl Normalize {
    /// Domain spanning `values`; `None` when there are no finite values. A
    /// constant input is widened by one unit so every value maps to 0.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut any = false;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        if !any {
            return None;
        }
        if min == max {
            max = min + 1.0;
        }
        Some(Self { min, max })
    }

    pub fn apply(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Colour at position `t` in `[0, 1]` along the Greens ramp.
pub fn greens(t: f64) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let last = GREENS.len() - 1;
    let scaled = t * last as f64;
    let index = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - index as f64;

    let lo = GREENS[index];
    let hi = GREENS[index + 1];
    let mut rgb = [0u8; 3];
    for c in 0..3 {
        let v = lo[c] as f64 + (hi[c] as f64 - lo[c] as f64) * frac;
        rgb[c] = v.round() as u8;
    }
    rgb
}

pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
