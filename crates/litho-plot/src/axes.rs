// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Axis Scales
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Linear data-to-pixel scales and nice tick placement.

/// Affine map from a data interval onto a pixel interval. The pixel
/// range may run backwards, which is how the depth axis points down.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (v - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Tick positions at a 1-2-5 step chosen to yield close to
    /// `target` intervals, covering only what lies inside the domain.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span <= 0.0 || !span.is_finite() {
            return vec![d0];
        }
        let raw = span / target.max(1) as f64;
        let mag = 10f64.powf(raw.log10().floor());
        let norm = raw / mag;
        let step = if norm < 1.5 {
            mag
        } else if norm < 3.5 {
            2.0 * mag
        } else if norm < 7.5 {
            5.0 * mag
        } else {
            10.0 * mag
        };
        let mut ticks = Vec::new();
        let mut k = (d0 / step).ceil();
        // Snap -0.0 starts onto 0.
        if k == -0.0 {
            k = 0.0;
        }
        loop {
            let v = k * step;
            if v > d1 + step * 1e-9 {
                break;
            }
            ticks.push(v);
            k += 1.0;
        }
        ticks
    }
}

/// Tick label with a precision fitting the step size.
pub fn tick_label(v: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{v:.0}")
    } else if step >= 0.1 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}
