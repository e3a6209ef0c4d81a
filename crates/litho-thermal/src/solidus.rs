// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Solidus Curves
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Melting curves drawn on the thermal panel: the wet and dry granite
//! solidi of Johannes & Holtz (1996) for the crust and the dry
//! peridotite solidus of Hirschmann (2000) for the mantle. Curves are
//! produced in figure coordinates, (temperature [deg C], depth [km]).

use litho_types::constants::GRAVITY;

/// Wet granite solidus, digitised from Johannes & Holtz (1996),
/// fig. 2.14. Pairs of (temperature [deg C], pressure [MPa]), from
/// high pressure down to the surface.
pub const WET_GRANITE_SOLIDUS: [(f64, f64); 26] = [
    (632.203, 1297.289),
    (635.593, 1040.060),
    (640.254, 787.048),
    (644.915, 546.687),
    (647.034, 468.675),
    (649.186, 417.936),
    (652.128, 371.570),
    (655.561, 332.525),
    (660.220, 294.700),
    (665.860, 260.535),
    (671.010, 234.912),
    (676.895, 210.509),
    (684.251, 186.106),
    (692.589, 162.923),
    (700.190, 144.620),
    (709.999, 122.657),
    (719.072, 105.575),
    (730.106, 87.273),
    (744.329, 68.970),
    (757.815, 56.769),
    (778.413, 45.177),
    (797.295, 37.856),
    (815.686, 32.366),
    (856.391, 25.045),
    (906.415, 18.334),
    (961.860, 0.0),
];

/// Dry granite solidus above the wet minimum: T = (P + 9551.25) / 9.93
/// with P in MPa, a linear fit to the same data set.
const DRY_GRANITE_INTERCEPT_MPA: f64 = 9551.25;
const DRY_GRANITE_SLOPE_MPA_C: f64 = 9.93;

/// A melting curve ready for the temperature panel.
#[derive(Debug, Clone)]
pub struct SolidusCurve {
    pub label: &'static str,
    /// (temperature [deg C], depth [km]) vertices.
    pub points: Vec<(f64, f64)>,
}

/// Pressure [MPa] to depth [km] inside a crust of density `rho`.
fn crustal_depth_km(p_mpa: f64, rho: f64) -> f64 {
    p_mpa * 1.0e3 / (rho * GRAVITY)
}

/// Wet granite solidus mapped onto depth for a crust of density `rho`.
pub fn granite_wet(rho: f64) -> SolidusCurve {
    let points = WET_GRANITE_SOLIDUS
        .iter()
        .map(|&(t_c, p_mpa)| (t_c, crustal_depth_km(p_mpa, rho)))
        .collect();
    SolidusCurve {
        label: "wet granite solidus",
        points,
    }
}

/// Dry granite solidus from the surface down to the Moho.
pub fn granite_dry(rho: f64, moho_km: f64) -> SolidusCurve {
    let p_moho_mpa = rho * GRAVITY * moho_km * 1.0e3 / 1.0e6;
    let t_moho_c = (p_moho_mpa + DRY_GRANITE_INTERCEPT_MPA) / DRY_GRANITE_SLOPE_MPA_C;
    let t_surface_c = DRY_GRANITE_INTERCEPT_MPA / DRY_GRANITE_SLOPE_MPA_C;
    SolidusCurve {
        label: "dry granite solidus",
        points: vec![(t_surface_c, 0.0), (t_moho_c, moho_km)],
    }
}

/// Dry peridotite solidus temperature [deg C] at pressure `p_gpa`,
/// Hirschmann (2000), eq. 10.
pub fn peridotite_solidus_c(p_gpa: f64) -> f64 {
    -5.104 * p_gpa * p_gpa + 132.899 * p_gpa + 1120.661
}

/// Dry peridotite solidus across the mantle layer. `pressure_gpa`
/// maps a depth [km] to lithostatic pressure [GPa].
pub fn peridotite<F>(pressure_gpa: F, moho_km: f64, lab_km: f64, samples: usize) -> SolidusCurve
where
    F: Fn(f64) -> f64,
{
    let n = samples.max(2);
    let step = (lab_km - moho_km) / (n - 1) as f64;
    let points = (0..n)
        .map(|i| {
            let z = moho_km + step * i as f64;
            (peridotite_solidus_c(pressure_gpa(z)), z)
        })
        .collect();
    SolidusCurve {
        label: "dry peridotite solidus",
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wet_solidus_reaches_the_surface() {
        let curve = granite_wet(2750.0);
        let last = curve.points[curve.points.len() - 1];
        assert_eq!(last, (961.86, 0.0));
        // 1297.289 MPa in a 2750 kg/m^3 crust
        assert!((curve.points[0].1 - 48.105).abs() < 1e-2);
    }

    #[test]
    fn test_wet_solidus_temperature_decreases_upward_in_the_table() {
        for w in WET_GRANITE_SOLIDUS.windows(2) {
            assert!(w[1].0 > w[0].0);
            assert!(w[1].1 < w[0].1);
        }
    }

    #[test]
    fn test_dry_solidus_moho_intersection() {
        let curve = granite_dry(2750.0, 34.4);
        assert!((curve.points[0].0 - 961.86).abs() < 0.01);
        assert!(
            (curve.points[1].0 - 1055.282889224572).abs() < 1e-9,
            "dry solidus at the Moho: {}",
            curve.points[1].0
        );
    }

    #[test]
    fn test_peridotite_polynomial_anchor_points() {
        assert!((peridotite_solidus_c(0.0) - 1120.661).abs() < 1e-9);
        // Lithostatic 0.92771 GPa at a 34.4 km Moho
        let t = peridotite_solidus_c(0.92770909);
        assert!((t - 1239.56).abs() < 0.05, "T = {t}");
    }

    #[test]
    fn test_peridotite_curve_spans_the_mantle_layer() {
        let curve = peridotite(|z| 0.03 * z, 34.4, 81.0, 33);
        assert_eq!(curve.points.len(), 33);
        assert!((curve.points[0].1 - 34.4).abs() < 1e-12);
        assert!((curve.points[32].1 - 81.0).abs() < 1e-12);
    }
}
