// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Al2SiO5 Phase Boundaries
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Kyanite-andalusite-sillimanite phase boundaries around the Al2SiO5
//! triple point, for either the Holdaway (1971) or the Pattison
//! (1992) calibration. Boundaries are straight segments in
//! (temperature [deg C], depth [km]) space, good enough at the scale
//! of a whole-crust figure.

use litho_types::config::TriplePointCalibration;
use litho_types::constants::GRAVITY;

/// Triple point and the three boundary segments radiating from it.
#[derive(Debug, Clone, Copy)]
pub struct PhaseBoundaries {
    pub calibration: TriplePointCalibration,
    pub triple_point_c: f64,
    pub triple_point_km: f64,
    /// Kyanite-andalusite boundary, surface end first.
    pub ky_and: [(f64, f64); 2],
    /// Andalusite-sillimanite boundary, triple point first.
    pub and_sill: [(f64, f64); 2],
    /// Kyanite-sillimanite boundary, triple point first.
    pub ky_sill: [(f64, f64); 2],
    /// Field labels placed between the boundaries.
    pub labels: [(&'static str, f64, f64); 2],
}

/// Triple-point pressure [Pa] and temperature [deg C], plus the
/// surface intersection of the andalusite-sillimanite boundary.
fn calibration_data(cal: TriplePointCalibration) -> (f64, f64, f64) {
    match cal {
        // Holdaway (1971): 3.8 kbar, 500 C
        TriplePointCalibration::Holdaway => (3800.0e5, 500.0, 602.85),
        // Pattison (1992): 4.5 kbar, 550 C
        TriplePointCalibration::Pattison => (4500.0e5, 550.0, 800.0),
    }
}

pub fn boundaries(
    cal: TriplePointCalibration,
    crust_density: f64,
    moho_km: f64,
) -> PhaseBoundaries {
    let (p_pa, t_c, and_sill_surface_c) = calibration_data(cal);
    let z_km = p_pa / (crust_density * GRAVITY) / 1.0e3;
    PhaseBoundaries {
        calibration: cal,
        triple_point_c: t_c,
        triple_point_km: z_km,
        ky_and: [(154.85, 0.0), (t_c, z_km)],
        and_sill: [(t_c, z_km), (and_sill_surface_c, 0.0)],
        ky_sill: [(t_c, z_km), (696.85, moho_km)],
        labels: [("And", 375.0, 5.0), ("Sill", 650.0, 15.0)],
    }
}
