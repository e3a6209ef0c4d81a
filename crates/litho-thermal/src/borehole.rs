// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Borehole Temperature Profiles
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Linear temperature profiles of the three deepest scientific
//! boreholes, used as shallow ground truth next to a modelled
//! geotherm. The measured section ends at total depth; below that the
//! gradient is projected down to the Moho as a dashed guide.

use litho_types::config::Borehole;
use litho_types::constants::CELSIUS_OFFSET;

/// Published average gradient [K/km] and drilled depth [km].
///
/// KTB: Emmermann & Lauterjung (1997). Kola SG-3: Popov et al. (1999).
/// Gravberg-1: Lund & Zoback (1999).
fn gradient_and_depth(b: Borehole) -> (f64, f64) {
    match b {
        Borehole::Ktb => (27.5, 9.101),
        Borehole::Kola => (15.5, 12.262),
        Borehole::Gravberg => (16.1, 6.779),
    }
}

/// Straight-line borehole profile in figure coordinates,
/// (temperature [deg C], depth [km]).
#[derive(Debug, Clone, Copy)]
pub struct BoreholeProfile {
    pub borehole: Borehole,
    pub gradient_k_km: f64,
    pub drilled_depth_km: f64,
    /// Endpoints of the measured section.
    pub measured: [(f64, f64); 2],
    /// Endpoints of the dashed projection down to the Moho.
    pub projected: [(f64, f64); 2],
}

pub fn profile(b: Borehole, t_surface_k: f64, moho_km: f64) -> BoreholeProfile {
    let (gradient_k_km, drilled_depth_km) = gradient_and_depth(b);
    let t0_c = t_surface_k - CELSIUS_OFFSET;
    let t_bottom_c = t0_c + gradient_k_km * drilled_depth_km;
    let t_moho_c = t0_c + gradient_k_km * moho_km;
    BoreholeProfile {
        borehole: b,
        gradient_k_km,
        drilled_depth_km,
        measured: [(t0_c, 0.0), (t_bottom_c, drilled_depth_km)],
        projected: [(t_bottom_c, drilled_depth_km), (t_moho_c, moho_km)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litho_types::constants::{MOHO_DEPTH_KM, SURFACE_TEMPERATURE_K};

    #[test]
    fn test_ktb_bottom_hole_temperature() {
        let p = profile(Borehole::Ktb, SURFACE_TEMPERATURE_K, MOHO_DEPTH_KM);
        // 7.5 C + 27.5 K/km * 9.101 km
        assert!((p.measured[1].0 - 257.7775).abs() < 1e-9);
        assert!((p.measured[1].1 - 9.101).abs() < 1e-12);
    }

    #[test]
    fn test_projection_continues_the_measured_line() {
        for b in [Borehole::Ktb, Borehole::Kola, Borehole::Gravberg] {
            let p = profile(b, SURFACE_TEMPERATURE_K, MOHO_DEPTH_KM);
            assert_eq!(p.measured[1], p.projected[0]);
            assert!((p.projected[1].1 - MOHO_DEPTH_KM).abs() < 1e-12);
            let slope =
                (p.projected[1].0 - p.projected[0].0) / (p.projected[1].1 - p.projected[0].1);
            assert!((slope - p.gradient_k_km).abs() < 1e-9);
        }
    }

    #[test]
    fn test_kola_is_the_coolest_hole() {
        let ktb = profile(Borehole::Ktb, SURFACE_TEMPERATURE_K, MOHO_DEPTH_KM);
        let kola = profile(Borehole::Kola, SURFACE_TEMPERATURE_K, MOHO_DEPTH_KM);
        assert!(kola.gradient_k_km < ktb.gradient_k_km);
    }
}
