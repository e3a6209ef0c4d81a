// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Property Tests for Rock Mechanics
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

use litho_mech::column;
use litho_mech::creep::{self, CreepInputs};
use litho_mech::flow_laws;
use litho_mech::friction::{self, FrictionInputs};
use litho_mech::piezometer::{self, QuartzPiezometer};
use litho_types::config::{FaultRegime, OlivineFlowLaw, QuartzFlowLaw};
use proptest::prelude::*;

// ── Frictional strength ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_pore_fluid_weakens_every_regime(
        mu in 0.3f64..1.2,
        lambda in 0.01f64..0.95,
        z in 0.5f64..80.0,
    ) {
        let dry = FrictionInputs::new(mu, 0.0, 0.0, 2750.0).unwrap();
        let wet = FrictionInputs::new(mu, lambda, 0.0, 2750.0).unwrap();
        for regime in [FaultRegime::Thrust, FaultRegime::Normal, FaultRegime::StrikeSlip] {
            let s_dry = friction::differential_stress_mpa(regime, &dry, z);
            let s_wet = friction::differential_stress_mpa(regime, &wet, z);
            prop_assert!(s_wet < s_dry);
        }
    }

    #[test]
    fn prop_lambda_zero_reduces_to_dry_coulomb(
        mu in 0.3f64..1.2,
        z in 0.0f64..80.0,
    ) {
        // With lambda = 0 the Hubbert-Rubey form must equal the plain
        // Coulomb expression built from the same mu.
        let inputs = FrictionInputs::new(mu, 0.0, 0.0, 2750.0).unwrap();
        let root = (mu * mu + 1.0).sqrt();
        let lith = mu * 2750.0 * 9.80665 * z * 1.0e3;
        let expected = 2.0 * lith / (root - mu) / 1.0e6;
        let got = friction::differential_stress_mpa(FaultRegime::Thrust, &inputs, z);
        prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn prop_strength_grows_linearly_with_depth(
        mu in 0.3f64..1.2,
        lambda in 0.0f64..0.9,
        z in 1.0f64..40.0,
    ) {
        let inputs = FrictionInputs::new(mu, lambda, 0.0, 2750.0).unwrap();
        let s1 = friction::differential_stress_mpa(FaultRegime::StrikeSlip, &inputs, z);
        let s2 = friction::differential_stress_mpa(FaultRegime::StrikeSlip, &inputs, 2.0 * z);
        prop_assert!((s2 - 2.0 * s1).abs() <= 1e-9 * s2.abs().max(1.0));
    }

    #[test]
    fn prop_thrust_dominates_normal_faulting(
        mu in 0.3f64..1.2,
        lambda in 0.0f64..0.9,
        z in 0.5f64..80.0,
    ) {
        let inputs = FrictionInputs::new(mu, lambda, 0.0, 2900.0).unwrap();
        let thrust = friction::differential_stress_mpa(FaultRegime::Thrust, &inputs, z);
        let strike = friction::differential_stress_mpa(FaultRegime::StrikeSlip, &inputs, z);
        let normal = friction::differential_stress_mpa(FaultRegime::Normal, &inputs, z);
        prop_assert!(thrust >= strike);
        prop_assert!(strike >= normal);
        prop_assert!(normal >= 0.0);
    }
}

// ── Lithostatic column ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_mean_density_between_end_members(
        z in 0.1f64..200.0,
        moho in 20.0f64..60.0,
    ) {
        let rho = column::mean_density(z, moho, 2750.0, 3330.0);
        prop_assert!(rho >= 2750.0 - 1e-9);
        prop_assert!(rho <= 3330.0 + 1e-9);
    }

    #[test]
    fn prop_pressure_monotonic(
        z in 0.1f64..190.0,
        dz in 0.1f64..10.0,
    ) {
        let p1 = column::pressure_pa(z, 34.4, 2750.0, 3330.0);
        let p2 = column::pressure_pa(z + dz, 34.4, 2750.0, 3330.0);
        prop_assert!(p2 > p1);
    }
}

// ── Creep ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_creep_stress_positive_and_cooler_is_stronger(
        t in 400.0f64..1700.0,
        dt in 5.0f64..200.0,
    ) {
        let inputs = CreepInputs::reference(35.0).unwrap();
        for law in [QuartzFlowLaw::Htd, QuartzFlowLaw::GtWet, QuartzFlowLaw::RbWet] {
            let p = flow_laws::quartz(law);
            let warm = creep::differential_stress_mpa(&p, &inputs, t + dt, 0.0).unwrap();
            let cool = creep::differential_stress_mpa(&p, &inputs, t, 0.0).unwrap();
            prop_assert!(warm > 0.0);
            prop_assert!(cool > warm);
        }
    }

    #[test]
    fn prop_strain_rate_scaling_follows_the_exponent(
        decades in 1i32..4,
        t in 600.0f64..1500.0,
    ) {
        let p = flow_laws::olivine(OlivineFlowLaw::KjDry);
        let slow = CreepInputs::new(1.0e-15, 1000.0, 0.0, 0.0, 0.0).unwrap();
        let fast = CreepInputs::new(1.0e-15 * 10f64.powi(decades), 1000.0, 0.0, 0.0, 0.0).unwrap();
        let s_slow = creep::differential_stress_mpa(&p, &slow, t, 1.0e9).unwrap();
        let s_fast = creep::differential_stress_mpa(&p, &fast, t, 1.0e9).unwrap();
        let expected = 10f64.powf(decades as f64 / p.n);
        prop_assert!((s_fast / s_slow - expected).abs() < 1e-9 * expected);
    }
}

// ── Piezometry ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_piezometers_are_strictly_decreasing(
        d in 1.0f64..500.0,
        factor in 1.01f64..10.0,
    ) {
        for p in QuartzPiezometer::ALL {
            let fine = piezometer::differential_stress_mpa(p, d).unwrap();
            let coarse = piezometer::differential_stress_mpa(p, d * factor).unwrap();
            prop_assert!(fine > coarse);
        }
    }

    #[test]
    fn prop_twiss_conversion_only_rescales(
        d in 1.0f64..500.0,
    ) {
        // The ECD conversion is a fixed factor, so the Twiss estimate
        // relates to the unconverted power law by a constant ratio.
        let (b, p) = QuartzPiezometer::Twiss.coefficients();
        let raw = b * d.powf(-p);
        let got = piezometer::differential_stress_mpa(QuartzPiezometer::Twiss, d).unwrap();
        let ratio = (4.0 / std::f64::consts::PI).sqrt().powf(p);
        prop_assert!((got / raw - ratio).abs() < 1e-12 * ratio);
    }
}
