// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Frictional Strength
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Maximum differential stress supported by optimally oriented faults
//! under Anderson (1951) stress regimes, with Coulomb friction and
//! the Hubbert & Rubey (1959) pore-fluid correction. For a friction
//! coefficient `mu`, cohesion `C0` and pore-fluid factor `lambda`:
//!
//! ```text
//! thrust       ds =  2 (C0 + mu rho g z (1 - lambda)) / (sqrt(mu^2 + 1) - mu)
//! normal       ds = -2 (C0 - mu rho g z (1 - lambda)) / (sqrt(mu^2 + 1) + mu)
//! strike-slip  ds =  2 (C0 + mu rho g z (1 - lambda)) / sqrt(mu^2 + 1)
//! ```
//!
//! With `lambda = 0` this reduces to the dry Coulomb criterion; with
//! Byerlee's `mu = 0.73` and no cohesion it is the classical upper
//! bound on crustal strength.

use ndarray::Array1;

use litho_types::config::{FaultRegime, FrictionConfig};
use litho_types::constants::GRAVITY;
use litho_types::error::{LithoError, LithoResult};
use litho_types::mesh::DepthMesh;

/// Validated inputs for the frictional strength equations.
#[derive(Debug, Clone, Copy)]
pub struct FrictionInputs {
    /// Coefficient of internal friction.
    pub mu: f64,
    /// Hubbert-Rubey pore-fluid factor.
    pub lambda: f64,
    /// Internal cohesion [MPa].
    pub cohesion_mpa: f64,
    /// Rock density [kg/m^3].
    pub density: f64,
}

impl FrictionInputs {
    pub fn new(mu: f64, lambda: f64, cohesion_mpa: f64, density: f64) -> LithoResult<Self> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(LithoError::invalid("mu", mu, "must be positive"));
        }
        if !(0.0..1.0).contains(&lambda) {
            return Err(LithoError::invalid("lambda", lambda, "must lie in [0, 1)"));
        }
        if !cohesion_mpa.is_finite() || cohesion_mpa < 0.0 {
            return Err(LithoError::invalid(
                "cohesion_mpa",
                cohesion_mpa,
                "must be zero or positive",
            ));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(LithoError::invalid("density", density, "must be positive"));
        }
        Ok(Self {
            mu,
            lambda,
            cohesion_mpa,
            density,
        })
    }

    pub fn from_config(cfg: &FrictionConfig, density: f64) -> LithoResult<Self> {
        Self::new(
            cfg.friction_coefficient,
            cfg.pore_pressure_ratio,
            cfg.cohesion_mpa,
            density,
        )
    }

    /// Byerlee friction, hydrostatic pore fluid, no cohesion.
    pub fn byerlee(density: f64) -> LithoResult<Self> {
        Self::new(
            litho_types::constants::BYERLEE_FRICTION,
            litho_types::constants::HYDROSTATIC_LAMBDA,
            0.0,
            density,
        )
    }
}

/// Shear strength [MPa] of a fault plane carrying normal stress
/// `sigma_n_mpa`, the Coulomb criterion with the Hubbert-Rubey
/// pore-fluid correction. At `lambda = 0` this is Coulomb's law.
pub fn shear_strength_mpa(inputs: &FrictionInputs, sigma_n_mpa: f64) -> f64 {
    inputs.cohesion_mpa + inputs.mu * sigma_n_mpa * (1.0 - inputs.lambda)
}

/// Differential stress [MPa] on an optimally oriented fault at depth
/// `z_km`. Negative-depth inputs clamp to the surface value.
pub fn differential_stress_mpa(regime: FaultRegime, inputs: &FrictionInputs, z_km: f64) -> f64 {
    let z_m = z_km.max(0.0) * 1.0e3;
    let c0_pa = inputs.cohesion_mpa * 1.0e6;
    let effective_pa = inputs.mu * inputs.density * GRAVITY * z_m * (1.0 - inputs.lambda);
    let root = (inputs.mu * inputs.mu + 1.0).sqrt();
    let ds_pa = match regime {
        FaultRegime::Thrust => 2.0 * (c0_pa + effective_pa) / (root - inputs.mu),
        FaultRegime::Normal => -2.0 * (c0_pa - effective_pa) / (root + inputs.mu),
        FaultRegime::StrikeSlip => 2.0 * (c0_pa + effective_pa) / root,
    };
    ds_pa / 1.0e6
}

/// Frictional strength at every node of `mesh`.
pub fn strength_profile(
    regime: FaultRegime,
    inputs: &FrictionInputs,
    mesh: &DepthMesh,
) -> Array1<f64> {
    mesh.z_km
        .mapv(|z| differential_stress_mpa(regime, inputs, z))
}
