// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Steady-State Geotherm
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Two-layer steady-state conductive geotherm after Turcotte &
//! Schubert (2002), eq. 4.31. Within each layer
//!
//! ```text
//! T(z) = T_top + (Jq / K) (z - z0) - (A / 2K) (z - z0)^2
//! ```
//!
//! with the heat flux `Jq` in mW/m^2, heat production `A` in uW/m^3,
//! conductivity `K` in W/(m K) and depth in km. The metric prefixes
//! cancel, so the expression is evaluated directly in those units.
//! The mantle layer is anchored at the deepest crustal node, which
//! keeps the profile continuous across the Moho.

use ndarray::Array1;
use serde::Serialize;

use litho_types::config::{LayerThermal, ThermalConfig};
use litho_types::constants::CELSIUS_OFFSET;
use litho_types::error::{LithoError, LithoResult};
use litho_types::mesh::{DepthMesh, Geotherm};

/// Temperature of one conductive layer at `z_km`, anchored at
/// (`z0_km`, `t_top_k`).
fn layer_t(p: &LayerThermal, t_top_k: f64, z0_km: f64, z_km: f64) -> f64 {
    let dz = z_km - z0_km;
    t_top_k + (p.heat_flux / p.conductivity) * dz
        - (p.heat_production / (2.0 * p.conductivity)) * dz * dz
}

/// Builds the steady-state geotherm of a two-layer column on `mesh`.
///
/// Fails if a layer conductivity is non-positive or if the resulting
/// profile reaches 0 K or below anywhere, which would poison every
/// downstream Arrhenius term.
pub fn steady_state(
    mesh: &DepthMesh,
    t_surface_k: f64,
    thermal: &ThermalConfig,
) -> LithoResult<Geotherm> {
    if !t_surface_k.is_finite() || t_surface_k <= 0.0 {
        return Err(LithoError::invalid(
            "t_surface_k",
            t_surface_k,
            "must be positive",
        ));
    }
    for (name, k) in [
        ("crust.conductivity", thermal.crust.conductivity),
        ("mantle.conductivity", thermal.mantle.conductivity),
    ] {
        if !k.is_finite() || k <= 0.0 {
            return Err(LithoError::invalid(name, k, "must be positive"));
        }
    }

    let mut t_k = Array1::zeros(mesh.len());
    let crust = mesh.crust_nodes();
    let mantle = mesh.mantle_nodes();

    for i in crust.clone() {
        t_k[i] = layer_t(&thermal.crust, t_surface_k, 0.0, mesh.z_km[i]);
    }

    // Anchor the mantle segment at the deepest crustal node.
    let z_anchor = mesh.z_km[crust.end - 1];
    let t_anchor = t_k[crust.end - 1];
    for i in mantle {
        t_k[i] = layer_t(&thermal.mantle, t_anchor, z_anchor, mesh.z_km[i]);
    }

    if let Some(i) = t_k.iter().position(|&t| !t.is_finite() || t <= 0.0) {
        return Err(LithoError::NonPhysicalTemperature {
            t_k: t_k[i],
            z_km: mesh.z_km[i],
        });
    }
    Geotherm::new(mesh.clone(), t_k)
}

/// Headline numbers of a geotherm, in the units geoscientists quote.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeothermSummary {
    /// Thermal gradient at the top of the crust [K/km].
    pub crust_gradient_k_km: f64,
    /// Thermal gradient at the top of the mantle layer [K/km].
    pub mantle_gradient_k_km: f64,
    /// Temperature at the Moho [deg C].
    pub t_moho_c: f64,
    /// Temperature at the base of the lithosphere [deg C].
    pub t_lab_c: f64,
}

pub fn summarize(geo: &Geotherm, thermal: &ThermalConfig) -> GeothermSummary {
    GeothermSummary {
        crust_gradient_k_km: thermal.crust.heat_flux / thermal.crust.conductivity,
        mantle_gradient_k_km: thermal.mantle.heat_flux / thermal.mantle.conductivity,
        t_moho_c: geo.t_moho_k() - CELSIUS_OFFSET,
        t_lab_c: geo.t_lab_k() - CELSIUS_OFFSET,
    }
}

impl std::fmt::Display for GeothermSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "crust gradient  = {:.1} K/km", self.crust_gradient_k_km)?;
        writeln!(f, "mantle gradient = {:.1} K/km", self.mantle_gradient_k_km)?;
        writeln!(f, "T at Moho       = {:.1} C", self.t_moho_c)?;
        write!(f, "T at LAB        = {:.1} C", self.t_lab_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litho_types::constants::SURFACE_TEMPERATURE_K;

    fn reference() -> Geotherm {
        let mesh = DepthMesh::continental();
        steady_state(&mesh, SURFACE_TEMPERATURE_K, &ThermalConfig::default()).unwrap()
    }

    #[test]
    fn test_surface_node_is_surface_temperature() {
        let geo = reference();
        assert!((geo.t_k[0] - SURFACE_TEMPERATURE_K).abs() < 1e-12);
    }

    #[test]
    fn test_reference_moho_and_lab_temperatures() {
        let geo = reference();
        // Analytic values for 65/0.97/2.51 crust over 34/0.01/3.35 mantle.
        assert!(
            (geo.t_moho_k() - 942.8294422310757).abs() < 2e-2,
            "T_moho = {} K",
            geo.t_moho_k()
        );
        assert!(
            (geo.t_lab_k() - 1412.537833609381).abs() < 1e-6,
            "T_lab = {} K",
            geo.t_lab_k()
        );
    }

    #[test]
    fn test_profile_is_continuous_across_the_moho() {
        let geo = reference();
        let crust = geo.mesh.crust_nodes();
        let jump = geo.t_k[crust.end] - geo.t_k[crust.end - 1];
        let typical = geo.t_k[crust.end - 1] - geo.t_k[crust.end - 2];
        assert!(jump.abs() < 4.0 * typical.abs(), "Moho jump {jump} K");
    }

    #[test]
    fn test_summary_gradients() {
        let geo = reference();
        let s = summarize(&geo, &ThermalConfig::default());
        assert!((s.crust_gradient_k_km - 25.896414342629484).abs() < 1e-12);
        assert!((s.mantle_gradient_k_km - 10.149253731343283).abs() < 1e-12);
        assert!((s.t_moho_c - 669.68).abs() < 0.05);
        assert!((s.t_lab_c - 1139.39).abs() < 0.01);
    }

    #[test]
    fn test_monotonic_for_reference_inputs() {
        let geo = reference();
        for w in geo.t_k.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_rejects_non_positive_surface_temperature() {
        let mesh = DepthMesh::continental();
        assert!(steady_state(&mesh, 0.0, &ThermalConfig::default()).is_err());
        assert!(steady_state(&mesh, -10.0, &ThermalConfig::default()).is_err());
    }

    #[test]
    fn test_rejects_profile_that_freezes_over() {
        let mesh = DepthMesh::continental();
        let mut thermal = ThermalConfig::default();
        // Strong heat production with near-zero flux bends T below 0 K.
        thermal.crust.heat_flux = 0.1;
        thermal.crust.heat_production = 40.0;
        let err = steady_state(&mesh, 1.0, &thermal);
        assert!(matches!(
            err,
            Err(LithoError::NonPhysicalTemperature { .. })
        ));
    }
}
