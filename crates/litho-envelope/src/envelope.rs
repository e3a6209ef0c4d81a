// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Yield Strength Envelope
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Assembly of the yield strength envelope: at every mesh node the
//! rock fails by whichever mechanism needs less differential stress,
//! so the envelope is the pointwise minimum of the frictional and the
//! creep strength. The shallowest node in each layer where creep
//! undercuts friction marks that layer's brittle-ductile transition.

use ndarray::Array1;

use litho_mech::column;
use litho_mech::creep::{self, CreepInputs, CreepProfile};
use litho_mech::friction::{self, FrictionInputs};
use litho_types::config::ScenarioConfig;
use litho_types::error::LithoResult;
use litho_types::mesh::Geotherm;

/// Nodal strength profiles of one scenario, all in MPa on the full
/// mesh. Ductile strength is NaN above the quartz onset depth where
/// no creep law applies.
#[derive(Debug, Clone)]
pub struct StrengthEnvelope {
    pub brittle_mpa: Array1<f64>,
    pub ductile_mpa: Array1<f64>,
    pub envelope_mpa: Array1<f64>,
    /// Crustal quartz creep section.
    pub quartz: CreepProfile,
    /// Mantle olivine creep section.
    pub olivine: CreepProfile,
    /// Brittle-ductile transition depth in the crust [km].
    pub crust_bdt_km: Option<f64>,
    /// Brittle-ductile transition depth in the mantle [km].
    pub mantle_bdt_km: Option<f64>,
}

/// Builds the envelope for a validated scenario on its geotherm.
pub fn assemble(cfg: &ScenarioConfig, geo: &Geotherm) -> LithoResult<StrengthEnvelope> {
    let mesh = &geo.mesh;
    let crust_inputs = FrictionInputs::from_config(&cfg.friction, cfg.crust_density)?;

    // Frictional strength, with the overburden mean density below
    // the Moho so the brittle curve stays continuous.
    let mut brittle_mpa = Array1::zeros(mesh.len());
    for (i, &z) in mesh.z_km.iter().enumerate() {
        let inputs = if z <= mesh.moho_km {
            crust_inputs
        } else {
            FrictionInputs {
                density: column::mean_density(z, mesh.moho_km, cfg.crust_density, cfg.mantle_density),
                ..crust_inputs
            }
        };
        brittle_mpa[i] = friction::differential_stress_mpa(cfg.friction.regime, &inputs, z);
    }

    let quartz_inputs = CreepInputs::quartz_from_config(&cfg.creep)?;
    let olivine_inputs = CreepInputs::olivine_from_config(&cfg.creep)?;
    let quartz = creep::quartz_profile(
        cfg.creep.quartz_law,
        &quartz_inputs,
        geo,
        cfg.creep.quartz_onset_km,
    )?;
    let olivine = creep::olivine_profile(
        cfg.creep.olivine_law,
        &olivine_inputs,
        geo,
        cfg.crust_density,
        cfg.mantle_density,
    )?;

    let mut ductile_mpa = Array1::from_elem(mesh.len(), f64::NAN);
    for (k, i) in quartz.range.clone().enumerate() {
        ductile_mpa[i] = quartz.sigma_mpa[k];
    }
    for (k, i) in olivine.range.clone().enumerate() {
        ductile_mpa[i] = olivine.sigma_mpa[k];
    }

    let envelope_mpa = ndarray::Zip::from(&brittle_mpa)
        .and(&ductile_mpa)
        .map_collect(|&b, &d| if d.is_nan() { b } else { b.min(d) });

    let crust_bdt_km = first_creep_controlled(&brittle_mpa, &ductile_mpa, &quartz.range)
        .map(|i| mesh.z_km[i]);
    let mantle_bdt_km = first_creep_controlled(&brittle_mpa, &ductile_mpa, &olivine.range)
        .map(|i| mesh.z_km[i]);

    Ok(StrengthEnvelope {
        brittle_mpa,
        ductile_mpa,
        envelope_mpa,
        quartz,
        olivine,
        crust_bdt_km,
        mantle_bdt_km,
    })
}

/// Shallowest node in `range` where creep needs no more stress than
/// friction.
fn first_creep_controlled(
    brittle: &Array1<f64>,
    ductile: &Array1<f64>,
    range: &std::ops::Range<usize>,
) -> Option<usize> {
    range.clone().find(|&i| ductile[i] <= brittle[i])
}
