// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Dislocation Creep Strength
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Steady-state differential stress of a power-law creeping rock,
//! solved for stress:
//!
//! ```text
//! sigma = (e d^m f^r exp((Q + P V) / (R T)) / A)^(1/n)
//! ```
//!
//! with strain rate `e` [1/s], grain size `d` [um], water fugacity
//! `f` [MPa], pressure `P` [Pa] and temperature `T` [K]. Stress comes
//! out in MPa because the flow-law factors `A` are tabulated in
//! MPa^-n. Grain size and fugacity terms default to neutral for the
//! grain-size-insensitive laws shipped in [`crate::flow_laws`].

use ndarray::Array1;
use std::ops::Range;

use litho_types::config::{CreepConfig, OlivineFlowLaw, QuartzFlowLaw};
use litho_types::constants::GAS_CONSTANT;
use litho_types::error::{LithoError, LithoResult};
use litho_types::mesh::Geotherm;

use crate::column;
use crate::flow_laws::{self, FlowLawParams};

/// Validated scenario-side creep inputs (everything but T and P).
#[derive(Debug, Clone, Copy)]
pub struct CreepInputs {
    /// Strain rate [1/s].
    pub strain_rate: f64,
    /// Average grain size [um].
    pub grain_size_um: f64,
    /// Grain size exponent m.
    pub grain_size_exponent: f64,
    /// Water fugacity [MPa].
    pub water_fugacity_mpa: f64,
    /// Water fugacity exponent r.
    pub fugacity_exponent: f64,
}

impl CreepInputs {
    pub fn new(
        strain_rate: f64,
        grain_size_um: f64,
        grain_size_exponent: f64,
        water_fugacity_mpa: f64,
        fugacity_exponent: f64,
    ) -> LithoResult<Self> {
        if !strain_rate.is_finite() || strain_rate <= 0.0 {
            return Err(LithoError::invalid(
                "strain_rate",
                strain_rate,
                "must be positive",
            ));
        }
        if !grain_size_um.is_finite() || grain_size_um <= 0.0 {
            return Err(LithoError::invalid(
                "grain_size_um",
                grain_size_um,
                "must be positive",
            ));
        }
        if fugacity_exponent != 0.0 && water_fugacity_mpa <= 0.0 {
            return Err(LithoError::invalid(
                "water_fugacity_mpa",
                water_fugacity_mpa,
                "must be positive when the fugacity exponent is non-zero",
            ));
        }
        Ok(Self {
            strain_rate,
            grain_size_um,
            grain_size_exponent,
            water_fugacity_mpa,
            fugacity_exponent,
        })
    }

    /// Reference tectonic conditions for a given grain size.
    pub fn reference(grain_size_um: f64) -> LithoResult<Self> {
        Self::new(
            litho_types::constants::REFERENCE_STRAIN_RATE,
            grain_size_um,
            0.0,
            0.0,
            0.0,
        )
    }

    /// Inputs for the crustal (quartz) layer of a scenario.
    pub fn quartz_from_config(cfg: &CreepConfig) -> LithoResult<Self> {
        Self::new(
            cfg.strain_rate,
            cfg.quartz_grain_size_um,
            cfg.grain_size_exponent,
            cfg.water_fugacity_mpa,
            cfg.fugacity_exponent,
        )
    }

    /// Inputs for the mantle (olivine) layer of a scenario.
    pub fn olivine_from_config(cfg: &CreepConfig) -> LithoResult<Self> {
        Self::new(
            cfg.strain_rate,
            cfg.olivine_grain_size_um,
            cfg.grain_size_exponent,
            cfg.water_fugacity_mpa,
            cfg.fugacity_exponent,
        )
    }
}

/// Creep strength [MPa] at temperature `t_k` and pressure
/// `pressure_pa`.
pub fn differential_stress_mpa(
    law: &FlowLawParams,
    inputs: &CreepInputs,
    t_k: f64,
    pressure_pa: f64,
) -> LithoResult<f64> {
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(LithoError::invalid(
            "t_k",
            t_k,
            "temperature must be above absolute zero",
        ));
    }
    if !pressure_pa.is_finite() || pressure_pa < 0.0 {
        return Err(LithoError::invalid(
            "pressure_pa",
            pressure_pa,
            "must be zero or positive",
        ));
    }
    let grain = if inputs.grain_size_exponent == 0.0 {
        1.0
    } else {
        inputs.grain_size_um.powf(inputs.grain_size_exponent)
    };
    let fugacity = if inputs.fugacity_exponent == 0.0 {
        1.0
    } else {
        inputs.water_fugacity_mpa.powf(inputs.fugacity_exponent)
    };
    let arrhenius = ((law.q_j_mol + pressure_pa * law.v_m3_mol) / (GAS_CONSTANT * t_k)).exp();
    let sigma = (inputs.strain_rate * grain * fugacity * arrhenius / law.a).powf(1.0 / law.n);
    if !sigma.is_finite() {
        return Err(LithoError::invalid(
            "t_k",
            t_k,
            "Arrhenius term overflows at this temperature",
        ));
    }
    Ok(sigma)
}

/// Creep strength along a contiguous slice of mesh nodes.
#[derive(Debug, Clone)]
pub struct CreepProfile {
    /// Flow-law key, e.g. `HTD` or `HK_dry`.
    pub law_key: &'static str,
    /// Mesh indices the profile covers.
    pub range: Range<usize>,
    /// Strength [MPa], one value per covered node.
    pub sigma_mpa: Array1<f64>,
}

impl CreepProfile {
    /// Depth [km] and strength [MPa] of the covered nodes.
    pub fn points<'a>(&'a self, geo: &'a Geotherm) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.range
            .clone()
            .zip(self.sigma_mpa.iter())
            .map(|(i, &s)| (geo.mesh.z_km[i], s))
    }
}

/// Quartz creep strength from the onset depth down to the Moho.
/// Quartz calibrations carry no activation volume, so the lithostatic
/// pressure never enters.
pub fn quartz_profile(
    law: QuartzFlowLaw,
    inputs: &CreepInputs,
    geo: &Geotherm,
    onset_km: f64,
) -> LithoResult<CreepProfile> {
    let params = flow_laws::quartz(law);
    let range = geo.mesh.span(onset_km, geo.mesh.moho_km)?;
    let mut sigma_mpa = Array1::zeros(range.len());
    for (k, i) in range.clone().enumerate() {
        sigma_mpa[k] = differential_stress_mpa(&params, inputs, geo.t_k[i], 0.0)?;
    }
    Ok(CreepProfile {
        law_key: law.key(),
        range,
        sigma_mpa,
    })
}

/// Olivine creep strength across the mantle layer, with the
/// lithostatic pressure of the two-layer column in the Arrhenius
/// term.
pub fn olivine_profile(
    law: OlivineFlowLaw,
    inputs: &CreepInputs,
    geo: &Geotherm,
    rho_crust: f64,
    rho_mantle: f64,
) -> LithoResult<CreepProfile> {
    let params = flow_laws::olivine(law);
    let range = geo.mesh.mantle_nodes();
    let mut sigma_mpa = Array1::zeros(range.len());
    for (k, i) in range.clone().enumerate() {
        let z = geo.mesh.z_km[i];
        let p = column::pressure_pa(z, geo.mesh.moho_km, rho_crust, rho_mantle);
        sigma_mpa[k] = differential_stress_mpa(&params, inputs, geo.t_k[i], p)?;
    }
    Ok(CreepProfile {
        law_key: law.key(),
        range,
        sigma_mpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use litho_types::config::ThermalConfig;
    use litho_types::constants::SURFACE_TEMPERATURE_K;
    use litho_types::mesh::DepthMesh;

    fn reference_geotherm() -> Geotherm {
        let mesh = DepthMesh::continental();
        litho_thermal::geotherm::steady_state(&mesh, SURFACE_TEMPERATURE_K, &ThermalConfig::default())
            .unwrap()
    }

    #[test]
    fn test_quartz_htd_at_600_kelvin() {
        let p = flow_laws::quartz(QuartzFlowLaw::Htd);
        let c = CreepInputs::reference(35.0).unwrap();
        let sigma = differential_stress_mpa(&p, &c, 600.0, 0.0).unwrap();
        assert!((sigma - 173.0379314963838).abs() < 1e-9, "sigma = {sigma}");
    }

    #[test]
    fn test_gleason_tullis_at_800_kelvin() {
        let p = flow_laws::quartz(QuartzFlowLaw::GtWet);
        let c = CreepInputs::reference(35.0).unwrap();
        let sigma = differential_stress_mpa(&p, &c, 800.0, 0.0).unwrap();
        assert!((sigma - 13.479769243912491).abs() < 1e-9, "sigma = {sigma}");
    }

    #[test]
    fn test_hot_rock_is_weaker() {
        let p = flow_laws::quartz(QuartzFlowLaw::Htd);
        let c = CreepInputs::reference(35.0).unwrap();
        let cold = differential_stress_mpa(&p, &c, 500.0, 0.0).unwrap();
        let hot = differential_stress_mpa(&p, &c, 900.0, 0.0).unwrap();
        assert!(cold > hot);
    }

    #[test]
    fn test_faster_strain_needs_more_stress() {
        let p = flow_laws::quartz(QuartzFlowLaw::GtWet);
        let slow = CreepInputs::new(1.0e-15, 35.0, 0.0, 0.0, 0.0).unwrap();
        let fast = CreepInputs::new(1.0e-12, 35.0, 0.0, 0.0, 0.0).unwrap();
        let s_slow = differential_stress_mpa(&p, &slow, 700.0, 0.0).unwrap();
        let s_fast = differential_stress_mpa(&p, &fast, 700.0, 0.0).unwrap();
        assert!(s_fast > s_slow);
        // n = 4: three decades of strain rate -> 10^(3/4) in stress
        assert!((s_fast / s_slow - 10f64.powf(0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_term_stiffens_olivine() {
        let p = flow_laws::olivine(OlivineFlowLaw::HkDry);
        let c = CreepInputs::reference(1000.0).unwrap();
        let shallow = differential_stress_mpa(&p, &c, 1200.0, 1.0e9).unwrap();
        let deep = differential_stress_mpa(&p, &c, 1200.0, 2.5e9).unwrap();
        assert!(deep > shallow);
    }

    #[test]
    fn test_olivine_reference_values_on_the_mesh() {
        let geo = reference_geotherm();
        let c = CreepInputs::reference(1000.0).unwrap();
        let prof = olivine_profile(OlivineFlowLaw::HkDry, &c, &geo, 2750.0, 3330.0).unwrap();
        let i60 = geo.mesh.nearest_index(60.0);
        let k60 = i60 - prof.range.start;
        // T = 1201.600 K and P = 1763.5 MPa at the node nearest 60 km
        assert!(
            (prof.sigma_mpa[k60] - 35.34133317978602).abs() < 1e-6,
            "sigma(60 km) = {}",
            prof.sigma_mpa[k60]
        );
        let last = prof.sigma_mpa[prof.sigma_mpa.len() - 1];
        assert!(
            (last - 4.333831788352805).abs() < 1e-6,
            "sigma(LAB) = {last}"
        );
    }

    #[test]
    fn test_quartz_profile_covers_onset_to_moho() {
        let geo = reference_geotherm();
        let c = CreepInputs::reference(35.0).unwrap();
        let prof = quartz_profile(QuartzFlowLaw::Htd, &c, &geo, 8.0).unwrap();
        let z_first = geo.mesh.z_km[prof.range.start];
        let z_last = geo.mesh.z_km[prof.range.end - 1];
        assert!(z_first >= 8.0 - 1e-9 && z_first < 8.0 + geo.mesh.dz_km);
        assert!(z_last <= geo.mesh.moho_km + 1e-9);
        assert!(z_last > geo.mesh.moho_km - geo.mesh.dz_km);
        assert_eq!(prof.sigma_mpa.len(), prof.range.len());
        assert_eq!(prof.law_key, "HTD");
    }

    #[test]
    fn test_creep_strength_decreases_downward_in_the_crust() {
        let geo = reference_geotherm();
        let c = CreepInputs::reference(35.0).unwrap();
        let prof = quartz_profile(QuartzFlowLaw::Htd, &c, &geo, 8.0).unwrap();
        for w in prof.sigma_mpa.windows(2) {
            assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn test_rejects_frozen_rock() {
        let p = flow_laws::quartz(QuartzFlowLaw::Htd);
        let c = CreepInputs::reference(35.0).unwrap();
        assert!(differential_stress_mpa(&p, &c, 0.0, 0.0).is_err());
        assert!(differential_stress_mpa(&p, &c, -5.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_wet_law_without_fugacity() {
        assert!(CreepInputs::new(1.0e-14, 35.0, 0.0, 0.0, 1.0).is_err());
        assert!(CreepInputs::new(1.0e-14, 35.0, 0.0, 50.0, 1.0).is_ok());
    }
}
