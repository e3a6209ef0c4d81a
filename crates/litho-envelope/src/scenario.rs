// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Scenario Runner
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! End-to-end evaluation of one scenario: mesh, geotherm, strength
//! envelope and the headline numbers reported to the user.

use serde::Serialize;
use tracing::debug;

use litho_thermal::geotherm::{self, GeothermSummary};
use litho_types::config::ScenarioConfig;
use litho_types::error::LithoResult;
use litho_types::mesh::{DepthMesh, Geotherm};

use crate::envelope::{self, StrengthEnvelope};

/// Scalar figures of merit of an assembled envelope.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnvelopeMetrics {
    /// Largest supportable differential stress [MPa].
    pub peak_strength_mpa: f64,
    /// Depth of the strength peak [km].
    pub peak_depth_km: f64,
    /// Depth-integrated strength of the column [TN/m].
    pub integrated_tn_m: f64,
}

/// Everything produced by one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub config: ScenarioConfig,
    pub geotherm: Geotherm,
    pub thermal_summary: GeothermSummary,
    pub envelope: StrengthEnvelope,
    pub metrics: EnvelopeMetrics,
}

/// Runs a scenario from a validated configuration.
pub fn run(cfg: &ScenarioConfig) -> LithoResult<ScenarioReport> {
    cfg.validate()?;
    let mesh = DepthMesh::new(cfg.moho_km, cfg.lab_km, cfg.mesh_resolution)?;
    debug!(nodes = mesh.len(), lab_km = cfg.lab_km, "mesh built");

    let geo = geotherm::steady_state(&mesh, cfg.surface_temperature_k, &cfg.thermal)?;
    let thermal_summary = geotherm::summarize(&geo, &cfg.thermal);
    debug!(
        t_moho_c = thermal_summary.t_moho_c,
        t_lab_c = thermal_summary.t_lab_c,
        "geotherm solved"
    );

    let env = envelope::assemble(cfg, &geo)?;
    let metrics = metrics_of(&env, &geo);
    debug!(
        crust_bdt_km = ?env.crust_bdt_km,
        mantle_bdt_km = ?env.mantle_bdt_km,
        peak_mpa = metrics.peak_strength_mpa,
        "envelope assembled"
    );

    Ok(ScenarioReport {
        config: cfg.clone(),
        geotherm: geo,
        thermal_summary,
        envelope: env,
        metrics,
    })
}

fn metrics_of(env: &StrengthEnvelope, geo: &Geotherm) -> EnvelopeMetrics {
    let mut peak_i = 0;
    for i in 1..env.envelope_mpa.len() {
        if env.envelope_mpa[i] > env.envelope_mpa[peak_i] {
            peak_i = i;
        }
    }
    // Trapezoidal integral in MPa km, reported in TN/m (1 MPa km =
    // 10^-3 TN/m).
    let sum: f64 = env.envelope_mpa.sum();
    let ends = 0.5 * (env.envelope_mpa[0] + env.envelope_mpa[env.envelope_mpa.len() - 1]);
    let integral_mpa_km = (sum - ends) * geo.mesh.dz_km;
    EnvelopeMetrics {
        peak_strength_mpa: env.envelope_mpa[peak_i],
        peak_depth_km: geo.mesh.z_km[peak_i],
        integrated_tn_m: integral_mpa_km * 1.0e-3,
    }
}

impl ScenarioReport {
    /// Plain-text summary for terminal output.
    pub fn summary_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("scenario: {}\n", self.config.name));
        out.push_str(&format!("{}\n", self.thermal_summary));
        match self.envelope.crust_bdt_km {
            Some(z) => out.push_str(&format!("crust BDT       = {z:.2} km\n")),
            None => out.push_str("crust BDT       = none (brittle throughout)\n"),
        }
        match self.envelope.mantle_bdt_km {
            Some(z) => out.push_str(&format!("mantle BDT      = {z:.2} km\n")),
            None => out.push_str("mantle BDT      = none (brittle throughout)\n"),
        }
        out.push_str(&format!(
            "peak strength   = {:.1} MPa at {:.2} km\n",
            self.metrics.peak_strength_mpa, self.metrics.peak_depth_km
        ));
        out.push_str(&format!(
            "integrated      = {:.2} TN/m\n",
            self.metrics.integrated_tn_m
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litho_types::config::FaultRegime;

    #[test]
    fn test_reference_scenario_metrics() {
        let report = run(&ScenarioConfig::default()).unwrap();
        let m = report.metrics;
        assert!(
            (m.peak_strength_mpa - 799.05230038497).abs() < 1e-6,
            "peak = {}",
            m.peak_strength_mpa
        );
        assert!(
            (m.peak_depth_km - 38.41318681318681).abs() < 1e-6,
            "peak depth = {}",
            m.peak_depth_km
        );
        assert!(
            (m.integrated_tn_m - 10.969895539487982).abs() < 1e-6,
            "integrated = {}",
            m.integrated_tn_m
        );
    }

    #[test]
    fn test_thrust_scenario_is_stronger_in_total() {
        let strike = run(&ScenarioConfig::default()).unwrap();
        let mut cfg = ScenarioConfig::default();
        cfg.friction.regime = FaultRegime::Thrust;
        cfg.name = "thrust".into();
        let thrust = run(&cfg).unwrap();
        assert!(
            (thrust.metrics.integrated_tn_m - 14.429926326462853).abs() < 1e-6,
            "integrated = {}",
            thrust.metrics.integrated_tn_m
        );
        assert!(thrust.metrics.integrated_tn_m > strike.metrics.integrated_tn_m);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut cfg = ScenarioConfig::default();
        cfg.friction.pore_pressure_ratio = 2.0;
        assert!(run(&cfg).is_err());
    }

    #[test]
    fn test_summary_text_mentions_the_transitions() {
        let report = run(&ScenarioConfig::default()).unwrap();
        let text = report.summary_text();
        assert!(text.contains("crust BDT"));
        assert!(text.contains("mantle BDT"));
        assert!(text.contains("peak strength"));
        assert!(text.contains("12.28 km"));
    }

    #[test]
    fn test_peak_sits_at_the_mantle_bdt_for_the_reference() {
        let report = run(&ScenarioConfig::default()).unwrap();
        let mantle_bdt = report.envelope.mantle_bdt_km.unwrap();
        // The brittle maximum sits one node above the takeover point.
        assert!((report.metrics.peak_depth_km - mantle_bdt).abs() <= report.geotherm.mesh.dz_km);
    }
}
