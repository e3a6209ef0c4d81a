// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Dislocation Creep Flow Laws
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Published flow-law parameter sets for quartz and olivine
//! aggregates. Stresses are in MPa throughout, so the pre-exponential
//! factors carry MPa^-n units as tabulated in the source papers.

use litho_types::config::{OlivineFlowLaw, QuartzFlowLaw};

/// One dislocation-creep parameter set.
#[derive(Debug, Clone, Copy)]
pub struct FlowLawParams {
    /// Stress exponent n.
    pub n: f64,
    /// Activation energy Q [J/mol].
    pub q_j_mol: f64,
    /// Pre-exponential factor A [MPa^-n 1/s].
    pub a: f64,
    /// Activation volume V [m^3/mol], zero where the calibration
    /// ignores the pressure dependence.
    pub v_m3_mol: f64,
    /// Source publication.
    pub reference: &'static str,
}

/// Quartz aggregate parameters. All published quartz calibrations
/// here neglect the activation volume.
pub fn quartz(law: QuartzFlowLaw) -> FlowLawParams {
    match law {
        QuartzFlowLaw::Htd => FlowLawParams {
            n: 4.0,
            q_j_mol: 135.0e3,
            a: 10f64.powf(-11.2),
            v_m3_mol: 0.0,
            reference: "Hirth et al. (2001)",
        },
        QuartzFlowLaw::LpWet => FlowLawParams {
            n: 4.0,
            q_j_mol: 152.0e3,
            a: 10f64.powf(-7.2),
            v_m3_mol: 0.0,
            reference: "Luan & Paterson (1992)",
        },
        QuartzFlowLaw::GtWet => FlowLawParams {
            n: 4.0,
            q_j_mol: 223.0e3,
            a: 1.1e-4,
            v_m3_mol: 0.0,
            reference: "Gleason & Tullis (1995)",
        },
        QuartzFlowLaw::HkWet => FlowLawParams {
            n: 4.0,
            q_j_mol: 223.0e3,
            a: 5.1e-4,
            v_m3_mol: 0.0,
            reference: "Holyoke & Kronenberg (2010)",
        },
        QuartzFlowLaw::RbWet => FlowLawParams {
            n: 2.97,
            q_j_mol: 242.0e3,
            a: 10f64.powf(-4.93),
            v_m3_mol: 0.0,
            reference: "Rutter & Brodie (2004)",
        },
    }
}

/// Olivine aggregate parameters for the lithospheric mantle.
pub fn olivine(law: OlivineFlowLaw) -> FlowLawParams {
    match law {
        OlivineFlowLaw::HkWet => FlowLawParams {
            n: 3.5,
            q_j_mol: 520.0e3,
            a: 10f64.powf(3.2),
            v_m3_mol: 2.2e-5,
            reference: "Hirth & Kohlstedt (2003)",
        },
        OlivineFlowLaw::HkDry => FlowLawParams {
            n: 3.5,
            q_j_mol: 530.0e3,
            a: 10f64.powf(5.0),
            v_m3_mol: 1.8e-5,
            reference: "Hirth & Kohlstedt (2003)",
        },
        OlivineFlowLaw::KjWet => FlowLawParams {
            n: 3.0,
            q_j_mol: 470.0e3,
            a: 10f64.powf(2.9),
            v_m3_mol: 2.4e-5,
            reference: "Karato & Jung (2003)",
        },
        OlivineFlowLaw::KjDry => FlowLawParams {
            n: 3.0,
            q_j_mol: 510.0e3,
            a: 10f64.powf(6.1),
            v_m3_mol: 1.4e-5,
            reference: "Karato & Jung (2003)",
        },
        OlivineFlowLaw::ZkDry => FlowLawParams {
            n: 4.3,
            q_j_mol: 550.0e3,
            a: 10f64.powf(4.8),
            v_m3_mol: 0.0,
            reference: "Zimmerman & Kohlstedt (2004)",
        },
    }
}
