// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Shared Types
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Foundation crate of the LithoStrength workspace: physical
//! constants, the depth mesh, the geotherm state, scenario
//! configuration and the shared error type. Physics lives in
//! `litho-thermal` and `litho-mech`; this crate only defines the
//! vocabulary they share.

pub mod config;
pub mod constants;
pub mod error;
pub mod mesh;

pub use config::{
    Borehole, CreepConfig, FaultRegime, FigureConfig, FrictionConfig, FrictionLegend,
    LayerThermal, OlivineFlowLaw, QuartzFlowLaw, ScenarioConfig, ThermalConfig,
    TriplePointCalibration,
};
pub use error::{LithoError, LithoResult};
pub use mesh::{DepthMesh, Geotherm};
