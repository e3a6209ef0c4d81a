// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Thermal Modelling
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Thermal state of the lithosphere: conductive steady-state
//! geotherms, borehole gradients for shallow comparison, melting
//! curves and the Al2SiO5 phase boundaries drawn on the temperature
//! panel of a strength figure.

pub mod aluminosilicate;
pub mod borehole;
pub mod geotherm;
pub mod solidus;

pub use aluminosilicate::PhaseBoundaries;
pub use borehole::BoreholeProfile;
pub use geotherm::{steady_state, summarize, GeothermSummary};
pub use solidus::SolidusCurve;
