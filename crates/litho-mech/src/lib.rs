// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Rock Mechanics
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Mechanical strength of lithospheric rocks: brittle faulting after
//! Anderson, power-law dislocation creep for quartz and olivine, the
//! lithostatic pressure of a two-layer column and recrystallised
//! grain size piezometry.

pub mod column;
pub mod creep;
pub mod flow_laws;
pub mod friction;
pub mod piezometer;

pub use creep::{CreepInputs, CreepProfile};
pub use flow_laws::FlowLawParams;
pub use friction::FrictionInputs;
pub use piezometer::QuartzPiezometer;
