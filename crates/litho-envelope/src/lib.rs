// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Envelope Assembly
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Combines the thermal and mechanical building blocks into yield
//! strength envelopes and runs complete scenarios.

pub mod envelope;
pub mod scenario;

pub use envelope::StrengthEnvelope;
pub use scenario::{run, EnvelopeMetrics, ScenarioReport};
