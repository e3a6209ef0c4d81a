// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Figure Rendering
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! SVG rendering of the two-panel strength and temperature figure.

pub mod axes;
pub mod figure;
pub mod style;
pub mod svg;

pub use figure::{render, save_svg};
