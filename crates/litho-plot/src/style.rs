// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Figure Style
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Shared colours, fonts and layout metrics. The palette and the grey
//! panel with white grid lines follow the ggplot look.

pub const FIGURE_BG: &str = "#ffffff";
pub const PANEL_BG: &str = "#ebebeb";
pub const GRID: &str = "#ffffff";
pub const TEXT: &str = "#262626";
pub const TICK_TEXT: &str = "#4d4d4d";
pub const RULE: &str = "#000000";

/// Series colour cycle.
pub const SERIES: [&str; 7] = [
    "#e24a33", // red
    "#348abd", // blue
    "#988ed5", // purple
    "#777777", // grey
    "#fbc15e", // yellow
    "#8eba42", // green
    "#ffb5b8", // pink
];

pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
pub const FONT_SIZE_TICK: f64 = 11.0;
pub const FONT_SIZE_LABEL: f64 = 13.0;
pub const FONT_SIZE_ANNOTATION: f64 = 10.0;

pub const MARGIN_LEFT: f64 = 64.0;
pub const MARGIN_RIGHT: f64 = 24.0;
pub const MARGIN_TOP: f64 = 64.0;
pub const MARGIN_BOTTOM: f64 = 28.0;
pub const PANEL_GAP: f64 = 56.0;

pub const LINE_WIDTH: f64 = 1.6;
pub const ENVELOPE_WIDTH: f64 = 2.6;
pub const RULE_WIDTH: f64 = 1.0;
pub const GRID_WIDTH: f64 = 1.0;

/// Dash patterns.
pub const DASH_PROJECTED: &str = "6 4";
pub const DASH_SOLIDUS: &str = "7 3";
pub const DASH_DOTTED: &str = "2 3";
