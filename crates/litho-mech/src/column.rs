// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Lithostatic Column
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Lithostatic pressure in a two-layer column. Below the Moho the
//! pressure uses the depth-weighted mean density of the overburden,
//!
//! ```text
//! rho_mean(z) = (moho / z) rho_crust + ((z - moho) / z) rho_mantle
//! ```
//!
//! so P = rho_mean g z stays exact for a sharp density step.

use litho_types::constants::GRAVITY;

/// Mean density of the rock column above depth `z_km` [kg/m^3].
pub fn mean_density(z_km: f64, moho_km: f64, rho_crust: f64, rho_mantle: f64) -> f64 {
    if z_km <= moho_km {
        rho_crust
    } else {
        (moho_km / z_km) * rho_crust + ((z_km - moho_km) / z_km) * rho_mantle
    }
}

/// Lithostatic pressure [Pa] at depth `z_km`.
pub fn pressure_pa(z_km: f64, moho_km: f64, rho_crust: f64, rho_mantle: f64) -> f64 {
    let z = z_km.max(0.0);
    mean_density(z, moho_km, rho_crust, rho_mantle) * GRAVITY * z * 1.0e3
}

/// Lithostatic pressure [GPa] at depth `z_km`.
pub fn pressure_gpa(z_km: f64, moho_km: f64, rho_crust: f64, rho_mantle: f64) -> f64 {
    pressure_pa(z_km, moho_km, rho_crust, rho_mantle) / 1.0e9
}

/// Goetze's criterion, differential stress bounded by the lithostatic
/// pressure (Briegel & Goetze 1978). P is linear within each layer,
/// so three vertices in (MPa, km) describe the whole line exactly.
pub fn goetze_line(moho_km: f64, lab_km: f64, rho_crust: f64, rho_mantle: f64) -> [(f64, f64); 3] {
    let p_moho = pressure_pa(moho_km, moho_km, rho_crust, rho_mantle) / 1.0e6;
    let p_lab = pressure_pa(lab_km, moho_km, rho_crust, rho_mantle) / 1.0e6;
    [(0.0, 0.0), (p_moho, moho_km), (p_lab, lab_km)]
}
