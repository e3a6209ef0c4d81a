// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Physical Constants
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Physical constants and reference values for lithosphere strength
//! modelling. Laboratory-derived flow-law parameters live in
//! `litho-mech`; everything here is either a universal constant or a
//! reference property of a generic continental lithosphere column.

/// Standard gravitational acceleration [m/s^2].
pub const GRAVITY: f64 = 9.80665;

/// Molar gas constant [J/(mol K)] (CODATA 2010).
pub const GAS_CONSTANT: f64 = 8.3144621;

/// Absolute zero offset for Celsius conversion [K].
pub const CELSIUS_OFFSET: f64 = 273.15;

// ── Reference lithosphere column ─────────────────────────────────────────────

/// Mean density of the continental crust [kg/m^3].
pub const RHO_CRUST: f64 = 2750.0;

/// Mean density of the lithospheric mantle [kg/m^3].
pub const RHO_MANTLE: f64 = 3330.0;

/// Global average depth of the continental Moho [km]
/// (Huang et al. 2013, doi:10.1002/jgrb.50138).
pub const MOHO_DEPTH_KM: f64 = 34.4;

/// Average thickness of the continental lithosphere [km], i.e. the
/// depth of the lithosphere-asthenosphere boundary. Averaged from the
/// 180 km (tectonosphere) and 60 km (seismic) end-member estimates.
pub const LAB_DEPTH_KM: f64 = 81.0;

/// Annual mean surface temperature [K] (7.5 C).
pub const SURFACE_TEMPERATURE_K: f64 = 280.65;

/// Reference tectonic strain rate [1/s].
pub const REFERENCE_STRAIN_RATE: f64 = 1.0e-14;

// ── Byerlee frictional defaults ──────────────────────────────────────────────

/// Coefficient of internal friction for the upper crust, Byerlee (1978).
pub const BYERLEE_FRICTION: f64 = 0.73;

/// Hydrostatic pore-fluid factor for a crust of average density,
/// lambda = rho_water / rho_crust.
pub const HYDROSTATIC_LAMBDA: f64 = 0.36;

// ── Mesh defaults ────────────────────────────────────────────────────────────

/// Default number of depth nodes per profile (2^12).
pub const DEFAULT_MESH_RESOLUTION: usize = 4096;
