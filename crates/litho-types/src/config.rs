// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Scenario Configuration
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! JSON-backed scenario description. Every field carries a default
//! taken from the reference continental column, so an empty object
//! `{}` is a complete, runnable scenario.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::constants;
use crate::error::{LithoError, LithoResult};

// ── Enumerations ─────────────────────────────────────────────────────────────

/// Andersonian fault regime for the frictional (brittle) strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultRegime {
    Thrust,
    Normal,
    StrikeSlip,
}

impl fmt::Display for FaultRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thrust => write!(f, "thrust fault"),
            Self::Normal => write!(f, "normal fault"),
            Self::StrikeSlip => write!(f, "strike-slip fault"),
        }
    }
}

/// Published dislocation-creep flow laws for quartz aggregates.
///
/// Keys follow the source publications: Hirth et al. (2001),
/// Luan & Paterson (1992), Gleason & Tullis (1995), Holyoke &
/// Kronenberg (2010) and Rutter & Brodie (2004).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuartzFlowLaw {
    #[serde(rename = "HTD")]
    Htd,
    #[serde(rename = "LP_wet")]
    LpWet,
    #[serde(rename = "GT_wet")]
    GtWet,
    #[serde(rename = "HK_wet")]
    HkWet,
    #[serde(rename = "RB_wet")]
    RbWet,
}

impl QuartzFlowLaw {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Htd => "HTD",
            Self::LpWet => "LP_wet",
            Self::GtWet => "GT_wet",
            Self::HkWet => "HK_wet",
            Self::RbWet => "RB_wet",
        }
    }
}

impl fmt::Display for QuartzFlowLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Published dislocation-creep flow laws for olivine aggregates.
///
/// Keys follow Hirth & Kohlstedt (2003), Karato & Jung (2003) and
/// Zimmerman & Kohlstedt (2004).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OlivineFlowLaw {
    #[serde(rename = "HK_wet")]
    HkWet,
    #[serde(rename = "HK_dry")]
    HkDry,
    #[serde(rename = "KJ_wet")]
    KjWet,
    #[serde(rename = "KJ_dry")]
    KjDry,
    #[serde(rename = "ZK_dry")]
    ZkDry,
}

impl OlivineFlowLaw {
    pub fn key(&self) -> &'static str {
        match self {
            Self::HkWet => "HK_wet",
            Self::HkDry => "HK_dry",
            Self::KjWet => "KJ_wet",
            Self::KjDry => "KJ_dry",
            Self::ZkDry => "ZK_dry",
        }
    }
}

impl fmt::Display for OlivineFlowLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Deep boreholes with published temperature gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Borehole {
    Ktb,
    Kola,
    Gravberg,
}

impl fmt::Display for Borehole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ktb => write!(f, "KTB borehole"),
            Self::Kola => write!(f, "Kola borehole"),
            Self::Gravberg => write!(f, "Gravberg-1 borehole"),
        }
    }
}

/// Experimental calibrations of the Al2SiO5 triple point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriplePointCalibration {
    Holdaway,
    Pattison,
}

/// What the legend entry of the frictional strength curve says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionLegend {
    FaultType,
    Lambda,
    Mu,
}

// ── Nested sections ──────────────────────────────────────────────────────────

/// Thermal parameters of one layer of the column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayerThermal {
    /// Heat flux at the top of the layer [mW/m^2].
    pub heat_flux: f64,
    /// Average radiogenic heat production [uW/m^3].
    pub heat_production: f64,
    /// Thermal conductivity [W/(m K)].
    pub conductivity: f64,
}

/// Steady-state conductive geotherm inputs for both layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThermalConfig {
    #[serde(default = "default_crust_thermal")]
    pub crust: LayerThermal,
    #[serde(default = "default_mantle_thermal")]
    pub mantle: LayerThermal,
}

fn default_crust_thermal() -> LayerThermal {
    LayerThermal {
        heat_flux: 65.0,
        heat_production: 0.97,
        conductivity: 2.51,
    }
}

fn default_mantle_thermal() -> LayerThermal {
    LayerThermal {
        heat_flux: 34.0,
        heat_production: 0.01,
        conductivity: 3.35,
    }
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            crust: default_crust_thermal(),
            mantle: default_mantle_thermal(),
        }
    }
}

/// Byerlee-type frictional strength inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrictionConfig {
    #[serde(default = "default_regime")]
    pub regime: FaultRegime,
    /// Coefficient of internal friction.
    #[serde(default = "default_mu")]
    pub friction_coefficient: f64,
    /// Hubbert-Rubey pore-fluid factor, 0 = dry, 0.36 = hydrostatic.
    #[serde(default = "default_lambda")]
    pub pore_pressure_ratio: f64,
    /// Internal cohesion [MPa].
    #[serde(default)]
    pub cohesion_mpa: f64,
}

fn default_regime() -> FaultRegime {
    FaultRegime::StrikeSlip
}

fn default_mu() -> f64 {
    constants::BYERLEE_FRICTION
}

fn default_lambda() -> f64 {
    constants::HYDROSTATIC_LAMBDA
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            regime: default_regime(),
            friction_coefficient: default_mu(),
            pore_pressure_ratio: default_lambda(),
            cohesion_mpa: 0.0,
        }
    }
}

/// Dislocation-creep inputs for the ductile strength of both layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreepConfig {
    /// Reference strain rate [1/s].
    #[serde(default = "default_strain_rate")]
    pub strain_rate: f64,
    #[serde(default = "default_quartz_law")]
    pub quartz_law: QuartzFlowLaw,
    #[serde(default = "default_olivine_law")]
    pub olivine_law: OlivineFlowLaw,
    /// Shallowest depth at which crustal creep is evaluated [km].
    #[serde(default = "default_quartz_onset")]
    pub quartz_onset_km: f64,
    /// Average quartz grain size [um].
    #[serde(default = "default_quartz_grain")]
    pub quartz_grain_size_um: f64,
    /// Average olivine grain size [um].
    #[serde(default = "default_olivine_grain")]
    pub olivine_grain_size_um: f64,
    /// Grain size exponent m, zero for grain-size-insensitive creep.
    #[serde(default)]
    pub grain_size_exponent: f64,
    /// Water fugacity [MPa], zero to ignore the fugacity term.
    #[serde(default)]
    pub water_fugacity_mpa: f64,
    /// Water fugacity exponent r.
    #[serde(default)]
    pub fugacity_exponent: f64,
}

fn default_strain_rate() -> f64 {
    constants::REFERENCE_STRAIN_RATE
}

fn default_quartz_law() -> QuartzFlowLaw {
    QuartzFlowLaw::Htd
}

fn default_olivine_law() -> OlivineFlowLaw {
    OlivineFlowLaw::HkDry
}

fn default_quartz_onset() -> f64 {
    8.0
}

fn default_quartz_grain() -> f64 {
    35.0
}

fn default_olivine_grain() -> f64 {
    1000.0
}

impl Default for CreepConfig {
    fn default() -> Self {
        Self {
            strain_rate: default_strain_rate(),
            quartz_law: default_quartz_law(),
            olivine_law: default_olivine_law(),
            quartz_onset_km: default_quartz_onset(),
            quartz_grain_size_um: default_quartz_grain(),
            olivine_grain_size_um: default_olivine_grain(),
            grain_size_exponent: 0.0,
            water_fugacity_mpa: 0.0,
            fugacity_exponent: 0.0,
        }
    }
}

/// Layout and overlay selection for the rendered figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "default_width")]
    pub width_px: u32,
    #[serde(default = "default_height")]
    pub height_px: u32,
    /// Right edge of the differential stress axis [MPa].
    #[serde(default = "default_stress_max")]
    pub stress_max_mpa: f64,
    /// Right edge of the temperature axis [deg C].
    #[serde(default = "default_temperature_max")]
    pub temperature_max_c: f64,
    #[serde(default = "default_true")]
    pub show_goetze: bool,
    #[serde(default = "default_true")]
    pub show_granite_solidus: bool,
    #[serde(default)]
    pub show_peridotite_solidus: bool,
    #[serde(default = "default_boreholes")]
    pub boreholes: Vec<Borehole>,
    #[serde(default = "default_triple_point")]
    pub triple_point: Option<TriplePointCalibration>,
    #[serde(default = "default_friction_legend")]
    pub friction_legend: Option<FrictionLegend>,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    640
}

fn default_stress_max() -> f64 {
    600.0
}

fn default_temperature_max() -> f64 {
    1300.0
}

fn default_true() -> bool {
    true
}

fn default_boreholes() -> Vec<Borehole> {
    vec![Borehole::Ktb]
}

fn default_triple_point() -> Option<TriplePointCalibration> {
    Some(TriplePointCalibration::Holdaway)
}

fn default_friction_legend() -> Option<FrictionLegend> {
    Some(FrictionLegend::FaultType)
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_px: default_width(),
            height_px: default_height(),
            stress_max_mpa: default_stress_max(),
            temperature_max_c: default_temperature_max(),
            show_goetze: true,
            show_granite_solidus: true,
            show_peridotite_solidus: false,
            boreholes: default_boreholes(),
            triple_point: default_triple_point(),
            friction_legend: default_friction_legend(),
        }
    }
}

// ── Top-level scenario ───────────────────────────────────────────────────────

/// Complete description of one strength-envelope scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_moho")]
    pub moho_km: f64,
    #[serde(default = "default_lab")]
    pub lab_km: f64,
    #[serde(default = "default_resolution")]
    pub mesh_resolution: usize,
    #[serde(default = "default_t_surface")]
    pub surface_temperature_k: f64,
    /// Mean crust density [kg/m^3].
    #[serde(default = "default_rho_crust")]
    pub crust_density: f64,
    /// Mean lithospheric mantle density [kg/m^3].
    #[serde(default = "default_rho_mantle")]
    pub mantle_density: f64,
    #[serde(default)]
    pub thermal: ThermalConfig,
    #[serde(default)]
    pub friction: FrictionConfig,
    #[serde(default)]
    pub creep: CreepConfig,
    #[serde(default)]
    pub figure: FigureConfig,
}

fn default_name() -> String {
    "continental-reference".to_owned()
}

fn default_moho() -> f64 {
    constants::MOHO_DEPTH_KM
}

fn default_lab() -> f64 {
    constants::LAB_DEPTH_KM
}

fn default_resolution() -> usize {
    constants::DEFAULT_MESH_RESOLUTION
}

fn default_t_surface() -> f64 {
    constants::SURFACE_TEMPERATURE_K
}

fn default_rho_crust() -> f64 {
    constants::RHO_CRUST
}

fn default_rho_mantle() -> f64 {
    constants::RHO_MANTLE
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            moho_km: default_moho(),
            lab_km: default_lab(),
            mesh_resolution: default_resolution(),
            surface_temperature_k: default_t_surface(),
            crust_density: default_rho_crust(),
            mantle_density: default_rho_mantle(),
            thermal: ThermalConfig::default(),
            friction: FrictionConfig::default(),
            creep: CreepConfig::default(),
            figure: FigureConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Loads and validates a scenario from a JSON file.
    pub fn from_json_file(path: &Path) -> LithoResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty-printed JSON, used by `lithoenv init`.
    pub fn to_json_pretty(&self) -> LithoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects parameter combinations that parse but cannot be run.
    pub fn validate(&self) -> LithoResult<()> {
        if self.name.trim().is_empty() {
            return Err(LithoError::Config("scenario name is empty".into()));
        }
        check_positive("moho_km", self.moho_km)?;
        if self.lab_km <= self.moho_km {
            return Err(LithoError::invalid(
                "lab_km",
                self.lab_km,
                "must lie below the Moho",
            ));
        }
        if self.mesh_resolution < 2 {
            return Err(LithoError::MeshTooCoarse(self.mesh_resolution));
        }
        check_positive("surface_temperature_k", self.surface_temperature_k)?;
        check_positive("crust_density", self.crust_density)?;
        check_positive("mantle_density", self.mantle_density)?;

        check_positive("crust.conductivity", self.thermal.crust.conductivity)?;
        check_positive("mantle.conductivity", self.thermal.mantle.conductivity)?;
        check_finite("crust.heat_flux", self.thermal.crust.heat_flux)?;
        check_finite("mantle.heat_flux", self.thermal.mantle.heat_flux)?;
        check_finite("crust.heat_production", self.thermal.crust.heat_production)?;
        check_finite("mantle.heat_production", self.thermal.mantle.heat_production)?;

        check_positive("friction_coefficient", self.friction.friction_coefficient)?;
        let lambda = self.friction.pore_pressure_ratio;
        if !(0.0..1.0).contains(&lambda) {
            return Err(LithoError::invalid(
                "pore_pressure_ratio",
                lambda,
                "must lie in [0, 1)",
            ));
        }
        if self.friction.cohesion_mpa < 0.0 || !self.friction.cohesion_mpa.is_finite() {
            return Err(LithoError::invalid(
                "cohesion_mpa",
                self.friction.cohesion_mpa,
                "must be zero or positive",
            ));
        }

        check_positive("strain_rate", self.creep.strain_rate)?;
        check_positive("quartz_grain_size_um", self.creep.quartz_grain_size_um)?;
        check_positive("olivine_grain_size_um", self.creep.olivine_grain_size_um)?;
        let onset = self.creep.quartz_onset_km;
        if !onset.is_finite() || onset < 0.0 || onset > self.moho_km {
            return Err(LithoError::invalid(
                "quartz_onset_km",
                onset,
                "must lie between the surface and the Moho",
            ));
        }
        if self.creep.water_fugacity_mpa < 0.0 {
            return Err(LithoError::invalid(
                "water_fugacity_mpa",
                self.creep.water_fugacity_mpa,
                "must be zero or positive",
            ));
        }

        check_positive("stress_max_mpa", self.figure.stress_max_mpa)?;
        check_positive("temperature_max_c", self.figure.temperature_max_c)?;
        if self.figure.width_px < 320 || self.figure.height_px < 240 {
            return Err(LithoError::Config(format!(
                "figure size {}x{} px is below the 320x240 minimum",
                self.figure.width_px, self.figure.height_px
            )));
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> LithoResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LithoError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

fn check_finite(name: &'static str, value: f64) -> LithoResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LithoError::invalid(name, value, "must be finite and non-negative"));
    }
    Ok(())
}
