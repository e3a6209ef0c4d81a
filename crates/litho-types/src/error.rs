// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Error Types
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Unified error type shared by every crate in the workspace.

use thiserror::Error;

/// Workspace-wide error enum.
#[derive(Error, Debug)]
pub enum LithoError {
    /// A scalar input fell outside its physically meaningful range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Mesh construction with too few nodes to form a single interval.
    #[error("depth mesh needs at least 2 nodes, got {0}")]
    MeshTooCoarse(usize),

    /// A requested depth interval does not intersect the mesh.
    #[error("depth interval [{lo_km}, {hi_km}] km lies outside the mesh span [0, {max_km}] km")]
    DepthOutOfRange { lo_km: f64, hi_km: f64, max_km: f64 },

    /// A nodal profile does not line up with its mesh.
    #[error("profile has {profile} values but the mesh has {mesh} nodes")]
    LengthMismatch { mesh: usize, profile: usize },

    /// Creep or solidus evaluation hit a temperature at or below 0 K.
    #[error("non-physical temperature {t_k} K at {z_km} km depth")]
    NonPhysicalTemperature { t_k: f64, z_km: f64 },

    /// Scenario configuration that parsed but cannot be run.
    #[error("scenario config: {0}")]
    Config(String),

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type LithoResult<T> = Result<T, LithoError>;

impl LithoError {
    /// Shorthand used by validation helpers.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
