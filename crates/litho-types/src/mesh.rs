// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Depth Mesh and Geotherm State
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Uniform depth discretisation of a lithosphere column and the nodal
//! temperature profile defined on it. Every profile in the workspace
//! (temperature, differential stress, pressure) is a nodal array on a
//! [`DepthMesh`], so length checks live here rather than in each
//! physics crate.

use ndarray::Array1;
use std::ops::Range;

use crate::constants::{DEFAULT_MESH_RESOLUTION, LAB_DEPTH_KM, MOHO_DEPTH_KM};
use crate::error::{LithoError, LithoResult};

/// Node-matching tolerance when slicing depth intervals [km].
const DEPTH_TOL_KM: f64 = 1.0e-9;

/// Uniform mesh from the surface down to the base of the lithosphere.
///
/// Node 0 sits at the surface (0 km) and the last node at `lab_km`.
/// Depths are positive downwards and expressed in km throughout.
#[derive(Debug, Clone)]
pub struct DepthMesh {
    /// Node depths [km], strictly increasing from 0.
    pub z_km: Array1<f64>,
    /// Node spacing [km].
    pub dz_km: f64,
    /// Crust-mantle boundary depth [km].
    pub moho_km: f64,
    /// Lithosphere-asthenosphere boundary depth [km].
    pub lab_km: f64,
}

impl DepthMesh {
    /// Builds a mesh of `resolution` nodes spanning `[0, lab_km]`.
    pub fn new(moho_km: f64, lab_km: f64, resolution: usize) -> LithoResult<Self> {
        if resolution < 2 {
            return Err(LithoError::MeshTooCoarse(resolution));
        }
        if !moho_km.is_finite() || moho_km <= 0.0 {
            return Err(LithoError::invalid(
                "moho_km",
                moho_km,
                "must be a positive finite depth",
            ));
        }
        if !lab_km.is_finite() || lab_km <= moho_km {
            return Err(LithoError::invalid(
                "lab_km",
                lab_km,
                "must lie below the Moho",
            ));
        }
        let z_km = Array1::linspace(0.0, lab_km, resolution);
        let dz_km = lab_km / (resolution - 1) as f64;
        Ok(Self {
            z_km,
            dz_km,
            moho_km,
            lab_km,
        })
    }

    /// Reference continental column: 34.4 km Moho, 81 km lithosphere,
    /// 4096 nodes.
    pub fn continental() -> Self {
        let z_km = Array1::linspace(0.0, LAB_DEPTH_KM, DEFAULT_MESH_RESOLUTION);
        let dz_km = LAB_DEPTH_KM / (DEFAULT_MESH_RESOLUTION - 1) as f64;
        Self {
            z_km,
            dz_km,
            moho_km: MOHO_DEPTH_KM,
            lab_km: LAB_DEPTH_KM,
        }
    }

    pub fn len(&self) -> usize {
        self.z_km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z_km.is_empty()
    }

    /// Deepest node depth [km]. Equals `lab_km` by construction.
    pub fn max_depth_km(&self) -> f64 {
        self.z_km[self.len() - 1]
    }

    /// Half-open index range of the nodes inside `[lo_km, hi_km]`.
    pub fn span(&self, lo_km: f64, hi_km: f64) -> LithoResult<Range<usize>> {
        let out_of_range = LithoError::DepthOutOfRange {
            lo_km,
            hi_km,
            max_km: self.max_depth_km(),
        };
        if !lo_km.is_finite() || !hi_km.is_finite() || lo_km > hi_km {
            return Err(out_of_range);
        }
        let start = self
            .z_km
            .iter()
            .position(|&z| z >= lo_km - DEPTH_TOL_KM);
        let end = self
            .z_km
            .iter()
            .rposition(|&z| z <= hi_km + DEPTH_TOL_KM);
        match (start, end) {
            (Some(s), Some(e)) if s <= e => Ok(s..e + 1),
            _ => Err(out_of_range),
        }
    }

    /// Index range of the crustal nodes (depth at or above the Moho).
    pub fn crust_nodes(&self) -> Range<usize> {
        let end = self
            .z_km
            .iter()
            .rposition(|&z| z <= self.moho_km + DEPTH_TOL_KM)
            .map(|i| i + 1)
            .unwrap_or(0);
        0..end
    }

    /// Index range of the mantle nodes (strictly below the Moho).
    pub fn mantle_nodes(&self) -> Range<usize> {
        self.crust_nodes().end..self.len()
    }

    /// Index of the node nearest to `z_km`, clamped to the mesh.
    pub fn nearest_index(&self, z_km: f64) -> usize {
        if z_km <= 0.0 {
            return 0;
        }
        let i = (z_km / self.dz_km).round() as usize;
        i.min(self.len() - 1)
    }
}

/// Temperature profile [K] on a [`DepthMesh`].
#[derive(Debug, Clone)]
pub struct Geotherm {
    pub mesh: DepthMesh,
    /// Nodal temperatures [K], one per mesh node.
    pub t_k: Array1<f64>,
}

impl Geotherm {
    pub fn new(mesh: DepthMesh, t_k: Array1<f64>) -> LithoResult<Self> {
        if t_k.len() != mesh.len() {
            return Err(LithoError::LengthMismatch {
                mesh: mesh.len(),
                profile: t_k.len(),
            });
        }
        Ok(Self { mesh, t_k })
    }

    /// Temperature at an arbitrary depth by linear interpolation
    /// between the bracketing nodes, clamped at the profile ends.
    pub fn t_at(&self, z_km: f64) -> f64 {
        let n = self.mesh.len();
        if z_km <= 0.0 {
            return self.t_k[0];
        }
        if z_km >= self.mesh.max_depth_km() {
            return self.t_k[n - 1];
        }
        let i = ((z_km / self.mesh.dz_km) as usize).min(n - 2);
        let frac = (z_km - self.mesh.z_km[i]) / self.mesh.dz_km;
        self.t_k[i] * (1.0 - frac) + self.t_k[i + 1] * frac
    }

    /// Temperature at the crust-mantle boundary [K].
    pub fn t_moho_k(&self) -> f64 {
        self.t_at(self.mesh.moho_km)
    }

    /// Temperature at the base of the lithosphere [K].
    pub fn t_lab_k(&self) -> f64 {
        self.t_k[self.mesh.len() - 1]
    }

    /// Nodal temperatures converted to degrees Celsius.
    pub fn celsius(&self) -> Array1<f64> {
        self.t_k.mapv(|t| t - crate::constants::CELSIUS_OFFSET)
    }
}
