//! `Polyhedron`: flattened H-rep rows plus the derived vertex list.

use super::convert::{affine_rank, h_to_vertices, v_to_halfspaces};
use crate::error::{ElimError, Result};
use crate::field::OrderedField;

/// Polyhedron in R^n with both representations filled in.
///
/// Invariants:
/// - every row in `ieqs`/`eqns` has `ambient_dim + 1` entries `[b, a..]`;
/// - `vertices` is sorted and duplicate-free, each of length `ambient_dim`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyhedron<F> {
    ambient_dim: usize,
    ieqs: Vec<Vec<F>>,
    eqns: Vec<Vec<F>>,
    vertices: Vec<Vec<F>>,
}

impl<F: OrderedField> Polyhedron<F> {
    /// From inequalities `b + a·x >= 0` and equations `b + a·x = 0`.
    ///
    /// Errors: `Dimension` if a row does not have `ambient_dim + 1` entries.
    pub fn from_hrep(ambient_dim: usize, ieqs: Vec<Vec<F>>, eqns: Vec<Vec<F>>) -> Result<Self> {
        for row in ieqs.iter().chain(&eqns) {
            if row.len() != ambient_dim + 1 {
                return Err(ElimError::Dimension {
                    expected: ambient_dim + 1,
                    found: row.len(),
                });
            }
        }
        Ok(Self::assemble(ambient_dim, ieqs, eqns))
    }

    /// Rows already have the right length.
    pub(crate) fn assemble(ambient_dim: usize, ieqs: Vec<Vec<F>>, eqns: Vec<Vec<F>>) -> Self {
        let vertices = h_to_vertices(ambient_dim, &ieqs, &eqns);
        Self {
            ambient_dim,
            ieqs,
            eqns,
            vertices,
        }
    }

    /// Convex hull of `points` in R^`ambient_dim`; non-extreme points are dropped.
    ///
    /// Errors: `Dimension` on a point of the wrong length, `Degenerate` if the
    /// points do not span R^`ambient_dim`.
    pub fn from_vertices(ambient_dim: usize, points: Vec<Vec<F>>) -> Result<Self> {
        if let Some(p) = points.iter().find(|p| p.len() != ambient_dim) {
            return Err(ElimError::Dimension {
                expected: ambient_dim,
                found: p.len(),
            });
        }
        if points.is_empty() {
            // -1 >= 0
            let mut infeasible = vec![F::zero(); ambient_dim + 1];
            infeasible[0] = -F::one();
            return Ok(Self::assemble(ambient_dim, vec![infeasible], Vec::new()));
        }
        if ambient_dim == 0 {
            return Ok(Self::assemble(0, Vec::new(), Vec::new()));
        }
        let rank = affine_rank(ambient_dim, &points);
        if rank < ambient_dim {
            return Err(ElimError::Degenerate { rank, ambient_dim });
        }
        let ieqs = v_to_halfspaces(ambient_dim, &points);
        Ok(Self::assemble(ambient_dim, ieqs, Vec::new()))
    }

    /// Image under the coordinate projection onto `keep` (in that order).
    ///
    /// Errors: `Index` for an out-of-range coordinate, `Degenerate` if the
    /// image is not full-dimensional.
    pub fn project(&self, keep: &[usize]) -> Result<Self> {
        if let Some(&index) = keep.iter().find(|&&i| i >= self.ambient_dim) {
            return Err(ElimError::Index {
                index,
                ngens: self.ambient_dim,
            });
        }
        let images = self
            .vertices
            .iter()
            .map(|v| keep.iter().map(|&i| v[i].clone()).collect())
            .collect();
        Self::from_vertices(keep.len(), images)
    }

    #[inline]
    pub fn ambient_dim(&self) -> usize {
        self.ambient_dim
    }

    /// Rows `[b, a..]` of the inequalities `b + a·x >= 0`.
    #[inline]
    pub fn inequalities_list(&self) -> &[Vec<F>] {
        &self.ieqs
    }

    /// Rows `[b, a..]` of the equations `b + a·x = 0`.
    #[inline]
    pub fn equations_list(&self) -> &[Vec<F>] {
        &self.eqns
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec<F>] {
        &self.vertices
    }

    /// No vertices were found. Means empty only for bounded input: a
    /// half-space or a slab has no vertices either, since rays and lines are
    /// not enumerated.
    #[inline]
    pub fn has_no_vertices(&self) -> bool {
        self.vertices.is_empty()
    }
}
