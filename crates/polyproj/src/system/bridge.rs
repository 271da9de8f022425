//! Conversions between `LinearSystem` and the double-description `Polyhedron`.
//!
//! Row conventions: `a·x + c <= 0` is the inequality row `[-c, -a..]`
//! (`b + a'·x >= 0`); `a·x + c = 0` is the equation row `[c, a..]`.

use super::store::LinearSystem;
use super::types::{LinForm, Relation};
use crate::ddesc::Polyhedron;
use crate::error::{ElimError, Result};
use crate::field::OrderedField;
use crate::ring::Ring;

fn flatten<F: OrderedField>(form: &LinForm<F>) -> Vec<F> {
    let mut row = Vec::with_capacity(form.dim() + 1);
    row.push(form.constant.clone());
    row.extend(form.coeffs.iter().cloned());
    row
}

impl<F: OrderedField> LinearSystem<F> {
    /// Vertex/facet form of a strict-free system.
    ///
    /// Errors: `StrictInequality` if any strict inequality is stored.
    pub fn to_double_description(&self) -> Result<Polyhedron<F>> {
        if !self.lt.is_empty() {
            return Err(ElimError::StrictInequality);
        }
        let ieqs = self
            .le
            .iter()
            .map(|f| flatten(f).into_iter().map(|x| -x).collect())
            .collect();
        let eqns = self.eq.iter().map(flatten).collect();
        Ok(Polyhedron::assemble(self.ambient_dim(), ieqs, eqns))
    }

    /// Non-strict system read off the inequality rows of `p`.
    ///
    /// `ring` defaults to `x0..x{n-1}`. Equations of `p` are not carried over.
    ///
    /// Errors: `Dimension` if `ring` does not have `p.ambient_dim()` variables.
    pub fn from_double_description(p: &Polyhedron<F>, ring: Option<Ring>) -> Result<Self> {
        let ring = ring.unwrap_or_else(|| Ring::with_prefix("x", p.ambient_dim()));
        if ring.ngens() != p.ambient_dim() {
            return Err(ElimError::Dimension {
                expected: p.ambient_dim(),
                found: ring.ngens(),
            });
        }
        let mut out = Self::universe(ring);
        for row in p.inequalities_list() {
            out.add_linear_constraint(&row[1..], row[0].clone(), Relation::Ge)?;
        }
        Ok(out)
    }
}
