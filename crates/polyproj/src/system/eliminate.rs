//! Variable elimination: one step (substitution or Fourier–Motzkin) and the
//! multi-variable projection driver.
//!
//! Algorithm (one step, variable `v`)
//! - If some equality `e` has `e_v != 0`, every form `f` becomes
//!   `f - (f_v / e_v) e`. Exact; `e` itself turns into `0 = 0` and is dropped.
//! - Otherwise inequalities are split by the sign of their `v` coefficient.
//!   Each (lower `l`, upper `u`) pair yields `u_v l - l_v u`, strict iff either
//!   input is strict. Forms without `v` and all equalities pass through.
//!
//! Complexity
//! - Fourier–Motzkin emits `|lower| · |upper|` forms per step and performs no
//!   redundancy removal, so sizes can grow quickly over repeated steps. The
//!   projected region does not depend on elimination order but the sizes do;
//!   callers choose the order.

use tracing::{debug, info_span};

use super::store::LinearSystem;
use super::types::LinForm;
use crate::error::{ElimError, Result};
use crate::field::OrderedField;

impl<F: OrderedField> LinearSystem<F> {
    /// Project out the variable at `index`; returns a new store over the
    /// remaining variables (relative order kept).
    ///
    /// Errors: `Index` if `index >= ambient_dim()`.
    pub fn eliminate_index(&self, index: usize) -> Result<Self> {
        let ring = self.ring.without(index)?;
        let name = self.ring.name(index).unwrap_or_default();

        let pivot = self.eq.iter().find(|e| !e.coeff(index).is_zero());
        let (eq, lt, le) = match pivot {
            Some(e) => {
                debug!(var = name, "eliminate by substitution");
                let sub = |f: &LinForm<F>| substitute(f, e, index);
                (
                    self.eq.iter().map(sub).collect::<Vec<_>>(),
                    self.lt.iter().map(sub).collect::<Vec<_>>(),
                    self.le.iter().map(sub).collect::<Vec<_>>(),
                )
            }
            None => {
                let (lt, le) = self.fourier_motzkin(index, name);
                (self.eq.iter().cloned().collect(), lt, le)
            }
        };

        let strip = |f: LinForm<F>| {
            debug_assert!(f.coeff(index).is_zero());
            f.drop_coordinate(index)
        };
        let out = Self::from_forms(
            ring,
            eq.into_iter().map(strip),
            lt.into_iter().map(strip),
            le.into_iter().map(strip),
        )?;
        debug!(
            var = name,
            constraints = out.n_constraints(),
            infeasible = out.is_infeasible(),
            "eliminated"
        );
        Ok(out)
    }

    fn fourier_motzkin(&self, index: usize, name: &str) -> (Vec<LinForm<F>>, Vec<LinForm<F>>) {
        let mut new_lt = Vec::new();
        let mut new_le = Vec::new();
        let (lt_lower, lt_upper) = split_by_sign(self.lt.iter(), index, &mut new_lt);
        let (le_lower, le_upper) = split_by_sign(self.le.iter(), index, &mut new_le);
        debug!(
            var = name,
            le_lower = le_lower.len(),
            le_upper = le_upper.len(),
            lt_lower = lt_lower.len(),
            lt_upper = lt_upper.len(),
            "eliminate by Fourier-Motzkin"
        );

        for l in &le_lower {
            for u in &le_upper {
                new_le.push(combine(l, u, index));
            }
            for u in &lt_upper {
                new_lt.push(combine(l, u, index));
            }
        }
        for l in &lt_lower {
            for u in le_upper.iter().chain(&lt_upper) {
                new_lt.push(combine(l, u, index));
            }
        }
        (new_lt, new_le)
    }

    /// Eliminate the named variables in the given order.
    ///
    /// Every name is resolved once against this store's ring; after each step
    /// the pending indices above the removed one shift down by one.
    ///
    /// Errors: `VariableNotFound` if a name is not in this store's ring;
    /// `DuplicateVariable` if a name is listed twice. Targets are checked
    /// together up front, so a repeat reports `DuplicateVariable` rather than
    /// `VariableNotFound` against the already reduced ring.
    pub fn coordinate_projection<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut positions = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let index = self
                .ring
                .index_of(name)
                .ok_or_else(|| ElimError::VariableNotFound(name.to_string()))?;
            if positions.contains(&index) {
                return Err(ElimError::DuplicateVariable(name.to_string()));
            }
            positions.push(index);
        }
        self.project_positions(positions)
    }

    /// Same as `coordinate_projection`, with targets given by index in this
    /// store's ring.
    ///
    /// Errors: `Index`, `DuplicateVariable`.
    pub fn coordinate_projection_indices(&self, indices: &[usize]) -> Result<Self> {
        let n = self.ambient_dim();
        let mut positions = Vec::with_capacity(indices.len());
        for &index in indices {
            if index >= n {
                return Err(ElimError::Index { index, ngens: n });
            }
            if positions.contains(&index) {
                let name = self.ring.name(index).unwrap_or_default();
                return Err(ElimError::DuplicateVariable(name.to_string()));
            }
            positions.push(index);
        }
        self.project_positions(positions)
    }

    fn project_positions(&self, mut positions: Vec<usize>) -> Result<Self> {
        let _span = info_span!(
            "coordinate_projection",
            dim = self.ambient_dim(),
            targets = positions.len(),
            constraints = self.n_constraints()
        )
        .entered();
        let mut res = self.clone();
        for i in 0..positions.len() {
            let removed = positions[i];
            res = res.eliminate_index(removed)?;
            for p in positions[i + 1..].iter_mut() {
                if *p > removed {
                    *p -= 1;
                }
            }
        }
        Ok(res)
    }
}

/// `f - (f_v / e_v) e`; `f` unchanged if it does not involve `v`.
fn substitute<F: OrderedField>(f: &LinForm<F>, e: &LinForm<F>, index: usize) -> LinForm<F> {
    let fv = f.coeff(index);
    if fv.is_zero() {
        return f.clone();
    }
    let ratio = fv.clone() / e.coeff(index).clone();
    f - &e.scale(&ratio)
}

/// Partition by the sign of coefficient `index`: returns (lower, upper) and
/// pushes forms without the variable onto `carried`.
fn split_by_sign<'a, F: OrderedField>(
    forms: impl Iterator<Item = &'a LinForm<F>>,
    index: usize,
    carried: &mut Vec<LinForm<F>>,
) -> (Vec<&'a LinForm<F>>, Vec<&'a LinForm<F>>) {
    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for f in forms {
        let a = f.coeff(index);
        if a.is_positive() {
            upper.push(f);
        } else if a.is_negative() {
            lower.push(f);
        } else {
            carried.push(f.clone());
        }
    }
    (lower, upper)
}

/// `u_v · l - l_v · u` for `l_v < 0 < u_v`; the `v` coefficient cancels.
fn combine<F: OrderedField>(l: &LinForm<F>, u: &LinForm<F>, index: usize) -> LinForm<F> {
    &l.scale(u.coeff(index)) - &u.scale(l.coeff(index))
}
