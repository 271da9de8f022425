//! Exact linear algebra over an ordered field on nalgebra storage.
//!
//! nalgebra's decompositions need `ComplexField`, which exact rationals are
//! not; these helpers use `DMatrix<F>`/`DVector<F>` as plain containers and do
//! Gauss–Jordan elimination with exact division.

use nalgebra::{DMatrix, DVector};

use crate::field::OrderedField;

/// Reduce `m` in place to reduced row echelon form; returns pivot columns.
pub(crate) fn rref<F: OrderedField>(m: &mut DMatrix<F>) -> Vec<usize> {
    let (nrows, ncols) = m.shape();
    let mut pivots = Vec::new();
    let mut row = 0;
    for col in 0..ncols {
        if row == nrows {
            break;
        }
        let Some(p) = (row..nrows).find(|&r| !m[(r, col)].is_zero()) else {
            continue;
        };
        m.swap_rows(row, p);
        let inv = F::one() / m[(row, col)].clone();
        for c in col..ncols {
            let v = m[(row, c)].clone() * inv.clone();
            m[(row, c)] = v;
        }
        for r in 0..nrows {
            if r == row || m[(r, col)].is_zero() {
                continue;
            }
            let factor = m[(r, col)].clone();
            for c in col..ncols {
                let v = m[(r, c)].clone() - factor.clone() * m[(row, c)].clone();
                m[(r, c)] = v;
            }
        }
        pivots.push(col);
        row += 1;
    }
    pivots
}

pub(crate) fn rank<F: OrderedField>(m: &DMatrix<F>) -> usize {
    let mut a = m.clone();
    rref(&mut a).len()
}

/// The unique solution of `a x = b`, or `None` if inconsistent or underdetermined.
pub(crate) fn solve_unique<F: OrderedField>(a: &DMatrix<F>, b: &DVector<F>) -> Option<DVector<F>> {
    let (nrows, ncols) = a.shape();
    debug_assert_eq!(b.len(), nrows);
    let mut aug = DMatrix::from_fn(nrows, ncols + 1, |i, j| {
        if j < ncols {
            a[(i, j)].clone()
        } else {
            b[i].clone()
        }
    });
    let pivots = rref(&mut aug);
    if pivots.last() == Some(&ncols) || pivots.len() != ncols {
        return None;
    }
    Some(DVector::from_fn(ncols, |j, _| aug[(j, ncols)].clone()))
}

/// Basis of `{x : m x = 0}`, one vector per free column.
pub(crate) fn nullspace<F: OrderedField>(m: &DMatrix<F>) -> Vec<DVector<F>> {
    let ncols = m.ncols();
    let mut a = m.clone();
    let pivots = rref(&mut a);
    let mut out = Vec::new();
    for free in (0..ncols).filter(|c| !pivots.contains(c)) {
        let mut v = DVector::from_fn(ncols, |_, _| F::zero());
        v[free] = F::one();
        for (r, &pc) in pivots.iter().enumerate() {
            v[pc] = -a[(r, free)].clone();
        }
        out.push(v);
    }
    out
}
