//! H↔V conversions by exact enumeration.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};

use super::util::{combinations, dot, eval_row};
use crate::field::OrderedField;
use crate::linalg::{nullspace, rank, solve_unique};

/// Vertices of `{x : ieqs(x) >= 0, eqns(x) = 0}` in R^`dim`, sorted and deduplicated.
pub(crate) fn h_to_vertices<F: OrderedField>(
    dim: usize,
    ieqs: &[Vec<F>],
    eqns: &[Vec<F>],
) -> Vec<Vec<F>> {
    let eq_rank = rank(&coeff_matrix(dim, eqns.iter()));
    let k = dim - eq_rank;
    let mut out = BTreeSet::new();
    for comb in combinations(ieqs.len(), k) {
        // Active set: all equations plus the chosen inequalities held tight.
        let rows: Vec<&Vec<F>> = eqns.iter().chain(comb.iter().map(|&i| &ieqs[i])).collect();
        let a = coeff_matrix(dim, rows.iter().copied());
        let b = DVector::from_fn(rows.len(), |i, _| -rows[i][0].clone());
        let Some(x) = solve_unique(&a, &b) else {
            continue;
        };
        let x: Vec<F> = x.iter().cloned().collect();
        let feasible = ieqs.iter().all(|h| !eval_row(h, &x).is_negative())
            && eqns.iter().all(|e| eval_row(e, &x).is_zero());
        if feasible {
            out.insert(x);
        }
    }
    out.into_iter().collect()
}

/// Facet inequalities `[c, -n..]` (meaning `n·x <= c`) of the hull of `points`.
///
/// Expects a full-dimensional point set in R^`dim` with `dim >= 1`.
pub(crate) fn v_to_halfspaces<F: OrderedField>(dim: usize, points: &[Vec<F>]) -> Vec<Vec<F>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for comb in combinations(points.len(), dim) {
        let p0 = &points[comb[0]];
        let diffs = DMatrix::from_fn(dim - 1, dim, |i, j| {
            points[comb[i + 1]][j].clone() - p0[j].clone()
        });
        let ns = nullspace(&diffs);
        if ns.len() != 1 {
            continue;
        }
        let normal: Vec<F> = ns[0].iter().cloned().collect();
        let c = dot(&normal, p0);
        let (mut above, mut below) = (false, false);
        for p in points {
            match dot(&normal, p).cmp(&c) {
                Ordering::Greater => above = true,
                Ordering::Less => below = true,
                Ordering::Equal => {}
            }
        }
        if above && below {
            continue;
        }
        // Orient so that every point satisfies normal·x <= c.
        let (normal, c) = if above {
            (normal.into_iter().map(|a| -a).collect(), -c)
        } else {
            (normal, c)
        };
        let (normal, c) = canonical_scale(normal, c);
        if seen.insert((normal.clone(), c.clone())) {
            let mut row = Vec::with_capacity(dim + 1);
            row.push(c);
            row.extend(normal.into_iter().map(|a| -a));
            out.push(row);
        }
    }
    out
}

/// Rank of the point set's affine hull.
pub(crate) fn affine_rank<F: OrderedField>(dim: usize, points: &[Vec<F>]) -> usize {
    let Some(p0) = points.first() else {
        return 0;
    };
    let diffs = DMatrix::from_fn(points.len() - 1, dim, |i, j| {
        points[i + 1][j].clone() - p0[j].clone()
    });
    rank(&diffs)
}

/// Coefficient part (columns 1..) of flattened rows as a matrix.
fn coeff_matrix<'a, F: OrderedField>(
    dim: usize,
    rows: impl Iterator<Item = &'a Vec<F>>,
) -> DMatrix<F> {
    let rows: Vec<&Vec<F>> = rows.collect();
    DMatrix::from_fn(rows.len(), dim, |i, j| rows[i][j + 1].clone())
}

/// Divide by the magnitude of the first nonzero normal entry (positive factor).
fn canonical_scale<F: OrderedField>(normal: Vec<F>, c: F) -> (Vec<F>, F) {
    let Some(lead) = normal.iter().find(|a| !a.is_zero()).cloned() else {
        return (normal, c);
    };
    let s = if lead.is_negative() { -lead } else { lead };
    let normal = normal.into_iter().map(|a| a / s.clone()).collect();
    (normal, c / s)
}
