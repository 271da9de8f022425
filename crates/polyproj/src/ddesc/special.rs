//! Special polytopes in any dimension, used in tests, benches and demos.
//!
//! - Hypercube `[-a, a]^n`: `2n` facets, `2^n` vertices.
//! - Cross-polytope `{‖x‖₁ <= r}`: `2^n` facets, `2n` vertices.
//! - Standard simplex `conv{0, e_1, .., e_n}`: `n + 1` facets and vertices.

use super::types::Polyhedron;
use crate::field::OrderedField;

fn unit_row<F: OrderedField>(n: usize, b: F, index: usize, sign: F) -> Vec<F> {
    let mut row = vec![F::zero(); n + 1];
    row[0] = b;
    row[index + 1] = sign;
    row
}

/// Axis-aligned hypercube `[-a, a]^n`.
pub fn hypercube<F: OrderedField>(n: usize, a: F) -> Polyhedron<F> {
    let mut ieqs = Vec::with_capacity(2 * n);
    for i in 0..n {
        // a + x_i >= 0 and a - x_i >= 0
        ieqs.push(unit_row(n, a.clone(), i, F::one()));
        ieqs.push(unit_row(n, a.clone(), i, -F::one()));
    }
    Polyhedron::assemble(n, ieqs, Vec::new())
}

/// Cross-polytope (ℓ1 ball of radius `r`): `s·x <= r` for every sign vector `s`.
///
/// # Panics
///
/// Panics if `n >= usize::BITS`, since the `2^n` facets cannot be counted in
/// `usize`. Vertex enumeration is combinatorial in the facet count, so useful
/// `n` is far smaller.
pub fn cross_polytope<F: OrderedField>(n: usize, r: F) -> Polyhedron<F> {
    assert!(
        n < usize::BITS as usize,
        "cross_polytope: 2^{n} facets overflow usize"
    );
    let facets = 1usize << n;
    let mut ieqs = Vec::with_capacity(facets);
    for mask in 0..facets {
        let mut row = Vec::with_capacity(n + 1);
        row.push(r.clone());
        for i in 0..n {
            // row holds -s_i
            if mask & (1 << i) != 0 {
                row.push(F::one());
            } else {
                row.push(-F::one());
            }
        }
        ieqs.push(row);
    }
    Polyhedron::assemble(n, ieqs, Vec::new())
}

/// Standard simplex `{x >= 0, Σ x_i <= 1}`.
pub fn simplex<F: OrderedField>(n: usize) -> Polyhedron<F> {
    let mut ieqs: Vec<Vec<F>> = (0..n).map(|i| unit_row(n, F::zero(), i, F::one())).collect();
    let mut last = vec![-F::one(); n + 1];
    last[0] = F::one();
    ieqs.push(last);
    Polyhedron::assemble(n, ieqs, Vec::new())
}
