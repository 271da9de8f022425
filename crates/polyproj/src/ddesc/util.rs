//! Small utilities: index combinations and row evaluation.

use crate::field::OrderedField;

/// All `k`-subsets of `0..n` in lexicographic order (`k == 0` yields one empty set).
pub(crate) fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idxs.clone());
        // rightmost index that can still advance
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            return out;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
}

/// `b + a·x` for a flattened row `[b, a..]`.
pub(crate) fn eval_row<F: OrderedField>(row: &[F], x: &[F]) -> F {
    debug_assert_eq!(row.len(), x.len() + 1);
    row[1..]
        .iter()
        .zip(x)
        .fold(row[0].clone(), |acc, (a, xi)| acc + a.clone() * xi.clone())
}

/// `a·b`
pub(crate) fn dot<F: OrderedField>(a: &[F], b: &[F]) -> F {
    a.iter()
        .zip(b)
        .fold(F::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}
