//! Exact double description for bounded polyhedra (H- and V-representations).
//!
//! Purpose
//! - Give `LinearSystem` a vertex/facet counterpart so projections can be
//!   checked geometrically, and let callers read systems off a polytope.
//! - Exact arithmetic throughout; no tolerances.
//!
//! Assumptions and conventions
//! - Rows are flattened as `[b, a_1, .., a_n]`: inequalities mean
//!   `b + a·x >= 0`, equations mean `b + a·x = 0`.
//! - H→V enumerates subsets of inequalities of size `n - rank(eqns)` and keeps
//!   feasible unique intersection points. Only vertices are reported; use
//!   bounded input (rays and lines are not enumerated).
//! - V→H requires full-dimensional point sets; facets come from `n`-subsets of
//!   points and are deduplicated after scaling the normal.
//! - Complexity is combinatorial (`C(H, n)` and `C(V, n)` solves). Fine for the
//!   moderate sizes used in tests and tooling.

mod convert;
pub mod special;
mod types;
mod util;

pub use types::Polyhedron;

#[cfg(test)]
mod tests;
