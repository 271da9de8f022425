//! Linear systems over an ordered field and their projection by elimination.
//!
//! Purpose
//! - Hold a region `{eq = 0, lt < 0, le <= 0}` over a fixed variable list and
//!   project it onto fewer coordinates, one variable at a time.
//! - Exact over any `OrderedField`; strictness is tracked through every step.
//!
//! Why this design (short)
//! - Stores are values: elimination borrows the input and returns a new store
//!   over the reduced ring, so independent projections never alias.
//! - Constraint sets are `BTreeSet<LinForm>`: deduplicated by value and
//!   iterated in a deterministic order.
//! - Constant constraints are decided at ingestion. A violated one collapses
//!   the whole store to `{1 <= 0}` (equalities and strict inequalities are
//!   discarded), which every later step preserves.
//! - No redundancy removal. Repeated Fourier–Motzkin steps may accumulate
//!   redundant constraints.
//!
//! Code cross-refs: `ring::{Ring, Poly}`, `ddesc::Polyhedron` (bridge).

mod bridge;
mod eliminate;
mod store;
mod types;

pub use store::LinearSystem;
pub use types::{ConstraintKind, FormDisplay, LinForm, Relation};

#[cfg(test)]
mod proptests;
