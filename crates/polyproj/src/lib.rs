//! Exact projection of linear systems by variable elimination.
//!
//! A `LinearSystem` holds equalities, strict and non-strict inequalities over
//! a named variable list and an ordered coefficient field. Variables are
//! eliminated by substitution (when an equality pins them) or by
//! Fourier–Motzkin; `coordinate_projection` drives a sequence of steps.
//! `ddesc::Polyhedron` provides the vertex/facet view of strict-free systems.
//!
//! Layout
//! - `field`: the `OrderedField` capability trait (rationals out of the box).
//! - `ring`: variable lists and sparse polynomials used at ingestion.
//! - `system`: constraint store, elimination, projection driver, bridge.
//! - `ddesc`: exact H↔V conversion and special polytopes.
//! - `random`: seeded random bounded systems for tests and benches.

pub mod ddesc;
pub mod error;
pub mod field;
mod linalg;
pub mod random;
pub mod ring;
pub mod system;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ElimError, Result};
pub use field::{q, OrderedField};
pub use num_rational::BigRational;
pub use ring::{Poly, Ring};
pub use system::{LinForm, LinearSystem, Relation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ddesc::{special, Polyhedron};
    pub use crate::error::{ElimError, Result};
    pub use crate::field::{q, OrderedField};
    pub use crate::ring::{Poly, Ring};
    pub use crate::system::{ConstraintKind, LinForm, LinearSystem, Relation};
    pub use num_rational::BigRational;
}
