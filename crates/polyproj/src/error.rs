//! Error type shared by the ring adapter, the constraint store and the
//! double-description engine.
//!
//! Infeasibility is not an error: a store that becomes empty collapses to
//! `{1 <= 0}` and stays a valid value (see `LinearSystem::is_infeasible`).

use thiserror::Error;

/// Errors raised synchronously at the point of malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElimError {
    /// Input polynomial has degree > 1.
    #[error("{expr} is not a valid linear polynomial (degree {degree})")]
    Degree { expr: String, degree: u32 },

    /// Constructor input does not live in (and cannot be moved into) the declared ring.
    #[error("not a proper ring: expected [{expected}], found [{found}]")]
    RingMismatch { expected: String, found: String },

    /// `add_*` input cannot be converted into the store's ring.
    #[error("can not convert {expr} into ring [{ring}]")]
    Coercion { expr: String, ring: String },

    /// Vector or row length does not match the ambient dimension.
    #[error("length mismatch: expected {expected}, found {found}")]
    Dimension { expected: usize, found: usize },

    /// Coordinate index out of range for the current ring.
    #[error("coordinate index {index} out of range for {ngens} variables")]
    Index { index: usize, ngens: usize },

    /// Named coordinate is not a variable of the ring.
    #[error("coordinate {0:?} not found in the polynomial ring")]
    VariableNotFound(String),

    /// A variable name appears twice (ring construction or elimination targets).
    #[error("variable {0:?} listed more than once")]
    DuplicateVariable(String),

    /// Double description requested for a system with strict inequalities.
    #[error("system contains strict inequalities")]
    StrictInequality,

    /// Relation string not one of `<`, `>`, `=`, `<=`, `>=`.
    #[error("{0:?} is not a supported relation")]
    UnsupportedRelation(String),

    /// V-representation input does not span the ambient space.
    #[error("point set spans {rank} of {ambient_dim} dimensions")]
    Degenerate { rank: usize, ambient_dim: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ElimError>;
