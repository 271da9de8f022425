//! Linear forms and relations: the value types stored by `LinearSystem`.
//!
//! - `LinForm`: `Σ a_i x_i + c`, compared and hashed by `(coeffs, constant)`.
//! - `Relation`: the five comparison operators accepted at ingestion.
//! - `ConstraintKind`: the three stored kinds (`= 0`, `< 0`, `<= 0`).

use std::fmt;
use std::ops::{Neg, Sub};
use std::str::FromStr;

use crate::error::{ElimError, Result};
use crate::field::OrderedField;
use crate::ring::{write_term, Poly, Ring};

/// Affine functional `coeffs · x + constant`.
///
/// Invariants:
/// - `coeffs.len()` equals the ambient dimension of the owning system.
/// - No scaling is applied; two forms describing the same half-space with
///   different scale are distinct values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinForm<F> {
    pub coeffs: Vec<F>,
    pub constant: F,
}

impl<F: OrderedField> LinForm<F> {
    #[inline]
    pub fn new(coeffs: Vec<F>, constant: F) -> Self {
        Self { coeffs, constant }
    }

    /// Form with all coefficients zero.
    pub fn constant_only(dim: usize, constant: F) -> Self {
        Self {
            coeffs: vec![F::zero(); dim],
            constant,
        }
    }

    /// Read a polynomial of degree <= 1 as a form over its ring.
    pub fn from_poly(p: &Poly<F>) -> Result<Self> {
        if let Some(degree) = p.degree() {
            if degree > 1 {
                return Err(ElimError::Degree {
                    expr: p.to_string(),
                    degree,
                });
            }
        }
        let n = p.ring().ngens();
        Ok(Self {
            coeffs: (0..n).map(|i| p.monomial_coefficient(i)).collect(),
            constant: p.constant_coefficient(),
        })
    }

    /// Render back into `ring` (which must have `dim()` variables).
    pub fn to_poly(&self, ring: &Ring) -> Poly<F> {
        debug_assert_eq!(ring.ngens(), self.dim());
        let mut p = ring.constant(self.constant.clone());
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            if let Ok(g) = ring.gen::<F>(i) {
                p = p + g.scale(a);
            }
        }
        p
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn coeff(&self, index: usize) -> &F {
        &self.coeffs[index]
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.iter().all(|a| a.is_zero())
    }

    /// Value at `point` (length must equal `dim()`).
    pub fn eval(&self, point: &[F]) -> F {
        debug_assert_eq!(point.len(), self.dim());
        self.coeffs
            .iter()
            .zip(point)
            .fold(self.constant.clone(), |acc, (a, x)| acc + a.clone() * x.clone())
    }

    pub fn scale(&self, s: &F) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|a| a.clone() * s.clone()).collect(),
            constant: self.constant.clone() * s.clone(),
        }
    }

    /// Same form with coordinate `index` removed.
    pub fn drop_coordinate(&self, index: usize) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, a)| a.clone())
            .collect();
        Self {
            coeffs,
            constant: self.constant.clone(),
        }
    }

    /// Display helper using the given variable names.
    pub fn display<'a>(&'a self, names: &'a [String]) -> FormDisplay<'a, F> {
        FormDisplay { form: self, names }
    }
}

impl<F: OrderedField> Sub<&LinForm<F>> for &LinForm<F> {
    type Output = LinForm<F>;
    fn sub(self, rhs: &LinForm<F>) -> LinForm<F> {
        debug_assert_eq!(self.dim(), rhs.dim());
        LinForm {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            constant: self.constant.clone() - rhs.constant.clone(),
        }
    }
}

impl<F: OrderedField> Neg for LinForm<F> {
    type Output = LinForm<F>;
    fn neg(self) -> LinForm<F> {
        LinForm {
            coeffs: self.coeffs.into_iter().map(|a| -a).collect(),
            constant: -self.constant,
        }
    }
}

/// `LinForm` rendered with variable names, e.g. `x - 1/2*y + 3`.
pub struct FormDisplay<'a, F> {
    form: &'a LinForm<F>,
    names: &'a [String],
}

impl<F: OrderedField> fmt::Display for FormDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, a) in self.form.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            let fallback;
            let name = match self.names.get(i) {
                Some(n) => n.as_str(),
                None => {
                    fallback = format!("x{i}");
                    fallback.as_str()
                }
            };
            write_term(f, a, name, first)?;
            first = false;
        }
        if first {
            return write!(f, "{}", self.form.constant);
        }
        if !self.form.constant.is_zero() {
            write_term(f, &self.form.constant, "", false)?;
        }
        Ok(())
    }
}

/// Comparison of an expression against zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Lt,
    Gt,
    Eq,
    Le,
    Ge,
}

impl Relation {
    /// Stored kind and whether the expression is negated first.
    #[inline]
    pub fn normalized(self) -> (ConstraintKind, bool) {
        match self {
            Relation::Lt => (ConstraintKind::Lt, false),
            Relation::Gt => (ConstraintKind::Lt, true),
            Relation::Eq => (ConstraintKind::Eq, false),
            Relation::Le => (ConstraintKind::Le, false),
            Relation::Ge => (ConstraintKind::Le, true),
        }
    }
}

impl FromStr for Relation {
    type Err = ElimError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "<" => Ok(Relation::Lt),
            ">" => Ok(Relation::Gt),
            "=" | "==" => Ok(Relation::Eq),
            "<=" | "≤" => Ok(Relation::Le),
            ">=" | "≥" => Ok(Relation::Ge),
            other => Err(ElimError::UnsupportedRelation(other.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Lt => "<",
            Relation::Gt => ">",
            Relation::Eq => "==",
            Relation::Le => "<=",
            Relation::Ge => ">=",
        };
        write!(f, "{s}")
    }
}

/// The three stored constraint kinds, each against zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `f(x) = 0`
    Eq,
    /// `f(x) < 0`
    Lt,
    /// `f(x) <= 0`
    Le,
}

impl ConstraintKind {
    /// Truth value of `c ⋈ 0` for a constant `c`.
    #[inline]
    pub fn holds_for<F: OrderedField>(self, c: &F) -> bool {
        match self {
            ConstraintKind::Eq => c.is_zero(),
            ConstraintKind::Lt => c.is_negative(),
            ConstraintKind::Le => !c.is_positive(),
        }
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintKind::Eq => "==",
            ConstraintKind::Lt => "<",
            ConstraintKind::Le => "<=",
        }
    }
}
