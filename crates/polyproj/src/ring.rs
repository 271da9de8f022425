//! Polynomial rings over an ordered field: named variables and sparse polynomials.
//!
//! - `Ring`: ordered list of unique variable names; index = position.
//! - `Poly<F>`: sparse polynomial in a `Ring`, keyed by exponent vectors.
//!
//! Only linear polynomials end up in a `LinearSystem`, but inputs are accepted
//! as general polynomials so that non-linear constraints are rejected with a
//! `Degree` error rather than silently truncated.
//!
//! Conventions
//! - Arithmetic between polynomials of different rings panics (like nalgebra's
//!   dimension checks). Move a polynomial first with `Ring::coerce`.
//! - Zero coefficients are never stored; the zero polynomial has no terms.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use crate::error::{ElimError, Result};
use crate::field::OrderedField;

/// Ordered, fixed list of variable names.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    names: Arc<[String]>,
}

impl Ring {
    /// Ring with the given variable names (in order). Names must be unique.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for (i, n) in names.iter().enumerate() {
            if names[..i].contains(n) {
                return Err(ElimError::DuplicateVariable(n.clone()));
            }
        }
        Ok(Self {
            names: names.into(),
        })
    }

    /// Ring with variables `{prefix}0 .. {prefix}{n-1}`.
    pub fn with_prefix(prefix: &str, n: usize) -> Self {
        Self {
            names: (0..n).map(|i| format!("{prefix}{i}")).collect(),
        }
    }

    #[inline]
    pub fn ngens(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// The `index`-th generator as a polynomial.
    pub fn gen<F: OrderedField>(&self, index: usize) -> Result<Poly<F>> {
        if index >= self.ngens() {
            return Err(ElimError::Index {
                index,
                ngens: self.ngens(),
            });
        }
        let mut exps = vec![0u32; self.ngens()];
        exps[index] = 1;
        let mut terms = BTreeMap::new();
        terms.insert(exps, F::one());
        Ok(Poly {
            ring: self.clone(),
            terms,
        })
    }

    /// Generator by name.
    pub fn var<F: OrderedField>(&self, name: &str) -> Result<Poly<F>> {
        let index = self
            .index_of(name)
            .ok_or_else(|| ElimError::VariableNotFound(name.to_string()))?;
        self.gen(index)
    }

    /// All generators in order.
    pub fn gens<F: OrderedField>(&self) -> Vec<Poly<F>> {
        (0..self.ngens())
            .filter_map(|i| self.gen(i).ok())
            .collect()
    }

    /// Constant polynomial `c`.
    pub fn constant<F: OrderedField>(&self, c: F) -> Poly<F> {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(vec![0u32; self.ngens()], c);
        }
        Poly {
            ring: self.clone(),
            terms,
        }
    }

    /// Zero polynomial.
    #[inline]
    pub fn zero<F: OrderedField>(&self) -> Poly<F> {
        self.constant(F::zero())
    }

    /// Ring with the `index`-th variable removed; remaining order is kept.
    pub fn without(&self, index: usize) -> Result<Ring> {
        if index >= self.ngens() {
            return Err(ElimError::Index {
                index,
                ngens: self.ngens(),
            });
        }
        Ok(Self {
            names: self
                .names
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, n)| n.clone())
                .collect(),
        })
    }

    /// Move `p` into this ring, matching variables by name.
    ///
    /// Succeeds iff every variable that occurs in `p` with a nonzero exponent is
    /// a variable of `self`. Constants always coerce.
    pub fn coerce<F: OrderedField>(&self, p: &Poly<F>) -> Result<Poly<F>> {
        if p.ring == *self {
            return Ok(p.clone());
        }
        let mut map = Vec::with_capacity(p.ring.ngens());
        for name in p.ring.names() {
            map.push(self.index_of(name));
        }
        let mut terms = BTreeMap::new();
        for (exps, c) in &p.terms {
            let mut out = vec![0u32; self.ngens()];
            for (i, &e) in exps.iter().enumerate() {
                if e == 0 {
                    continue;
                }
                match map[i] {
                    Some(j) => out[j] = e,
                    None => {
                        return Err(ElimError::Coercion {
                            expr: p.to_string(),
                            ring: self.to_string(),
                        })
                    }
                }
            }
            terms.insert(out, c.clone());
        }
        Ok(Poly {
            ring: self.clone(),
            terms,
        })
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring[{self}]")
    }
}

/// Sparse polynomial over `F` in a fixed `Ring`.
///
/// Invariants:
/// - every exponent vector has length `ring.ngens()`;
/// - no stored coefficient is zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Poly<F> {
    ring: Ring,
    terms: BTreeMap<Vec<u32>, F>,
}

impl<F: OrderedField> Poly<F> {
    #[inline]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total degree; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().map(|e| e.iter().sum()).max()
    }

    /// True if no variable occurs (zero included).
    pub fn is_constant(&self) -> bool {
        self.degree().map_or(true, |d| d == 0)
    }

    pub fn constant_coefficient(&self) -> F {
        self.terms
            .iter()
            .find(|(e, _)| e.iter().all(|&x| x == 0))
            .map(|(_, c)| c.clone())
            .unwrap_or_else(F::zero)
    }

    /// Coefficient of the degree-one monomial `x_index`; zero if out of range.
    pub fn monomial_coefficient(&self, index: usize) -> F {
        if index >= self.ring.ngens() {
            return F::zero();
        }
        self.terms
            .iter()
            .find(|(e, _)| {
                e.iter()
                    .enumerate()
                    .all(|(i, &x)| if i == index { x == 1 } else { x == 0 })
            })
            .map(|(_, c)| c.clone())
            .unwrap_or_else(F::zero)
    }

    /// Multiply by a field element.
    pub fn scale(&self, s: &F) -> Self {
        if s.is_zero() {
            return self.ring.zero();
        }
        Self {
            ring: self.ring.clone(),
            terms: self
                .terms
                .iter()
                .map(|(e, c)| (e.clone(), c.clone() * s.clone()))
                .collect(),
        }
    }

    fn check_ring(&self, other: &Self) {
        assert!(
            self.ring == other.ring,
            "polynomial rings differ: [{}] vs [{}]",
            self.ring,
            other.ring
        );
    }

    fn accumulate(terms: &mut BTreeMap<Vec<u32>, F>, exps: Vec<u32>, c: F) {
        let sum = match terms.remove(&exps) {
            Some(prev) => prev + c,
            None => c,
        };
        if !sum.is_zero() {
            terms.insert(exps, sum);
        }
    }
}

impl<F: OrderedField> Add<&Poly<F>> for &Poly<F> {
    type Output = Poly<F>;
    fn add(self, rhs: &Poly<F>) -> Poly<F> {
        self.check_ring(rhs);
        let mut terms = self.terms.clone();
        for (e, c) in &rhs.terms {
            Poly::<F>::accumulate(&mut terms, e.clone(), c.clone());
        }
        Poly {
            ring: self.ring.clone(),
            terms,
        }
    }
}

impl<F: OrderedField> Neg for &Poly<F> {
    type Output = Poly<F>;
    fn neg(self) -> Poly<F> {
        Poly {
            ring: self.ring.clone(),
            terms: self
                .terms
                .iter()
                .map(|(e, c)| (e.clone(), -c.clone()))
                .collect(),
        }
    }
}

impl<F: OrderedField> Sub<&Poly<F>> for &Poly<F> {
    type Output = Poly<F>;
    fn sub(self, rhs: &Poly<F>) -> Poly<F> {
        self + &(-rhs)
    }
}

impl<F: OrderedField> Mul<&Poly<F>> for &Poly<F> {
    type Output = Poly<F>;
    fn mul(self, rhs: &Poly<F>) -> Poly<F> {
        self.check_ring(rhs);
        let mut terms = BTreeMap::new();
        for (ea, ca) in &self.terms {
            for (eb, cb) in &rhs.terms {
                let e: Vec<u32> = ea.iter().zip(eb).map(|(a, b)| a + b).collect();
                Poly::<F>::accumulate(&mut terms, e, ca.clone() * cb.clone());
            }
        }
        Poly {
            ring: self.ring.clone(),
            terms,
        }
    }
}

// Owned forwarding so `a + b * c` reads naturally in callers.
macro_rules! forward_owned_binop {
    ($tr:ident, $method:ident) => {
        impl<F: OrderedField> $tr<Poly<F>> for Poly<F> {
            type Output = Poly<F>;
            #[inline]
            fn $method(self, rhs: Poly<F>) -> Poly<F> {
                (&self).$method(&rhs)
            }
        }
        impl<F: OrderedField> $tr<&Poly<F>> for Poly<F> {
            type Output = Poly<F>;
            #[inline]
            fn $method(self, rhs: &Poly<F>) -> Poly<F> {
                (&self).$method(rhs)
            }
        }
        impl<F: OrderedField> $tr<Poly<F>> for &Poly<F> {
            type Output = Poly<F>;
            #[inline]
            fn $method(self, rhs: Poly<F>) -> Poly<F> {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl<F: OrderedField> Neg for Poly<F> {
    type Output = Poly<F>;
    #[inline]
    fn neg(self) -> Poly<F> {
        -&self
    }
}

impl<F: OrderedField> fmt::Display for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        // Reverse lexicographic on exponents, so the constant comes last.
        let mut first = true;
        for (exps, c) in self.terms.iter().rev() {
            let mono: Vec<String> = exps
                .iter()
                .enumerate()
                .filter(|&(_, &e)| e > 0)
                .map(|(i, &e)| {
                    let name = &self.ring.names()[i];
                    if e == 1 {
                        name.clone()
                    } else {
                        format!("{name}^{e}")
                    }
                })
                .collect();
            write_term(f, c, &mono.join("*"), first)?;
            first = false;
        }
        Ok(())
    }
}

impl<F: OrderedField> fmt::Debug for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly({self})")
    }
}

/// Write `c*mono` with sign handling; `mono == ""` means a constant term.
pub(crate) fn write_term<F: OrderedField>(
    f: &mut fmt::Formatter<'_>,
    c: &F,
    mono: &str,
    first: bool,
) -> fmt::Result {
    let neg = c.is_negative();
    let abs = if neg { -c.clone() } else { c.clone() };
    match (first, neg) {
        (true, true) => write!(f, "-")?,
        (false, true) => write!(f, " - ")?,
        (false, false) => write!(f, " + ")?,
        (true, false) => {}
    }
    if mono.is_empty() {
        write!(f, "{abs}")
    } else if abs.is_one() {
        write!(f, "{mono}")
    } else {
        write!(f, "{abs}*{mono}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::q;
    use num_rational::BigRational;

    fn xyz() -> (Ring, Poly<BigRational>, Poly<BigRational>, Poly<BigRational>) {
        let r = Ring::new(["x", "y", "z"]).unwrap();
        let x = r.var("x").unwrap();
        let y = r.var("y").unwrap();
        let z = r.var("z").unwrap();
        (r, x, y, z)
    }

    #[test]
    fn duplicate_names_rejected() {
        assert_eq!(
            Ring::new(["a", "b", "a"]),
            Err(ElimError::DuplicateVariable("a".into()))
        );
    }

    #[test]
    fn degree_and_coefficients() {
        let (r, x, y, z) = xyz();
        let p = x.scale(&q(3, 2)) - &y + r.constant(q(5, 1));
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.monomial_coefficient(0), q(3, 2));
        assert_eq!(p.monomial_coefficient(1), q(-1, 1));
        assert_eq!(p.monomial_coefficient(2), q(0, 1));
        assert_eq!(p.constant_coefficient(), q(5, 1));
        let sq = &x * &z;
        assert_eq!(sq.degree(), Some(2));
        // x*z has no degree-one part in x
        assert_eq!(sq.monomial_coefficient(0), q(0, 1));
        assert!(r.zero::<BigRational>().is_constant());
        assert_eq!(r.zero::<BigRational>().degree(), None);
    }

    #[test]
    fn cancellation_removes_terms() {
        let (_r, x, y, _z) = xyz();
        let p = (&x + &y) - (&y + &x);
        assert!(p.is_zero());
    }

    #[test]
    fn coerce_by_name() {
        let (r, _x, y, _z) = xyz();
        let small = Ring::new(["y"]).unwrap();
        let ys: Poly<BigRational> = small.var("y").unwrap();
        let moved = r.coerce(&(ys.scale(&q(2, 1)))).unwrap();
        assert_eq!(moved, y.scale(&q(2, 1)));
        // z is not in `small`
        let z = r.var::<BigRational>("z").unwrap();
        assert!(matches!(
            small.coerce(&z),
            Err(ElimError::Coercion { .. })
        ));
        // constants always coerce
        let c = r.constant(q(7, 3));
        assert_eq!(small.coerce(&c).unwrap().constant_coefficient(), q(7, 3));
    }

    #[test]
    fn without_keeps_order() {
        let (r, ..) = xyz();
        let r2 = r.without(1).unwrap();
        assert_eq!(r2.names(), &["x".to_string(), "z".to_string()]);
        assert!(matches!(r.without(3), Err(ElimError::Index { .. })));
    }

    #[test]
    fn display_reads_naturally() {
        let (r, x, y, _z) = xyz();
        let p = &x - &y.scale(&q(1, 2)) + r.constant(q(-3, 1));
        assert_eq!(p.to_string(), "x - 1/2*y - 3");
    }
}
