//! Constraint store: ingestion, normalization and the infeasible collapse.

use std::collections::BTreeSet;
use std::fmt;

use tracing::trace;

use super::types::{ConstraintKind, LinForm, Relation};
use crate::error::{ElimError, Result};
use crate::field::OrderedField;
use crate::ring::{Poly, Ring};

/// Region `{x : eq(x) = 0, lt(x) < 0, le(x) <= 0}` over a fixed ring.
///
/// Invariants:
/// - every stored form has `ring.ngens()` coefficients;
/// - no stored form is constant, except the single `1 <= 0` of the collapsed
///   infeasible state, in which case `eq` and `lt` are empty;
/// - sets are deduplicated by value; iteration order is the `Ord` of `LinForm`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSystem<F> {
    pub(super) ring: Ring,
    pub(super) eq: BTreeSet<LinForm<F>>,
    pub(super) lt: BTreeSet<LinForm<F>>,
    pub(super) le: BTreeSet<LinForm<F>>,
}

impl<F: OrderedField> LinearSystem<F> {
    /// Whole space over `ring`.
    pub fn universe(ring: Ring) -> Self {
        Self {
            ring,
            eq: BTreeSet::new(),
            lt: BTreeSet::new(),
            le: BTreeSet::new(),
        }
    }

    /// Build from polynomials `eq = 0`, `lt < 0`, `le <= 0`.
    ///
    /// Errors: `Degree` if any input has degree > 1 (checked first),
    /// `RingMismatch` if an input cannot be moved into `ring`.
    pub fn new<I, J, K>(ring: Ring, eq: I, lt: J, le: K) -> Result<Self>
    where
        I: IntoIterator<Item = Poly<F>>,
        J: IntoIterator<Item = Poly<F>>,
        K: IntoIterator<Item = Poly<F>>,
    {
        let tagged: Vec<(ConstraintKind, Poly<F>)> = eq
            .into_iter()
            .map(|p| (ConstraintKind::Eq, p))
            .chain(lt.into_iter().map(|p| (ConstraintKind::Lt, p)))
            .chain(le.into_iter().map(|p| (ConstraintKind::Le, p)))
            .collect();
        for (_, p) in &tagged {
            if let Some(degree) = p.degree().filter(|&d| d > 1) {
                return Err(ElimError::Degree {
                    expr: p.to_string(),
                    degree,
                });
            }
        }
        let mut forms = Vec::with_capacity(tagged.len());
        for (kind, p) in &tagged {
            let moved = ring.coerce(p).map_err(|_| ElimError::RingMismatch {
                expected: ring.to_string(),
                found: p.ring().to_string(),
            })?;
            forms.push((*kind, LinForm::from_poly(&moved)?));
        }
        let mut out = Self::universe(ring);
        for (kind, form) in forms {
            out.insert(kind, form);
        }
        Ok(out)
    }

    /// Build from linear forms; `Dimension` if a form has the wrong length.
    pub fn from_forms<I, J, K>(ring: Ring, eq: I, lt: J, le: K) -> Result<Self>
    where
        I: IntoIterator<Item = LinForm<F>>,
        J: IntoIterator<Item = LinForm<F>>,
        K: IntoIterator<Item = LinForm<F>>,
    {
        let mut out = Self::universe(ring);
        let n = out.ambient_dim();
        let tagged = eq
            .into_iter()
            .map(|f| (ConstraintKind::Eq, f))
            .chain(lt.into_iter().map(|f| (ConstraintKind::Lt, f)))
            .chain(le.into_iter().map(|f| (ConstraintKind::Le, f)));
        for (kind, form) in tagged {
            if form.dim() != n {
                return Err(ElimError::Dimension {
                    expected: n,
                    found: form.dim(),
                });
            }
            out.insert(kind, form);
        }
        Ok(out)
    }

    /// Add `expr ⋈ 0`. `Gt`/`Ge` are stored negated as `Lt`/`Le`.
    ///
    /// Errors: `Coercion` if `expr` cannot be moved into this ring, `Degree`
    /// if it is not linear.
    pub fn add_polynomial_constraint(&mut self, expr: &Poly<F>, relation: Relation) -> Result<()> {
        let moved = self.ring.coerce(expr)?;
        let form = LinForm::from_poly(&moved)?;
        let (kind, negate) = relation.normalized();
        let form = if negate { -form } else { form };
        self.insert(kind, form);
        Ok(())
    }

    /// Add `coefficients · x + constant ⋈ 0`.
    ///
    /// Errors: `Dimension` if `coefficients.len() != ambient_dim()`.
    pub fn add_linear_constraint(
        &mut self,
        coefficients: &[F],
        constant: F,
        relation: Relation,
    ) -> Result<()> {
        if coefficients.len() != self.ambient_dim() {
            return Err(ElimError::Dimension {
                expected: self.ambient_dim(),
                found: coefficients.len(),
            });
        }
        let mut lhs = self.ring.constant(constant);
        for (g, a) in self.ring.gens::<F>().into_iter().zip(coefficients) {
            lhs = lhs + g.scale(a);
        }
        self.add_polynomial_constraint(&lhs, relation)
    }

    /// Store one form of the given kind, evaluating constants.
    pub(super) fn insert(&mut self, kind: ConstraintKind, form: LinForm<F>) {
        if self.is_infeasible() {
            return;
        }
        if form.is_constant() {
            if !kind.holds_for(&form.constant) {
                trace!(
                    kind = kind.symbol(),
                    constant = %form.constant,
                    "constant constraint violated; collapsing to 1 <= 0"
                );
                self.collapse();
            }
            return;
        }
        match kind {
            ConstraintKind::Eq => self.eq.insert(form),
            ConstraintKind::Lt => self.lt.insert(form),
            ConstraintKind::Le => self.le.insert(form),
        };
    }

    fn collapse(&mut self) {
        let n = self.ambient_dim();
        self.eq.clear();
        self.lt.clear();
        self.le.clear();
        self.le.insert(LinForm::constant_only(n, F::one()));
    }

    /// True once a violated constant constraint collapsed the store to `{1 <= 0}`.
    #[inline]
    pub fn is_infeasible(&self) -> bool {
        self.le.len() == 1 && self.le.iter().next().map_or(false, LinForm::is_constant)
    }

    #[inline]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    #[inline]
    pub fn ambient_dim(&self) -> usize {
        self.ring.ngens()
    }

    #[inline]
    pub fn eq_forms(&self) -> &BTreeSet<LinForm<F>> {
        &self.eq
    }

    #[inline]
    pub fn lt_forms(&self) -> &BTreeSet<LinForm<F>> {
        &self.lt
    }

    #[inline]
    pub fn le_forms(&self) -> &BTreeSet<LinForm<F>> {
        &self.le
    }

    /// Polynomials `f` of the equations `f(x) = 0`.
    pub fn eq_poly(&self) -> Vec<Poly<F>> {
        self.eq.iter().map(|f| f.to_poly(&self.ring)).collect()
    }

    /// Polynomials `f` of the strict inequalities `f(x) < 0`.
    pub fn lt_poly(&self) -> Vec<Poly<F>> {
        self.lt.iter().map(|f| f.to_poly(&self.ring)).collect()
    }

    /// Polynomials `f` of the inequalities `f(x) <= 0`.
    pub fn le_poly(&self) -> Vec<Poly<F>> {
        self.le.iter().map(|f| f.to_poly(&self.ring)).collect()
    }

    /// Total number of stored constraints.
    #[inline]
    pub fn n_constraints(&self) -> usize {
        self.eq.len() + self.lt.len() + self.le.len()
    }

    /// Exact membership of `point`.
    pub fn contains(&self, point: &[F]) -> Result<bool> {
        if point.len() != self.ambient_dim() {
            return Err(ElimError::Dimension {
                expected: self.ambient_dim(),
                found: point.len(),
            });
        }
        Ok(self.eq.iter().all(|f| ConstraintKind::Eq.holds_for(&f.eval(point)))
            && self.lt.iter().all(|f| ConstraintKind::Lt.holds_for(&f.eval(point)))
            && self.le.iter().all(|f| ConstraintKind::Le.holds_for(&f.eval(point))))
    }
}

impl<F: OrderedField> fmt::Display for LinearSystem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.ring.names();
        let kinds = [
            (ConstraintKind::Eq, &self.eq),
            (ConstraintKind::Lt, &self.lt),
            (ConstraintKind::Le, &self.le),
        ];
        for (kind, set) in kinds {
            for form in set {
                writeln!(f, "{} {} 0", form.display(names), kind.symbol())?;
            }
        }
        Ok(())
    }
}
