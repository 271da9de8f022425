//! Property tests: single-variable elimination against a direct interval check.

use proptest::prelude::*;

use super::{LinearSystem, Relation};
use crate::field::q;
use crate::ring::Ring;
use num_rational::BigRational;
use num_traits::{One, Zero};

type Q = BigRational;

/// `a*v + b*y + c ⋈ 0`
#[derive(Clone, Copy, Debug)]
struct Row {
    a: i64,
    b: i64,
    c: i64,
    rel: Relation,
}

fn relation() -> impl Strategy<Value = Relation> {
    prop_oneof![Just(Relation::Eq), Just(Relation::Lt), Just(Relation::Le)]
}

fn row() -> impl Strategy<Value = Row> {
    (-3i64..=3, -3i64..=3, -4i64..=4, relation()).prop_map(|(a, b, c, rel)| Row { a, b, c, rel })
}

fn holds(rel: Relation, x: &Q) -> bool {
    match rel {
        Relation::Eq => x.is_zero(),
        Relation::Lt => *x < Q::zero(),
        _ => *x <= Q::zero(),
    }
}

fn build(rows: &[Row]) -> LinearSystem<Q> {
    let mut s = LinearSystem::universe(Ring::new(["v", "y"]).unwrap());
    for r in rows {
        s.add_linear_constraint(&[q(r.a, 1), q(r.b, 1)], q(r.c, 1), r.rel)
            .unwrap();
    }
    s
}

/// Is there a `v` with every row satisfied at `(v, y)`?
fn exists_v(rows: &[Row], y: &Q) -> bool {
    let rest = |r: &Row| q(r.b, 1) * y.clone() + q(r.c, 1);
    let at = |v: &Q| {
        rows.iter()
            .all(|r| holds(r.rel, &(q(r.a, 1) * v.clone() + rest(r))))
    };
    if let Some(r) = rows.iter().find(|r| r.rel == Relation::Eq && r.a != 0) {
        return at(&(-rest(r) / q(r.a, 1)));
    }
    // (bound, strict)
    let mut lower: Option<(Q, bool)> = None;
    let mut upper: Option<(Q, bool)> = None;
    for r in rows {
        let strict = r.rel == Relation::Lt;
        if r.a == 0 {
            if !holds(r.rel, &rest(r)) {
                return false;
            }
            continue;
        }
        let bound = -rest(r) / q(r.a, 1);
        if r.a > 0 {
            upper = Some(match upper {
                Some((u, s)) if u < bound => (u, s),
                Some((u, s)) if u == bound => (u, s || strict),
                _ => (bound, strict),
            });
        } else {
            lower = Some(match lower {
                Some((l, s)) if l > bound => (l, s),
                Some((l, s)) if l == bound => (l, s || strict),
                _ => (bound, strict),
            });
        }
    }
    match (lower, upper) {
        (Some((l, ls)), Some((u, us))) => l < u || (l == u && !ls && !us),
        _ => true,
    }
}

fn grid() -> impl Iterator<Item = Q> {
    (-20i64..=20).map(|k| q(k, 4))
}

proptest! {
    #[test]
    fn elimination_matches_interval_check(rows in proptest::collection::vec(row(), 1..7)) {
        let sys = build(&rows);
        let projected = sys.eliminate_index(0).unwrap();
        prop_assert_eq!(projected.ring().names(), &["y"]);
        for y in grid() {
            prop_assert_eq!(
                projected.contains(&[y.clone()]).unwrap(),
                exists_v(&rows, &y),
                "y = {}", y
            );
        }
    }

    #[test]
    fn non_strict_input_gives_non_strict_output(rows in proptest::collection::vec(row(), 1..7)) {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|r| Row { rel: if r.rel == Relation::Lt { Relation::Le } else { r.rel }, ..r })
            .collect();
        let projected = build(&rows).eliminate_index(0).unwrap();
        prop_assert!(projected.lt_forms().is_empty());
    }

    #[test]
    fn projection_order_does_not_change_region(
        rows in proptest::collection::vec((row(), -2i64..=2), 1..6)
    ) {
        // Lift each row to [u, v, y] with an extra u coefficient.
        let mut s = LinearSystem::<Q>::universe(Ring::new(["u", "v", "y"]).unwrap());
        for (r, d) in &rows {
            s.add_linear_constraint(&[q(*d, 1), q(r.a, 1), q(r.b, 1)], q(r.c, 1), r.rel)
                .unwrap();
        }
        let uv = s.coordinate_projection(&["u", "v"]).unwrap();
        let vu = s.coordinate_projection(&["v", "u"]).unwrap();
        for y in grid() {
            prop_assert_eq!(uv.contains(&[y.clone()]).unwrap(), vu.contains(&[y]).unwrap());
        }
    }

    #[test]
    fn collapsed_store_survives_elimination(rows in proptest::collection::vec(row(), 0..5)) {
        let mut s = build(&rows);
        s.add_linear_constraint(&[Q::zero(), Q::zero()], Q::one(), Relation::Eq).unwrap();
        prop_assert!(s.is_infeasible());
        let out = s.eliminate_index(1).unwrap();
        prop_assert!(out.is_infeasible());
        prop_assert_eq!(out.n_constraints(), 1);
    }
}
