use super::special::{cross_polytope, hypercube, simplex};
use super::Polyhedron;
use crate::error::ElimError;
use crate::field::{q, row_from_i64};
use crate::random::{draw_bounded_system, RandomSystemCfg, ReplayToken};
use crate::ring::Ring;
use crate::system::{LinearSystem, Relation};
use num_rational::BigRational;

type Q = BigRational;

fn qi(n: i64) -> Q {
    q(n, 1)
}

fn pts(rows: &[&[i64]]) -> Vec<Vec<Q>> {
    rows.iter().map(|r| row_from_i64(r)).collect()
}

#[test]
fn special_polytopes_have_expected_vertex_counts() {
    for n in 1..=4 {
        assert_eq!(hypercube(n, qi(1)).vertices().len(), 1 << n);
        assert_eq!(cross_polytope(n, qi(1)).vertices().len(), 2 * n);
        assert_eq!(simplex::<Q>(n).vertices().len(), n + 1);
    }
    let sq = hypercube(2, qi(3));
    assert_eq!(sq.vertices(), pts(&[&[-3, -3], &[-3, 3], &[3, -3], &[3, 3]]).as_slice());
}

#[test]
fn octahedron_vertices_are_unit_vectors() {
    let oct = cross_polytope(3, qi(1));
    let expected = pts(&[
        &[-1, 0, 0],
        &[0, -1, 0],
        &[0, 0, -1],
        &[0, 0, 1],
        &[0, 1, 0],
        &[1, 0, 0],
    ]);
    assert_eq!(oct.vertices(), expected.as_slice());
}

#[test]
fn hull_of_points_drops_interior_and_recovers_facets() {
    let p = Polyhedron::from_vertices(
        2,
        pts(&[&[0, 0], &[2, 0], &[0, 2], &[2, 2], &[1, 1], &[1, 0]]),
    )
    .unwrap();
    assert_eq!(p.vertices(), pts(&[&[0, 0], &[0, 2], &[2, 0], &[2, 2]]).as_slice());
    assert_eq!(p.inequalities_list().len(), 4);
    assert!(p.equations_list().is_empty());
}

#[test]
fn degenerate_and_malformed_input() {
    assert_eq!(
        Polyhedron::from_vertices(2, pts(&[&[0, 0], &[1, 1], &[2, 2]])),
        Err(ElimError::Degenerate {
            rank: 1,
            ambient_dim: 2
        })
    );
    assert_eq!(
        Polyhedron::from_vertices(2, pts(&[&[0, 0], &[1]])),
        Err(ElimError::Dimension {
            expected: 2,
            found: 1
        })
    );
    assert!(matches!(
        Polyhedron::<Q>::from_hrep(2, vec![row_from_i64(&[1, 0])], vec![]),
        Err(ElimError::Dimension { expected: 3, .. })
    ));
    assert!(Polyhedron::<Q>::from_vertices(3, vec![]).unwrap().has_no_vertices());
    assert!(matches!(
        hypercube(2, qi(1)).project(&[0, 5]),
        Err(ElimError::Index { index: 5, ngens: 2 })
    ));
}

#[test]
fn system_round_trip_through_double_description() {
    let oct = cross_polytope(3, qi(2));
    let sys = LinearSystem::from_double_description(&oct, None).unwrap();
    assert_eq!(sys.ring().names(), &["x0", "x1", "x2"]);
    assert_eq!(sys.le_forms().len(), 8);
    assert!(sys.contains(&[qi(1), qi(-1), qi(0)]).unwrap());
    assert!(!sys.contains(&[qi(1), qi(1), q(1, 100)]).unwrap());
    let back = sys.to_double_description().unwrap();
    assert_eq!(back.vertices(), oct.vertices());

    let named = Ring::new(["a", "b", "c"]).unwrap();
    let sys = LinearSystem::from_double_description(&oct, Some(named)).unwrap();
    assert_eq!(sys.ring().names(), &["a", "b", "c"]);
    assert_eq!(
        LinearSystem::from_double_description(&oct, Some(Ring::with_prefix("t", 2))),
        Err(ElimError::Dimension {
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn strict_systems_have_no_double_description() {
    let mut s = LinearSystem::<Q>::universe(Ring::with_prefix("x", 1));
    s.add_linear_constraint(&[qi(1)], qi(0), Relation::Lt).unwrap();
    assert_eq!(
        s.to_double_description(),
        Err(ElimError::StrictInequality)
    );
}

#[test]
fn equations_cut_a_face() {
    // |x| <= 1, |y| <= 1, z = 1
    let mut s = LinearSystem::<Q>::universe(Ring::new(["x", "y", "z"]).unwrap());
    for i in 0..2 {
        for sign in [1, -1] {
            let mut a = vec![qi(0); 3];
            a[i] = qi(sign);
            s.add_linear_constraint(&a, qi(-1), Relation::Le).unwrap();
        }
    }
    s.add_linear_constraint(&[qi(0), qi(0), qi(1)], qi(-1), Relation::Eq).unwrap();
    let p = s.to_double_description().unwrap();
    assert_eq!(p.equations_list().len(), 1);
    assert_eq!(
        p.vertices(),
        pts(&[&[-1, -1, 1], &[-1, 1, 1], &[1, -1, 1], &[1, 1, 1]]).as_slice()
    );
}

#[test]
fn infeasible_store_has_no_vertices() {
    let mut s = LinearSystem::<Q>::universe(Ring::with_prefix("x", 2));
    s.add_linear_constraint(&[qi(1), qi(0)], qi(0), Relation::Le).unwrap();
    s.add_linear_constraint(&[qi(1), qi(0)], qi(-1), Relation::Ge).unwrap();
    let out = s.eliminate_index(0).unwrap();
    assert!(out.is_infeasible());
    assert!(out.to_double_description().unwrap().has_no_vertices());
}

#[test]
fn elimination_matches_vertex_projection_on_octahedron() {
    let oct = cross_polytope(3, qi(1));
    let sys = LinearSystem::from_double_description(&oct, None).unwrap();
    let shadow = sys
        .coordinate_projection(&["x1"])
        .unwrap()
        .to_double_description()
        .unwrap();
    assert_eq!(
        shadow.vertices(),
        pts(&[&[-1, 0], &[0, -1], &[0, 1], &[1, 0]]).as_slice()
    );
    assert_eq!(shadow.vertices(), oct.project(&[0, 2]).unwrap().vertices());
}

#[test]
fn elimination_matches_vertex_projection_on_random_polytopes() {
    let cfg = RandomSystemCfg::default();
    for index in 0..3 {
        let sys: LinearSystem<Q> =
            draw_bounded_system(cfg, ReplayToken { seed: 5, index }).unwrap();
        let full = sys.to_double_description().unwrap();
        for (gone, keep) in [("x0", [1, 2]), ("x1", [0, 2]), ("x2", [0, 1])] {
            let by_elim = sys
                .coordinate_projection(&[gone])
                .unwrap()
                .to_double_description()
                .unwrap();
            let by_vertices = full.project(&keep).unwrap();
            assert_eq!(by_elim.vertices(), by_vertices.vertices(), "dropping {gone}");
        }
    }
}

#[test]
fn unbounded_region_has_no_vertices_but_is_not_empty() {
    // x >= 0 in R^2
    let half_plane = Polyhedron::from_hrep(2, vec![row_from_i64::<Q>(&[0, 1, 0])], vec![]).unwrap();
    assert!(half_plane.has_no_vertices());
    let sys = LinearSystem::from_double_description(&half_plane, None).unwrap();
    assert!(!sys.is_infeasible());
    assert!(sys.contains(&[qi(1), qi(-7)]).unwrap());
}

#[test]
#[should_panic(expected = "overflow usize")]
fn cross_polytope_rejects_uncountable_facets() {
    let _ = cross_polytope(usize::BITS as usize, qi(1));
}
