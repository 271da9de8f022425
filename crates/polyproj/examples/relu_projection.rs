//! Projection of a one-neuron ReLU encoding onto its input/output/selector variables.
//!
//! Purpose
//! - Show the big-M style encoding of `y = max(W x + b, 0)` with a relaxed
//!   selector `z in [0, 1]`, and the exact region left after eliminating the
//!   two auxiliary copies `x0`, `x1` of the input.
//!
//! Why this shape
//! - Every auxiliary variable is bounded on both sides, so Fourier–Motzkin
//!   produces a small system (twelve inequalities here) and the result can be
//!   checked by eye.
//! - The same projection is then compared against the vertex shadow of the
//!   full system.

use std::time::Instant;

use polyproj::prelude::*;

fn main() {
    let (l, u, w, b) = (q(-2, 1), q(2, 1), q(1, 1), q(1, 2));
    let r = Ring::new(["x0", "x1", "x", "y", "z"]).expect("distinct names");
    let v = |n: &str| r.var::<BigRational>(n).expect("known variable");
    let c = |x: BigRational| r.constant(x);
    let (x0, x1, x, y, z) = (v("x0"), v("x1"), v("x"), v("y"), v("z"));

    let le = vec![
        &x0 + &x1 - &x,
        -&x0 - &x1 + &x,
        -&y,
        x0.scale(&w) - z.scale(&b) + c(b.clone()),
        x1.scale(&w) - &y + z.scale(&b),
        -x1.scale(&w) + &y - z.scale(&b),
        &x0 + z.scale(&u) - c(u.clone()),
        -&x0 - z.scale(&l) + c(l.clone()),
        &x1 - z.scale(&u),
        -&x1 + z.scale(&l),
    ];
    let bsa = LinearSystem::new(r.clone(), vec![], vec![], le).expect("linear input");

    let t0 = Instant::now();
    let out = bsa
        .coordinate_projection(&["x0", "x1"])
        .expect("targets exist");
    let elapsed = t0.elapsed().as_secs_f64() * 1e3;

    println!("ring=[{}] constraints={}", out.ring(), out.n_constraints());
    for p in out.le_poly() {
        println!("  {p} <= 0");
    }
    println!("elimination_time_ms={elapsed:.3}");

    // Bounded in (x, y); add z's box to compare against the vertex shadow.
    let mut boxed = bsa.clone();
    boxed
        .add_polynomial_constraint(&(-&z), Relation::Le)
        .expect("linear");
    boxed
        .add_polynomial_constraint(&(&z - &c(q(1, 1))), Relation::Le)
        .expect("linear");
    let full = boxed.to_double_description().expect("no strict rows");
    let shadow = full.project(&[2, 3, 4]).expect("full-dimensional image");
    let mut proj = out.clone();
    let rz = out.ring().var::<BigRational>("z").expect("z survives");
    proj.add_polynomial_constraint(&(-&rz), Relation::Le).expect("linear");
    proj.add_polynomial_constraint(&(&rz - &out.ring().constant(q(1, 1))), Relation::Le)
        .expect("linear");
    let by_elim = proj.to_double_description().expect("no strict rows");
    println!(
        "vertices: elimination={} shadow={} agree={}",
        by_elim.vertices().len(),
        shadow.vertices().len(),
        by_elim.vertices() == shadow.vertices()
    );
}
