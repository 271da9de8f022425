//! Random bounded linear systems (box + integer cuts) with replay tokens.
//!
//! Model
//! - Start from the box `[-R, R]^n`, then add `cuts` random half-spaces
//!   `a·x <= c` with integer `a` and `c > 0`, so the origin stays interior and
//!   the region is bounded and full-dimensional.
//! - Optionally add `strict_cuts` strict half-spaces `a·x < c` of the same kind.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::field::OrderedField;
use crate::ring::Ring;
use crate::system::{LinearSystem, Relation};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomSystemCfg {
    pub dim: usize,
    /// Non-strict random cuts on top of the box.
    pub cuts: usize,
    /// Strict random cuts.
    pub strict_cuts: usize,
    /// Coefficients are drawn from `[-coeff_max, coeff_max]`.
    pub coeff_max: i64,
    /// Box half-width `R`.
    pub box_radius: i64,
    /// Right-hand sides are drawn from `[1, offset_max]`.
    pub offset_max: i64,
}

impl Default for RandomSystemCfg {
    fn default() -> Self {
        Self {
            dim: 3,
            cuts: 6,
            strict_cuts: 0,
            coeff_max: 3,
            box_radius: 4,
            offset_max: 5,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a bounded system over `x0..x{dim-1}`.
pub fn draw_bounded_system<F: OrderedField>(
    cfg: RandomSystemCfg,
    tok: ReplayToken,
) -> Result<LinearSystem<F>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.dim;
    let r = F::from_i64(cfg.box_radius.max(1));
    let mut sys = LinearSystem::universe(Ring::with_prefix("x", n));
    for i in 0..n {
        let mut e = vec![F::zero(); n];
        e[i] = F::one();
        sys.add_linear_constraint(&e, -r.clone(), Relation::Le)?;
        e[i] = -F::one();
        sys.add_linear_constraint(&e, -r.clone(), Relation::Le)?;
    }
    let cuts = std::iter::repeat(Relation::Le)
        .take(cfg.cuts)
        .chain(std::iter::repeat(Relation::Lt).take(cfg.strict_cuts));
    for rel in cuts {
        let a = random_normal(&mut rng, n, cfg.coeff_max.max(1));
        let c = rng.gen_range(1..=cfg.offset_max.max(1));
        let a: Vec<F> = a.into_iter().map(F::from_i64).collect();
        sys.add_linear_constraint(&a, F::from_i64(-c), rel)?;
    }
    Ok(sys)
}

fn random_normal<R: Rng>(rng: &mut R, n: usize, m: i64) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    loop {
        let a: Vec<i64> = (0..n).map(|_| rng.gen_range(-m..=m)).collect();
        if a.iter().any(|&x| x != 0) {
            return a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn replay_is_deterministic() {
        let cfg = RandomSystemCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a: LinearSystem<BigRational> = draw_bounded_system(cfg, tok).unwrap();
        let b: LinearSystem<BigRational> = draw_bounded_system(cfg, tok).unwrap();
        assert_eq!(a, b);
        let c: LinearSystem<BigRational> =
            draw_bounded_system(cfg, ReplayToken { seed: 7, index: 4 }).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn origin_is_interior() {
        let cfg = RandomSystemCfg {
            strict_cuts: 2,
            ..RandomSystemCfg::default()
        };
        for index in 0..5 {
            let sys: LinearSystem<BigRational> =
                draw_bounded_system(cfg, ReplayToken { seed: 1, index }).unwrap();
            let origin = vec![BigRational::from_i64(0); cfg.dim];
            assert!(sys.contains(&origin).unwrap());
            assert!(!sys.lt_forms().is_empty());
        }
    }
}
