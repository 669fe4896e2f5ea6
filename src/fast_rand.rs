//! Per-thread random number generation.
//!
//! Each worker thread owns an independently seeded `Xoshiro256Plus`, so
//! concurrent draws never contend or correlate. All access goes through
//! [`with_rng`]; the free functions below cover the common draws.

use crate::{Float, Vec2f, Vec3f};
use cgmath::InnerSpace;
use rand::distributions::{Distribution, Standard};
use rand::{FromEntropy, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<Xoshiro256Plus> = RefCell::new(Xoshiro256Plus::from_entropy());
}

/// Runs `f` with exclusive access to this thread's generator.
pub fn with_rng<T>(f: impl FnOnce(&mut Xoshiro256Plus) -> T) -> T {
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

pub fn rand<T>() -> T
where
    Standard: Distribution<T>,
{
    with_rng(|rng| rng.gen())
}

pub fn rand_range(low: Float, high: Float) -> Float {
    with_rng(|rng| rng.gen_range(low, high))
}

/// Reseeds the calling thread's generator; draws on this thread are
/// deterministic from here on.
pub fn set_seed(seed: u64) {
    RNG.with(|cell| {
        cell.replace(Xoshiro256Plus::seed_from_u64(seed));
    })
}

pub fn random_in_unit_sphere() -> Vec3f {
    loop {
        let p = Vec3f::new(rand::<Float>(), rand(), rand()) * 2.0 - Vec3f::new(1.0, 1.0, 1.0);
        if p.magnitude2() < 1.0 {
            return p;
        }
    }
}

pub fn random_in_unit_disk() -> Vec2f {
    loop {
        let p = Vec2f::new(rand::<Float>(), rand()) * 2.0 - Vec2f::new(1.0, 1.0);
        if p.magnitude2() < 1.0 {
            return p;
        }
    }
}
