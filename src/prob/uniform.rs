use std::fmt::{self, Display};
use super::*;

/// Flat distribution over the half-open interval
/// [central_value - half_range, central_value + half_range).
#[derive(Debug, Clone)]
pub struct Uniform {

    loc : f64,

    half_range : f64,

    // (lower, upper) bounds, upper excluded.
    bounds : (f64, f64)

}

impl Uniform {

    pub fn new(loc : f64, half_range : f64) -> Result<Self> {
        let half_range = check_param("half_range", half_range, |h| h >= 0.0, "must be non-negative")?;
        let bounds = (loc - half_range, loc + half_range);
        Ok(Self { loc, half_range, bounds })
    }

    pub fn half_range(&self) -> f64 {
        self.half_range
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn contains(&self, x : f64) -> bool {
        x >= self.bounds.0 && x < self.bounds.1
    }

}

impl rand_distr::Distribution<f64> for Uniform {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        let u : f64 = rng.gen();
        self.bounds.0 + u * (self.bounds.1 - self.bounds.0)
    }

}

impl Distribution for Uniform {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        &self.loc
    }

    fn sample_with<R>(&self, rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        rand_distr::Distribution::sample(self, rng)
    }

    /// Returns -log(2 * half_range) inside [lo, hi) and 0 (not -inf) outside it.
    fn log_prob(&self, x : &f64) -> f64 {
        if self.contains(*x) {
            -(2. * self.half_range).ln()
        } else {
            0.
        }
    }

}

impl Display for Uniform {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unif({}, {})", self.bounds.0, self.bounds.1)
    }

}
