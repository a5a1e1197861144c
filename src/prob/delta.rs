use std::fmt::{self, Display};
use super::*;

/// Point mass: a value known without uncertainty.
#[derive(Debug, Clone)]
pub struct Delta {
    loc : f64
}

impl Delta {

    pub fn new(loc : f64) -> Self {
        Self { loc }
    }

}

impl rand_distr::Distribution<f64> for Delta {

    fn sample<R>(&self, _rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        self.loc
    }

}

impl Distribution for Delta {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        &self.loc
    }

    fn sample_with<R>(&self, _rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        self.loc
    }

    /// 0 (certainty) at the central value, -inf everywhere else.
    fn log_prob(&self, x : &f64) -> f64 {
        if *x == self.loc {
            0.
        } else {
            f64::NEG_INFINITY
        }
    }

}

impl Display for Delta {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delta({})", self.loc)
    }

}
