use rand_distr::StandardNormal;
use std::fmt::{self, Display};
use super::*;

/// Gaussian distribution parametrized by its central value (mean) and standard deviation.
#[derive(Debug, Clone)]
pub struct Normal {

    loc : f64,

    scale : f64

}

impl Normal {

    pub fn new(loc : f64, scale : f64) -> Result<Self> {
        let scale = check_param("standard_deviation", scale, |s| s > 0.0, "must be positive")?;
        Ok(Self { loc, scale })
    }

    pub fn std_dev(&self) -> f64 {
        self.scale
    }

    pub fn var(&self) -> f64 {
        self.scale.powf(2.)
    }

}

impl rand_distr::Distribution<f64> for Normal {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        let z : f64 = rng.sample(StandardNormal);
        z * self.scale + self.loc
    }

}

impl Distribution for Normal {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        &self.loc
    }

    fn sample_with<R>(&self, rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        rand_distr::Distribution::sample(self, rng)
    }

    fn log_prob(&self, x : &f64) -> f64 {
        normal_log_prob(*x, self.loc, self.scale)
    }

}

impl Display for Normal {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Norm({}, {})", self.loc, self.scale)
    }

}
