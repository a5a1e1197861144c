use std::fmt::{self, Display};
use super::*;

/// Closed set of scalar-valued distributions. This is the unit that consumers store
/// (usually behind a Handle) and that can be combined. Multivariate normals are
/// deliberately not part of it.
#[derive(Debug, Clone)]
pub enum Univariate {
    Uniform(Uniform),
    Delta(Delta),
    Normal(Normal),
    AsymmetricNormal(AsymmetricNormal),
    HalfNormal(HalfNormal),
    GaussianUpperLimit(GaussianUpperLimit),
    Numerical(Numerical)
}

impl Univariate {

    /// Short name of the distribution kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Univariate::Uniform(_) => "uniform",
            Univariate::Delta(_) => "delta",
            Univariate::Normal(_) => "normal",
            Univariate::AsymmetricNormal(_) => "asymmetric_normal",
            Univariate::HalfNormal(_) => "half_normal",
            Univariate::GaussianUpperLimit(_) => "gaussian_upper_limit",
            Univariate::Numerical(_) => "numerical"
        }
    }

    pub fn into_handle(self) -> Handle<Self> {
        Handle::new(self)
    }

}

impl rand_distr::Distribution<f64> for Univariate {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        self.sample_with(rng)
    }

}

impl Distribution for Univariate {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        match self {
            Univariate::Uniform(d) => d.central_value(),
            Univariate::Delta(d) => d.central_value(),
            Univariate::Normal(d) => d.central_value(),
            Univariate::AsymmetricNormal(d) => d.central_value(),
            Univariate::HalfNormal(d) => d.central_value(),
            Univariate::GaussianUpperLimit(d) => d.central_value(),
            Univariate::Numerical(d) => d.central_value()
        }
    }

    fn sample_with<R>(&self, rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        match self {
            Univariate::Uniform(d) => d.sample_with(rng),
            Univariate::Delta(d) => d.sample_with(rng),
            Univariate::Normal(d) => d.sample_with(rng),
            Univariate::AsymmetricNormal(d) => d.sample_with(rng),
            Univariate::HalfNormal(d) => d.sample_with(rng),
            Univariate::GaussianUpperLimit(d) => d.sample_with(rng),
            Univariate::Numerical(d) => d.sample_with(rng)
        }
    }

    fn log_prob(&self, x : &f64) -> f64 {
        match self {
            Univariate::Uniform(d) => d.log_prob(x),
            Univariate::Delta(d) => d.log_prob(x),
            Univariate::Normal(d) => d.log_prob(x),
            Univariate::AsymmetricNormal(d) => d.log_prob(x),
            Univariate::HalfNormal(d) => d.log_prob(x),
            Univariate::GaussianUpperLimit(d) => d.log_prob(x),
            Univariate::Numerical(d) => d.log_prob(x)
        }
    }

}

impl Display for Univariate {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Univariate::Uniform(d) => Display::fmt(d, f),
            Univariate::Delta(d) => Display::fmt(d, f),
            Univariate::Normal(d) => Display::fmt(d, f),
            Univariate::AsymmetricNormal(d) => Display::fmt(d, f),
            Univariate::HalfNormal(d) => Display::fmt(d, f),
            Univariate::GaussianUpperLimit(d) => Display::fmt(d, f),
            Univariate::Numerical(d) => Display::fmt(d, f)
        }
    }

}

macro_rules! impl_from_kind {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Univariate {

                fn from(d : $kind) -> Self {
                    Univariate::$kind(d)
                }

            }

            impl From<$kind> for Handle<Univariate> {

                fn from(d : $kind) -> Self {
                    Handle::new(Univariate::$kind(d))
                }

            }
        )*
    }
}

impl_from_kind!(Uniform, Delta, Normal, AsymmetricNormal, HalfNormal, GaussianUpperLimit, Numerical);
