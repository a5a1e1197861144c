use std::fmt::Debug;
use rand::Rng;
use thiserror::Error;

mod handle;

pub use handle::*;

mod uniform;

pub use uniform::*;

mod delta;

pub use delta::*;

mod normal;

pub use normal::*;

mod asymmetric;

pub use asymmetric::*;

mod halfnormal;

pub use halfnormal::*;

mod numerical;

pub use numerical::*;

mod multinormal;

pub use multinormal::*;

mod univariate;

pub use univariate::*;

mod combine;

pub use combine::*;

mod spec;

pub use spec::*;

/// Trait shared by all distributions representing a measured or predicted
/// quantity. A distribution is fixed at construction: the central value and any
/// derived state never change afterwards, so all methods take &self and the same
/// instance can be queried (and sampled) from several threads.
///
/// Univariate kinds carry a scalar (f64) value; the multivariate normal carries a
/// DVector<f64>.
pub trait Distribution
    where Self : Debug
{

    type Value : Clone;

    /// Returns the representative (best-fit) value of the distribution, which
    /// is independent of its spread.
    fn central_value(&self) -> &Self::Value;

    /// Draws a single realization using the informed generator.
    fn sample_with<R>(&self, rng : &mut R) -> Self::Value
        where R : Rng + ?Sized;

    /// Draws a single realization using the thread-local generator.
    fn sample(&self) -> Self::Value {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Draws n independent realizations using the thread-local generator.
    fn sample_n(&self, n : usize) -> Vec<Self::Value> {
        let mut rng = rand::thread_rng();
        (0..n).map(|_| self.sample_with(&mut rng) ).collect()
    }

    /// Natural logarithm of the density at x. Defined over the whole domain of
    /// the random variable: points outside the support report a well-defined value
    /// (see each implementor) instead of failing.
    fn log_prob(&self, x : &Self::Value) -> f64;

}

/// Errors raised while building or combining distributions. All of them are
/// raised eagerly (at construction or combination time); evaluating densities
/// and sampling never fail.
#[derive(Debug, Error)]
pub enum DistrError {

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter { name : &'static str, value : f64, reason : &'static str },

    #[error("Confidence level should be between 0 and 1 (got {0})")]
    ConfidenceLevel(f64),

    #[error("Covariance matrix is not positive definite")]
    NotPositiveDefinite,

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected : usize, found : usize },

    #[error("Invalid tabulated distribution: {0}")]
    InvalidGrid(String),

    #[error("All distributions to be combined must have the same central value (expected {expected}, found {found})")]
    InconsistentCentral { expected : f64, found : f64 },

    #[error("Combination only implemented for normal and delta distributions (found {0})")]
    UnsupportedCombination(&'static str),

    #[error("Cannot combine an empty set of distributions")]
    EmptyCombination,

    #[error("Unable to parse distribution: {0}")]
    Json(#[from] serde_json::Error)

}

pub type Result<T> = std::result::Result<T, DistrError>;

/// Natural log of sqrt(2 pi).
pub(crate) const LN_SQRT_2PI : f64 = 0.918_938_533_204_672_7;

// based on stats::dnorm.ipp
pub(crate) fn normal_log_prob(x : f64, mu : f64, stddev : f64) -> f64 {
    std_normal_log_prob((x - mu) / stddev, stddev)
}

pub(crate) fn std_normal_log_prob(z : f64, stddev : f64) -> f64 {
    -LN_SQRT_2PI - stddev.ln() - z.powf(2.0) / 2.0
}

/// Validates a scalar parameter which must be finite and satisfy the informed predicate.
pub(crate) fn check_param(
    name : &'static str,
    value : f64,
    valid : impl Fn(f64) -> bool,
    reason : &'static str
) -> Result<f64> {
    if value.is_finite() && valid(value) {
        Ok(value)
    } else {
        Err(DistrError::InvalidParameter { name, value, reason })
    }
}
