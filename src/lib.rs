/// Distributions representing measured or predicted values with uncertainty:
/// uniform, delta, normal, asymmetric normal, half normal (and Gaussian upper limits),
/// tabulated (numerical) and multivariate normal distributions, sharing the
/// Distribution trait (central value, sampling and log-density). Also holds the
/// identity-compared Handle and the combination of independent uncertainties on a
/// single quantity.
pub mod prob;

/// Tabulated representations backing the numerical distribution: linear
/// interpolation and empirical cumulative distributions.
pub mod approx;

pub use prob::{
    combine,
    Distribution,
    DistrError,
    Handle,
    Univariate,
    UnivariateSpec,
    MultiNormalSpec,
    Uniform,
    Delta,
    Normal,
    AsymmetricNormal,
    HalfNormal,
    GaussianUpperLimit,
    Numerical,
    MultiNormal
};
