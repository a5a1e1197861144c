/// Piecewise-linear interpolation over tabulated abscissas.
mod interp;

pub use interp::*;

/// Empirical cumulative distributions: quantile tables built from tabulated densities
/// and sample CDFs compared via the Kolmogorov-Smirnov distance.
mod empirical;

pub use empirical::*;
