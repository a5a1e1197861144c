use rand_distr::StandardNormal;
use statrs::function::erf;
use std::f64::consts::{LN_2, SQRT_2};
use std::fmt::{self, Display};
use super::*;

/// Gaussian truncated at its mode. The sign of the standard deviation selects the
/// populated side: a positive deviation puts all mass above the central value, a
/// negative one below it.
#[derive(Debug, Clone)]
pub struct HalfNormal {

    loc : f64,

    scale : f64

}

impl HalfNormal {

    pub fn new(loc : f64, scale : f64) -> Result<Self> {
        let scale = check_param("standard_deviation", scale, |s| s != 0.0, "must be non-zero")?;
        Ok(Self { loc, scale })
    }

    /// Signed standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.scale
    }

}

impl rand_distr::Distribution<f64> for HalfNormal {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        let z : f64 = rng.sample(StandardNormal);
        self.loc + self.scale.signum() * (z * self.scale).abs()
    }

}

impl Distribution for HalfNormal {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        &self.loc
    }

    fn sample_with<R>(&self, rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        rand_distr::Distribution::sample(self, rng)
    }

    /// -inf at the unpopulated side; log(2) plus the Gaussian log-density at the
    /// populated side (the factor two restores the mass lost by truncation).
    fn log_prob(&self, x : &f64) -> f64 {
        if self.scale.signum() * (*x - self.loc) < 0.0 {
            f64::NEG_INFINITY
        } else {
            LN_2 + normal_log_prob(*x, self.loc, self.scale.abs())
        }
    }

}

impl Display for HalfNormal {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HalfNorm({}, {})", self.loc, self.scale)
    }

}

/// One-sided upper limit on a non-negative quantity, represented as a half-normal
/// centered at zero. The limit at the informed confidence level is converted into
/// the half-normal standard deviation sigma such that Phi(limit / sigma) = 0.5 + cl / 2,
/// i.e. sigma = limit / Phi^-1(0.5 + cl / 2) = limit / (sqrt(2) * erf^-1(cl)).
#[derive(Debug, Clone)]
pub struct GaussianUpperLimit {

    half : HalfNormal,

    limit : f64,

    confidence_level : f64

}

impl GaussianUpperLimit {

    pub fn new(limit : f64, confidence_level : f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence_level) {
            return Err(DistrError::ConfidenceLevel(confidence_level));
        }
        let half = HalfNormal::new(0.0, Self::std_dev_for(limit, confidence_level))?;
        Ok(Self { half, limit, confidence_level })
    }

    /// Converts the confidence level into a Gaussian standard deviation.
    pub fn std_dev_for(limit : f64, confidence_level : f64) -> f64 {
        limit / (SQRT_2 * erf::erf_inv(confidence_level))
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn std_dev(&self) -> f64 {
        self.half.std_dev()
    }

    pub fn as_half_normal(&self) -> &HalfNormal {
        &self.half
    }

}

impl rand_distr::Distribution<f64> for GaussianUpperLimit {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        rand_distr::Distribution::sample(&self.half, rng)
    }

}

impl Distribution for GaussianUpperLimit {

    type Value = f64;

    fn central_value(&self) -> &f64 {
        self.half.central_value()
    }

    fn sample_with<R>(&self, rng : &mut R) -> f64
        where R : Rng + ?Sized
    {
        self.half.sample_with(rng)
    }

    fn log_prob(&self, x : &f64) -> f64 {
        self.half.log_prob(x)
    }

}

impl Display for GaussianUpperLimit {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UpperLimit({} @ {})", self.limit, self.confidence_level)
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    const EPS : f64 = 1E-10;

    #[test]
    fn empty_side() {
        let h = HalfNormal::new(1.0, 2.0).unwrap();
        assert_eq!(h.log_prob(&0.99), f64::NEG_INFINITY);
        assert!((h.log_prob(&1.0) - (LN_2 + normal_log_prob(1.0, 1.0, 2.0))).abs() < EPS);

        let h = HalfNormal::new(1.0, -2.0).unwrap();
        assert_eq!(h.log_prob(&1.01), f64::NEG_INFINITY);
        assert!((h.log_prob(&-1.0) - (LN_2 + normal_log_prob(-1.0, 1.0, 2.0))).abs() < EPS);
        assert!(h.sample_n(200).iter().all(|s| *s <= 1.0 ));
    }

    #[test]
    fn upper_limit_std_dev() {
        // One-sided 90% limit of 1.0 puts the limit at the 95th percentile of the
        // parent Gaussian (z = 1.6448536...).
        let u = GaussianUpperLimit::new(1.0, 0.9).unwrap();
        assert!((u.std_dev() - 1.0 / 1.644_853_626_951_472_2).abs() < 1E-8);
        let cdf = 0.5 * (1.0 + erf::erf(u.limit() / (u.std_dev() * SQRT_2)));
        assert!((cdf - 0.95).abs() < 1E-8);
        assert_eq!(*u.central_value(), 0.0);
        assert_eq!(u.limit(), 1.0);
        assert_eq!(u.confidence_level(), 0.9);
    }

    #[test]
    fn upper_limit_bad_confidence() {
        assert!(GaussianUpperLimit::new(1.0, 1.5).is_err());
        assert!(GaussianUpperLimit::new(1.0, -0.1).is_err());
    }

    #[test]
    fn zero_std_dev() {
        assert!(HalfNormal::new(0.0, 0.0).is_err());

        // Limits at 0 and 100% confidence give degenerate widths.
        assert!(GaussianUpperLimit::new(1.0, 0.0).is_err());
        assert!(GaussianUpperLimit::new(1.0, 1.0).is_err());
    }

}
