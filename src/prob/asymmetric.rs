use rand_distr::StandardNormal;
use std::fmt::{self, Display};
use super::*;

/// Two half-Gaussians glued at the mode, with distinct deviations at each side.
/// Each side is rescaled by 2*p_opposite / (p_left + p_right), where p_left and
/// p_right are the peak densities of the two Gaussians, so that the density is
/// continuous at the central value and integrates to unity. Since p is proportional
/// to 1/sigma, that factor equals 2*sigma_side / (sigma_left + sigma_right), which
/// also holds when one of the deviations is zero.
#[derive(Debug, Clone)]
pub struct AsymmetricNormal {

    loc : f64,

    right : f64,

    left : f64

}

impl AsymmetricNormal {

    pub fn new(loc : f64, right_deviation : f64, left_deviation : f64) -> Result<Self> {
        let right = check_param("right_deviation", right_deviation, |s| s >= 0.0, "must be non-negative")?;
        let left = check_param("left_deviation", left_deviation, |s| s >= 0.0, "must be non-negative")?;
        if right + left == 0.0 {
            return Err(DistrError::InvalidParameter {
                name : "right_deviation",
                value : right,
                reason : "left and right deviations cannot both be zero"
            });
        }
        Ok(Self { loc, right, left })
    }

    pub fn right_deviation(&self) -> f64 {
        self.right
    }

    pub fn left_deviation(&self) -> f64 {
        self.left
    }

    /// Probability mass at the left of the central value.
    pub fn left_prob(&self) -> f64 {
        self.left / (self.left + self.right)
    }

}

impl rand_distr::Distribution<f64> for AsymmetricNormal {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        let r : f64 = rng.gen();
        let z : f64 = rng.sample(StandardNormal);
        if r > self.left_prob() {
            self.loc + (z * self.right).abs()
        } else {
            self.loc - (z * self.left).abs()
        }
    }

}

impl Distribution for AsymmetricNormal {

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
        let dx = *x - self.loc;
        let side = if dx < 0.0 { self.left } else { self.right };

        // Zero-width side: the branch carries no mass away from the mode.
        let z = if dx == 0.0 { 0.0 } else { dx / side };
        (2. / (self.left + self.right)).ln() - LN_SQRT_2PI - z.powf(2.) / 2.
    }

}

impl Display for AsymmetricNormal {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsymNorm({}, +{}, -{})", self.loc, self.right, self.left)
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    const EPS : f64 = 1E-10;

    #[test]
    fn continuous_at_mode() {
        let a = AsymmetricNormal::new(1.0, 0.5, 2.0).unwrap();
        let below = a.log_prob(&(1.0 - 1E-9));
        let above = a.log_prob(&(1.0 + 1E-9));
        assert!((below - above).abs() < 1E-6);
        assert!((a.log_prob(&1.0) - above).abs() < 1E-6);
    }

    #[test]
    fn matches_scaled_normals() {
        let (r, l) = (0.5, 2.0);
        let a = AsymmetricNormal::new(1.0, r, l).unwrap();
        let x = 0.2;
        let left_scale = 2. * l / (l + r);
        assert!((a.log_prob(&x) - (left_scale.ln() + normal_log_prob(x, 1.0, l))).abs() < EPS);
        let x = 1.7;
        let right_scale = 2. * r / (l + r);
        assert!((a.log_prob(&x) - (right_scale.ln() + normal_log_prob(x, 1.0, r))).abs() < EPS);
    }

    #[test]
    fn symmetric_case_is_normal() {
        let a = AsymmetricNormal::new(0.0, 1.5, 1.5).unwrap();
        for x in [-3.0, -0.1, 0.0, 0.4, 2.2].iter() {
            assert!((a.log_prob(x) - normal_log_prob(*x, 0.0, 1.5)).abs() < EPS);
        }
    }

    #[test]
    fn zero_width_side() {
        let a = AsymmetricNormal::new(0.0, 1.0, 0.0).unwrap();
        assert_eq!(a.log_prob(&-0.5), f64::NEG_INFINITY);
        assert!((a.log_prob(&0.5) - ((2.0f64).ln() + normal_log_prob(0.5, 0.0, 1.0))).abs() < EPS);
        assert!(a.sample_n(100).iter().all(|s| *s >= 0.0 ));
    }

    #[test]
    fn invalid_deviations() {
        assert!(AsymmetricNormal::new(0.0, -1.0, 1.0).is_err());
        assert!(AsymmetricNormal::new(0.0, 1.0, -1.0).is_err());
        assert!(AsymmetricNormal::new(0.0, 0.0, 0.0).is_err());
    }

}
