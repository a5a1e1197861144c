use std::cmp::Ordering;
use crate::prob::{DistrError, Result};

/// Kolmogorov-Smirnov statistic: Maximum over which two Empirical CDFs
/// or an Emprirical and analytical CDF differ.
#[derive(Debug, Clone, Copy)]
pub struct KS {
    pub val : f64,
    pub diff : f64
}

/// Cumulative distribution function tabulated over an increasing domain. Used
/// both as the inverse-CDF (quantile) table of tabulated densities and as the
/// empirical CDF of a sample.
#[derive(Debug, Clone)]
pub struct Empirical {
    domain : Vec<f64>,
    cprobs : Vec<f64>
}

impl Empirical {

    /// Builds the CDF of a density tabulated at the domain nodes by accumulating
    /// the trapezoid rule. The informed density is assumed normalized; the first and
    /// last cumulative probabilities are set to exactly 0 and 1 to absorb rounding
    /// drift, and the accumulated values are clamped to [0, 1].
    pub fn from_density(domain : Vec<f64>, density : &[f64]) -> Result<Self> {
        if domain.len() != density.len() || domain.len() < 2 {
            return Err(DistrError::InvalidGrid("Density table should have at least two nodes".to_string()));
        }
        let mut cprobs = Vec::with_capacity(domain.len());
        let mut acc = 0.0;
        cprobs.push(acc);
        for i in 1..domain.len() {
            acc += 0.5 * (density[i] + density[i-1]) * (domain[i] - domain[i-1]);
            cprobs.push(acc.min(1.0));
        }
        let n = cprobs.len();
        cprobs[0] = 0.;
        cprobs[n - 1] = 1.;
        Self::from_cumulative_probabilities(domain, cprobs)
    }

    /// Builds the empirical CDF of a sample: each sorted observation carries
    /// cumulative probability (i + 1) / n.
    pub fn from_sample(sample : &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(DistrError::InvalidGrid("Empty sample".to_string()));
        }
        let mut domain = sample.to_vec();
        domain.sort_unstable_by(|s1, s2| s1.partial_cmp(s2).unwrap_or(Ordering::Equal) );
        let n = domain.len() as f64;
        let cprobs = (0..domain.len()).map(|i| (i + 1) as f64 / n ).collect();
        Self::from_cumulative_probabilities(domain, cprobs)
    }

    /// Builds a CDF from its tabulated values. The domain should be finite and
    /// non-decreasing (ties are allowed for samples) and the cumulative probabilities
    /// should be non-decreasing within [0, 1].
    pub fn from_cumulative_probabilities(domain : Vec<f64>, cprobs : Vec<f64>) -> Result<Self> {
        if domain.is_empty() {
            return Err(DistrError::InvalidGrid("Empty cumulative table".to_string()));
        }
        if domain.len() != cprobs.len() {
            return Err(DistrError::InvalidGrid(format!(
                "Domain has {} entries but cumulative probabilities have {}",
                domain.len(),
                cprobs.len()
            )));
        }
        if domain.iter().any(|d| !d.is_finite() ) || domain.windows(2).any(|w| w[1] < w[0] ) {
            return Err(DistrError::InvalidGrid("Domain should be finite and non-decreasing".to_string()));
        }
        if cprobs.iter().any(|c| !(0.0..=1.0).contains(c) ) || cprobs.windows(2).any(|w| w[1] < w[0] ) {
            return Err(DistrError::InvalidGrid("Cumulative probabilities should be non-decreasing within [0, 1]".to_string()));
        }
        Ok(Self { domain, cprobs })
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain[..]
    }

    pub fn cprobs(&self) -> &[f64] {
        &self.cprobs[..]
    }

    /// Inverse of the tabulated CDF, linear between nodes. Maps 0 to the first node
    /// and 1 to the last node exactly; flat stretches of the CDF (zero density) are
    /// skipped over, so the result is non-decreasing in p.
    pub fn quantile(&self, p : f64) -> f64 {
        let n = self.domain.len();
        if p.is_nan() {
            return f64::NAN;
        }
        if p <= 0.0 {
            return self.domain[0];
        }
        if p >= 1.0 {
            return self.domain[n - 1];
        }

        // First node with cumulative probability reaching p.
        let ix = self.cprobs.partition_point(|c| *c < p );
        if ix == 0 {
            return self.domain[0];
        }
        if ix == n {
            return self.domain[n - 1];
        }
        let (c0, c1) = (self.cprobs[ix - 1], self.cprobs[ix]);
        let (x0, x1) = (self.domain[ix - 1], self.domain[ix]);
        x0 + (p - c0) / (c1 - c0) * (x1 - x0)
    }

    /// Cumulative probability at x, linear between nodes.
    pub fn cdf(&self, x : f64) -> f64 {
        let n = self.domain.len();
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.domain[0] {
            return 0.;
        }
        if x >= self.domain[n - 1] {
            return self.cprobs[n - 1];
        }
        let ix = self.domain.partition_point(|d| *d <= x );
        let (c0, c1) = (self.cprobs[ix - 1], self.cprobs[ix]);
        let (x0, x1) = (self.domain[ix - 1], self.domain[ix]);
        c0 + (x - x0) / (x1 - x0) * (c1 - c0)
    }

    /// Two-sample distance between the step CDFs of this and another table.
    pub fn empirical_ks(&self, other : &Self) -> KS {
        let mut max_prob_diff = 0.0;
        let mut max_val = 0.0;
        for v in self.domain.iter().chain(other.domain.iter()) {
            let pdiff = (self.step_cdf(*v) - other.step_cdf(*v)).abs();
            if pdiff > max_prob_diff {
                max_prob_diff = pdiff;
                max_val = *v;
            }
        }
        KS { val : max_val, diff : max_prob_diff }
    }

    /// Distance between this (sample) CDF and an analytical CDF, evaluated at both
    /// sides of every step.
    pub fn analytical_ks(&self, model : &impl statrs::distribution::ContinuousCDF<f64, f64>) -> KS {
        let mut max_prob_diff = 0.0;
        let mut max_val = 0.0;
        for i in 0..self.domain.len() {
            let v = self.domain[i];
            let p = model.cdf(v);
            let before = if i == 0 { 0.0 } else { self.cprobs[i - 1] };
            let pdiff = (p - self.cprobs[i]).abs().max((p - before).abs());
            if pdiff > max_prob_diff {
                max_prob_diff = pdiff;
                max_val = v;
            }
        }
        KS { val : max_val, diff : max_prob_diff }
    }

    // Right-continuous step CDF, as appropriate for samples.
    fn step_cdf(&self, x : f64) -> f64 {
        let ix = self.domain.partition_point(|d| *d <= x );
        if ix == 0 { 0.0 } else { self.cprobs[ix - 1] }
    }

}
