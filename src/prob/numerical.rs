use std::fmt::{self, Display};
use crate::approx::{Empirical, Linear};
use super::*;

/// Distribution defined by a density tabulated over an increasing grid (e.g. a
/// likelihood profile published as a table). The density is normalized by its
/// trapezoid integral; the log-density is linearly interpolated between grid nodes
/// and is -inf outside the grid; sampling goes through the inverse of the tabulated
/// CDF. All tables are built at construction.
#[derive(Debug, Clone)]
pub struct Numerical {

    loc : f64,

    log_dens : Linear,

    cdf : Empirical

}

impl Numerical {

    /// Builds the distribution from abscissas x (strictly increasing, finite) and
    /// density samples y (finite, non-negative, not all zero). When no central value
    /// is informed, the mode of the table (first abscissa of maximal y) is used.
    pub fn new(x : Vec<f64>, y : Vec<f64>, central_value : Option<f64>) -> Result<Self> {
        if y.iter().any(|y| !y.is_finite() || *y < 0.0 ) {
            return Err(DistrError::InvalidGrid("Density samples should be finite and non-negative".to_string()));
        }
        if x.len() != y.len() {
            return Err(DistrError::InvalidGrid(format!(
                "Abscissa has {} entries but density has {}",
                x.len(),
                y.len()
            )));
        }
        let area = trapezoid(&x, &y);
        if !(area > 0.0) || !area.is_finite() {
            return Err(DistrError::InvalidGrid(format!("Density has no mass (integral = {})", area)));
        }
        let dens : Vec<f64> = y.iter().map(|y| y / area ).collect();
        let log_dens = Linear::new(
            x.clone(),
            dens.iter().map(|d| d.ln() ).collect(),
            (f64::NEG_INFINITY, f64::NEG_INFINITY)
        )?;
        let loc = match central_value {
            Some(c) => c,
            None => mode(&x, &y)
        };
        log::debug!("Tabulated distribution over {} nodes in [{}, {}] (central value {})", x.len(), x[0], x[x.len() - 1], loc);
        let cdf = Empirical::from_density(x, &dens)?;
        Ok(Self { loc, log_dens, cdf })
    }

    /// Inverse of the tabulated CDF. Maps 0 (or less) to the first grid node and 1
    /// (or more) to the last grid node.
    pub fn quantile(&self, p : f64) -> f64 {
        self.cdf.quantile(p)
    }

    pub fn cdf(&self, x : f64) -> f64 {
        self.cdf.cdf(x)
    }

    /// Grid nodes and the normalized density at each node.
    pub fn table(&self) -> (Vec<f64>, Vec<f64>) {
        let (xs, log_ys) = self.log_dens.nodes();
        (xs.to_vec(), log_ys.iter().map(|ly| ly.exp() ).collect())
    }

    pub fn domain(&self) -> (f64, f64) {
        self.log_dens.domain()
    }

}

// Trapezoid integral of y over x. Assumes x and y have the same length.
fn trapezoid(x : &[f64], y : &[f64]) -> f64 {
    x.windows(2).zip(y.windows(2)).fold(0.0, |acc, (xw, yw)| acc + 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]) )
}

// First abscissa at which y attains its maximum.
fn mode(x : &[f64], y : &[f64]) -> f64 {
    let mut best = 0;
    for i in 1..y.len() {
        if y[i] > y[best] {
            best = i;
        }
    }
    x[best]
}

impl rand_distr::Distribution<f64> for Numerical {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        let u : f64 = rng.gen();
        self.cdf.quantile(u)
    }

}

impl Distribution for Numerical {

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
        self.log_dens.eval(*x)
    }

}

impl Display for Numerical {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.domain();
        write!(f, "Numerical({}; [{}, {}])", self.loc, lo, hi)
    }

}
