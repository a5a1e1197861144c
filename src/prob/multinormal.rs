use nalgebra::*;
use rand_distr::StandardNormal;
use std::fmt::{self, Display};
use super::*;

const SYMMETRY_EPS : f64 = 1E-10;

/// Multivariate normal parametrized by μ (px1) and Σ (pxp), with Σ strictly
/// positive-definite.
///
/// Log-densities are evaluated on the standardized problem: the point and μ are divided
/// by the marginal standard deviations D = sqrt(diag Σ), and the density is taken with
/// respect to the correlation matrix D^-1 Σ D^-1. The term log(det(D^-1 Σ D^-1) / det Σ) / 2
/// recovers the normalization of the unscaled problem. The result equals the plain
/// multivariate normal log-density, but stays well conditioned when the variances differ
/// by orders of magnitude.
#[derive(Debug, Clone)]
pub struct MultiNormal {

    mu : DVector<f64>,

    sigma : DMatrix<f64>,

    // Lower Cholesky factor of sigma, used for sampling.
    sigma_low : DMatrix<f64>,

    // Marginal standard deviations sqrt(diag sigma).
    err : DVector<f64>,

    // Cholesky factorization of the correlation matrix.
    corr_chol : Cholesky<f64, Dyn>,

    // log(det(corr) / det(sigma)) / 2
    log_det_correction : f64

}

impl MultiNormal {

    /// Builds a new multivariate distribution from a mu vector and positive-definite
    /// covariance matrix sigma.
    pub fn new(mu : DVector<f64>, sigma : DMatrix<f64>) -> Result<Self> {
        if sigma.nrows() != sigma.ncols() {
            return Err(DistrError::DimensionMismatch { expected : sigma.nrows(), found : sigma.ncols() });
        }
        if mu.nrows() != sigma.nrows() {
            return Err(DistrError::DimensionMismatch { expected : mu.nrows(), found : sigma.nrows() });
        }
        if mu.nrows() == 0 || !is_pd(&sigma) {
            return Err(DistrError::NotPositiveDefinite);
        }
        let sigma_chol = Cholesky::new(sigma.clone()).ok_or(DistrError::NotPositiveDefinite)?;
        let err = sigma.diagonal().map(|d| d.sqrt() );
        let corr = Self::corr_from(sigma.clone());
        let corr_chol = Cholesky::new(corr).ok_or(DistrError::NotPositiveDefinite)?;
        let log_det_correction = 0.5 * (log_det(&corr_chol) - log_det(&sigma_chol));
        Ok(Self { mu, sigma, sigma_low : sigma_chol.l(), err, corr_chol, log_det_correction })
    }

    /// Rescales a covariance into the correlation matrix D^{-1/2} cov D^{-1/2}.
    pub fn corr_from(mut cov : DMatrix<f64>) -> DMatrix<f64> {
        let mut diag_m = DMatrix::zeros(cov.nrows(), cov.ncols());
        let diag = cov.diagonal().map(|d| 1. / d.sqrt() );
        diag_m.set_diagonal(&diag);
        cov *= &diag_m;
        diag_m *= cov;
        diag_m
    }

    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.sigma
    }

    pub fn std_dev(&self) -> &DVector<f64> {
        &self.err
    }

    pub fn dim(&self) -> usize {
        self.mu.nrows()
    }

    /// Draws n realizations, arranged over the rows of the output.
    pub fn sample_matrix(&self, n : usize) -> DMatrix<f64> {
        let mut rng = rand::thread_rng();
        let mut dst = DMatrix::zeros(n, self.dim());
        for (i, s) in (0..n).map(|_| self.sample_with(&mut rng) ).enumerate() {
            dst.row_mut(i).copy_from(&s.transpose());
        }
        dst
    }

}

/// Whether the matrix is symmetric (up to rounding) and all its eigenvalues are
/// strictly positive, which for symmetric matrices is equivalent to the Cholesky
/// factorization succeeding.
pub fn is_pd(m : &DMatrix<f64>) -> bool {
    if m.nrows() != m.ncols() || m.iter().any(|v| !v.is_finite() ) {
        return false;
    }
    let symm_m = build_symmetric(m.clone());
    let tol = SYMMETRY_EPS * m.amax().max(1.0);
    if (m - &symm_m).amax() > tol {
        return false;
    }
    Cholesky::new(symm_m).is_some()
}

/// Builds a symmetric matrix from M as (1/2)*(M + M^T)
pub fn build_symmetric(m : DMatrix<f64>) -> DMatrix<f64> {
    let mt = m.transpose();
    (m + mt).scale(0.5)
}

fn log_det(chol : &Cholesky<f64, Dyn>) -> f64 {
    2. * chol.l_dirty().diagonal().iter().map(|d| d.ln() ).sum::<f64>()
}

// Based on the statslib impl
pub(crate) fn multinormal_log_prob(x : &DVector<f64>, mean : &DVector<f64>, cov_chol : &Cholesky<f64, Dyn>) -> f64 {

    let partition = -0.5 * x.nrows() as f64 * (2.0*std::f64::consts::PI).ln();

    let xc = x - mean;

    // x^T S^-1 x
    let mahalanobis = xc.dot(&cov_chol.solve(&xc));

    partition - 0.5 * (log_det(cov_chol) + mahalanobis)
}

impl Distribution for MultiNormal {

    type Value = DVector<f64>;

    fn central_value(&self) -> &DVector<f64> {
        &self.mu
    }

    fn sample_with<R>(&self, rng : &mut R) -> DVector<f64>
        where R : Rng + ?Sized
    {
        let z = DVector::from_fn(self.dim(), |_, _| rng.sample::<f64, _>(StandardNormal) );

        // Scale independent draws by the lower Cholesky factor (matrix square root)
        &self.sigma_low * z + &self.mu
    }

    /// Returns -inf for points of the wrong dimension.
    fn log_prob(&self, x : &DVector<f64>) -> f64 {
        if x.nrows() != self.dim() {
            return f64::NEG_INFINITY;
        }
        let x_scaled = x.component_div(&self.err);
        let mu_scaled = self.mu.component_div(&self.err);
        multinormal_log_prob(&x_scaled, &mu_scaled, &self.corr_chol) + self.log_det_correction
    }

}

impl Display for MultiNormal {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MNorm({})", self.mu.nrows())
    }

}
