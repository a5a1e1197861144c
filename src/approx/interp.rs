use crate::prob::{DistrError, Result};

/// Piecewise-linear interpolant over a strictly increasing abscissa. Evaluations
/// outside the tabulated domain return the fill value of the respective side.
/// Ordinates may be -inf (e.g. a log-density at a point of zero density): segments
/// touching such a node evaluate to -inf everywhere except at the finite node itself.
#[derive(Debug, Clone)]
pub struct Linear {

    xs : Vec<f64>,

    ys : Vec<f64>,

    fill : (f64, f64)

}

impl Linear {

    pub fn new(xs : Vec<f64>, ys : Vec<f64>, fill : (f64, f64)) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(DistrError::InvalidGrid(format!(
                "Abscissa has {} entries but ordinate has {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(DistrError::InvalidGrid("At least two nodes are required".to_string()));
        }
        if xs.iter().any(|x| !x.is_finite() ) {
            return Err(DistrError::InvalidGrid("Abscissa has non-finite entries".to_string()));
        }
        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0] ) {
            return Err(DistrError::InvalidGrid(format!(
                "Abscissa should be strictly increasing (x[{}] = {}, x[{}] = {})",
                i,
                xs[i],
                i + 1,
                xs[i + 1]
            )));
        }
        Ok(Self { xs, ys, fill })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn nodes(&self) -> (&[f64], &[f64]) {
        (&self.xs[..], &self.ys[..])
    }

    pub fn eval(&self, x : f64) -> f64 {
        let (lo, hi) = self.domain();
        if x < lo {
            return self.fill.0;
        }
        if x > hi {
            return self.fill.1;
        }
        if x.is_nan() {
            return f64::NAN;
        }

        // First node strictly above x, so that xs[ix-1] <= x < xs[ix].
        let ix = self.xs.partition_point(|node| *node <= x );
        if ix == self.xs.len() {
            return self.ys[ix - 1];
        }
        let (x0, x1) = (self.xs[ix - 1], self.xs[ix]);
        let (y0, y1) = (self.ys[ix - 1], self.ys[ix]);
        if x == x0 {
            return y0;
        }
        if y0 == f64::NEG_INFINITY || y1 == f64::NEG_INFINITY {
            return f64::NEG_INFINITY;
        }
        let t = (x - x0) / (x1 - x0);
        y0 + t * (y1 - y0)
    }

}
