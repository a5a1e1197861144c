use nalgebra::{DMatrix, DVector};
use serde::{Serialize, Deserialize};
use std::convert::TryFrom;
use super::*;

/// Serializable description of a univariate distribution, as found in parameter
/// files. The kind is selected by the "distribution" field, e.g.
/// {"distribution": "normal", "central_value": 1.0, "standard_deviation": 0.1}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum UnivariateSpec {

    Uniform { central_value : f64, half_range : f64 },

    Delta { central_value : f64 },

    Normal { central_value : f64, standard_deviation : f64 },

    AsymmetricNormal { central_value : f64, right_deviation : f64, left_deviation : f64 },

    HalfNormal { central_value : f64, standard_deviation : f64 },

    GaussianUpperLimit { limit : f64, confidence_level : f64 },

    Numerical {
        x : Vec<f64>,
        y : Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        central_value : Option<f64>
    }

}

impl TryFrom<UnivariateSpec> for Univariate {

    type Error = DistrError;

    fn try_from(spec : UnivariateSpec) -> Result<Self> {
        let d = match spec {
            UnivariateSpec::Uniform { central_value, half_range } => {
                Uniform::new(central_value, half_range)?.into()
            },
            UnivariateSpec::Delta { central_value } => {
                Delta::new(central_value).into()
            },
            UnivariateSpec::Normal { central_value, standard_deviation } => {
                Normal::new(central_value, standard_deviation)?.into()
            },
            UnivariateSpec::AsymmetricNormal { central_value, right_deviation, left_deviation } => {
                AsymmetricNormal::new(central_value, right_deviation, left_deviation)?.into()
            },
            UnivariateSpec::HalfNormal { central_value, standard_deviation } => {
                HalfNormal::new(central_value, standard_deviation)?.into()
            },
            UnivariateSpec::GaussianUpperLimit { limit, confidence_level } => {
                GaussianUpperLimit::new(limit, confidence_level)?.into()
            },
            UnivariateSpec::Numerical { x, y, central_value } => {
                Numerical::new(x, y, central_value)?.into()
            }
        };
        Ok(d)
    }

}

impl From<&Univariate> for UnivariateSpec {

    fn from(d : &Univariate) -> Self {
        match d {
            Univariate::Uniform(u) => UnivariateSpec::Uniform {
                central_value : *u.central_value(),
                half_range : u.half_range()
            },
            Univariate::Delta(d) => UnivariateSpec::Delta { central_value : *d.central_value() },
            Univariate::Normal(n) => UnivariateSpec::Normal {
                central_value : *n.central_value(),
                standard_deviation : n.std_dev()
            },
            Univariate::AsymmetricNormal(a) => UnivariateSpec::AsymmetricNormal {
                central_value : *a.central_value(),
                right_deviation : a.right_deviation(),
                left_deviation : a.left_deviation()
            },
            Univariate::HalfNormal(h) => UnivariateSpec::HalfNormal {
                central_value : *h.central_value(),
                standard_deviation : h.std_dev()
            },
            Univariate::GaussianUpperLimit(g) => UnivariateSpec::GaussianUpperLimit {
                limit : g.limit(),
                confidence_level : g.confidence_level()
            },
            Univariate::Numerical(n) => {
                let (x, y) = n.table();
                UnivariateSpec::Numerical { x, y, central_value : Some(*n.central_value()) }
            }
        }
    }

}

impl Univariate {

    pub fn from_json(s : &str) -> Result<Self> {
        let spec : UnivariateSpec = serde_json::from_str(s)?;
        Univariate::try_from(spec)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&UnivariateSpec::from(self))?)
    }

}

/// Serializable description of a multivariate normal, with the covariance informed
/// as a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiNormalSpec {

    pub central_value : Vec<f64>,

    pub covariance : Vec<Vec<f64>>

}

impl TryFrom<MultiNormalSpec> for MultiNormal {

    type Error = DistrError;

    fn try_from(spec : MultiNormalSpec) -> Result<Self> {
        let n = spec.central_value.len();
        if spec.covariance.len() != n {
            return Err(DistrError::DimensionMismatch { expected : n, found : spec.covariance.len() });
        }
        if let Some(row) = spec.covariance.iter().find(|row| row.len() != n ) {
            return Err(DistrError::DimensionMismatch { expected : n, found : row.len() });
        }
        let mu = DVector::from_vec(spec.central_value);
        let sigma = DMatrix::from_fn(n, n, |i, j| spec.covariance[i][j] );
        MultiNormal::new(mu, sigma)
    }

}

impl From<&MultiNormal> for MultiNormalSpec {

    fn from(mn : &MultiNormal) -> Self {
        let central_value = mn.central_value().iter().cloned().collect();
        let covariance = mn.covariance().row_iter().map(|row| row.iter().cloned().collect() ).collect();
        Self { central_value, covariance }
    }

}

impl MultiNormal {

    pub fn from_json(s : &str) -> Result<Self> {
        let spec : MultiNormalSpec = serde_json::from_str(s)?;
        MultiNormal::try_from(spec)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&MultiNormalSpec::from(self))?)
    }

}
