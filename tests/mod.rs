use approx::assert_abs_diff_eq;
use nalgebra::{DMatrix, DVector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use statrs::distribution::{Continuous, ContinuousCDF};
use uncertainty::approx::Empirical;
use uncertainty::prob::*;

const EPS : f64 = 10E-8;

// Kolmogorov-Smirnov critical distance at 0.1% for n samples.
fn ks_critical(n : usize) -> f64 {
    1.95 / (n as f64).sqrt()
}

// Composite trapezoid of exp(log_prob) over [from, to].
fn integrate<D>(d : &D, from : f64, to : f64, n : usize) -> f64
where
    D : Distribution<Value=f64>
{
    let h = (to - from) / n as f64;
    let mut acc = 0.0;
    for i in 0..=n {
        let w = if i == 0 || i == n { 0.5 } else { 1.0 };
        acc += w * d.log_prob(&(from + h * i as f64)).exp();
    }
    acc * h
}

fn seeded_sample<D>(d : &D, n : usize, seed : u64) -> Vec<f64>
where
    D : Distribution<Value=f64>
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| d.sample_with(&mut rng) ).collect()
}

#[test]
fn normal() -> anyhow::Result<()> {
    let n = Normal::new(1.5, 0.7)?;
    let reference = statrs::distribution::Normal::new(1.5, 0.7)?;
    for x in [-2.0, 0.0, 1.5, 2.2, 6.0].iter() {
        assert_abs_diff_eq!(n.log_prob(x), reference.ln_pdf(*x), epsilon = EPS);
    }
    assert_abs_diff_eq!(integrate(&n, 1.5 - 12.0, 1.5 + 12.0, 20_000), 1.0, epsilon = 1E-6);
    let s = seeded_sample(&n, 5_000, 1);
    assert!(Empirical::from_sample(&s)?.analytical_ks(&reference).diff < ks_critical(5_000));
    Ok(())
}

#[test]
fn asymmetric_normal() -> anyhow::Result<()> {
    let a = AsymmetricNormal::new(2.0, 0.5, 1.5)?;
    assert_abs_diff_eq!(integrate(&a, -10.0, 6.0, 40_000), 1.0, epsilon = 1E-6);
    assert_abs_diff_eq!(a.log_prob(&(2.0 - 1E-10)), a.log_prob(&(2.0 + 1E-10)), epsilon = 1E-8);

    // Mass at the left of the mode follows the left deviation.
    let s = seeded_sample(&a, 10_000, 2);
    let left = s.iter().filter(|x| **x < 2.0 ).count() as f64 / s.len() as f64;
    assert_abs_diff_eq!(left, 0.75, epsilon = 0.03);

    // Equal deviations reduce to a normal.
    let sym = AsymmetricNormal::new(2.0, 0.8, 0.8)?;
    let reference = statrs::distribution::Normal::new(2.0, 0.8)?;
    assert_abs_diff_eq!(sym.log_prob(&2.9), reference.ln_pdf(2.9), epsilon = EPS);
    let s = seeded_sample(&sym, 5_000, 3);
    assert!(Empirical::from_sample(&s)?.analytical_ks(&reference).diff < ks_critical(5_000));
    Ok(())
}

#[test]
fn half_normal() -> anyhow::Result<()> {
    let h = HalfNormal::new(-1.0, 2.0)?;
    for x in [-1.0001, -3.0, -100.0].iter() {
        assert_eq!(h.log_prob(x), f64::NEG_INFINITY);
    }
    assert_abs_diff_eq!(integrate(&h, -1.0, 23.0, 40_000), 1.0, epsilon = 1E-6);
    assert!(seeded_sample(&h, 1_000, 4).iter().all(|x| *x >= -1.0 ));
    Ok(())
}

#[test]
fn gaussian_upper_limit() -> anyhow::Result<()> {
    let u = GaussianUpperLimit::new(3.2, 0.9)?;
    let std_normal = statrs::distribution::Normal::new(0.0, 1.0)?;
    assert_abs_diff_eq!(std_normal.cdf(u.limit() / u.std_dev()), 0.95, epsilon = EPS);

    // 90% of the half-normal mass lies below the limit.
    let below = integrate(&u, 0.0, 3.2, 20_000);
    assert_abs_diff_eq!(below, 0.9, epsilon = 1E-6);
    Ok(())
}

#[test]
fn uniform() -> anyhow::Result<()> {
    let u = Uniform::new(0.0, 2.0)?;
    assert_abs_diff_eq!(u.log_prob(&-2.0), -(4.0f64).ln(), epsilon = EPS);
    assert_abs_diff_eq!(u.log_prob(&1.99), -(4.0f64).ln(), epsilon = EPS);

    // Outside the support the log-density falls back to zero.
    assert_eq!(u.log_prob(&2.0), 0.0);
    assert_eq!(u.log_prob(&-2.01), 0.0);
    assert_eq!(u.log_prob(&7.0), 0.0);
    let reference = statrs::distribution::Uniform::new(-2.0, 2.0)?;
    let s = seeded_sample(&u, 5_000, 5);
    assert!(Empirical::from_sample(&s)?.analytical_ks(&reference).diff < ks_critical(5_000));
    Ok(())
}

#[test]
fn numerical_reproduces_normal() -> anyhow::Result<()> {
    let reference = statrs::distribution::Normal::new(0.5, 1.2)?;
    let x : Vec<f64> = (0..=2000).map(|i| 0.5 - 7.2 + 14.4 * i as f64 / 2000. ).collect();
    let y : Vec<f64> = x.iter().map(|x| reference.pdf(*x) ).collect();
    let num = Numerical::new(x.clone(), y, None)?;
    assert_abs_diff_eq!(*num.central_value(), 0.5, epsilon = 1E-9);
    for i in (100..1900).step_by(7) {
        let xi = x[i] + 0.3 * (x[i + 1] - x[i]);
        assert_abs_diff_eq!(num.log_prob(&xi), reference.ln_pdf(xi), epsilon = 1E-4);
    }
    assert_eq!(num.log_prob(&(x[0] - 0.01)), f64::NEG_INFINITY);
    assert_eq!(num.log_prob(&(x[2000] + 0.01)), f64::NEG_INFINITY);

    let s = seeded_sample(&num, 5_000, 6);
    let tabulated = Empirical::from_sample(&s)?;
    assert!(tabulated.analytical_ks(&reference).diff < ks_critical(5_000));

    // Two-sample check against draws from the closed-form normal.
    let closed = Empirical::from_sample(&seeded_sample(&Normal::new(0.5, 1.2)?, 5_000, 7))?;
    assert!(tabulated.empirical_ks(&closed).diff < ks_critical(5_000) * 2f64.sqrt());
    Ok(())
}

#[test]
fn numerical_quantile_monotone() -> anyhow::Result<()> {
    let x : Vec<f64> = (0..50).map(|i| i as f64 * 0.1 ).collect();
    let y : Vec<f64> = x.iter().map(|x| if *x > 2.0 && *x < 3.0 { 0.0 } else { (x * 3.0).sin().abs() } ).collect();
    let num = Numerical::new(x.clone(), y, None)?;
    assert_eq!(num.quantile(0.0), x[0]);
    assert_eq!(num.quantile(1.0), x[49]);
    let qs : Vec<f64> = (0..=1000).map(|i| num.quantile(i as f64 / 1000.) ).collect();
    assert!(qs.windows(2).all(|w| w[1] >= w[0] ));
    Ok(())
}

#[test]
fn multinormal_rescaling() -> anyhow::Result<()> {
    let mu = DVector::from_column_slice(&[0.1, 1000.0, -3.0]);
    let sigma = DMatrix::from_row_slice(3, 3, &[
        1.0, 200.0, 0.02,
        200.0, 1E6, 5.0,
        0.02, 5.0, 0.01
    ]);
    let mn = MultiNormal::new(mu.clone(), sigma.clone())?;
    let sigma_inv = sigma.clone().try_inverse().unwrap();
    for x in [[0.1, 1000.0, -3.0], [1.1, 400.0, -2.95], [-0.5, 2500.0, -3.1]].iter() {
        let x = DVector::from_column_slice(&x[..]);
        let xc = &x - &mu;
        let reference = -1.5 * (2.0*std::f64::consts::PI).ln()
            - 0.5 * sigma.determinant().ln()
            - 0.5 * xc.dot(&(&sigma_inv * &xc));
        assert_abs_diff_eq!(mn.log_prob(&x), reference, epsilon = 1E-7);
    }
    Ok(())
}

#[test]
fn combination() -> anyhow::Result<()> {
    let a : Handle<Univariate> = Normal::new(5.0, 1.0)?.into();
    let b : Handle<Univariate> = Normal::new(5.0, 2.0)?.into();
    let c = combine(&[a.clone(), b])?;
    match &*c {
        Univariate::Normal(n) => assert_abs_diff_eq!(n.std_dev(), 5.0f64.sqrt(), epsilon = EPS),
        other => panic!("Expected normal combination, found {}", other)
    }

    let d : Handle<Univariate> = Delta::new(3.0).into();
    let n : Handle<Univariate> = Normal::new(3.0, 0.5)?.into();
    let c = combine(&[d, n])?;
    match &*c {
        Univariate::Normal(n) => assert_abs_diff_eq!(n.std_dev(), 0.5, epsilon = EPS),
        other => panic!("Expected normal combination, found {}", other)
    }

    let u : Handle<Univariate> = Uniform::new(5.0, 2.0)?.into();
    assert!(matches!(combine(&[a.clone(), u]), Err(DistrError::UnsupportedCombination(_))));

    let off : Handle<Univariate> = Normal::new(6.0, 1.0)?.into();
    assert!(matches!(combine(&[a.clone(), off]), Err(DistrError::InconsistentCentral { .. })));

    assert!(combine(&[a.clone()])? == a);
    Ok(())
}
