use super::*;

/// Combines independent uncertainty estimates on a single quantity into one
/// distribution. All inputs must share the same central value; the result is their
/// convolution re-centered at that value.
///
/// Only normal and delta inputs are supported: a delta carries no uncertainty and is
/// absorbed, while normals are combined by summing their variances. Any other kind
/// would require a numerical convolution, which is not implemented, and is rejected
/// with DistrError::UnsupportedCombination.
///
/// A single input is returned as is (the same handle, so it compares equal to the
/// input). When every input is a delta, the result is a delta at the shared central value.
pub fn combine(dists : &[Handle<Univariate>]) -> Result<Handle<Univariate>> {
    let first = dists.first().ok_or(DistrError::EmptyCombination)?;
    if dists.len() == 1 {
        log::trace!("Single distribution {} passed to combination", first);
        return Ok(first.clone());
    }
    let central = *first.central_value();
    let mut var = 0.0;
    let mut n_normal = 0;
    for d in dists.iter() {
        let found = *d.central_value();
        if found != central {
            return Err(DistrError::InconsistentCentral { expected : central, found });
        }
        match &**d {
            Univariate::Delta(_) => { },
            Univariate::Normal(n) => {
                var += n.var();
                n_normal += 1;
            },
            other => return Err(DistrError::UnsupportedCombination(other.kind()))
        }
    }
    log::debug!(
        "Combining {} normal distributions at {} (absorbed {} deltas)",
        n_normal,
        central,
        dists.len() - n_normal
    );
    if n_normal == 0 {
        return Ok(Delta::new(central).into());
    }
    Ok(Normal::new(central, var.sqrt())?.into())
}
