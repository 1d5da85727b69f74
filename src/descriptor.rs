//! Descriptor entry points.

use crate::field::{Displacement, FieldView, Sample};
use crate::hist::accumulate;
use crate::trace::{trace_event, trace_span};
use crate::util::VarCondResult;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Computes the displacement-conditioned variance of a field.
///
/// Pairs every pixel with its neighbor at `(r + dy, c + dx)`, groups neighbor
/// intensities by the center value, and returns the population-weighted mean
/// of the per-group variances. The result is non-negative by construction.
///
/// Idempotent: repeated calls on the same inputs return bit-identical
/// results.
///
/// # Errors
///
/// [`VarCondError::NonFiniteSample`](crate::VarCondError::NonFiniteSample)
/// when the field holds a NaN or infinity,
/// [`VarCondError::NoValidPairs`](crate::VarCondError::NoValidPairs) when the
/// displacement clips every candidate pair (`|dx| >= width` or
/// `|dy| >= height`).
pub fn var_cond<T: Sample>(field: FieldView<'_, T>, disp: Displacement) -> VarCondResult<f64> {
    let _span = trace_span!("var_cond", dx = disp.dx, dy = disp.dy).entered();
    let hist = accumulate(field, disp)?;
    trace_event!(
        "conditional_groups",
        groups = hist.num_groups(),
        pairs = hist.total_pairs()
    );
    hist.weighted_variance()
}

/// [`var_cond`] with row-parallel accumulation. Produces bit-identical
/// results to the sequential scan.
#[cfg(feature = "rayon")]
pub fn var_cond_par<T: Sample + Sync>(
    field: FieldView<'_, T>,
    disp: Displacement,
) -> VarCondResult<f64> {
    let _span = trace_span!("var_cond_par", dx = disp.dx, dy = disp.dy).entered();
    let hist = crate::hist::rayon::accumulate_par(field, disp)?;
    trace_event!(
        "conditional_groups",
        groups = hist.num_groups(),
        pairs = hist.total_pairs()
    );
    hist.weighted_variance()
}

/// Evaluates the descriptor for a bank of displacements, in order.
///
/// Each query is independent; the call fails on the first displacement that
/// yields no valid pairs.
pub fn var_cond_sweep<T: Sample>(
    field: FieldView<'_, T>,
    disps: &[Displacement],
) -> VarCondResult<Vec<f64>> {
    disps.iter().map(|&disp| var_cond(field, disp)).collect()
}

/// [`var_cond_sweep`] with the queries distributed over the rayon pool.
#[cfg(feature = "rayon")]
pub fn var_cond_sweep_par<T: Sample + Sync>(
    field: FieldView<'_, T>,
    disps: &[Displacement],
) -> VarCondResult<Vec<f64>> {
    disps
        .par_iter()
        .map(|&disp| var_cond(field, disp))
        .collect()
}
