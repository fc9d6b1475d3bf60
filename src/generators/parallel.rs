use rayon::prelude::*;

use crate::error::PowersetResult;
use crate::generators::doubling::{extend_with, reserve_accumulator};

/// Accumulator doubling with each step's extension map dispatched across
/// rayon's global worker pool.
///
/// Output set and order are identical to `powerset_iterative`: the indexed
/// `collect` joins worker results by dispatch index, not completion order,
/// and no step begins before the previous step's extensions are merged. The
/// input sequence is shared read-only across workers and the accumulator is
/// only extended between steps, so there is no shared mutable state. A
/// worker panic unwinds through the step and fails the whole generation with
/// no partial result. The global pool is reused across calls, though for
/// small inputs the dispatch overhead still makes this slower than the
/// purely iterative variant.
pub fn powerset_parallel<T>(elements: &[T]) -> PowersetResult<Vec<Vec<T>>>
where
    T: Clone + Send + Sync,
{
    let mut output = reserve_accumulator(elements.len())?;
    output.push(Vec::new());

    for elem in elements {
        let step: Vec<Vec<T>> = output
            .par_iter()
            .map(|subset| extend_with(subset, elem))
            .collect();
        output.extend(step);
    }

    output.remove(0);
    Ok(output)
}
