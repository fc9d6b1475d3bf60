use crate::error::{PowersetError, PowersetResult};

/// Allocates an accumulator with room for all 2^n subsets, turning count
/// overflow or allocation failure into `ResourceExhaustion` up front instead
/// of aborting the process mid-generation.
pub(crate) fn reserve_accumulator<T>(elements: usize) -> PowersetResult<Vec<Vec<T>>> {
    let total = u32::try_from(elements)
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or(PowersetError::ResourceExhaustion { elements })?;

    let mut accumulator = Vec::new();
    accumulator
        .try_reserve_exact(total)
        .map_err(|_| PowersetError::ResourceExhaustion { elements })?;

    Ok(accumulator)
}

/// Copies `subset` and appends `elem` to the copy.
pub(crate) fn extend_with<T: Clone>(subset: &[T], elem: &T) -> Vec<T> {
    let mut extended = Vec::with_capacity(subset.len() + 1);
    extended.extend_from_slice(subset);
    extended.push(elem.clone());
    extended
}

/// Eagerly computes all non-empty subsets of `elements` by accumulator
/// doubling.
///
/// The accumulator starts with a single empty sentinel subset; each input
/// element appends an extended copy of every subset accumulated so far,
/// doubling the accumulator's size. The sentinel is excluded from the
/// returned result. O(n*2^n) time, O(2^n) peak memory, no recursion.
pub fn powerset_iterative<T: Clone>(elements: &[T]) -> PowersetResult<Vec<Vec<T>>> {
    let mut output = reserve_accumulator(elements.len())?;
    output.push(Vec::new());

    for elem in elements {
        let step: Vec<Vec<T>> = output
            .iter()
            .map(|subset| extend_with(subset, elem))
            .collect();
        output.extend(step);
    }

    output.remove(0);
    Ok(output)
}
