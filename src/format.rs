use std::fmt::Display;

use itertools::Itertools;

/// Lazily renders a powerset, one comma-joined line per subset.
///
/// Element order within each line is the subset's own order. The returned
/// iterator pulls subsets on demand, so a lazy upstream generator is never
/// forced to materialize.
pub fn format_lines<I, T>(powerset: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = Vec<T>>,
    T: Display,
{
    powerset.into_iter().map(|subset| subset.iter().join(","))
}

/// Eagerly renders a powerset as a single newline-joined block.
pub fn format_block<I, T>(powerset: I) -> String
where
    I: IntoIterator<Item = Vec<T>>,
    T: Display,
{
    format_lines(powerset).join("\n")
}
