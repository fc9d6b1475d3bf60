use std::io::Write;

use clap::{Parser, ValueEnum};

use crate::error::{PowersetError, PowersetResult};
use crate::format::{format_block, format_lines};
use crate::generators::{
    powerset_backtrack, powerset_iterative, powerset_lazy, powerset_parallel,
};
use crate::input::parse_input;

/// Interchangeable powerset generation strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Lazy combinatorial enumeration, grouped by subset size
    Lazy,
    /// Depth-first backtracking with pre-order emission
    Backtrack,
    /// Accumulator doubling, one element at a time
    Iterative,
    /// Accumulator doubling with parallel extension steps
    Parallel,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated element labels matching \w+(,\w+)*
    pub elements: Option<String>,

    /// The generation strategy to use
    #[arg(short, long, value_enum, default_value_t = Strategy::Lazy)]
    pub strategy: Strategy,
}

/// Parses the input, generates the powerset with the selected strategy and
/// writes the formatted lines to `out`.
///
/// All validation happens before any generator runs, so on error nothing is
/// written to the sink. The lazy strategy streams lines as subsets are
/// produced; the eager strategies format the materialized result in one
/// block.
pub fn run(args: &Args, out: &mut impl Write) -> PowersetResult<()> {
    let raw = args.elements.as_deref().ok_or(PowersetError::MissingInput)?;
    let elements = parse_input(raw)?;

    match args.strategy {
        Strategy::Lazy => {
            for line in format_lines(powerset_lazy(&elements)) {
                writeln!(out, "{}", line)?;
            }
        }
        Strategy::Backtrack => {
            writeln!(out, "{}", format_block(powerset_backtrack(&elements)?))?;
        }
        Strategy::Iterative => {
            writeln!(out, "{}", format_block(powerset_iterative(&elements)?))?;
        }
        Strategy::Parallel => {
            writeln!(out, "{}", format_block(powerset_parallel(&elements)?))?;
        }
    }

    Ok(())
}
