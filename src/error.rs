use thiserror::Error;

/// Result type alias used throughout the crate.
pub type PowersetResult<T> = std::result::Result<T, PowersetError>;

/// Terminal errors of a powerset invocation. None of these are transient;
/// the CLI converts each into a diagnostic on stderr and a non-zero exit.
#[derive(Debug, Error)]
pub enum PowersetError {
    /// No input argument was supplied on the command line.
    #[error("Input argument is missing. Please provide a string compliant to the following regular expression: '\\w+(,\\w+)*'")]
    MissingInput,

    /// The input argument does not match the required token pattern.
    #[error("Your input '{0}' does not respect this regular expression: \\w+(,\\w+)*")]
    InvalidInputFormat(String),

    /// The requested powerset cannot be materialized in memory.
    #[error("Cannot hold the powerset of {elements} elements. It is an O(n*2^n) algorithm in memory and space. Watch out for the input length. Try with less input elements.")]
    ResourceExhaustion { elements: usize },

    /// Writing to the output stream failed.
    #[error("Failed writing to the output stream: {0}")]
    Io(#[from] std::io::Error),
}
