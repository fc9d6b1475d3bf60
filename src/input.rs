use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PowersetError, PowersetResult};

// One or more word characters, optionally repeated as comma-separated groups.
// Anchored on both ends so a valid prefix like "1," cannot slip through.
// \w is the regex crate's Unicode word-character class.
const TOKEN_PATTERN: &str = r"^\w+(,\w+)*$";

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(TOKEN_PATTERN).unwrap();
}

/// Parses a raw command line token into an ordered list of element labels.
///
/// The token must match `\w+(,\w+)*` in full; empty input, leading or
/// trailing commas, empty segments and non-word characters are rejected
/// before any splitting happens.
pub fn parse_input(raw: &str) -> PowersetResult<Vec<String>> {
    if !TOKEN_REGEX.is_match(raw) {
        return Err(PowersetError::InvalidInputFormat(raw.to_owned()));
    }

    Ok(raw.split(',').map(str::to_owned).collect())
}
