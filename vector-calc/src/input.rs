//! Parsing typed vector components and menu choices
//!
//! Input is read as a stream of tokens, so line breaks carry no meaning: a
//! vector may span several lines and one line may hold several vectors.

use crate::error::InputError;

/// Split a line into tokens on whitespace, commas, or both, so `1 2 3`,
/// `1,2,3` and `1, 2, 3` all yield the same three tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Parse one vector component.
///
/// # Errors
/// Returns [`InputError`] if the token is not a number, or is infinite or NaN.
pub fn parse_component(token: &str) -> Result<f64, InputError> {
    let value = token
        .parse::<f64>()
        .map_err(|source| InputError::InvalidNumber {
            token: token.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite {
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Parse a menu choice. Anything that is not an integer yields `None`.
pub fn parse_choice(token: &str) -> Option<i64> {
    token.trim().parse().ok()
}
