//! Delimited text input.
//!
//! Turns a comma-separated list such as `"10, 12,11 ,13"` into a sample
//! series. This is the only text entry point of the crate; every other
//! function takes numeric slices.

use crate::error::{Result, SpcError};

/// Field separator of a series.
pub const SEPARATOR: char = ',';

/// Parses a comma-separated list of finite numbers.
///
/// Tokens are trimmed and empty tokens are skipped, so trailing commas and
/// doubled separators are tolerated.
///
/// # Errors
///
/// - `Parse` naming the first token that is not a finite number
///   (`"abc"`, `"12x"`, `"NaN"`, `"inf"`).
/// - `EmptyInput` if the text contains no tokens.
///
/// # Examples
///
/// ```
/// use u_spc::parse::parse_series;
///
/// let series = parse_series("10, 12,11,,13 ").unwrap();
/// assert_eq!(series, vec![10.0, 12.0, 11.0, 13.0]);
/// assert!(parse_series("10, twelve").is_err());
/// ```
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let series = text
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<f64>>>()?;
    if series.is_empty() {
        return Err(SpcError::EmptyInput);
    }
    Ok(series)
}

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SpcError::Parse {
            token: token.to_owned(),
        }),
    }
}
