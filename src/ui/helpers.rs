use anyhow::{anyhow, Error, Result};
use tracing::warn;

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Parse a numeric id or count typed by the user.
pub(crate) fn parse_number(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| {
        warn!(input = trimmed, "rejected non-numeric input");
        anyhow!("'{trimmed}' is not a number")
    })
}

/// Blank answers mean "no value".
pub(crate) fn optional_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
