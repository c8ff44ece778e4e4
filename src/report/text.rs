//! Small string helpers shared by the layout code.

use super::error::ReportError;

/// Literal written in place of an absent cell.
pub const NULL_TEXT: &str = "null";

/// Build a string of `ch` repeated `count` times. Non-positive counts yield
/// an empty string.
pub fn repeat(count: i64, ch: char) -> String {
    if count <= 0 {
        return String::new();
    }
    std::iter::repeat(ch).take(count as usize).collect()
}

/// Stringify an optional cell, substituting the literal `null`.
pub fn or_null(value: Option<&str>) -> &str {
    value.unwrap_or(NULL_TEXT)
}

/// Return the element with the most characters.
///
/// Strict on purpose: an empty input or an absent element is an error rather
/// than something to skip. When several elements share the maximum length the
/// first one is returned, but callers only ever look at the length.
pub fn longest_of<'a, I>(items: I) -> Result<&'a str, ReportError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut longest: Option<&'a str> = None;
    for (index, item) in items.into_iter().enumerate() {
        let item = item.ok_or(ReportError::NullElement { index })?;
        match longest {
            Some(current) if current.chars().count() >= item.chars().count() => {}
            _ => longest = Some(item),
        }
    }
    longest.ok_or(ReportError::EmptyCollection)
}

/// Join enumeration items with `", "`, keeping order and spelling out absent
/// items as `null`.
pub fn join_items(items: &[Option<String>]) -> String {
    items
        .iter()
        .map(|item| or_null(item.as_deref()))
        .collect::<Vec<_>>()
        .join(", ")
}
