//! Width calculation, border lines and row formatting for two-column tables.

use super::error::ReportError;
use super::text::{join_items, or_null, repeat};

/// Value column of a row before it is stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(Option<String>),
    Count(Option<i64>),
    /// Related items shown as one `", "`-joined cell.
    Enumeration(Vec<Option<String>>),
}

impl CellValue {
    /// Display string for the cell. Absent values become `null`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(text) => or_null(text.as_deref()).to_string(),
            CellValue::Count(Some(count)) => count.to_string(),
            CellValue::Count(None) => or_null(None).to_string(),
            CellValue::Enumeration(items) => join_items(items),
        }
    }
}

/// One table row: a label cell and a value cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: Option<String>,
    pub value: CellValue,
}

impl Entry {
    pub fn new(label: Option<String>, value: CellValue) -> Self {
        Self { label, value }
    }

    pub fn label_text(&self) -> &str {
        or_null(self.label.as_deref())
    }
}

/// Character widths of the label and value columns, excluding padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    pub label: usize,
    pub value: usize,
}

/// Compute column widths over the complete entry set. No entries means both
/// columns are zero wide.
pub fn column_widths(entries: &[Entry]) -> ColumnWidths {
    entries
        .iter()
        .fold(ColumnWidths::default(), |widths, entry| ColumnWidths {
            label: widths.label.max(entry.label_text().chars().count()),
            value: widths.value.max(entry.value.to_text().chars().count()),
        })
}

/// Build `+---+---+` where each dash run is its column width plus two.
///
/// The line starts as a single run of dashes; the outer edges and the column
/// split are then overwritten with `+`.
pub fn border_line(widths: &ColumnWidths) -> Result<String, ReportError> {
    let len = widths.label + widths.value + 7;
    let run = repeat(len as i64, '-');
    punch_plus_signs(&run, &[0, widths.label + 3, len - 1])
}

/// Replace the characters at `positions` with `+`. Any position past the end
/// of `line` is an error.
pub fn punch_plus_signs(line: &str, positions: &[usize]) -> Result<String, ReportError> {
    let mut chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    for &index in positions {
        let slot = chars
            .get_mut(index)
            .ok_or(ReportError::BorderIndexOutOfRange { index, len })?;
        *slot = '+';
    }
    Ok(chars.into_iter().collect())
}

/// Format `| label | value |`, left-aligned and padded to the column widths.
/// Cells wider than their column are never truncated.
pub fn format_row(label: &str, value: &str, widths: &ColumnWidths) -> String {
    format!(
        "| {label:<lw$} | {value:<vw$} |",
        lw = widths.label,
        vw = widths.value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, count: i64) -> Entry {
        Entry::new(Some(name.to_string()), CellValue::Count(Some(count)))
    }

    #[test]
    fn widths_follow_longest_cells() {
        let entries = vec![group("JR-84", 16), group("QL-03", 14), group("VA-72", 10)];
        let widths = column_widths(&entries);
        assert_eq!(widths, ColumnWidths { label: 5, value: 2 });
    }

    #[test]
    fn widths_of_nothing_are_zero() {
        assert_eq!(column_widths(&[]), ColumnWidths { label: 0, value: 0 });
    }

    #[test]
    fn widths_count_null_as_four_characters() {
        let entries = vec![
            Entry::new(None, CellValue::Count(None)),
            Entry::new(Some("ab".into()), CellValue::Count(Some(7))),
        ];
        assert_eq!(column_widths(&entries), ColumnWidths { label: 4, value: 4 });
    }

    #[test]
    fn widths_use_joined_enumeration() {
        let entries = vec![Entry::new(
            Some("Ann Lee".into()),
            CellValue::Enumeration(vec![Some("CourseName_1".into()), None]),
        )];
        let widths = column_widths(&entries);
        assert_eq!(widths.value, "CourseName_1, null".len());
    }

    #[test]
    fn border_matches_group_example() {
        let widths = ColumnWidths { label: 5, value: 2 };
        assert_eq!(border_line(&widths).unwrap(), "+-------+----+");
    }

    #[test]
    fn border_for_zero_widths() {
        assert_eq!(border_line(&ColumnWidths::default()).unwrap(), "+--+--+");
    }

    #[test]
    fn border_first_run_is_label_width_plus_two() {
        for label in 0..12 {
            for value in 0..12 {
                let widths = ColumnWidths { label, value };
                let border = border_line(&widths).unwrap();
                let runs: Vec<&str> = border.split('+').collect();
                assert_eq!(runs.len(), 4);
                assert_eq!(runs[1].len(), label + 2);
                assert_eq!(runs[2].len(), value + 2);
            }
        }
    }

    #[test]
    fn punch_out_of_range_fails() {
        let err = punch_plus_signs("-----", &[0, 5]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::BorderIndexOutOfRange { index: 5, len: 5 }
        ));
    }

    #[test]
    fn punch_on_empty_line_fails() {
        assert!(punch_plus_signs("", &[0]).is_err());
    }

    #[test]
    fn row_pads_with_trailing_spaces() {
        let widths = ColumnWidths { label: 5, value: 2 };
        assert_eq!(format_row("JR-84", "16", &widths), "| JR-84 | 16 |");
        assert_eq!(format_row("", "", &widths), "|       |    |");
        assert_eq!(format_row("null", "9", &widths), "| null  | 9  |");
    }

    #[test]
    fn row_never_truncates() {
        let widths = ColumnWidths { label: 1, value: 1 };
        assert_eq!(format_row("long", "value", &widths), "| long | value |");
    }

    #[test]
    fn rows_share_border_width() {
        let entries = vec![group("a", 1), group("much longer", 12345), group("", 0)];
        let widths = column_widths(&entries);
        let border = border_line(&widths).unwrap();
        for entry in &entries {
            let row = format_row(entry.label_text(), &entry.value.to_text(), &widths);
            assert_eq!(row.chars().count(), border.chars().count());
        }
    }
}
