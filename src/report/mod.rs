//! Console tabular reports: two-column ASCII tables whose borders follow the
//! widest cell of each column.

mod error;
mod layout;
mod tables;
mod text;

pub use error::ReportError;
pub use layout::{
    border_line, column_widths, format_row, punch_plus_signs, CellValue, ColumnWidths, Entry,
};
pub use tables::{
    render_courses_catalog, render_groups_by_student_count, render_students_by_courses,
    write_courses_catalog, write_groups_by_student_count, write_students_by_courses,
    CourseListing, GroupLoad, StudentCourses,
};
pub use text::{join_items, longest_of, or_null, repeat, NULL_TEXT};
