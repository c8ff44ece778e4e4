//! The three console reports. Each one keeps its own header text and its own
//! reaction to an empty input, so they are deliberately separate functions.

use std::io::{self, Write};

use super::error::ReportError;
use super::layout::{border_line, column_widths, format_row, CellValue, Entry};
use super::text::or_null;

const GROUPS_HEADER: &str = "Groups with their number of students:";
const STUDENTS_HEADER: &str = "Students with their courses:";
const COURSES_HEADER: &str = "Courses:";

/// A group and how many students it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLoad {
    pub name: Option<String>,
    pub student_count: Option<i64>,
}

/// A student and every course they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCourses {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub courses: Vec<Option<String>>,
}

impl StudentCourses {
    /// `"first last"`, with absent parts written as `null`.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            or_null(self.first_name.as_deref()),
            or_null(self.last_name.as_deref())
        )
    }
}

/// A course row in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListing {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<&GroupLoad> for Entry {
    fn from(group: &GroupLoad) -> Self {
        Entry::new(group.name.clone(), CellValue::Count(group.student_count))
    }
}

impl From<&StudentCourses> for Entry {
    fn from(student: &StudentCourses) -> Self {
        Entry::new(
            Some(student.full_name()),
            CellValue::Enumeration(student.courses.clone()),
        )
    }
}

impl From<&CourseListing> for Entry {
    fn from(course: &CourseListing) -> Self {
        Entry::new(course.name.clone(), CellValue::Text(course.description.clone()))
    }
}

/// Print the groups report to stdout.
pub fn render_groups_by_student_count(groups: &[GroupLoad]) -> Result<(), ReportError> {
    write_groups_by_student_count(&mut io::stdout().lock(), groups)
}

/// Print the students report to stdout.
pub fn render_students_by_courses(students: &[StudentCourses]) -> Result<(), ReportError> {
    write_students_by_courses(&mut io::stdout().lock(), students)
}

/// Print the course catalog to stdout.
pub fn render_courses_catalog(courses: &[CourseListing]) -> Result<(), ReportError> {
    write_courses_catalog(&mut io::stdout().lock(), courses)
}

/// With no groups only the header line is written.
pub fn write_groups_by_student_count<W: Write>(
    out: &mut W,
    groups: &[GroupLoad],
) -> Result<(), ReportError> {
    let mut text = format!("{GROUPS_HEADER}\n");
    if !groups.is_empty() {
        let entries: Vec<Entry> = groups.iter().map(Entry::from).collect();
        text.push_str(&table_body(&entries)?);
    }
    emit(out, &text)
}

/// With no students only the header line is written.
pub fn write_students_by_courses<W: Write>(
    out: &mut W,
    students: &[StudentCourses],
) -> Result<(), ReportError> {
    let mut text = format!("{STUDENTS_HEADER}\n");
    if !students.is_empty() {
        let entries: Vec<Entry> = students.iter().map(Entry::from).collect();
        text.push_str(&table_body(&entries)?);
    }
    emit(out, &text)
}

/// With no courses the header is written without a line terminator.
pub fn write_courses_catalog<W: Write>(
    out: &mut W,
    courses: &[CourseListing],
) -> Result<(), ReportError> {
    let mut text = COURSES_HEADER.to_string();
    if !courses.is_empty() {
        let entries: Vec<Entry> = courses.iter().map(Entry::from).collect();
        text.push('\n');
        text.push_str(&table_body(&entries)?);
    }
    emit(out, &text)
}

/// Border, one row per entry in input order, border. Widths are fixed from
/// the whole entry set before the first row is formatted.
fn table_body(entries: &[Entry]) -> Result<String, ReportError> {
    let widths = column_widths(entries);
    let border = border_line(&widths)?;

    let mut body = String::new();
    body.push_str(&border);
    body.push('\n');
    for entry in entries {
        body.push_str(&format_row(
            entry.label_text(),
            &entry.value.to_text(),
            &widths,
        ));
        body.push('\n');
    }
    body.push_str(&border);
    body.push('\n');
    Ok(body)
}

// The table is assembled in full before this point, so a failure while
// building it never leaves half a table on the terminal.
fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), ReportError> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
