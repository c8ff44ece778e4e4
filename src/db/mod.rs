//! Persistence module split across logical submodules.

mod connection;
mod courses;
mod groups;
mod reports;
mod seed;
mod students;

use anyhow::anyhow;
use rusqlite::{Error as SqlError, ErrorCode};

pub use connection::{ensure_schema, init_schema};
pub use courses::{create_course, fetch_courses, find_course_by_name};
pub use groups::{create_group, fetch_groups};
pub use reports::{course_catalog, groups_with_at_most, students_on_course};
pub use seed::seed_if_empty;
pub use students::{
    add_student_to_course, create_student, delete_student, fetch_courses_for_student,
    fetch_students, remove_student_from_course,
};

/// Coerce SQLite constraint errors (unique names, dangling foreign keys) into
/// the supplied human-readable message.
fn map_constraint(err: SqlError, message: String) -> anyhow::Error {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        anyhow!(message)
    } else {
        err.into()
    }
}

#[cfg(test)]
pub(crate) fn test_connection() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().expect("in-memory database");
    init_schema(&conn).expect("schema");
    conn
}
