use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::map_constraint;
use crate::models::Course;

/// Every course, ordered by name.
pub fn fetch_courses(conn: &Connection) -> Result<Vec<Course>> {
    debug!("fetching courses");
    let mut stmt = conn
        .prepare("SELECT id, name, description FROM courses ORDER BY name")
        .context("failed to prepare course query")?;

    let courses = stmt
        .query_map([], |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })
        .context("failed to load courses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect courses")?;

    Ok(courses)
}

/// Look a course up by its exact name.
pub fn find_course_by_name(conn: &Connection, name: &str) -> Result<Option<Course>> {
    conn.query_row(
        "SELECT id, name, description FROM courses WHERE name = ?1",
        params![name],
        |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        },
    )
    .optional()
    .context("failed to look up course")
}

pub fn create_course(conn: &Connection, name: &str, description: Option<&str>) -> Result<Course> {
    conn.execute(
        "INSERT INTO courses (name, description) VALUES (?1, ?2)",
        params![name, description],
    )
    .map_err(|err| map_constraint(err, format!("Course {name} already exists.")))
    .context("failed to insert course")?;

    let id = conn.last_insert_rowid();
    info!(id, name, "course created");
    Ok(Course {
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_connection;

    #[test]
    fn find_by_name() {
        let conn = test_connection();
        create_course(&conn, "Math", Some("Numbers")).unwrap();

        let found = find_course_by_name(&conn, "Math").unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("Numbers"));
        assert!(find_course_by_name(&conn, "math").unwrap().is_none());
    }

    #[test]
    fn names_are_unique() {
        let conn = test_connection();
        create_course(&conn, "Math", None).unwrap();
        assert!(create_course(&conn, "Math", Some("again")).is_err());
        assert_eq!(fetch_courses(&conn).unwrap().len(), 1);
    }
}
