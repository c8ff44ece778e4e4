use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use super::map_constraint;
use crate::models::{Course, Student};

/// Retrieve every student in id order.
pub fn fetch_students(conn: &Connection) -> Result<Vec<Student>> {
    debug!("fetching students");
    let mut stmt = conn
        .prepare("SELECT id, group_id, first_name, last_name FROM students ORDER BY id")
        .context("failed to prepare student query")?;

    let students = stmt
        .query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                group_id: row.get(1)?,
                first_name: row.get(2)?,
                last_name: row.get(3)?,
            })
        })
        .context("failed to load students")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect students")?;

    Ok(students)
}

/// Insert a student. A `group_id` that does not exist is rejected by the
/// foreign key.
pub fn create_student(
    conn: &Connection,
    first_name: Option<&str>,
    last_name: Option<&str>,
    group_id: Option<i64>,
) -> Result<Student> {
    conn.execute(
        "INSERT INTO students (group_id, first_name, last_name) VALUES (?1, ?2, ?3)",
        params![group_id, first_name, last_name],
    )
    .map_err(|err| map_constraint(err, "Group not found".to_string()))
    .context("failed to insert student")?;

    let id = conn.last_insert_rowid();
    info!(id, ?group_id, "student created");
    Ok(Student {
        id,
        group_id,
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
    })
}

/// Delete a student; the schema drops their enrolments with them.
pub fn delete_student(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM students WHERE id = ?1", params![id])
        .context("failed to delete student")?;

    if deleted == 0 {
        Err(anyhow!("Student not found"))
    } else {
        info!(id, "student deleted");
        Ok(())
    }
}

/// Enrol a student in a course. Enrolling twice is a no-op.
pub fn add_student_to_course(conn: &Connection, student_id: i64, course_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO student_courses (student_id, course_id) VALUES (?1, ?2)",
        params![student_id, course_id],
    )
    .map_err(|err| map_constraint(err, "Student or course not found".to_string()))
    .context("failed to enrol student")?;
    info!(student_id, course_id, "student enrolled");
    Ok(())
}

/// Remove an enrolment, failing if the student never took the course.
pub fn remove_student_from_course(
    conn: &Connection,
    student_id: i64,
    course_id: i64,
) -> Result<()> {
    let deleted = conn
        .execute(
            "DELETE FROM student_courses WHERE student_id = ?1 AND course_id = ?2",
            params![student_id, course_id],
        )
        .context("failed to unenrol student")?;

    if deleted == 0 {
        Err(anyhow!("Student is not enrolled in this course"))
    } else {
        info!(student_id, course_id, "student unenrolled");
        Ok(())
    }
}

/// Courses a student is enrolled in, ordered by name.
pub fn fetch_courses_for_student(conn: &Connection, student_id: i64) -> Result<Vec<Course>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.name, c.description
             FROM courses c
             INNER JOIN student_courses sc ON sc.course_id = c.id
             WHERE sc.student_id = ?1
             ORDER BY c.name",
        )
        .context("failed to prepare student courses query")?;

    let courses = stmt
        .query_map([student_id], |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })
        .context("failed to iterate student courses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect student courses")?;

    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_course, create_group, test_connection};

    #[test]
    fn create_with_and_without_group() {
        let conn = test_connection();
        let group = create_group(&conn, "JR-84").unwrap();
        create_student(&conn, Some("Ann"), Some("Lee"), Some(group.id)).unwrap();
        create_student(&conn, None, Some("Solo"), None).unwrap();

        let students = fetch_students(&conn).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].group_id, Some(group.id));
        assert_eq!(students[1].first_name, None);
    }

    #[test]
    fn unknown_group_is_rejected() {
        let conn = test_connection();
        assert!(create_student(&conn, Some("Ann"), Some("Lee"), Some(42)).is_err());
    }

    #[test]
    fn enrolment_lifecycle() {
        let conn = test_connection();
        let student = create_student(&conn, Some("Ann"), Some("Lee"), None).unwrap();
        let math = create_course(&conn, "Math", None).unwrap();
        let art = create_course(&conn, "Art", Some("Drawing")).unwrap();

        add_student_to_course(&conn, student.id, math.id).unwrap();
        add_student_to_course(&conn, student.id, art.id).unwrap();
        add_student_to_course(&conn, student.id, art.id).unwrap();

        let names: Vec<String> = fetch_courses_for_student(&conn, student.id)
            .unwrap()
            .into_iter()
            .map(|course| course.name)
            .collect();
        assert_eq!(names, ["Art", "Math"]);

        remove_student_from_course(&conn, student.id, math.id).unwrap();
        assert!(remove_student_from_course(&conn, student.id, math.id).is_err());
        assert_eq!(fetch_courses_for_student(&conn, student.id).unwrap().len(), 1);
    }

    #[test]
    fn deleting_student_drops_enrolments() {
        let conn = test_connection();
        let student = create_student(&conn, Some("Ann"), Some("Lee"), None).unwrap();
        let math = create_course(&conn, "Math", None).unwrap();
        add_student_to_course(&conn, student.id, math.id).unwrap();

        delete_student(&conn, student.id).unwrap();
        let links: i64 = conn
            .query_row("SELECT COUNT(*) FROM student_courses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(links, 0);
        assert!(delete_student(&conn, student.id).is_err());
    }

    #[test]
    fn enrolling_unknown_student_fails() {
        let conn = test_connection();
        let math = create_course(&conn, "Math", None).unwrap();
        assert!(add_student_to_course(&conn, 99, math.id).is_err());
    }
}
