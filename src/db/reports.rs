//! Queries that feed the console reports. They return renderer entries
//! directly so the menu only has to pick a report and hand the rows over.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::debug;

use crate::report::{CourseListing, GroupLoad, StudentCourses};

/// Groups holding at most `max_students` students, emptiest first.
pub fn groups_with_at_most(conn: &Connection, max_students: i64) -> Result<Vec<GroupLoad>> {
    debug!(max_students, "loading groups by student count");
    let mut stmt = conn
        .prepare(
            "SELECT g.name, COUNT(s.id) AS student_count
             FROM groups g
             LEFT JOIN students s ON s.group_id = g.id
             GROUP BY g.id
             HAVING COUNT(s.id) <= ?1
             ORDER BY student_count, g.name",
        )
        .context("failed to prepare group load query")?;

    let groups = stmt
        .query_map(params![max_students], |row| {
            Ok(GroupLoad {
                name: row.get(0)?,
                student_count: row.get(1)?,
            })
        })
        .context("failed to load group counts")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect group counts")?;

    Ok(groups)
}

/// Students enrolled in `course_name`, each listed with all of their courses.
pub fn students_on_course(conn: &Connection, course_name: &str) -> Result<Vec<StudentCourses>> {
    debug!(course_name, "loading students for course");
    let mut students_stmt = conn
        .prepare(
            "SELECT s.id, s.first_name, s.last_name
             FROM students s
             INNER JOIN student_courses sc ON sc.student_id = s.id
             INNER JOIN courses c ON c.id = sc.course_id
             WHERE c.name = ?1
             ORDER BY s.id",
        )
        .context("failed to prepare course students query")?;

    let students = students_stmt
        .query_map(params![course_name], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })
        .context("failed to load course students")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect course students")?;

    let mut courses_stmt = conn
        .prepare(
            "SELECT c.name
             FROM courses c
             INNER JOIN student_courses sc ON sc.course_id = c.id
             WHERE sc.student_id = ?1
             ORDER BY c.name",
        )
        .context("failed to prepare enrolment query")?;

    let mut entries = Vec::with_capacity(students.len());
    for (student_id, first_name, last_name) in students {
        let courses = courses_stmt
            .query_map(params![student_id], |row| row.get::<_, Option<String>>(0))
            .context("failed to load enrolments")?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to collect enrolments")?;
        entries.push(StudentCourses {
            first_name,
            last_name,
            courses,
        });
    }

    Ok(entries)
}

/// Every course with its description, ordered by name.
pub fn course_catalog(conn: &Connection) -> Result<Vec<CourseListing>> {
    debug!("loading course catalog");
    let mut stmt = conn
        .prepare("SELECT name, description FROM courses ORDER BY name")
        .context("failed to prepare course catalog query")?;

    let courses = stmt
        .query_map([], |row| {
            Ok(CourseListing {
                name: row.get(0)?,
                description: row.get(1)?,
            })
        })
        .context("failed to load course catalog")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect course catalog")?;

    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        add_student_to_course, create_course, create_group, create_student, test_connection,
    };

    #[test]
    fn groups_filtered_by_load() {
        let conn = test_connection();
        let big = create_group(&conn, "JR-84").unwrap();
        let small = create_group(&conn, "QL-03").unwrap();
        create_group(&conn, "VA-72").unwrap();
        for _ in 0..3 {
            create_student(&conn, Some("A"), Some("B"), Some(big.id)).unwrap();
        }
        create_student(&conn, Some("C"), Some("D"), Some(small.id)).unwrap();

        let loads = groups_with_at_most(&conn, 1).unwrap();
        assert_eq!(
            loads,
            vec![
                GroupLoad {
                    name: Some("VA-72".into()),
                    student_count: Some(0),
                },
                GroupLoad {
                    name: Some("QL-03".into()),
                    student_count: Some(1),
                },
            ]
        );
        assert_eq!(groups_with_at_most(&conn, 3).unwrap().len(), 3);
        assert!(groups_with_at_most(&conn, -1).unwrap().is_empty());
    }

    #[test]
    fn students_carry_all_their_courses() {
        let conn = test_connection();
        let math = create_course(&conn, "Math", None).unwrap();
        let art = create_course(&conn, "Art", None).unwrap();
        let ann = create_student(&conn, Some("Ann"), None, None).unwrap();
        let bob = create_student(&conn, Some("Bob"), Some("Ray"), None).unwrap();
        add_student_to_course(&conn, ann.id, math.id).unwrap();
        add_student_to_course(&conn, ann.id, art.id).unwrap();
        add_student_to_course(&conn, bob.id, art.id).unwrap();

        let on_math = students_on_course(&conn, "Math").unwrap();
        assert_eq!(on_math.len(), 1);
        assert_eq!(on_math[0].full_name(), "Ann null");
        assert_eq!(
            on_math[0].courses,
            vec![Some("Art".to_string()), Some("Math".to_string())]
        );

        assert_eq!(students_on_course(&conn, "Art").unwrap().len(), 2);
        assert!(students_on_course(&conn, "Music").unwrap().is_empty());
    }

    #[test]
    fn catalog_keeps_null_descriptions() {
        let conn = test_connection();
        create_course(&conn, "Math", None).unwrap();
        create_course(&conn, "Art", Some("Drawing")).unwrap();

        let catalog = course_catalog(&conn).unwrap();
        assert_eq!(catalog[0].name.as_deref(), Some("Art"));
        assert_eq!(catalog[1].description, None);
    }
}
