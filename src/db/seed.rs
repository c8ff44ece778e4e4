//! Test data for a fresh database: random group names, a fixed course list,
//! and students scattered across groups and courses.

use std::collections::HashSet;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::Connection;
use tracing::info;

use super::{add_student_to_course, create_course, create_group, create_student};

const GROUP_COUNT: usize = 10;
const STUDENT_COUNT: usize = 200;
const MIN_GROUP_SIZE: usize = 10;
const MAX_GROUP_SIZE: usize = 30;
const MAX_COURSES_PER_STUDENT: usize = 3;

const COURSES: &[(&str, &str)] = &[
    ("Mathematics", "Algebra, geometry and calculus"),
    ("Biology", "Study of living organisms"),
    ("Chemistry", "Substances and their reactions"),
    ("Physics", "Matter, energy and motion"),
    ("History", "Events of the past"),
    ("Geography", "Earth and its features"),
    ("Literature", "Reading and analysing texts"),
    ("Music", "Theory and practice of music"),
    ("Art", "Drawing and painting"),
    ("Computer Science", "Algorithms and programming"),
];

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "James", "Isabella", "William",
    "Mia", "Benjamin", "Charlotte", "Lucas", "Amelia", "Henry", "Harper", "Alexander", "Evelyn",
    "Daniel",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

/// Fill the database when it has no groups yet. Returns whether anything was
/// written.
pub fn seed_if_empty<R: Rng>(conn: &Connection, rng: &mut R) -> Result<bool> {
    let existing: i64 = conn
        .query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))
        .context("failed to count groups")?;
    if existing > 0 {
        return Ok(false);
    }

    let tx = conn
        .unchecked_transaction()
        .context("failed to start seed transaction")?;

    let mut group_ids = Vec::with_capacity(GROUP_COUNT);
    for name in group_names(rng) {
        group_ids.push(create_group(&tx, &name)?.id);
    }

    let mut course_ids = Vec::with_capacity(COURSES.len());
    for &(name, description) in COURSES {
        course_ids.push(create_course(&tx, name, Some(description))?.id);
    }

    let assignments = assign_groups(rng, &group_ids);
    for group_id in assignments {
        let first = FIRST_NAMES.choose(rng).copied();
        let last = LAST_NAMES.choose(rng).copied();
        let student = create_student(&tx, first, last, group_id)?;

        let take = rng.gen_range(1..=MAX_COURSES_PER_STUDENT);
        for course_id in course_ids.choose_multiple(rng, take) {
            add_student_to_course(&tx, student.id, *course_id)?;
        }
    }

    tx.commit().context("failed to commit seed data")?;
    info!(
        groups = GROUP_COUNT,
        courses = COURSES.len(),
        students = STUDENT_COUNT,
        "seeded test data"
    );
    Ok(true)
}

/// Distinct names shaped like `AB-12`.
fn group_names<R: Rng>(rng: &mut R) -> Vec<String> {
    let mut names = HashSet::with_capacity(GROUP_COUNT);
    let mut ordered = Vec::with_capacity(GROUP_COUNT);
    while ordered.len() < GROUP_COUNT {
        let name = format!(
            "{}{}-{}{}",
            rng.gen_range(b'A'..=b'Z') as char,
            rng.gen_range(b'A'..=b'Z') as char,
            rng.gen_range(0..10),
            rng.gen_range(0..10)
        );
        if names.insert(name.clone()) {
            ordered.push(name);
        }
    }
    ordered
}

/// Group for each of the students. A group takes a random block of
/// students, or none if not enough are left; leftovers stay groupless.
fn assign_groups<R: Rng>(rng: &mut R, group_ids: &[i64]) -> Vec<Option<i64>> {
    let mut slots: Vec<usize> = (0..STUDENT_COUNT).collect();
    slots.shuffle(rng);

    let mut assignments = vec![None; STUDENT_COUNT];
    let mut cursor = 0;
    for group_id in group_ids {
        let size = rng.gen_range(MIN_GROUP_SIZE..=MAX_GROUP_SIZE);
        if cursor + size > STUDENT_COUNT {
            continue;
        }
        for slot in &slots[cursor..cursor + size] {
            assignments[*slot] = Some(*group_id);
        }
        cursor += size;
    }
    assignments
}
