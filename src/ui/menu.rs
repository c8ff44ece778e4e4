use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use crossterm::style::Stylize;
use rusqlite::Connection;
use tracing::{info, warn};

use super::helpers::{optional_text, parse_number, surface_error};
use crate::db::{
    add_student_to_course, course_catalog, create_student, delete_student, fetch_courses,
    fetch_courses_for_student, fetch_groups, find_course_by_name, groups_with_at_most,
    remove_student_from_course, students_on_course,
};
use crate::report::{
    write_courses_catalog, write_groups_by_student_count, write_students_by_courses,
};

const TITLE: &str = "School manager";

const OPTIONS: &[(&str, &str)] = &[
    ("1", "Find groups with at most N students"),
    ("2", "Find students enrolled in a course"),
    ("3", "Add a new student"),
    ("4", "Delete a student by id"),
    ("5", "Add a student to a course"),
    ("6", "Remove a student from one of their courses"),
    ("7", "Show the course catalog"),
    ("0", "Exit"),
];

/// Line-oriented console menu. Reads answers from `input` and writes prompts
/// and report tables to `output`.
pub struct Menu<'c, R, W> {
    conn: &'c Connection,
    input: R,
    output: W,
    styled: bool,
}

impl<'c, R: BufRead, W: Write> Menu<'c, R, W> {
    pub fn new(conn: &'c Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
            styled: false,
        }
    }

    /// Emit terminal styling for the title.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Show the menu until the user picks `0` or input ends. Failed actions
    /// are reported and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let result = match choice.trim() {
                "0" => break,
                "1" => self.groups_by_load(),
                "2" => self.students_by_course(),
                "3" => self.add_student(),
                "4" => self.delete_student(),
                "5" => self.enrol_student(),
                "6" => self.unenrol_student(),
                "7" => self.course_catalog(),
                other => {
                    warn!(choice = other, "unknown menu option");
                    Err(anyhow!("Unknown option '{other}'"))
                }
            };

            if let Err(err) = result {
                writeln!(self.output, "Error: {}", surface_error(&err))
                    .context("failed to write error message")?;
            }
        }

        info!("menu closed");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output).context("failed to write menu")?;
        if self.styled {
            writeln!(self.output, "{}", TITLE.bold()).context("failed to write menu")?;
        } else {
            writeln!(self.output, "{TITLE}").context("failed to write menu")?;
        }
        for (key, label) in OPTIONS {
            writeln!(self.output, "{key}. {label}").context("failed to write menu")?;
        }
        write!(self.output, "> ").context("failed to write menu")?;
        self.output.flush().context("failed to flush menu")
    }

    fn groups_by_load(&mut self) -> Result<()> {
        let max = parse_number(&self.ask("Maximum number of students")?)?;
        let groups = groups_with_at_most(self.conn, max)?;
        write_groups_by_student_count(&mut self.output, &groups)?;
        Ok(())
    }

    fn students_by_course(&mut self) -> Result<()> {
        let name = self.ask("Course name")?;
        let name = name.trim();
        if find_course_by_name(self.conn, name)?.is_none() {
            return Err(anyhow!("Course '{name}' not found"));
        }
        let students = students_on_course(self.conn, name)?;
        write_students_by_courses(&mut self.output, &students)?;
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let first = self.ask("First name")?;
        let last = self.ask("Last name")?;

        let groups = fetch_groups(self.conn)?;
        self.list(groups.iter().map(|group| format!("{}: {}", group.id, group)))?;
        let group = self.ask("Group id (blank for none)")?;
        let group_id = optional_text(&group).map(parse_number).transpose()?;

        let student = create_student(
            self.conn,
            optional_text(&first),
            optional_text(&last),
            group_id,
        )?;
        writeln!(self.output, "Added student {student}").context("failed to write result")?;
        Ok(())
    }

    fn delete_student(&mut self) -> Result<()> {
        let id = parse_number(&self.ask("Student id")?)?;
        delete_student(self.conn, id)?;
        writeln!(self.output, "Deleted student {id}").context("failed to write result")?;
        Ok(())
    }

    fn enrol_student(&mut self) -> Result<()> {
        let courses = fetch_courses(self.conn)?;
        self.list(&courses)?;
        let student_id = parse_number(&self.ask("Student id")?)?;
        let course_id = parse_number(&self.ask("Course id")?)?;
        add_student_to_course(self.conn, student_id, course_id)?;
        writeln!(
            self.output,
            "Student {student_id} added to course {course_id}"
        )
        .context("failed to write result")?;
        Ok(())
    }

    fn unenrol_student(&mut self) -> Result<()> {
        let student_id = parse_number(&self.ask("Student id")?)?;
        let courses = fetch_courses_for_student(self.conn, student_id)?;
        if courses.is_empty() {
            writeln!(self.output, "Student {student_id} has no courses")
                .context("failed to write result")?;
            return Ok(());
        }
        self.list(&courses)?;
        let course_id = parse_number(&self.ask("Course id")?)?;
        remove_student_from_course(self.conn, student_id, course_id)?;
        writeln!(
            self.output,
            "Student {student_id} removed from course {course_id}"
        )
        .context("failed to write result")?;
        Ok(())
    }

    fn course_catalog(&mut self) -> Result<()> {
        let courses = course_catalog(self.conn)?;
        write_courses_catalog(&mut self.output, &courses)?;
        Ok(())
    }

    fn list<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for item in items {
            writeln!(self.output, "  {item}").context("failed to write list")?;
        }
        Ok(())
    }

    /// Prompt for one answer. Running out of input here aborts the action.
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;
        self.read_line()?.ok_or_else(|| anyhow!("input closed"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
