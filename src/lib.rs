//! Core library surface for the school manager console application.
//!
//! `report` renders the aligned ASCII tables, `db` owns the SQLite store that
//! feeds them, and `ui` is the numbered menu tying the two together.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod report;
pub mod ui;

pub use config::Config;
pub use db::{ensure_schema, seed_if_empty};
pub use models::{Course, Group, Student};
pub use report::{
    render_courses_catalog, render_groups_by_student_count, render_students_by_courses,
    CourseListing, GroupLoad, ReportError, StudentCourses,
};
pub use ui::{run_app, Menu};
