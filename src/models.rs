//! Domain models that mirror the SQLite schema. They stay plain data holders;
//! persistence lives in `db` and presentation in `report` and `ui`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A study group such as `JR-84`.
pub struct Group {
    /// Primary key from the database.
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A student. Both name parts are nullable in the schema, so they stay
/// optional here and reports spell an absent part out as `null`.
pub struct Student {
    pub id: i64,
    /// Students may exist without a group.
    pub group_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Student {
    /// `first last`, skipping whichever part is missing.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
