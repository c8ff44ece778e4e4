use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use super::map_constraint;
use crate::models::Group;

/// Retrieve every group sorted by name.
pub fn fetch_groups(conn: &Connection) -> Result<Vec<Group>> {
    debug!("fetching groups");
    let mut stmt = conn
        .prepare("SELECT id, name FROM groups ORDER BY name")
        .context("failed to prepare group query")?;

    let groups = stmt
        .query_map([], |row| {
            Ok(Group {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .context("failed to load groups")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect groups")?;

    Ok(groups)
}

/// Insert a new group and return the hydrated struct.
pub fn create_group(conn: &Connection, name: &str) -> Result<Group> {
    conn.execute("INSERT INTO groups (name) VALUES (?1)", params![name])
        .map_err(|err| map_constraint(err, format!("Group {name} already exists.")))
        .context("failed to insert group")?;

    let id = conn.last_insert_rowid();
    info!(id, name, "group created");
    Ok(Group {
        id,
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_connection;
    use crate::ui::surface_error;

    #[test]
    fn create_and_fetch_sorted() {
        let conn = test_connection();
        create_group(&conn, "QL-03").unwrap();
        create_group(&conn, "JR-84").unwrap();

        let names: Vec<String> = fetch_groups(&conn)
            .unwrap()
            .into_iter()
            .map(|group| group.name)
            .collect();
        assert_eq!(names, ["JR-84", "QL-03"]);
    }

    #[test]
    fn duplicate_name_is_readable() {
        let conn = test_connection();
        create_group(&conn, "JR-84").unwrap();
        let err = create_group(&conn, "JR-84").unwrap_err();
        assert_eq!(surface_error(&err), "Group JR-84 already exists.");
    }
}
