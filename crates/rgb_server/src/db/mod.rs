use rgb_core::Grid;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{ApiError, ApiResult};

pub type DbConn = std::sync::Arc<std::sync::Mutex<Connection>>;

pub fn init_db(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS form_sessions (
            id TEXT PRIMARY KEY,
            table_count INTEGER NOT NULL,
            row_count INTEGER NOT NULL,
            values_json TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

pub fn insert_form(conn: &Connection, id: &str, grid: &Grid, now: &str) -> ApiResult<()> {
    let shape = grid.shape();
    let grid_json = serde_json::to_string(grid)?;
    conn.execute(
        "INSERT INTO form_sessions (id, table_count, row_count, values_json, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            id,
            shape.table_count as i64,
            shape.row_count as i64,
            grid_json,
            now,
            now
        ],
    )?;
    Ok(())
}

pub fn load_form(conn: &Connection, id: &str) -> ApiResult<Grid> {
    let grid_json: String = conn
        .query_row("SELECT values_json FROM form_sessions WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?
        .ok_or_else(|| ApiError::FormNotFound(id.to_string()))?;

    Ok(serde_json::from_str(&grid_json)?)
}

pub fn save_form(conn: &Connection, id: &str, grid: &Grid, now: &str) -> ApiResult<()> {
    let shape = grid.shape();
    let grid_json = serde_json::to_string(grid)?;
    let affected = conn.execute(
        "UPDATE form_sessions SET table_count = ?1, row_count = ?2, values_json = ?3, updated_at = ?4 WHERE id = ?5",
        rusqlite::params![
            shape.table_count as i64,
            shape.row_count as i64,
            grid_json,
            now,
            id
        ],
    )?;

    if affected == 0 {
        return Err(ApiError::FormNotFound(id.to_string()));
    }
    Ok(())
}

pub fn delete_form(conn: &Connection, id: &str) -> ApiResult<()> {
    let affected = conn.execute("DELETE FROM form_sessions WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(ApiError::FormNotFound(id.to_string()));
    }
    Ok(())
}

/// Remove sessions not touched since `cutoff` (RFC 3339, UTC). Returns the
/// number removed.
pub fn prune_forms(conn: &Connection, cutoff: &str) -> ApiResult<usize> {
    Ok(conn.execute("DELETE FROM form_sessions WHERE updated_at < ?1", [cutoff])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb_core::{FieldKey, GridShape};

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn test_grid_round_trips_through_storage() {
        let conn = open();
        let mut grid = Grid::with_shape(GridShape::new().add_row());
        grid.row_mut(0, 1).unwrap().set_month(FieldKey::Sep, 3.5);
        grid.recompute();

        insert_form(&conn, "a", &grid, "2026-01-01T00:00:00Z").unwrap();
        let loaded = load_form(&conn, "a").unwrap();

        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_unknown_form_is_not_found() {
        let conn = open();
        let grid = Grid::default();

        assert!(matches!(load_form(&conn, "x"), Err(ApiError::FormNotFound(_))));
        assert!(matches!(
            save_form(&conn, "x", &grid, "now"),
            Err(ApiError::FormNotFound(_))
        ));
        assert!(matches!(delete_form(&conn, "x"), Err(ApiError::FormNotFound(_))));
    }

    #[test]
    fn test_save_updates_counts() {
        let conn = open();
        let mut grid = Grid::default();
        insert_form(&conn, "a", &grid, "t0").unwrap();

        grid.resize(grid.shape().add_table());
        save_form(&conn, "a", &grid, "t1").unwrap();

        let (tables, rows, updated): (i64, i64, String) = conn
            .query_row(
                "SELECT table_count, row_count, updated_at FROM form_sessions WHERE id = 'a'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!((tables, rows, updated.as_str()), (2, 1, "t1"));
    }

    #[test]
    fn test_prune_removes_stale_sessions_only() {
        let conn = open();
        let grid = Grid::default();
        insert_form(&conn, "old", &grid, "2026-01-01T00:00:00+00:00").unwrap();
        insert_form(&conn, "touched", &grid, "2026-01-01T00:00:00+00:00").unwrap();
        insert_form(&conn, "new", &grid, "2026-03-01T00:00:00+00:00").unwrap();
        save_form(&conn, "touched", &grid, "2026-02-20T00:00:00+00:00").unwrap();

        let removed = prune_forms(&conn, "2026-02-01T00:00:00+00:00").unwrap();

        assert_eq!(removed, 1);
        assert!(matches!(load_form(&conn, "old"), Err(ApiError::FormNotFound(_))));
        assert!(load_form(&conn, "touched").is_ok());
        assert!(load_form(&conn, "new").is_ok());
    }
}
