use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

use crate::core::{ClockTime, Session};
use crate::error::StoreError;
use crate::utils::{format_date, parse_date};

use super::SessionStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER NOT NULL,
    date TEXT NOT NULL,
    start_time TEXT NOT NULL,
    duration_min INTEGER NOT NULL,
    quality INTEGER
);";

type RawRow = (i64, String, String, i64, Option<i64>);

/// Sessions kept in a single SQLite table, in insertion order
pub(crate) struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    pub(crate) fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    #[cfg(test)]
    fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }
}

fn row_to_session(row: RawRow) -> Result<Session, StoreError> {
    let (id, date, start_time, duration_min, quality) = row;
    let bad_row = |reason: String| StoreError::Row { id, reason };

    Ok(Session {
        id,
        date: parse_date(&date).map_err(|e| bad_row(e.to_string()))?,
        start_time: start_time
            .parse::<ClockTime>()
            .map_err(|e| bad_row(e.to_string()))?,
        duration_min: u32::try_from(duration_min)
            .map_err(|_| bad_row(format!("duration {duration_min} out of range")))?,
        quality,
    })
}

impl SessionStore for SqliteStore {
    fn describe(&self) -> String {
        format!("sqlite database {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<Session>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, start_time, duration_min, quality FROM sessions ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?
            .collect::<Result<Vec<RawRow>, _>>()?;

        rows.into_iter().map(row_to_session).collect()
    }

    fn save_all(&self, sessions: &[Session]) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM sessions", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO sessions (id, date, start_time, duration_min, quality)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for s in sessions {
                insert.execute(params![
                    s.id,
                    format_date(s.date),
                    s.start_time.to_string(),
                    s.duration_min,
                    s.quality,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
