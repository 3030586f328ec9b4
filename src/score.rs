use std::path::Path;

use rusqlite::{Connection, params};

/// One persisted leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

/// Append-only score log backed by a single SQLite table. The only two
/// operations the game needs are appending a finished session and reading
/// the top N rows by score.
pub struct ScoreStore {
    conn: Connection,
}

impl ScoreStore {
    /// Opens (creating if needed) the score database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                score INTEGER
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Appends one session result. Records are never updated or deleted.
    pub fn append(&self, name: &str, score: u32) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO records (name, score) VALUES (?1, ?2)",
            params![name, score],
        )?;
        Ok(())
    }

    /// Returns up to `n` records ordered by score descending. Tie order
    /// among equal scores is whatever SQLite yields and is not guaranteed.
    pub fn top_n(&self, n: u32) -> Result<Vec<ScoreRecord>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, score FROM records ORDER BY score DESC LIMIT ?1")?;
        let rows = stmt.query_map(params![n], |row| {
            Ok(ScoreRecord {
                name: row.get(0)?,
                score: row.get(1)?,
            })
        })?;
        rows.collect()
    }
}
