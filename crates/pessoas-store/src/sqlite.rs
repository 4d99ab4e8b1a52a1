// ABOUTME: SQLite-backed record store for person rows.
// ABOUTME: Opens a fresh connection per operation and provides schema, seed, insert, list, update, and delete.

use std::path::{Path, PathBuf};

use pessoas_core::{Person, PersonFields, SEED_COUNT, ValidationError, generate_seed_records};
use rand::Rng;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use thiserror::Error;

use crate::schema::{self, SchemaOutcome};

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the caller supplied bad input, as opposed to the database failing.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

/// Persistent store of person records in a single SQLite file.
///
/// The handle only carries the database path. Every operation opens its own
/// connection and drops it before returning, so clones are cheap and can be
/// handed to any thread.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store for the database at `path`. Nothing is opened until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)?,
            _ => {}
        }
        Ok(Connection::open(&self.path)?)
    }

    /// Create the table if absent, or recreate it if it predates the profession column.
    pub fn ensure_schema(&self) -> Result<SchemaOutcome, StoreError> {
        let mut conn = self.connect()?;
        Ok(schema::ensure_schema(&mut conn)?)
    }

    /// Insert placeholder rows if the table is empty. Returns how many rows were added.
    pub fn seed_if_empty(&self) -> Result<usize, StoreError> {
        self.seed_if_empty_with(&mut rand::rng())
    }

    /// Same as [`seed_if_empty`](Self::seed_if_empty) with a caller-supplied random source.
    pub fn seed_if_empty_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, StoreError> {
        let mut conn = self.connect()?;
        if count_rows(&conn)? > 0 {
            return Ok(0);
        }

        let records = generate_seed_records(rng, SEED_COUNT);
        let tx = conn.transaction()?;
        for fields in &records {
            insert_row(&tx, fields.name.trim(), fields)?;
        }
        tx.commit()?;

        tracing::info!(count = records.len(), "seeded empty table");
        Ok(records.len())
    }

    /// Number of stored rows.
    pub fn count(&self) -> Result<u64, StoreError> {
        let conn = self.connect()?;
        Ok(count_rows(&conn)?)
    }

    /// Validate and insert a new row. Returns the id assigned by the database.
    pub fn insert(&self, fields: &PersonFields) -> Result<i64, StoreError> {
        let name = fields.validate()?;
        let conn = self.connect()?;
        insert_row(&conn, name, fields)?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "inserted person");
        Ok(id)
    }

    /// All rows in storage order.
    pub fn list(&self) -> Result<Vec<Person>, StoreError> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, nome, idade, cidade, profissao FROM pessoas")?;
        let rows = stmt.query_map([], person_from_row)?;

        let mut people = Vec::new();
        for row in rows {
            people.push(row?);
        }
        Ok(people)
    }

    /// Overwrite every field of the row with `id`. A missing id is not an error.
    pub fn update(&self, id: i64, fields: &PersonFields) -> Result<(), StoreError> {
        let name = fields.validate()?;
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE pessoas SET nome = ?1, idade = ?2, cidade = ?3, profissao = ?4 WHERE id = ?5",
            params![
                name,
                fields.age,
                fields.city.as_str(),
                fields.profession.as_str(),
                id
            ],
        )?;
        tracing::debug!(id, changed, "updated person");
        Ok(())
    }

    /// Remove the row with `id`. A missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM pessoas WHERE id = ?1", params![id])?;
        tracing::debug!(id, changed, "deleted person");
        Ok(())
    }
}

fn count_rows(conn: &Connection) -> rusqlite::Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM pessoas", [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

fn insert_row(conn: &Connection, name: &str, fields: &PersonFields) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO pessoas (nome, idade, cidade, profissao) VALUES (?1, ?2, ?3, ?4)",
        params![
            name,
            fields.age,
            fields.city.as_str(),
            fields.profession.as_str()
        ],
    )
}

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    let city: String = row.get(3)?;
    let profession: String = row.get(4)?;

    Ok(Person {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        city: city
            .parse()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        profession: profession
            .parse()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
    })
}
