// ABOUTME: Schema management for the pessoas table: creation and destructive upgrade of old layouts.
// ABOUTME: A table without the profissao column is dropped and recreated; its rows are lost.

use rusqlite::Connection;

pub(crate) const TABLE: &str = "pessoas";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS pessoas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    idade INTEGER NOT NULL,
    cidade TEXT NOT NULL,
    profissao TEXT NOT NULL
);";

/// Column every current table must carry. Tables from the first layout lack it.
const REQUIRED_COLUMN: &str = "profissao";

/// What `ensure_schema` had to do to bring the table up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOutcome {
    Created,
    Recreated,
    Unchanged,
}

/// Column names of the pessoas table, in declaration order. Empty if the table does not exist.
pub(crate) fn table_columns(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let rows = stmt.query_map([TABLE], |row| row.get::<_, String>(0))?;

    let mut columns = Vec::new();
    for row in rows {
        columns.push(row?);
    }
    Ok(columns)
}

pub(crate) fn ensure_schema(conn: &mut Connection) -> rusqlite::Result<SchemaOutcome> {
    let columns = table_columns(conn)?;

    if columns.is_empty() {
        conn.execute_batch(CREATE_TABLE)?;
        tracing::info!("created table {}", TABLE);
        return Ok(SchemaOutcome::Created);
    }

    if columns.iter().any(|c| c == REQUIRED_COLUMN) {
        return Ok(SchemaOutcome::Unchanged);
    }

    tracing::warn!(
        ?columns,
        "table {} has no {} column; dropping and recreating it, existing rows are discarded",
        TABLE,
        REQUIRED_COLUMN
    );
    let tx = conn.transaction()?;
    tx.execute_batch("DROP TABLE pessoas;")?;
    tx.execute_batch(CREATE_TABLE)?;
    tx.commit()?;

    Ok(SchemaOutcome::Recreated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(table_columns(&conn).unwrap().is_empty());

        assert_eq!(ensure_schema(&mut conn).unwrap(), SchemaOutcome::Created);
        assert_eq!(
            table_columns(&conn).unwrap(),
            vec!["id", "nome", "idade", "cidade", "profissao"]
        );
    }

    #[test]
    fn second_call_is_a_no_op() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO pessoas (nome, idade, cidade, profissao) VALUES ('Ana', 30, 'Curitiba', 'Professor')",
            [],
        )
        .unwrap();

        assert_eq!(ensure_schema(&mut conn).unwrap(), SchemaOutcome::Unchanged);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pessoas", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn recreates_table_without_profession() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE pessoas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome TEXT NOT NULL,
                idade INTEGER NOT NULL,
                cidade TEXT NOT NULL
            );
            INSERT INTO pessoas (nome, idade, cidade) VALUES ('Velho', 80, 'Curitiba');",
        )
        .unwrap();

        assert_eq!(ensure_schema(&mut conn).unwrap(), SchemaOutcome::Recreated);

        let columns = table_columns(&conn).unwrap();
        assert!(columns.iter().any(|c| c == "profissao"));
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pessoas", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
