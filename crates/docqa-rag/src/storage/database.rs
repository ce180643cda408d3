//! SQLite persistence for uploaded documents
//!
//! One connection guarded by a mutex, opened once at startup and shared
//! across handlers through the server state.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::{Document, DocumentSummary};

/// SQLite-backed document store
///
/// Documents are append-only: uploads insert, nothing updates or
/// deletes, so ids are stable for the lifetime of the database.
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Create or open the database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| Error::storage(format!("Failed to open database: {}", e)))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.migrate()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage(format!("Failed to open in-memory database: {}", e)))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.migrate()?;
        Ok(db)
    }

    /// Run database migrations
    fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock();

        // WAL mode for concurrent reads while an upload writes
        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA cache_size=10000;
            PRAGMA temp_store=MEMORY;
        "#,
        )
        .map_err(|e| Error::storage(format!("Failed to set pragmas: {}", e)))?;

        conn.execute_batch(
            r#"
            -- Uploaded documents with their full extracted text
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                content TEXT NOT NULL,
                content_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_content_hash ON documents(content_hash);
        "#,
        )
        .map_err(|e| Error::storage(format!("Failed to run migrations: {}", e)))?;

        tracing::info!("Database migrations complete");
        Ok(())
    }

    /// Insert a new document and return its assigned id
    pub fn insert_document(&self, filename: &str, content: &str, content_hash: &str) -> Result<i64> {
        let conn = self.conn.lock();

        conn.execute(
            r#"
            INSERT INTO documents (filename, content, content_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![filename, content, content_hash, Utc::now().to_rfc3339()],
        )
        .map_err(|e| Error::storage(format!("Failed to insert document: {}", e)))?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a document by id, with its full content
    pub fn get_document(&self, id: i64) -> Result<Option<Document>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare("SELECT id, filename, content, content_hash, created_at FROM documents WHERE id = ?1")
            .map_err(|e| Error::storage(format!("Failed to prepare query: {}", e)))?;

        let document = stmt
            .query_row(params![id], row_to_document)
            .optional()
            .map_err(|e| Error::storage(format!("Failed to get document: {}", e)))?;

        Ok(document)
    }

    /// Find a stored document with identical extracted content
    pub fn find_by_hash(&self, content_hash: &str) -> Result<Option<DocumentSummary>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare(
                "SELECT id, filename, content_hash, length(content), created_at \
                 FROM documents WHERE content_hash = ?1 LIMIT 1",
            )
            .map_err(|e| Error::storage(format!("Failed to prepare query: {}", e)))?;

        let summary = stmt
            .query_row(params![content_hash], row_to_summary)
            .optional()
            .map_err(|e| Error::storage(format!("Failed to look up content hash: {}", e)))?;

        Ok(summary)
    }

    /// List stored documents, newest first
    pub fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare(
                "SELECT id, filename, content_hash, length(content), created_at \
                 FROM documents ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| Error::storage(format!("Failed to prepare query: {}", e)))?;

        let summaries = stmt
            .query_map([], row_to_summary)
            .map_err(|e| Error::storage(format!("Failed to list documents: {}", e)))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(summaries)
    }

    /// Number of stored documents
    pub fn count_documents(&self) -> Result<usize> {
        let conn = self.conn.lock();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
            .unwrap_or(0);

        Ok(count as usize)
    }
}

fn row_to_document(row: &rusqlite::Row) -> rusqlite::Result<Document> {
    let created_at_str: String = row.get(4)?;

    Ok(Document {
        id: row.get(0)?,
        filename: row.get(1)?,
        content: row.get(2)?,
        content_hash: row.get(3)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<DocumentSummary> {
    let content_chars: i64 = row.get(3)?;
    let created_at_str: String = row.get(4)?;

    Ok(DocumentSummary {
        id: row.get(0)?,
        filename: row.get(1)?,
        content_hash: row.get(2)?,
        content_chars: content_chars as usize,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let db = DocumentStore::in_memory().unwrap();

        let first = db.insert_document("a.pdf", "alpha", "hash-a").unwrap();
        let second = db.insert_document("b.pdf", "beta", "hash-b").unwrap();
        let third = db.insert_document("c.pdf", "gamma", "hash-c").unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(third, 3);
    }

    #[test]
    fn test_insert_and_get_roundtrip() {
        let db = DocumentStore::in_memory().unwrap();
        let id = db
            .insert_document("report.pdf", "the full text", "abc123")
            .unwrap();

        let doc = db.get_document(id).unwrap().unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.filename, "report.pdf");
        assert_eq!(doc.content, "the full text");
        assert_eq!(doc.content_hash, "abc123");
        assert!(doc.created_at <= Utc::now());
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = DocumentStore::in_memory().unwrap();
        assert!(db.get_document(42).unwrap().is_none());
    }

    #[test]
    fn test_empty_content_is_stored() {
        let db = DocumentStore::in_memory().unwrap();
        let id = db.insert_document("scan.pdf", "", "empty-hash").unwrap();

        let doc = db.get_document(id).unwrap().unwrap();
        assert_eq!(doc.content, "");

        let summaries = db.list_documents().unwrap();
        assert_eq!(summaries[0].content_chars, 0);
    }

    #[test]
    fn test_find_by_hash() {
        let db = DocumentStore::in_memory().unwrap();
        let id = db.insert_document("a.pdf", "text", "deadbeef").unwrap();

        let found = db.find_by_hash("deadbeef").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(db.find_by_hash("cafebabe").unwrap().is_none());
    }

    #[test]
    fn test_list_newest_first_and_count() {
        let db = DocumentStore::in_memory().unwrap();
        db.insert_document("first.pdf", "one", "h1").unwrap();
        db.insert_document("second.pdf", "two", "h2").unwrap();

        let summaries = db.list_documents().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].filename, "second.pdf");
        assert_eq!(summaries[1].filename, "first.pdf");
        assert_eq!(db.count_documents().unwrap(), 2);
    }
}
