//! Linkwell Storage Layer
//!
//! Implements the `UrlStore` trait over SQLite.
//!
//! # Architecture
//!
//! - One `urls` row per shorten event, not deduplicated by original URL
//! - One `collections` row per unique name; duplicate creation is rejected
//! - Tag lists and the metadata blob are stored as JSON text columns
//! - No migrations, no versioning
//!
//! # Examples
//!
//! ```no_run
//! use linkwell_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for URL operations
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, Utc};
use linkwell_domain::traits::{UrlFilter, UrlStore};
use linkwell_domain::{Collection, NewUrl, UrlRecord};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Collection name already taken
    #[error("Collection already exists")]
    Duplicate,

    /// Invalid data format in a stored row
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `UrlStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Callers that share a store across
/// tasks must wrap it in a mutex; SQLite serializes the writers underneath.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn map_url_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UrlRecord> {
        let tags_json: String = row.get(6)?;
        let tags: Vec<String> = serde_json::from_str(&tags_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?;

        let metadata_json: String = row.get(12)?;
        let metadata: serde_json::Value = serde_json::from_str(&metadata_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(12, rusqlite::types::Type::Text, Box::new(e))
        })?;

        let created_at: String = row.get(9)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    9,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?
            .with_timezone(&Utc);

        Ok(UrlRecord {
            id: row.get(0)?,
            original_url: row.get(1)?,
            shortened_url: row.get(2)?,
            custom_alias: row.get(3)?,
            title: row.get(4)?,
            description: row.get(5)?,
            tags,
            collection_name: row.get(7)?,
            service_used: row.get(8)?,
            created_at,
            click_count: row.get(10)?,
            is_safe: row.get(11)?,
            metadata,
        })
    }

    fn map_collection_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Collection> {
        let created_at: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?
            .with_timezone(&Utc);

        Ok(Collection {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            created_at,
        })
    }

    const URL_COLUMNS: &'static str = "id, original_url, shortened_url, custom_alias, title, \
         description, tags, collection_name, service_used, created_at, click_count, is_safe, \
         metadata";
}

impl UrlStore for SqliteStore {
    type Error = StoreError;

    fn save_url(&mut self, url: NewUrl) -> Result<i64, Self::Error> {
        let tags_json = serde_json::to_string(&url.tags)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        let metadata_json = serde_json::to_string(&url.metadata)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;

        self.conn.execute(
            "INSERT INTO urls (
                original_url, shortened_url, custom_alias, title, description,
                tags, collection_name, service_used, created_at, is_safe, metadata
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                &url.original_url,
                &url.shortened_url,
                &url.custom_alias,
                &url.title,
                &url.description,
                &tags_json,
                &url.collection_name,
                &url.service_used,
                Utc::now().to_rfc3339(),
                url.is_safe,
                &metadata_json,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_urls(&self, filter: &UrlFilter) -> Result<Vec<UrlRecord>, Self::Error> {
        let mut sql = format!("SELECT {} FROM urls WHERE 1=1", Self::URL_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(collection) = &filter.collection {
            sql.push_str(" AND collection_name = ?");
            params.push(Box::new(collection.clone()));
        }

        // Tags are a JSON array column; match each requested tag as a quoted
        // substring, the same shape the original storage layer used.
        for tag in &filter.tags {
            sql.push_str(" AND tags LIKE ?");
            params.push(Box::new(format!("%\"{}\"%", tag)));
        }

        sql.push_str(" ORDER BY created_at DESC LIMIT ?");
        params.push(Box::new(filter.limit as i64));

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let records = stmt
            .query_map(&param_refs[..], Self::map_url_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn search_urls(&self, term: &str, limit: usize) -> Result<Vec<UrlRecord>, Self::Error> {
        let pattern = format!("%{}%", term);
        let sql = format!(
            "SELECT {} FROM urls
             WHERE title LIKE ?1 OR description LIKE ?1 OR original_url LIKE ?1
             ORDER BY created_at DESC LIMIT ?2",
            Self::URL_COLUMNS
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map(params![pattern, limit as i64], Self::map_url_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn create_collection(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, Self::Error> {
        let result = self.conn.execute(
            "INSERT INTO collections (name, description, created_at) VALUES (?1, ?2, ?3)",
            params![name, description, Utc::now().to_rfc3339()],
        );

        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_collections(&self) -> Result<Vec<Collection>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, created_at FROM collections ORDER BY created_at DESC",
        )?;
        let collections = stmt
            .query_map([], Self::map_collection_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(collections)
    }
}
