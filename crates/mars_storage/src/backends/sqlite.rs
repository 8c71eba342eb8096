use async_trait::async_trait;
use mars_core::{DocumentStore, Error, Result, ScrapeResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use crate::{StorageBackend, COLLECTION};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        collection TEXT PRIMARY KEY,
        body TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

fn storage_error(action: &str, e: impl std::fmt::Display) -> Error {
    Error::Storage(format!("{}: {}", action, e))
}

/// One JSON document per collection in a local SQLite file.
pub struct SQLiteStorage {
    pool: SqlitePool,
    db_path: PathBuf,
}

#[async_trait]
impl StorageBackend for SQLiteStorage {
    fn name() -> &'static str {
        "sqlite"
    }

    async fn connect(url: Option<&str>) -> Result<Self> {
        let db_path = PathBuf::from(url.unwrap_or("mars_app.db"));
        Self::new_with_path(&db_path).await
    }
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))
            .map_err(|e| storage_error("database path", e))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| storage_error("connect", e))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| storage_error(&format!("migration {}", i), e))?;
        }

        Ok(Self {
            pool,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl DocumentStore for SQLiteStorage {
    async fn upsert(&self, document: &ScrapeResult) -> Result<()> {
        let body = serde_json::to_string(document)?;
        sqlx::query("INSERT OR REPLACE INTO documents (collection, body) VALUES (?, ?)")
            .bind(COLLECTION)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("upsert", e))?;
        Ok(())
    }

    async fn find_one(&self) -> Result<Option<ScrapeResult>> {
        let row = sqlx::query("SELECT body FROM documents WHERE collection = ?")
            .bind(COLLECTION)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find", e))?;

        match row {
            Some(row) => {
                let body: String = row.try_get("body").map_err(|e| storage_error("read body", e))?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            None => Ok(None),
        }
    }
}
