//! SQLite-backed key-value store.
//!
//! A single `kv` table holds JSON blobs keyed by name. The public API is
//! synchronous; an internal current-thread runtime drives the pool.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::runtime::{Builder, Runtime};

use crate::KeyValueStore;

/// On-device persistent store.
#[derive(Debug)]
pub struct SqliteStore {
    rt: Runtime,
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create storage directory at {parent:?}"))?;
        }

        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to build storage runtime")?;

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = rt
            .block_on(SqlitePoolOptions::new().max_connections(1).connect_with(options))
            .with_context(|| format!("failed to open state database at {path:?}"))?;

        rt.block_on(
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS kv (
                    key        TEXT PRIMARY KEY,
                    value      TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
                "#,
            )
            .execute(&pool),
        )
        .context("failed to create kv table")?;

        Ok(Self { rt, pool })
    }

    /// Open the store at the default on-device location:
    /// `{app_data_dir}/petcare/state.db`.
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(default_db_path()?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        let result = self.rt.block_on(
            sqlx::query("SELECT value FROM kv WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool),
        );

        match result {
            Ok(row) => row.and_then(|r| r.try_get::<String, _>("value").ok()),
            Err(err) => {
                tracing::error!(key, %err, "failed to read from state database");
                None
            }
        }
    }

    fn put(&self, key: &str, value: &str) {
        let result = self.rt.block_on(
            sqlx::query(
                r#"
                INSERT INTO kv (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool),
        );

        if let Err(err) = result {
            tracing::error!(key, %err, "failed to write to state database");
        }
    }

    fn remove(&self, key: &str) {
        let result = self.rt.block_on(
            sqlx::query("DELETE FROM kv WHERE key = ?1")
                .bind(key)
                .execute(&self.pool),
        );

        if let Err(err) = result {
            tracing::error!(key, %err, "failed to delete from state database");
        }
    }
}

/// Resolve `{app_data_dir}/petcare/state.db`.
fn default_db_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut path = base;
    path.push("petcare");
    path.push("state.db");
    Ok(path)
}
