//! Database operations using rusqlite.
//!
//! Engagement state is stored as one JSON snapshot per profile, next to a
//! few denormalized columns for quick listing.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use super::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use super::StateStore;
use crate::engine::EngagementSnapshot;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        // Create schema version table
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        // Check current version
        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            // Initial schema
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            // Record version
            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Profile Operations ==========

    /// Create a profile if it does not exist yet.
    pub fn ensure_profile(&self, id: Uuid, display_name: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO profiles (id, display_name, created_at) VALUES (?1, ?2, ?3)",
                params![id.to_string(), display_name, Utc::now().to_rfc3339()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    /// List profiles as (id, display name), oldest first.
    pub fn list_profiles(&self) -> Result<Vec<(Uuid, String)>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, display_name FROM profiles ORDER BY created_at ASC")
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut profiles = Vec::new();
        for row in rows {
            let (id_str, name) = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            let id = Uuid::parse_str(&id_str)
                .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;
            profiles.push((id, name));
        }

        Ok(profiles)
    }

    /// Delete a profile and its snapshot.
    pub fn delete_profile(&self, id: Uuid) -> Result<bool, DatabaseError> {
        self.conn
            .execute(
                "DELETE FROM engagement_snapshots WHERE profile_id = ?1",
                params![id.to_string()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let deleted = self
            .conn
            .execute("DELETE FROM profiles WHERE id = ?1", params![id.to_string()])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(deleted > 0)
    }

    // ========== Snapshot Operations ==========

    /// Insert or replace the snapshot for a profile.
    pub fn save_snapshot(
        &self,
        profile_id: Uuid,
        snapshot: &EngagementSnapshot,
    ) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO engagement_snapshots
                 (profile_id, snapshot_json, level, current_xp, coins, saved_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    profile_id.to_string(),
                    json,
                    snapshot.progression.level,
                    snapshot.progression.current_xp,
                    snapshot.companion.coins,
                    snapshot.saved_at.to_rfc3339(),
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DatabaseError::ConstraintViolation(format!("unknown profile {}", profile_id))
                }
                other => DatabaseError::QueryFailed(other.to_string()),
            })?;

        tracing::debug!("Saved snapshot for profile {}", profile_id);
        Ok(())
    }

    /// Load the snapshot for a profile.
    pub fn load_snapshot(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<EngagementSnapshot>, DatabaseError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT snapshot_json FROM engagement_snapshots WHERE profile_id = ?1",
                params![profile_id.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        json.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| DatabaseError::DeserializationError(e.to_string()))
        })
        .transpose()
    }

    /// When the snapshot for a profile was last saved.
    pub fn last_saved(&self, profile_id: Uuid) -> Result<Option<DateTime<Utc>>, DatabaseError> {
        let saved: Option<String> = self
            .conn
            .query_row(
                "SELECT saved_at FROM engagement_snapshots WHERE profile_id = ?1",
                params![profile_id.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        saved
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|e| DatabaseError::DeserializationError(e.to_string()))
            })
            .transpose()
    }
}

/// [`StateStore`] backed by SQLite, bound to one profile.
pub struct SqliteStore {
    db: Database,
    profile_id: Uuid,
}

impl SqliteStore {
    /// Bind a store to a profile, creating the profile row if needed.
    pub fn new(db: Database, profile_id: Uuid, display_name: &str) -> Result<Self, DatabaseError> {
        db.ensure_profile(profile_id, display_name)?;
        Ok(Self { db, profile_id })
    }

    /// Open the database file and bind to the first profile, creating one
    /// if the database is empty.
    pub fn open_default_profile(path: &Path, display_name: &str) -> Result<Self, DatabaseError> {
        let db = Database::open(path)?;
        let profile_id = match db.list_profiles()?.first() {
            Some((id, _)) => *id,
            None => Uuid::new_v4(),
        };
        Self::new(db, profile_id, display_name)
    }

    pub fn profile_id(&self) -> Uuid {
        self.profile_id
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl StateStore for SqliteStore {
    fn load(&self) -> Result<Option<EngagementSnapshot>, DatabaseError> {
        self.db.load_snapshot(self.profile_id)
    }

    fn save(&mut self, snapshot: &EngagementSnapshot) -> Result<(), DatabaseError> {
        self.db.save_snapshot(self.profile_id, snapshot)
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
