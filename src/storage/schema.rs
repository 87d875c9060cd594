//! Database schema definitions for FlowSense.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Profiles table
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    display_name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Engagement snapshots (latest state per profile)
CREATE TABLE IF NOT EXISTS engagement_snapshots (
    profile_id TEXT PRIMARY KEY REFERENCES profiles(id) ON DELETE CASCADE,
    snapshot_json TEXT NOT NULL,
    level INTEGER NOT NULL,
    current_xp INTEGER NOT NULL,
    coins INTEGER NOT NULL,
    saved_at TEXT NOT NULL
);
"#;

/// Schema version table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;
