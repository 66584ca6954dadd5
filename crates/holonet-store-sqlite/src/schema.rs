//! SQL schema for the Holonet SQLite store.
//!
//! Executed once at connection startup. Later schema changes will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    email      TEXT    NOT NULL UNIQUE,
    password   TEXT    NOT NULL,       -- opaque to the store
    is_active  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL UNIQUE,
    height  TEXT,
    gender  TEXT
);

CREATE TABLE IF NOT EXISTS planets (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL UNIQUE,
    climate  TEXT,
    terrain  TEXT
);

-- Either target column may be NULL; nothing forces exactly one to be set.
CREATE TABLE IF NOT EXISTS favorites (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id    INTEGER NOT NULL REFERENCES users(id)   ON DELETE CASCADE,
    planet_id  INTEGER          REFERENCES planets(id) ON DELETE CASCADE,
    people_id  INTEGER          REFERENCES people(id)  ON DELETE CASCADE
);

CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_planet_uq
    ON favorites(user_id, planet_id) WHERE planet_id IS NOT NULL;
CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_people_uq
    ON favorites(user_id, people_id) WHERE people_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS favorites_user_idx ON favorites(user_id);

PRAGMA user_version = 1;
";
