// ABOUTME: Persistence layer for pessoas, handling the SQLite file that holds person records.
// ABOUTME: Provides schema management, seeding, and CRUD operations through RecordStore.

pub mod schema;
pub mod sqlite;

pub use schema::SchemaOutcome;
pub use sqlite::{RecordStore, StoreError};
