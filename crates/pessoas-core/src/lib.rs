// ABOUTME: Core library for pessoas, containing the person domain types and validation rules.
// ABOUTME: This crate defines the shared data model used by the store and the HTTP server.

pub mod person;
pub mod seed;

pub use person::{City, MAX_AGE, Person, PersonFields, Profession, UnknownVariant, ValidationError};
pub use seed::{SEED_COUNT, generate_seed_records};
