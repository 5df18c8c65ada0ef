//! Record-to-operation compiler and GraphQL client for gqload.
//!
//! The compiler turns already-parsed tabular records into one batch
//! mutation document: each record becomes an aliased operation whose
//! arguments are coerced against the schema's declared types, and records
//! that cannot satisfy a required argument are skipped, not fatal.

pub mod client;
pub mod coerce;
pub mod compile;
pub mod endpoint;
pub mod error;
pub mod mapping;
pub mod schema;

// Re-export key types at crate root for convenience.
pub use client::Client;
pub use compile::{compile_document, Diagnostics, Record};
pub use endpoint::Endpoint;
pub use error::LoadError;
pub use mapping::FieldMapping;
pub use schema::{ParsedSchema, TypeDescriptor};
