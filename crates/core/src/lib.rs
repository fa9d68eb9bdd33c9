//! Daylog Core - Domain entities, services, and traits.
//!
//! This crate contains the activity log's business logic. It is
//! storage-agnostic and defines the repository trait that the
//! `storage-notion` crate implements against the hosted database.

pub mod activities;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
