//! Proreview Core - Domain entities, services, and traits.
//!
//! This crate contains the profession catalog logic for the Proreview
//! marketplace. It is backend-agnostic and defines traits that are
//! implemented by the `proreview-backend` crate.

pub mod constants;
pub mod errors;
pub mod professions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
