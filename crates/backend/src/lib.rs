//! Proreview Backend - adapter for the hosted backend-as-a-service.
//!
//! This crate reads professional profiles and the profession taxonomy over
//! the backend's REST interface and implements the core repository traits.

pub mod client;
pub mod repository;

pub use client::BackendClient;
pub use repository::BackendProfessionRepository;
