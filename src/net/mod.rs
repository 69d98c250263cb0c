//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls (including bearer signing from the token store)
//! and `types` defines the shared wire schema for auth payloads.

pub mod api;
pub mod types;
