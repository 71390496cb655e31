//! Networking modules for the backend function host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one-shot HTTP calls and `types` defines the wire schema
//! plus the success rule for each response.

pub mod api;
pub mod types;
