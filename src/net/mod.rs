//! Networking modules for the ERP REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire DTOs, `api` builds and sends the HTTP requests
//! and interprets the `{success, message, data}` envelope.

pub mod api;
pub mod types;
