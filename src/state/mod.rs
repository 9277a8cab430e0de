//! Application state.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with pure transitions. `app` wraps the shared ones
//! (`session`, `cache`, `inflight`, `notify`) in `RwSignal`s and provides
//! them as context; screens keep their form state in local signals.

pub mod cache;
pub mod captcha;
pub mod contacts;
pub mod customers;
pub mod dashboard;
pub mod forms;
pub mod inflight;
pub mod list;
pub mod login;
pub mod measurements;
pub mod notify;
pub mod rights;
pub mod session;
pub mod tailoring;
pub mod users;
