//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, dialogs, clock) from
//! page and component logic so the logic stays testable natively.

pub mod auth;
pub mod dates;
pub mod dom;
pub mod entropy;
pub mod storage;
