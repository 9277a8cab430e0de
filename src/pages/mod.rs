//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetching and dialog state and delegates
//! rendering details to `components`. Protected pages render inside
//! `AppShell`, which applies the session guard.

pub mod contacts;
pub mod customers;
pub mod dashboard;
pub mod landing;
pub mod measurements;
pub mod not_found;
pub mod tailoring_items;
pub mod users;
