//! # tailorshop
//!
//! Leptos + WASM front-end for the tailoring-shop ERP.
//!
//! The crate renders the public landing/login page and, behind the session
//! guard, the dashboard shell with CRUD screens for contacts, customers,
//! measurements, tailoring items and users. Every business rule lives in the
//! remote REST API; this crate owns presentation, form validation, cache
//! invalidation and navigation.
//!
//! CAPTCHA generation and drawing live in the sibling `captcha` crate.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
