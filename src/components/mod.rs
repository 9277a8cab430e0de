//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell, dialogs and forms. They read
//! and write shared state through the signals `app::App` provides as context.

pub mod app_shell;
pub mod captcha_box;
pub mod contact_form;
pub mod customer_panel;
pub mod field;
pub mod landing;
pub mod login_form;
pub mod measurement_form;
pub mod measurement_sheet;
pub mod modal;
pub mod pager;
pub mod review_card;
pub mod search_input;
pub mod sidebar;
pub mod status_badge;
pub mod tailoring_item_form;
pub mod toast_host;
pub mod top_bar;
pub mod user_form;
pub mod user_rights_modal;
