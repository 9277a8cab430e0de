//! Dashboard summary numbers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiError;
use crate::net::types::Contact;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_customers: usize,
}

impl DashboardStats {
    /// Count contacts; any fetch failure counts as zero.
    pub fn from_contacts(result: &Result<Vec<Contact>, ApiError>) -> Self {
        match result {
            Ok(rows) => Self { total_customers: rows.len() },
            Err(e) => {
                log::warn!("dashboard customer count unavailable: {e}");
                Self::default()
            }
        }
    }
}
