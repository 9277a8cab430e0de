//! Query cache keys and invalidation.
//!
//! Each list screen fetches inside an effect that tracks the version of its
//! key. A successful mutation bumps the version, which reruns every effect
//! reading that key (contacts and customers share one).

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Contacts,
    Users,
    Measurements,
    TailoringItems,
    Companies,
    DashboardStats,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryCache {
    versions: HashMap<QueryKey, u64>,
}

impl QueryCache {
    pub fn version(&self, key: QueryKey) -> u64 {
        self.versions.get(&key).copied().unwrap_or(0)
    }

    /// Whether a fetch issued at version `issued` still reflects `key`.
    /// Responses that fail this check are dropped.
    pub fn is_current(&self, key: QueryKey, issued: u64) -> bool {
        self.version(key) == issued
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        *self.versions.entry(key).or_insert(0) += 1;
        log::debug!("invalidated {key:?}");
    }

    /// A contact write also changes the dashboard's customer count.
    pub fn invalidate_contacts(&mut self) {
        self.invalidate(QueryKey::Contacts);
        self.invalidate(QueryKey::DashboardStats);
    }
}
