//! List queries and create/update/delete flows shared by the CRUD screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! A list query refetches whenever its cache key's version moves. A mutation
//! runs under the in-flight guard, then invalidates its key and reports the
//! outcome as a toast. Nothing retries; a failure is shown once.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::app::{ApiContext, notify_failure, notify_info, spawn_guarded};
use crate::net::api::Resource;
use crate::state::cache::{QueryCache, QueryKey};
use crate::state::inflight::{InFlight, Operation};
use crate::state::notify::Notifications;
use crate::state::session::SessionState;
use crate::util::dom;

/// How one entity is written and what the user is told about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub resource: Resource,
    pub key: QueryKey,
    pub save_op: Operation,
    pub delete_op: Operation,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
}

pub const CONTACTS: Mutation = Mutation {
    resource: Resource::Contacts,
    key: QueryKey::Contacts,
    save_op: Operation::SaveContact,
    delete_op: Operation::DeleteContact,
    created: "Contact saved to database",
    updated: "Contact updated",
    deleted: "Contact removed",
    save_failed: "Could not save contact",
    delete_failed: "Delete failed",
};

/// Customers are contacts written from the side panel.
pub const CUSTOMERS: Mutation = Mutation {
    created: "Customer added",
    updated: "Customer updated",
    deleted: "Customer removed",
    save_failed: "Could not save customer",
    ..CONTACTS
};

pub const MEASUREMENTS: Mutation = Mutation {
    resource: Resource::Measurements,
    key: QueryKey::Measurements,
    save_op: Operation::SaveMeasurement,
    delete_op: Operation::DeleteMeasurement,
    created: "Measurement saved successfully.",
    updated: "Measurement saved successfully.",
    deleted: "Measurement removed.",
    save_failed: "Could not save measurement",
    delete_failed: "Delete failed",
};

pub const TAILORING_ITEMS: Mutation = Mutation {
    resource: Resource::TailoringItems,
    key: QueryKey::TailoringItems,
    save_op: Operation::SaveTailoringItem,
    delete_op: Operation::DeleteTailoringItem,
    created: "Item definition saved.",
    updated: "Item definition updated.",
    deleted: "Item removed.",
    save_failed: "Could not save item",
    delete_failed: "Delete failed",
};

pub const USERS: Mutation = Mutation {
    resource: Resource::Users,
    key: QueryKey::Users,
    save_op: Operation::SaveUser,
    delete_op: Operation::DeleteUser,
    created: "User record saved successfully.",
    updated: "User record saved successfully.",
    deleted: "User removed successfully.",
    save_failed: "Could not save user",
    delete_failed: "Delete failed",
};

impl Mutation {
    /// Toast title and text after a save; `id` 0 means a create.
    pub fn saved_toast(&self, id: i64) -> (&'static str, &'static str) {
        if id == 0 { ("Success", self.created) } else { ("Updated", self.updated) }
    }

    pub fn invalidate(&self, cache: &mut QueryCache) {
        if self.key == QueryKey::Contacts {
            cache.invalidate_contacts();
        } else {
            cache.invalidate(self.key);
        }
    }
}

/// Rows of one list screen plus its load status.
pub struct ListQuery<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListQuery<T> {}

/// The shared signals every screen works with.
#[derive(Clone, Copy)]
pub struct Services {
    pub api: ApiContext,
    pub session: RwSignal<SessionState>,
    pub cache: RwSignal<QueryCache>,
    pub inflight: RwSignal<InFlight>,
    pub notify: RwSignal<Notifications>,
}

impl Services {
    pub fn expect() -> Self {
        Self {
            api: expect_context::<ApiContext>(),
            session: expect_context::<RwSignal<SessionState>>(),
            cache: expect_context::<RwSignal<QueryCache>>(),
            inflight: expect_context::<RwSignal<InFlight>>(),
            notify: expect_context::<RwSignal<Notifications>>(),
        }
    }

    /// Fetch `resource` now and again whenever `key` is invalidated.
    pub fn list<T>(self, resource: Resource, key: QueryKey) -> ListQuery<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let query = ListQuery { rows: RwSignal::new(Vec::new()), loading: RwSignal::new(true), error: RwSignal::new(None) };
        let cache = self.cache;
        let version = Memo::new(move |_| cache.with(|c| c.version(key)));
        let api = self.api;
        Effect::new(move || {
            let issued = version.get();
            let client = api.client();
            query.loading.set(true);
            leptos::task::spawn_local(async move {
                let result = client.list::<T>(resource).await;
                if !cache.with_untracked(|c| c.is_current(key, issued)) {
                    log::debug!("{key:?}: dropped stale response");
                    return;
                }
                match result {
                    Ok(rows) => {
                        log::debug!("{key:?}: {} rows", rows.len());
                        query.rows.set(rows);
                        query.error.set(None);
                    }
                    Err(e) => {
                        log::warn!("{key:?} fetch failed: {e}");
                        query.error.set(Some(e.user_message("Failed to load records.")));
                    }
                }
                query.loading.set(false);
            });
        });
        query
    }

    /// Create (`id` 0) or update, then invalidate and run `on_saved`.
    pub fn save<T>(self, mutation: Mutation, id: i64, payload: T, on_saved: Callback<()>)
    where
        T: Serialize + 'static,
    {
        let client = self.api.client();
        let Self { cache, notify, .. } = self;
        spawn_guarded(self.inflight, mutation.save_op, async move {
            match client.save(mutation.resource, id, &payload).await {
                Ok(()) => {
                    cache.update(|c| mutation.invalidate(c));
                    let (title, description) = mutation.saved_toast(id);
                    notify_info(notify, title, description);
                    on_saved.run(());
                }
                Err(e) => notify_failure(notify, "Error", &e, mutation.save_failed),
            }
        });
    }

    /// Delete after the user confirms `prompt`.
    pub fn delete(self, mutation: Mutation, id: i64, prompt: &str) {
        if !dom::confirm(prompt) {
            return;
        }
        let client = self.api.client();
        let Self { cache, notify, .. } = self;
        spawn_guarded(self.inflight, mutation.delete_op, async move {
            match client.delete(mutation.resource, id).await {
                Ok(()) => {
                    cache.update(|c| mutation.invalidate(c));
                    notify_info(notify, "Deleted", mutation.deleted);
                }
                Err(e) => notify_failure(notify, "Error", &e, mutation.delete_failed),
            }
        });
    }
}
