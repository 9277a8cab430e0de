//! Session owner: token, user profile and menu rights.
//!
//! DESIGN
//! ======
//! Storage is read once at startup into [`SessionState`], which is then
//! provided as a context signal. Screens read the session from context and
//! only login and logout write back through [`KeyValueStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LogoutRequest, UserInfo, UserRight};
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_INFO_KEY: &str = "userInfo";
pub const USER_RIGHTS_KEY: &str = "userRights";

/// Audit name used when the profile carries no user name.
pub const FALLBACK_USER_NAME: &str = "WebUser";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub rights: Vec<UserRight>,
}

impl SessionState {
    /// Read the three persisted keys. Malformed profile or rights JSON is
    /// dropped; the token alone decides whether the session is live.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        Self {
            token,
            user: load_json(store, USER_INFO_KEY),
            rights: load_json(store, USER_RIGHTS_KEY).unwrap_or_default(),
        }
    }

    /// Persist a successful login and return the new session. The rights key
    /// is written only when the server returned rights.
    pub fn establish(
        store: &mut impl KeyValueStore,
        token: String,
        user: Option<UserInfo>,
        rights: Option<Vec<UserRight>>,
    ) -> Self {
        store.set(TOKEN_KEY, &token);
        match &user {
            Some(info) => save_json(store, USER_INFO_KEY, info),
            None => store.remove(USER_INFO_KEY),
        }
        if let Some(rights) = &rights {
            save_json(store, USER_RIGHTS_KEY, rights);
        }
        log::info!("session established for {}", user.as_ref().and_then(|u| u.user_name.as_deref()).unwrap_or("?"));
        Self { token: Some(token), user, rights: rights.unwrap_or_default() }
    }

    /// Remove all three keys and return the signed-out session.
    pub fn clear(store: &mut impl KeyValueStore) -> Self {
        store.remove(TOKEN_KEY);
        store.remove(USER_INFO_KEY);
        store.remove(USER_RIGHTS_KEY);
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Name recorded in `createdBy`/`createdFrom` audit fields.
    pub fn user_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.user_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_USER_NAME.to_owned())
    }

    /// Greeting name: full name, else user name.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.full_name.clone().filter(|n| !n.trim().is_empty()).or_else(|| u.user_name.clone()))
            .unwrap_or_else(|| "User".to_owned())
    }

    pub fn company_name(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.company_name.clone()).filter(|c| !c.trim().is_empty())
    }

    /// Login id the logout call needs.
    pub fn login_id(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.user_login_id.clone()).filter(|id| !id.trim().is_empty())
    }

    /// Rights with `allowAccess` set.
    pub fn allowed_pages(&self) -> Vec<&UserRight> {
        self.rights.iter().filter(|r| r.allow_access).collect()
    }

    /// Logout payload, sent only when both a token and a login id exist.
    pub fn logout_request(&self) -> Option<LogoutRequest> {
        if !self.is_authenticated() {
            return None;
        }
        self.login_id().map(|user_login_id| LogoutRequest { user_login_id })
    }
}
