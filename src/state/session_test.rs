use super::*;
use crate::util::storage::MemoryStorage;

fn demo_user() -> UserInfo {
    UserInfo {
        user_name: Some("demo".to_owned()),
        full_name: Some("Demo Tailor".to_owned()),
        company_name: Some("Stitch Co".to_owned()),
        user_login_id: Some("55".to_owned()),
        ..UserInfo::default()
    }
}

fn rights() -> Vec<UserRight> {
    vec![
        UserRight { page_name: "Users".to_owned(), menu_name: Some("Masters".to_owned()), allow_access: true },
        UserRight { page_name: "Reports".to_owned(), menu_name: None, allow_access: false },
    ]
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn empty_store_loads_signed_out() {
    let session = SessionState::load(&MemoryStorage::new());
    assert_eq!(session, SessionState::default());
    assert!(!session.is_authenticated());
}

#[test]
fn establish_writes_three_keys_and_load_reads_them_back() {
    let mut store = MemoryStorage::new();
    let session = SessionState::establish(&mut store, "t-1".to_owned(), Some(demo_user()), Some(rights()));
    assert!(session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t-1"));
    assert!(store.contains(USER_INFO_KEY));
    assert!(store.contains(USER_RIGHTS_KEY));

    assert_eq!(SessionState::load(&store), session);
}

#[test]
fn establish_without_rights_leaves_rights_key_unset() {
    let mut store = MemoryStorage::new();
    let session = SessionState::establish(&mut store, "t-1".to_owned(), Some(demo_user()), None);
    assert!(session.rights.is_empty());
    assert!(!store.contains(USER_RIGHTS_KEY));
}

#[test]
fn clear_removes_all_three_keys() {
    let mut store = MemoryStorage::new();
    SessionState::establish(&mut store, "t-1".to_owned(), Some(demo_user()), Some(rights()));
    store.set("unrelated", "kept");

    let session = SessionState::clear(&mut store);
    assert!(!session.is_authenticated());
    assert!(!store.contains(TOKEN_KEY));
    assert!(!store.contains(USER_INFO_KEY));
    assert!(!store.contains(USER_RIGHTS_KEY));
    assert!(store.contains("unrelated"));
}

#[test]
fn corrupt_profile_does_not_drop_token() {
    let mut store = MemoryStorage::new();
    store.set(TOKEN_KEY, "t-1");
    store.set(USER_INFO_KEY, "{oops");
    let session = SessionState::load(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.user, None);
}

#[test]
fn blank_token_is_not_a_session() {
    let mut store = MemoryStorage::new();
    store.set(TOKEN_KEY, "  ");
    assert!(!SessionState::load(&store).is_authenticated());
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn user_name_falls_back_to_web_user() {
    assert_eq!(SessionState::default().user_name(), "WebUser");
    let session = SessionState { user: Some(demo_user()), ..SessionState::default() };
    assert_eq!(session.user_name(), "demo");
}

#[test]
fn display_name_prefers_full_name() {
    let session = SessionState { user: Some(demo_user()), ..SessionState::default() };
    assert_eq!(session.display_name(), "Demo Tailor");
    assert_eq!(session.company_name().as_deref(), Some("Stitch Co"));
    assert_eq!(session.login_id().as_deref(), Some("55"));
}

#[test]
fn allowed_pages_filters_on_access() {
    let session = SessionState { rights: rights(), ..SessionState::default() };
    let pages: Vec<&str> = session.allowed_pages().iter().map(|r| r.page_name.as_str()).collect();
    assert_eq!(pages, vec!["Users"]);
}

#[test]
fn logout_request_needs_token_and_login_id() {
    let signed_in = SessionState { token: Some("tok".into()), user: Some(demo_user()), ..SessionState::default() };
    assert_eq!(signed_in.logout_request().map(|r| r.user_login_id).as_deref(), Some("55"));

    let no_token = SessionState { user: Some(demo_user()), ..SessionState::default() };
    assert!(no_token.logout_request().is_none());

    let no_profile = SessionState { token: Some("tok".into()), ..SessionState::default() };
    assert!(no_profile.logout_request().is_none());
}
