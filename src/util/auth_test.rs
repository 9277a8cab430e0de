use super::*;

#[test]
fn missing_token_redirects_to_landing() {
    assert_eq!(guard(&SessionState::default()), GuardDecision::Redirect("/"));
}

#[test]
fn empty_token_redirects_to_landing() {
    let session = SessionState { token: Some(String::new()), ..SessionState::default() };
    assert_eq!(guard(&session), GuardDecision::Redirect(PUBLIC_ROUTE));
}

#[test]
fn token_renders_protected_tree() {
    let session = SessionState { token: Some("t-1".to_owned()), ..SessionState::default() };
    assert_eq!(guard(&session), GuardDecision::Render);
}

#[test]
fn guard_ignores_missing_profile() {
    let session = SessionState { token: Some("t-1".to_owned()), user: None, rights: Vec::new() };
    assert_eq!(guard(&session), GuardDecision::Render);
}
