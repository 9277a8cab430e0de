use super::*;

#[test]
fn unknown_key_starts_at_zero() {
    assert_eq!(QueryCache::default().version(QueryKey::Users), 0);
}

#[test]
fn invalidate_bumps_only_that_key() {
    let mut cache = QueryCache::default();
    cache.invalidate(QueryKey::Measurements);
    cache.invalidate(QueryKey::Measurements);
    assert_eq!(cache.version(QueryKey::Measurements), 2);
    assert_eq!(cache.version(QueryKey::TailoringItems), 0);
}

#[test]
fn contact_writes_refresh_dashboard() {
    let mut cache = QueryCache::default();
    cache.invalidate_contacts();
    assert_eq!(cache.version(QueryKey::Contacts), 1);
    assert_eq!(cache.version(QueryKey::DashboardStats), 1);
}

#[test]
fn fetch_goes_stale_after_invalidation() {
    let mut cache = QueryCache::default();
    let issued = cache.version(QueryKey::Users);
    assert!(cache.is_current(QueryKey::Users, issued));
    cache.invalidate(QueryKey::Users);
    assert!(!cache.is_current(QueryKey::Users, issued));
    assert!(cache.is_current(QueryKey::Users, cache.version(QueryKey::Users)));
}
