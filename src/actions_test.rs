use super::*;

#[test]
fn create_and_update_toasts_differ() {
    assert_eq!(CONTACTS.saved_toast(0), ("Success", "Contact saved to database"));
    assert_eq!(CONTACTS.saved_toast(7), ("Updated", "Contact updated"));
}

#[test]
fn customers_write_through_the_contacts_resource() {
    assert_eq!(CUSTOMERS.resource, Resource::Contacts);
    assert_eq!(CUSTOMERS.key, QueryKey::Contacts);
    assert_eq!(CUSTOMERS.save_op, Operation::SaveContact);
    assert_eq!(CUSTOMERS.saved_toast(0).1, "Customer added");
}

#[test]
fn contact_mutation_refreshes_the_dashboard_count() {
    let mut cache = QueryCache::default();
    CUSTOMERS.invalidate(&mut cache);
    assert_eq!(cache.version(QueryKey::Contacts), 1);
    assert_eq!(cache.version(QueryKey::DashboardStats), 1);
}

#[test]
fn other_mutations_touch_only_their_key() {
    let mut cache = QueryCache::default();
    TAILORING_ITEMS.invalidate(&mut cache);
    assert_eq!(cache.version(QueryKey::TailoringItems), 1);
    assert_eq!(cache.version(QueryKey::Measurements), 0);
    assert_eq!(cache.version(QueryKey::DashboardStats), 0);
}

#[test]
fn each_entity_has_its_own_guards() {
    let ops = [CONTACTS, MEASUREMENTS, TAILORING_ITEMS, USERS].map(|m| m.save_op);
    for (i, a) in ops.iter().enumerate() {
        for b in &ops[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
