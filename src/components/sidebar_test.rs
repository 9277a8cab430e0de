use super::*;

#[test]
fn groups_are_in_menu_order() {
    let titles: Vec<&str> = MENU.iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Main", "Masters", "Entry", "System"]);
}

#[test]
fn active_match_is_exact() {
    assert!(is_active("/users", "/users"));
    assert!(is_active("/users/", "/users"));
    assert!(!is_active("/users-archive", "/users"));
    assert!(!is_active("/", "/dashboard"));
}

#[test]
fn active_item_finds_the_current_screen() {
    assert_eq!(active_item("/tailoring-items").map(|i| i.label), Some("Tailoring Items"));
    assert_eq!(active_item("/nowhere"), None);
}

#[test]
fn every_protected_screen_has_a_link() {
    for href in ["/dashboard", "/users", "/measurements", "/tailoring-items", "/customers", "/contacts"] {
        assert!(active_item(href).is_some(), "missing {href}");
    }
}
