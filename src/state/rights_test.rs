use super::*;

fn page(name: &str) -> PageRight {
    PageRight { page_id: 1, page_name: name.to_owned(), ..PageRight::default() }
}

#[test]
fn enabling_a_capability_implies_access() {
    let mut rights = vec![page("Users")];
    toggle_flag(&mut rights, 0, RightFlag::Export);
    assert!(rights[0].allow_export);
    assert!(rights[0].allow_access);
}

#[test]
fn disabling_a_capability_keeps_access() {
    let mut rights = vec![page("Users")];
    toggle_flag(&mut rights, 0, RightFlag::Insert);
    toggle_flag(&mut rights, 0, RightFlag::Insert);
    assert!(!rights[0].allow_insert);
    assert!(rights[0].allow_access);
}

#[test]
fn access_toggles_alone() {
    let mut rights = vec![page("Users")];
    toggle_flag(&mut rights, 0, RightFlag::Access);
    assert_eq!(rights[0], PageRight { allow_access: true, ..page("Users") });
}

#[test]
fn set_row_switches_every_flag() {
    let mut rights = vec![page("Users"), page("Contacts")];
    set_row(&mut rights, 1, true);
    assert!(RightFlag::ALL.iter().all(|f| f.get(&rights[1])));
    assert!(RightFlag::ALL.iter().all(|f| !f.get(&rights[0])));
    set_row(&mut rights, 1, false);
    assert_eq!(rights[1], page("Contacts"));
}

#[test]
fn row_all_reads_access_insert_delete() {
    let mut right = PageRight { allow_access: true, allow_insert: true, ..page("Users") };
    assert!(!row_all_checked(&right));
    right.allow_delete = true;
    assert!(row_all_checked(&right));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut rights = vec![page("Users")];
    toggle_flag(&mut rights, 5, RightFlag::Access);
    set_row(&mut rights, 5, true);
    assert_eq!(rights, vec![page("Users")]);
}
