use super::*;

#[test]
fn code_is_forced_uppercase() {
    let mut form = TailoringItemForm::default();
    form.set_code("shirt-1");
    assert_eq!(form.item_code, "SHIRT-1");
}

#[test]
fn toggle_adds_then_removes_membership() {
    let mut form = TailoringItemForm::default();
    form.toggle_measurement(3);
    form.toggle_measurement(5);
    assert!(form.is_linked(3));
    form.toggle_measurement(3);
    assert!(!form.is_linked(3));
    assert_eq!(form.measurement_ids, vec![5]);
}

#[test]
fn blank_name_blocks_submit() {
    let errors = TailoringItemForm::default().validate().unwrap_err();
    assert!(errors.get("itemName").is_some());
}

#[test]
fn valid_form_builds_item_with_links() {
    let mut form = TailoringItemForm { item_name: "Shirt".to_owned(), display_order: "2".to_owned(), ..TailoringItemForm::default() };
    form.toggle_measurement(1);
    form.toggle_measurement(4);
    let item = form.validate().unwrap();
    assert_eq!(item.item_id, 0);
    assert_eq!(item.item_code, None);
    assert_eq!(item.display_order, 2);
    assert_eq!(item.measurement_ids, vec![1, 4]);
}

#[test]
fn edit_round_trips_existing_item() {
    let item = TailoringItem {
        item_id: 11,
        item_name: "Kurta".to_owned(),
        item_code: Some("KRT".to_owned()),
        display_order: 1,
        is_active: true,
        measurement_ids: vec![2],
    };
    let form = TailoringItemForm::from_item(&item);
    assert!(form.is_edit());
    assert_eq!(form.validate().unwrap(), item);
}

#[test]
fn linked_label_counts_measurements() {
    let mut item = TailoringItem::default();
    assert_eq!(linked_label(&item), "0 measurements linked");
    item.measurement_ids = vec![1];
    assert_eq!(linked_label(&item), "1 measurement linked");
    item.measurement_ids = vec![1, 2, 3];
    assert_eq!(linked_label(&item), "3 measurements linked");
}
