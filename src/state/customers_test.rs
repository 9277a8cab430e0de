use super::*;

fn measurement(id: i64, name: &str, order: i64, active: bool) -> Measurement {
    Measurement {
        measurement_id: id,
        measurement_name: name.to_owned(),
        display_order: order,
        is_active: active,
        image_url: None,
    }
}

fn master() -> Vec<Measurement> {
    vec![
        measurement(1, "Length", 3, true),
        measurement(2, "Waist", 1, true),
        measurement(3, "Collar", 2, false),
        measurement(4, "Shoulder", 2, true),
    ]
}

// =============================================================
// Panel form
// =============================================================

#[test]
fn new_customer_defaults_to_customer_type() {
    let form = CustomerForm::default();
    assert_eq!(form.contact_type, "Customer");
    assert!(!form.is_edit());
}

#[test]
fn blank_type_on_edit_falls_back_to_customer() {
    let contact = Contact { contact_id: 5, person_name: "Meera".to_owned(), ..Contact::default() };
    let form = CustomerForm::from_contact(&contact);
    assert_eq!(form.contact_type, "Customer");
    assert!(form.is_edit());
}

#[test]
fn panel_payload_carries_panel_audit_fields() {
    let form = CustomerForm { person_name: "Meera".to_owned(), contact_no: "98111".to_owned(), ..CustomerForm::default() };
    assert_eq!(form.validate(), Ok(()));
    let payload = form.to_payload("2025-12-17T10:00:00.000Z");
    assert_eq!(payload.contact_id, 0);
    assert_eq!(payload.created_by, "WebUser");
    assert_eq!(payload.created_from, "WebPanel");
    assert_eq!(payload.created_on, "2025-12-17T10:00:00.000Z");
    assert!(payload.is_active);
}

#[test]
fn panel_payload_serializes_created_on() {
    let form = CustomerForm { person_name: "Meera".to_owned(), contact_no: "98111".to_owned(), ..CustomerForm::default() };
    let json = serde_json::to_value(form.to_payload("2025-12-17T10:00:00.000Z")).unwrap();
    assert_eq!(json["createdOn"], "2025-12-17T10:00:00.000Z");
    assert_eq!(json["createdBy"], "WebUser");
}

#[test]
fn panel_requires_name_and_mobile() {
    let errors = CustomerForm::default().validate().unwrap_err();
    assert!(errors.get("personName").is_some());
    assert!(errors.get("contactNo").is_some());
}

#[test]
fn avatar_uses_uppercase_initial() {
    assert_eq!(avatar_initial(" meera"), "M");
    assert_eq!(avatar_initial(""), "?");
}

// =============================================================
// Measurement sheet
// =============================================================

#[test]
fn sheet_lists_active_measurements_in_display_order() {
    let sheet = MeasurementSheet::default();
    let names: Vec<String> = sheet.visible(&master(), &[]).into_iter().map(|m| m.measurement_name).collect();
    assert_eq!(names, vec!["Waist", "Shoulder", "Length"]);
}

#[test]
fn item_filter_narrows_to_linked_measurements() {
    let items = vec![TailoringItem { item_id: 7, measurement_ids: vec![1, 4], ..TailoringItem::default() }];
    let sheet = MeasurementSheet { item_filter: Some(7), ..MeasurementSheet::default() };
    let ids: Vec<i64> = sheet.visible(&master(), &items).into_iter().map(|m| m.measurement_id).collect();
    assert_eq!(ids, vec![4, 1]);
}

#[test]
fn entries_skip_blank_values() {
    let mut sheet = MeasurementSheet::default();
    sheet.set_value(1, " 42 ".to_owned());
    sheet.set_value(2, "  ".to_owned());
    sheet.set_note(1, "loose fit".to_owned());
    let entries = sheet.entries(&master());
    assert_eq!(
        entries,
        vec![MeasurementEntry {
            measurement_id: 1,
            name: "Length".to_owned(),
            value: "42".to_owned(),
            notes: "loose fit".to_owned(),
        }]
    );
}
