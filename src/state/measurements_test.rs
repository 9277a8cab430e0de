use super::*;

#[test]
fn new_form_defaults_active_order_zero() {
    let form = MeasurementForm::default();
    assert!(form.is_active);
    assert_eq!(form.display_order, "0");
    assert!(!form.is_edit());
}

#[test]
fn blank_name_blocks_submit() {
    let errors = MeasurementForm::default().validate().unwrap_err();
    assert_eq!(errors.get("measurementName"), Some("Measurement name is required"));
}

#[test]
fn negative_or_non_numeric_order_is_rejected() {
    for raw in ["-1", "two", "1.5"] {
        let form = MeasurementForm { measurement_name: "Chest".to_owned(), display_order: raw.to_owned(), ..MeasurementForm::default() };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("displayOrder").is_some(), "{raw}");
    }
}

#[test]
fn valid_form_builds_create_record() {
    let form = MeasurementForm {
        measurement_name: " Chest ".to_owned(),
        display_order: "3".to_owned(),
        image_url: "  ".to_owned(),
        ..MeasurementForm::default()
    };
    let m = form.validate().unwrap();
    assert_eq!(m.measurement_id, 0);
    assert_eq!(m.measurement_name, "Chest");
    assert_eq!(m.display_order, 3);
    assert_eq!(m.image_url, None);
}

#[test]
fn edit_keeps_identifier_and_image() {
    let existing = Measurement {
        measurement_id: 8,
        measurement_name: "Waist".to_owned(),
        display_order: 2,
        is_active: false,
        image_url: Some("https://img.example/waist.png".to_owned()),
    };
    let form = MeasurementForm::from_measurement(&existing);
    assert!(form.is_edit());
    assert_eq!(form.preview(), Some("https://img.example/waist.png"));
    assert_eq!(form.validate().unwrap(), existing);
}
