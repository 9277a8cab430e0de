use super::*;
use serde_json::json;

// =============================================================
// Lenient reads
// =============================================================

#[test]
fn contact_tolerates_nulls_and_numeric_ledger() {
    let contact: Contact = serde_json::from_value(json!({
        "contactId": 7,
        "contactNo": "9876543210",
        "personName": "Asha Rao",
        "companyName": null,
        "ledgerId": 101,
        "birthday": "2025-12-17T00:00:00",
        "isActive": true
    }))
    .unwrap();
    assert_eq!(contact.contact_id, 7);
    assert_eq!(contact.company_name, "");
    assert_eq!(contact.ledger_id, "101");
    assert_eq!(contact.birthday, "2025-12-17T00:00:00");
    assert!(contact.is_active);
    assert_eq!(contact.remark1, "");
}

#[test]
fn ids_accept_numeric_strings() {
    let item: TailoringItem = serde_json::from_value(json!({
        "itemId": "12",
        "itemName": "Shirt",
        "displayOrder": 2.0,
        "isActive": 1,
        "measurementIds": [1, "2", 3]
    }))
    .unwrap();
    assert_eq!(item.item_id, 12);
    assert_eq!(item.display_order, 2);
    assert!(item.is_active);
    assert_eq!(item.measurement_ids, vec![1, 2, 3]);
    assert_eq!(item.item_code, None);
}

#[test]
fn null_measurement_ids_become_empty() {
    let item: TailoringItem = serde_json::from_value(json!({"itemId": 1, "measurementIds": null})).unwrap();
    assert!(item.measurement_ids.is_empty());
}

#[test]
fn non_numeric_id_is_rejected() {
    let result = serde_json::from_value::<Measurement>(json!({"measurementId": "abc"}));
    assert!(result.is_err());
}

#[test]
fn fractional_id_is_rejected() {
    let result = serde_json::from_value::<Measurement>(json!({"measurementId": 1.5}));
    assert!(result.is_err());
}

// =============================================================
// Field renames
// =============================================================

#[test]
fn user_uses_api_spelling_for_otp_and_company_fields() {
    let user: User = serde_json::from_value(json!({
        "userId": 3,
        "userName": "demo",
        "userPassword": "leaked",
        "cId": 2,
        "whatsappOTP": true,
        "emailOTP": false,
        "active": true,
        "createdDate": "2025-01-04T10:00:00"
    }))
    .unwrap();
    assert_eq!(user.c_id, 2);
    assert!(user.whatsapp_otp);
    assert!(!user.email_otp);
    assert_eq!(user.user_password, None, "password is never read back");

    let out = serde_json::to_value(&user).unwrap();
    assert_eq!(out["cId"], 2);
    assert_eq!(out["whatsappOTP"], true);
    assert!(out.get("userPassword").is_none());
}

#[test]
fn user_password_is_sent_when_present() {
    let user = User {
        user_name: "demo".to_owned(),
        user_password: Some("secret".to_owned()),
        ..User::default()
    };
    let out = serde_json::to_value(&user).unwrap();
    assert_eq!(out["userPassword"], "secret");
    assert_eq!(out["userId"], 0);
}

#[test]
fn login_data_reads_requires_otp() {
    let data: LoginData =
        serde_json::from_value(json!({"requiresOTP": true, "userId": 9, "userLoginId": 55})).unwrap();
    assert!(data.requires_otp);
    assert_eq!(data.user_id, 9);
    assert_eq!(data.user_login_id, "55");
}

#[test]
fn user_info_keeps_unknown_fields() {
    let raw = json!({"userName": "demo", "companyName": "Stitch Co", "roleId": 4});
    let info: UserInfo = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(info.user_name.as_deref(), Some("demo"));
    assert_eq!(info.extra.get("roleId"), Some(&json!(4)));
    assert_eq!(serde_json::to_value(&info).unwrap(), raw);
}

// =============================================================
// Write payloads
// =============================================================

#[test]
fn login_request_serializes_camel_case() {
    let body = LoginRequest {
        user_name: "demo".to_owned(),
        password: "x".to_owned(),
        captcha_id: Some("c-1".to_owned()),
        captcha_code: "aB3xY9".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"userName": "demo", "password": "x", "captchaId": "c-1", "captchaCode": "aB3xY9"})
    );
}

#[test]
fn verify_otp_request_sends_numeric_otp() {
    let body = VerifyOtpRequest { user_id: 9, otp: 123_456, user_login_id: "55".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"userId": 9, "otp": 123_456, "userLoginId": "55"})
    );
}

#[test]
fn user_query_omits_empty_filters() {
    let query = UserQuery { page_index: 1, page_count: 10, search: None, active: Some("true".to_owned()) };
    assert_eq!(serde_json::to_value(&query).unwrap(), json!({"pageIndex": 1, "pageCount": 10, "active": "true"}));
}

#[test]
fn envelope_defaults_missing_fields() {
    let envelope: Envelope = serde_json::from_value(json!({"data": [1, 2]})).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message, None);
    assert_eq!(envelope.data, json!([1, 2]));
}
