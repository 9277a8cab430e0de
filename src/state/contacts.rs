//! Contact form: field state, validation and the write payload.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use crate::net::types::{Contact, ContactPayload};
use crate::state::forms::FieldErrors;
use crate::util::dates;

pub const CONTACT_TYPES: &[&str] = &["Customer", "Supplier", "Vendor", "Staff"];

/// `(value, label)` pairs for the ledger select; `"0"` means none.
pub const LEDGER_OPTIONS: &[(&str, &str)] = &[("0", "None"), ("101", "General Account"), ("102", "Cash Account")];

/// Fields searched by the contacts filter box.
pub fn search_fields(contact: &Contact) -> Vec<&str> {
    vec![contact.person_name.as_str(), contact.company_name.as_str(), contact.contact_no.as_str()]
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub contact_id: i64,
    pub person_name: String,
    pub contact_no: String,
    pub company_name: String,
    pub designation: String,
    pub email_id: String,
    pub work_notes: String,
    pub ledger_id: String,
    /// `yyyy-MM-dd` as the date input expects.
    pub birthday: String,
    pub remark1: String,
    pub remark2: String,
    pub contact_type: String,
    pub broadcast: String,
}

impl ContactForm {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            contact_id: contact.contact_id,
            person_name: contact.person_name.clone(),
            contact_no: contact.contact_no.clone(),
            company_name: contact.company_name.clone(),
            designation: contact.designation.clone(),
            email_id: contact.email_id.clone(),
            work_notes: contact.work_notes.clone(),
            ledger_id: contact.ledger_id.clone(),
            birthday: dates::iso_to_input(&contact.birthday),
            remark1: contact.remark1.clone(),
            remark2: contact.remark2.clone(),
            contact_type: contact.contact_type.clone(),
            broadcast: contact.broadcast.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.contact_id != 0
    }

    /// # Errors
    ///
    /// Returns the missing required fields.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("personName", &self.person_name, "Person name is required");
        errors.require("contactNo", &self.contact_no, "Contact number is required");
        errors.into_result()
    }

    /// Build the request body. Audit fields record `user_name` and `now`.
    pub fn to_payload(&self, user_name: &str, now: &str) -> ContactPayload {
        ContactPayload {
            contact_id: self.contact_id,
            person_name: self.person_name.trim().to_owned(),
            contact_no: self.contact_no.trim().to_owned(),
            company_name: self.company_name.clone(),
            designation: self.designation.clone(),
            email_id: self.email_id.trim().to_owned(),
            work_notes: self.work_notes.clone(),
            ledger_id: ledger_to_api(&self.ledger_id),
            birthday: dates::input_to_api(&self.birthday),
            remark1: self.remark1.clone(),
            remark2: self.remark2.clone(),
            contact_type: self.contact_type.clone(),
            broadcast: self.broadcast.clone(),
            is_active: true,
            created_by: user_name.to_owned(),
            created_from: user_name.to_owned(),
            created_on: now.to_owned(),
        }
    }
}

/// `""` and `"0"` mean no ledger; anything else must be numeric.
pub fn ledger_to_api(raw: &str) -> Option<i64> {
    match raw.trim() {
        "" | "0" => None,
        value => value.parse().ok(),
    }
}
