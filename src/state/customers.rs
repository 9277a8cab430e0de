//! Customers screen: side-panel form and the per-customer measurement sheet.
//!
//! Customers are contacts; the screen shares the contacts cache key. The
//! measurement sheet has no backing endpoint yet, so saving it only produces
//! the entry list and a notification.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use std::collections::BTreeMap;

use crate::net::types::{Contact, CustomerPayload, Measurement, TailoringItem};
use crate::state::forms::FieldErrors;
use crate::state::list::sort_by_display_order;

pub const CUSTOMER_TYPES: &[&str] = &["Customer", "Supplier", "Vendor"];
pub const DEFAULT_CUSTOMER_TYPE: &str = "Customer";
const PANEL_AUDIT_USER: &str = "WebUser";
const PANEL_AUDIT_SOURCE: &str = "WebPanel";

/// Fields searched by the customers filter box.
pub fn search_fields(contact: &Contact) -> Vec<&str> {
    vec![contact.person_name.as_str(), contact.contact_no.as_str()]
}

/// Uppercase first letter of the name for the avatar bubble.
pub fn avatar_initial(name: &str) -> String {
    name.trim().chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerForm {
    pub contact_id: i64,
    pub person_name: String,
    pub contact_no: String,
    pub email_id: String,
    pub company_name: String,
    pub designation: String,
    pub contact_type: String,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            contact_id: 0,
            person_name: String::new(),
            contact_no: String::new(),
            email_id: String::new(),
            company_name: String::new(),
            designation: String::new(),
            contact_type: DEFAULT_CUSTOMER_TYPE.to_owned(),
        }
    }
}

impl CustomerForm {
    pub fn from_contact(contact: &Contact) -> Self {
        let contact_type = if contact.contact_type.trim().is_empty() {
            DEFAULT_CUSTOMER_TYPE.to_owned()
        } else {
            contact.contact_type.clone()
        };
        Self {
            contact_id: contact.contact_id,
            person_name: contact.person_name.clone(),
            contact_no: contact.contact_no.clone(),
            email_id: contact.email_id.clone(),
            company_name: contact.company_name.clone(),
            designation: contact.designation.clone(),
            contact_type,
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
        errors.require("personName", &self.person_name, "Full name is required");
        errors.require("contactNo", &self.contact_no, "Mobile number is required");
        errors.into_result()
    }

    /// `now` is the ISO-8601 audit timestamp.
    pub fn to_payload(&self, now: &str) -> CustomerPayload {
        CustomerPayload {
            contact_id: self.contact_id,
            person_name: self.person_name.trim().to_owned(),
            contact_no: self.contact_no.trim().to_owned(),
            email_id: self.email_id.trim().to_owned(),
            company_name: self.company_name.clone(),
            designation: self.designation.clone(),
            contact_type: self.contact_type.clone(),
            is_active: true,
            created_by: PANEL_AUDIT_USER.to_owned(),
            created_from: PANEL_AUDIT_SOURCE.to_owned(),
            created_on: now.to_owned(),
        }
    }
}

/// One filled-in row of the measurement sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementEntry {
    pub measurement_id: i64,
    pub name: String,
    pub value: String,
    pub notes: String,
}

/// Values typed for one customer, keyed by measurement id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementSheet {
    /// Restrict the sheet to one tailoring item's measurements.
    pub item_filter: Option<i64>,
    pub values: BTreeMap<i64, String>,
    pub notes: BTreeMap<i64, String>,
}

impl MeasurementSheet {
    pub fn set_value(&mut self, measurement_id: i64, value: String) {
        self.values.insert(measurement_id, value);
    }

    pub fn set_note(&mut self, measurement_id: i64, note: String) {
        self.notes.insert(measurement_id, note);
    }

    pub fn value(&self, measurement_id: i64) -> &str {
        self.values.get(&measurement_id).map_or("", String::as_str)
    }

    pub fn note(&self, measurement_id: i64) -> &str {
        self.notes.get(&measurement_id).map_or("", String::as_str)
    }

    /// Active measurements in display order, narrowed to the selected item.
    pub fn visible(&self, measurements: &[Measurement], items: &[TailoringItem]) -> Vec<Measurement> {
        let allowed = self
            .item_filter
            .and_then(|id| items.iter().find(|item| item.item_id == id))
            .map(|item| item.measurement_ids.clone());
        let mut rows: Vec<Measurement> = measurements
            .iter()
            .filter(|m| m.is_active)
            .filter(|m| allowed.as_ref().is_none_or(|ids| ids.contains(&m.measurement_id)))
            .cloned()
            .collect();
        sort_by_display_order(&mut rows, |m| m.display_order);
        rows
    }

    /// Rows with a value, in master order.
    pub fn entries(&self, measurements: &[Measurement]) -> Vec<MeasurementEntry> {
        measurements
            .iter()
            .filter(|m| !self.value(m.measurement_id).trim().is_empty())
            .map(|m| MeasurementEntry {
                measurement_id: m.measurement_id,
                name: m.measurement_name.clone(),
                value: self.value(m.measurement_id).trim().to_owned(),
                notes: self.note(m.measurement_id).trim().to_owned(),
            })
            .collect()
    }
}
