//! Tailoring item form and the measurement links it carries.

#[cfg(test)]
#[path = "tailoring_test.rs"]
mod tailoring_test;

use crate::net::types::TailoringItem;
use crate::state::forms::FieldErrors;
use crate::state::measurements::parse_display_order;

pub fn search_fields(item: &TailoringItem) -> Vec<&str> {
    vec![item.item_name.as_str()]
}

/// `N measurements linked`.
pub fn linked_label(item: &TailoringItem) -> String {
    match item.measurement_ids.len() {
        1 => "1 measurement linked".to_owned(),
        n => format!("{n} measurements linked"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TailoringItemForm {
    pub item_id: i64,
    pub item_name: String,
    pub item_code: String,
    pub display_order: String,
    pub is_active: bool,
    pub measurement_ids: Vec<i64>,
}

impl Default for TailoringItemForm {
    fn default() -> Self {
        Self {
            item_id: 0,
            item_name: String::new(),
            item_code: String::new(),
            display_order: "0".to_owned(),
            is_active: true,
            measurement_ids: Vec::new(),
        }
    }
}

impl TailoringItemForm {
    pub fn from_item(item: &TailoringItem) -> Self {
        Self {
            item_id: item.item_id,
            item_name: item.item_name.clone(),
            item_code: item.item_code.clone().unwrap_or_default(),
            display_order: item.display_order.to_string(),
            is_active: item.is_active,
            measurement_ids: item.measurement_ids.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.item_id != 0
    }

    /// Short codes are stored uppercase.
    pub fn set_code(&mut self, raw: &str) {
        self.item_code = raw.to_uppercase();
    }

    pub fn is_linked(&self, measurement_id: i64) -> bool {
        self.measurement_ids.contains(&measurement_id)
    }

    /// Add the measurement if absent, remove it if present.
    pub fn toggle_measurement(&mut self, measurement_id: i64) {
        if let Some(pos) = self.measurement_ids.iter().position(|id| *id == measurement_id) {
            self.measurement_ids.remove(pos);
        } else {
            self.measurement_ids.push(measurement_id);
        }
    }

    /// # Errors
    ///
    /// Returns the field errors that block submission.
    pub fn validate(&self) -> Result<TailoringItem, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("itemName", &self.item_name, "Item name is required");
        let display_order = parse_display_order(&self.display_order, &mut errors);
        errors.into_result()?;
        let code = self.item_code.trim();
        Ok(TailoringItem {
            item_id: self.item_id,
            item_name: self.item_name.trim().to_owned(),
            item_code: (!code.is_empty()).then(|| code.to_uppercase()),
            display_order,
            is_active: self.is_active,
            measurement_ids: self.measurement_ids.clone(),
        })
    }
}
