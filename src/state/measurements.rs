//! Measurement master form.

#[cfg(test)]
#[path = "measurements_test.rs"]
mod measurements_test;

use crate::net::types::Measurement;
use crate::state::forms::FieldErrors;

pub fn search_fields(measurement: &Measurement) -> Vec<&str> {
    vec![measurement.measurement_name.as_str()]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementForm {
    pub measurement_id: i64,
    pub measurement_name: String,
    /// Raw input text; parsed on submit.
    pub display_order: String,
    pub is_active: bool,
    pub image_url: String,
}

impl Default for MeasurementForm {
    fn default() -> Self {
        Self {
            measurement_id: 0,
            measurement_name: String::new(),
            display_order: "0".to_owned(),
            is_active: true,
            image_url: String::new(),
        }
    }
}

impl MeasurementForm {
    pub fn from_measurement(measurement: &Measurement) -> Self {
        Self {
            measurement_id: measurement.measurement_id,
            measurement_name: measurement.measurement_name.clone(),
            display_order: measurement.display_order.to_string(),
            is_active: measurement.is_active,
            image_url: measurement.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.measurement_id != 0
    }

    /// Image preview source, if any.
    pub fn preview(&self) -> Option<&str> {
        Some(self.image_url.trim()).filter(|url| !url.is_empty())
    }

    /// # Errors
    ///
    /// Returns the field errors that block submission.
    pub fn validate(&self) -> Result<Measurement, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("measurementName", &self.measurement_name, "Measurement name is required");
        let display_order = parse_display_order(&self.display_order, &mut errors);
        errors.into_result()?;
        Ok(Measurement {
            measurement_id: self.measurement_id,
            measurement_name: self.measurement_name.trim().to_owned(),
            display_order,
            is_active: self.is_active,
            image_url: self.preview().map(str::to_owned),
        })
    }
}

/// Blank is 0; otherwise a non-negative integer.
pub fn parse_display_order(raw: &str, errors: &mut FieldErrors) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => n,
        _ => {
            errors.add("displayOrder", "Display order must be a whole number of 0 or more");
            0
        }
    }
}
