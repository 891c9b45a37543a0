use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::web::{payload::is_truthy, responses::ApiError};

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "equipmentDescription and failureDescription are required.";

/// How a form field is rendered on the analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Textarea,
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(
    key: &'static str,
    label: &'static str,
    placeholder: Option<&'static str>,
    kind: FieldKind,
    required: bool,
) -> FormField {
    FormField {
        key,
        label,
        placeholder,
        kind,
        required,
    }
}

/// Fields in page order.
pub const FORM_FIELDS: [FormField; 10] = [
    field(
        "equipmentDescription",
        "Equipment Description (Required Field)",
        Some("e.g., Centrifugal pump, Hydraulic cylinder"),
        FieldKind::Input,
        true,
    ),
    field(
        "failureDescription",
        "Failure Description (Required Field)",
        Some("e.g., Motor seized during operation, unable to rotate"),
        FieldKind::Textarea,
        true,
    ),
    field("make", "Make (Optional)", None, FieldKind::Input, false),
    field("model", "Model (Optional)", None, FieldKind::Input, false),
    field(
        "serialNumber",
        "Serial Number (Optional)",
        None,
        FieldKind::Input,
        false,
    ),
    field(
        "age",
        "Age in Years (Optional)",
        Some("e.g., 5"),
        FieldKind::Input,
        false,
    ),
    field(
        "workHistory",
        "Work History (Optional)",
        Some("e.g., Bearing replaced Jan 2024, impeller repair Mar 2023"),
        FieldKind::Textarea,
        false,
    ),
    field(
        "activePMs",
        "Active PMs (Optional)",
        Some("e.g., Monthly lubrication, quarterly inspection"),
        FieldKind::Textarea,
        false,
    ),
    field(
        "preFailure",
        "Pre-Failure Conditions (Optional)",
        Some("e.g., Unusual vibration, high temperature reading"),
        FieldKind::Textarea,
        false,
    ),
    field(
        "additionalNotes",
        "Additional Notes (Optional)",
        None,
        FieldKind::Textarea,
        false,
    ),
];

/// Equipment-failure details submitted from the form. Transient, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub equipment_description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub failure_description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub make: String,
    #[serde(deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(deserialize_with = "lenient_text")]
    pub serial_number: String,
    #[serde(deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(deserialize_with = "lenient_text")]
    pub work_history: String,
    #[serde(rename = "activePMs", deserialize_with = "lenient_text")]
    pub active_pms: String,
    #[serde(deserialize_with = "lenient_text")]
    pub pre_failure: String,
    #[serde(deserialize_with = "lenient_text")]
    pub additional_notes: String,
}

impl AnalysisRequest {
    /// Checks presence of the two required fields, then reads the rest
    /// leniently.
    pub fn from_payload(payload: Value) -> Result<Self, ApiError> {
        let required_present = FORM_FIELDS
            .iter()
            .filter(|field| field.required)
            .all(|field| is_truthy(payload.get(field.key)));
        if !required_present {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        serde_json::from_value(payload).map_err(|err| ApiError::validation(err.to_string()))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
