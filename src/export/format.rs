//! Property-value formatting.
//!
//! Flattens one typed property value into a single CSV cell string. Text
//! runs concatenate with no separator; all multi-valued kinds join their
//! elements with `", "`. Absent values render as the empty string.

use chrono::SecondsFormat;

use crate::api::models::{DateValue, FormulaResult, PropertyValue, RichText, RollupResult};
use crate::error_handling::ExportError;

/// Separator between elements of multi-valued kinds.
const LIST_SEPARATOR: &str = ", ";

/// Returns the single-line cell representation of a property value.
///
/// Formatting is pure and deterministic: the same value always yields the
/// same string. Kinds without a cell representation (buttons, formula and
/// rollup results outside the supported set, unrecognized kinds) fail with
/// the matching [`ExportError`].
pub fn format_property(value: &PropertyValue) -> Result<String, ExportError> {
    match value {
        PropertyValue::Title { title } => Ok(join_plain_text(title)),
        PropertyValue::RichText { rich_text } => Ok(join_plain_text(rich_text)),
        PropertyValue::Text { text } => Ok(join_plain_text(text)),
        PropertyValue::Number { number } => Ok(number.map(format_number).unwrap_or_default()),
        PropertyValue::Select { select } => Ok(select
            .as_ref()
            .map(|option| option.name.clone())
            .unwrap_or_default()),
        PropertyValue::MultiSelect { multi_select } => Ok(multi_select
            .iter()
            .map(|option| option.name.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)),
        PropertyValue::Date { date } => Ok(format_date(date.as_ref())),
        PropertyValue::Formula { formula } => format_formula(formula),
        PropertyValue::Relation { relation } => Ok(relation
            .iter()
            .map(|related| related.id.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)),
        PropertyValue::Rollup { rollup } => format_rollup(rollup),
        PropertyValue::People { people } => Ok(people
            .iter()
            .map(|user| user.name.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)),
        PropertyValue::Files { files } => Ok(files
            .iter()
            .map(|file| file.name.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)),
        PropertyValue::Checkbox { checkbox } => Ok(format_bool(*checkbox).to_string()),
        PropertyValue::Url { url } => Ok(url.clone().unwrap_or_default()),
        PropertyValue::Email { email } => Ok(email.clone().unwrap_or_default()),
        PropertyValue::PhoneNumber { phone_number } => {
            Ok(phone_number.clone().unwrap_or_default())
        }
        PropertyValue::CreatedTime { created_time } => {
            Ok(created_time.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        PropertyValue::CreatedBy { created_by } => {
            Ok(created_by.name.clone().unwrap_or_default())
        }
        PropertyValue::LastEditedTime { last_edited_time } => {
            Ok(last_edited_time.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        PropertyValue::LastEditedBy { last_edited_by } => {
            Ok(last_edited_by.name.clone().unwrap_or_default())
        }
        PropertyValue::Status { status } => Ok(status
            .as_ref()
            .map(|option| option.name.clone())
            .unwrap_or_default()),
        PropertyValue::UniqueId { unique_id } => Ok(unique_id.to_string()),
        PropertyValue::Verification { verification } => Ok(verification.state.clone()),
        PropertyValue::Button => Err(ExportError::ButtonProperty),
        PropertyValue::Unsupported => Err(ExportError::UnsupportedProperty),
    }
}

fn join_plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

/// Fixed-point with six fractional digits, matching the service's own
/// decimal rendering.
fn format_number(number: f64) -> String {
    format!("{number:.6}")
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn format_date(date: Option<&DateValue>) -> String {
    date.and_then(|value| value.start.clone()).unwrap_or_default()
}

fn format_formula(formula: &FormulaResult) -> Result<String, ExportError> {
    match formula {
        FormulaResult::String { string } => Ok(string.clone().unwrap_or_default()),
        FormulaResult::Number { number } => Ok(number.map(format_number).unwrap_or_default()),
        FormulaResult::Boolean { boolean } => Ok(boolean
            .map(|value| format_bool(value).to_string())
            .unwrap_or_default()),
        FormulaResult::Date { date } => Ok(format_date(date.as_ref())),
        FormulaResult::Unsupported => Err(ExportError::UnsupportedFormulaResult),
    }
}

fn format_rollup(rollup: &RollupResult) -> Result<String, ExportError> {
    match rollup {
        RollupResult::Number { number } => Ok(number.map(format_number).unwrap_or_default()),
        RollupResult::Date { date } => Ok(format_date(date.as_ref())),
        RollupResult::Unsupported => Err(ExportError::UnsupportedRollupResult),
    }
}
