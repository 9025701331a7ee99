//! Notion API wire models.
//!
//! Serde models for the subset of the Notion REST API this crate consumes:
//! the database schema endpoint and the database query endpoint. Property
//! values come over the wire as `{"type": "<kind>", "<kind>": <payload>}`
//! objects, which maps directly onto internally tagged enums. Kinds added to
//! the API after this crate's pinned version fall into a catch-all variant
//! and are rejected at formatting time.
//!
//! Property maps use `IndexMap` so the column order the service supplies is
//! preserved; the CSV header is derived from it once and reused for every row.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::SortDirection;

/// A database object, as returned by `GET /v1/databases/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    /// Database identifier.
    pub id: String,
    /// Database title runs.
    #[serde(default)]
    pub title: Vec<RichText>,
    /// Column name to column descriptor, in service order.
    pub properties: IndexMap<String, PropertyConfig>,
}

/// Schema descriptor for one column.
///
/// Only the type tag matters for export: it decides whether the column shows
/// up in the CSV header. The per-type configuration payloads are not modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyConfig {
    /// Property identifier.
    pub id: String,
    /// The column's type tag, e.g. `"title"`, `"number"`, `"button"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl PropertyConfig {
    /// Whether values of this column can appear in the export.
    ///
    /// Buttons are interactive-only and carry no data, so they are excluded
    /// from the header entirely. Every other kind is included; kinds the
    /// formatter cannot render fail later, per row.
    pub fn is_exportable(&self) -> bool {
        self.kind != "button"
    }
}

/// One row of a database, as returned by the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page identifier.
    pub id: String,
    /// Column name to property value, in service order.
    pub properties: IndexMap<String, PropertyValue>,
}

/// A text run with its rendered plain text.
///
/// Annotations, links, and mention payloads are irrelevant for CSV cells and
/// are not modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    /// The run's text content with all annotations flattened away.
    #[serde(default)]
    pub plain_text: String,
}

/// A select, multi-select, or status option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    /// Display name of the option.
    pub name: String,
}

/// A date or date-range value.
///
/// `start` and `end` are kept as the wire strings (ISO 8601 dates or
/// datetimes); the exporter emits them verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct DateValue {
    /// Start of the range; `None` for an empty date.
    pub start: Option<String>,
    /// End of the range, if any.
    #[serde(default)]
    pub end: Option<String>,
}

/// Reference to a related page.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationRef {
    /// Identifier of the referenced page.
    pub id: String,
}

/// A user (person or bot) reference.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Display name; absent on partial user objects.
    #[serde(default)]
    pub name: Option<String>,
}

/// An attached file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRef {
    /// File name as shown in Notion.
    pub name: String,
}

/// A `unique_id` property payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UniqueId {
    /// Optional human-readable prefix, e.g. `"TASK"`.
    pub prefix: Option<String>,
    /// The sequential number.
    pub number: i64,
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}-{}", prefix, self.number),
            None => write!(f, "{}", self.number),
        }
    }
}

/// A `verification` property payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Verification {
    /// Verification state, e.g. `"verified"` or `"unverified"`.
    pub state: String,
}

/// Result of a formula property, tagged by the formula's own result kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    /// String-valued formula.
    String {
        /// The computed string; `None` when the formula evaluated to nothing.
        string: Option<String>,
    },
    /// Number-valued formula.
    Number {
        /// The computed number.
        number: Option<f64>,
    },
    /// Boolean-valued formula.
    Boolean {
        /// The computed boolean.
        boolean: Option<bool>,
    },
    /// Date-valued formula.
    Date {
        /// The computed date.
        date: Option<DateValue>,
    },
    /// Result kinds this crate does not render.
    #[serde(other)]
    Unsupported,
}

/// Result of a rollup property, tagged by the rollup's own result kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupResult {
    /// Numeric aggregate.
    Number {
        /// The aggregated number.
        number: Option<f64>,
    },
    /// Date aggregate.
    Date {
        /// The aggregated date.
        date: Option<DateValue>,
    },
    /// Array and other aggregates this crate does not render.
    #[serde(other)]
    Unsupported,
}

/// One typed property value of a row.
///
/// Internally tagged on the `"type"` field; each variant's payload field is
/// named after the tag, matching the API's convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// The page title.
    Title {
        /// Title text runs.
        title: Vec<RichText>,
    },
    /// Free-form rich text.
    RichText {
        /// Text runs.
        rich_text: Vec<RichText>,
    },
    /// Legacy plain-text payload from pre-2021 API versions.
    Text {
        /// Text runs.
        text: Vec<RichText>,
    },
    /// A number.
    Number {
        /// The value; `None` when the cell is empty.
        number: Option<f64>,
    },
    /// Single-choice select.
    Select {
        /// The chosen option; `None` when the cell is empty.
        select: Option<SelectOption>,
    },
    /// Multi-choice select.
    MultiSelect {
        /// The chosen options.
        multi_select: Vec<SelectOption>,
    },
    /// A date or date range.
    Date {
        /// The value; `None` when the cell is empty.
        date: Option<DateValue>,
    },
    /// A computed formula result.
    Formula {
        /// The formula's own typed result.
        formula: FormulaResult,
    },
    /// References to related pages.
    Relation {
        /// The referenced pages.
        relation: Vec<RelationRef>,
    },
    /// An aggregate computed over a relation.
    Rollup {
        /// The rollup's own typed result.
        rollup: RollupResult,
    },
    /// People references.
    People {
        /// The referenced users.
        people: Vec<User>,
    },
    /// Attached files.
    Files {
        /// The attachments.
        files: Vec<FileRef>,
    },
    /// A checkbox.
    Checkbox {
        /// Whether the box is checked.
        checkbox: bool,
    },
    /// A URL.
    Url {
        /// The value; `None` when the cell is empty.
        url: Option<String>,
    },
    /// An email address.
    Email {
        /// The value; `None` when the cell is empty.
        email: Option<String>,
    },
    /// A phone number.
    PhoneNumber {
        /// The value; `None` when the cell is empty.
        phone_number: Option<String>,
    },
    /// Creation timestamp.
    CreatedTime {
        /// When the row was created.
        created_time: DateTime<Utc>,
    },
    /// The user who created the row.
    CreatedBy {
        /// The creating user.
        created_by: User,
    },
    /// Last-edit timestamp.
    LastEditedTime {
        /// When the row was last edited.
        last_edited_time: DateTime<Utc>,
    },
    /// The user who last edited the row.
    LastEditedBy {
        /// The editing user.
        last_edited_by: User,
    },
    /// Status option.
    Status {
        /// The current status; `None` when unset.
        status: Option<SelectOption>,
    },
    /// Auto-incrementing identifier.
    UniqueId {
        /// The identifier payload.
        unique_id: UniqueId,
    },
    /// Verification state of a wiki page.
    Verification {
        /// The verification payload.
        verification: Verification,
    },
    /// Interactive button; never exportable.
    Button,
    /// Property kinds this crate does not know.
    #[serde(other)]
    Unsupported,
}

/// One sort directive of a query request.
///
/// Exactly one of the two shapes the API accepts: sort by a named property,
/// or by one of the built-in timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Sort {
    /// Sort by a property of the database.
    Property {
        /// Property (column) name.
        property: String,
        /// Sort direction.
        direction: SortDirection,
    },
    /// Sort by a built-in timestamp.
    Timestamp {
        /// `"created_time"` or `"last_edited_time"`.
        timestamp: String,
        /// Sort direction.
        direction: SortDirection,
    },
}

/// Request body for `POST /v1/databases/{id}/query`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryRequest {
    /// Continuation cursor from the previous page; absent on the first call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    /// Sort directives; this crate always sends exactly one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    /// Rows per page (1-100); the service default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Response body of the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Rows of this page.
    pub results: Vec<Page>,
    /// Cursor for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
    /// Whether another page exists.
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_value_number() {
        let value: PropertyValue =
            serde_json::from_value(json!({"id": "abc", "type": "number", "number": 42.5}))
                .unwrap();
        assert!(matches!(value, PropertyValue::Number { number: Some(n) } if n == 42.5));
    }

    #[test]
    fn test_property_value_number_null() {
        let value: PropertyValue =
            serde_json::from_value(json!({"id": "abc", "type": "number", "number": null}))
                .unwrap();
        assert!(matches!(value, PropertyValue::Number { number: None }));
    }

    #[test]
    fn test_property_value_title_runs() {
        let value: PropertyValue = serde_json::from_value(json!({
            "id": "title",
            "type": "title",
            "title": [
                {"type": "text", "plain_text": "Hello ", "annotations": {}},
                {"type": "text", "plain_text": "world"}
            ]
        }))
        .unwrap();
        match value {
            PropertyValue::Title { title } => {
                assert_eq!(title.len(), 2);
                assert_eq!(title[0].plain_text, "Hello ");
                assert_eq!(title[1].plain_text, "world");
            }
            other => panic!("expected title, got {:?}", other),
        }
    }

    #[test]
    fn test_property_value_formula_boolean() {
        let value: PropertyValue = serde_json::from_value(json!({
            "id": "f",
            "type": "formula",
            "formula": {"type": "boolean", "boolean": true}
        }))
        .unwrap();
        assert!(matches!(
            value,
            PropertyValue::Formula {
                formula: FormulaResult::Boolean { boolean: Some(true) }
            }
        ));
    }

    #[test]
    fn test_rollup_array_falls_into_catch_all() {
        let value: PropertyValue = serde_json::from_value(json!({
            "id": "r",
            "type": "rollup",
            "rollup": {"type": "array", "array": [], "function": "show_original"}
        }))
        .unwrap();
        assert!(matches!(
            value,
            PropertyValue::Rollup {
                rollup: RollupResult::Unsupported
            }
        ));
    }

    #[test]
    fn test_button_deserializes_as_unit_variant() {
        let value: PropertyValue =
            serde_json::from_value(json!({"id": "b", "type": "button", "button": {}})).unwrap();
        assert!(matches!(value, PropertyValue::Button));
    }

    #[test]
    fn test_unknown_kind_falls_into_catch_all() {
        let value: PropertyValue =
            serde_json::from_value(json!({"id": "x", "type": "place", "place": {"lat": 1.0}}))
                .unwrap();
        assert!(matches!(value, PropertyValue::Unsupported));
    }

    #[test]
    fn test_unique_id_display() {
        let with_prefix = UniqueId {
            prefix: Some("TASK".to_string()),
            number: 42,
        };
        assert_eq!(with_prefix.to_string(), "TASK-42");

        let bare = UniqueId {
            prefix: None,
            number: 7,
        };
        assert_eq!(bare.to_string(), "7");
    }

    #[test]
    fn test_database_preserves_property_order() {
        // Keys deliberately not in alphabetical order; IndexMap must keep
        // the wire order.
        let raw = r#"{
            "id": "db-1",
            "title": [],
            "properties": {
                "Zeta": {"id": "a", "type": "number"},
                "Alpha": {"id": "b", "type": "rich_text"},
                "Mid": {"id": "c", "type": "checkbox"}
            }
        }"#;
        let database: Database = serde_json::from_str(raw).unwrap();
        let names: Vec<&String> = database.properties.keys().collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_query_request_wire_shape() {
        let request = QueryRequest {
            start_cursor: Some("cur".to_string()),
            sorts: vec![Sort::Property {
                property: "Name".to_string(),
                direction: SortDirection::Ascending,
            }],
            page_size: Some(50),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "start_cursor": "cur",
                "sorts": [{"property": "Name", "direction": "ascending"}],
                "page_size": 50
            })
        );
    }

    #[test]
    fn test_query_request_omits_absent_fields() {
        let request = QueryRequest {
            start_cursor: None,
            sorts: vec![Sort::Timestamp {
                timestamp: "created_time".to_string(),
                direction: SortDirection::Descending,
            }],
            page_size: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "sorts": [{"timestamp": "created_time", "direction": "descending"}]
            })
        );
    }

    #[test]
    fn test_query_response_round() {
        let response: QueryResponse = serde_json::from_value(json!({
            "object": "list",
            "results": [{
                "object": "page",
                "id": "page-1",
                "properties": {
                    "Done": {"id": "d", "type": "checkbox", "checkbox": false}
                }
            }],
            "next_cursor": "cursor-1",
            "has_more": true
        }))
        .unwrap();
        assert!(response.has_more);
        assert_eq!(response.next_cursor.as_deref(), Some("cursor-1"));
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, "page-1");
    }
}
