//! Raw invoice documents and their normalized, queryable form.
//!
//! The upstream digitizer delivers a JSON document with a `Fields` array of
//! `{Fields, Value}` pairs and a `Table` array of line-item objects. Nothing
//! about that shape is guaranteed: members may be absent, not arrays, or
//! contain entries that are not objects. Normalization degrades every such
//! case to an empty collection instead of failing; a missing signal is a
//! classification for the rules, never a parse error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An open line-item record (description, quantity, unit price, ...).
pub type LineItem = Map<String, Value>;

/// One `{name, value}` pair from the raw field table.
///
/// The name is optional on purpose: the digitizer does not guarantee it, and
/// entries without a usable name are skipped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// Tolerant view over a raw invoice document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInvoice {
    pub fields: Vec<RawField>,
    pub line_items: Vec<LineItem>,
}

/// Keys the digitizer has been observed to use for the field name.
const FIELD_NAME_KEYS: &[&str] = &["Fields", "Field", "Name", "name"];
/// Keys carrying the field value.
const FIELD_VALUE_KEYS: &[&str] = &["Value", "value"];

impl RawInvoice {
    /// Build a raw invoice from an arbitrary JSON value.
    ///
    /// Never fails: malformed members and entries degrade to empty.
    pub fn from_value(raw: &Value) -> Self {
        let fields = raw
            .get("Fields")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let pair = entry.as_object()?;
                        let name = FIELD_NAME_KEYS
                            .iter()
                            .find_map(|key| pair.get(*key))
                            .and_then(Value::as_str)
                            .map(str::to_string);
                        let value = FIELD_VALUE_KEYS
                            .iter()
                            .find_map(|key| pair.get(*key))
                            .cloned()
                            .unwrap_or(Value::Null);
                        Some(RawField { name, value })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let line_items = raw
            .get("Table")
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(|row| row.as_object().cloned()).collect())
            .unwrap_or_default();

        Self { fields, line_items }
    }
}

/// Lookup structure the rules run against.
///
/// Owned by one validation call and discarded with it; nothing here is
/// shared across calls.
#[derive(Debug, Clone, Default)]
pub struct NormalizedInvoice {
    field_map: HashMap<String, Value>,
    items: Vec<LineItem>,
}

/// Convert a raw invoice into its queryable form.
///
/// Duplicate field names are last-write-wins; entries without a usable name
/// are skipped silently. Line items pass through unmodified; deep validation
/// of item shape is deferred to the individual rules.
pub fn normalize(raw: &RawInvoice) -> NormalizedInvoice {
    let mut field_map = HashMap::new();
    for field in &raw.fields {
        match field.name.as_deref() {
            Some(name) if !name.is_empty() => {
                field_map.insert(name.to_string(), field.value.clone());
            }
            _ => {}
        }
    }

    NormalizedInvoice {
        field_map,
        items: raw.line_items.clone(),
    }
}

impl NormalizedInvoice {
    /// Resolve a document-level field to a usable signal value.
    pub fn field(&self, name: &str) -> Option<String> {
        self.field_map.get(name).and_then(signal_value)
    }

    /// Resolve an attribute of the first line item.
    pub fn first_item_attr(&self, attr: &str) -> Option<String> {
        self.items.first().and_then(|item| item.get(attr)).and_then(signal_value)
    }

    /// The line items, in document order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct field names seen.
    pub fn field_count(&self) -> usize {
        self.field_map.len()
    }
}

/// Render a JSON value as a signal, if it carries one.
///
/// Null and empty strings are absence; numbers and booleans render through
/// their display form; collections are never a usable checklist signal.
fn signal_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
