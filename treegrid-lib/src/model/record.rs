//! Dynamic record with nested child records

use std::collections::HashMap;

use super::Value;

/// The JSON field that holds nested child records.
pub const CHILDREN_FIELD: &str = "children";

static NULL_VALUE: Value = Value::Null;

/// A dynamic record: a field map plus an ordered sequence of child records
/// of the same shape.
///
/// Records form a forest. Each record owns its children exclusively, so the
/// structure is acyclic by construction; a record can never be its own
/// descendant.
///
/// # Example
///
/// ```
/// use treegrid_lib::model::Record;
///
/// let drinks = Record::new()
///     .set("name", "Drinks")
///     .set("price", 0i64)
///     .child(Record::new().set("name", "Rum").set("price", 25i64));
///
/// assert!(drinks.has_children());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The field values.
    fields: HashMap<String, Value>,

    /// Ordered child records.
    children: Vec<Record>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Appends a child record (builder pattern).
    pub fn child(mut self, child: Record) -> Self {
        self.children.push(child);
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Appends a child record.
    pub fn push_child(&mut self, child: Record) {
        self.children.push(child);
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value behind an accessor key, treating missing fields as
    /// null.
    ///
    /// Filter predicates and sort comparators go through this so that a
    /// record lacking a column's field behaves like an empty cell instead of
    /// an error.
    pub fn accessor(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL_VALUE)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the ordered child records.
    pub fn children(&self) -> &[Record] {
        &self.children
    }

    /// Returns `true` if the record has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Builds a record from a JSON object.
    ///
    /// Scalar fields map onto [`Value`] variants; ISO-8601 strings become
    /// datetimes. Children are read from the `children` key when it holds an
    /// array; any other shape there degrades to "no children" rather than
    /// failing the record. Non-object input yields an empty record.
    pub fn from_json(json: &serde_json::Value) -> Record {
        let mut record = Record::new();

        let serde_json::Value::Object(obj) = json else {
            return record;
        };

        for (key, raw) in obj {
            if key == CHILDREN_FIELD {
                if let serde_json::Value::Array(items) = raw {
                    record.children = items.iter().map(Record::from_json).collect();
                }
                continue;
            }
            record.fields.insert(key.clone(), json_to_value(raw));
        }

        record
    }
}

fn json_to_value(raw: &serde_json::Value) -> Value {
    match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(raw.clone())
            }
        }
        serde_json::Value::String(s) => match s.parse::<chrono::DateTime<chrono::Utc>>() {
            Ok(dt) => Value::DateTime(dt),
            Err(_) => Value::String(s.clone()),
        },
        other => Value::Json(other.clone()),
    }
}
