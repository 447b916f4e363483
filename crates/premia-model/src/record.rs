//! Ordered column/value records.
//!
//! A [`Record`] is the unit of input the artifact layer consumes: an ordered
//! mapping of column names to numeric or categorical values. Order is
//! preserved so aligned records encode deterministically and echo back to
//! the user in a stable column order.

use std::fmt;

/// A single cell value in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric cell (age, BMI, counts, injected defaults).
    Number(f64),
    /// Categorical cell (sex, smoker status, region).
    Text(String),
}

impl Value {
    /// Return the numeric content, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Return the text content, if this is categorical.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" so counts and
            // ages read naturally in tables.
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// An ordered mapping of column names to values.
///
/// Backed by a vector rather than a hash map: records here hold a handful
/// of columns, and insertion order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Insert a column value, replacing an existing column in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether the record carries the named column.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut record = Record::new();
        record.insert("age", 30u32);
        record.insert("sex", "male");
        record.insert("bmi", 25.0);

        let names: Vec<&str> = record.column_names().collect();
        assert_eq!(names, vec!["age", "sex", "bmi"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = Record::new();
        record.insert("age", 30u32);
        record.insert("sex", "male");
        record.insert("age", 45u32);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("age"), Some(&Value::Number(45.0)));
        let names: Vec<&str> = record.column_names().collect();
        assert_eq!(names, vec!["age", "sex"]);
    }

    #[test]
    fn test_get_and_contains() {
        let mut record = Record::new();
        record.insert("smoker", "no");

        assert!(record.contains("smoker"));
        assert!(!record.contains("region"));
        assert_eq!(record.get("smoker").and_then(Value::as_text), Some("no"));
        assert_eq!(record.get("smoker").and_then(Value::as_number), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(30.0).to_string(), "30");
        assert_eq!(Value::Number(25.5).to_string(), "25.5");
        assert_eq!(Value::Text("southeast".to_string()).to_string(), "southeast");
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = vec![
            ("age".to_string(), Value::Number(18.0)),
            ("region".to_string(), Value::Text("northwest".to_string())),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("age"), Some(&Value::Number(18.0)));
    }
}
