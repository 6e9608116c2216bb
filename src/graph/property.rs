//! Property values attached to vertices and edges

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Key/value properties, kept sorted by key
pub type Properties = BTreeMap<String, PropertyValue>;

/// Any JSON-shaped property value
///
/// Values are totally ordered (floats through `f64::total_cmp`) so that
/// edges carrying properties can be sorted into a canonical order.
/// Variant order matters for untagged decoding: integers that fit `i64`
/// decode as `Int`, larger ones as `UInt`, and only the rest as `Float`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Map(Properties),
}

impl PropertyValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::UInt(_) => 3,
            Self::Float(_) => 4,
            Self::Text(_) => 5,
            Self::List(_) => 6,
            Self::Map(_) => 7,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl Ord for PropertyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::UInt(a), Self::UInt(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            (Self::Map(a), Self::Map(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PropertyValue {}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(signed) => Self::Int(signed),
            Err(_) => Self::UInt(v),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(v: Vec<PropertyValue>) -> Self {
        Self::List(v)
    }
}

impl From<Properties> for PropertyValue {
    fn from(v: Properties) -> Self {
        Self::Map(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_shapes() {
        let props: Properties =
            serde_json::from_str(r#"{"a":true,"b":5,"c":2.5,"d":"x"}"#).unwrap();
        assert_eq!(props["a"], PropertyValue::Bool(true));
        assert_eq!(props["b"], PropertyValue::Int(5));
        assert_eq!(props["c"], PropertyValue::Float(2.5));
        assert_eq!(props["d"], PropertyValue::Text("x".into()));
    }

    #[test]
    fn test_ordering_across_variants() {
        let mut values = vec![
            PropertyValue::from("z"),
            PropertyValue::from(1.5),
            PropertyValue::from(3),
            PropertyValue::from(false),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                PropertyValue::Bool(false),
                PropertyValue::Int(3),
                PropertyValue::Float(1.5),
                PropertyValue::Text("z".into()),
            ]
        );
    }

    #[test]
    fn test_structured_json_shapes() {
        let props: Properties = serde_json::from_str(
            r#"{"n":null,"tags":["a",2],"meta":{"k":"v"},"h":18446744073709551615}"#,
        )
        .unwrap();
        assert!(props["n"].is_null());
        assert_eq!(
            props["tags"],
            PropertyValue::List(vec![PropertyValue::from("a"), PropertyValue::Int(2)])
        );
        assert_eq!(
            props["meta"],
            PropertyValue::Map(Properties::from([("k".to_string(), PropertyValue::from("v"))]))
        );
        assert_eq!(props["h"], PropertyValue::UInt(u64::MAX));
    }

    #[test]
    fn test_u64_prefers_signed_when_it_fits() {
        assert_eq!(PropertyValue::from(7u64), PropertyValue::Int(7));
        assert_eq!(PropertyValue::from(u64::MAX), PropertyValue::UInt(u64::MAX));
    }

    #[test]
    fn test_structured_values_sort_after_scalars() {
        let mut values = vec![
            PropertyValue::Map(Properties::new()),
            PropertyValue::List(vec![PropertyValue::Int(2)]),
            PropertyValue::List(vec![PropertyValue::Int(1)]),
            PropertyValue::UInt(u64::MAX),
            PropertyValue::Null,
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                PropertyValue::Null,
                PropertyValue::UInt(u64::MAX),
                PropertyValue::List(vec![PropertyValue::Int(1)]),
                PropertyValue::List(vec![PropertyValue::Int(2)]),
                PropertyValue::Map(Properties::new()),
            ]
        );
        assert_eq!(
            PropertyValue::List(vec![PropertyValue::Null, PropertyValue::from("x")]).to_string(),
            "[null, x]"
        );
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        let nan = PropertyValue::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
    }
}
