//! Dynamically typed operands.
//!
//! [`Value`] models input whose type is only known at runtime, such as data
//! decoded from JSON or handed over by a scripting host. The typed API never
//! sees a `Value`; the entry points in [`crate::dynamic`] check the variant
//! and unwrap it first.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A unary function that can be stored in a [`Value`].
pub type Callable = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A dynamically typed operand.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Floating-point number, including NaN and infinities
    Number(f64),
    /// Text
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// String-keyed map of values
    Object(BTreeMap<String, Value>),
    /// Unary numeric function
    Function(Callable),
}

impl Value {
    /// Wraps a closure as a `Value::Function`.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Name of the runtime type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns the number if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the function if this value is callable.
    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Whether this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Whether this value is callable.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Self::Function(_) => write!(f, "Function(<fn>)"),
        }
    }
}

// Functions compare by identity; numbers follow f64 equality (NaN != NaN).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let cases = vec![
            (Value::Undefined, "undefined"),
            (Value::Null, "null"),
            (Value::from(true), "boolean"),
            (Value::from(1.5), "number"),
            (Value::from("1"), "string"),
            (Value::List(Vec::new()), "array"),
            (Value::Object(BTreeMap::new()), "object"),
            (Value::function(|x| x), "function"),
        ];
        for (value, name) in cases {
            assert_eq!(value.type_name(), name);
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_number(), Some(3.0));
        assert_eq!(Value::from("3").as_number(), None);
        assert!(Value::from(f64::NAN).is_number());
        assert!(Value::function(f64::sin).is_callable());
        assert!(!Value::from(123).is_callable());

        let f = Value::function(|x| x + 1.0);
        let callable = f.as_function().unwrap();
        assert_eq!(callable(1.0), 2.0);
    }

    #[test]
    fn test_equality() {
        let f = Value::function(|x| x);
        assert_eq!(f, f.clone());
        assert_ne!(f, Value::function(|x| x));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::default(), Value::Undefined);
    }

    #[test]
    fn test_debug_hides_function() {
        assert_eq!(format!("{:?}", Value::function(|x| x)), "Function(<fn>)");
        assert_eq!(format!("{:?}", Value::from(2.0)), "Number(2.0)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = serde_json::json!({ "a": 1, "b": [true, null, "x"] });
        let value = Value::from(json);

        let mut expected = BTreeMap::new();
        expected.insert("a".to_owned(), Value::Number(1.0));
        expected.insert(
            "b".to_owned(),
            Value::List(vec![Value::Bool(true), Value::Null, Value::from("x")]),
        );
        pretty_assertions::assert_eq!(value, Value::Object(expected));
    }
}
