//! Bound parameter values.
//!
//! Anything passed to `value`, `set`, `option` or `where_clause` ends up in
//! the statement's parameter list as a [`CqlValue`], never in its text.

use std::fmt::{self, Write as _};

/// A value bound to one `?` marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CqlValue {
    /// `null`, also produced by `None`.
    Null,
    /// `boolean`.
    Bool(bool),
    /// Any integer column: `int`, `bigint`, `counter`, millisecond timestamps.
    Int(i64),
    /// `float` or `double`.
    Float(f64),
    /// `text`, `varchar` or `ascii`.
    Text(String),
    /// `blob`.
    Blob(Vec<u8>),
    /// `list` or `set` collection.
    List(Vec<Self>),
}

impl CqlValue {
    /// Collects items into a [`CqlValue::List`].
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToCqlValue,
    {
        Self::List(items.into_iter().map(ToCqlValue::to_cql_value).collect())
    }

    /// Renders the value as a CQL literal.
    ///
    /// Meant for logs; drivers should receive the value as a parameter.
    #[must_use]
    pub fn to_cql_inline(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => float_literal(*f),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(bytes) => {
                let mut hex = String::from("0x");
                for byte in bytes {
                    let _ = write!(hex, "{byte:02x}");
                }
                hex
            }
            Self::List(items) => {
                let inner: Vec<String> = items.iter().map(Self::to_cql_inline).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

// CQL spells non-finite floats as words, and a float must keep its fraction
// so it does not read back as an integer.
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        String::from("NaN")
    } else if f.is_infinite() {
        String::from(if f > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        format!("{f:?}")
    }
}

impl fmt::Display for CqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cql_inline())
    }
}

/// Conversion into a bound parameter.
///
/// Implemented for the Rust types that map onto a CQL column type; anything
/// else can be wrapped in a [`CqlValue`] directly.
pub trait ToCqlValue {
    /// Wraps `self` as a parameter value.
    fn to_cql_value(self) -> CqlValue;
}

impl ToCqlValue for CqlValue {
    fn to_cql_value(self) -> CqlValue {
        self
    }
}

impl ToCqlValue for bool {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Bool(self)
    }
}

impl ToCqlValue for i64 {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Int(self)
    }
}

macro_rules! int_to_cql_value {
    ($($ty:ty),*) => {
        $(
            impl ToCqlValue for $ty {
                fn to_cql_value(self) -> CqlValue {
                    CqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_cql_value!(i32, i16, i8, u32, u16, u8);

impl ToCqlValue for f64 {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Float(self)
    }
}

impl ToCqlValue for f32 {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Float(f64::from(self))
    }
}

impl ToCqlValue for String {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Text(self)
    }
}

impl ToCqlValue for &str {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Text(self.to_owned())
    }
}

impl ToCqlValue for &String {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Text(self.clone())
    }
}

impl<T: ToCqlValue> ToCqlValue for Option<T> {
    fn to_cql_value(self) -> CqlValue {
        self.map_or(CqlValue::Null, ToCqlValue::to_cql_value)
    }
}

impl ToCqlValue for Vec<u8> {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Blob(self)
    }
}

impl ToCqlValue for &[u8] {
    fn to_cql_value(self) -> CqlValue {
        CqlValue::Blob(self.to_vec())
    }
}

/// Builds a `Vec<CqlValue>` from expressions of mixed types.
///
/// ```rust
/// use cql_builder::{cql_values, CqlValue};
///
/// let values = cql_values![1, "x", None::<i32>];
/// assert_eq!(
///     values,
///     vec![CqlValue::Int(1), CqlValue::Text(String::from("x")), CqlValue::Null]
/// );
/// ```
#[macro_export]
macro_rules! cql_values {
    () => {
        ::std::vec::Vec::<$crate::CqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::ToCqlValue::to_cql_value($value)),+]
    };
}
