//! Column name arguments.

/// Types accepted by [`CqlBuilder::field`](super::CqlBuilder::field).
///
/// A single name appends one column; a list appends its names in order.
pub trait IntoFields {
    /// Converts into the column names to append.
    fn into_fields(self) -> Vec<String>;
}

impl IntoFields for &str {
    fn into_fields(self) -> Vec<String> {
        vec![String::from(self)]
    }
}

impl IntoFields for String {
    fn into_fields(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFields for &String {
    fn into_fields(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoFields for &[&str] {
    fn into_fields(self) -> Vec<String> {
        self.iter().map(|s| String::from(*s)).collect()
    }
}

impl IntoFields for &[String] {
    fn into_fields(self) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> IntoFields for [&str; N] {
    fn into_fields(self) -> Vec<String> {
        self.iter().map(|s| String::from(*s)).collect()
    }
}

impl<const N: usize> IntoFields for &[&str; N] {
    fn into_fields(self) -> Vec<String> {
        self.iter().map(|s| String::from(*s)).collect()
    }
}

impl IntoFields for Vec<&str> {
    fn into_fields(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl IntoFields for Vec<String> {
    fn into_fields(self) -> Vec<String> {
        self
    }
}
