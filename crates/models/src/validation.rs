use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Names of the required request fields that were absent or blank
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl MissingFields {
    pub fn fields(&self) -> &[&'static str] {
        &self.0
    }
}

impl Display for MissingFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Missing required fields: {}", self.0.join(", "))
    }
}

impl std::error::Error for MissingFields {}

/// Collects required fields from an optional payload.
///
/// Every accessor returns a usable value even when the field is missing, so a
/// whole record can be assembled first and rejected once with every missing
/// field listed by [`Required::finish`].
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub fn new() -> Self {
        Self::default()
    }

    /// A string that must be present and contain something other than whitespace
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// A value that only has to be present; zero and `false` are accepted
    pub fn value<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        match value {
            Some(value) => value,
            None => {
                self.missing.push(field);
                T::default()
            }
        }
    }

    pub fn finish(self) -> Result<(), MissingFields> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(self.missing))
        }
    }
}

/// Optional strings that are blank are stored as null
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
