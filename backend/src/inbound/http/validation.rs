//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{CourseId, Error};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_course_id(value: String, field: FieldName) -> Result<CourseId, Error> {
    CourseId::new(&value).map_err(|_| invalid_uuid_error(field, &value))
}
