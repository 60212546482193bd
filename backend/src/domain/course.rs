//! Course reference data consumed by the enrollment core.
//!
//! Courses are owned by the catalogue collaborator; the core only reads the
//! identifier, title, and price, which is all the free/paid branch needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation failures for course data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    /// The identifier is empty.
    EmptyId,
    /// The identifier is not a canonical UUID.
    InvalidId,
    /// The price is negative or not a finite number.
    InvalidPrice,
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "course id must not be empty"),
            Self::InvalidId => write!(f, "course id must be a valid UUID"),
            Self::InvalidPrice => write!(f, "course price must be a non-negative number"),
        }
    }
}

impl std::error::Error for CourseValidationError {}

/// Stable course identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(Uuid, String);

impl CourseId {
    /// Validate and construct a [`CourseId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CourseValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Construct a [`CourseId`] from an already-parsed UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id, id.to_string())
    }

    /// Generate a new random [`CourseId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_owned(id: String) -> Result<Self, CourseValidationError> {
        if id.is_empty() {
            return Err(CourseValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(&id).map_err(|_| CourseValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseId> for String {
    fn from(value: CourseId) -> Self {
        let CourseId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for CourseId {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Minimal course view read from the catalogue collaborator.
///
/// `price` is in major currency units; zero means the course is free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier.
    pub id: CourseId,
    /// Display title, carried into gateway order notes for reconciliation.
    pub title: String,
    /// Price in major units; zero selects the free enrollment path.
    pub price: f64,
}

impl Course {
    /// Construct a course view, validating the price.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        price: f64,
    ) -> Result<Self, CourseValidationError> {
        if !price.is_finite() || price < 0.0 {
            return Err(CourseValidationError::InvalidPrice);
        }
        Ok(Self {
            id,
            title: title.into(),
            price,
        })
    }

    /// Whether enrollment requires no payment.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_prices(#[case] price: f64) {
        let err = Course::new(CourseId::random(), "Rust Basics", price)
            .expect_err("price must fail validation");
        assert_eq!(err, CourseValidationError::InvalidPrice);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(499.0, false)]
    fn free_is_determined_by_price(#[case] price: f64, #[case] free: bool) {
        let course = Course::new(CourseId::random(), "Rust Basics", price).expect("valid course");
        assert_eq!(course.is_free(), free);
    }

    #[test]
    fn course_id_rejects_non_uuid() {
        assert_eq!(
            CourseId::new("abc").expect_err("must fail"),
            CourseValidationError::InvalidId
        );
    }
}
