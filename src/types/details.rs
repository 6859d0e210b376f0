//! Scalar pet fields sent on create and update.

use serde::{Deserialize, Serialize};

/// The `name`, `animal_type` and `age` fields of a pet.
///
/// No validation is applied. Empty names and negative ages are sent as-is,
/// since observing whether the server accepts them is part of what callers
/// test.
///
/// ```rust
/// use petfriends::PetDetails;
///
/// let details = PetDetails::new("Tuzik", "Shaggy", "33");
/// assert_eq!(details.age, "33");
///
/// // Numeric ages are rendered as strings
/// let details = PetDetails::new("Chunya", "Cat", 9);
/// assert_eq!(details.age, "9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetDetails {
    /// Pet name.
    pub name: String,

    /// Free-form animal type ("cat", "Shaggy", ...).
    pub animal_type: String,

    /// Age as an unvalidated string.
    pub age: String,
}

impl PetDetails {
    /// Creates a new set of pet details.
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl ToString,
    ) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.to_string(),
        }
    }

    /// Returns the form fields in wire order.
    pub(crate) fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", &self.name),
            ("animal_type", &self.animal_type),
            ("age", &self.age),
        ]
    }
}
