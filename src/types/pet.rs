//! Pet records as returned by the server.

use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// A pet record.
///
/// Fields the server adds beyond the documented ones (`created_at` and the
/// like) are kept in [`extra`](Pet::extra) so nothing is lost when a record is
/// inspected.
///
/// ```rust
/// use petfriends::Pet;
///
/// let pet: Pet = serde_json::from_value(serde_json::json!({
///     "id": "a1b2",
///     "name": "Tuzik",
///     "animal_type": "Shaggy",
///     "age": 33,
///     "pet_photo": "",
///     "user_id": "u42",
///     "created_at": "1700000000.0"
/// })).unwrap();
///
/// assert_eq!(pet.age, "33");
/// assert!(!pet.has_photo());
/// assert!(pet.extra.contains_key("created_at"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Server-assigned identifier.
    pub id: String,

    /// Pet name.
    #[serde(default)]
    pub name: String,

    /// Animal type.
    #[serde(default)]
    pub animal_type: String,

    /// Age. The server may render it as a number; it is normalised to a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,

    /// Photo as a `data:<mime>;base64,<payload>` URI, or empty.
    #[serde(default)]
    pub pet_photo: String,

    /// Owner identifier, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Any other fields present in the record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pet {
    /// Returns `true` if the record carries a photo.
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }

    /// Returns the MIME type declared in the photo data URI.
    pub fn photo_mime_type(&self) -> Option<&str> {
        let header = self.pet_photo.strip_prefix("data:")?.split_once(',')?.0;
        header.split(';').next().filter(|mime| !mime.is_empty())
    }

    /// Decodes the photo data URI into raw bytes.
    ///
    /// Returns `Ok(None)` when the pet has no photo and an
    /// [`InvalidResponse`](crate::ErrorKind::InvalidResponse) error when the
    /// field is not a base64 data URI.
    pub fn photo_bytes(&self) -> Result<Option<Vec<u8>>, Error> {
        if !self.has_photo() {
            return Ok(None);
        }

        let (header, payload) = self
            .pet_photo
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or_else(|| Error::invalid_response("pet_photo is not a data URI"))?;

        if !header.ends_with(";base64") {
            return Err(Error::invalid_response("pet_photo is not base64 encoded"));
        }

        base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map(Some)
            .map_err(|e| {
                Error::invalid_response(format!("pet_photo payload is not valid base64: {}", e))
                    .with_source(e)
            })
    }
}

/// The body of `GET api/pets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    /// Pets in server order.
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Returns `true` if a pet with the given id is in the list.
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == id)
    }

    /// Finds a pet by id.
    pub fn find(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for age, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::*;
    use crate::ErrorKind;

    fn pet_with_photo(photo: &str) -> Pet {
        serde_json::from_value(json!({
            "id": "p1",
            "name": "Murka",
            "animal_type": "cat",
            "age": "3",
            "pet_photo": photo
        }))
        .unwrap()
    }

    #[test_case(json!("33"), "33" ; "string age")]
    #[test_case(json!(9), "9" ; "integer age")]
    #[test_case(json!(-999), "-999" ; "negative age")]
    #[test_case(json!(null), "" ; "null age")]
    fn test_age_normalisation(age: Value, expected: &str) {
        let pet: Pet = serde_json::from_value(json!({"id": "p1", "age": age})).unwrap();
        assert_eq!(pet.age, expected);
    }

    #[test]
    fn test_age_rejects_structures() {
        let result: Result<Pet, _> = serde_json::from_value(json!({"id": "p1", "age": [1]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let pet: Pet = serde_json::from_value(json!({"id": "p1"})).unwrap();
        assert!(pet.name.is_empty());
        assert!(pet.user_id.is_none());
        assert!(!pet.has_photo());
        assert!(pet.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let pet: Pet =
            serde_json::from_value(json!({"id": "p1", "created_at": "1700000000.1"})).unwrap();
        assert_eq!(pet.extra.get("created_at"), Some(&json!("1700000000.1")));
    }

    #[test]
    fn test_photo_bytes_decodes_data_uri() {
        let pet = pet_with_photo("data:image/jpeg;base64,/9j/2Q==");
        assert_eq!(pet.photo_mime_type(), Some("image/jpeg"));
        assert_eq!(pet.photo_bytes().unwrap(), Some(vec![0xFF, 0xD8, 0xFF, 0xD9]));
    }

    #[test]
    fn test_photo_bytes_without_photo() {
        let pet = pet_with_photo("");
        assert_eq!(pet.photo_mime_type(), None);
        assert_eq!(pet.photo_bytes().unwrap(), None);
    }

    #[test_case("https://example.com/cat.jpg" ; "plain url")]
    #[test_case("data:image/jpeg,rawbytes" ; "not base64")]
    #[test_case("data:image/jpeg;base64,***" ; "corrupt payload")]
    fn test_photo_bytes_rejects_malformed(photo: &str) {
        let err = pet_with_photo(photo).photo_bytes().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[test]
    fn test_pet_list_lookup() {
        let list: PetList = serde_json::from_value(json!({
            "pets": [{"id": "a", "name": "One"}, {"id": "b", "name": "Two"}]
        }))
        .unwrap();

        assert!(list.contains_id("b"));
        assert!(!list.contains_id("c"));
        assert_eq!(list.find("a").map(|p| p.name.as_str()), Some("One"));
    }
}
