//! Listing records and pagination primitives.
//!
//! # Public API
//! - [`Record`]: Anything with a stable unique identifier
//! - [`Profile`]: One entry of the profile listing
//! - [`ProfileDetail`] / [`Location`]: Full profile as returned by the detail endpoint
//! - [`Page`]: One page of records as reported by a listing backend
//! - [`PageCursor`]: Opaque pointer to the next page

use serde::{Deserialize, Serialize};

/// An entity with a stable unique identifier.
///
/// The paginated loader never looks past `id`.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub picture: String,
}

impl Profile {
    /// "Mr John Doe", skipping empty parts
    pub fn display_name(&self) -> String {
        join_name(&self.title, &self.first_name, &self.last_name)
    }
}

impl Record for Profile {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub timezone: String,
}

/// How much of a [`Location`] goes into a geocoding query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPrecision {
    /// Country only. The demo data has fictional streets, so this is the default.
    #[default]
    Country,
    Full,
}

impl Location {
    /// Build the geocode cache key for this location.
    pub fn address(&self, precision: AddressPrecision) -> String {
        match precision {
            AddressPrecision::Country => self.country.trim().to_string(),
            AddressPrecision::Full => [&self.street, &self.city, &self.state, &self.country]
                .iter()
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub location: Location,
}

impl ProfileDetail {
    pub fn display_name(&self) -> String {
        join_name(&self.title, &self.first_name, &self.last_name)
    }
}

impl Record for ProfileDetail {
    fn id(&self) -> &str {
        &self.id
    }
}

fn join_name(title: &str, first: &str, last: &str) -> String {
    [title, first, last]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One page of records. `total` is set only by backends that report it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub total: Option<usize>,
}

impl<R> Page<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            total: None,
        }
    }

    pub fn with_total(records: Vec<R>, total: usize) -> Self {
        Self {
            records,
            total: Some(total),
        }
    }
}

/// Zero-based page number of the next page to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageCursor(u32);

impl PageCursor {
    pub const fn initial() -> Self {
        Self(0)
    }

    pub const fn page(self) -> u32 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json = r#"{"id":"60d0fe4f5311236168a109ca","title":"ms","firstName":"Sara","lastName":"Andersen","picture":"https://randomuser.me/api/portraits/women/58.jpg"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id(), "60d0fe4f5311236168a109ca");
        assert_eq!(profile.display_name(), "ms Sara Andersen");
    }

    #[test]
    fn test_profile_tolerates_missing_optional_fields() {
        let profile: Profile = serde_json::from_str(r#"{"id":"a1","firstName":"Edita"}"#).unwrap();
        assert_eq!(profile.display_name(), "Edita");
        assert!(profile.picture.is_empty());
    }

    #[test]
    fn test_detail_deserializes_location() {
        let json = r#"{
            "id": "60d0fe4f5311236168a109cb",
            "title": "miss",
            "firstName": "Edita",
            "lastName": "Vestering",
            "gender": "female",
            "email": "edita.vestering@example.com",
            "dateOfBirth": "1956-08-25T16:38:06.040Z",
            "phone": "(080)-456-6768",
            "picture": "",
            "location": {"street": "9614, Søndermarksvej", "city": "Kongsvinger", "state": "Nordjylland", "country": "Denmark", "timezone": "-9:00"}
        }"#;
        let detail: ProfileDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.location.country, "Denmark");
        assert_eq!(detail.date_of_birth.as_deref(), Some("1956-08-25T16:38:06.040Z"));
    }

    #[test]
    fn test_location_address_precision() {
        let location = Location {
            street: "9614, Søndermarksvej".to_string(),
            city: "Kongsvinger".to_string(),
            state: String::new(),
            country: " Denmark ".to_string(),
            timezone: "-9:00".to_string(),
        };
        assert_eq!(location.address(AddressPrecision::Country), "Denmark");
        assert_eq!(
            location.address(AddressPrecision::Full),
            "9614, Søndermarksvej, Kongsvinger, Denmark"
        );
    }

    #[test]
    fn test_page_cursor_advances() {
        let cursor = PageCursor::initial();
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.next().next().page(), 2);
        assert_eq!(PageCursor::default(), PageCursor::initial());
    }
}
