use time::OffsetDateTime;

use crate::document::{Fields, Value};

/// Musician availability status shown on a profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Band,
    Solo,
    Searching,
}

impl ProfileStatus {
    pub const ALL: [ProfileStatus; 3] = [
        ProfileStatus::Band,
        ProfileStatus::Solo,
        ProfileStatus::Searching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Band => "Band",
            ProfileStatus::Solo => "Solo",
            ProfileStatus::Searching => "Searching",
        }
    }
}

/// A musician profile document as stored in the `profiles` collection.
///
/// The `search` projection is not carried as state: it is derived from
/// `display_name` and `band_name` when the document is encoded, so it can
/// never disagree with the display fields.
#[derive(Debug, Clone)]
pub struct Profile {
    pub uid: String,
    pub display_name: String,
    pub photo_url: String,
    pub region: String,
    pub zip: String,
    pub band_name: String,
    pub status: ProfileStatus,
    pub roles: Vec<String>,
    pub genres: Vec<String>,
    pub bio: String,
    pub is_test: bool,
    pub updated_at: OffsetDateTime,
}

impl Profile {
    /// Encodes the profile into store fields, including the lowercase
    /// `search` projection of the display fields.
    pub fn to_fields(&self) -> Fields {
        let mut search = Fields::new();
        search.insert(
            "name".to_string(),
            Value::from(self.display_name.to_lowercase()),
        );
        search.insert(
            "band".to_string(),
            Value::from(self.band_name.to_lowercase()),
        );

        let mut fields = Fields::new();
        fields.insert("uid".to_string(), Value::from(self.uid.clone()));
        fields.insert(
            "displayName".to_string(),
            Value::from(self.display_name.clone()),
        );
        fields.insert("photoURL".to_string(), Value::from(self.photo_url.clone()));
        fields.insert("region".to_string(), Value::from(self.region.clone()));
        fields.insert("zip".to_string(), Value::from(self.zip.clone()));
        fields.insert("bandName".to_string(), Value::from(self.band_name.clone()));
        fields.insert("status".to_string(), Value::from(self.status.as_str()));
        fields.insert(
            "roles".to_string(),
            Value::Array(self.roles.iter().map(|r| Value::from(r.clone())).collect()),
        );
        fields.insert(
            "genres".to_string(),
            Value::Array(self.genres.iter().map(|g| Value::from(g.clone())).collect()),
        );
        fields.insert("bio".to_string(), Value::from(self.bio.clone()));
        fields.insert("search".to_string(), Value::Map(search));
        fields.insert("isTest".to_string(), Value::from(self.is_test));
        fields.insert("updatedAt".to_string(), Value::from(self.updated_at));

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            uid: "test_7".to_string(),
            display_name: "TestMusiker 7".to_string(),
            photo_url: "https://i.pravatar.cc/300?img=7".to_string(),
            region: "LU".to_string(),
            zip: "6003".to_string(),
            band_name: "Band 7".to_string(),
            status: ProfileStatus::Searching,
            roles: vec!["Drums".to_string()],
            genres: vec!["Rock".to_string(), "Blues".to_string()],
            bio: "bio".to_string(),
            is_test: true,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_search_projection_is_lowercase_of_display_fields() {
        let fields = sample_profile().to_fields();
        let search = fields.get("search").and_then(Value::as_map).unwrap();

        assert_eq!(
            search.get("name").and_then(Value::as_str),
            Some("testmusiker 7")
        );
        assert_eq!(search.get("band").and_then(Value::as_str), Some("band 7"));
    }

    #[test]
    fn test_search_projection_of_empty_band_name() {
        let mut profile = sample_profile();
        profile.band_name = String::new();
        let fields = profile.to_fields();
        let search = fields.get("search").and_then(Value::as_map).unwrap();

        assert_eq!(search.get("band").and_then(Value::as_str), Some(""));
    }

    #[test]
    fn test_encoded_fields_carry_schema_values() {
        let fields = sample_profile().to_fields();

        assert_eq!(fields.get("uid").and_then(Value::as_str), Some("test_7"));
        assert_eq!(fields.get("status").and_then(Value::as_str), Some("Searching"));
        assert_eq!(fields.get("isTest").and_then(Value::as_bool), Some(true));
        assert_eq!(
            fields.get("genres").and_then(Value::as_array).map(<[Value]>::len),
            Some(2)
        );
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ProfileStatus::Band.as_str(), "Band");
        assert_eq!(ProfileStatus::Solo.as_str(), "Solo");
        assert_eq!(ProfileStatus::Searching.as_str(), "Searching");
    }
}
