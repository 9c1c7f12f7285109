//! Profile Entity
//!
//! User-facing identity record linked to an auth account via `user_id`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::OwnerFields;

/// Row of the `profiles` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rentals_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ProfileRow {
    /// The subset of columns shown next to a listing
    pub fn owner_fields(&self) -> OwnerFields {
        OwnerFields {
            name: Some(self.name.clone()),
            avatar_url: self.avatar_url.clone(),
            rating: self.rating,
            rentals_count: self.rentals_count,
        }
    }
}

impl Entity for ProfileRow {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update of a profile; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn contact(name: &str, phone: &str) -> Self {
        Self {
            name: Some(name.trim().to_string()),
            phone: Some(phone.trim().to_string()),
            avatar_url: None,
        }
    }

    pub fn avatar(url: String) -> Self {
        Self {
            avatar_url: Some(url),
            ..Default::default()
        }
    }

    /// Apply this update to a row held locally
    pub fn apply_to(&self, row: &mut ProfileRow) {
        if let Some(name) = &self.name {
            row.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            row.phone = Some(phone.clone());
        }
        if let Some(url) = &self.avatar_url {
            row.avatar_url = Some(url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_update_serializes_only_avatar() {
        let json = serde_json::to_value(ProfileUpdate::avatar("https://x/a.png".into())).unwrap();
        assert_eq!(json, serde_json::json!({"avatar_url": "https://x/a.png"}));
    }

    #[test]
    fn test_apply_contact_update() {
        let mut row = ProfileRow {
            id: "p1".into(),
            user_id: "u1".into(),
            name: "Old".into(),
            phone: None,
            avatar_url: Some("a".into()),
            rating: None,
            rentals_count: None,
            created_at: None,
            updated_at: None,
        };
        ProfileUpdate::contact(" New ", "+7 999").apply_to(&mut row);
        assert_eq!(row.name, "New");
        assert_eq!(row.phone.as_deref(), Some("+7 999"));
        assert_eq!(row.avatar_url.as_deref(), Some("a"));
    }
}
