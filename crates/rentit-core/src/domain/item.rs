//! Item Entity
//!
//! A rentable object listed by its owner, as stored in the `items` table.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Publication state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    /// Visible in the catalog
    #[default]
    Active,
    Paused,
    Archived,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Active => "active",
            ItemStatus::Paused => "paused",
            ItemStatus::Archived => "archived",
        }
    }
}

/// Row of the `items` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_day: i64,
    pub deposit: i64,
    pub min_days: i32,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: Option<i64>,
    #[serde(default)]
    pub views_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Entity for ItemRow {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Owner columns embedded by the `profiles!items_owner_id_fkey(...)` join
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rentals_count: Option<i64>,
}

/// Item row with its owner's profile embedded by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithOwnerRow {
    #[serde(flatten)]
    pub item: ItemRow,
    #[serde(default)]
    pub profiles: Option<OwnerFields>,
}

/// Insert payload for a new listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub owner_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price_per_day: i64,
    pub deposit: i64,
    pub min_days: i32,
    pub conditions: Option<String>,
    pub location: Option<String>,
    pub images: Vec<String>,
}

/// Catalog category (static table)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub count: u32,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "tools", name: "Инструменты", icon: "🔧", count: 124 },
    Category { id: "sports", name: "Спорт", icon: "⚽", count: 89 },
    Category { id: "kids", name: "Детские товары", icon: "👶", count: 67 },
    Category { id: "events", name: "Для мероприятий", icon: "🎉", count: 45 },
    Category { id: "electronics", name: "Техника", icon: "📷", count: 156 },
    Category { id: "household", name: "Бытовая техника", icon: "🏠", count: 78 },
];

/// Look up a category by id
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_row_deserializes_flat_item_with_embed() {
        let json = r#"{
            "id": "i1", "owner_id": "u1", "title": "Drill", "category": "tools",
            "description": null, "price_per_day": 500, "deposit": 5000, "min_days": 1,
            "images": null, "status": "active", "rating": 4.5,
            "profiles": {"name": "Alex", "avatar_url": null, "rating": 4.8, "rentals_count": 3}
        }"#;
        let row: ItemWithOwnerRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.item.id, "i1");
        assert_eq!(row.item.status, ItemStatus::Active);
        assert_eq!(row.profiles.unwrap().name.as_deref(), Some("Alex"));
    }

    #[test]
    fn test_joined_row_without_embed() {
        let json = r#"{"id": "i1", "owner_id": "u1", "title": "Drill", "category": "tools",
            "price_per_day": 500, "deposit": 5000, "min_days": 1, "profiles": null}"#;
        let row: ItemWithOwnerRow = serde_json::from_str(json).unwrap();
        assert!(row.profiles.is_none());
        assert!(row.item.images.is_none());
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("kids").map(|c| c.name), Some("Детские товары"));
        assert!(find_category("boats").is_none());
    }
}
