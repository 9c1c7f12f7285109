//! Listing View Shape
//!
//! Store rows are reshaped into one view-friendly `Listing` used by cards,
//! the detail page and the profile page. Shaping never fails: missing data
//! turns into placeholders and zeros.

use serde::{Deserialize, Serialize};
use super::item::{ItemRow, OwnerFields};

/// Image shown when a listing has no photos
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
/// Owner name shown when the profile is missing or blank
pub const DEFAULT_OWNER_NAME: &str = "Пользователь";
/// Condition badge; the schema has no condition column yet
pub const DEFAULT_CONDITION: &str = "Хорошее";

/// Owner block shown on cards and the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub name: String,
    pub avatar: String,
    pub rating: f64,
    pub rentals_count: i64,
}

impl OwnerSummary {
    pub fn from_fields(fields: Option<&OwnerFields>) -> Self {
        let name = fields
            .and_then(|f| f.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_OWNER_NAME)
            .to_string();
        Self {
            name,
            avatar: fields.and_then(|f| f.avatar_url.clone()).unwrap_or_default(),
            rating: finite_or_zero(fields.and_then(|f| f.rating)),
            rentals_count: fields.and_then(|f| f.rentals_count).unwrap_or(0),
        }
    }
}

/// An item shaped for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price_per_day: i64,
    pub deposit: i64,
    pub min_days: i32,
    /// Never empty
    pub images: Vec<String>,
    pub owner: OwnerSummary,
    pub location: String,
    pub rating: f64,
    pub reviews_count: i64,
    pub condition: String,
    pub conditions: Option<String>,
}

impl Listing {
    pub fn cover_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Shape one row, with the owner's profile columns when known
pub fn shape_listing(item: &ItemRow, owner: Option<&OwnerFields>) -> Listing {
    let images = match &item.images {
        Some(images) if !images.is_empty() => images.clone(),
        _ => vec![PLACEHOLDER_IMAGE.to_string()],
    };
    Listing {
        id: item.id.clone(),
        title: item.title.clone(),
        category: item.category.clone(),
        description: item.description.clone().unwrap_or_default(),
        price_per_day: item.price_per_day,
        deposit: item.deposit,
        min_days: item.min_days,
        images,
        owner: OwnerSummary::from_fields(owner),
        location: item.location.clone().unwrap_or_default(),
        rating: finite_or_zero(item.rating),
        reviews_count: item.reviews_count.unwrap_or(0),
        condition: DEFAULT_CONDITION.to_string(),
        conditions: item.conditions.clone().filter(|c| !c.trim().is_empty()),
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Format a ruble amount grouped by non-breaking spaces: `15000` -> `"15 000 ₽"`
pub fn format_rub(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₽", sign, grouped)
}

/// Rating with one decimal, trailing `.0` dropped: `4.0` -> `"4"`, `4.86` -> `"4.9"`
pub fn format_rating(rating: f64) -> String {
    let rounded = (rating * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;

    fn row(images: Option<Vec<String>>) -> ItemRow {
        ItemRow {
            id: "i1".into(),
            owner_id: "u1".into(),
            title: "Перфоратор".into(),
            category: "tools".into(),
            description: None,
            price_per_day: 500,
            deposit: 5000,
            min_days: 1,
            images,
            location: None,
            conditions: Some("  ".into()),
            status: ItemStatus::Active,
            rating: None,
            reviews_count: None,
            views_count: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_missing_images_use_placeholder() {
        assert_eq!(shape_listing(&row(None), None).images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(shape_listing(&row(Some(vec![])), None).cover_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_existing_images_kept_in_order() {
        let listing = shape_listing(&row(Some(vec!["a.jpg".into(), "b.jpg".into()])), None);
        assert_eq!(listing.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(listing.cover_image(), "a.jpg");
    }

    #[test]
    fn test_missing_owner_gets_defaults() {
        let listing = shape_listing(&row(None), None);
        assert_eq!(listing.owner.name, DEFAULT_OWNER_NAME);
        assert_eq!(listing.owner.avatar, "");
        assert_eq!(listing.owner.rating, 0.0);
        assert_eq!(listing.owner.rentals_count, 0);
        assert_eq!(listing.rating, 0.0);
        assert_eq!(listing.reviews_count, 0);
        assert_eq!(listing.description, "");
        assert_eq!(listing.location, "");
        assert_eq!(listing.conditions, None);
    }

    #[test]
    fn test_blank_owner_name_and_nan_rating_default() {
        let owner = OwnerFields {
            name: Some("   ".into()),
            avatar_url: None,
            rating: Some(f64::NAN),
            rentals_count: Some(7),
        };
        let listing = shape_listing(&row(None), Some(&owner));
        assert_eq!(listing.owner.name, DEFAULT_OWNER_NAME);
        assert_eq!(listing.owner.rating, 0.0);
        assert_eq!(listing.owner.rentals_count, 7);
    }

    #[test]
    fn test_format_rub_groups_thousands() {
        assert_eq!(format_rub(500), "500 ₽");
        assert_eq!(format_rub(15000), "15\u{a0}000 ₽");
        assert_eq!(format_rub(1234567), "1\u{a0}234\u{a0}567 ₽");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.86), "4.9");
    }
}
