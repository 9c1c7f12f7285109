//! Rental Entities
//!
//! Bookings and the records hanging off them: hand-over photos, disputes,
//! reviews and messages. The client only reads these.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Booking lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    #[default]
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    Disputed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "pending",
            RentalStatus::Confirmed => "confirmed",
            RentalStatus::Active => "active",
            RentalStatus::Completed => "completed",
            RentalStatus::Cancelled => "cancelled",
            RentalStatus::Disputed => "disputed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "Ожидает подтверждения",
            RentalStatus::Confirmed => "Подтверждена",
            RentalStatus::Active => "Идёт аренда",
            RentalStatus::Completed => "Завершена",
            RentalStatus::Cancelled => "Отменена",
            RentalStatus::Disputed => "Спор",
        }
    }
}

/// Row of the `rentals` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRow {
    pub id: String,
    pub item_id: String,
    pub owner_id: String,
    pub renter_id: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: i64,
    pub deposit_amount: i64,
    #[serde(default)]
    pub platform_fee: i64,
    #[serde(default)]
    pub status: RentalStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RentalRow {
    /// Inclusive number of rental days, `None` when the dates do not parse
    pub fn days(&self) -> Option<i64> {
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        Some((end - start).num_days() + 1)
    }

    /// "dd.mm.yyyy – dd.mm.yyyy", falling back to the raw strings
    pub fn period_label(&self) -> String {
        format!("{} – {}", display_date(&self.start_date), display_date(&self.end_date))
    }
}

impl Entity for RentalRow {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // timestamps come back as full ISO strings, dates as YYYY-MM-DD
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoType {
    Before,
    After,
}

/// Hand-over photo attached to a rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalPhotoRow {
    pub id: String,
    pub rental_id: String,
    pub uploaded_by: String,
    pub photo_url: String,
    pub photo_type: PhotoType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    #[default]
    Open,
    ResolvedOwner,
    ResolvedRenter,
    Closed,
}

/// Disagreement raised against a rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeRow {
    pub id: String,
    pub rental_id: String,
    pub opened_by: String,
    pub reason: String,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub evidence_urls: Option<Vec<String>>,
    #[serde(default)]
    pub status: DisputeStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: String,
    pub rental_id: String,
    pub reviewer_id: String,
    pub target_user_id: String,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRow {
    pub id: String,
    pub rental_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(start: &str, end: &str) -> RentalRow {
        RentalRow {
            id: "r1".into(),
            item_id: "i1".into(),
            owner_id: "o1".into(),
            renter_id: "u1".into(),
            start_date: start.into(),
            end_date: end.into(),
            total_price: 1500,
            deposit_amount: 5000,
            platform_fee: 225,
            status: RentalStatus::Pending,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_rental_days_inclusive() {
        assert_eq!(rental("2024-05-01", "2024-05-03").days(), Some(3));
        assert_eq!(rental("garbage", "2024-05-03").days(), None);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(rental("2024-05-01", "2024-05-03T00:00:00Z").period_label(), "01.05.2024 – 03.05.2024");
    }

    #[test]
    fn test_status_wire_names() {
        let status: RentalStatus = serde_json::from_str("\"disputed\"").unwrap();
        assert_eq!(status, RentalStatus::Disputed);
        let dispute: DisputeStatus = serde_json::from_str("\"resolved_renter\"").unwrap();
        assert_eq!(dispute, DisputeStatus::ResolvedRenter);
    }

    #[test]
    fn test_side_tables_tolerate_missing_optionals() {
        let photo: RentalPhotoRow = serde_json::from_str(
            r#"{"id":"p1","rental_id":"r1","uploaded_by":"u1","photo_url":"/a.jpg","photo_type":"before"}"#,
        )
        .unwrap();
        assert_eq!(photo.photo_type, PhotoType::Before);
        assert_eq!(photo.description, None);

        let dispute: DisputeRow =
            serde_json::from_str(r#"{"id":"d1","rental_id":"r1","opened_by":"u1","reason":"царапина"}"#).unwrap();
        assert_eq!(dispute.status, DisputeStatus::Open);

        let review: ReviewRow = serde_json::from_str(
            r#"{"id":"v1","rental_id":"r1","reviewer_id":"u1","target_user_id":"o1","rating":5}"#,
        )
        .unwrap();
        assert_eq!(review.rating, 5);

        let message: MessageRow =
            serde_json::from_str(r#"{"id":"m1","rental_id":"r1","sender_id":"u1","content":"Привет"}"#).unwrap();
        assert!(!message.read);
    }
}
