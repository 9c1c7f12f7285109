//! Catalog Filter
//!
//! Client-side narrowing of already-fetched listings by category and by a
//! case-insensitive title substring. Both predicates are independent, so
//! applying them in either order yields the same set.

use super::listing::Listing;

/// Category id meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// `None` or `"all"` shows every category
    pub category: Option<String>,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(category: Option<String>, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Active category id, if any
    pub fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        matches_category(listing, self.active_category()) && matches_query(listing, &self.query)
    }

    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings.iter().filter(|l| self.matches(l)).cloned().collect()
    }
}

fn matches_category(listing: &Listing, category: Option<&str>) -> bool {
    category.map_or(true, |c| listing.category == c)
}

fn matches_query(listing: &Listing, query: &str) -> bool {
    listing.title.to_lowercase().contains(&query.to_lowercase())
}

/// Keep listings in `category` (`None`/`"all"` keeps everything)
pub fn filter_by_category(listings: &[Listing], category: Option<&str>) -> Vec<Listing> {
    let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    listings.iter().filter(|l| matches_category(l, category)).cloned().collect()
}

/// Keep listings whose title contains `query`, ignoring case
pub fn filter_by_text(listings: &[Listing], query: &str) -> Vec<Listing> {
    listings.iter().filter(|l| matches_query(l, query)).cloned().collect()
}

/// Message shown when the filtered grid is empty
pub fn empty_catalog_message(total: usize) -> &'static str {
    if total == 0 {
        "Пока нет объявлений. Будьте первым!"
    } else {
        "Ничего не найдено. Попробуйте изменить фильтры."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{shape_listing, ItemRow, ItemStatus};

    fn listing(id: &str, title: &str, category: &str) -> Listing {
        let row = ItemRow {
            id: id.into(),
            owner_id: "u1".into(),
            title: title.into(),
            category: category.into(),
            description: None,
            price_per_day: 100,
            deposit: 1000,
            min_days: 1,
            images: None,
            location: None,
            conditions: None,
            status: ItemStatus::Active,
            rating: None,
            reviews_count: None,
            views_count: None,
            created_at: None,
            updated_at: None,
        };
        shape_listing(&row, None)
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("1", "Перфоратор Bosch", "tools"),
            listing("2", "Велосипед Trek", "sports"),
            listing("3", "Шуруповёрт BOSCH", "tools"),
            listing("4", "Палатка", "sports"),
            listing("5", "Проектор Epson", "electronics"),
        ]
    }

    fn ids(listings: &[Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_category_and_text_filters_commute() {
        let items = sample();
        let cases = [
            (Some("tools"), "bosch"),
            (Some("sports"), "ПАЛ"),
            (Some("all"), "е"),
            (None, ""),
            (Some("kids"), "x"),
            (Some("electronics"), ""),
        ];
        for (category, query) in cases {
            let category_first = filter_by_text(&filter_by_category(&items, category), query);
            let text_first = filter_by_category(&filter_by_text(&items, query), category);
            assert_eq!(ids(&category_first), ids(&text_first), "category={:?} query={:?}", category, query);

            let combined = CatalogFilter::new(category.map(String::from), query).apply(&items);
            assert_eq!(ids(&combined), ids(&category_first));
        }
    }

    #[test]
    fn test_text_filter_ignores_case() {
        let found = filter_by_text(&sample(), "bosch");
        assert_eq!(ids(&found), vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_all_category_is_no_filter() {
        let filter = CatalogFilter::new(Some(ALL_CATEGORIES.to_string()), "");
        assert_eq!(filter.active_category(), None);
        assert_eq!(filter.apply(&sample()).len(), 5);
    }

    #[test]
    fn test_empty_message_depends_on_total() {
        assert_eq!(empty_catalog_message(0), "Пока нет объявлений. Будьте первым!");
        assert_eq!(empty_catalog_message(3), "Ничего не найдено. Попробуйте изменить фильтры.");
    }
}
