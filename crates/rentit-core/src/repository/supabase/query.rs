//! PostgREST query strings
//!
//! Builds the `?select=...&col=eq.value&order=...` part of table URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::BackendConfig;

/// Characters left readable in query values; everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*')
    .remove(b',')
    .remove(b'(')
    .remove(b')')
    .remove(b'!');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            params: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.table
    }

    /// `select=<columns>`; replaces an earlier selection
    pub fn select(mut self, columns: &str) -> Self {
        self.params.retain(|(k, _)| k != "select");
        self.params.insert(0, ("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// `column=in.(a,b,c)`; values holding reserved characters are quoted
    pub fn in_list(mut self, column: &str, values: &[String]) -> Self {
        let list = values.iter().map(|v| quote_list_value(v)).collect::<Vec<_>>().join(",");
        self.params.push((column.to_string(), format!("in.({})", list)));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.params.push(("order".to_string(), format!("{}.desc", column)));
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        if let Some(n) = limit {
            self.params.push(("limit".to_string(), n.to_string()));
        }
        self
    }

    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full URL of the table endpoint with the query string
    pub fn url(&self, config: &BackendConfig) -> String {
        let table_url = config.rest_url(&self.table);
        let qs = self.query_string();
        if qs.is_empty() {
            table_url
        } else {
            format!("{}?{}", table_url, qs)
        }
    }
}

fn quote_list_value(value: &str) -> String {
    if value.chars().any(|c| matches!(c, ',' | '(' | ')' | '"' | ' ')) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_join_query() {
        let q = Query::table("items")
            .select("*, profiles!items_owner_id_fkey(name, avatar_url, rating, rentals_count)")
            .eq("status", "active")
            .order_desc("created_at");
        assert_eq!(
            q.query_string(),
            "select=*,%20profiles!items_owner_id_fkey(name,%20avatar_url,%20rating,%20rentals_count)\
             &status=eq.active&order=created_at.desc"
        );
    }

    #[test]
    fn test_in_list_and_limit() {
        let q = Query::table("profiles")
            .select("*")
            .in_list("user_id", &["a1".to_string(), "b 2".to_string()])
            .limit(Some(6));
        assert_eq!(q.query_string(), "select=*&user_id=in.(a1,%22b%202%22)&limit=6");
        assert_eq!(
            q.url(&BackendConfig::new("https://x.supabase.co", "key")),
            "https://x.supabase.co/rest/v1/profiles?select=*&user_id=in.(a1,%22b%202%22)&limit=6"
        );
    }

    #[test]
    fn test_select_replaces_previous_and_no_limit() {
        let q = Query::table("items").select("id").select("*").limit(None);
        assert_eq!(q.query_string(), "select=*");
        assert_eq!(
            Query::table("items").url(&BackendConfig::new("http://localhost:54321", "key")),
            "http://localhost:54321/rest/v1/items"
        );
    }

    #[test]
    fn test_eq_escapes_value() {
        let q = Query::table("items").eq("id", "a&b=c");
        assert_eq!(q.query_string(), "id=eq.a%26b%3Dc");
    }
}
