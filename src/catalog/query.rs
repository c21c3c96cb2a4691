//! Query parameters for the catalog listing.
//!
//! Values arrive as raw strings and are coerced permissively: anything
//! malformed degrades to the default instead of failing the request.

use serde::{Deserialize, Serialize};

/// Sort order over the official country name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep natural (or relevance) order.
    #[default]
    Unspecified,
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact values `asc` and `desc` select an order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Unspecified,
        }
    }

    /// The query-string value for this order, if any.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortOrder::Unspecified => None,
            SortOrder::Asc => Some("asc"),
            SortOrder::Desc => Some("desc"),
        }
    }
}

/// Raw `name`, `sort` and `page` parameters as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// The trimmed search text, or `None` when absent or blank.
    pub fn name_filter(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(self.sort.as_deref())
    }

    /// The requested 1-based page; anything that is not a positive whole
    /// number falls back to 1.
    pub fn page(&self) -> usize {
        self.page.as_deref().and_then(parse_page).unwrap_or(1)
    }
}

fn parse_page(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if let Ok(page) = raw.parse::<usize>() {
        return (page >= 1).then_some(page);
    }

    // "2.0" and "1e1" are whole numbers too
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}
