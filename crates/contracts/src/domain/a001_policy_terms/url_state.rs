//! Filter set and URL state of the policy terms list.
//!
//! `UrlState` is what the address bar holds; it is parsed on every render and
//! rendered back with [`UrlState::to_query_string`]. Both directions go
//! through the shared query-string helpers so that
//! `UrlState::parse(&state.to_query_string())` gives back `state` normalized.

use serde::{Deserialize, Serialize};

use crate::shared::query_string::{
    build_query_string, href_with_query, parse_non_negative_int, parse_positive_int,
    parse_query_map, QueryValue,
};

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SORT: &str = "effective_to_date,asc";

/// Which date of a term the date range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    #[default]
    Expiration,
    Effective,
}

impl DateField {
    pub const ALL: [DateField; 2] = [DateField::Expiration, DateField::Effective];

    pub fn as_str(self) -> &'static str {
        match self {
            DateField::Expiration => "expiration",
            DateField::Effective => "effective",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateField::Expiration => "Expiration",
            DateField::Effective => "Effective",
        }
    }

    /// Anything other than `effective` selects the default.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("effective") {
            DateField::Effective
        } else {
            DateField::Expiration
        }
    }
}

/// Editable filter fields, named after their URL parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Keyword,
    State,
    Status,
    DateField,
    DateFrom,
    DateTo,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Keyword,
        FilterField::State,
        FilterField::Status,
        FilterField::DateField,
        FilterField::DateFrom,
        FilterField::DateTo,
    ];

    pub fn param_name(self) -> &'static str {
        match self {
            FilterField::Keyword => "q",
            FilterField::State => "state",
            FilterField::Status => "status",
            FilterField::DateField => "date_field",
            FilterField::DateFrom => "date_from",
            FilterField::DateTo => "date_to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub q: String,
    pub state: String,
    pub status: String,
    pub date_field: DateField,
    pub date_from: String,
    pub date_to: String,
}

impl FilterSet {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Keyword => &self.q,
            FilterField::State => &self.state,
            FilterField::Status => &self.status,
            FilterField::DateField => self.date_field.as_str(),
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Keyword => self.q = value,
            FilterField::State => self.state = value,
            FilterField::Status => self.status = value,
            FilterField::DateField => self.date_field = DateField::parse(&value),
            FilterField::DateFrom => self.date_from = value,
            FilterField::DateTo => self.date_to = value,
        }
    }

    /// Reset a field to its empty value.
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::DateField => self.date_field = DateField::default(),
            other => self.set(other, String::new()),
        }
    }

    pub fn has_date_range(&self) -> bool {
        !self.date_from.trim().is_empty() || !self.date_to.trim().is_empty()
    }

    /// True when no filter would reach the query string.
    pub fn is_empty(&self) -> bool {
        self.normalized() == FilterSet::default()
    }

    /// Trimmed copy; the date selector only survives alongside a range.
    pub fn normalized(&self) -> FilterSet {
        let has_range = self.has_date_range();
        FilterSet {
            q: self.q.trim().to_string(),
            state: self.state.trim().to_string(),
            status: self.status.trim().to_string(),
            date_field: if has_range {
                self.date_field
            } else {
                DateField::default()
            },
            date_from: self.date_from.trim().to_string(),
            date_to: self.date_to.trim().to_string(),
        }
    }

    /// Query parameters for this filter set, in canonical order.
    pub fn query_pairs(&self) -> Vec<(&'static str, QueryValue<'_>)> {
        let date_field = if self.has_date_range() {
            QueryValue::from(self.date_field.as_str())
        } else {
            QueryValue::Absent
        };
        vec![
            ("q", QueryValue::from(&self.q)),
            ("state", QueryValue::from(&self.state)),
            ("status", QueryValue::from(&self.status)),
            ("date_field", date_field),
            ("date_from", QueryValue::from(&self.date_from)),
            ("date_to", QueryValue::from(&self.date_to)),
        ]
    }
}

/// Everything the list page keeps in its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlState {
    pub filters: FilterSet,
    pub page: u32,
    pub size: u32,
    pub sort: String,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            filters: FilterSet::default(),
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl UrlState {
    /// Parse a location search string (`?` optional).
    pub fn parse(query: &str) -> Self {
        let params = parse_query_map(query);
        Self::from_lookup(|key| params.get(key).cloned())
    }

    /// Build from any by-name parameter lookup.
    ///
    /// `exp_from`/`exp_to` are read when `date_from`/`date_to` are absent;
    /// they always mean an expiration range.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| get(key).unwrap_or_default();

        let mut filters = FilterSet {
            q: text("q"),
            state: text("state"),
            status: text("status"),
            date_field: DateField::parse(&text("date_field")),
            date_from: text("date_from"),
            date_to: text("date_to"),
        };

        if !filters.has_date_range() {
            let exp_from = text("exp_from");
            let exp_to = text("exp_to");
            if !exp_from.trim().is_empty() || !exp_to.trim().is_empty() {
                filters.date_field = DateField::Expiration;
                filters.date_from = exp_from;
                filters.date_to = exp_to;
            }
        }

        let sort = text("sort");
        let sort = sort.trim();

        Self {
            filters,
            page: parse_non_negative_int(get("page").as_deref(), DEFAULT_PAGE),
            size: parse_positive_int(get("size").as_deref(), DEFAULT_PAGE_SIZE),
            sort: if sort.is_empty() {
                DEFAULT_SORT.to_string()
            } else {
                sort.to_string()
            },
        }
    }

    /// Copy of this state pointing at another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Canonical query string; page, size and sort are always present.
    pub fn to_query_string(&self) -> String {
        let mut pairs = self.filters.query_pairs();
        pairs.push(("page", QueryValue::from(self.page)));
        pairs.push(("size", QueryValue::from(self.size)));
        pairs.push(("sort", QueryValue::from(&self.sort)));
        build_query_string(pairs)
    }

    pub fn href(&self, path: &str) -> String {
        href_with_query(path, &self.to_query_string())
    }

    /// The state as it will read back from the URL.
    pub fn normalized(&self) -> Self {
        Self {
            filters: self.filters.normalized(),
            page: self.page,
            size: self.size,
            sort: self.sort.trim().to_string(),
        }
    }
}
