//! Canonical query strings.
//!
//! Every href the UI navigates to and every request the API client sends is
//! rendered here, so that comparing two query strings is the same as
//! comparing the states they were built from.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single query parameter value before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue<'a> {
    Text(Cow<'a, str>),
    Number(i64),
    Absent,
}

impl QueryValue<'_> {
    /// Trimmed string form of the value, `None` when it would be dropped.
    pub fn normalized(&self) -> Option<String> {
        match self {
            QueryValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            QueryValue::Number(number) => Some(number.to_string()),
            QueryValue::Absent => None,
        }
    }
}

impl<'a> From<&'a str> for QueryValue<'a> {
    fn from(value: &'a str) -> Self {
        QueryValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for QueryValue<'a> {
    fn from(value: &'a String) -> Self {
        QueryValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for QueryValue<'static> {
    fn from(value: String) -> Self {
        QueryValue::Text(Cow::Owned(value))
    }
}

impl From<i64> for QueryValue<'static> {
    fn from(value: i64) -> Self {
        QueryValue::Number(value)
    }
}

impl From<i32> for QueryValue<'static> {
    fn from(value: i32) -> Self {
        QueryValue::Number(i64::from(value))
    }
}

impl From<u32> for QueryValue<'static> {
    fn from(value: u32) -> Self {
        QueryValue::Number(i64::from(value))
    }
}

impl From<usize> for QueryValue<'static> {
    fn from(value: usize) -> Self {
        QueryValue::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl<'a, T> From<Option<T>> for QueryValue<'a>
where
    T: Into<QueryValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryValue::Absent)
    }
}

/// Build a query string (without the leading `?`) from named values.
///
/// Values are trimmed; absent and blank values are omitted. Keys keep the
/// order of their first occurrence, and a repeated key replaces the earlier
/// value in place.
///
/// # Example
/// ```rust
/// use contracts::shared::query_string::build_query_string;
///
/// let query = build_query_string([("q", " acme "), ("state", ""), ("sort", "policy_number,desc")]);
/// assert_eq!(query, "q=acme&sort=policy_number%2Cdesc");
/// ```
pub fn build_query_string<'a, I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue<'a>>,
{
    let mut pairs: Vec<(String, String)> = Vec::new();

    for (key, value) in params {
        let Some(value) = value.into().normalized() else {
            continue;
        };
        let key = key.as_ref();
        match pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key.to_string(), value)),
        }
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Join a path and a query string into an href.
pub fn href_with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Parse a query string (with or without the leading `?`) into a map.
///
/// Each parameter is decoded on its own, so a malformed or nested one (e.g.
/// `utm[source]=mail`) is skipped without losing the rest. A repeated key
/// keeps its first value.
pub fn parse_query_map(query: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        match serde_qs::from_str::<BTreeMap<String, String>>(pair) {
            Ok(parsed) => {
                for (key, value) in parsed {
                    map.entry(key).or_insert(value);
                }
            }
            Err(err) => log::warn!("Ignoring malformed query parameter '{}': {}", pair, err),
        }
    }
    map
}

/// Leading-integer parse in the manner of JavaScript's `parseInt`:
/// leading whitespace, an optional sign, then as many digits as present.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a 0-based index, falling back when missing, invalid or negative.
pub fn parse_non_negative_int(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(parse_leading_int)
        .filter(|value| *value >= 0)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(fallback)
}

/// Parse a count, falling back when missing, invalid, zero or negative.
pub fn parse_positive_int(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(parse_leading_int)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(fallback)
}
