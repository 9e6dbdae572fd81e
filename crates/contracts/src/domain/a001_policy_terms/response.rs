use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One row of the policy terms list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTermSummary {
    pub id: Uuid,
    pub policy_number: String,
    pub insured_name: String,
    pub term_number: i32,
    pub state: String,
    pub status: String,
    pub effective_from_date: NaiveDate,
    pub effective_to_date: NaiveDate,
    /// Decimal amount as text, e.g. "1250.40"
    #[serde(deserialize_with = "decimal_text")]
    pub balance_due: String,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_payment_date: Option<NaiveDate>,
}

/// Full record of a single policy term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTermDetail {
    #[serde(flatten)]
    pub summary: PolicyTermSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTermPage {
    pub items: Vec<PolicyTermSummary>,
    pub page: u32,
    pub size: u32,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: u32,
}

impl PolicyTermPage {
    /// Total across all pages; the item count when the API omitted it.
    pub fn total_elements(&self) -> u64 {
        self.total_elements.unwrap_or(self.items.len() as u64)
    }
}

/// Accepts a JSON number or string and keeps it as text.
fn decimal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => format!("{:.2}", value),
        Decimal::Text(text) => text,
    })
}
