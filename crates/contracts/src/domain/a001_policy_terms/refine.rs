use chrono::NaiveDate;

use super::response::PolicyTermSummary;
use super::url_state::{DateField, FilterSet};

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Ignoring unparseable date bound '{}': {}", raw, err);
            None
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Narrow a fetched page to the rows matching `filters`.
///
/// State and status match by case-insensitive substring; the date range is
/// inclusive and applies to the selected date field.
pub fn refine_page(items: &[PolicyTermSummary], filters: &FilterSet) -> Vec<PolicyTermSummary> {
    let state = filters.state.trim().to_lowercase();
    let status = filters.status.trim().to_lowercase();
    let from = parse_date(&filters.date_from);
    let to = parse_date(&filters.date_to);

    items
        .iter()
        .filter(|term| contains_ignore_case(&term.state, &state))
        .filter(|term| contains_ignore_case(&term.status, &status))
        .filter(|term| {
            let date = match filters.date_field {
                DateField::Effective => term.effective_from_date,
                DateField::Expiration => term.effective_to_date,
            };
            from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn term(state: &str, status: &str, from: (i32, u32, u32), to: (i32, u32, u32)) -> PolicyTermSummary {
        PolicyTermSummary {
            id: Uuid::new_v4(),
            policy_number: "OH-000001".into(),
            insured_name: "Ava Garcia".into(),
            term_number: 1,
            state: state.into(),
            status: status.into(),
            effective_from_date: NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            effective_to_date: NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
            balance_due: "100.00".into(),
            next_due_date: None,
            last_payment_date: None,
        }
    }

    fn sample() -> Vec<PolicyTermSummary> {
        vec![
            term("CA", "ACTIVE", (2023, 1, 1), (2023, 12, 31)),
            term("TX", "EXPIRED", (2022, 6, 1), (2023, 5, 31)),
            term("NY", "NON_RENEWED", (2024, 2, 1), (2025, 1, 31)),
        ]
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        assert_eq!(refine_page(&sample(), &FilterSet::default()).len(), 3);
    }

    #[test]
    fn test_state_and_status_substring() {
        let filters = FilterSet {
            status: "renew".into(),
            ..FilterSet::default()
        };
        let rows = refine_page(&sample(), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "NY");

        let filters = FilterSet {
            state: " tx ".into(),
            ..FilterSet::default()
        };
        assert_eq!(refine_page(&sample(), &filters)[0].status, "EXPIRED");
    }

    #[test]
    fn test_expiration_range_is_inclusive() {
        let filters = FilterSet {
            date_from: "2023-05-31".into(),
            date_to: "2023-12-31".into(),
            ..FilterSet::default()
        };
        let states: Vec<_> = refine_page(&sample(), &filters)
            .into_iter()
            .map(|t| t.state)
            .collect();
        assert_eq!(states, vec!["CA", "TX"]);
    }

    #[test]
    fn test_effective_range_uses_start_date() {
        let filters = FilterSet {
            date_field: DateField::Effective,
            date_from: "2024-01-01".into(),
            ..FilterSet::default()
        };
        let rows = refine_page(&sample(), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "NY");
    }

    #[test]
    fn test_unparseable_bound_is_ignored() {
        let filters = FilterSet {
            date_to: "not-a-date".into(),
            ..FilterSet::default()
        };
        assert_eq!(refine_page(&sample(), &filters).len(), 3);
    }
}
