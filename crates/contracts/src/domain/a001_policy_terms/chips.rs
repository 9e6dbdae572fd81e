use super::url_state::{FilterField, FilterSet, UrlState};

/// Identifies a removable active-filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterChipKey {
    Keyword,
    State,
    Status,
    DateRange,
}

impl FilterChipKey {
    /// Fields cleared when the chip is removed.
    pub fn fields(self) -> &'static [FilterField] {
        match self {
            FilterChipKey::Keyword => &[FilterField::Keyword],
            FilterChipKey::State => &[FilterField::State],
            FilterChipKey::Status => &[FilterField::Status],
            FilterChipKey::DateRange => &[FilterField::DateFrom, FilterField::DateTo],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterChipKey::Keyword => "q",
            FilterChipKey::State => "state",
            FilterChipKey::Status => "status",
            FilterChipKey::DateRange => "date_range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: FilterChipKey,
    pub label: String,
}

/// Everything the filter bar renders from the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    pub chips: Vec<FilterChip>,
    /// Query string the next commit would navigate to.
    pub query_preview: String,
}

pub fn active_chips(draft: &FilterSet) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    let mut push = |key: FilterChipKey, caption: &str, value: &str| {
        let value = value.trim();
        if !value.is_empty() {
            chips.push(FilterChip {
                key,
                label: format!("{}: {}", caption, value),
            });
        }
    };
    push(FilterChipKey::Keyword, "Keyword", &draft.q);
    push(FilterChipKey::State, "State", &draft.state);
    push(FilterChipKey::Status, "Status", &draft.status);

    if draft.has_date_range() {
        let endpoint = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                "…".to_string()
            } else {
                value.to_string()
            }
        };
        chips.push(FilterChip {
            key: FilterChipKey::DateRange,
            label: format!(
                "{}: {} to {}",
                draft.date_field.label(),
                endpoint(&draft.date_from),
                endpoint(&draft.date_to)
            ),
        });
    }

    chips
}

/// Next URL state for a draft: unchanged filters keep the current page,
/// changed filters start over at page 0.
pub fn next_url_state(draft: &FilterSet, current: &UrlState) -> UrlState {
    let filters = draft.normalized();
    if filters == current.filters.normalized() {
        current.clone()
    } else {
        UrlState {
            filters,
            page: 0,
            size: current.size,
            sort: current.sort.clone(),
        }
    }
}

pub fn derive_view(draft: &FilterSet, current: &UrlState) -> FilterView {
    FilterView {
        chips: active_chips(draft),
        query_preview: next_url_state(draft, current).to_query_string(),
    }
}
