//! Translation of filter selections into outgoing query pairs.

/// Sentinel for a filter control that has no selection. Entries with this
/// value never reach the outgoing query.
pub const NOT_SELECTED: &str = "NotSelected";

/// Filter selections for the vacancy listing.
///
/// Keys mirror the query parameters of the listing endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterSet {
    pub text: Option<String>,
    pub employment: Option<String>,
    pub schedule: Option<String>,
    pub experience: Option<String>,
    pub area: Option<String>,
}

impl FilterSet {
    /// Active filters as ordered query pairs. Absent, blank, and
    /// [`NOT_SELECTED`] entries are omitted entirely.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let entries = [
            ("text", &self.text),
            ("employment", &self.employment),
            ("schedule", &self.schedule),
            ("experience", &self.experience),
            ("area", &self.area),
        ];

        entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Some(value) if !value.is_empty() && value.as_str() != NOT_SELECTED => {
                    Some((key.to_string(), value.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_filter_serializes() {
        let filters = FilterSet {
            employment: Some("full".to_string()),
            ..FilterSet::default()
        };

        assert_eq!(
            filters.to_query_pairs(),
            vec![("employment".to_string(), "full".to_string())]
        );
    }

    #[test]
    fn test_not_selected_is_omitted() {
        let filters = FilterSet {
            employment: Some(NOT_SELECTED.to_string()),
            schedule: Some("remote".to_string()),
            ..FilterSet::default()
        };

        assert_eq!(
            filters.to_query_pairs(),
            vec![("schedule".to_string(), "remote".to_string())]
        );
    }

    #[test]
    fn test_blank_is_omitted() {
        let filters = FilterSet {
            text: Some(String::new()),
            ..FilterSet::default()
        };

        assert!(filters.to_query_pairs().is_empty());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_empty_set_yields_no_pairs() {
        assert!(FilterSet::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_pair_order_is_stable() {
        let filters = FilterSet {
            text: Some("rust".to_string()),
            employment: Some("full".to_string()),
            area: Some("1".to_string()),
            ..FilterSet::default()
        };

        let keys: Vec<String> = filters
            .to_query_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["text", "employment", "area"]);
    }
}
