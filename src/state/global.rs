//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the dataset model
//! and the filtering logic everything on screen derives from.

use leptos::*;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Full dataset as fetched; written once by the mount effect
    pub records: RwSignal<Vec<Record>>,
    /// Current selection for each facet (empty string = no filter)
    pub filters: RwSignal<FilterState>,
    /// Records passing every active facet filter, in dataset order
    pub filtered: Memo<Vec<Record>>,
    /// True while the initial fetch is in flight
    pub loading: RwSignal<bool>,
}

/// One row of the fetched dataset.
///
/// The endpoint makes no promises about its schema: any field may be absent,
/// null, blank, or occasionally the wrong JSON type (years arrive both as
/// numbers and as strings). Facet fields are therefore normalized to their
/// string form at deserialization and the measures to `Option<f64>`, so the
/// rest of the app can compare and chart them without per-site coercion.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub topic: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sector: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pestle: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub swot: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub intensity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likelihood: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub relevance: Option<f64>,
}

/// Accept a string, number, or null and yield its string form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Accept a number, numeric string, blank string, or null.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// One of the nine filterable fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    EndYear,
    Topic,
    Sector,
    Region,
    Pestle,
    Source,
    Swot,
    Country,
    City,
}

impl Facet {
    pub const ALL: [Facet; 9] = [
        Facet::EndYear,
        Facet::Topic,
        Facet::Sector,
        Facet::Region,
        Facet::Pestle,
        Facet::Source,
        Facet::Swot,
        Facet::Country,
        Facet::City,
    ];

    /// Label shown above the control and in its unselected option
    pub fn label(self) -> &'static str {
        match self {
            Facet::EndYear => "End Year",
            Facet::Topic => "Topic",
            Facet::Sector => "Sector",
            Facet::Region => "Region",
            Facet::Pestle => "PEST",
            Facet::Source => "Source",
            Facet::Swot => "SWOT",
            Facet::Country => "Country",
            Facet::City => "City",
        }
    }

    /// The record field this facet filters on
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Facet::EndYear => &record.end_year,
            Facet::Topic => &record.topic,
            Facet::Sector => &record.sector,
            Facet::Region => &record.region,
            Facet::Pestle => &record.pestle,
            Facet::Source => &record.source,
            Facet::Swot => &record.swot,
            Facet::Country => &record.country,
            Facet::City => &record.city,
        }
    }
}

/// Current selection for every facet. Every key is always present; an empty
/// string means the facet is unselected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub end_year: String,
    pub topic: String,
    pub sector: String,
    pub region: String,
    pub pestle: String,
    pub source: String,
    pub swot: String,
    pub country: String,
    pub city: String,
}

impl FilterState {
    pub fn get(&self, facet: Facet) -> &str {
        match facet {
            Facet::EndYear => &self.end_year,
            Facet::Topic => &self.topic,
            Facet::Sector => &self.sector,
            Facet::Region => &self.region,
            Facet::Pestle => &self.pestle,
            Facet::Source => &self.source,
            Facet::Swot => &self.swot,
            Facet::Country => &self.country,
            Facet::City => &self.city,
        }
    }

    pub fn set(&mut self, facet: Facet, value: String) {
        match facet {
            Facet::EndYear => self.end_year = value,
            Facet::Topic => self.topic = value,
            Facet::Sector => self.sector = value,
            Facet::Region => self.region = value,
            Facet::Pestle => self.pestle = value,
            Facet::Source => self.source = value,
            Facet::Swot => self.swot = value,
            Facet::Country => self.country = value,
            Facet::City => self.city = value,
        }
    }

    /// A record passes when every facet is either unselected or string-equal
    /// to the record's value. All nine conditions are ANDed.
    pub fn matches(&self, record: &Record) -> bool {
        Facet::ALL.iter().all(|&facet| {
            let wanted = self.get(facet);
            wanted.is_empty() || wanted == facet.value_of(record)
        })
    }
}

/// Distinct non-blank values of one facet across the given records, in
/// first-seen order. Controls always scan the full dataset, so changing one
/// facet never alters the options offered by another.
pub fn distinct_values(records: &[Record], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let value = facet.value_of(record);
        if value.is_empty() {
            continue;
        }
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}

impl GlobalState {
    pub fn new() -> Self {
        let records = create_rw_signal(Vec::new());
        let filters = create_rw_signal(FilterState::default());

        // The filtered view is never stored independently; it tracks the
        // dataset and the filters and recomputes when either changes.
        let filtered = create_memo(move |_| {
            let filters = filters.get();
            records
                .get()
                .into_iter()
                .filter(|record: &Record| filters.matches(record))
                .collect::<Vec<Record>>()
        });

        Self {
            records,
            filters,
            filtered,
            loading: create_rw_signal(false),
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, topic: &str) -> Record {
        Record {
            country: country.to_string(),
            topic: topic.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_default_filters_match_everything() {
        let filters = FilterState::default();
        let records = vec![record("USA", "Energy"), record("India", "Oil"), Record::default()];
        assert!(records.iter().all(|r| filters.matches(r)));
    }

    #[test]
    fn test_single_facet_equality() {
        let mut filters = FilterState::default();
        filters.set(Facet::Country, "USA".to_string());

        assert!(filters.matches(&record("USA", "Energy")));
        assert!(!filters.matches(&record("India", "Energy")));
        // Blank field does not match a non-empty filter
        assert!(!filters.matches(&Record::default()));
    }

    #[test]
    fn test_facets_are_anded() {
        let mut filters = FilterState::default();
        filters.set(Facet::Country, "USA".to_string());
        filters.set(Facet::Topic, "Energy".to_string());

        assert!(filters.matches(&record("USA", "Energy")));
        assert!(!filters.matches(&record("USA", "Oil")));
        assert!(!filters.matches(&record("India", "Energy")));
    }

    #[test]
    fn test_get_set_round_trip_for_all_facets() {
        let mut filters = FilterState::default();
        for facet in Facet::ALL {
            assert_eq!(filters.get(facet), "");
            filters.set(facet, "x".to_string());
            assert_eq!(filters.get(facet), "x");
        }
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let records = vec![
            record("USA", "Energy"),
            record("India", "Oil"),
            record("USA", "Energy"),
            record("China", "Oil"),
        ];

        assert_eq!(
            distinct_values(&records, Facet::Country),
            vec!["USA", "India", "China"]
        );
        assert_eq!(distinct_values(&records, Facet::Topic), vec!["Energy", "Oil"]);
    }

    #[test]
    fn test_distinct_values_skip_blanks() {
        let records = vec![record("", "Energy"), record("USA", "")];
        assert_eq!(distinct_values(&records, Facet::Country), vec!["USA"]);
        assert_eq!(distinct_values(&records, Facet::Topic), vec!["Energy"]);
        assert!(distinct_values(&records, Facet::City).is_empty());
    }

    #[test]
    fn test_filtered_view_tracks_records_and_filters() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        state
            .records
            .set(vec![record("USA", "Energy"), record("India", "Oil")]);

        // No filters: the view is the whole dataset
        assert_eq!(state.filtered.get_untracked().len(), 2);

        state
            .filters
            .update(|f| f.set(Facet::Country, "USA".to_string()));
        let filtered = state.filtered.get_untracked();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].country, "USA");

        // Back to unselected: identity again
        state.filters.set(FilterState::default());
        assert_eq!(state.filtered.get_untracked().len(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_deserialize_lenient_types() {
        // end_year as a number, intensity as a numeric string
        let json = r#"{"end_year": 2022, "topic": "gas", "intensity": "6", "likelihood": 3}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.end_year, "2022");
        assert_eq!(record.topic, "gas");
        assert_eq!(record.intensity, Some(6.0));
        assert_eq!(record.likelihood, Some(3.0));
        assert_eq!(record.relevance, None);
    }

    #[test]
    fn test_deserialize_blank_and_null_fields() {
        let json = r#"{"end_year": "", "sector": null, "intensity": "", "relevance": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.end_year, "");
        assert_eq!(record.sector, "");
        assert_eq!(record.intensity, None);
        assert_eq!(record.relevance, None);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(record, Record::default());
    }
}
