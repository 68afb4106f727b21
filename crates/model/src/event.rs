//! Template event-log models.

use serde::{Deserialize, Serialize};

/// Filters for GET /v1/console/card-templates/{id}/logs.
///
/// Each set field becomes a `filters[<name>]` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLogFilters {
    pub device: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub event_type: Option<String>,
}

impl EventLogFilters {
    /// Set fields as `(filters[name], value)` pairs, in a fixed order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        [
            ("device", &self.device),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("event_type", &self.event_type),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| (format!("filters[{name}]"), v.clone()))
        })
        .collect()
    }
}

/// A single event recorded against a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Page position reported alongside event logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Response body of the event-log endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventLogPage {
    #[serde(default)]
    pub logs: Vec<Event>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_only_set_fields() {
        let filters = EventLogFilters {
            device: Some("mobile".into()),
            event_type: Some("install".into()),
            ..Default::default()
        };

        assert_eq!(
            filters.to_query_pairs(),
            vec![
                ("filters[device]".to_string(), "mobile".to_string()),
                ("filters[event_type]".to_string(), "install".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filters() {
        assert!(EventLogFilters::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_page_from_wire() {
        let page: EventLogPage = serde_json::from_value(json!({
            "logs": [{
                "type": "install",
                "timestamp": "2025-01-01T00:00:00Z",
                "user_id": "u1",
                "metadata": {"device": "mobile"}
            }],
            "pagination": {"current_page": 1, "per_page": 20, "total_pages": 1, "total_count": 1}
        }))
        .unwrap();

        assert_eq!(page.logs.len(), 1);
        assert_eq!(page.logs[0].event_type.as_deref(), Some("install"));
        assert_eq!(page.pagination.unwrap().total_count, Some(1));
    }
}
