//! Dashboard payload shapes.
//!
//! Field names are what the dashboard front-end reads; do not rename them.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;

pub const REVENUE_CONTRIBUTION: &str = "revenue_contribution";
pub const TOP_SONGS: &str = "top_songs";
pub const LANGUAGE_DIST: &str = "language_dist";
pub const ARTIST_PERF: &str = "artist_perf";
pub const EFFICIENCY: &str = "efficiency";
pub const ROYALTY_ADMIN: &str = "royalty_admin";

/// Every list the payload carries, in payload order
pub const PAYLOAD_LISTS: [&str; 6] = [
    REVENUE_CONTRIBUTION,
    TOP_SONGS,
    LANGUAGE_DIST,
    ARTIST_PERF,
    EFFICIENCY,
    ROYALTY_ADMIN,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueShare {
    pub platform: &'static str,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRevenue {
    pub song: Option<String>,
    pub revenue: f64,
    pub platform: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistRevenue {
    pub artist: Option<String>,
    pub platform: &'static str,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamEfficiency {
    pub song: Option<String>,
    pub streams: f64,
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyAdmin {
    pub song: Option<String>,
    pub platform: &'static str,
    pub royalty: f64,
    pub admin: f64,
}

/// All six dashboard panels before sanitization
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub revenue_contribution: Vec<RevenueShare>,
    pub top_songs: Vec<SongRevenue>,
    pub language_dist: Vec<LanguageCount>,
    pub artist_perf: Vec<ArtistRevenue>,
    pub efficiency: Vec<StreamEfficiency>,
    pub royalty_admin: Vec<RoyaltyAdmin>,
}

impl DashboardPayload {
    /// Serialize to JSON. NaN numbers and missing text both come out as
    /// `null`, which the sanitizer then replaces.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Payload returned when the pipeline fails: every list empty, plus the error.
pub fn fallback_payload(error: &str) -> Value {
    let mut payload = serde_json::Map::new();
    for key in PAYLOAD_LISTS {
        payload.insert(key.to_string(), json!([]));
    }
    payload.insert("error".to_string(), json!(error));
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_payload_shape() {
        let payload = fallback_payload("Report for Wynk not found");

        for key in PAYLOAD_LISTS {
            assert_eq!(payload[key], json!([]), "{key} should be empty");
        }
        assert_eq!(payload["error"], "Report for Wynk not found");
        assert_eq!(payload.as_object().map(|o| o.len()), Some(7));
    }

    #[test]
    fn test_to_json_uses_dashboard_field_names() {
        let payload = DashboardPayload {
            royalty_admin: vec![RoyaltyAdmin {
                song: None,
                platform: "Wynk",
                royalty: 1.5,
                admin: f64::NAN,
            }],
            ..Default::default()
        };
        let value = payload.to_json().unwrap();

        assert_eq!(
            value["royalty_admin"][0],
            json!({"song": null, "platform": "Wynk", "royalty": 1.5, "admin": null})
        );
        assert_eq!(value["top_songs"], json!([]));
    }
}
