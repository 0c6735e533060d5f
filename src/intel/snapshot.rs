//! Intel Snapshot Model
//!
//! Serde model for the aggregated threat-intelligence payload served by
//! `/api/lucy/intel`. The remote schema is loosely typed and versionable:
//! every field is optional, unknown fields are ignored, and absent lists
//! deserialize to empty. Snapshots are fetched fresh per invocation,
//! rendered once, and discarded.

use serde::Deserialize;

/// One aggregated threat-intelligence snapshot.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntelSnapshot {
    pub total_banned: Option<u64>,
    pub new_bans_24h: Option<u64>,
    #[serde(rename = "highScoreIPs")]
    pub high_score_ips: Option<u64>,
    pub ml_events_24h: Option<u64>,
    pub ssh_attempts_24h: Option<u64>,
    pub ml_breakdown: Vec<DetectionCount>,
    pub recent_ml_events: Vec<RecentEvent>,
    pub top_countries: Vec<CountryCount>,
    pub top_patterns: Vec<PatternCount>,
}

/// One entry of the detection breakdown: what kinds of activity the system
/// caught, by severity.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectionCount {
    pub severity: String,
    pub label: String,
    pub count: u64,
}

/// One recent detection event. Location, organization, and pattern are all
/// optional and are omitted from rendering when absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecentEvent {
    pub label: String,
    pub severity: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub org: Option<String>,
    pub pattern: Option<String>,
}

/// Per-country event count.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Per-pattern probe count (most probed paths).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatternCount {
    pub pattern: String,
    pub count: u64,
}
