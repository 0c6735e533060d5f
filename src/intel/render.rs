//! Intel Feed Renderer
//!
//! Turns an `IntelSnapshot` into the fixed-format text block injected into
//! the composer's context. Rendering is deterministic and order-preserving:
//! header, headline counters, detection breakdown, recent signals (capped),
//! origin countries, most probed paths (capped), footer. Sections backed by
//! empty lists are omitted entirely, and the caps keep the output bounded
//! no matter how large the snapshot is.

use super::snapshot::IntelSnapshot;
use super::voice::voice;

/// Opening marker line of the feed.
pub const FEED_HEADER: &str = "=== VOID_INTEL_FEED ===";

/// Closing marker line of the feed.
pub const FEED_FOOTER: &str = "=== END_INTEL ===";

/// At most this many recent signal lines are rendered.
const MAX_RECENT_SIGNALS: usize = 5;

/// At most this many probed-path lines are rendered.
const MAX_PROBED_PATHS: usize = 3;

/// Render a snapshot into the intel feed text block.
pub fn render_feed(snapshot: &IntelSnapshot) -> String {
    let mut lines: Vec<String> = vec![FEED_HEADER.to_string()];

    // Headline counters, missing values default to 0.
    lines.push(format!(
        "entities_in_watchlist: {}",
        snapshot.total_banned.unwrap_or(0)
    ));
    lines.push(format!(
        "new_intercepts_24h: {}",
        snapshot.new_bans_24h.unwrap_or(0)
    ));
    lines.push(format!(
        "high_threat_signatures: {}",
        snapshot.high_score_ips.unwrap_or(0)
    ));
    lines.push(format!(
        "ml_anomalies_24h: {}",
        snapshot.ml_events_24h.unwrap_or(0)
    ));
    lines.push(format!(
        "ssh_probes_24h: {}",
        snapshot.ssh_attempts_24h.unwrap_or(0)
    ));

    // Detection breakdown: what kinds of activity the system caught.
    if !snapshot.ml_breakdown.is_empty() {
        lines.push(String::new());
        lines.push("detection_breakdown:".to_string());
        for entry in &snapshot.ml_breakdown {
            lines.push(format!(
                "  [{}] {} × {}",
                entry.severity,
                voice(&entry.label),
                entry.count
            ));
        }
    }

    // Recent signals: the actual stories, capped.
    if !snapshot.recent_ml_events.is_empty() {
        lines.push(String::new());
        lines.push("recent_signals:".to_string());
        for event in snapshot.recent_ml_events.iter().take(MAX_RECENT_SIGNALS) {
            let location: Vec<&str> = [event.city.as_deref(), event.country.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect();
            let location = if location.is_empty() {
                "unknown origin".to_string()
            } else {
                location.join(", ")
            };
            let org = event
                .org
                .as_deref()
                .filter(|o| !o.is_empty())
                .map(|o| format!(" ({})", o))
                .unwrap_or_default();
            let pattern = event
                .pattern
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!(" targeting: {}", p))
                .unwrap_or_default();
            lines.push(format!(
                "  {} — {}{}{} [{}]",
                voice(&event.label),
                location,
                org,
                pattern,
                event.severity
            ));
        }
    }

    // Top source countries, as one comma-joined line.
    if !snapshot.top_countries.is_empty() {
        let countries = snapshot
            .top_countries
            .iter()
            .map(|c| format!("{}({})", c.country, c.count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(String::new());
        lines.push(format!("origin_countries: {}", countries));
    }

    // Most probed paths, capped.
    if !snapshot.top_patterns.is_empty() {
        lines.push(String::new());
        lines.push("most_probed_paths:".to_string());
        for entry in snapshot.top_patterns.iter().take(MAX_PROBED_PATHS) {
            lines.push(format!("  {} × {}", entry.pattern, entry.count));
        }
    }

    lines.push(String::new());
    lines.push(FEED_FOOTER.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::snapshot::{CountryCount, DetectionCount, PatternCount, RecentEvent};

    fn event(label: &str, severity: &str) -> RecentEvent {
        RecentEvent {
            label: label.to_string(),
            severity: severity.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_snapshot_renders_zeroed_counters() {
        let rendered = render_feed(&IntelSnapshot::default());
        assert!(rendered.starts_with(FEED_HEADER));
        assert!(rendered.ends_with(FEED_FOOTER));
        assert!(rendered.contains("entities_in_watchlist: 0"));
        assert!(rendered.contains("ssh_probes_24h: 0"));
        assert!(!rendered.contains("detection_breakdown:"));
        assert!(!rendered.contains("recent_signals:"));
        assert!(!rendered.contains("origin_countries:"));
        assert!(!rendered.contains("most_probed_paths:"));
    }

    #[test]
    fn test_headline_counters_and_countries() {
        let snapshot = IntelSnapshot {
            total_banned: Some(12),
            new_bans_24h: Some(3),
            top_countries: vec![CountryCount {
                country: "RU".to_string(),
                count: 5,
            }],
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains("entities_in_watchlist: 12"));
        assert!(rendered.contains("new_intercepts_24h: 3"));
        assert!(rendered.contains("origin_countries: RU(5)"));
        assert!(!rendered.contains("detection_breakdown:"));
        assert!(!rendered.contains("recent_signals:"));
        assert!(!rendered.contains("most_probed_paths:"));
    }

    #[test]
    fn test_feed_from_wire_payload() {
        let snapshot: IntelSnapshot = serde_json::from_str(
            r#"{"totalBanned": 12, "newBans24h": 3, "topCountries": [{"country": "RU", "count": 5}]}"#,
        )
        .unwrap();
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains("entities_in_watchlist: 12"));
        assert!(rendered.contains("new_intercepts_24h: 3"));
        assert!(rendered.contains("origin_countries: RU(5)"));
        assert!(!rendered.contains("detection_breakdown:"));
        assert!(!rendered.contains("recent_signals:"));
        assert!(!rendered.contains("most_probed_paths:"));
    }

    #[test]
    fn test_breakdown_lines_use_voice() {
        let snapshot = IntelSnapshot {
            ml_breakdown: vec![DetectionCount {
                severity: "high".to_string(),
                label: "honeypot_hit".to_string(),
                count: 4,
            }],
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains("detection_breakdown:"));
        assert!(rendered.contains("  [high] something walked into a trap × 4"));
    }

    #[test]
    fn test_recent_signals_capped_at_five() {
        let snapshot = IntelSnapshot {
            recent_ml_events: (0..8).map(|_| event("scanner_ua", "low")).collect(),
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        let signal_lines = rendered
            .lines()
            .filter(|l| l.contains("a known scanner probed the surface"))
            .count();
        assert_eq!(signal_lines, 5);
    }

    #[test]
    fn test_probed_paths_capped_at_three() {
        let snapshot = IntelSnapshot {
            top_patterns: (0..6)
                .map(|i| PatternCount {
                    pattern: format!("/admin/{}", i),
                    count: i,
                })
                .collect(),
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        let path_lines = rendered.lines().filter(|l| l.contains("/admin/")).count();
        assert_eq!(path_lines, 3);
    }

    #[test]
    fn test_event_with_all_fields() {
        let snapshot = IntelSnapshot {
            recent_ml_events: vec![RecentEvent {
                label: "path_traversal".to_string(),
                severity: "critical".to_string(),
                city: Some("Amsterdam".to_string()),
                country: Some("NL".to_string()),
                org: Some("BadCloud BV".to_string()),
                pattern: Some("/../../etc/passwd".to_string()),
            }],
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains(
            "  something tried to climb through the walls — Amsterdam, NL (BadCloud BV) targeting: /../../etc/passwd [critical]"
        ));
    }

    #[test]
    fn test_event_missing_subfields_omitted_cleanly() {
        let snapshot = IntelSnapshot {
            recent_ml_events: vec![event("ban_evasion", "medium")],
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains("  a banned entity tried to return — unknown origin [medium]"));
        assert!(!rendered.contains("()"));
        assert!(!rendered.contains("targeting:"));
    }

    #[test]
    fn test_country_only_location() {
        let snapshot = IntelSnapshot {
            recent_ml_events: vec![RecentEvent {
                label: "ip_rotation".to_string(),
                severity: "high".to_string(),
                country: Some("CN".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let rendered = render_feed(&snapshot);
        assert!(rendered.contains("rapid identity rotation detected — CN [high]"));
    }
}
