//! Label Voice Table
//!
//! Translates raw machine-readable detection labels into the short
//! narrative phrases Lucy speaks in. Labels outside the table fall back to
//! a mechanical transform so the function stays total.

/// Fixed label -> phrase table.
const LABEL_VOICE: &[(&str, &str)] = &[
    ("honeypot_hit", "something walked into a trap"),
    ("scanner_ua", "a known scanner probed the surface"),
    ("path_traversal", "something tried to climb through the walls"),
    ("scanner_tool", "an automated tool swept the endpoints"),
    ("credential_stuffing", "a credential harvesting attempt"),
    ("low_and_slow", "a patient, methodical probe — low and slow"),
    ("ban_evasion", "a banned entity tried to return"),
    ("admin_honeypot", "someone targeted the admin paths"),
    ("ip_rotation", "rapid identity rotation detected"),
];

/// Translate a detection label into its narrative phrase.
///
/// Total over all input strings: unknown labels get underscores replaced
/// with spaces, and a label that reduces to nothing still yields a phrase.
pub fn voice(label: &str) -> String {
    if let Some((_, phrase)) = LABEL_VOICE.iter().find(|(l, _)| *l == label) {
        return (*phrase).to_string();
    }

    let spoken = label.replace('_', " ").trim().to_string();
    if spoken.is_empty() {
        "unclassified signal".to_string()
    } else {
        spoken
    }
}
