//! Display helpers shared by the content panels.
//!
//! Pure string/number formatting so panel views stay declarative and the
//! rules (percent rounding, timestamp trimming, severity tones) are testable.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Contradiction;

/// Number of placeholder cells the heat map shows when there is no data.
pub const PLACEHOLDER_HEAT_CELLS: usize = 12;

/// Heat map fill used when a contradiction has no severity.
const DEFAULT_HEAT_ALPHA: f64 = 0.3;

/// Render a 0.0–1.0 score as a whole percentage (`0.853` -> `"85"`).
/// Halves round away from zero (`0.625` -> `"63"`).
pub fn percent(value: f64) -> String {
    // `+ 0.0` folds a negative zero into `0`.
    format!("{}", (value * 100.0).round() + 0.0)
}

/// A score worth displaying: present, non-zero and not NaN.
pub fn shown_score(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Trim an ISO-8601 timestamp to `YYYY-MM-DD HH:MM:SS`. Unrecognized input is
/// returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() < 19 {
        return raw.to_owned();
    }
    let shape_ok = bytes[..19].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T' || *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return raw.to_owned();
    }
    format!("{} {}", &raw[..10], &raw[11..19])
}

/// `"by {author}"` fallback for theories without one.
pub fn author_label(author: Option<&str>) -> &str {
    author.filter(|a| !a.is_empty()).unwrap_or("Unknown")
}

/// Citation status badge, e.g. `"VALIDATED (85%)"`.
pub fn citation_status_label(status: &str, confidence: Option<f64>) -> String {
    let status = status.to_uppercase();
    match shown_score(confidence) {
        Some(score) => format!("{status} ({}%)", percent(score)),
        None => status,
    }
}

/// CSS class modifier for a citation status.
pub fn citation_status_class(status: &str) -> String {
    let slug: String = status
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("citation-status citation-status--{slug}")
}

/// Icon shown beside a provenance event.
pub fn event_icon(event_type: &str) -> &'static str {
    match event_type {
        "created" => "✨",
        "updated" => "📝",
        "citation_added" => "➕",
        "citation_validated" => "✓",
        _ => "•",
    }
}

/// Upper-cased event type with underscores shown as spaces.
pub fn event_label(event_type: &str) -> String {
    event_type.to_uppercase().replace('_', " ")
}

/// Pretty-printed event payload, or `None` when there is nothing to show.
pub fn event_data_json(data: Option<&serde_json::Value>) -> Option<String> {
    let value = data?;
    let has_content = match value {
        serde_json::Value::Object(map) => !map.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::String(s) => !s.is_empty(),
        _ => false,
    };
    if !has_content {
        return None;
    }
    serde_json::to_string_pretty(value).ok()
}

/// Provenance rows fade in from 0.8 to just under 1.0 down the list.
pub fn event_opacity(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = index as f64 / len as f64;
    0.8 + ratio * 0.2
}

/// Color band for a contradiction's severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityTone {
    Normal,
    Warning,
    Error,
}

impl SeverityTone {
    pub fn of(severity: Option<f64>) -> Self {
        let s = severity.unwrap_or(0.0);
        if s >= 0.7 {
            Self::Error
        } else if s >= 0.4 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn css_color(self) -> &'static str {
        match self {
            Self::Normal => "var(--terminal-fg)",
            Self::Warning => "var(--terminal-warning)",
            Self::Error => "var(--terminal-error)",
        }
    }
}

/// `"NN"` severity percentage, treating a missing severity as zero.
pub fn severity_percent(severity: Option<f64>) -> String {
    percent(severity.unwrap_or(0.0))
}

/// One square of the contradiction heat map.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
    pub key: String,
    pub label: String,
    pub background: String,
    pub border: &'static str,
    pub title: Option<String>,
}

/// Heat map cells: one per contradiction, or a fixed row of placeholders
/// when there are none.
pub fn heat_cells(contradictions: &[Contradiction]) -> Vec<HeatCell> {
    if contradictions.is_empty() {
        return (0..PLACEHOLDER_HEAT_CELLS)
            .map(|i| HeatCell {
                key: format!("placeholder-{i}"),
                label: "-".to_owned(),
                background: "rgba(0, 255, 0, 0.1)".to_owned(),
                border: "var(--terminal-border)",
                title: None,
            })
            .collect();
    }
    contradictions
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let alpha = shown_score(c.severity).unwrap_or(DEFAULT_HEAT_ALPHA);
            HeatCell {
                key: c.id.to_string(),
                label: (idx + 1).to_string(),
                background: format!("rgba(255, 0, 0, {alpha})"),
                border: SeverityTone::of(c.severity).css_color(),
                title: Some(format!("Severity: {}%", severity_percent(c.severity))),
            }
        })
        .collect()
}
