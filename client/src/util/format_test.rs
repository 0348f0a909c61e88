use super::*;

fn contradiction(id: i64, severity: Option<f64>) -> Contradiction {
    Contradiction {
        id,
        contradiction_text: format!("contradiction {id}"),
        severity,
        created_at: "2024-01-01T00:00:00".to_owned(),
    }
}

// =============================================================
// Scores
// =============================================================

#[test]
fn percent_rounds_to_whole_numbers() {
    assert_eq!(percent(0.85), "85");
    assert_eq!(percent(0.123), "12");
    assert_eq!(percent(1.0), "100");
    assert_eq!(percent(0.0), "0");
    assert_eq!(percent(0.625), "63");
    assert_eq!(percent(0.375), "38");
    assert_eq!(percent(-0.001), "0");
}

#[test]
fn shown_score_hides_missing_and_zero() {
    assert_eq!(shown_score(Some(0.4)), Some(0.4));
    assert_eq!(shown_score(Some(0.0)), None);
    assert_eq!(shown_score(Some(f64::NAN)), None);
    assert_eq!(shown_score(None), None);
}

#[test]
fn citation_status_label_appends_confidence() {
    assert_eq!(citation_status_label("validated", Some(0.85)), "VALIDATED (85%)");
    assert_eq!(citation_status_label("pending", None), "PENDING");
    assert_eq!(citation_status_label("error", Some(0.0)), "ERROR");
}

#[test]
fn citation_status_class_slugs_status() {
    assert_eq!(citation_status_class("needs_review"), "citation-status citation-status--needs-review");
    assert_eq!(citation_status_class("Validated"), "citation-status citation-status--validated");
}

// =============================================================
// Text
// =============================================================

#[test]
fn format_timestamp_trims_iso_strings() {
    assert_eq!(format_timestamp("2024-03-01T10:20:30.123456+00:00"), "2024-03-01 10:20:30");
    assert_eq!(format_timestamp("2024-03-01T10:20:30"), "2024-03-01 10:20:30");
    assert_eq!(format_timestamp("2024-03-01 10:20:30Z"), "2024-03-01 10:20:30");
}

#[test]
fn format_timestamp_passes_through_unrecognized_input() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2024-03-01"), "2024-03-01");
    assert_eq!(format_timestamp("2024/03/01T10:20:30"), "2024/03/01T10:20:30");
}

#[test]
fn author_label_falls_back_to_unknown() {
    assert_eq!(author_label(Some("Curie")), "Curie");
    assert_eq!(author_label(Some("")), "Unknown");
    assert_eq!(author_label(None), "Unknown");
}

// =============================================================
// Provenance
// =============================================================

#[test]
fn event_icons_match_known_types() {
    assert_eq!(event_icon("created"), "✨");
    assert_eq!(event_icon("updated"), "📝");
    assert_eq!(event_icon("citation_added"), "➕");
    assert_eq!(event_icon("citation_validated"), "✓");
    assert_eq!(event_icon("validation_completed"), "•");
}

#[test]
fn event_label_upper_cases_and_spaces() {
    assert_eq!(event_label("citation_added"), "CITATION ADDED");
    assert_eq!(event_label("validation_run_completed"), "VALIDATION RUN COMPLETED");
    assert_eq!(event_label("created"), "CREATED");
}

#[test]
fn event_data_json_skips_empty_payloads() {
    assert_eq!(event_data_json(None), None);
    assert_eq!(event_data_json(Some(&serde_json::json!({}))), None);
    assert_eq!(event_data_json(Some(&serde_json::Value::Null)), None);
    assert_eq!(event_data_json(Some(&serde_json::json!(5))), None);

    let shown = event_data_json(Some(&serde_json::json!({ "citation_id": 4 }))).unwrap();
    assert_eq!(shown, "{\n  \"citation_id\": 4\n}");
}

#[test]
fn event_opacity_ramps_down_the_list() {
    assert!((event_opacity(0, 4) - 0.8).abs() < 1e-9);
    assert!((event_opacity(2, 4) - 0.9).abs() < 1e-9);
    assert!(event_opacity(3, 4) < 1.0);
    assert!((event_opacity(0, 0) - 1.0).abs() < 1e-9);
}

// =============================================================
// Heat map
// =============================================================

#[test]
fn severity_tone_bands() {
    assert_eq!(SeverityTone::of(Some(0.9)), SeverityTone::Error);
    assert_eq!(SeverityTone::of(Some(0.7)), SeverityTone::Error);
    assert_eq!(SeverityTone::of(Some(0.5)), SeverityTone::Warning);
    assert_eq!(SeverityTone::of(Some(0.1)), SeverityTone::Normal);
    assert_eq!(SeverityTone::of(None), SeverityTone::Normal);
    assert_eq!(SeverityTone::Error.css_color(), "var(--terminal-error)");
}

#[test]
fn heat_map_without_contradictions_shows_twelve_placeholders() {
    let cells = heat_cells(&[]);
    assert_eq!(cells.len(), PLACEHOLDER_HEAT_CELLS);
    assert_eq!(cells.len(), 12);
    assert!(cells.iter().all(|c| c.label == "-" && c.title.is_none()));
    assert!(cells.iter().all(|c| c.border == "var(--terminal-border)"));
}

#[test]
fn heat_map_has_one_numbered_cell_per_contradiction() {
    let cells = heat_cells(&[contradiction(10, Some(0.75)), contradiction(11, None)]);
    assert_eq!(cells.len(), 2);

    assert_eq!(cells[0].key, "10");
    assert_eq!(cells[0].label, "1");
    assert_eq!(cells[0].background, "rgba(255, 0, 0, 0.75)");
    assert_eq!(cells[0].border, "var(--terminal-error)");
    assert_eq!(cells[0].title.as_deref(), Some("Severity: 75%"));

    assert_eq!(cells[1].label, "2");
    assert_eq!(cells[1].background, "rgba(255, 0, 0, 0.3)");
    assert_eq!(cells[1].border, "var(--terminal-fg)");
    assert_eq!(cells[1].title.as_deref(), Some("Severity: 0%"));
}
