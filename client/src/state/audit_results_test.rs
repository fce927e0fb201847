use super::*;

fn result(uuid: &str, created_at: i64, metrics: &[(&str, f64)]) -> AuditResult {
    AuditResult {
        uuid: uuid.to_owned(),
        created_at,
        metrics: metrics.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect(),
    }
}

// =============================================================
// MetricType
// =============================================================

#[test]
fn metric_ids_round_trip_through_from_id() {
    for metric in MetricType::ALL {
        assert_eq!(MetricType::from_id(metric.id()), Some(metric));
    }
}

#[test]
fn unknown_metric_id_is_rejected() {
    assert_eq!(MetricType::from_id("WPTMetricUnknown"), None);
}

#[test]
fn metric_kinds_cover_all_three_formats() {
    assert_eq!(MetricType::FirstViewTti.kind(), MetricKind::Time);
    assert_eq!(MetricType::FirstViewSpeedIndex.kind(), MetricKind::Number);
    assert_eq!(MetricType::LighthousePerformance.kind(), MetricKind::Percent);
}

#[test]
fn message_ids_embed_metric_id_verbatim() {
    assert_eq!(MetricType::FirstViewTti.name_message_id(), "Metrics.WPTMetricFirstViewTTI.name");
    assert_eq!(
        MetricType::LighthousePerformance.description_message_id(),
        "Metrics.WPTMetricLighthousePerformance.description"
    );
}

// =============================================================
// as_graph_data
// =============================================================

#[test]
fn graph_data_is_sorted_by_date() {
    let results = vec![
        result("b", 2_000, &[("WPTMetricFirstViewTTI", 2.0)]),
        result("a", 1_000, &[("WPTMetricFirstViewTTI", 1.0)]),
        result("c", 3_000, &[("WPTMetricFirstViewTTI", 3.0)]),
    ];
    let dates: Vec<i64> = as_graph_data(&results).iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![1_000, 2_000, 3_000]);
}

#[test]
fn graph_data_drops_unknown_metric_keys() {
    let results = vec![result("a", 1, &[("WPTMetricFirstViewTTI", 1.0), ("mystery", 9.0)])];
    let points = as_graph_data(&results);
    assert_eq!(points[0].values.len(), 1);
    assert_eq!(points[0].value(MetricType::FirstViewTti), Some(1.0));
}

#[test]
fn graph_data_keeps_order_of_equal_dates() {
    let results = vec![
        result("first", 5, &[("WPTMetricFirstViewTTI", 1.0)]),
        result("second", 5, &[("WPTMetricFirstViewTTI", 2.0)]),
    ];
    let points = as_graph_data(&results);
    assert_eq!(points[0].value(MetricType::FirstViewTti), Some(1.0));
    assert_eq!(points[1].value(MetricType::FirstViewTti), Some(2.0));
}

#[test]
fn audit_results_state_default_is_empty() {
    let state = AuditResultsState::default();
    assert!(state.key.is_none());
    assert!(state.graph_data().is_empty());
    assert!(!state.loading);
}
