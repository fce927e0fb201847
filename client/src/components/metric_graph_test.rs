use std::collections::BTreeMap;

use time::UtcOffset;

use super::*;
use crate::util::i18n::Locale;

/// 2026-02-14T15:05:00Z
const VALENTINES_2026: i64 = 1_771_081_500_000;
const DAY_MS: i64 = 86_400_000;

fn utc_clock() -> LocalClock {
    LocalClock { offset: UtcOffset::UTC, current_year: 2026 }
}

fn point(date: i64, values: &[(MetricType, f64)]) -> GraphPoint {
    GraphPoint { date, values: values.iter().copied().collect::<BTreeMap<_, _>>() }
}

// =============================================================
// info_tooltip_offsets
// =============================================================

#[test]
fn tooltip_offsets_start_auto() {
    let offsets = TooltipOffsets::default();
    assert_eq!(offsets.left, "auto");
    assert_eq!(offsets.top, "auto");
}

#[test]
fn tooltip_offsets_shift_right_and_up_from_icon() {
    let legend = ElementBox { left: 100.0, top: 50.0, right: 400.0 };
    let icon = ElementBox { left: 200.0, top: 52.0, right: 216.0 };
    let offsets = info_tooltip_offsets(legend, icon);
    assert_eq!(offsets.left, "146px");
    assert_eq!(offsets.top, "-3px");
}

#[test]
fn tooltip_offsets_floor_fractional_pixels() {
    let legend = ElementBox { left: 10.25, top: 20.5, right: 300.0 };
    let icon = ElementBox { left: 80.0, top: 30.9, right: 96.6 };
    let offsets = info_tooltip_offsets(legend, icon);
    // 96.6 - 10.25 + 30 = 116.35
    assert_eq!(offsets.left, "116px");
    // 30.9 - 20.5 - 5 = 5.4
    assert_eq!(offsets.top, "5px");
}

// =============================================================
// graph_layout
// =============================================================

#[test]
fn layout_without_points_keeps_axis() {
    let layout = graph_layout(&[], &[MetricType::FirstViewTti], 720.0, 280.0, &utc_clock());
    assert!(layout.positions.is_empty());
    assert!(layout.x_ticks.is_empty());
    assert_eq!(layout.series.len(), 1);
    assert_eq!(layout.series[0].line, "");
    assert_eq!(layout.series[0].area, "");
    assert_eq!(layout.y_ticks.len(), 5);
}

#[test]
fn layout_positions_ticks_and_series() {
    let points = vec![
        point(VALENTINES_2026, &[(MetricType::FirstViewTti, 1000.0)]),
        point(VALENTINES_2026 + DAY_MS, &[(MetricType::FirstViewTti, 2000.0)]),
        point(VALENTINES_2026 + 2 * DAY_MS, &[(MetricType::FirstViewTti, 4000.0)]),
    ];
    let layout = graph_layout(&points, &[MetricType::FirstViewTti], 720.0, 280.0, &utc_clock());

    assert_eq!(layout.area, PlotArea { left: 50.0, top: 10.0, width: 650.0, height: 240.0 });
    assert_eq!(layout.positions, vec![50.0, 375.0, 700.0]);

    let labels: Vec<&str> = layout.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["14/02", "15/02", "16/02"]);

    let y_labels: Vec<&str> = layout.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(y_labels, vec!["0", "1000", "2000", "3000", "4000"]);
    assert_eq!(layout.y_ticks[0].position, 250.0);
    assert_eq!(layout.y_ticks[4].position, 10.0);

    let series = &layout.series[0];
    assert_eq!(series.coords[0], Some((50.0, 190.0)));
    assert_eq!(series.coords[2], Some((700.0, 10.0)));
    assert!(series.line.starts_with("M50,190C"));
    assert!(series.area.ends_with("L700,250L50,250Z"));
}

#[test]
fn layout_leaves_gaps_for_missing_values() {
    let points = vec![
        point(VALENTINES_2026, &[(MetricType::FirstViewTti, 1000.0)]),
        point(VALENTINES_2026 + DAY_MS, &[(MetricType::LighthousePerformance, 0.9)]),
    ];
    let layout = graph_layout(&points, &[MetricType::FirstViewTti], 720.0, 280.0, &utc_clock());
    assert!(layout.series[0].coords[0].is_some());
    assert!(layout.series[0].coords[1].is_none());
}

#[test]
fn layout_thins_crowded_date_labels() {
    let points: Vec<GraphPoint> = (0..30)
        .map(|i| point(VALENTINES_2026 + i * DAY_MS, &[(MetricType::FirstViewTti, 1000.0)]))
        .collect();
    let layout = graph_layout(&points, &[MetricType::FirstViewTti], 720.0, 280.0, &utc_clock());
    assert_eq!(layout.x_ticks[0].label, "14/02");
    assert!(layout.x_ticks.len() < points.len());
    for pair in layout.x_ticks.windows(2) {
        assert!(pair[1].position - pair[0].position >= X_TICK_LABEL_WIDTH + X_TICK_MIN_GAP);
    }
}

// =============================================================
// tooltip_entries
// =============================================================

#[test]
fn tooltip_entries_format_value_and_localized_date() {
    let messages = Messages::for_locale(Locale::En);
    let p = point(
        VALENTINES_2026,
        &[(MetricType::FirstViewTti, 1234.0), (MetricType::LighthousePerformance, 0.456)],
    );
    let entries = tooltip_entries(
        &p,
        &[MetricType::FirstViewTti, MetricType::LighthousePerformance],
        &messages,
        &utc_clock(),
    );
    assert_eq!(
        entries,
        vec![
            TooltipEntry { value: "1.23s".to_owned(), date: "02/14 at 3:05 PM".to_owned() },
            TooltipEntry { value: "45%".to_owned(), date: "02/14 at 3:05 PM".to_owned() },
        ]
    );
}

#[test]
fn tooltip_entries_in_french() {
    let messages = Messages::for_locale(Locale::Fr);
    let p = point(VALENTINES_2026, &[(MetricType::FirstViewSpeedIndex, 7.0)]);
    let entries = tooltip_entries(&p, &[MetricType::FirstViewSpeedIndex], &messages, &utc_clock());
    assert_eq!(entries[0].value, "7");
    assert_eq!(entries[0].date, "14/02 à 15:05");
}

#[test]
fn tooltip_entries_skip_metrics_without_value() {
    let messages = Messages::for_locale(Locale::En);
    let p = point(VALENTINES_2026, &[(MetricType::FirstViewTti, 1000.0)]);
    let entries = tooltip_entries(
        &p,
        &[MetricType::FirstViewTti, MetricType::RepeatViewTti],
        &messages,
        &utc_clock(),
    );
    assert_eq!(entries.len(), 1);
}
