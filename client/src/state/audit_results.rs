//! Audit-result state and the metric catalogue used by graphs.
//!
//! DESIGN
//! ======
//! Results arrive as loosely keyed JSON maps; graphs consume them as
//! date-ordered points keyed by a closed set of known metrics. Unknown metric
//! keys are dropped during that conversion rather than rendered.

#[cfg(test)]
#[path = "audit_results_test.rs"]
mod audit_results_test;

use std::collections::BTreeMap;

use crate::net::types::AuditResult;

/// How a metric's raw value is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Number,
    Percent,
    Time,
}

/// Metrics produced by an audit run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricType {
    FirstViewTti,
    RepeatViewTti,
    FirstViewSpeedIndex,
    RepeatViewSpeedIndex,
    FirstViewFirstPaint,
    RepeatViewFirstPaint,
    FirstViewFirstMeaningfulPaint,
    RepeatViewFirstMeaningfulPaint,
    FirstViewLoadTime,
    RepeatViewLoadTime,
    FirstViewFirstContentfulPaint,
    RepeatViewFirstContentfulPaint,
    FirstViewTimeToFirstByte,
    RepeatViewTimeToFirstByte,
    FirstViewVisuallyComplete,
    RepeatViewVisuallyComplete,
    LighthousePerformance,
}

impl MetricType {
    pub const ALL: [Self; 17] = [
        Self::FirstViewTti,
        Self::RepeatViewTti,
        Self::FirstViewSpeedIndex,
        Self::RepeatViewSpeedIndex,
        Self::FirstViewFirstPaint,
        Self::RepeatViewFirstPaint,
        Self::FirstViewFirstMeaningfulPaint,
        Self::RepeatViewFirstMeaningfulPaint,
        Self::FirstViewLoadTime,
        Self::RepeatViewLoadTime,
        Self::FirstViewFirstContentfulPaint,
        Self::RepeatViewFirstContentfulPaint,
        Self::FirstViewTimeToFirstByte,
        Self::RepeatViewTimeToFirstByte,
        Self::FirstViewVisuallyComplete,
        Self::RepeatViewVisuallyComplete,
        Self::LighthousePerformance,
    ];

    /// Wire and message-catalog identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstViewTti => "WPTMetricFirstViewTTI",
            Self::RepeatViewTti => "WPTMetricRepeatViewTTI",
            Self::FirstViewSpeedIndex => "WPTMetricFirstViewSpeedIndex",
            Self::RepeatViewSpeedIndex => "WPTMetricRepeatViewSpeedIndex",
            Self::FirstViewFirstPaint => "WPTMetricFirstViewFirstPaint",
            Self::RepeatViewFirstPaint => "WPTMetricRepeatViewFirstPaint",
            Self::FirstViewFirstMeaningfulPaint => "WPTMetricFirstViewFirstMeaningfulPaint",
            Self::RepeatViewFirstMeaningfulPaint => "WPTMetricRepeatViewFirstMeaningfulPaint",
            Self::FirstViewLoadTime => "WPTMetricFirstViewLoadTime",
            Self::RepeatViewLoadTime => "WPTMetricRepeatViewLoadTime",
            Self::FirstViewFirstContentfulPaint => "WPTMetricFirstViewFirstContentfulPaint",
            Self::RepeatViewFirstContentfulPaint => "WPTMetricRepeatViewFirstContentfulPaint",
            Self::FirstViewTimeToFirstByte => "WPTMetricFirstViewTimeToFirstByte",
            Self::RepeatViewTimeToFirstByte => "WPTMetricRepeatViewTimeToFirstByte",
            Self::FirstViewVisuallyComplete => "WPTMetricFirstViewVisuallyComplete",
            Self::RepeatViewVisuallyComplete => "WPTMetricRepeatViewVisuallyComplete",
            Self::LighthousePerformance => "WPTMetricLighthousePerformance",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.id() == id)
    }

    pub fn kind(self) -> MetricKind {
        match self {
            Self::FirstViewSpeedIndex | Self::RepeatViewSpeedIndex => MetricKind::Number,
            Self::LighthousePerformance => MetricKind::Percent,
            _ => MetricKind::Time,
        }
    }

    /// `Metrics.<id>.name` catalog key.
    pub fn name_message_id(self) -> String {
        format!("Metrics.{}.name", self.id())
    }

    /// `Metrics.<id>.description` catalog key.
    pub fn description_message_id(self) -> String {
        format!("Metrics.{}.description", self.id())
    }
}

/// Metrics shown on the audit details page, one graph each.
pub const DEFAULT_GRAPH_METRICS: [MetricType; 4] = [
    MetricType::FirstViewTti,
    MetricType::FirstViewSpeedIndex,
    MetricType::FirstViewFirstMeaningfulPaint,
    MetricType::LighthousePerformance,
];

/// One x-axis position of a metric graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphPoint {
    /// Audit timestamp in milliseconds since the Unix epoch.
    pub date: i64,
    pub values: BTreeMap<MetricType, f64>,
}

impl GraphPoint {
    pub fn value(&self, metric: MetricType) -> Option<f64> {
        self.values.get(&metric).copied()
    }
}

/// Which audited entity results were loaded for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsKey {
    pub project_id: String,
    pub page_or_script_id: String,
    pub audit_parameters_id: Option<String>,
}

/// Results for the audit target currently on screen.
#[derive(Clone, Debug, Default)]
pub struct AuditResultsState {
    pub key: Option<ResultsKey>,
    pub results: Vec<AuditResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuditResultsState {
    /// Graph points for the loaded results, oldest first.
    pub fn graph_data(&self) -> Vec<GraphPoint> {
        as_graph_data(&self.results)
    }
}

/// Convert raw results into date-ordered graph points.
///
/// Results with equal dates keep their relative order.
pub fn as_graph_data(results: &[AuditResult]) -> Vec<GraphPoint> {
    let mut points: Vec<GraphPoint> = results
        .iter()
        .map(|result| GraphPoint {
            date: result.created_at,
            values: result
                .metrics
                .iter()
                .filter_map(|(id, value)| MetricType::from_id(id).map(|metric| (metric, *value)))
                .collect(),
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
