//! Pure geometry for the SVG metric graph.
//!
//! DESIGN
//! ======
//! Everything here maps data to plot coordinates without touching the DOM so
//! the graph component only binds results to SVG attributes.
//!
//! - x: point scale over the plot width, evenly spaced by index.
//! - y: linear from zero to a "nice" maximum with evenly stepped ticks.
//! - curves: monotone cubic interpolation in x, which never overshoots the
//!   data between two samples.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::fmt::Write;

/// Inner drawing rectangle of the chart, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Y-axis domain `[0, max]` and its tick values.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ValueAxis {
    /// Pixel row for `value` inside `area`.
    pub fn y(&self, value: f64, area: &PlotArea) -> f64 {
        area.top + area.height * (1.0 - value / self.max)
    }
}

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Build a zero-based axis whose top tick is a round number at or above `max_value`.
pub fn nice_value_axis(max_value: f64, tick_count: usize) -> ValueAxis {
    let intervals = tick_count.max(2) - 1;
    let max_value = if max_value.is_finite() && max_value > 0.0 { max_value } else { 1.0 };

    #[allow(clippy::cast_precision_loss)]
    let raw_step = max_value / intervals as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= normalized - 1e-9)
        .unwrap_or(10.0);
    let step = nice * magnitude;

    #[allow(clippy::cast_precision_loss)]
    let ticks: Vec<f64> = (0..=intervals).map(|i| round_to_step(i as f64 * step, step)).collect();
    let max = ticks.last().copied().unwrap_or(max_value);
    ValueAxis { max, ticks }
}

/// Snap float noise such as `0.30000000000000004` back onto the step grid.
fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) + 2.0;
    let factor = 10f64.powf(decimals);
    (value * factor).round() / factor
}

/// X pixel position of each of `count` points. A single point sits centered.
pub fn point_positions(count: usize, area: &PlotArea) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![area.left + area.width / 2.0],
        n => {
            #[allow(clippy::cast_precision_loss)]
            let step = area.width / (n - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            (0..n).map(|i| area.left + step * i as f64).collect()
        }
    }
}

/// Indices of x ticks to label, walking from the first tick and skipping any
/// whose label would sit closer than `min_gap` to the previous label.
pub fn ticks_from_start(positions: &[f64], label_width: f64, min_gap: f64) -> Vec<usize> {
    let mut kept = Vec::new();
    let mut last: Option<f64> = None;
    for (idx, x) in positions.iter().copied().enumerate() {
        if last.is_none_or(|prev| x - prev >= label_width + min_gap) {
            kept.push(idx);
            last = Some(x);
        }
    }
    kept
}

/// Index of the position closest to `x`; the earliest wins ties.
pub fn nearest_index(x: f64, positions: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, pos) in positions.iter().enumerate() {
        let distance = (pos - x).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}

/// SVG path data for a monotone-x curve through `points`.
pub fn monotone_line_path(points: &[(f64, f64)]) -> String {
    let mut curve = MonotoneX::default();
    for &(x, y) in points {
        curve.point(x, y);
    }
    curve.finish()
}

/// SVG path data for the area between the curve and `baseline_y`.
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = monotone_line_path(points);
    let _ = write!(path, "L{},{}L{},{}Z", coord(last.0), coord(baseline_y), coord(first.0), coord(baseline_y));
    path
}

fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { "0".to_owned() } else { format!("{rounded}") }
}

/// Streaming monotone cubic interpolation (Steffen's method in x).
#[derive(Default)]
struct MonotoneX {
    path: String,
    count: usize,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
}

impl MonotoneX {
    fn point(&mut self, x: f64, y: f64) {
        if self.count > 0 && x == self.x1 && y == self.y1 {
            return;
        }
        let mut t1 = f64::NAN;
        match self.count {
            0 => {
                let _ = write!(self.path, "M{},{}", coord(x), coord(y));
            }
            1 => {}
            2 => {
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.bezier(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.bezier(self.t0, t1);
            }
        }
        self.count = (self.count + 1).min(3);
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn finish(mut self) -> String {
        match self.count {
            2 => {
                let _ = write!(self.path, "L{},{}", coord(self.x1), coord(self.y1));
            }
            3 => {
                let t1 = self.slope2(self.t0);
                self.bezier(self.t0, t1);
            }
            _ => {}
        }
        self.path
    }

    /// Tangent at the middle point given the next point.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = if h0 == 0.0 { 0.0 } else { (self.y1 - self.y0) / h0 };
        let s1 = if h1 == 0.0 { 0.0 } else { (y2 - self.y1) / h1 };
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    /// One-sided tangent at an end point.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h == 0.0 { t } else { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 }
    }

    fn bezier(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        let _ = write!(
            self.path,
            "C{},{},{},{},{},{}",
            coord(self.x0 + dx),
            coord(self.y0 + dx * t0),
            coord(self.x1 - dx),
            coord(self.y1 - dx * t1),
            coord(self.x1),
            coord(self.y1),
        );
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
