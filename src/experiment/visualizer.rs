//! Chart descriptions handed to renderers.
//!
//! The crate never draws anything itself: a `Chart` is just titles, axis labels, scale
//! flags and numeric series. Implement `ResultVisualizer` to render or persist them.

/// One labelled curve of `(x, y)` points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A comparison chart of several series.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_log: bool,
    pub y_log: bool,
    pub filename: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// New chart with no series; the file name defaults to the snake-cased title.
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            filename: default_filename(&title),
            title,
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_log: false,
            y_log: false,
            series: Vec::new(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_log_axes(mut self, x_log: bool, y_log: bool) -> Self {
        self.x_log = x_log;
        self.y_log = y_log;
        self
    }

    pub fn push(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>) {
        self.series.push(Series { label: label.into(), points });
    }
}

fn default_filename(title: &str) -> String {
    if title.is_empty() {
        "plot".to_string()
    } else {
        title.replace(' ', "_").to_lowercase()
    }
}

/// Consumer of finished charts.
pub trait ResultVisualizer {
    fn plot(&mut self, chart: &Chart);
}

/// Writes a one-line summary per series to the `log` facade.
#[derive(Debug, Default)]
pub struct ChartLog;

impl ResultVisualizer for ChartLog {
    fn plot(&mut self, chart: &Chart) {
        log::info!("chart `{}` ({} vs {})", chart.title, chart.y_label, chart.x_label);
        for s in &chart.series {
            match s.points.last() {
                Some((x, y)) => log::info!("  {}: {} points, last = ({x}, {y:e})", s.label, s.points.len()),
                None => log::info!("  {}: no points", s.label),
            }
        }
    }
}

/// Keeps every chart in memory.
#[derive(Debug, Default)]
pub struct ChartRecorder {
    pub charts: Vec<Chart>,
}

impl ResultVisualizer for ChartRecorder {
    fn plot(&mut self, chart: &Chart) {
        self.charts.push(chart.clone());
    }
}

impl<V: ResultVisualizer + ?Sized> ResultVisualizer for &mut V {
    fn plot(&mut self, chart: &Chart) {
        (**self).plot(chart)
    }
}
