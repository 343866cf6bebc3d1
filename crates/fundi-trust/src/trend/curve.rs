use super::domain::{ScoreSample, MAX_SCORE};
use serde::{Deserialize, Serialize};

/// Drawing surface for a trend chart. Chart-space y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding_x: 40.0,
            padding_y: 20.0,
        }
    }
}

impl Viewport {
    /// Same padding and height at a new width, as used after a container resize.
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// True when the padding leaves a non-empty plotting area.
    pub fn is_drawable(&self) -> bool {
        [self.width, self.height, self.padding_x, self.padding_y]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
            && self.width > 2.0 * self.padding_x
            && self.height > 2.0 * self.padding_y
    }

    /// y coordinate of the chart floor (a score of zero).
    pub fn baseline(&self) -> f64 {
        self.height - self.padding_y
    }

    fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding_x
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Render-ready geometry for a score series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendCurve {
    pub points: Vec<ChartPoint>,
    pub line_path: String,
    pub area_path: String,
    pub viewport: Viewport,
}

/// Projects the series into `viewport`.
///
/// The viewport must satisfy [`Viewport::is_drawable`]; with padding wider than the
/// surface the coordinates leave the chart and run backwards. `AppConfig::load` and
/// the dashboard's responsive sizing only hand out drawable viewports.
pub fn project(samples: &[ScoreSample], viewport: Viewport) -> TrendCurve {
    let points = project_points(samples, viewport);
    let line_path = build_smooth_path(&points);
    let area_path = build_area_path(&line_path, &points, viewport);

    TrendCurve {
        points,
        line_path,
        area_path,
        viewport,
    }
}

/// Spreads samples evenly across the plot width by index, not by timestamp.
/// Same drawable-viewport precondition as [`project`].
pub fn project_points(samples: &[ScoreSample], viewport: Viewport) -> Vec<ChartPoint> {
    let span = samples.len().saturating_sub(1).max(1) as f64;

    samples
        .iter()
        .enumerate()
        .map(|(idx, sample)| ChartPoint {
            x: viewport.padding_x + (idx as f64 / span) * viewport.plot_width(),
            y: viewport.baseline() - (sample.bounded_value() / MAX_SCORE) * viewport.plot_height(),
        })
        .collect()
}

/// Quadratic path through the points. Each segment bends around a control point at
/// the horizontal midpoint, held at the previous point's height.
pub fn build_smooth_path(points: &[ChartPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut segments = vec![format!("M {} {}", coord(first.x), coord(first.y))];
    segments.extend(points.windows(2).map(|pair| {
        let (previous, current) = (pair[0], pair[1]);
        format!(
            "Q {} {} {} {}",
            coord((previous.x + current.x) / 2.0),
            coord(previous.y),
            coord(current.x),
            coord(current.y)
        )
    }));

    segments.join(" ")
}

/// Closes `line_path` down to the baseline so the region under the curve can be filled.
pub fn build_area_path(line_path: &str, points: &[ChartPoint], viewport: Viewport) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline = coord(viewport.baseline());

    format!(
        "{line_path} L {} {baseline} L {} {baseline} Z",
        coord(last.x),
        coord(first.x)
    )
}

/// Container-driven sizing for the chart width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSizing {
    /// Horizontal space reserved around the chart inside its container.
    pub margin: f64,
    pub max_width: f64,
}

impl Default for ChartSizing {
    fn default() -> Self {
        Self {
            margin: 48.0,
            max_width: 800.0,
        }
    }
}

/// `min(container_width - margin, max_width)`, floored at zero.
pub fn responsive_width(container_width: f64, sizing: ChartSizing) -> f64 {
    (container_width - sizing.margin)
        .min(sizing.max_width)
        .max(0.0)
}

pub fn is_mobile(container_width: f64, breakpoint: f64) -> bool {
    container_width < breakpoint
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}
