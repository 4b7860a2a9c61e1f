//! Line chart model and curve smoothing.
//!
//! Points are placed at `x = index`, so every series shares the label axis.
//! A missing value splits its series into separate runs; each run is
//! smoothed on its own so gaps are never bridged.

use crate::consts::cli_consts::chart::{LINE_TENSION, SMOOTHING_STEPS};
use ratatui::style::Color;

/// One named, colored line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub color: Color,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>, color: Color) -> Self {
        Self {
            name: name.into(),
            values,
            color,
        }
    }

    /// Contiguous runs of present values as `(index, value)` points.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (index, value) in self.values.iter().enumerate() {
            match value {
                Some(v) => current.push((index as f64, *v)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// [`Series::segments`] with each run smoothed.
    pub fn smoothed_segments(&self, tension: f64) -> Vec<Vec<(f64, f64)>> {
        self.segments()
            .iter()
            .map(|segment| smooth(segment, tension, SMOOTHING_STEPS))
            .collect()
    }

    /// Smallest and largest present value.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub tension: f64,
}

impl LineChart {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            series: Vec::new(),
            tension: LINE_TENSION,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// X axis spans the label indices; a single point still gets a unit-wide axis.
    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.labels.len().saturating_sub(1).max(1);
        [0.0, last as f64]
    }

    /// Y axis spans every present value with 5% headroom on each side.
    pub fn y_bounds(&self) -> [f64; 2] {
        let range = self
            .series
            .iter()
            .filter_map(Series::range)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
        match range {
            None => [0.0, 1.0],
            Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => [lo - 1.0, hi + 1.0],
            Some((lo, hi)) => {
                let pad = (hi - lo) * 0.05;
                [lo - pad, hi + pad]
            }
        }
    }

    /// First, middle and last label, for the X axis.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.labels.len() {
            0 => Vec::new(),
            1 | 2 => self.labels.clone(),
            n => vec![
                self.labels[0].clone(),
                self.labels[n / 2].clone(),
                self.labels[n - 1].clone(),
            ],
        }
    }
}

/// Control points around `curr`, scaled by the distances to its neighbours.
fn control_points(
    prev: (f64, f64),
    curr: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = ((curr.0 - prev.0).powi(2) + (curr.1 - prev.1).powi(2)).sqrt();
    let d12 = ((next.0 - curr.0).powi(2) + (next.1 - curr.1).powi(2)).sqrt();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.0 - prev.0;
    let dy = next.1 - prev.1;
    (
        (curr.0 - fa * dx, curr.1 - fa * dy),
        (curr.0 + fb * dx, curr.1 + fb * dy),
    )
}

fn bezier(p0: (f64, f64), c0: (f64, f64), c1: (f64, f64), p1: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * c0.0 + c * c1.0 + d * p1.0,
        a * p0.1 + b * c0.1 + c * c1.1 + d * p1.1,
    )
}

/// Samples a tension spline through `points`.
///
/// The output passes through every input point: input `k` sits at output
/// index `k * steps`. A tension of `0` yields straight segments.
pub fn smooth(points: &[(f64, f64)], tension: f64, steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || steps == 0 || tension == 0.0 {
        return points.to_vec();
    }

    let controls: Vec<_> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(points.len() - 1)];
            control_points(prev, points[i], next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity((points.len() - 1) * steps + 1);
    for i in 0..points.len() - 1 {
        let (_, out_ctrl) = controls[i];
        let (in_ctrl, _) = controls[i + 1];
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            out.push(bezier(points[i], out_ctrl, in_ctrl, points[i + 1], t));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn smoothing_passes_through_every_point() {
        let points = vec![(0.0, 10.0), (1.0, 30.0), (2.0, 5.0), (3.0, 25.0)];
        let smoothed = smooth(&points, 0.3, 8);

        assert_eq!(smoothed.len(), 3 * 8 + 1);
        for (k, point) in points.iter().enumerate() {
            assert!(close(smoothed[k * 8], *point), "point {} moved", k);
        }
    }

    #[test]
    fn zero_tension_keeps_the_polyline() {
        let points = vec![(0.0, 0.0), (1.0, 4.0), (2.0, 0.0)];
        assert_eq!(smooth(&points, 0.0, 8), points);
    }

    #[test]
    fn two_points_smooth_to_a_straight_line() {
        let smoothed = smooth(&[(0.0, 0.0), (1.0, 2.0)], 0.3, 4);
        for (x, y) in smoothed {
            assert!((y - 2.0 * x).abs() < 1e-9);
        }
    }

    #[test]
    fn duplicate_points_do_not_produce_nan() {
        let smoothed = smooth(&[(0.0, 1.0), (0.0, 1.0), (1.0, 1.0)], 0.3, 4);
        assert!(smoothed.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn gaps_split_series_into_segments() {
        let series = Series::new(
            "demand",
            vec![Some(1.0), Some(2.0), None, Some(4.0), None, None],
            Color::Cyan,
        );
        assert_eq!(
            series.segments(),
            vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]
        );
    }

    #[test]
    fn y_bounds_cover_all_series() {
        let chart = LineChart::new(vec!["a".into(), "b".into()])
            .with_series(Series::new("t", vec![Some(0.0), Some(10.0)], Color::Red))
            .with_series(Series::new("h", vec![Some(100.0), None], Color::Blue));
        assert_eq!(chart.y_bounds(), [-5.0, 105.0]);
        assert_eq!(chart.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn flat_or_empty_charts_still_have_a_y_range() {
        let flat = LineChart::new(vec!["only".into()])
            .with_series(Series::new("d", vec![Some(120.5)], Color::Cyan));
        assert_eq!(flat.y_bounds(), [119.5, 121.5]);
        assert_eq!(LineChart::new(Vec::new()).y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn axis_labels_pick_first_middle_last() {
        let labels: Vec<String> = (0..5).map(|i| format!("t{}", i)).collect();
        let chart = LineChart::new(labels);
        assert_eq!(chart.axis_labels(), vec!["t0", "t2", "t4"]);
    }
}
