//! Reshapes metric series into SVG-ready geometry. The pages drop the
//! output straight into `<polyline points=..>` / `<rect>` attributes;
//! anything fancier than that is deliberately out of scope.

/// Largest value across all series, used as the shared y-axis top so
/// overlaid series stay comparable. Charts always start at zero.
pub fn series_max(series: &[&[f64]]) -> f64 {
    let max = series
        .iter()
        .flat_map(|values| values.iter().copied())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// `points` attribute for a polyline spanning the full viewbox width,
/// y scaled against `max` with zero at the bottom edge.
pub fn polyline_points(values: &[f64], max: f64, width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = height - (value / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Evenly spaced bars with a small gutter, heights scaled against `max`.
pub fn bar_rects(values: &[f64], max: f64, width: f64, height: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.8;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = (value / max) * height;
            BarRect {
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_max_spans_all_series_and_guards_zero() {
        assert_eq!(series_max(&[&[1.0, 5.0], &[3.0, 9.0]]), 9.0);
        assert_eq!(series_max(&[&[0.0, 0.0]]), 1.0);
        assert_eq!(series_max(&[]), 1.0);
    }

    #[test]
    fn polyline_spans_viewbox_and_scales_y() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 100.0, 200.0, 100.0);
        assert_eq!(points, "0.0,100.0 100.0,50.0 200.0,0.0");
    }

    #[test]
    fn single_point_sits_on_left_edge() {
        assert_eq!(polyline_points(&[10.0], 10.0, 200.0, 100.0), "0.0,0.0");
        assert_eq!(polyline_points(&[], 10.0, 200.0, 100.0), "");
    }

    #[test]
    fn bars_scale_to_max_and_fill_slots() {
        let bars = bar_rects(&[1.0, 2.0, 4.0], 4.0, 120.0, 100.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[2].height, 100.0);
        assert_eq!(bars[0].height, 25.0);
        assert_eq!(bars[2].y, 0.0);
        // Bars stay inside their slots.
        assert!(bars[0].x >= 0.0 && bars[0].x + bars[0].width <= 40.0);
        assert!(bars[1].x >= 40.0 && bars[1].x + bars[1].width <= 80.0);
    }
}
