//! Growth-rate summary over a date-ordered performance series: the mean
//! of the first five samples against the mean of the last five, per
//! metric. Callers restrict the series to their window of interest (and
//! sort it) before calling in; this module never sorts.

use crate::models::PerformanceSample;

/// Number of samples averaged at each end of the series.
pub const WINDOW: usize = 5;

/// Display cap. Rates above this are clamped; negative rates never are.
pub const MAX_GROWTH_PCT: f64 = 10_000.0;

// Baselines below these counts produce meaningless explosive
// percentages, so the rate is forced to zero instead.
const VIEWS_THRESHOLD: f64 = 100.0;
const LIKES_THRESHOLD: f64 = 10.0;
const COMMENTS_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrowthSummary {
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
}

/// All-zero when the series is too short to compare two non-overlapping
/// windows. Callers that care about "no data" versus "no growth" must
/// check the length themselves.
pub fn growth_summary(samples: &[PerformanceSample]) -> GrowthSummary {
    if samples.len() < WINDOW * 2 {
        return GrowthSummary::default();
    }

    let leading = &samples[..WINDOW];
    let trailing = &samples[samples.len() - WINDOW..];

    GrowthSummary {
        views: rate(
            mean(leading, |s| s.views),
            mean(trailing, |s| s.views),
            VIEWS_THRESHOLD,
        ),
        likes: rate(
            mean(leading, |s| s.likes),
            mean(trailing, |s| s.likes),
            LIKES_THRESHOLD,
        ),
        comments: rate(
            mean(leading, |s| s.comments),
            mean(trailing, |s| s.comments),
            COMMENTS_THRESHOLD,
        ),
    }
}

fn mean(samples: &[PerformanceSample], metric: impl Fn(&PerformanceSample) -> u64) -> f64 {
    samples.iter().map(|s| metric(s) as f64).sum::<f64>() / samples.len() as f64
}

fn rate(leading_mean: f64, trailing_mean: f64, threshold: f64) -> f64 {
    if leading_mean == 0.0 || leading_mean < threshold {
        return 0.0;
    }
    let growth = (trailing_mean - leading_mean) / leading_mean * 100.0;
    growth.min(MAX_GROWTH_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn samples(metrics: &[(u64, u64, u64)]) -> Vec<PerformanceSample> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        metrics
            .iter()
            .enumerate()
            .map(|(i, &(views, likes, comments))| PerformanceSample {
                upload_date: start + Duration::days(i as i64),
                views,
                likes,
                comments,
                likes_to_views: None,
            })
            .collect()
    }

    fn uniform(count: usize, views: u64) -> Vec<PerformanceSample> {
        samples(&vec![(views, 50, 20); count])
    }

    #[test]
    fn too_few_samples_yield_zeros() {
        for count in 0..10 {
            let result = growth_summary(&uniform(count, 1_000));
            assert_eq!(result, GrowthSummary::default(), "count {count}");
        }
    }

    #[test]
    fn doubled_views_report_hundred_percent() {
        let series = samples(&[
            (100, 50, 20),
            (100, 50, 20),
            (100, 50, 20),
            (100, 50, 20),
            (100, 50, 20),
            (200, 50, 20),
            (200, 50, 20),
            (200, 50, 20),
            (200, 50, 20),
            (200, 50, 20),
        ]);
        let result = growth_summary(&series);
        assert_eq!(result.views, 100.0);
        assert_eq!(result.likes, 0.0);
        assert_eq!(result.comments, 0.0);
    }

    #[test]
    fn zero_leading_mean_forces_zero_rate() {
        let mut series = uniform(10, 1_000);
        for sample in series.iter_mut().take(WINDOW) {
            sample.likes = 0;
        }
        let result = growth_summary(&series);
        assert_eq!(result.likes, 0.0);
        assert!(result.views.abs() < f64::EPSILON);
    }

    #[test]
    fn leading_mean_below_threshold_forces_zero_rate() {
        // Views baseline of 50 is below the 100-view noise threshold.
        let mut series = uniform(10, 50);
        for sample in series.iter_mut().skip(WINDOW) {
            sample.views = 1_000_000;
        }
        assert_eq!(growth_summary(&series).views, 0.0);
    }

    #[test]
    fn explosive_growth_is_capped() {
        let mut series = uniform(10, 100);
        for sample in series.iter_mut().skip(WINDOW) {
            sample.views = 100_000_000;
        }
        assert_eq!(growth_summary(&series).views, MAX_GROWTH_PCT);
    }

    #[test]
    fn negative_growth_is_unclamped() {
        let mut series = uniform(10, 10_000);
        for sample in series.iter_mut().skip(WINDOW) {
            sample.views = 100;
        }
        let result = growth_summary(&series);
        assert_eq!(result.views, -99.0);
    }

    #[test]
    fn metrics_are_independent() {
        let mut series = uniform(10, 100);
        for sample in series.iter_mut().skip(WINDOW) {
            sample.views = 150;
            sample.likes = 25;
            sample.comments = 40;
        }
        let result = growth_summary(&series);
        assert_eq!(result.views, 50.0);
        assert_eq!(result.likes, -50.0);
        assert_eq!(result.comments, 100.0);
    }
}
