use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Channel summary as returned by the analytics service lookup endpoints.
/// The cache layer appends a `timestamp` field when persisting this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub likes: u64,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSort {
    Recency,
    Views,
    Likes,
}

impl VideoSort {
    pub fn wire_key(&self) -> &'static str {
        match self {
            VideoSort::Recency => "recency",
            VideoSort::Views => "views",
            VideoSort::Likes => "likes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoSort::Recency => "Most Recent",
            VideoSort::Views => "Most Viewed",
            VideoSort::Likes => "Most Liked",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "recency" => Some(VideoSort::Recency),
            "views" => Some(VideoSort::Views),
            "likes" => Some(VideoSort::Likes),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![VideoSort::Recency, VideoSort::Views, VideoSort::Likes]
    }
}

/// Filter parameters for the video-listing endpoint. Unset fields are
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoFilters {
    pub sort_by: Option<VideoSort>,
    pub max_videos: Option<u32>,
    pub min_views: Option<u64>,
    pub min_likes: Option<u64>,
}

impl VideoFilters {
    pub fn to_query(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(sort_by) = self.sort_by {
            params.push(format!("sortBy={}", sort_by.wire_key()));
        }
        if let Some(max_videos) = self.max_videos {
            params.push(format!("maxVideos={max_videos}"));
        }
        if let Some(min_views) = self.min_views {
            params.push(format!("minViews={min_views}"));
        }
        if let Some(min_likes) = self.min_likes {
            params.push(format!("minLikes={min_likes}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub channel_id: String,
    pub channel_title: String,
    #[serde(default)]
    pub total_videos: u64,
    #[serde(default)]
    pub average_views: f64,
    #[serde(default)]
    pub like_to_view_ratio: f64,
    #[serde(default)]
    pub comment_to_view_ratio: f64,
    #[serde(default)]
    pub trends: Option<MetricSeries>,
}

/// Pre-shaped metric arrays embedded in the analytics summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub views: Vec<u64>,
    #[serde(default)]
    pub likes: Vec<u64>,
    #[serde(default)]
    pub comments: Vec<u64>,
}

/// One per-video data point of the performance-over-time series, after
/// validation. The sequence handed to consumers is always sorted
/// ascending by upload date.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSample {
    pub upload_date: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub likes_to_views: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingAveragePoint {
    pub upload_index: u32,
    pub average_views: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyUploads {
    pub week: String,
    pub count: u32,
}

/// Trends endpoint payload exactly as it arrives. Individual items may be
/// incomplete; `TrendsData::from_raw` drops them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrendsResponse {
    #[serde(default)]
    pub performance_over_time: Option<Vec<RawPerformancePoint>>,
    #[serde(default)]
    pub rolling_averages: Option<Vec<RawRollingAveragePoint>>,
    #[serde(default)]
    pub upload_frequency_weekly: Option<Vec<RawWeeklyUploads>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerformancePoint {
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
    #[serde(default)]
    pub likes_to_views: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRollingAveragePoint {
    #[serde(default)]
    pub upload_index: Option<u32>,
    #[serde(default)]
    pub average_views: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWeeklyUploads {
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Validated trends bundle. Series are filtered, never repaired: an item
/// with a bad date or a missing metric is simply absent here.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsData {
    pub performance: Vec<PerformanceSample>,
    pub rolling_averages: Vec<RollingAveragePoint>,
    pub upload_frequency_weekly: Vec<WeeklyUploads>,
}

impl TrendsData {
    pub fn from_raw(raw: RawTrendsResponse) -> Self {
        let mut performance: Vec<PerformanceSample> = raw
            .performance_over_time
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let date = item.upload_date.as_deref().and_then(parse_upload_date)?;
                Some(PerformanceSample {
                    upload_date: date,
                    views: item.views?,
                    likes: item.likes?,
                    comments: item.comments?,
                    likes_to_views: item.likes_to_views,
                })
            })
            .collect();
        performance.sort_by_key(|sample| sample.upload_date);

        let rolling_averages = raw
            .rolling_averages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                Some(RollingAveragePoint {
                    upload_index: item.upload_index?,
                    average_views: item.average_views?,
                })
            })
            .collect();

        let upload_frequency_weekly = raw
            .upload_frequency_weekly
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                Some(WeeklyUploads {
                    week: item.week?,
                    count: item.count?,
                })
            })
            .collect();

        TrendsData {
            performance,
            rolling_averages,
            upload_frequency_weekly,
        }
    }
}

/// Accepts RFC 3339 timestamps and bare dates, the two formats the
/// analytics service has been seen emitting.
pub fn parse_upload_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = value.parse::<DateTime<Utc>>() {
        return Some(datetime);
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub channel_id: String,
    pub keywords: Vec<String>,
    pub region: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    pub channel_id: String,
    #[serde(default)]
    pub analysis_timestamp: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub language: String,
    pub strategic_insights: StrategicInsights,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StrategicInsights {
    #[serde(default)]
    pub trending_topics: Vec<String>,
    #[serde(default)]
    pub keyword_gaps: Vec<String>,
    #[serde(default)]
    pub title_suggestions: Vec<String>,
    #[serde(default)]
    pub keyword_clusters: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub viewer_questions: Vec<String>,
    #[serde(default)]
    pub regional_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_point(date: Option<&str>, views: Option<u64>) -> RawPerformancePoint {
        RawPerformancePoint {
            upload_date: date.map(str::to_string),
            views,
            likes: Some(10),
            comments: Some(2),
            likes_to_views: None,
        }
    }

    #[test]
    fn from_raw_drops_invalid_performance_items() {
        let raw = RawTrendsResponse {
            performance_over_time: Some(vec![
                raw_point(Some("2024-03-02T00:00:00Z"), Some(500)),
                raw_point(Some("not a date"), Some(400)),
                raw_point(None, Some(300)),
                raw_point(Some("2024-03-01T00:00:00Z"), None),
                raw_point(Some("2024-02-28"), Some(200)),
            ]),
            rolling_averages: None,
            upload_frequency_weekly: None,
        };

        let trends = TrendsData::from_raw(raw);
        assert_eq!(trends.performance.len(), 2);
        // Sorted ascending by upload date, not arrival order.
        assert_eq!(trends.performance[0].views, 200);
        assert_eq!(trends.performance[1].views, 500);
    }

    #[test]
    fn from_raw_handles_missing_series() {
        let raw = RawTrendsResponse {
            performance_over_time: None,
            rolling_averages: None,
            upload_frequency_weekly: None,
        };
        let trends = TrendsData::from_raw(raw);
        assert!(trends.performance.is_empty());
        assert!(trends.rolling_averages.is_empty());
        assert!(trends.upload_frequency_weekly.is_empty());
    }

    #[test]
    fn from_raw_filters_incomplete_secondary_series() {
        let raw = RawTrendsResponse {
            performance_over_time: None,
            rolling_averages: Some(vec![
                RawRollingAveragePoint {
                    upload_index: Some(1),
                    average_views: Some(120.0),
                },
                RawRollingAveragePoint {
                    upload_index: None,
                    average_views: Some(90.0),
                },
            ]),
            upload_frequency_weekly: Some(vec![
                RawWeeklyUploads {
                    week: Some("2024-W10".to_string()),
                    count: None,
                },
                RawWeeklyUploads {
                    week: Some("2024-W11".to_string()),
                    count: Some(3),
                },
            ]),
        };
        let trends = TrendsData::from_raw(raw);
        assert_eq!(trends.rolling_averages.len(), 1);
        assert_eq!(trends.rolling_averages[0].upload_index, 1);
        assert_eq!(trends.upload_frequency_weekly.len(), 1);
        assert_eq!(trends.upload_frequency_weekly[0].count, 3);
    }

    #[test]
    fn video_filters_build_expected_query() {
        let filters = VideoFilters {
            sort_by: Some(VideoSort::Views),
            max_videos: Some(50),
            min_views: Some(1000),
            min_likes: None,
        };
        assert_eq!(filters.to_query(), "?sortBy=views&maxVideos=50&minViews=1000");
        assert_eq!(VideoFilters::default().to_query(), "");
    }

    #[test]
    fn channel_record_accepts_sparse_payload() {
        let record: ChannelRecord =
            serde_json::from_str(r#"{"id":"UC123","title":"A Channel"}"#).unwrap();
        assert_eq!(record.subscriber_count, 0);
        assert!(record.description.is_none());
    }
}
