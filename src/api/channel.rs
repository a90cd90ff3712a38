//! Fetchers for the analytics service. All endpoints are plain GETs;
//! trend payloads are validated into `TrendsData` right here so no page
//! ever sees a half-formed series.

use crate::api::{read_json, ApiError};
use crate::config::ANALYTICS_API_URL;
use crate::models::{
    AnalyticsSummary, ChannelRecord, RawTrendsResponse, TrendsData, VideoFilters, VideoRecord,
};
use gloo_net::http::Request;

pub async fn fetch_channel_by_id(id: &str) -> Result<ChannelRecord, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/{id}");
    read_json(Request::get(&url).send().await?).await
}

pub async fn fetch_channel_by_title(title: &str) -> Result<ChannelRecord, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/title/{}", urlencoding::encode(title));
    read_json(Request::get(&url).send().await?).await
}

pub async fn fetch_channel_by_url(channel_url: &str) -> Result<ChannelRecord, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/url?url={}", urlencoding::encode(channel_url));
    read_json(Request::get(&url).send().await?).await
}

pub async fn fetch_analytics(id: &str) -> Result<AnalyticsSummary, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/{id}/analytics");
    read_json(Request::get(&url).send().await?).await
}

pub async fn fetch_trends(id: &str) -> Result<TrendsData, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/{id}/trends");
    let raw: RawTrendsResponse = read_json(Request::get(&url).send().await?).await?;
    Ok(TrendsData::from_raw(raw))
}

pub async fn fetch_videos(id: &str, filters: &VideoFilters) -> Result<Vec<VideoRecord>, ApiError> {
    let base = &*ANALYTICS_API_URL;
    let url = format!("{base}/channel/{id}/videos{}", filters.to_query());
    read_json(Request::get(&url).send().await?).await
}
