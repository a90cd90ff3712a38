//! Fetcher for the AI keyword-analysis service. Responses are never
//! cached; every form submission goes back to the service.

use crate::api::{read_json, ApiError};
use crate::config::AI_API_URL;
use crate::models::{AnalysisRequest, AnalysisResponse};
use gloo_net::http::Request;

pub async fn analyze_keywords(request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
    let base = &*AI_API_URL;
    let url = format!("{base}/analyze-keywords");
    let response = Request::post(&url).json(request)?.send().await?;
    read_json(response).await
}
