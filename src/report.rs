//! Plain-text and CSV report assembly. Pure string building; the
//! browser download itself lives in `utils`.

use crate::models::{AnalysisResponse, VideoRecord};

/// The printable keyword-intelligence report offered on the keywords
/// page. `generated_at` is passed in so the output is reproducible.
pub fn keyword_report(analysis: &AnalysisResponse, generated_at: &str) -> String {
    let insights = &analysis.strategic_insights;

    let trending = insights
        .trending_topics
        .iter()
        .enumerate()
        .map(|(i, topic)| format!("{}. {}", i + 1, topic))
        .collect::<Vec<_>>()
        .join("\n");

    let gaps = insights
        .keyword_gaps
        .iter()
        .map(|gap| format!("- {}", gap.replace('_', " ")))
        .collect::<Vec<_>>()
        .join("\n");

    let questions = insights
        .viewer_questions
        .iter()
        .enumerate()
        .map(|(i, question)| format!("{}. {}", i + 1, question))
        .collect::<Vec<_>>()
        .join("\n");

    let regional = insights
        .regional_keywords
        .iter()
        .map(|keyword| format!("- {keyword}"))
        .collect::<Vec<_>>()
        .join("\n");

    let titles = insights
        .title_suggestions
        .iter()
        .filter(|suggestion| !suggestion.trim().is_empty())
        .enumerate()
        .map(|(i, suggestion)| format!("{}. {}", i + 1, suggestion))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Keyword Intelligence Analysis Report\n\
         ====================================\n\
         \n\
         Analysis Details:\n\
         -----------------\n\
         Channel ID: {}\n\
         Region: {}\n\
         Language: {}\n\
         Analysis Timestamp: {}\n\
         \n\
         Strategic Insights:\n\
         ===================\n\
         \n\
         1. TRENDING TOPICS:\n{}\n\
         \n\
         2. KEYWORD GAPS:\n{}\n\
         \n\
         3. VIEWER QUESTIONS:\n{}\n\
         \n\
         4. REGIONAL KEYWORDS:\n{}\n\
         \n\
         5. TITLE SUGGESTIONS:\n{}\n\
         \n\
         Report generated on: {}\n",
        analysis.channel_id,
        analysis.region,
        analysis.language,
        analysis.analysis_timestamp,
        trending,
        gaps,
        questions,
        regional,
        titles,
        generated_at,
    )
}

/// CSV export of the current video listing.
pub fn videos_csv(videos: &[VideoRecord]) -> String {
    let mut out = String::from("id,title,views,likes,uploadDate\n");
    for video in videos {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&video.id),
            csv_field(&video.title),
            video.views,
            video.likes,
            csv_field(video.upload_date.as_deref().unwrap_or("")),
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategicInsights;

    fn sample_analysis() -> AnalysisResponse {
        AnalysisResponse {
            channel_id: "UC123".to_string(),
            analysis_timestamp: "2024-03-01T12:00:00Z".to_string(),
            region: "global".to_string(),
            language: "en".to_string(),
            strategic_insights: StrategicInsights {
                trending_topics: vec!["rust wasm".to_string(), "yew tutorials".to_string()],
                keyword_gaps: vec!["live_coding".to_string()],
                title_suggestions: vec!["Great Title".to_string(), "  ".to_string()],
                keyword_clusters: serde_json::Map::new(),
                viewer_questions: vec!["How do I start?".to_string()],
                regional_keywords: vec!["rustlang".to_string()],
            },
        }
    }

    #[test]
    fn report_lists_every_section() {
        let report = keyword_report(&sample_analysis(), "2024-03-01 13:00");
        assert!(report.contains("Channel ID: UC123"));
        assert!(report.contains("1. rust wasm"));
        assert!(report.contains("2. yew tutorials"));
        // Underscores in gaps are rendered as spaces.
        assert!(report.contains("- live coding"));
        assert!(report.contains("1. How do I start?"));
        assert!(report.contains("- rustlang"));
        assert!(report.contains("Report generated on: 2024-03-01 13:00"));
    }

    #[test]
    fn blank_title_suggestions_are_skipped() {
        let report = keyword_report(&sample_analysis(), "now");
        assert!(report.contains("1. Great Title"));
        assert!(!report.contains("2. \n"));
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_quotes() {
        let videos = vec![VideoRecord {
            id: "vid1".to_string(),
            title: "Hello, \"World\"".to_string(),
            views: 1000,
            likes: 50,
            upload_date: Some("2024-01-01".to_string()),
            thumbnail_url: None,
        }];
        let csv = videos_csv(&videos);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,title,views,likes,uploadDate"));
        assert_eq!(
            lines.next(),
            Some("vid1,\"Hello, \"\"World\"\"\",1000,50,2024-01-01")
        );
    }

    #[test]
    fn csv_of_empty_listing_is_header_only() {
        assert_eq!(videos_csv(&[]), "id,title,views,likes,uploadDate\n");
    }
}
