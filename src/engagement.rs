use crate::api::channel::{fetch_analytics, fetch_trends};
use crate::charts::{bar_rects, polyline_points, series_max};
use crate::growth::{growth_summary, GrowthSummary};
use crate::layout::MainLayout;
use crate::models::{AnalyticsSummary, PerformanceSample, TrendsData};
use crate::session::use_cached_channel;
use crate::utils::{format_number, format_percent};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Analytics,
    Trends,
}

#[function_component(EngagementPage)]
pub fn engagement_page() -> Html {
    let channel = use_cached_channel();
    let active_tab = use_state(|| Tab::Analytics);

    let analytics = use_state(|| None::<AnalyticsSummary>);
    let analytics_loading = use_state(|| false);
    let analytics_error = use_state(Option::<String>::default);

    let trends = use_state(|| None::<TrendsData>);
    let trends_loading = use_state(|| false);
    let trends_error = use_state(Option::<String>::default);

    // Trailing sub-window of the performance series shown in the trends
    // tab. usize::MAX means "all".
    let video_limit = use_state(|| 20usize);

    {
        let analytics = analytics.clone();
        let analytics_loading = analytics_loading.clone();
        let analytics_error = analytics_error.clone();
        let trends = trends.clone();
        let trends_loading = trends_loading.clone();
        let trends_error = trends_error.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        let tab = *active_tab;

        use_effect_with((channel_id, tab), move |(channel_id, tab)| {
            if let Some(id) = channel_id.clone() {
                match tab {
                    Tab::Analytics => {
                        analytics_loading.set(true);
                        analytics_error.set(None);
                        wasm_bindgen_futures::spawn_local(async move {
                            match fetch_analytics(&id).await {
                                Ok(summary) => analytics.set(Some(summary)),
                                Err(err) => analytics_error.set(Some(err.to_string())),
                            }
                            analytics_loading.set(false);
                        });
                    }
                    Tab::Trends => {
                        trends_loading.set(true);
                        trends_error.set(None);
                        wasm_bindgen_futures::spawn_local(async move {
                            match fetch_trends(&id).await {
                                Ok(data) => trends.set(Some(data)),
                                Err(err) => trends_error.set(Some(err.to_string())),
                            }
                            trends_loading.set(false);
                        });
                    }
                }
            }
            || ()
        });
    }

    let on_limit_change = {
        let video_limit = video_limit.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let limit = match value.as_str() {
                "all" => usize::MAX,
                other => other.parse().unwrap_or(20),
            };
            video_limit.set(limit);
        })
    };

    let tab_button = |tab: Tab, label: &str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
        let class = if is_active {
            "px-4 py-2 rounded-t bg-white text-gray-800 font-bold"
        } else {
            "px-4 py-2 rounded-t bg-gray-500 text-gray-100 hover:bg-gray-400"
        };
        html! { <button class={class} onclick={onclick}>{ label }</button> }
    };

    let Some(_channel) = channel else {
        return html! {
            <MainLayout>
                <p class="text-gray-200 text-center">{"Loading..."}</p>
            </MainLayout>
        };
    };

    html! {
        <MainLayout>
            <div class="flex flex-col gap-4">
                <h1 class="text-2xl font-bold text-white">{"Engagement Analytics"}</h1>
                <p class="text-gray-300 text-sm">
                    {"Key engagement metrics and trends for the selected channel."}
                </p>

                <div class="flex gap-2">
                    { tab_button(Tab::Analytics, "Analytics Overview") }
                    { tab_button(Tab::Trends, "Trends Analysis") }
                </div>

                {
                    match *active_tab {
                        Tab::Analytics => render_analytics(
                            &analytics,
                            *analytics_loading,
                            &analytics_error,
                        ),
                        Tab::Trends => render_trends(
                            &trends,
                            *trends_loading,
                            &trends_error,
                            *video_limit,
                            &on_limit_change,
                        ),
                    }
                }
            </div>
        </MainLayout>
    }
}

fn render_analytics(
    analytics: &Option<AnalyticsSummary>,
    loading: bool,
    error: &Option<String>,
) -> Html {
    if loading {
        return html! { <p class="text-gray-200 text-center p-4">{"Loading..."}</p> };
    }
    if let Some(msg) = error {
        return html! { <p class="text-red-400">{ format!("Error: {msg}") }</p> };
    }
    let Some(analytics) = analytics else {
        return html! {
            <p class="text-gray-300">{"No analytics data available for this channel."}</p>
        };
    };

    let chart = analytics.trends.as_ref().map(|series| {
        let views: Vec<f64> = series.views.iter().map(|&v| v as f64).collect();
        let likes: Vec<f64> = series.likes.iter().map(|&v| v as f64).collect();
        let comments: Vec<f64> = series.comments.iter().map(|&v| v as f64).collect();
        let max = series_max(&[&views, &likes, &comments]);
        metric_line_chart(&views, &likes, &comments, max)
    });

    html! {
        <div class="flex flex-col gap-4">
            {
                if let Some(chart) = chart {
                    html! { <div class="bg-white p-4 rounded-lg shadow">{ chart }</div> }
                } else {
                    html! {}
                }
            }
            <div class="bg-white p-4 rounded-lg shadow">
                <h2 class="text-lg font-bold text-gray-800">{ &analytics.channel_title }</h2>
                <p class="text-gray-500 text-sm">{ format!("Channel ID: {}", analytics.channel_id) }</p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                { stat_card("Avg. Views", format_number(analytics.average_views.round() as u64), "text-blue-600") }
                { stat_card("Like-to-View Ratio", format_percent(analytics.like_to_view_ratio * 100.0), "text-green-600") }
                { stat_card("Comment-to-View Ratio", format_percent(analytics.comment_to_view_ratio * 100.0), "text-yellow-600") }
                { stat_card("Total Videos", format_number(analytics.total_videos), "text-purple-600") }
            </div>
        </div>
    }
}

fn render_trends(
    trends: &Option<TrendsData>,
    loading: bool,
    error: &Option<String>,
    video_limit: usize,
    on_limit_change: &Callback<Event>,
) -> Html {
    if loading {
        return html! { <p class="text-gray-200 text-center p-4">{"Loading..."}</p> };
    }
    if let Some(msg) = error {
        return html! { <p class="text-red-400">{ format!("Error: {msg}") }</p> };
    }
    let Some(trends) = trends else {
        return html! {
            <p class="text-gray-300">{"No trends data available for this channel."}</p>
        };
    };
    if trends.performance.is_empty() {
        return html! {
            <p class="text-gray-300">{"No performance data available for this channel."}</p>
        };
    }

    let total = trends.performance.len();
    let start = total.saturating_sub(video_limit);
    let recent: &[PerformanceSample] = &trends.performance[start..];
    let growth = growth_summary(recent);

    let views: Vec<f64> = recent.iter().map(|s| s.views as f64).collect();
    let likes: Vec<f64> = recent.iter().map(|s| s.likes as f64).collect();
    let comments: Vec<f64> = recent.iter().map(|s| s.comments as f64).collect();
    let max = series_max(&[&views, &likes, &comments]);

    let first_date = recent
        .first()
        .map(|s| s.upload_date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let last_date = recent
        .last()
        .map(|s| s.upload_date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let rolling_start = trends.rolling_averages.len().saturating_sub(video_limit);
    let rolling: Vec<f64> = trends.rolling_averages[rolling_start..]
        .iter()
        .map(|point| point.average_views)
        .collect();
    let rolling_max = series_max(&[&rolling]);

    let weekly_start = trends.upload_frequency_weekly.len().saturating_sub(12);
    let weekly = &trends.upload_frequency_weekly[weekly_start..];
    let weekly_counts: Vec<f64> = weekly.iter().map(|point| point.count as f64).collect();
    let weekly_max = series_max(&[&weekly_counts]);

    html! {
        <div class="flex flex-col gap-4">
            { growth_cards(&growth) }

            <div class="bg-white p-4 rounded-lg shadow">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-lg font-bold text-gray-800">
                        { format!("Performance Over Time ({} Videos)", recent.len()) }
                    </h2>
                    <select onchange={on_limit_change.clone()} class="p-2 border border-gray-300 rounded">
                        <option value="10" selected={video_limit == 10}>{"Last 10"}</option>
                        <option value="20" selected={video_limit == 20}>{"Last 20"}</option>
                        <option value="50" selected={video_limit == 50}>{"Last 50"}</option>
                        <option value="100" selected={video_limit == 100}>{"Last 100"}</option>
                        <option value="all" selected={video_limit == usize::MAX}>{"All"}</option>
                    </select>
                </div>
                { metric_line_chart(&views, &likes, &comments, max) }
                <div class="flex justify-between text-xs text-gray-500 mt-1">
                    <span>{ first_date }</span>
                    <span>{ last_date }</span>
                </div>
            </div>

            {
                if rolling.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="bg-white p-4 rounded-lg shadow">
                            <h2 class="text-lg font-bold text-gray-800 mb-2">{"Rolling Average Views"}</h2>
                            <svg viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} class="w-full h-48">
                                <polyline
                                    points={polyline_points(&rolling, rolling_max, CHART_WIDTH, CHART_HEIGHT)}
                                    fill="none" stroke="#1890ff" stroke-width="2" />
                            </svg>
                        </div>
                    }
                }
            }

            {
                if weekly.is_empty() {
                    html! {}
                } else {
                    let bars = bar_rects(&weekly_counts, weekly_max, CHART_WIDTH, CHART_HEIGHT);
                    html! {
                        <div class="bg-white p-4 rounded-lg shadow">
                            <h2 class="text-lg font-bold text-gray-800 mb-2">
                                {"Weekly Upload Frequency (Last 12 Weeks)"}
                            </h2>
                            <svg viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} class="w-full h-48">
                                {
                                    for bars.iter().map(|bar| html! {
                                        <rect x={bar.x.to_string()} y={bar.y.to_string()}
                                              width={bar.width.to_string()} height={bar.height.to_string()}
                                              fill="#722ed1" />
                                    })
                                }
                            </svg>
                            <div class="flex justify-between text-xs text-gray-500 mt-1">
                                <span>{ weekly.first().map(|point| point.week.clone()).unwrap_or_default() }</span>
                                <span>{ weekly.last().map(|point| point.week.clone()).unwrap_or_default() }</span>
                            </div>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn growth_cards(growth: &GrowthSummary) -> Html {
    let card = |label: &str, value: f64| {
        let color = if value >= 0.0 {
            "text-green-600"
        } else {
            "text-red-600"
        };
        html! {
            <div class="bg-white p-4 rounded-lg shadow text-center">
                <p class="text-gray-500 text-sm">
                    { format!("{label} Growth (Avg. of First 5 vs. Last 5 Videos)") }
                </p>
                <p class={format!("text-2xl font-bold {color}")}>{ format_percent(value) }</p>
            </div>
        }
    };
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            { card("Views", growth.views) }
            { card("Likes", growth.likes) }
            { card("Comments", growth.comments) }
        </div>
    }
}

fn metric_line_chart(views: &[f64], likes: &[f64], comments: &[f64], max: f64) -> Html {
    html! {
        <>
            <svg viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")} class="w-full h-48">
                <polyline points={polyline_points(views, max, CHART_WIDTH, CHART_HEIGHT)}
                          fill="none" stroke="#1890ff" stroke-width="2" />
                <polyline points={polyline_points(likes, max, CHART_WIDTH, CHART_HEIGHT)}
                          fill="none" stroke="#52c41a" stroke-width="2" />
                <polyline points={polyline_points(comments, max, CHART_WIDTH, CHART_HEIGHT)}
                          fill="none" stroke="#faad14" stroke-width="2" />
            </svg>
            <div class="flex gap-4 text-xs text-gray-600 mt-1">
                <span class="flex items-center gap-1">
                    <span class="inline-block w-3 h-1 bg-blue-600"></span>{"Views"}
                </span>
                <span class="flex items-center gap-1">
                    <span class="inline-block w-3 h-1 bg-green-600"></span>{"Likes"}
                </span>
                <span class="flex items-center gap-1">
                    <span class="inline-block w-3 h-1 bg-yellow-600"></span>{"Comments"}
                </span>
            </div>
        </>
    }
}

fn stat_card(label: &str, value: String, color: &'static str) -> Html {
    html! {
        <div class="bg-white p-4 rounded-lg shadow text-center">
            <p class="text-gray-500 text-sm">{ label }</p>
            <p class={format!("text-2xl font-bold {color}")}>{ value }</p>
        </div>
    }
}
