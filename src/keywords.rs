use crate::api::insights::analyze_keywords;
use crate::layout::MainLayout;
use crate::models::{AnalysisRequest, AnalysisResponse};
use crate::report::keyword_report;
use crate::session::use_cached_channel;
use crate::utils::download_text_file;
use wasm_bindgen::JsValue;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const REGIONS: [(&str, &str); 5] = [
    ("global", "Global"),
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("ca", "Canada"),
    ("au", "Australia"),
];

const LANGUAGES: [(&str, &str); 5] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
];

#[function_component(KeywordsPage)]
pub fn keywords_page() -> Html {
    let channel = use_cached_channel();
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);
    let analysis = use_state(|| None::<AnalysisResponse>);

    let keywords_input = use_node_ref();
    let region_select = use_node_ref();
    let language_select = use_node_ref();

    let on_submit = {
        let loading = loading.clone();
        let error_message = error_message.clone();
        let analysis = analysis.clone();
        let keywords_input = keywords_input.clone();
        let region_select = region_select.clone();
        let language_select = language_select.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(channel_id) = channel_id.clone() else { return };

            let keywords: Vec<String> = keywords_input
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default()
                .split(',')
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect();
            if keywords.is_empty() {
                error_message.set(Some("Please enter at least one keyword.".to_string()));
                return;
            }

            let region = region_select
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| "global".to_string());
            let language = language_select
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| "en".to_string());

            let request = AnalysisRequest {
                channel_id,
                keywords,
                region,
                language,
            };

            let loading = loading.clone();
            let error_message = error_message.clone();
            let analysis = analysis.clone();
            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match analyze_keywords(&request).await {
                    Ok(response) => analysis.set(Some(response)),
                    Err(err) => error_message.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_export = {
        let analysis = analysis.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(analysis) = &*analysis else { return };
            let now = js_sys::Date::new_0();
            let generated_at = String::from(now.to_locale_string("en-US", &JsValue::UNDEFINED));
            let iso = String::from(now.to_iso_string());
            let day = iso.split('T').next().unwrap_or("").to_string();
            let report = keyword_report(analysis, &generated_at);
            download_text_file(
                &format!("keyword_report_{}_{day}.txt", analysis.channel_id),
                "text/plain",
                &report,
            );
        })
    };

    let Some(channel) = channel else {
        return html! {
            <MainLayout>
                <p class="text-gray-200 text-center">{"Loading..."}</p>
            </MainLayout>
        };
    };

    html! {
        <MainLayout>
            <div class="flex flex-col gap-6">
                <h1 class="text-2xl font-bold text-white">{"Keyword Intelligence Analysis"}</h1>

                <form onsubmit={on_submit} class="bg-white p-6 rounded-lg shadow flex flex-col gap-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <label class="flex flex-col text-sm text-gray-700">
                            {"Channel ID"}
                            <input type="text" value={channel.id.clone()} readonly=true
                                   class="p-2 border border-gray-300 rounded bg-gray-100" />
                        </label>
                        <label class="flex flex-col text-sm text-gray-700">
                            {"Keywords (comma separated)"}
                            <textarea ref={keywords_input} rows="3"
                                      placeholder="e.g., Blockchain, AI, Machine Learning"
                                      class="p-2 border border-gray-300 rounded" />
                        </label>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <label class="flex flex-col text-sm text-gray-700">
                            {"Region"}
                            <select ref={region_select} class="p-2 border border-gray-300 rounded">
                                {
                                    for REGIONS.iter().map(|(key, label)| html! {
                                        <option value={*key} selected={*key == "global"}>{ *label }</option>
                                    })
                                }
                            </select>
                        </label>
                        <label class="flex flex-col text-sm text-gray-700">
                            {"Language"}
                            <select ref={language_select} class="p-2 border border-gray-300 rounded">
                                {
                                    for LANGUAGES.iter().map(|(key, label)| html! {
                                        <option value={*key} selected={*key == "en"}>{ *label }</option>
                                    })
                                }
                            </select>
                        </label>
                    </div>
                    <button type="submit" disabled={*loading}
                            class="bg-blue-600 text-white px-4 py-3 rounded hover:bg-blue-700 disabled:opacity-50">
                        { if *loading { "Analyzing keywords..." } else { "Analyze Keywords" } }
                    </button>
                </form>

                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-400">{ format!("Error: {msg}") }</p> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(analysis) = &*analysis {
                        render_results(analysis, &on_export)
                    } else {
                        html! {}
                    }
                }
            </div>
        </MainLayout>
    }
}

fn render_results(analysis: &AnalysisResponse, on_export: &Callback<MouseEvent>) -> Html {
    let insights = &analysis.strategic_insights;

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex justify-end">
                <button onclick={on_export.clone()}
                        class="bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700">
                    {"Export Report"}
                </button>
            </div>

            <div class="bg-white p-4 rounded-lg shadow grid grid-cols-1 sm:grid-cols-3 gap-4 text-center">
                <div>
                    <p class="text-gray-500 text-sm">{"Channel ID"}</p>
                    <p class="font-bold text-gray-800">{ &analysis.channel_id }</p>
                </div>
                <div>
                    <p class="text-gray-500 text-sm">{"Region"}</p>
                    <p class="font-bold text-gray-800">{ &analysis.region }</p>
                </div>
                <div>
                    <p class="text-gray-500 text-sm">{"Language"}</p>
                    <p class="font-bold text-gray-800">{ &analysis.language }</p>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="bg-white p-4 rounded-lg shadow">
                    <h2 class="text-lg font-bold text-gray-800 mb-2">{"Trending Topics"}</h2>
                    <ol class="list-decimal list-inside text-gray-700">
                        { for insights.trending_topics.iter().map(|topic| html! { <li>{ topic }</li> }) }
                    </ol>
                </div>
                <div class="bg-white p-4 rounded-lg shadow">
                    <h2 class="text-lg font-bold text-gray-800 mb-2">{"Keyword Gaps"}</h2>
                    <div class="flex flex-wrap gap-2">
                        {
                            for insights.keyword_gaps.iter().map(|gap| html! {
                                <span class="bg-orange-100 text-orange-800 px-2 py-1 rounded text-sm">
                                    { gap.replace('_', " ") }
                                </span>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="bg-white p-4 rounded-lg shadow">
                    <h2 class="text-lg font-bold text-gray-800 mb-2">{"Viewer Questions"}</h2>
                    <ol class="list-decimal list-inside text-gray-700">
                        { for insights.viewer_questions.iter().map(|question| html! { <li>{ question }</li> }) }
                    </ol>
                </div>
                <div class="bg-white p-4 rounded-lg shadow">
                    <h2 class="text-lg font-bold text-gray-800 mb-2">{"Regional Keywords"}</h2>
                    <div class="flex flex-wrap gap-2">
                        {
                            for insights.regional_keywords.iter().map(|keyword| html! {
                                <span class="bg-green-100 text-green-800 px-2 py-1 rounded text-sm">
                                    { keyword }
                                </span>
                            })
                        }
                    </div>
                </div>
            </div>

            {
                if insights.title_suggestions.iter().any(|s| !s.trim().is_empty()) {
                    html! {
                        <div class="bg-white p-4 rounded-lg shadow">
                            <h2 class="text-lg font-bold text-gray-800 mb-2">{"Title Suggestions"}</h2>
                            <ol class="list-decimal list-inside text-gray-700">
                                {
                                    for insights
                                        .title_suggestions
                                        .iter()
                                        .filter(|s| !s.trim().is_empty())
                                        .map(|suggestion| html! { <li>{ suggestion }</li> })
                                }
                            </ol>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
