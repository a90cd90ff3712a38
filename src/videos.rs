use crate::api::channel::fetch_videos;
use crate::config::VIDEO_SITE_URL;
use crate::layout::MainLayout;
use crate::models::{VideoFilters, VideoRecord, VideoSort};
use crate::report::videos_csv;
use crate::session::use_cached_channel;
use crate::utils::{download_text_file, format_iso8601_date, format_number};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub videos: Vec<VideoRecord>,
    pub loading: bool,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    if props.loading {
        return html! { <p class="text-gray-500 text-center p-4">{"Loading videos..."}</p> };
    }
    if props.videos.is_empty() {
        return html! {
            <p class="text-gray-500 text-center p-4">
                {"No videos found. Try adjusting your filters."}
            </p>
        };
    }

    let site = &*VIDEO_SITE_URL;
    html! {
        <table class="w-full text-left text-gray-800">
            <thead>
                <tr class="border-b border-gray-300">
                    <th class="p-2">{"Thumbnail"}</th>
                    <th class="p-2">{"Title"}</th>
                    <th class="p-2">{"Views"}</th>
                    <th class="p-2">{"Likes"}</th>
                    <th class="p-2">{"Published"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for props.videos.iter().map(|video| {
                        let watch_url = format!("{site}/watch?v={}", video.id);
                        html! {
                            <tr class="border-b border-gray-200">
                                <td class="p-2">
                                    {
                                        if let Some(thumbnail) = &video.thumbnail_url {
                                            html! {
                                                <img src={thumbnail.clone()} alt="Video thumbnail"
                                                     class="w-28 h-16 object-cover rounded" />
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </td>
                                <td class="p-2">
                                    <a href={watch_url} target="_blank" rel="noopener noreferrer"
                                       class="text-blue-600 hover:underline">
                                        { &video.title }
                                    </a>
                                </td>
                                <td class="p-2">{ format_number(video.views) }</td>
                                <td class="p-2">{ format_number(video.likes) }</td>
                                <td class="p-2">
                                    { video.upload_date.as_deref().map(format_iso8601_date).unwrap_or_else(|| "-".to_string()) }
                                </td>
                            </tr>
                        }
                    })
                }
            </tbody>
        </table>
    }
}

#[function_component(VideoInsightsPage)]
pub fn video_insights_page() -> Html {
    let channel = use_cached_channel();
    let videos = use_state(Vec::<VideoRecord>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    let sort_select = use_node_ref();
    let max_videos_input = use_node_ref();
    let min_views_input = use_node_ref();
    let min_likes_input = use_node_ref();

    // Shared fetch closure used by initial load, apply and clear.
    let run_fetch = {
        let videos = videos.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move |channel_id: String, filters: VideoFilters| {
            let videos = videos.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            loading.set(true);
            error_message.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos(&channel_id, &filters).await {
                    Ok(list) => videos.set(list),
                    Err(err) => {
                        error_message.set(Some(err.to_string()));
                        videos.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let run_fetch = run_fetch.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        use_effect_with(channel_id, move |channel_id| {
            if let Some(id) = channel_id.clone() {
                run_fetch(id, VideoFilters::default());
            }
            || ()
        });
    }

    let read_filters = {
        let sort_select = sort_select.clone();
        let max_videos_input = max_videos_input.clone();
        let min_views_input = min_views_input.clone();
        let min_likes_input = min_likes_input.clone();
        move || -> VideoFilters {
            let sort_by = sort_select
                .cast::<HtmlSelectElement>()
                .and_then(|select| VideoSort::from_key(&select.value()));
            let max_videos = max_videos_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok());
            let min_views = min_views_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u64>().ok());
            let min_likes = min_likes_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u64>().ok());
            VideoFilters {
                sort_by,
                max_videos,
                min_views,
                min_likes,
            }
        }
    };

    let on_apply = {
        let run_fetch = run_fetch.clone();
        let read_filters = read_filters.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(id) = channel_id.clone() {
                run_fetch(id, read_filters());
            }
        })
    };

    let on_clear = {
        let run_fetch = run_fetch.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        let sort_select = sort_select.clone();
        let max_videos_input = max_videos_input.clone();
        let min_views_input = min_views_input.clone();
        let min_likes_input = min_likes_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(select) = sort_select.cast::<HtmlSelectElement>() {
                select.set_value(VideoSort::Recency.wire_key());
            }
            if let Some(input) = max_videos_input.cast::<HtmlInputElement>() {
                input.set_value("50");
            }
            if let Some(input) = min_views_input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = min_likes_input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(id) = channel_id.clone() {
                run_fetch(id, VideoFilters::default());
            }
        })
    };

    let on_export = {
        let videos = videos.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        Callback::from(move |_: MouseEvent| {
            let Some(id) = channel_id.clone() else { return };
            let csv = videos_csv(&videos);
            download_text_file(&format!("videos_{id}.csv"), "text/csv", &csv);
        })
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
            <div class="flex flex-col gap-6">
                <h1 class="text-2xl font-bold text-white">{"Video Insights"}</h1>

                <form onsubmit={on_apply} class="bg-white p-4 rounded-lg shadow flex flex-wrap items-end gap-4">
                    <label class="flex flex-col text-sm text-gray-700">
                        {"Sort By"}
                        <select ref={sort_select} class="p-2 border border-gray-300 rounded">
                            {
                                for VideoSort::all_variants().into_iter().map(|sort| html! {
                                    <option value={sort.wire_key()}
                                            selected={sort == VideoSort::Recency}>
                                        { sort.display_name() }
                                    </option>
                                })
                            }
                        </select>
                    </label>
                    <label class="flex flex-col text-sm text-gray-700">
                        {"Max Videos"}
                        <input ref={max_videos_input} type="number" min="1" max="100" value="50"
                               class="p-2 border border-gray-300 rounded w-24" />
                    </label>
                    <label class="flex flex-col text-sm text-gray-700">
                        {"Min Views"}
                        <input ref={min_views_input} type="number" min="0"
                               class="p-2 border border-gray-300 rounded w-28" />
                    </label>
                    <label class="flex flex-col text-sm text-gray-700">
                        {"Min Likes"}
                        <input ref={min_likes_input} type="number" min="0"
                               class="p-2 border border-gray-300 rounded w-28" />
                    </label>
                    <button type="submit"
                            class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700">
                        {"Apply Filters"}
                    </button>
                    <button type="button" onclick={on_clear}
                            class="bg-gray-200 text-gray-800 px-4 py-2 rounded hover:bg-gray-300">
                        {"Clear Filters"}
                    </button>
                    <button type="button" onclick={on_export}
                            class="bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700">
                        {"Export CSV"}
                    </button>
                </form>

                {
                    if let Some(msg) = &*error_message {
                        html! { <p class="text-red-400">{ format!("Error: {msg}") }</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="bg-white rounded-lg shadow overflow-x-auto">
                    <VideoTable videos={(*videos).clone()} loading={*loading} />
                </div>
            </div>
        </MainLayout>
    }
}
