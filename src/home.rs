use crate::api::channel::fetch_videos;
use crate::config::VIDEO_SITE_URL;
use crate::layout::MainLayout;
use crate::models::{VideoFilters, VideoRecord};
use crate::session::use_cached_channel;
use crate::utils::format_number;
use crate::videos::VideoTable;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let channel = use_cached_channel();
    let videos = use_state(Vec::<VideoRecord>::default);
    let video_loading = use_state(|| false);
    let show_channel_id = use_state(|| false);

    // Video detail is always fetched fresh, never served from the cache.
    {
        let videos = videos.clone();
        let video_loading = video_loading.clone();
        let channel_id = channel.as_ref().map(|record| record.id.clone());
        use_effect_with(channel_id, move |channel_id| {
            if let Some(id) = channel_id.clone() {
                video_loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_videos(&id, &VideoFilters::default()).await {
                        Ok(list) => videos.set(list),
                        Err(err) => {
                            log::warn!("failed to fetch recent videos: {err}");
                            videos.set(Vec::new());
                        }
                    }
                    video_loading.set(false);
                });
            }
            || ()
        });
    }

    let on_toggle_id = {
        let show_channel_id = show_channel_id.clone();
        Callback::from(move |_: MouseEvent| {
            show_channel_id.set(!*show_channel_id);
        })
    };

    let Some(channel) = channel else {
        return html! {
            <MainLayout>
                <p class="text-gray-200 text-center">{"Loading..."}</p>
            </MainLayout>
        };
    };

    let site = &*VIDEO_SITE_URL;
    let channel_url = format!("{site}/channel/{}", channel.id);

    html! {
        <MainLayout>
            <div class="flex flex-col gap-6">
                <div class="bg-white p-6 rounded-lg shadow flex items-center gap-4">
                    {
                        if let Some(thumbnail) = &channel.thumbnail_url {
                            html! {
                                <img src={thumbnail.clone()} alt="Channel avatar"
                                     class="w-20 h-20 rounded-full object-cover" />
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div>
                        <h1 class="text-2xl font-bold text-gray-800">{ &channel.title }</h1>
                        <a href={channel_url} target="_blank" rel="noopener noreferrer"
                           class="text-blue-600 hover:underline text-sm">
                            {"View channel"}
                        </a>
                        <p class="text-gray-500 text-sm cursor-pointer" onclick={on_toggle_id}>
                            {
                                if *show_channel_id {
                                    channel.id.clone()
                                } else {
                                    "Show Channel ID".to_string()
                                }
                            }
                        </p>
                    </div>
                </div>

                <div>
                    <h2 class="text-xl font-bold text-white mb-2">{"Channel Overview"}</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        <div class="bg-white p-4 rounded-lg shadow text-center">
                            <p class="text-gray-500 text-sm">{"Subscribers"}</p>
                            <p class="text-2xl font-bold text-red-600">
                                { format_number(channel.subscriber_count) }
                            </p>
                        </div>
                        <div class="bg-white p-4 rounded-lg shadow text-center">
                            <p class="text-gray-500 text-sm">{"Total Videos"}</p>
                            <p class="text-2xl font-bold text-red-600">
                                { format_number(channel.video_count) }
                            </p>
                        </div>
                        <div class="bg-white p-4 rounded-lg shadow text-center">
                            <p class="text-gray-500 text-sm">{"Total Views"}</p>
                            <p class="text-2xl font-bold text-red-600">
                                { format_number(channel.view_count) }
                            </p>
                        </div>
                    </div>
                </div>

                <div class="bg-white p-6 rounded-lg shadow">
                    <h2 class="text-xl font-bold text-gray-800 mb-2">{"Description"}</h2>
                    <p class="text-gray-600 whitespace-pre-line">
                        {
                            channel
                                .description
                                .clone()
                                .unwrap_or_else(|| "No channel description available.".to_string())
                        }
                    </p>
                </div>

                <div class="bg-white rounded-lg shadow overflow-x-auto">
                    <h2 class="text-xl font-bold text-gray-800 p-4 pb-0">{"Recent Videos"}</h2>
                    <VideoTable videos={(*videos).clone()} loading={*video_loading} />
                </div>
            </div>
        </MainLayout>
    }
}
