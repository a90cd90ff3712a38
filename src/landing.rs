use crate::api::channel::{fetch_channel_by_id, fetch_channel_by_title, fetch_channel_by_url};
use crate::cache::ChannelCache;
use crate::config::get_video_site_url;
use crate::router::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupKind {
    Url,
    Id,
    Title,
}

impl LookupKind {
    fn display_name(&self) -> &'static str {
        match self {
            LookupKind::Url => "Channel URL",
            LookupKind::Id => "Channel ID",
            LookupKind::Title => "Channel Title",
        }
    }

    fn placeholder(&self) -> String {
        match self {
            LookupKind::Url => format!("{}/@channelname", get_video_site_url()),
            LookupKind::Id => "UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string(),
            LookupKind::Title => "Channel Title".to_string(),
        }
    }

    fn all_variants() -> [Self; 3] {
        [LookupKind::Url, LookupKind::Id, LookupKind::Title]
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator();
    let lookup_kind = use_state(|| LookupKind::Url);
    let channel_input = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    let on_input = {
        let channel_input = channel_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            channel_input.set(value);
        })
    };

    let on_submit = {
        let lookup_kind = lookup_kind.clone();
        let channel_input = channel_input.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = (*channel_input).trim().to_string();
            if input.is_empty() {
                error_message.set(Some("Please enter channel information.".to_string()));
                return;
            }

            let kind = *lookup_kind;
            let loading = loading.clone();
            let error_message = error_message.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match kind {
                    LookupKind::Url => fetch_channel_by_url(&input).await,
                    LookupKind::Id => fetch_channel_by_id(&input).await,
                    LookupKind::Title => fetch_channel_by_title(&input).await,
                };

                let cache = ChannelCache::browser();
                match result {
                    Ok(record) => {
                        // Replace whatever channel was selected before.
                        cache.clear();
                        match cache.store(&record) {
                            Ok(()) => {
                                if let Some(navigator) = &navigator {
                                    navigator.push(&Route::Home);
                                }
                            }
                            Err(err) => {
                                cache.clear();
                                error_message
                                    .set(Some(format!("Failed to store channel data: {err}")));
                            }
                        }
                    }
                    Err(err) => {
                        cache.clear();
                        error_message.set(Some(format!(
                            "Failed to fetch channel information: {err}"
                        )));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {"Channel Analyzer"}
                </h1>

                <div class="flex justify-center gap-4 mb-4">
                    {
                        for LookupKind::all_variants().into_iter().map(|kind| {
                            let kind_handle = lookup_kind.clone();
                            let channel_input = channel_input.clone();
                            let onchange = Callback::from(move |_| {
                                kind_handle.set(kind);
                                // Clear input when the lookup type changes.
                                channel_input.set(String::new());
                            });
                            html! {
                                <label class="inline-flex items-center text-gray-700">
                                    <input
                                        type="radio"
                                        name="lookup-kind"
                                        class="mr-1"
                                        checked={*lookup_kind == kind}
                                        onchange={onchange}
                                    />
                                    { kind.display_name() }
                                </label>
                            }
                        })
                    }
                </div>

                <form onsubmit={on_submit} class="flex flex-col gap-4">
                    <input
                        type="text"
                        class="p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder={lookup_kind.placeholder()}
                        value={(*channel_input).clone()}
                        oninput={on_input}
                        disabled={*loading}
                    />
                    <button
                        type="submit"
                        class="bg-blue-600 text-white p-3 rounded-lg hover:bg-blue-700 disabled:opacity-50"
                        disabled={*loading}
                    >
                        { if *loading { "Analyzing..." } else { "Analyze Channel" } }
                    </button>
                </form>

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <p class="text-red-600 text-center mt-4">{ msg.clone() }</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
