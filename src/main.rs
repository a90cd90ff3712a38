mod api;
mod cache;
mod charts;
mod config;
mod engagement;
mod growth;
mod home;
mod keywords;
mod landing;
mod layout;
mod models;
mod report;
mod router;
mod session;
mod utils;
mod videos;

use crate::config::{get_ai_api_url, get_analytics_api_url, get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", ANALYTICS API: \"{}\", AI API: \"{}\", DEBUG: \"{}\"",
            get_app_name(),
            get_analytics_api_url(),
            get_ai_api_url(),
            is_debug_mode()
        )
        .into(),
    );
}
