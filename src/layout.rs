use crate::config::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex bg-gray-700">
            <nav class="w-64 bg-gray-800 text-gray-100 p-4 flex flex-col gap-2">
                <span class="text-lg font-bold mb-4">{ get_app_name() }</span>
                <Link<Route> to={Route::Landing} classes="hover:underline">
                    {"Home / Search"}
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="hover:underline">
                    {"Dashboard"}
                </Link<Route>>
                <Link<Route> to={Route::VideoInsights} classes="hover:underline">
                    {"Video Insights"}
                </Link<Route>>
                <Link<Route> to={Route::Engagement} classes="hover:underline">
                    {"Engagement"}
                </Link<Route>>
                <Link<Route> to={Route::Keywords} classes="hover:underline">
                    {"Keyword Analysis"}
                </Link<Route>>
            </nav>
            <main class="flex-grow p-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
