use crate::engagement::EngagementPage;
use crate::home::HomePage;
use crate::keywords::KeywordsPage;
use crate::landing::LandingPage;
use crate::videos::VideoInsightsPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/home")]
    Home,
    #[at("/video-insights")]
    VideoInsights,
    #[at("/engagement")]
    Engagement,
    #[at("/keywords")]
    Keywords,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <LandingPage /> },
        Route::Home => html! { <HomePage /> },
        Route::VideoInsights => html! { <VideoInsightsPage /> },
        Route::Engagement => html! { <EngagementPage /> },
        Route::Keywords => html! { <KeywordsPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Landing} classes="text-blue-600 hover:underline">
                        {"Go back to channel lookup"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
