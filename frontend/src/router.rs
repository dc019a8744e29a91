use crate::env_variable_utils::get_app_name;
use crate::videos::components::VideoList;
use yew::prelude::*;
use yew_router::prelude::*;

/// `Page::cursor` holds the decoded cursor; the router percent-encodes it in
/// `to_path` and decodes it in `recognize`.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:cursor")]
    Page { cursor: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <VideoList /> },
        Route::Page { cursor } => html! { <VideoList cursor={Some(cursor)} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="bg-[#1a1d24] p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-100 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-purple-400 hover:underline">
                        {"Go back to the first page"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-[#0f1117]">
            <nav class="bg-[#1a1d24] border-b border-gray-800 fixed w-full z-10">
                <div class="max-w-[1800px] mx-auto px-4">
                    <div class="flex items-center h-14">
                        <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                            <span class="text-red-500 text-xl">{"▶"}</span>
                            <span class="font-semibold text-lg text-white">{get_app_name()}</span>
                        </Link<Route>>
                    </div>
                </div>
            </nav>

            <main class="flex-grow pt-14">
                <div class="max-w-[1800px] mx-auto p-4">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}
