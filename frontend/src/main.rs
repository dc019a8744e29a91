mod env_variable_utils;
mod logging;
mod models;
mod router;
mod utils;
mod videos;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL, PAGE_LIMIT};
use crate::router::{switch, Route, Shell};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell>
                <Switch<Route> render={switch} />
            </Shell>
        </BrowserRouter>
    }
}

fn main() {
    logging::init_logger(is_debug_mode());

    log::info!(
        "NAME: \"{}\", API: \"{}\" PAGE_LIMIT: {:?} DEBUG: \"{}\"",
        get_app_name(),
        &*BACKEND_URL,
        *PAGE_LIMIT,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
