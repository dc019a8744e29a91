use crate::env_variable_utils::{BACKEND_URL, PAGE_LIMIT};
use crate::models::Video;
use crate::videos::api::fetch_videos;
use crate::videos::cursor::CursorToken;
use crate::videos::state::{previous_route, Phase, VideoListAction, VideoListState};
use crate::utils::{format_long_date, format_number, hq_thumbnail_url};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

fn default_api_base() -> AttrValue {
    AttrValue::from(BACKEND_URL.clone())
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    /// Decoded cursor from the route; `None` is the first page.
    #[prop_or_default]
    pub cursor: Option<String>,
    #[prop_or_else(default_api_base)]
    pub api_base: AttrValue,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let state = use_reducer(VideoListState::default);
    let navigator = use_navigator();
    let request_counter = use_mut_ref(|| 0u64);

    let cursor = props
        .cursor
        .as_deref()
        .and_then(CursorToken::new);

    // Fetch on mount and whenever the cursor changes
    {
        let dispatcher = state.dispatcher();

        use_effect_with(
            (cursor.clone(), props.api_base.clone()),
            move |(cursor, api_base)| {
                let request = {
                    let mut counter = request_counter.borrow_mut();
                    *counter += 1;
                    *counter
                };
                dispatcher.dispatch(VideoListAction::Begin { request });

                let cancelled = Rc::new(Cell::new(false));
                {
                    let cancelled = cancelled.clone();
                    let cursor = cursor.clone();
                    let api_base = api_base.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let result = fetch_videos(&api_base, cursor.as_ref(), *PAGE_LIMIT).await;
                        if cancelled.get() {
                            log::debug!("Request {request} was superseded, dropping its result");
                            return;
                        }
                        dispatcher.dispatch(VideoListAction::completed(request, result));
                    });
                }

                move || cancelled.set(true)
            },
        );
    }

    let on_next = {
        let navigator = navigator.clone();
        let target = state.next_route();
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(route)) = (&navigator, &target) {
                navigator.push(route);
            }
        })
    };

    let on_previous = {
        let target = previous_route(cursor.as_ref());
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(route)) = (&navigator, &target) {
                navigator.push(route);
            }
        })
    };

    let on_hover = {
        let dispatcher = state.dispatcher();
        Callback::from(move |video_id: Option<String>| {
            dispatcher.dispatch(VideoListAction::Hover(video_id));
        })
    };

    match &state.phase {
        Phase::Loading => html! { <LoadingSpinner /> },
        Phase::Error(message) => html! { <ErrorView message={message.clone()} /> },
        Phase::Ready(page) => html! {
            <div class="max-w-7xl mx-auto px-4 py-8 space-y-12 bg-gray-900">
                <FeaturedHeader />

                <ul class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8">
                    { for page.data.iter().map(|video| html! {
                        <VideoCard
                            key={video.id.clone()}
                            video={video.clone()}
                            hovered={state.hovered.as_deref() == Some(video.id.as_str())}
                            on_hover={on_hover.clone()}
                        />
                    })}
                </ul>

                <PaginationBar
                    can_previous={cursor.is_some()}
                    can_next={state.next_route().is_some()}
                    total_count={page.pagination.total_count}
                    on_previous={on_previous}
                    on_next={on_next}
                />
            </div>
        },
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="max-w-7xl mx-auto px-4 py-8 bg-gray-900 min-h-screen flex items-center justify-center">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-purple-500"></div>
        </div>
    }
}

pub fn error_text(message: &str) -> String {
    format!("Error: {message}")
}

#[derive(Properties, PartialEq)]
pub struct ErrorViewProps {
    pub message: String,
}

#[function_component(ErrorView)]
pub fn error_view(props: &ErrorViewProps) -> Html {
    html! {
        <div class="max-w-7xl mx-auto px-4 py-8 bg-gray-900 min-h-screen flex items-center justify-center">
            <div class="text-red-500 text-center">{ error_text(&props.message) }</div>
        </div>
    }
}

#[function_component(FeaturedHeader)]
fn featured_header() -> Html {
    html! {
        <div class="relative overflow-hidden rounded-2xl bg-gradient-to-r from-indigo-900 to-purple-900 p-8 text-white">
            <div class="relative z-10">
                <h1 class="text-4xl font-bold mb-4">{"Featured Videos"}</h1>
                <p class="text-lg text-gray-300">{"Discover trending content"}</p>
            </div>
            <div class="absolute top-0 right-0 w-64 h-64 bg-white opacity-5 rounded-full -translate-y-1/2 translate-x-1/2" />
            <div class="absolute bottom-0 left-0 w-32 h-32 bg-white opacity-5 rounded-full translate-y-1/2 -translate-x-1/2" />
        </div>
    }
}

fn overlay_class(base: &str, visible: bool) -> String {
    let opacity = if visible { "opacity-100" } else { "opacity-0" };
    format!("{base} transition-opacity duration-300 {opacity}")
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub hovered: bool,
    pub on_hover: Callback<Option<String>>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    let on_enter = {
        let on_hover = props.on_hover.clone();
        let video_id = video.id.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(video_id.clone())))
    };
    let on_leave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <li class="group" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="h-full overflow-hidden rounded-lg border transition-all duration-500 hover:shadow-2xl bg-gray-800 border-gray-700 hover:border-purple-500 flex flex-col">
                <div class="relative w-full pt-[56.25%] overflow-hidden">
                    <img
                        src={hq_thumbnail_url(&video.thumbnailurl)}
                        alt={video.title.clone()}
                        class="absolute inset-0 w-full h-full object-cover transform transition-transform duration-700 group-hover:scale-110"
                    />
                    <div class={overlay_class("absolute inset-0 bg-gradient-to-t from-black/80 to-transparent", props.hovered)} />
                    <div class={overlay_class("absolute inset-0 flex items-center justify-center", props.hovered)}>
                        <div class="w-16 h-16 bg-purple-500/20 backdrop-blur-sm rounded-full flex items-center justify-center text-white text-2xl">
                            {"▶"}
                        </div>
                    </div>
                </div>
                <div class="p-6 space-y-4 flex-grow">
                    <h2 class="text-lg font-semibold line-clamp-2 h-14 text-gray-100 group-hover:text-purple-400 transition-colors duration-300">
                        {&video.title}
                    </h2>
                    <p class="flex items-center space-x-2 text-sm font-medium text-gray-400">
                        {"👤 "}<span>{&video.channeltitle}</span>
                    </p>
                    <p class="text-sm text-gray-500 line-clamp-2">{&video.description}</p>
                </div>
                <div class="bg-gray-800/50 border-t border-gray-700 p-4 flex items-center justify-center text-sm text-gray-400">
                    {"📅 "}<span>{format_long_date(&video.published_at)}</span>
                </div>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub can_previous: bool,
    pub can_next: bool,
    pub total_count: u64,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

pub fn total_label(total_count: u64) -> String {
    format!("{} videos", format_number(total_count))
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let button_class = "flex items-center space-x-2 px-6 py-2 rounded border transition-all duration-300 bg-gray-800 border-gray-700 hover:bg-gray-700 hover:text-purple-400 hover:border-purple-500 disabled:opacity-50 text-gray-300";

    html! {
        <div class="flex justify-between items-center pt-8 border-t border-gray-700">
            <div class="flex items-center space-x-4">
                <button
                    onclick={props.on_previous.clone()}
                    disabled={!props.can_previous}
                    class={button_class}
                >
                    {"‹ Previous"}
                </button>
                <button
                    onclick={props.on_next.clone()}
                    disabled={!props.can_next}
                    class={button_class}
                >
                    {"Next ›"}
                </button>
            </div>

            <div class="px-4 py-2 bg-gray-800 text-purple-400 border border-purple-500/30 rounded-full text-sm font-medium">
                { total_label(props.total_count) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_prefixed() {
        assert_eq!(error_text("network down"), "Error: network down");
        assert_eq!(
            error_text("Failed to fetch videos"),
            "Error: Failed to fetch videos"
        );
    }

    #[test]
    fn footer_counts_videos() {
        assert_eq!(total_label(10), "10 videos");
        assert_eq!(total_label(0), "0 videos");
        assert_eq!(total_label(12500), "12,500 videos");
    }

    #[test]
    fn overlay_follows_hover() {
        assert!(overlay_class("absolute", true).ends_with("opacity-100"));
        assert!(overlay_class("absolute", false).ends_with("opacity-0"));
    }
}
