use crate::models::{Pagination, VideosResponse};
use crate::router::Route;
use crate::videos::cursor::CursorToken;
use crate::videos::error::FetchError;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready(VideosResponse),
    Error(String),
}

/// Page state of one mounted `VideoList`.
///
/// `request` is the id of the most recently started fetch; completions
/// carrying any other id are stale and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoListState {
    pub request: u64,
    pub phase: Phase,
    pub hovered: Option<String>,
}

impl Default for VideoListState {
    fn default() -> Self {
        Self {
            request: 0,
            phase: Phase::Loading,
            hovered: None,
        }
    }
}

pub enum VideoListAction {
    Begin { request: u64 },
    Loaded { request: u64, page: VideosResponse },
    Failed { request: u64, message: String },
    Hover(Option<String>),
}

impl VideoListAction {
    pub fn completed(request: u64, result: Result<VideosResponse, FetchError>) -> Self {
        match result {
            Ok(page) => Self::Loaded { request, page },
            Err(e) => Self::Failed {
                request,
                message: e.user_message(),
            },
        }
    }
}

impl Reducible for VideoListState {
    type Action = VideoListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            VideoListAction::Begin { request } => Rc::new(Self {
                request,
                phase: Phase::Loading,
                hovered: None,
            }),
            VideoListAction::Loaded { request, page } if self.accepts(request) => {
                Rc::new(Self {
                    request,
                    phase: Phase::Ready(page),
                    hovered: None,
                })
            }
            VideoListAction::Failed { request, message } if self.accepts(request) => {
                log::error!("Fetch error: {message}");
                Rc::new(Self {
                    request,
                    phase: Phase::Error(message),
                    hovered: None,
                })
            }
            VideoListAction::Loaded { request, .. } | VideoListAction::Failed { request, .. } => {
                log::debug!(
                    "Discarding response for request {request}, current is {}",
                    self.request
                );
                self
            }
            VideoListAction::Hover(hovered) => {
                if !matches!(self.phase, Phase::Ready(_)) || self.hovered == hovered {
                    return self;
                }
                Rc::new(Self {
                    hovered,
                    ..(*self).clone()
                })
            }
        }
    }
}

impl VideoListState {
    fn accepts(&self, request: u64) -> bool {
        request == self.request && self.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match &self.phase {
            Phase::Ready(page) => Some(&page.pagination),
            _ => None,
        }
    }

    pub fn next_route(&self) -> Option<Route> {
        next_route(self.pagination())
    }
}

pub fn next_route(pagination: Option<&Pagination>) -> Option<Route> {
    let pagination = pagination.filter(|p| p.has_next)?;
    let cursor = CursorToken::new(pagination.next_cursor.as_str())?;
    Some(Route::Page {
        cursor: cursor.as_str().to_owned(),
    })
}

/// "Previous" always returns to the first page; there is no cursor history.
pub fn previous_route(current: Option<&CursorToken>) -> Option<Route> {
    current.map(|_| Route::Home)
}
