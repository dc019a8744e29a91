use crate::models::VideosResponse;
use crate::videos::cursor::CursorToken;
use crate::videos::error::FetchError;
use gloo_net::http::Request;

pub const VIDEOS_PATH: &str = "/api/getVideos";

pub fn videos_url(base_url: &str, cursor: Option<&CursorToken>, limit: Option<u32>) -> String {
    let mut params = Vec::new();
    if let Some(cursor) = cursor {
        params.push(format!("next_cursor={}", cursor.to_query_value()));
    }
    if let Some(limit) = limit {
        params.push(format!("limit={limit}"));
    }

    if params.is_empty() {
        format!("{base_url}{VIDEOS_PATH}")
    } else {
        format!("{base_url}{VIDEOS_PATH}?{}", params.join("&"))
    }
}

pub fn parse_videos_response(body: &str) -> Result<VideosResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub async fn fetch_videos(
    base_url: &str,
    cursor: Option<&CursorToken>,
    limit: Option<u32>,
) -> Result<VideosResponse, FetchError> {
    let url = videos_url(base_url, cursor, limit);
    log::debug!("GET {url}");

    let response = Request::get(&url).send().await?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        // Error bodies share the page envelope; only the log sees the detail.
        match parse_videos_response(&text).ok().and_then(|body| body.message) {
            Some(message) => log::error!("Fetching videos failed: HTTP {status} - {message}"),
            None => log::error!("Fetching videos failed: HTTP {status} - {text}"),
        }
        return Err(FetchError::Status(status));
    }

    let text = response.text().await?;
    let page = parse_videos_response(&text)?;
    log::debug!(
        "Received {} videos (status \"{}\", has_next: {})",
        page.data.len(),
        page.status,
        page.pagination.has_next
    );
    Ok(page)
}
