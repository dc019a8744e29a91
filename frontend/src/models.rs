use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub channeltitle: String,
    pub thumbnailurl: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_cursor: String,
    #[serde(default)]
    pub total_count: u64,
}

/// One page of `/api/getVideos`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideosResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Video>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// The backend encodes an empty result set as `"data": null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_page() {
        let body = r#"{
            "status": "success",
            "data": [{
                "id": "dQw4w9WgXcQ",
                "title": "Rust in 100 seconds",
                "description": "A quick tour",
                "published_at": "2024-03-05T10:00:00Z",
                "channeltitle": "Fireship",
                "thumbnailurl": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"
            }],
            "pagination": { "hasNext": true, "nextCursor": "MjAyNC0wMy0wNQ==", "totalCount": 42 }
        }"#;

        let page: VideosResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.status, "success");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].channeltitle, "Fireship");
        assert!(page.pagination.has_next);
        assert_eq!(page.pagination.next_cursor, "MjAyNC0wMy0wNQ==");
        assert_eq!(page.pagination.total_count, 42);
        assert_eq!(page.message, None);
    }

    #[test]
    fn null_data_and_cursor_become_empty() {
        let body = r#"{
            "status": "success",
            "data": null,
            "pagination": { "hasNext": false, "nextCursor": null, "totalCount": 0 }
        }"#;

        let page: VideosResponse = serde_json::from_str(body).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination, Pagination::default());
    }

    #[test]
    fn error_body_keeps_message() {
        let body = r#"{"status":"error","message":"error in querying database: timeout"}"#;

        let page: VideosResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.status, "error");
        assert_eq!(
            page.message.as_deref(),
            Some("error in querying database: timeout")
        );
    }
}
