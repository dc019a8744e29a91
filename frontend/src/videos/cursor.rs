/// Opaque pagination token handed out by the backend.
///
/// Always holds the decoded form. The router encodes and decodes the path
/// segment itself, so `Route::Page` carries the token as-is; the only
/// encoding done here is for the `next_cursor` query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorToken(String);

impl CursorToken {
    /// Returns `None` for an empty token, which means "first page".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn to_query_value(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
