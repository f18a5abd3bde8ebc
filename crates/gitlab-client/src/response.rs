use ureq::http;

/// Snapshot of an HTTP response's status and headers.
///
/// Returned alongside every decoded result, and carried by [`GitLabError`]
/// for API and decode failures, so callers can always inspect what the
/// server actually sent.
///
/// [`GitLabError`]: crate::GitLabError
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub status: u16,
    headers: Vec<(String, String)>,

    // GitLab pagination headers
    pub total_items: Option<u64>,
    pub total_pages: Option<u64>,
    pub items_per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl Response {
    pub(crate) fn from_http<B>(response: &http::Response<B>) -> Self {
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        Self::new(response.status().as_u16(), headers)
    }

    /// Build a response from a status and raw header pairs.
    pub fn new(status: u16, headers: Vec<(String, String)>) -> Self {
        let mut response = Self {
            status,
            headers,
            ..Default::default()
        };

        response.total_items = response.header_u64("x-total");
        response.total_pages = response.header_u64("x-total-pages");
        response.items_per_page = response.header_u64("x-per-page");
        response.current_page = response.header_u64("x-page");
        response.next_page = response.header_u64("x-next-page");
        response.previous_page = response.header_u64("x-prev-page");
        response
    }

    /// Case-insensitive header lookup. Returns the first value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn header_u64(&self, name: &str) -> Option<u64> {
        self.header(name).and_then(|v| v.trim().parse::<u64>().ok())
    }
}
