use std::fmt::Write as _;

/// Default Stack Exchange API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.stackexchange.com/2.2";

/// Configuration for the Stack Exchange users endpoint.
///
/// The query parameters are fixed for this app: users of the Stack Overflow
/// site, ordered by reputation, descending. Only the base URL varies, so
/// integration tests can point the app at a local mock server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub order: &'static str,
    pub sort: &'static str,
    pub site: &'static str,
}

impl ApiConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            ..Self::default()
        }
    }

    /// URL for one page of the users listing.
    pub fn users_url(&self, page: u32) -> String {
        let mut url = format!("{}/users", self.api_base_url);
        let _ = write!(
            url,
            "?page={page}&order={}&sort={}&site={}",
            self.order, self.sort, self.site
        );
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            order: "desc",
            sort: "reputation",
            site: "stackoverflow",
        }
    }
}
