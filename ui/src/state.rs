use repute_business::ApiConfig;

use crate::widgets::UserListState;

/// The main application state.
pub struct State {
    /// Endpoint configuration for the Stack Exchange API.
    pub config: ApiConfig,
    /// The user list screen state.
    pub user_list: UserListState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            config: ApiConfig::default(),
            user_list: UserListState::new(),
        }
    }
}

impl State {
    /// State pointed at a test server (wiremock) instead of the real API.
    pub fn test(base_url: String) -> Self {
        Self {
            config: ApiConfig::new(base_url),
            user_list: UserListState::new(),
        }
    }
}
