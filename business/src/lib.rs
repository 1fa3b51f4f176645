mod config;
mod feed;
mod user;
pub mod version_info;

pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use feed::{FetchKind, GENERIC_ERROR_MESSAGE, UserFeed};
pub use user::{FetchError, UserItem, UsersResponse, decode_users_response};
