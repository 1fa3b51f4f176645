//! The user list screen.
//!
//! Submodules:
//! - `state`: widget state (feed, overlay, reveal and scroll flags)
//! - `api`: the HTTP fetch and its hand-off back to the UI thread
//! - `panel`: the list panel, infinite-scroll trigger and polling
//! - `overlay`: the dismissible full-screen layer

mod api;
mod overlay;
mod panel;
mod state;

pub use api::fetch_users;
pub use overlay::user_info_overlay;
pub use panel::{poll_user_list_responses, start_initial_fetch, user_list_panel};
pub use state::UserListState;
