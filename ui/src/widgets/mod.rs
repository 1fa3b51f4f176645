mod users;
mod version_label;

pub use users::{
    UserListState, fetch_users, poll_user_list_responses, start_initial_fetch, user_info_overlay,
    user_list_panel,
};
pub use version_label::version_label;
