//! Pagination/refresh state for the user list.
//!
//! The page cursor lives in [`UserFeed`] as the single source of truth,
//! updated atomically with the decision to fetch. Pagination and refresh
//! share one in-flight token: while a fetch is pending, neither path may
//! start another request, so the two cannot race.

use log::warn;

use crate::user::UserItem;

/// The one user-visible failure message. Causes go to the log, not the screen.
pub const GENERIC_ERROR_MESSAGE: &str = "Something just went wrong!";

/// Which operation owns the in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Appends the next page to the display list.
    LoadMore,
    /// Replaces the display list with a fresh page 1.
    Refresh,
}

/// Display list plus the transient fetch state around it.
#[derive(Debug, Default)]
pub struct UserFeed {
    users: Vec<UserItem>,
    /// Highest page requested so far; 0 before the initial load.
    page: u32,
    in_flight: Option<FetchKind>,
    error: Option<String>,
}

impl UserFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserItem] {
        &self.users
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_loading_more(&self) -> bool {
        self.in_flight == Some(FetchKind::LoadMore)
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight == Some(FetchKind::Refresh)
    }

    /// True while the very first page is still loading and nothing can be
    /// rendered yet.
    pub fn is_initial_load(&self) -> bool {
        self.users.is_empty() && self.is_loading_more()
    }

    /// Advances the cursor and claims the in-flight token for a pagination
    /// fetch. Returns the page to request, or `None` if a fetch is already
    /// pending (the trigger is then dropped without advancing the cursor).
    pub fn begin_load_more(&mut self) -> Option<u32> {
        if self.in_flight.is_some() {
            return None;
        }
        self.page += 1;
        self.in_flight = Some(FetchKind::LoadMore);
        self.error = None;
        Some(self.page)
    }

    /// Claims the in-flight token for a refresh. Always requests page 1.
    pub fn begin_refresh(&mut self) -> Option<u32> {
        if self.in_flight.is_some() {
            return None;
        }
        self.in_flight = Some(FetchKind::Refresh);
        self.error = None;
        Some(1)
    }

    /// Applies a successful response for whichever fetch is in flight:
    /// append for load-more, replace for refresh. A refresh also resets the
    /// cursor to 1 so the next load-more requests page 2.
    pub fn apply_success(&mut self, items: Vec<UserItem>) {
        match self.in_flight.take() {
            Some(FetchKind::LoadMore) => self.users.extend(items),
            Some(FetchKind::Refresh) => {
                self.users = items;
                self.page = 1;
            }
            None => {
                // Single in-flight token; a completion with no owner is stale.
                warn!("dropping fetch completion with no request in flight");
            }
        }
    }

    /// Records a failed fetch: the in-flight token is released on every
    /// failure path so a refresh indicator can never stay stuck, the
    /// already-loaded list is kept, and the user sees the generic message.
    pub fn apply_error(&mut self) {
        // A failed refresh keeps the cursor where pagination left it.
        self.in_flight = None;
        self.error = Some(GENERIC_ERROR_MESSAGE.to_owned());
    }
}
