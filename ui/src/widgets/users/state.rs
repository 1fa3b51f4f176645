//! State for the user list screen.

use chrono::{DateTime, Utc};
use repute_business::UserFeed;

/// All transient state owned by the user list screen. Created with the app,
/// discarded with it; nothing here is persisted.
pub struct UserListState {
    /// Display list, page cursor and in-flight fetch state.
    pub(crate) feed: UserFeed,
    /// Whether the initial page-1 fetch has been issued.
    pub(crate) started: bool,
    /// Derived from the scroll offset threshold each frame.
    pub(crate) show_scroll_top: bool,
    /// One-shot request to jump the list back to offset 0.
    pub(crate) scroll_to_top: bool,
    /// Whether the full-screen overlay is currently shown.
    pub(crate) overlay_visible: bool,
    /// Row whose drag-to-reveal action is open, if any.
    pub(crate) revealed_row: Option<usize>,
    /// Horizontal drag distance accumulated on the row under the pointer.
    pub(crate) reveal_drag: f32,
    /// When the list was last replaced by a refresh.
    pub(crate) last_refresh: Option<DateTime<Utc>>,
    /// Capability switch for the drag-to-reveal action and the overlay.
    pub(crate) row_actions: bool,
}

impl UserListState {
    /// The full-featured screen: row actions enabled and the overlay armed,
    /// so it covers the list on first render.
    pub fn new() -> Self {
        Self {
            feed: UserFeed::new(),
            started: false,
            show_scroll_top: false,
            scroll_to_top: false,
            overlay_visible: true,
            revealed_row: None,
            reveal_drag: 0.0,
            last_refresh: None,
            row_actions: true,
        }
    }

    /// The plain variant: no row actions and no overlay.
    pub fn plain() -> Self {
        Self {
            overlay_visible: false,
            row_actions: false,
            ..Self::new()
        }
    }

    pub fn feed(&self) -> &UserFeed {
        &self.feed
    }

    pub fn is_initial_load(&self) -> bool {
        self.feed.is_initial_load()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn revealed_row(&self) -> Option<usize> {
        self.revealed_row
    }

    /// Shows the overlay again (first render, or re-armed by the row action).
    pub fn arm_overlay(&mut self) {
        if self.row_actions {
            self.overlay_visible = true;
        }
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay_visible = false;
    }
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new()
    }
}
