//! The user list panel: rows, infinite scroll, refresh and polling.

use chrono::Utc;
use egui::{Align2, Color32, Id, Image, Response, RichText, ScrollArea, Sense, Ui, vec2};
use repute_business::{ApiConfig, UserItem};

use super::api::{ERROR_KEY, RESPONSE_KEY, fetch_users};
use super::state::UserListState;

/// Scroll offset (in points) past which the scroll-to-top control shows.
const SCROLL_TOP_THRESHOLD: f32 = 200.0;

/// Load more when the viewport bottom is within this fraction of a viewport
/// height from the content end.
const END_REACHED_VIEWPORT_FRACTION: f32 = 0.4;

/// Horizontal drag distance that opens or closes a row action.
const REVEAL_DRAG_DISTANCE: f32 = 60.0;

const AVATAR_SIZE: f32 = 50.0;

/// Single threshold compare in each direction; no hysteresis.
fn past_scroll_top_threshold(offset_y: f32) -> bool {
    offset_y > SCROLL_TOP_THRESHOLD
}

/// Whether the viewport is near enough to the content end to page in more.
fn near_end(offset_y: f32, viewport_h: f32, content_h: f32) -> bool {
    content_h > viewport_h
        && offset_y + viewport_h >= content_h - END_REACHED_VIEWPORT_FRACTION * viewport_h
}

/// Issues the initial page-1 fetch. Only the first call per app lifetime
/// does anything.
pub fn start_initial_fetch(state: &mut UserListState, config: &ApiConfig, ctx: &egui::Context) {
    if state.started {
        return;
    }
    state.started = true;
    if let Some(page) = state.feed.begin_load_more() {
        fetch_users(config.users_url(page), ctx.clone());
    }
}

/// Renders the user list screen: toolbar, error line, the scrolling rows
/// with their footer indicator, and the floating scroll-to-top control.
pub fn user_list_panel(state: &mut UserListState, config: &ApiConfig, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        // Toolbar: the refresh affordance (the pull gesture belongs to the
        // host framework; the operation is what matters here).
        ui.horizontal(|ui| {
            if ui.button("🔄 Refresh").clicked()
                && let Some(page) = state.feed.begin_refresh()
            {
                fetch_users(config.users_url(page), ui.ctx().clone());
            }
            if state.feed.is_refreshing() {
                ui.spinner();
                ui.label("Refreshing...");
            } else if let Some(stamp) = state.last_refresh {
                ui.weak(format!("refreshed {}", stamp.format("%H:%M:%S")));
            }
        });

        if let Some(error) = state.feed.error() {
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(4.0);

        // Mutations decided inside the row loop, applied after it.
        let row_actions = state.row_actions;
        let revealed_row = state.revealed_row;
        let mut reveal_drag = state.reveal_drag;
        let mut set_revealed: Option<Option<usize>> = None;
        let mut open_user_info = false;

        let mut scroll = ScrollArea::vertical()
            .id_salt("user_list")
            .auto_shrink([false, false]);
        if state.scroll_to_top {
            scroll = scroll.vertical_scroll_offset(0.0);
            state.scroll_to_top = false;
        }

        let output = scroll.show(ui, |ui| {
            for (index, user) in state.feed.users().iter().enumerate() {
                let revealed = row_actions && revealed_row == Some(index);
                let row = ui.horizontal(|ui| {
                    if revealed {
                        // The action uncovered by the drag.
                        if ui
                            .button(RichText::new("Open User Info").strong())
                            .clicked()
                        {
                            open_user_info = true;
                        }
                    }
                    if let Some(uri) = &user.profile_image {
                        ui.add(
                            Image::new(uri.as_str())
                                .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
                                .corner_radius(4.0),
                        );
                    }
                    ui.label(RichText::new(&user.display_name).size(18.0));
                });

                if row_actions {
                    // A horizontal drag on the row stands in for the swipe
                    // gesture: right opens the action, left closes it.
                    let drag = ui.interact(
                        row.response.rect,
                        ui.id().with(("user_row", index)),
                        Sense::drag(),
                    );
                    if drag.dragged() {
                        reveal_drag += drag.drag_delta().x;
                    }
                    if drag.drag_stopped() {
                        if reveal_drag > REVEAL_DRAG_DISTANCE {
                            set_revealed = Some(Some(index));
                        } else if reveal_drag < -REVEAL_DRAG_DISTANCE
                            && revealed_row == Some(index)
                        {
                            set_revealed = Some(None);
                        }
                        reveal_drag = 0.0;
                    }
                }

                ui.separator();
            }

            // Footer indicator: present exactly while a pagination fetch is
            // in flight.
            if state.feed.is_loading_more() {
                ui.vertical_centered(|ui| ui.spinner());
            }
        });

        state.reveal_drag = reveal_drag;
        if let Some(revealed) = set_revealed {
            state.revealed_row = revealed;
            if revealed.is_some() {
                // Opening the action re-shows the overlay.
                state.arm_overlay();
            }
        }
        if open_user_info {
            state.arm_overlay();
        }

        let offset_y = output.state.offset.y;
        state.show_scroll_top = past_scroll_top_threshold(offset_y);

        let viewport_h = output.inner_rect.height();
        let content_h = output.content_size.y;
        if !state.feed.users().is_empty()
            && near_end(offset_y, viewport_h, content_h)
            && let Some(page) = state.feed.begin_load_more()
        {
            fetch_users(config.users_url(page), ui.ctx().clone());
        }

        if state.show_scroll_top {
            egui::Area::new(Id::new("scroll_top_button"))
                .anchor(Align2::RIGHT_BOTTOM, vec2(-10.0, -10.0))
                .show(ui.ctx(), |ui| {
                    if ui.button("Scroll to Top").clicked() {
                        state.scroll_to_top = true;
                    }
                });
        }
    });

    response.response
}

/// Drains completed fetches out of the egui memory into the feed.
/// Call once per frame, before rendering.
pub fn poll_user_list_responses(state: &mut UserListState, ctx: &egui::Context) {
    if let Some(items) =
        ctx.memory(|mem| mem.data.get_temp::<Vec<UserItem>>(Id::new(RESPONSE_KEY)))
    {
        ctx.memory_mut(|mem| {
            mem.data.remove::<Vec<UserItem>>(Id::new(RESPONSE_KEY));
        });
        if state.feed.is_refreshing() {
            state.last_refresh = Some(Utc::now());
        }
        state.feed.apply_success(items);
    }

    if let Some(_cause) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new(ERROR_KEY))) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new(ERROR_KEY));
        });
        // Cause was already logged at the fetch callback; the screen only
        // ever shows the generic message.
        state.feed.apply_error();
    }
}
