//! The HTTP side of the user list.
//!
//! `ehttp` completes on a background callback; the outcome is parked in the
//! egui memory under a fixed id and drained on the UI thread by
//! [`super::panel::poll_user_list_responses`], so all state mutation stays
//! on the render loop.

use egui::Id;
use log::{error, info};
use repute_business::{FetchError, decode_users_response};

pub(crate) const RESPONSE_KEY: &str = "user_list_response";
pub(crate) const ERROR_KEY: &str = "user_list_error";

/// Issues the GET for one page of users.
pub fn fetch_users(url: String, ctx: egui::Context) {
    info!("fetching users: {url}");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => match decode_users_response(response.status, &response.bytes) {
                Ok(items) => {
                    info!("fetched {} users", items.len());
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(Id::new(RESPONSE_KEY), items);
                    });
                }
                Err(err) => {
                    error!("users fetch failed: {err}");
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(Id::new(ERROR_KEY), err.to_string());
                    });
                }
            },
            Err(err) => {
                let err = FetchError::Transport(err);
                error!("users request failed: {err}");
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(Id::new(ERROR_KEY), err.to_string());
                });
            }
        }
    });
}
