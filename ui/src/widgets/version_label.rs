use egui::{Color32, Response, Ui};
use repute_business::version_info;

/// Displays the app version in the UI chrome.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.colored_label(Color32::from_rgb(200, 200, 200), version_info::format_version())
}
