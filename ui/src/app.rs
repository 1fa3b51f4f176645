use crate::{state::State, widgets};

/// The user list application: one screen, backed by the paginated
/// Stack Exchange users endpoint.
pub struct ReputeApp {
    pub state: State,
}

impl ReputeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for ReputeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply completed fetches before rendering this frame.
        widgets::poll_user_list_responses(&mut self.state.user_list, ctx);

        // Kick the page-1 fetch exactly once, on the first frame.
        widgets::start_initial_fetch(&mut self.state.user_list, &self.state.config, ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label("Repute");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::version_label(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.user_list.is_initial_load() {
                // Nothing to show yet: the whole screen is a spinner until
                // page 1 lands.
                ui.centered_and_justified(|ui| ui.spinner());
            } else {
                widgets::user_list_panel(&mut self.state.user_list, &self.state.config, ui);
            }
        });

        // Painted last so it covers the panels above.
        if self.state.user_list.overlay_visible() {
            widgets::user_info_overlay(&mut self.state.user_list, ctx);
        }
    }
}
