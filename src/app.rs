use eframe::egui;

use karaoke_search::AppState;

use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct KaraokeSearchApp {
    pub state: AppState,
}

impl KaraokeSearchApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for KaraokeSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: search box + results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.catalog.is_some() {
                panels::search_bar(ui, &mut self.state);
                ui.separator();
            }
            results::results_area(ui, &self.state);
        });
    }
}
