use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use karaoke_search::{AppState, Record, SearchView};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Results area (central panel)
// ---------------------------------------------------------------------------

/// Render prompt, error, or the matching songs.
pub fn results_area(ui: &mut Ui, state: &AppState) {
    match state.view() {
        SearchView::Unavailable => {
            let msg = state
                .status_message
                .as_deref()
                .unwrap_or("Song list not available.");
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(msg).color(Color32::RED).heading());
            });
        }
        SearchView::Prompt => {
            ui.label(RichText::new("Enter text to start searching!").color(Color32::LIGHT_BLUE));
        }
        SearchView::NoResults => {
            ui.label(RichText::new("No matching songs found.").color(Color32::YELLOW));
        }
        SearchView::Results(n) => {
            ui.label(RichText::new(format!("Found {n} matches:")).color(Color32::GREEN));
            ui.add_space(4.0);
            let rows: Vec<&Record> = state.visible_records().collect();
            results_table(ui, &rows);
        }
    }
}

/// Artist / Song table. Extra columns (ID, path) are never shown.
fn results_table(ui: &mut Ui, rows: &[&Record]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::remainder().at_least(120.0))
        .header(ROW_HEIGHT + 4.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Artist");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Song");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.artist);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.song);
                });
            });
        });
}
