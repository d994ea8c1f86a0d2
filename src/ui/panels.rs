use eframe::egui::{self, RichText, Ui};

use karaoke_search::{AppState, Scope};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with song counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🎤 Karaoke Song Search");

        if let Some(catalog) = &state.catalog {
            ui.separator();
            ui.label(format!("{} songs in the library", catalog.len()));
        }
    });
}

// ---------------------------------------------------------------------------
// Search box and scope selector
// ---------------------------------------------------------------------------

/// Render the query input and the three scope choices.
pub fn search_bar(ui: &mut Ui, state: &mut AppState) {
    ui.label("Type an artist or song name below to search the library.");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Search:").strong());
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.query_text)
                .hint_text("e.g. Bon Jovi or Living on a Prayer")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            state.refilter();
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        let mut selected = state.scope;
        for scope in Scope::ALL {
            ui.radio_value(&mut selected, scope, scope.label());
        }
        state.set_scope(selected);
    });
}
