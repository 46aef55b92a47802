// src/app/ui/org_top_bar.rs
use eframe::egui;

use crate::store::{Action, OrgBarState};

/// Organization top bar. Drawn only when the visibility slice says so; the
/// hide button goes through the store like every other mutation.
pub fn org_top_bar(ctx: &egui::Context, state: &OrgBarState) -> Vec<Action> {
    let mut actions = vec![];

    if !state.is_visible {
        return actions;
    }

    egui::TopBottomPanel::top("org_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Example Organization");
            ui.separator();
            ui.label("Projects, stats and news");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Hide").clicked() {
                    actions.push(Action::SetVisibility { is_visible: false });
                }
            });
        });
    });

    actions
}
