// src/app/ui/controls.rs
use eframe::egui;

use super::super::state::AppState;
use crate::store::Action;

pub fn controls(ctx: &egui::Context, state: &AppState) -> Vec<Action> {
    let mut actions = vec![];

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Organization top bar");
        ui.add_space(6.0);

        let mut visible = state.store.state().is_visible;
        if ui
            .checkbox(&mut visible, "Show organization top bar")
            .changed()
        {
            // The checkbox hands us the target value; dispatch it as-is.
            actions.push(Action::SetVisibility { is_visible: visible });
        }

        let theme_label = if state.dark {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        };
        if ui.button(theme_label).clicked() {
            actions.push(Action::ToggleDark);
        }

        ui.add_space(10.0);
        egui::CollapsingHeader::new("Dispatch log")
            .default_open(false)
            .show(ui, |ui| {
                if state.store.dispatch_log().next().is_none() {
                    ui.weak("No actions dispatched yet.");
                }
                for entry in state.store.dispatch_log() {
                    ui.monospace(entry);
                }
            });

        ui.add_space(10.0);
        ui.weak("Ctrl+B toggles the bar.");
    });

    actions
}
