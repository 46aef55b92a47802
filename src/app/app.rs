use eframe::egui;

use super::ui;
use super::AppState;
use crate::store::Action;

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Ctrl+B toggles the bar. The negation happens here so the reducer
        // still receives the target value, not a toggle.
        let pressed = ctx.input(|i| i.key_pressed(egui::Key::B) && i.modifiers.ctrl);
        if pressed {
            let target = !self.store.state().is_visible;
            self.apply_action(Action::SetVisibility { is_visible: target });
        }

        // Native window title
        let title = if self.store.state().is_visible {
            "Org Top Bar - visible"
        } else {
            "Org Top Bar - hidden"
        };
        if self.last_window_title.as_deref() != Some(title) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
            self.last_window_title = Some(title.to_string());
        }

        // Top bar
        let actions = ui::org_top_bar::org_top_bar(ctx, self.store.state());
        for a in actions {
            self.apply_action(a);
        }

        let actions = ui::controls::controls(ctx, self);
        for a in actions {
            self.apply_action(a);
        }

        if self.prefs_dirty {
            self.save_prefs();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_prefs();
    }
}
