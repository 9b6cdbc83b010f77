//! Action buttons and status line

use eframe::egui::{self, Ui};

use crate::editor::{DropOutcome, FormationEditor};

/// Button pressed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    SaveImage,
    Reset,
}

/// Bottom toolbar
#[derive(Default)]
pub struct Toolbar;

impl Toolbar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &self,
        ui: &mut Ui,
        editor: &FormationEditor,
        last_drop: Option<&DropOutcome>,
        export_pending: bool,
    ) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!export_pending, egui::Button::new("Save image"))
                .clicked()
            {
                action = Some(ToolbarAction::SaveImage);
            }
            if ui.button("Reset").clicked() {
                action = Some(ToolbarAction::Reset);
            }

            ui.separator();

            let roster = editor.roster();
            ui.label(format!("On stage: {}/{}", roster.assigned_count(), roster.len()));

            if let Some(cell) = editor.hover_cell() {
                ui.separator();
                ui.label(format!("Target: {}", cell));
            } else if let Some(drop) = last_drop {
                ui.separator();
                ui.label(format!("Last move: {}", drop));
            }
        });

        action
    }
}
