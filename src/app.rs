//! Main application state and UI
//!
//! Wires the formation editor, the stage painting and the image exporter into
//! one eframe window.

use crate::editor::{DropOutcome, FormationEditor};
use crate::export::ImageExporter;
use crate::ui::{PerformerHandles, StageView, Toolbar, ToolbarAction};
use eframe::egui::{self, Color32};

/// Window title
pub const WINDOW_TITLE: &str = "Stage Formation";

/// Main application state
pub struct FormationApp {
    pub editor: FormationEditor,

    // UI pieces
    stage_view: StageView,
    handles: PerformerHandles,
    toolbar: Toolbar,

    exporter: ImageExporter,
    last_drop: Option<DropOutcome>,
}

impl FormationApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, editor: FormationEditor) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        log::info!("Formation window initialized");

        Self {
            editor,
            stage_view: StageView::new(),
            handles: PerformerHandles::new(),
            toolbar: Toolbar::new(),
            exporter: ImageExporter::new(),
            last_drop: None,
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::SaveImage => self.exporter.request(ctx),
            ToolbarAction::Reset => {
                self.editor.reset();
                self.last_drop = None;
            }
        }
    }
}

impl eframe::App for FormationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.exporter.poll(ctx);

        let action = egui::TopBottomPanel::bottom("toolbar")
            .show(ctx, |ui| {
                self.toolbar.show(
                    ui,
                    &self.editor,
                    self.last_drop.as_ref(),
                    self.exporter.is_pending(),
                )
            })
            .inner;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(221)))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min.to_vec2();
                self.stage_view.paint(ui.painter(), &self.editor, origin);
                if let Some(outcome) = self.handles.show(ui, &mut self.editor, origin) {
                    self.last_drop = Some(outcome);
                }
            });

        if let Some(action) = action {
            self.apply_action(ctx, action);
        }
    }
}
