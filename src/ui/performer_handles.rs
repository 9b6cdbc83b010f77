//! Draggable performer handles
//!
//! Paints one labelled box per performer and forwards pointer drags to the
//! editor. Handles are drawn and hit-tested in z-order, so the most recently
//! dragged one sits on top.

use eframe::egui::{Align2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, Ui, Vec2};

use crate::editor::{DropOutcome, FormationEditor};

/// Handle styling
pub struct PerformerHandles {
    /// Box fill
    pub fill: Color32,
    /// Label and border color
    pub text_color: Color32,
    /// Space between label and border
    pub padding: Vec2,
    /// Label font size
    pub font_size: f32,
}

impl Default for PerformerHandles {
    fn default() -> Self {
        Self {
            fill: Color32::from_rgb(0xD7, 0xEB, 0xFA),
            text_color: Color32::BLACK,
            padding: Vec2::new(4.0, 2.0),
            font_size: 13.0,
        }
    }
}

impl PerformerHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show all handles and apply this frame's drag input.
    ///
    /// Returns the outcome when a drag finished this frame.
    pub fn show(&self, ui: &mut Ui, editor: &mut FormationEditor, origin: Vec2) -> Option<DropOutcome> {
        let font = FontId::proportional(self.font_size);
        let order = editor.draw_order().to_vec();
        let mut outcome = None;

        for id in order {
            let (Some(performer), Some(pos)) = (editor.roster().get(id), editor.handle_pos(id)) else {
                continue;
            };
            let label = performer.label();
            let text_size = ui
                .fonts(|f| f.layout_no_wrap(label.clone(), font.clone(), self.text_color))
                .size();
            let size = text_size + self.padding * 2.0;

            let hit_rect = Rect::from_min_size(pos + origin, size);
            let response = ui.interact(hit_rect, ui.id().with(("performer_handle", id.0)), Sense::drag());
            if response.drag_started() {
                // Grab offset is measured where the button went down, not where
                // egui decided the drag had started
                let pressed_at = ui
                    .input(|i| i.pointer.press_origin())
                    .or(response.interact_pointer_pos())
                    .unwrap_or(hit_rect.min);
                editor.begin_drag(id, pressed_at - origin);
            }

            let is_active = editor.active_drag().map(|d| d.performer) == Some(id);
            if is_active {
                let pointer = ui.input(|i| i.pointer.latest_pos());
                if response.dragged() {
                    if let Some(pointer) = pointer {
                        editor.drag_to(pointer - origin);
                    }
                    ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
                } else if response.drag_stopped() {
                    if let Some(pointer) = pointer {
                        editor.drag_to(pointer - origin);
                    }
                    outcome = editor.end_drag();
                } else {
                    // Gesture vanished without a release (e.g. focus lost)
                    editor.cancel_drag();
                }
            } else if response.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }

            // Repaint at the post-drag position
            let pos = editor.handle_pos(id).unwrap_or(pos);
            let rect = Rect::from_min_size(pos + origin, size);
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, self.text_color));
            painter.text(rect.min + self.padding, Align2::LEFT_TOP, label, font.clone(), self.text_color);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AudienceDirection, StageConfig};
    use crate::formation::{Cell, PerformerId};
    use eframe::egui::{self, Event, Modifiers, PointerButton, Pos2, RawInput};

    /// 3 performers on a 4x5 grid; handle 2 starts at (350, 80)
    fn editor() -> FormationEditor {
        let config = StageConfig::new(3, Vec::new(), 4, 5, AudienceDirection::Top).unwrap();
        FormationEditor::new(&config).unwrap()
    }

    /// Run one frame with `events` and return that frame's drop outcome
    fn frame(ctx: &egui::Context, editor: &mut FormationEditor, events: Vec<Event>) -> Option<DropOutcome> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let handles = PerformerHandles::new();
        let mut outcome = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    let origin = ui.max_rect().min.to_vec2();
                    outcome = handles.show(ui, editor, origin);
                });
        });
        outcome
    }

    fn move_to(x: f32, y: f32) -> Event {
        Event::PointerMoved(Pos2::new(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: Pos2::new(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_pointer_drag_commits_cell() {
        let ctx = egui::Context::default();
        let mut editor = editor();
        let id = PerformerId(2);
        assert_eq!(editor.handle_pos(id), Some(Pos2::new(350.0, 80.0)));

        // Widgets are hit-tested against the previous frame's layout
        assert!(frame(&ctx, &mut editor, vec![move_to(355.0, 85.0)]).is_none());
        assert!(frame(&ctx, &mut editor, vec![button(355.0, 85.0, true)]).is_none());

        assert!(frame(&ctx, &mut editor, vec![move_to(250.0, 95.0)]).is_none());
        assert_eq!(editor.active_drag().map(|d| d.performer), Some(id));
        assert_eq!(editor.handle_pos(id), Some(Pos2::new(245.0, 90.0)));

        assert!(frame(&ctx, &mut editor, vec![move_to(145.0, 110.0)]).is_none());
        assert!(editor.is_dragging());
        assert_eq!(editor.hover_cell(), Some(Cell::new(1, 2)));

        let outcome = frame(&ctx, &mut editor, vec![button(145.0, 110.0, false)]);
        assert_eq!(
            outcome,
            Some(DropOutcome::Assigned {
                performer: id,
                cell: Cell::new(1, 2)
            })
        );
        assert!(!editor.is_dragging());
        assert_eq!(editor.roster().get(id).unwrap().cell, Some(Cell::new(1, 2)));
        assert_eq!(editor.draw_order().last(), Some(&id));
    }

    #[test]
    fn test_pointer_drag_past_edge_and_back() {
        let ctx = egui::Context::default();
        let mut editor = editor();
        let id = PerformerId(2);

        frame(&ctx, &mut editor, vec![move_to(355.0, 85.0)]);
        frame(&ctx, &mut editor, vec![button(355.0, 85.0, true)]);
        frame(&ctx, &mut editor, vec![move_to(-200.0, 95.0)]);
        assert_eq!(editor.handle_pos(id), Some(Pos2::new(0.0, 90.0)));

        frame(&ctx, &mut editor, vec![move_to(145.0, 110.0)]);
        assert_eq!(editor.handle_pos(id), Some(Pos2::new(140.0, 105.0)));

        let outcome = frame(&ctx, &mut editor, vec![button(145.0, 110.0, false)]);
        assert_eq!(outcome.and_then(|o| o.cell()), Some(Cell::new(1, 2)));
    }
}
