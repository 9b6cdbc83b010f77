//! Stage painting: grid, center line, audience label and roster title

use eframe::egui::{self, Align2, Color32, FontId, Painter, Rect, Shape, Stroke, Vec2};

use crate::editor::FormationEditor;

/// Text shown on the audience side of the stage
pub const AUDIENCE_LABEL: &str = "(Audience this side)";
/// Heading above the roster column
pub const ROSTER_TITLE: &str = "Performers";

/// Paints the static parts of the editor surface
pub struct StageView {
    /// Grid line color
    pub line_color: Color32,
    /// Center reference line color
    pub center_line_color: Color32,
    /// Fill for the cell under a dragged handle
    pub drop_target_fill: Color32,
    /// Highlight the drop target while dragging
    pub show_drop_target: bool,
}

impl Default for StageView {
    fn default() -> Self {
        Self {
            line_color: Color32::GRAY,
            center_line_color: Color32::RED,
            drop_target_fill: Color32::from_rgb(225, 240, 255),
            show_drop_target: true,
        }
    }
}

impl StageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint everything except the handles. `origin` maps editor-local to screen coordinates.
    pub fn paint(&self, painter: &Painter, editor: &FormationEditor, origin: Vec2) {
        let grid = editor.grid_rect().translate(origin);
        let cell_size = editor.grid().cell_size();

        painter.rect_filled(grid, 0.0, Color32::WHITE);

        if self.show_drop_target {
            if let Some(cell) = editor.hover_cell() {
                let cell_rect = Rect::from_min_size(
                    grid.min + editor.grid().cell_offset(cell),
                    Vec2::splat(cell_size),
                );
                painter.rect_filled(cell_rect, 0.0, self.drop_target_fill);
            }
        }

        self.paint_grid_lines(painter, editor, grid);

        // Dashed reference line down the middle
        let cx = grid.center().x;
        painter.extend(Shape::dashed_line(
            &[egui::pos2(cx, grid.top()), egui::pos2(cx, grid.bottom())],
            Stroke::new(2.0, self.center_line_color),
            5.0,
            3.0,
        ));

        painter.text(
            editor.audience_label_pos() + origin,
            Align2::CENTER_CENTER,
            AUDIENCE_LABEL,
            FontId::proportional(15.0),
            Color32::BLACK,
        );

        // Underlined roster title
        let title_rect = painter.text(
            editor.roster_origin() + origin,
            Align2::LEFT_TOP,
            ROSTER_TITLE,
            FontId::proportional(15.0),
            Color32::BLACK,
        );
        painter.line_segment(
            [title_rect.left_bottom(), title_rect.right_bottom()],
            Stroke::new(1.0, Color32::BLACK),
        );
    }

    fn paint_grid_lines(&self, painter: &Painter, editor: &FormationEditor, grid: Rect) {
        let stroke = Stroke::new(1.0, self.line_color);
        let cell_size = editor.grid().cell_size();

        for row in 0..=editor.grid().rows() {
            let y = grid.top() + row as f32 * cell_size;
            painter.line_segment([egui::pos2(grid.left(), y), egui::pos2(grid.right(), y)], stroke);
        }
        for col in 0..=editor.grid().cols() {
            let x = grid.left() + col as f32 * cell_size;
            painter.line_segment([egui::pos2(x, grid.top()), egui::pos2(x, grid.bottom())], stroke);
        }
    }
}
