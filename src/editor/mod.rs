//! Formation editor
//!
//! Owns the roster, the stage grid and one draggable handle per performer, and
//! turns drag gestures into cell assignments. Every position here is in
//! editor-local coordinates: pixels from the top-left of the drawing surface.
//! Nothing in this module touches a window, so the whole drag-and-drop flow can
//! be driven from tests.

mod drag;

pub use drag::{ActiveDrag, DropOutcome};

use egui::{Pos2, Rect, Vec2};
use std::collections::BTreeMap;

use crate::config::{AudienceDirection, ConfigError, LayoutSettings, StageConfig};
use crate::formation::{Cell, PerformerId, Roster, StageGrid};

/// Draggable visual stand-in for one performer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub performer: PerformerId,
    /// Top-left corner
    pub pos: Pos2,
}

/// Editor context: performer state plus the single active drag
pub struct FormationEditor {
    roster: Roster,
    grid: StageGrid,
    layout: LayoutSettings,
    audience: AudienceDirection,
    handles: BTreeMap<PerformerId, Handle>,
    /// Paint order, last drawn on top
    z_order: Vec<PerformerId>,
    active_drag: Option<ActiveDrag>,
}

impl FormationEditor {
    /// Build an editor with every performer off-stage in roster order
    pub fn new(config: &StageConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let roster = Roster::from_names(config.roster_names());
        let grid = StageGrid::new(config.rows, config.cols, config.layout.cell_size);

        let mut editor = Self {
            z_order: roster.ids().collect(),
            roster,
            grid,
            layout: config.layout.clone(),
            audience: config.audience,
            handles: BTreeMap::new(),
            active_drag: None,
        };
        editor.handles = editor
            .roster
            .ids()
            .enumerate()
            .map(|(i, id)| {
                let handle = Handle {
                    performer: id,
                    pos: editor.roster_slot(i),
                };
                (id, handle)
            })
            .collect();

        log::info!(
            "Formation editor ready: {} performers, {}x{} grid, audience at {}",
            editor.roster.len(),
            editor.grid.rows(),
            editor.grid.cols(),
            editor.audience
        );
        Ok(editor)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn grid(&self) -> &StageGrid {
        &self.grid
    }

    pub fn layout(&self) -> &LayoutSettings {
        &self.layout
    }

    pub fn audience(&self) -> AudienceDirection {
        self.audience
    }

    pub fn active_drag(&self) -> Option<&ActiveDrag> {
        self.active_drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    // ---- layout ----

    /// Top-left corner of the grid
    pub fn grid_origin(&self) -> Pos2 {
        let band = match self.audience {
            AudienceDirection::Top => self.layout.audience_band,
            AudienceDirection::Bottom => 0.0,
        };
        Pos2::new(self.layout.grid_margin, self.layout.grid_margin + band)
    }

    pub fn grid_rect(&self) -> Rect {
        self.grid.rect_at(self.grid_origin())
    }

    /// Center of the audience label, above or below the grid
    pub fn audience_label_pos(&self) -> Pos2 {
        let grid = self.grid_rect();
        let half_band = self.layout.audience_band / 2.0;
        match self.audience {
            AudienceDirection::Top => Pos2::new(grid.center().x, grid.top() - half_band),
            AudienceDirection::Bottom => Pos2::new(grid.center().x, grid.bottom() + half_band),
        }
    }

    /// Left edge of the roster column, at the title row
    pub fn roster_origin(&self) -> Pos2 {
        Pos2::new(
            self.grid_rect().right() + self.layout.roster_gap,
            self.layout.roster_title_y,
        )
    }

    /// Home position of the `index`th handle in roster order
    pub fn roster_slot(&self, index: usize) -> Pos2 {
        Pos2::new(
            self.roster_origin().x,
            self.layout.roster_top + index as f32 * self.layout.roster_spacing,
        )
    }

    // ---- handles ----

    pub fn handle(&self, id: PerformerId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    pub fn handle_pos(&self, id: PerformerId) -> Option<Pos2> {
        self.handles.get(&id).map(|h| h.pos)
    }

    /// Performer ids from bottom-most to top-most handle
    pub fn draw_order(&self) -> &[PerformerId] {
        &self.z_order
    }

    fn raise(&mut self, id: PerformerId) {
        if let Some(idx) = self.z_order.iter().position(|p| *p == id) {
            let id = self.z_order.remove(idx);
            self.z_order.push(id);
        }
    }

    // ---- hit-testing ----

    /// Cell under a local position, if it falls inside the grid
    pub fn cell_at(&self, pos: Pos2) -> Option<Cell> {
        self.grid.cell_at_offset(pos - self.grid_origin())
    }

    /// Cell the dragged handle would land in if released now
    pub fn hover_cell(&self) -> Option<Cell> {
        let drag = self.active_drag?;
        self.cell_at(self.handle_pos(drag.performer)?)
    }

    // ---- drag gesture ----

    /// Start dragging `id`'s handle from pointer position `pointer`.
    ///
    /// Returns `false` if another drag is in progress or the id is unknown.
    pub fn begin_drag(&mut self, id: PerformerId, pointer: Pos2) -> bool {
        if let Some(drag) = &self.active_drag {
            log::debug!("Ignoring drag of {} while {} is being dragged", id, drag.performer);
            return false;
        }
        let Some(pos) = self.handle_pos(id) else {
            return false;
        };

        self.active_drag = Some(ActiveDrag {
            performer: id,
            grab_offset: pointer - pos,
            pointer,
        });
        self.raise(id);
        true
    }

    /// Move the pointer by `delta` and keep the dragged handle under it
    pub fn update_drag(&mut self, delta: Vec2) {
        let Some(drag) = self.active_drag else { return };
        self.drag_to(drag.pointer + delta);
    }

    /// Put the pointer at `pointer` and keep the dragged handle under it.
    ///
    /// The handle is placed at `pointer - grab_offset`, never past the top or
    /// left edge. Clamping does not accumulate: moving back out of the clamped
    /// region puts the handle under the pointer again.
    pub fn drag_to(&mut self, pointer: Pos2) {
        let Some(drag) = self.active_drag.as_mut() else { return };
        drag.pointer = pointer;
        let target = pointer - drag.grab_offset;
        if let Some(handle) = self.handles.get_mut(&drag.performer) {
            handle.pos = Pos2::new(target.x.max(0.0), target.y.max(0.0));
        }
    }

    /// Finish the drag and commit the handle's cell, or clear it when the
    /// handle's top-left corner is off the grid.
    ///
    /// The handle stays where it was dropped in both cases.
    pub fn end_drag(&mut self) -> Option<DropOutcome> {
        let drag = self.active_drag.take()?;
        let pos = self.handle_pos(drag.performer)?;

        let outcome = match self.cell_at(pos) {
            Some(cell) => DropOutcome::Assigned {
                performer: drag.performer,
                cell,
            },
            None => DropOutcome::OffStage {
                performer: drag.performer,
            },
        };
        self.roster.assign(drag.performer, outcome.cell());
        log::info!("{}", outcome);

        // Shared cells are allowed; surface them so they can be fixed by hand
        if let Some(cell) = outcome.cell() {
            let occupants = self.roster.occupants(cell);
            if occupants.len() > 1 {
                log::warn!("Cell ({}) is shared by performers {:?}", cell, occupants);
            }
        }

        Some(outcome)
    }

    /// Drop the active drag without touching any assignment
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.active_drag.take() {
            log::debug!("Drag of {} cancelled", drag.performer);
        }
    }

    /// Send everyone off-stage and line the handles up in roster order again
    pub fn reset(&mut self) {
        self.active_drag = None;
        self.roster.clear_all();

        let ids: Vec<PerformerId> = self.roster.ids().collect();
        for (i, id) in ids.iter().enumerate() {
            let slot = self.roster_slot(i);
            if let Some(handle) = self.handles.get_mut(id) {
                handle.pos = slot;
            }
        }
        self.z_order = ids;
        log::info!("Reset all performer positions");
    }
}
