//! Drag gesture state and results

use egui::{Pos2, Vec2};
use std::fmt;

use crate::formation::{Cell, PerformerId};

/// The single in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Performer whose handle is being moved
    pub performer: PerformerId,
    /// Pointer position relative to the handle's top-left corner at grab time
    pub grab_offset: Vec2,
    /// Latest pointer position, unclamped
    pub pointer: Pos2,
}

/// What a completed drag did to the performer's assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Handle landed on the grid
    Assigned { performer: PerformerId, cell: Cell },
    /// Handle landed outside the grid; assignment cleared
    OffStage { performer: PerformerId },
}

impl DropOutcome {
    pub fn performer(&self) -> PerformerId {
        match self {
            DropOutcome::Assigned { performer, .. } | DropOutcome::OffStage { performer } => *performer,
        }
    }

    pub fn cell(&self) -> Option<Cell> {
        match self {
            DropOutcome::Assigned { cell, .. } => Some(*cell),
            DropOutcome::OffStage { .. } => None,
        }
    }
}

impl fmt::Display for DropOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropOutcome::Assigned { performer, cell } => write!(f, "{} → {}", performer, cell),
            DropOutcome::OffStage { performer } => write!(f, "{} is off-stage", performer),
        }
    }
}
