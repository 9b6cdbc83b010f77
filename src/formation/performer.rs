//! Performer records

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Cell;

/// Stable 1-based performer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PerformerId(pub u32);

impl fmt::Display for PerformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One performer and their (optional) stage position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub id: PerformerId,
    pub name: String,
    /// `None` means off-stage
    pub cell: Option<Cell>,
}

impl Performer {
    pub fn new(id: PerformerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cell: None,
        }
    }

    pub fn is_on_stage(&self) -> bool {
        self.cell.is_some()
    }

    /// Text shown on the performer's handle
    pub fn label(&self) -> String {
        format!("{}. {}", self.id, self.name)
    }
}
