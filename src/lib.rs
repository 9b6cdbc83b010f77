//! Formation Editor Library
//!
//! Drag performers onto a stage grid and export the formation as an image.

pub mod app;
pub mod config;
pub mod editor;
pub mod export;
pub mod formation;
pub mod ui;

// Re-export commonly used types
pub use app::FormationApp;
pub use config::{AudienceDirection, ConfigError, LayoutSettings, StageConfig};
pub use editor::{DropOutcome, FormationEditor};
pub use export::ImageExporter;
pub use formation::{Cell, Performer, PerformerId, Roster, StageGrid};
