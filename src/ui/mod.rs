//! UI module for the formation editor
//!
//! egui painting and pointer wiring on top of [`crate::editor::FormationEditor`].

pub mod performer_handles;
pub mod stage_view;
pub mod toolbar;

pub use performer_handles::PerformerHandles;
pub use stage_view::StageView;
pub use toolbar::{Toolbar, ToolbarAction};
