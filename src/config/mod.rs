//! Startup configuration
//!
//! Everything the editor needs at construction time: the roster size and names,
//! the stage grid dimensions, the audience direction and the pixel layout constants.

pub mod prompt;

pub use prompt::{prompt_config, PromptError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Largest roster that still gets a distinct performer id each
pub const MAX_PERFORMERS: usize = u32::MAX as usize;

/// Errors raised while building or loading a stage configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("performer count must be at least 1")]
    ZeroPerformers,
    #[error("performer count {0} exceeds the maximum of {}", MAX_PERFORMERS)]
    TooManyPerformers(usize),
    #[error("stage must have at least 1 row")]
    ZeroRows,
    #[error("stage must have at least 1 column")]
    ZeroColumns,
    #[error("layout {field} must be positive, got {value}")]
    NonPositiveLayout { field: &'static str, value: f32 },
    #[error("unknown audience direction '{0}' (expected 'top' or 'bottom')")]
    UnknownAudience(String),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which edge of the stage faces the audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudienceDirection {
    /// Audience sits above the grid
    #[default]
    Top,
    /// Audience sits below the grid
    Bottom,
}

impl AudienceDirection {
    /// Get display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            AudienceDirection::Top => "top",
            AudienceDirection::Bottom => "bottom",
        }
    }
}

impl fmt::Display for AudienceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AudienceDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(AudienceDirection::Top),
            "bottom" => Ok(AudienceDirection::Bottom),
            other => Err(ConfigError::UnknownAudience(other.to_string())),
        }
    }
}

/// Pixel constants for the editor surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Side length of one grid cell
    pub cell_size: f32,
    /// Gap between the surface edge and the grid
    pub grid_margin: f32,
    /// Height of the strip holding the audience label
    pub audience_band: f32,
    /// Horizontal gap between the grid and the roster column
    pub roster_gap: f32,
    /// Y of the roster title
    pub roster_title_y: f32,
    /// Y of the first roster slot
    pub roster_top: f32,
    /// Vertical distance between roster slots
    pub roster_spacing: f32,
    /// Minimum window size
    pub min_window: [f32; 2],
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_margin: 10.0,
            audience_band: 30.0,
            roster_gap: 40.0,
            roster_title_y: 10.0,
            roster_top: 40.0,
            roster_spacing: 40.0,
            min_window: [1200.0, 800.0],
        }
    }
}

impl LayoutSettings {
    /// Window size large enough for a grid of `rows` x `cols` plus a roster of `performers`.
    pub fn window_size(&self, rows: u32, cols: u32, performers: usize) -> [f32; 2] {
        // Roster column width, toolbar and slack
        const ROSTER_WIDTH: f32 = 220.0;
        const CHROME: f32 = 80.0;

        let grid_w = cols as f32 * self.cell_size;
        let grid_h = rows as f32 * self.cell_size;
        let stage_w = self.grid_margin * 2.0 + grid_w + self.roster_gap + ROSTER_WIDTH;
        let stage_h = self.grid_margin * 2.0 + grid_h + self.audience_band + CHROME;
        let roster_h = self.roster_top + performers as f32 * self.roster_spacing + CHROME;

        [
            stage_w.max(self.min_window[0]),
            stage_h.max(roster_h).max(self.min_window[1]),
        ]
    }

    /// Sizes that drive hit-testing and roster spacing must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("cell_size", self.cell_size),
            ("roster_spacing", self.roster_spacing),
        ] {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveLayout { field, value });
            }
        }
        Ok(())
    }
}

/// Startup configuration for a formation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Number of performers on the roster
    pub performer_count: usize,
    /// Names as entered; padded or truncated to `performer_count`
    #[serde(default)]
    pub names: Vec<String>,
    /// Grid rows
    pub rows: u32,
    /// Grid columns
    pub cols: u32,
    /// Edge of the grid facing the audience
    #[serde(default)]
    pub audience: AudienceDirection,
    /// Pixel layout
    #[serde(default)]
    pub layout: LayoutSettings,
}

impl StageConfig {
    /// Create a validated configuration with default layout.
    pub fn new(
        performer_count: usize,
        names: Vec<String>,
        rows: u32,
        cols: u32,
        audience: AudienceDirection,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            performer_count,
            names,
            rows,
            cols,
            audience,
            layout: LayoutSettings::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that counts, grid dimensions and layout sizes are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.performer_count == 0 {
            return Err(ConfigError::ZeroPerformers);
        }
        if self.performer_count > MAX_PERFORMERS {
            return Err(ConfigError::TooManyPerformers(self.performer_count));
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        self.layout.validate()
    }

    /// Final roster names, one per performer.
    ///
    /// Blank entries are skipped. Missing names become `Person<N>` where N is the
    /// 1-based roster position; extra names are dropped.
    pub fn roster_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .take(self.performer_count)
            .collect();

        for i in names.len()..self.performer_count {
            names.push(format!("Person{}", i + 1));
        }
        names
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded stage config from {:?}", path);
        Ok(config)
    }
}

/// Split a comma-separated name list, trimming entries and dropping blanks
pub fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: usize, names: &str) -> StageConfig {
        StageConfig::new(count, parse_name_list(names), 4, 5, AudienceDirection::Top).unwrap()
    }

    #[test]
    fn test_short_name_list_is_padded() {
        let names = config(3, "Alice,Bob").roster_names();
        assert_eq!(names, vec!["Alice", "Bob", "Person3"]);
    }

    #[test]
    fn test_long_name_list_is_truncated() {
        let names = config(2, "Alice, Bob, Carol").roster_names();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_name_list() {
        let names = config(2, " , ,").roster_names();
        assert_eq!(names, vec!["Person1", "Person2"]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            StageConfig::new(1, vec![], 0, 5, AudienceDirection::Top),
            Err(ConfigError::ZeroRows)
        ));
        assert!(matches!(
            StageConfig::new(1, vec![], 4, 0, AudienceDirection::Top),
            Err(ConfigError::ZeroColumns)
        ));
        assert!(matches!(
            StageConfig::new(0, vec![], 4, 5, AudienceDirection::Top),
            Err(ConfigError::ZeroPerformers)
        ));
    }

    #[test]
    fn test_audience_parsing() {
        assert_eq!("top".parse::<AudienceDirection>().unwrap(), AudienceDirection::Top);
        assert_eq!(" Bottom ".parse::<AudienceDirection>().unwrap(), AudienceDirection::Bottom);
        assert!("left".parse::<AudienceDirection>().is_err());
    }

    #[test]
    fn test_json_config() {
        let json = r#"{ "performer_count": 3, "names": ["Alice"], "rows": 4, "cols": 5, "audience": "bottom" }"#;
        let config: StageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.audience, AudienceDirection::Bottom);
        assert_eq!(config.layout, LayoutSettings::default());
        assert_eq!(config.roster_names(), vec!["Alice", "Person2", "Person3"]);
    }

    #[test]
    fn test_load_rejects_zero_rows() {
        let path = std::env::temp_dir().join(format!("formation_cfg_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "performer_count": 1, "rows": 0, "cols": 5 }"#).unwrap();
        let result = StageConfig::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::ZeroRows)));
    }

    #[test]
    fn test_load_rejects_non_positive_cell_size() {
        for (i, size) in ["0.0", "-60.0"].iter().enumerate() {
            let path = std::env::temp_dir()
                .join(format!("formation_cell_{}_{}.json", std::process::id(), i));
            let json = format!(
                r#"{{ "performer_count": 1, "rows": 4, "cols": 5, "layout": {{ "cell_size": {} }} }}"#,
                size
            );
            std::fs::write(&path, json).unwrap();
            let result = StageConfig::load(&path);
            let _ = std::fs::remove_file(&path);
            assert!(
                matches!(result, Err(ConfigError::NonPositiveLayout { field: "cell_size", .. })),
                "cell_size {} was accepted",
                size
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_roster_spacing() {
        let mut config = StageConfig::new(2, Vec::new(), 4, 5, AudienceDirection::Top).unwrap();
        config.layout.roster_spacing = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveLayout { field: "roster_spacing", .. })
        ));
        config.layout.roster_spacing = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_validate_rejects_oversized_roster() {
        let mut config = StageConfig::new(1, Vec::new(), 4, 5, AudienceDirection::Top).unwrap();
        config.performer_count = MAX_PERFORMERS + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyPerformers(n)) if n == MAX_PERFORMERS + 1
        ));
        config.performer_count = MAX_PERFORMERS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_size_grows_with_grid() {
        let layout = LayoutSettings::default();
        assert_eq!(layout.window_size(4, 5, 3), [1200.0, 800.0]);
        let big = layout.window_size(20, 30, 3);
        assert!(big[0] > 1200.0);
        assert!(big[1] > 800.0);
    }
}
