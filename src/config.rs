use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, resolved against the working directory.
pub const DEFAULT_DATA_PATH: &str = "video_games.csv";

/// Run settings for one analysis pass.
///
/// There is no configuration surface: the binary always uses
/// [`AnalysisConfig::default`]. Tests build their own to point at fixtures.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Delimited input table
    pub data_path: PathBuf,
    /// Publishers kept for the timeline view
    pub top_publishers: usize,
    /// Publishers drawn as lines in the timeline panel (taken from the top set)
    pub plotted_publishers: usize,
    /// Genres and publishers listed in the report
    pub report_top_n: usize,
    /// Open the chart window after printing the report
    pub show_charts: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_publishers: 10,
            plotted_publishers: 5,
            report_top_n: 5,
            show_charts: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}
