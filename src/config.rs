//! Run configuration.

use std::path::PathBuf;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "in.txt";
/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "out.txt";
/// Category kept when none is given.
pub const DEFAULT_CATEGORY: &str = "Продукты";

/// Where the output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub category: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}
