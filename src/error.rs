use std::path::PathBuf;

/// Every way a plot run can end short of a saved image.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("The file {} was not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: field '{key}' {reason}")]
    Field {
        line: usize,
        key: String,
        reason: &'static str,
    },

    #[error("line {line}: {kind} record {reason}")]
    Record {
        line: usize,
        kind: &'static str,
        reason: &'static str,
    },

    #[error("No valid loss values found with key '{key}' in {}.", .path.display())]
    EmptySeries { path: PathBuf, key: String },

    #[error("failed to render chart: {0}")]
    Render(String),
}

impl PlotError {
    /// Outcomes the pipeline reports as plain errors rather than unexpected faults.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::EmptySeries { .. })
    }
}
