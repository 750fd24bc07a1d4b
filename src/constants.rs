pub mod keys {
    /// Presence marker for a loss record. The value read is keyed by the caller.
    pub const LOSS: &str = "Loss/loss";
    pub const ADJUSTED: &str = "Loss/adjusted";
    pub const KIMG: &str = "Progress/kimg";
    pub const MEAN: &str = "mean";
}

pub mod chart {
    pub const TITLE: &str = "Training Loss Progression";
    pub const X_LABEL: &str = "kimg";
    pub const Y_LABEL: &str = "Loss Value";
    pub const LOSS_LABEL: &str = "Loss";
    pub const ADJUSTED_LABEL: &str = "Adjusted Loss";
    pub const MARKER_SIZE: i32 = 3;
}

pub const DEFAULT_OUTPUT: &str = "loss_plot.png";
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;
