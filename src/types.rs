/// Metric means in the order they were logged
pub type Data = Vec<f64>;

/// The three sequences collected from one pass over a stats file.
///
/// `loss` and `kimg` are expected to line up by index, but nothing here
/// enforces it: a record carrying one key and not the other shifts them apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossSeries {
    pub loss: Data,
    pub adjusted: Data,
    pub kimg: Data,
    /// 1-based line numbers that were not valid JSON
    pub skipped_lines: Vec<usize>,
}

impl LossSeries {
    pub fn points(&self) -> usize {
        self.loss.len()
    }

    pub fn has_adjusted(&self) -> bool {
        !self.adjusted.is_empty()
    }
}
