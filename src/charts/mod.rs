pub mod loss;
pub mod theme;
mod utils;

pub use loss::LossChart;
