use std::path::PathBuf;

use colored::Colorize;

use crate::charts::LossChart;
use crate::constants::{keys, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use crate::error::PlotError;
use crate::stats::read_loss_series;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub loss_key: String,
    pub output: PathBuf,
    pub size: (u32, u32),
}

impl PlotConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            loss_key: keys::LOSS.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    pub points: usize,
    pub output: PathBuf,
    pub skipped_lines: Vec<usize>,
}

/// Reads the stats file, then draws loss (and adjusted loss, when logged) against kimg.
pub fn plot(config: &PlotConfig) -> Result<PlotSummary, PlotError> {
    let series = read_loss_series(&config.input, &config.loss_key)?;

    if series.loss.is_empty() {
        return Err(PlotError::EmptySeries {
            path: config.input.clone(),
            key: config.loss_key.clone(),
        });
    }

    let points = series.points();
    let skipped_lines = series.skipped_lines.clone();

    LossChart::from_series(series).save(&config.output, config.size)?;

    Ok(PlotSummary {
        points,
        output: config.output.clone(),
        skipped_lines,
    })
}

/// Prints the outcome of a run. Never fails, so callers can always exit cleanly.
pub fn report(outcome: &Result<PlotSummary, PlotError>) {
    match outcome {
        Ok(summary) => {
            if !summary.skipped_lines.is_empty() {
                println!(
                    "{}",
                    format!(
                        "Skipped {} undecodable line(s): {:?}",
                        summary.skipped_lines.len(),
                        summary.skipped_lines
                    )
                    .yellow()
                );
            }
            println!(
                "\n{}",
                format!(
                    "Successfully plotted loss ({} points) and saved the image to: {}",
                    summary.points,
                    summary.output.display()
                )
                .green()
            );
        }
        Err(err) if err.is_expected() => println!("{}", format!("Error: {err}").red()),
        Err(err) => println!("{}", format!("An unexpected error occurred: {err}").red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_stats(dir: &TempDir, lines: &[&str]) -> PathBuf {
        let path = dir.path().join("stats.jsonl");
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    fn config(dir: &TempDir, input: PathBuf) -> PlotConfig {
        PlotConfig {
            output: dir.path().join("loss.png"),
            size: (320, 200),
            ..PlotConfig::new(input)
        }
    }

    #[test]
    fn test_defaults() {
        let config = PlotConfig::new("stats.jsonl");
        assert_eq!(config.loss_key, "Loss/loss");
        assert_eq!(config.output, PathBuf::from("loss_plot.png"));
        assert_eq!(config.size, (1000, 600));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, dir.path().join("missing.jsonl"));

        let outcome = plot(&config);

        assert!(matches!(outcome, Err(PlotError::FileNotFound(_))));
        assert!(!config.output.exists());
        report(&outcome);
    }

    #[test]
    fn test_no_loss_records_is_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_stats(
            &dir,
            &[
                r#"{"Progress/kimg": {"mean": 10}}"#,
                r#"{"Loss/adjusted": {"mean": 0.5}, "Progress/kimg": {"mean": 20}}"#,
            ],
        );
        let config = config(&dir, input);

        let outcome = plot(&config);

        match &outcome {
            Err(PlotError::EmptySeries { key, .. }) => assert_eq!(key, "Loss/loss"),
            other => panic!("expected empty series, got {other:?}"),
        }
        assert!(!config.output.exists());
        report(&outcome);
    }

    #[test]
    fn test_field_fault_is_unexpected_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_stats(&dir, &[r#"{"Loss/loss": 1.0, "Progress/kimg": {"mean": 1}}"#]);
        let config = config(&dir, input);

        let outcome = plot(&config);

        let err = outcome.as_ref().unwrap_err();
        assert!(matches!(err, PlotError::Field { line: 1, .. }));
        assert!(!err.is_expected());
        assert!(!config.output.exists());
        report(&outcome);
    }

    #[test]
    fn test_missing_kimg_is_render_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_stats(&dir, &[r#"{"Loss/loss": {"mean": 1.0}}"#]);
        let config = config(&dir, input);

        let outcome = plot(&config);

        assert!(matches!(outcome, Err(PlotError::Render(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_plots_diverged_loss_as_a_gap() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_stats(
            &dir,
            &[
                r#"{"Loss/loss": {"mean": 2.0}, "Loss/adjusted": {"mean": 1.8}, "Progress/kimg": {"mean": 10}}"#,
                r#"{"Loss/loss": {"mean": NaN}, "Loss/adjusted": {"mean": Infinity}, "Progress/kimg": {"mean": 20}}"#,
                r#"{"Loss/loss": {"mean": 1.0}, "Loss/adjusted": {"mean": 0.9}, "Progress/kimg": {"mean": 30}}"#,
            ],
        );
        let config = PlotConfig {
            output: dir.path().join("loss.svg"),
            ..config(&dir, input)
        };

        let summary = plot(&config).unwrap();

        assert_eq!(summary.points, 3);
        assert!(summary.skipped_lines.is_empty());
        assert!(config.output.exists());
    }

    #[test]
    fn test_plots_loss_and_counts_points() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_stats(
            &dir,
            &[
                r#"{"Loss/loss": {"mean": 2.0}, "Progress/kimg": {"mean": 10}}"#,
                r#"{"Loss/loss": {"mean": 2.5"#,
                "",
                r#"{"Loss/loss": {"mean": 1.0}, "Progress/kimg": {"mean": 20}}"#,
            ],
        );
        let config = config(&dir, input);

        for _ in 0..2 {
            let summary = plot(&config).unwrap();

            assert_eq!(summary.points, 2);
            assert_eq!(summary.skipped_lines, vec![2]);
            assert_eq!(summary.output, config.output);
            assert!(config.output.exists());
        }
    }
}
