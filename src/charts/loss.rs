use std::path::Path;

use plotters::{
    backend::DrawingBackend,
    coord::Shift,
    drawing::{DrawingArea, IntoDrawingArea},
    element::PathElement,
    prelude::{BitMapBackend, ChartBuilder, Circle, EmptyElement, SVGBackend, SeriesLabelPosition},
    series::{LineSeries, PointSeries},
    style::{Color, RGBColor, ShapeStyle},
};

use super::theme::plotters_colors as theme;
use super::utils::padded_range;
use crate::constants::chart::{ADJUSTED_LABEL, LOSS_LABEL, MARKER_SIZE, TITLE, X_LABEL, Y_LABEL};
use crate::error::PlotError;
use crate::types::{Data, LossSeries};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Data,
    pub color: &'static RGBColor,
}

/// Everything needed to draw one loss chart. Built fresh per run and consumed by [`LossChart::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct LossChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Data,
    pub series: Vec<ChartSeries>,
}

impl LossChart {
    pub fn from_series(series: LossSeries) -> Self {
        let has_adjusted = series.has_adjusted();

        let mut lines = vec![ChartSeries {
            label: LOSS_LABEL.to_string(),
            values: series.loss,
            color: &theme::RED,
        }];

        if has_adjusted {
            lines.push(ChartSeries {
                label: ADJUSTED_LABEL.to_string(),
                values: series.adjusted,
                color: &theme::BLUE,
            });
        }

        Self {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x: series.kimg,
            series: lines,
        }
    }

    /// Every series has to line up with the kimg axis point for point.
    pub fn check_lengths(&self) -> Result<(), PlotError> {
        for line in &self.series {
            if line.values.len() != self.x.len() {
                return Err(PlotError::Render(format!(
                    "'{}' has {} points but '{}' has {}",
                    line.label,
                    line.values.len(),
                    self.x_label,
                    self.x.len()
                )));
            }
        }
        Ok(())
    }

    /// Draws the chart to `path`. An `.svg` extension gets vector output, anything else
    /// goes through the bitmap encoder chosen by extension.
    pub fn save(&self, path: &Path, size: (u32, u32)) -> Result<(), PlotError> {
        self.check_lengths()?;

        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            self.draw(SVGBackend::new(path, size).into_drawing_area())
        } else {
            self.draw(BitMapBackend::new(path, size).into_drawing_area())
        }
    }

    fn draw<DB>(&self, root: DrawingArea<DB, Shift>) -> Result<(), PlotError>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&theme::BASE).map_err(render_error)?;

        let (x_min, x_max) = padded_range(self.x.iter().copied()).unwrap_or((0.0, 1.0));
        let (y_min, y_max) = padded_range(
            self.series
                .iter()
                .flat_map(|line| line.values.iter().copied()),
        )
        .unwrap_or((0.0, 1.0));

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 20, &theme::TEXT))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .label_style(("sans-serif", 15, &theme::TEXT))
            .axis_style(&theme::SURFACE1)
            .bold_line_style(&theme::SURFACE1)
            .light_line_style(&theme::SURFACE0)
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .draw()
            .map_err(render_error)?;

        for line in &self.series {
            let points: Vec<(f64, f64)> = self
                .x
                .iter()
                .copied()
                .zip(line.values.iter().copied())
                .collect();
            let is_gap = |(x, y): &(f64, f64)| !x.is_finite() || !y.is_finite();

            // A diverged value breaks the line rather than bridging it
            for segment in points.split(is_gap) {
                chart
                    .draw_series(LineSeries::new(
                        segment.iter().copied(),
                        ShapeStyle::from(line.color).stroke_width(2),
                    ))
                    .map_err(render_error)?;
            }

            chart
                .draw_series(PointSeries::of_element(
                    points.iter().copied().filter(|point| !is_gap(point)),
                    MARKER_SIZE,
                    line.color.filled(),
                    &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
                ))
                .map_err(render_error)?
                .label(line.label.as_str())
                .legend(legend_swatch(line.color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(theme::SURFACE0.mix(0.7))
            .border_style(&theme::SURFACE1)
            .label_font(("sans-serif", 14, &theme::TEXT))
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;

        Ok(())
    }
}

/// A short stroke in the series colour, like the line it stands for.
fn legend_swatch(color: &'static RGBColor) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
}

fn render_error(err: impl std::fmt::Display) -> PlotError {
    PlotError::Render(err.to_string())
}
