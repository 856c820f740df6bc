//! Module for visualizing a synthesized fortune series.
//!
//! The renderer consumes the chart-data contract (period labels plus
//! `[open, close, low, high]` rows) and draws a monthly candlestick chart.
//! [`ChartSlot`] wraps the rendering boundary with scoped ownership: at most
//! one live chart handle exists at a time, and acquiring a new one releases
//! the previous one first.

use crate::engine::{SCALE_MAX, SCALE_MIN, Series};
use crate::errors::{Error, Result};

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Aspect ratio for the generated charts.
const ASPECT_RATIO: f64 = 0.5625;
/// Size of the X-axis labels.
const X_LABEL_SIZE: i32 = 20;
/// Size of the Y-axis labels.
const Y_LABEL_SIZE: i32 = 20;

/// Output formats for the generated charts with output filename.
pub enum DrawOutput {
    /// Save to the output SVG file.
    Svg(&'static str),
    /// Save to the output PNG file.
    Png(&'static str),
}

impl Default for DrawOutput {
    fn default() -> Self {
        Self::Svg("fortune.svg")
    }
}

impl DrawOutput {
    /// Returns the output path.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Svg(path) | Self::Png(path) => path,
        }
    }
}

/// Configuration options for chart generation.
#[derive(Default)]
pub struct DrawOptions {
    /// Chart title.
    title: Option<String>,
    /// Output format and path.
    output: DrawOutput,
    /// Whether to overlay the average-close line.
    show_average: bool,
}

impl DrawOptions {
    /// Sets the chart title.
    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the output format and path.
    pub fn draw_output(mut self, output: DrawOutput) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables the average-close overlay.
    pub fn show_average(mut self, show: bool) -> Self {
        self.show_average = show;
        self
    }
}

/// Chart drawing utility for fortune series.
#[derive(Default)]
pub struct Draw<'d> {
    /// Reference to the series to render.
    series: Option<&'d Series>,
    /// Drawing options.
    options: DrawOptions,
}

impl<'d> Draw<'d> {
    /// Creates a new `Draw` instance with the given series.
    pub fn with_series(series: &'d Series) -> Self {
        Self {
            series: Some(series),
            options: DrawOptions::default(),
        }
    }

    /// Sets the drawing options.
    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.options = options;
        self
    }

    /// Generates and saves the chart based on the configured options.
    pub fn plot(&self) -> Result<()> {
        let series = self.series.ok_or(Error::Msg("No series provided".to_string()))?;
        if series.is_empty() {
            return Err(Error::SeriesEmpty);
        }

        let title = self.options.title.as_deref().unwrap_or("Fortune Outlook");
        let sample_count = series.len() as u32;
        let width = 1280.max(10 * sample_count);
        let height = ((width as f64 * ASPECT_RATIO) as u32).min(900);

        match self.options.output {
            DrawOutput::Svg(path) => {
                let root = SVGBackend::new(path, (width, height)).into_drawing_area();
                root.fill(&WHITE).map_err(|e| Error::Plotters(e.to_string()))?;
                self.draw_chart(&root, series, title)
            }
            DrawOutput::Png(path) => {
                let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
                root.fill(&WHITE).map_err(|e| Error::Plotters(e.to_string()))?;
                self.draw_chart(&root, series, title)
            }
        }
    }

    /// Draws the candlestick chart with the fixed value axis.
    fn draw_chart<DB: DrawingBackend>(
        &self,
        drawing_area: &DrawingArea<DB, Shift>,
        series: &Series,
        title: &str,
    ) -> Result<()> {
        let labels = series.labels().collect::<Vec<_>>();
        let sample_count = series.len();

        let drawing_area = drawing_area.margin(10, 10, 70, 70);
        let mut chart = ChartBuilder::on(&drawing_area)
            .caption(title, ("sans-serif", 30).into_font())
            .x_label_area_size(X_LABEL_SIZE)
            .y_label_area_size(Y_LABEL_SIZE)
            .build_cartesian_2d(-1..sample_count as i32, SCALE_MIN..SCALE_MAX)
            .map_err(|e| Error::Plotters(e.to_string()))?;

        let x_labels = (sample_count / 15).max(2);
        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Fortune")
            .x_labels(x_labels)
            .y_labels(5)
            .x_label_style(("sans-serif", X_LABEL_SIZE))
            .y_label_style(("sans-serif", Y_LABEL_SIZE))
            .x_label_formatter(&|x| {
                usize::try_from(*x)
                    .ok()
                    .and_then(|i| labels.get(i).cloned())
                    .unwrap_or_default()
            })
            .draw()
            .map_err(|e| Error::Plotters(e.to_string()))?;

        let candle_width = {
            let total_width = drawing_area.dim_in_pixel().0 as f64;
            let available_width = total_width - (X_LABEL_SIZE * 2) as f64;
            (available_width / sample_count as f64).max(5.0) as u32
        };

        chart
            .draw_series(series.samples().iter().enumerate().map(|(i, s)| {
                let color = if s.close() >= s.open() { GREEN.filled() } else { RED.filled() };
                CandleStick::new(i as i32, s.open(), s.high(), s.low(), s.close(), color, color, candle_width)
            }))
            .map_err(|e| Error::Plotters(e.to_string()))?;

        if self.options.show_average {
            let average = series.samples().iter().map(|s| s.close()).sum::<f64>() / sample_count as f64;
            chart
                .draw_series(LineSeries::new(
                    (0..sample_count).map(|i| (i as i32, average)),
                    MAGENTA.stroke_width(1),
                ))
                .map_err(|e| Error::Plotters(e.to_string()))?;
        }

        drawing_area.present().map_err(|e| Error::Plotters(e.to_string()))
    }
}

/// A live rendered chart.
///
/// Obtained from [`ChartSlot::acquire`]; dropping it (or releasing the slot)
/// tears the rendering down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    path: &'static str,
    points: usize,
}

impl ChartHandle {
    /// Returns the output path of the rendered chart.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the number of rendered samples.
    pub fn points(&self) -> usize {
        self.points
    }
}

/// Scoped owner of at most one live chart.
///
/// A new generation request first tears down any previous rendering resource,
/// then builds and hands over the new one; two handles are never live at the
/// same time.
#[derive(Debug, Default)]
pub struct ChartSlot {
    live: Option<ChartHandle>,
}

impl ChartSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a series and installs its handle, releasing any previous one
    /// first.
    ///
    /// ### Arguments
    /// * `series` - The series to render; must hold at least one sample.
    /// * `options` - Title, overlay, and output settings.
    ///
    /// ### Returns
    /// A borrow of the freshly installed handle, or an error.
    pub fn acquire(&mut self, series: &Series, options: DrawOptions) -> Result<&ChartHandle> {
        self.release();
        if series.is_empty() {
            return Err(Error::SeriesEmpty);
        }

        let path = options.output.path();
        Draw::with_series(series).with_options(options).plot()?;

        let handle = ChartHandle {
            path,
            points: series.len(),
        };
        log::debug!("acquired chart handle: {} ({} points)", handle.path, handle.points);
        Ok(self.live.insert(handle))
    }

    /// Releases the live handle, if any.
    pub fn release(&mut self) {
        if let Some(handle) = self.live.take() {
            log::debug!("released chart handle: {}", handle.path);
        }
    }

    /// Returns the live handle, if any.
    pub fn live(&self) -> Option<&ChartHandle> {
        self.live.as_ref()
    }
}
