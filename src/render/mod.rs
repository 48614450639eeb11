//! Figure rendering into explicitly owned pixel buffers

pub mod viewer;

use crate::defaults;
use crate::error::{AppError, Result};
use crate::stats::TraceMetrics;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// A rendered figure: an owned RGB pixel buffer plus its title.
///
/// Owning the pixels keeps rendering free of any global plotting state;
/// saving and showing are explicit operations on the finished artifact.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Figure {
    /// Title of the figure, also used as the output file stem
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Pixel dimensions of the figure
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Write the figure as `<title>.png` into the given directory.
    ///
    /// The directory is created first if it does not exist. Returns the
    /// path of the written file.
    pub fn save_png(&self, figure_dir: &Path) -> Result<PathBuf> {
        ensure_dir(figure_dir)?;

        let path = figure_dir.join(format!("{}.png", self.title));
        image::save_buffer(
            &path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| AppError::render(format!("Failed to write {}: {}", path.display(), e)))?;

        log::info!("wrote {}", path.display());

        Ok(path)
    }

    /// Open the figure in the system image viewer.
    ///
    /// The figure is written to the platform temporary directory first;
    /// the viewer process is not waited on.
    pub fn show(&self) -> Result<()> {
        let path = self.save_png(&std::env::temp_dir())?;
        viewer::open_in_viewer(&path)
    }
}

/// Renders the three derived series of one trace into a `Figure`.
///
/// Layout: a 2×2 grid with the bottom row merged. Top-left status jitter,
/// top-right command jitter, bottom command delay.
#[derive(Debug, Clone)]
pub struct Renderer {
    width: u32,
    height: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            width: defaults::FIGURE_WIDTH,
            height: defaults::FIGURE_HEIGHT,
        }
    }
}

impl Renderer {
    /// Create a renderer producing figures of the default dimensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer producing figures of custom dimensions
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render the metrics of one trace into an owned figure
    pub fn render(&self, metrics: &TraceMetrics, title: &str) -> Result<Figure> {
        let mut pixels = vec![0u8; (self.width * self.height * 3) as usize];

        {
            let root = BitMapBackend::with_buffer(&mut pixels, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| AppError::render(format!("Failed to clear figure: {}", e)))?;

            let root = root
                .titled(title, ("sans-serif", 32))
                .map_err(|e| AppError::render(format!("Failed to draw figure title: {}", e)))?;

            let (upper, lower) = root.split_vertically((root.dim_in_pixel().1 / 2) as i32);
            let panels = upper.split_evenly((1, 2));

            draw_panel(
                &panels[0],
                "Status Frame Jitter",
                "Jitter [ms]",
                defaults::JITTER_AXIS_MS,
                &metrics.status_jitter,
            )?;
            draw_panel(
                &panels[1],
                "Command Frame Jitter",
                "Jitter [ms]",
                defaults::JITTER_AXIS_MS,
                &metrics.command_jitter,
            )?;
            draw_panel(
                &lower,
                "Command Frame Delay",
                "Delay [ms]",
                defaults::DELAY_AXIS_MS,
                &metrics.command_delay,
            )?;

            root.present()
                .map_err(|e| AppError::render(format!("Failed to finalize figure: {}", e)))?;
        }

        Ok(Figure {
            title: title.to_string(),
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}

/// Draw one panel: captioned chart with grid, fixed axes and a line series.
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    y_label: &str,
    y_range: (f64, f64),
    series: &[(f64, f64)],
) -> Result<()> {
    let (x_min, x_max) = defaults::TIME_AXIS_SECS;
    let (y_min, y_max) = y_range;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| AppError::render(format!("Failed to build panel '{}': {}", caption, e)))?;

    chart
        .configure_mesh()
        .x_desc("Traj. Time [s]")
        .y_desc(y_label)
        .draw()
        .map_err(|e| AppError::render(format!("Failed to draw grid of '{}': {}", caption, e)))?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
        .map_err(|e| AppError::render(format!("Failed to plot '{}': {}", caption, e)))?;

    Ok(())
}

/// Idempotent "ensure directory exists" with surfaced errors.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::io(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))
    })
}
