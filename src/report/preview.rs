use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use plotters::prelude::*;

use crate::data::validate::{BoundingBox, LAT_RANGE, LON_RANGE};
use crate::error::{InspectError, Result};

pub const TITLE_WITH_POINTS: &str = "Point Preview (lon vs lat)";
pub const TITLE_NO_POINTS: &str = "Preview Plot (No valid coordinates to plot)";
pub const X_LABEL: &str = "Longitude";
pub const Y_LABEL: &str = "Latitude";

const MARKER: RGBColor = RGBColor(31, 119, 180);
const MARKER_SIZE: i32 = 4;
const CAPTION_SIZE: u32 = 28;
const MARGIN: u32 = 10;

/// Fraction of the data span added on each side of the plot extent.
const PAD_FRACTION: f64 = 0.05;
/// Smallest extent shown on either axis, in degrees.
const MIN_SPAN: f64 = 1.0;

fn plot_err<E: std::fmt::Display>(e: E) -> InspectError {
    InspectError::Plot(e.to_string())
}

// ---------------------------------------------------------------------------
// Plot extent
// ---------------------------------------------------------------------------

/// Degrees shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Pad `[lo, hi]`, widen it to at least [`MIN_SPAN`] and clamp it to `legal`.
    fn padded(lo: f64, hi: f64, legal: (f64, f64)) -> Self {
        let span = (hi - lo).max(0.0);
        let pad = span * PAD_FRACTION;
        let (mut min, mut max) = (lo - pad, hi + pad);
        if max - min < MIN_SPAN {
            let center = (lo + hi) / 2.0;
            min = center - MIN_SPAN / 2.0;
            max = center + MIN_SPAN / 2.0;
        }
        AxisRange { min: min.max(legal.0), max: max.min(legal.1) }
    }

    fn world(legal: (f64, f64)) -> Self {
        AxisRange { min: legal.0, max: legal.1 }
    }
}

fn lon_legal() -> (f64, f64) {
    (*LON_RANGE.start(), *LON_RANGE.end())
}

fn lat_legal() -> (f64, f64) {
    (*LAT_RANGE.start(), *LAT_RANGE.end())
}

// ---------------------------------------------------------------------------
// Preview plot
// ---------------------------------------------------------------------------

/// Scatter of valid `(lon, lat)` points, longitude on x and latitude on y.
#[derive(Debug, Clone)]
pub struct PreviewPlot {
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
    points: Vec<(f64, f64)>,
    extent: Option<(AxisRange, AxisRange)>,
}

impl PreviewPlot {
    /// With no points the chart spans the whole globe, empty, under the
    /// "no valid coordinates" caption.
    pub fn new(width: u32, height: u32, points: &[(f64, f64)], bbox: Option<&BoundingBox>) -> Self {
        let extent = bbox.filter(|_| !points.is_empty()).map(|b| {
            (
                AxisRange::padded(b.min_lon, b.max_lon, lon_legal()),
                AxisRange::padded(b.min_lat, b.max_lat, lat_legal()),
            )
        });
        let title = if extent.is_some() { TITLE_WITH_POINTS } else { TITLE_NO_POINTS };
        PreviewPlot { width, height, title, points: points.to_vec(), extent }
    }

    /// Axis ranges fitted to the points, `None` for the empty placeholder.
    pub fn extent(&self) -> Option<(AxisRange, AxisRange)> {
        self.extent
    }

    /// Rasterise the chart into an RGB image.
    pub fn render(&self) -> Result<RgbImage> {
        let (w, h) = (self.width, self.height);
        let mut buf = vec![0u8; w as usize * h as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;

            let (x_range, y_range) = self
                .extent
                .unwrap_or((AxisRange::world(lon_legal()), AxisRange::world(lat_legal())));

            let mut chart = ChartBuilder::on(&root)
                .caption(self.title, ("sans-serif", CAPTION_SIZE))
                .margin(MARGIN)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range.min..x_range.max, y_range.min..y_range.max)
                .map_err(plot_err)?;

            chart
                .configure_mesh()
                .x_desc(X_LABEL)
                .y_desc(Y_LABEL)
                .draw()
                .map_err(plot_err)?;

            chart
                .draw_series(
                    self.points
                        .iter()
                        .map(|&(lon, lat)| Circle::new((lon, lat), MARKER_SIZE, MARKER.filled())),
                )
                .map_err(plot_err)?;

            root.present().map_err(plot_err)?;
        }

        RgbImage::from_raw(w, h, buf)
            .ok_or_else(|| InspectError::Plot("preview buffer does not match its size".to_string()))
    }

    /// Render and overwrite `path` with a PNG. The title and axis labels are
    /// also stored as `tEXt` chunks.
    pub fn save(&self, path: &Path) -> Result<()> {
        let img = self.render()?;
        let png_err = |source| InspectError::Png { path: path.to_path_buf(), source };

        let file = File::create(path)
            .map_err(|source| InspectError::Io { path: path.to_path_buf(), source })?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.add_text_chunk("Title".to_string(), self.title.to_string()).map_err(png_err)?;
        encoder.add_text_chunk("X-Axis".to_string(), X_LABEL.to_string()).map_err(png_err)?;
        encoder.add_text_chunk("Y-Axis".to_string(), Y_LABEL.to_string()).map_err(png_err)?;

        let mut writer = encoder.write_header().map_err(png_err)?;
        writer.write_image_data(img.as_raw()).map_err(png_err)?;
        writer.finish().map_err(png_err)?;

        log::info!(
            "preview written to {} ({} points, \"{}\")",
            path.display(),
            self.points.len(),
            self.title
        );
        Ok(())
    }
}
