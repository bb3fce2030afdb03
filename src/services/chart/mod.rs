// Chart rendering service
// Renders interval data into RGB buffers and encoded PNG bytes

pub mod layout;
mod render;

use crate::models::plot::PlotInterval;
use crate::models::style::{ChartLayout, ChartStyle, ChildProfile};
use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

/// Live preview raster, 100 DPI over the 14x10 in figure.
pub const PREVIEW_SIZE: (u32, u32) = (1400, 1000);
/// Download raster, 300 DPI over the same figure.
pub const EXPORT_SIZE: (u32, u32) = (4200, 3000);

const FIGURE_WIDTH_INCHES: f64 = 14.0;
const POINTS_PER_INCH: f64 = 72.0;

/// Everything one render pass reads: the two profiles and their expanded
/// intervals, in slot order (first child left, second child right).
pub struct ChartInput<'a> {
    pub children: [&'a ChildProfile; 2],
    pub intervals: [&'a [PlotInterval]; 2],
}

/// Stateless renderer over a style, a layout strategy and an optionally
/// provisioned font family. Rendering is a pure function of its inputs;
/// the same input always yields the same bytes.
pub struct ChartRenderer<'a> {
    style: &'a ChartStyle,
    chart_layout: ChartLayout,
    font: Option<&'a str>,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(style: &'a ChartStyle, chart_layout: ChartLayout) -> Self {
        Self {
            style,
            chart_layout,
            font: None,
        }
    }

    /// Attach the chart font family. With `None` the bars and grid still
    /// render; all text is skipped.
    pub fn with_font(mut self, font: Option<&'a str>) -> Self {
        self.font = font;
        self
    }

    /// Render into a raw RGB8 buffer (3 bytes per pixel, row-major), the
    /// shape the preview texture wants.
    pub fn render_rgb(&self, input: &ChartInput<'_>, size: (u32, u32)) -> Result<Vec<u8>> {
        let (width, height) = size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            root.fill(&WHITE).map_err(|e| anyhow!("background: {e}"))?;

            let frame = render::Frame {
                style: self.style,
                font: self.font,
                px_per_pt: f64::from(width) / FIGURE_WIDTH_INCHES / POINTS_PER_INCH,
            };
            render::draw_chart(&root, input, &frame, self.chart_layout)?;

            root.present().map_err(|e| anyhow!("present: {e}"))?;
        }
        Ok(buffer)
    }

    /// Render and encode as PNG, suitable for direct display and for
    /// byte-exact download.
    pub fn render_png(&self, input: &ChartInput<'_>, size: (u32, u32)) -> Result<Vec<u8>> {
        let rgb = self.render_rgb(input, size)?;
        encode_png(&rgb, size)
    }
}

fn encode_png(rgb: &[u8], (width, height): (u32, u32)) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().context("writing PNG header")?;
    writer
        .write_image_data(rgb)
        .context("writing PNG image data")?;
    writer.finish().context("finishing PNG stream")?;

    Ok(bytes)
}
