//! Visualization: build a scatter [`Plot`] over a set of points, narrow its
//! visible window with [`Plot::clip_axes`], and rasterize it into an
//! in-memory RGB buffer with plotters' bitmap backend.
//!
//! A plot only *borrows* its points. Clipping changes the window, never the
//! data; markers outside the window are simply not drawn.

pub mod fonts;
pub mod util;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use std::ops::Range;

use crate::config::{MAX_CANVAS_PX, MarkerStyle};
use crate::error::{Error, Result};
use crate::models::{AxisRange, Point};

use fonts::ensure_fonts_registered;
use util::{autoscale, degree_label, marker_radius_px, parse_color};

const MARGIN: u32 = 16;
const LEFT_LABEL_AREA_PX: u32 = 56;
const BOTTOM_LABEL_AREA_PX: u32 = 48;
const X_LABELS: usize = 13;
const Y_LABELS: usize = 10;

/// A scatter plot of borrowed points with a marker style and a visible window.
#[derive(Debug, Clone)]
pub struct Plot<'a> {
    points: &'a [Point],
    style: MarkerStyle,
    x_range: AxisRange,
    y_range: AxisRange,
}

/// Draw every point as a filled marker with the given style.
///
/// The initial window is the padded data extent; call [`Plot::clip_axes`] to
/// narrow it.
pub fn render<'a>(points: &'a [Point], style: &MarkerStyle) -> Plot<'a> {
    let (x_range, y_range) = autoscale(points);
    log::debug!(
        "rendering {} points, autoscaled to x={:?} y={:?}",
        points.len(),
        x_range,
        y_range
    );
    Plot {
        points,
        style: style.clone(),
        x_range,
        y_range,
    }
}

impl<'a> Plot<'a> {
    /// Restrict the visible window. Does not touch the underlying points.
    pub fn clip_axes(&mut self, x_range: AxisRange, y_range: AxisRange) {
        self.x_range = x_range;
        self.y_range = y_range;
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn is_visible(&self, p: &Point) -> bool {
        p.is_finite() && self.x_range.contains(p.longitude) && self.y_range.contains(p.latitude)
    }

    /// Points whose marker centre lies inside the current window.
    pub fn visible_points(&self) -> impl Iterator<Item = &'a Point> + '_ {
        self.points.iter().filter(move |p| self.is_visible(p))
    }

    /// Draw the plot into a fresh `width × height` RGB buffer.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<Raster> {
        self.rasterize_with(width, height, ensure_fonts_registered())
    }

    fn rasterize_with(&self, width: u32, height: u32, with_text: bool) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(Error::Render(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > MAX_CANVAS_PX || height > MAX_CANVAS_PX {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at most {MAX_CANVAS_PX}x{MAX_CANVAS_PX} px, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| Error::Render(format!("canvas {width}x{height} is too large")))?;
        self.x_range.validate()?;
        self.y_range.validate()?;
        let color = parse_color(&self.style.color)?;

        let mut pixels = vec![0u8; len];
        let (plot_area, drawn) = {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            draw_scatter(root, self, color, with_text)?
        };
        log::debug!("rasterized {drawn} of {} points at {width}x{height}", self.points.len());

        Ok(Raster {
            width,
            height,
            pixels,
            plot_area,
            x_range: self.x_range,
            y_range: self.y_range,
            drawn,
        })
    }
}

/// Helper that draws to any Plotters backend. Returns the plotting area's
/// pixel rectangle and the number of markers drawn.
fn draw_scatter<DB>(
    root: DrawingArea<DB, Shift>,
    plot: &Plot<'_>,
    color: RGBColor,
    with_text: bool,
) -> Result<((Range<i32>, Range<i32>), usize)>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(render_err)?;

    let (x, y) = (plot.x_range, plot.y_range);
    let mut builder = ChartBuilder::on(&root);
    builder.margin(MARGIN);
    // Without a font the label areas stay empty so no text is ever drawn.
    if with_text {
        builder
            .set_label_area_size(LabelAreaPosition::Left, LEFT_LABEL_AREA_PX)
            .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_AREA_PX);
    }
    let mut chart = builder
        .build_cartesian_2d(x.min..x.max, y.min..y.max)
        .map_err(render_err)?;

    let label_fmt = |v: &f64| degree_label(*v);
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(X_LABELS)
        .y_labels(Y_LABELS)
        .x_label_formatter(&label_fmt)
        .y_label_formatter(&label_fmt);
    if with_text {
        mesh.x_desc("Longitude")
            .y_desc("Latitude")
            .label_style((FontFamily::SansSerif, 12))
            .axis_desc_style((FontFamily::SansSerif, 14));
    }
    mesh.draw().map_err(render_err)?;

    let radius = marker_radius_px(plot.style.size);
    let fill = color.mix(plot.style.alpha).filled();
    let visible: Vec<(f64, f64)> = plot
        .visible_points()
        .map(|p| (p.longitude, p.latitude))
        .collect();
    chart
        .draw_series(visible.iter().map(|c| Circle::new(*c, radius, fill)))
        .map_err(render_err)?;

    let plot_area = chart.plotting_area().get_pixel_range();
    root.present().map_err(render_err)?;
    Ok((plot_area, visible.len()))
}

fn render_err<E: std::fmt::Debug>(e: E) -> Error {
    Error::Render(format!("{e:?}"))
}

/// Rasterized plot: packed RGB8 pixels, row-major.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    plot_area: (Range<i32>, Range<i32>),
    x_range: AxisRange,
    y_range: AxisRange,
    drawn: usize,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of markers actually drawn (points inside the window).
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Approximate pixel position of a point, or `None` if it is outside the window.
    pub fn locate(&self, p: &Point) -> Option<(u32, u32)> {
        if !p.is_finite() || !self.x_range.contains(p.longitude) || !self.y_range.contains(p.latitude)
        {
            return None;
        }
        let (xs, ys) = &self.plot_area;
        let fx = (p.longitude - self.x_range.min) / self.x_range.span();
        let fy = (self.y_range.max - p.latitude) / self.y_range.span();
        let px = xs.start as f64 + fx * (xs.end - xs.start - 1) as f64;
        let py = ys.start as f64 + fy * (ys.end - ys.start - 1) as f64;
        Some((px.round().max(0.0) as u32, py.round().max(0.0) as u32))
    }
}
