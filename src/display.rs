//! Presenting a rendered plot: a native viewer window that blocks until it
//! is closed, or a batch path that rasterizes and returns immediately.

use eframe::egui;

use crate::error::{Error, Result};
use crate::viz::{Plot, Raster};

/// Where the plot should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Window when a display server is reachable, otherwise headless.
    #[default]
    Auto,
    /// Always open a window.
    Window,
    /// Rasterize only; nothing is shown or persisted.
    Headless,
}

impl DisplayMode {
    /// Resolve `Auto` against the current environment.
    pub fn resolve(self) -> DisplayMode {
        match self {
            DisplayMode::Auto if display_available() => DisplayMode::Window,
            DisplayMode::Auto => DisplayMode::Headless,
            other => other,
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(DisplayMode::Auto),
            "window" => Ok(DisplayMode::Window),
            "headless" | "batch" => Ok(DisplayMode::Headless),
            other => Err(Error::InvalidConfig(format!("unknown display mode {other:?}"))),
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|k| std::env::var_os(k).is_some_and(|v| !v.is_empty()))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}

/// Rasterize `plot` at `width × height` and present it according to `mode`.
///
/// In window mode this blocks until the viewer is closed.
pub fn display(plot: Plot<'_>, mode: DisplayMode, width: u32, height: u32) -> Result<()> {
    let raster = plot.rasterize(width, height)?;
    match mode.resolve() {
        DisplayMode::Window => {
            log::info!(
                "showing {} of {} points; close the window to exit",
                raster.drawn(),
                plot.points().len()
            );
            show_window(raster)
        }
        _ => {
            log::info!(
                "no display available, rendered {} of {} points without a window",
                raster.drawn(),
                plot.points().len()
            );
            Ok(())
        }
    }
}

fn show_window(raster: Raster) -> Result<()> {
    let (w, h) = (raster.width() as f32, raster.height() as f32);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            .with_min_inner_size([w / 4.0, h / 4.0])
            .with_title("geoscatter"),
        ..Default::default()
    };

    eframe::run_native(
        "geoscatter",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(raster)))),
    )
    .map_err(|e| Error::Display(e.to_string()))
}

/// Viewer state: the raster and, once uploaded, its GPU texture.
struct Viewer {
    raster: Raster,
    texture: Option<egui::TextureHandle>,
}

impl Viewer {
    fn new(raster: Raster) -> Self {
        Self {
            raster,
            texture: None,
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let raster = &self.raster;
        let texture = self.texture.get_or_insert_with(|| {
            let image = egui::ColorImage::from_rgb(
                [raster.width() as usize, raster.height() as usize],
                raster.pixels(),
            );
            ctx.load_texture("scatter", image, egui::TextureOptions::LINEAR)
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(&*texture).shrink_to_fit());
                });
            });
    }
}
