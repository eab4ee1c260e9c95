//! geoscatter
//!
//! A small Rust library for loading coordinate tables from CSV and
//! scatter-plotting them over the continental United States. Pairs with the
//! `geoscatter` CLI.
//!
//! ### Pipeline
//! `load → extract_coordinates → render → clip_axes → display`
//!
//! ### Example
//! ```no_run
//! use geoscatter::config::{CONUS_LATITUDE, CONUS_LONGITUDE, PlotConfig};
//! use geoscatter::{DisplayMode, dataset, display, viz};
//!
//! let cfg = PlotConfig::default();
//! let data = dataset::load("top_5000_locations.csv")?;
//! let points = dataset::extract_coordinates(&data)?;
//! let mut plot = viz::render(&points, &cfg.marker);
//! plot.clip_axes(CONUS_LONGITUDE, CONUS_LATITUDE);
//! display::display(plot, DisplayMode::Auto, cfg.width, cfg.height)?;
//! # Ok::<(), geoscatter::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod models;
pub mod stats;
pub mod viz;

pub use config::{MarkerStyle, PlotConfig};
pub use dataset::Dataset;
pub use display::DisplayMode;
pub use error::{Error, Result};
pub use models::{AxisRange, Point};
pub use viz::Plot;
