//! Runtime font registration for the `ab_glyph` text path.
//!
//! `ab_glyph` does not discover OS fonts, so a sans-serif face is looked up
//! once and registered under the `"sans-serif"` family. When nothing usable
//! is found the chart is drawn without text.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Overrides the font search with an explicit `.ttf` path.
pub const FONT_ENV: &str = "GEOSCATTER_FONT";

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONTS_READY: OnceLock<bool> = OnceLock::new();

/// Register a sans-serif font on first call; returns whether text can be drawn.
pub fn ensure_fonts_registered() -> bool {
    *FONTS_READY.get_or_init(|| {
        for path in candidate_paths() {
            let Ok(bytes) = std::fs::read(&path) else {
                continue;
            };
            // plotters keeps registered font data for the life of the process.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            match plotters::style::register_font(
                "sans-serif",
                plotters::style::FontStyle::Normal,
                bytes,
            ) {
                Ok(()) => {
                    log::debug!("registered font {}", path.display());
                    return true;
                }
                Err(_) => log::debug!("skipping unusable font {}", path.display()),
            }
        }
        log::warn!("no sans-serif font found (set {FONT_ENV}); drawing axes without labels");
        false
    })
}

fn candidate_paths() -> impl Iterator<Item = PathBuf> {
    std::env::var_os(FONT_ENV)
        .map(PathBuf::from)
        .into_iter()
        .chain(CANDIDATES.iter().map(PathBuf::from))
}
