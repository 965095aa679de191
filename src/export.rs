//! Raster export: PNG and ICO encoding, Lanczos3 resampling, and the macOS
//! iconset directory layout.

use anyhow::{Context, Result, bail};
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::board;
use crate::constants::export::{ICONSET_MAX_SIZE, ICONSET_SIZES};
use crate::font::DigitFont;
use crate::theme::Theme;

/// The default run never creates its output directory; a missing or
/// non-directory target is fatal.
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("Output directory {} does not exist", dir.display());
    }
    Ok(())
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Lanczos3 resample to `edge` x `edge`, then PNG.
pub fn save_scaled_png(img: &RgbaImage, path: &Path, edge: u32) -> Result<()> {
    save_png(&resample(img, edge), path)
}

/// Lanczos3 resample to `edge` x `edge`, then ICO. The encoder rejects
/// edges beyond 256, which the fixed export sizes never reach.
pub fn save_ico(img: &RgbaImage, path: &Path, edge: u32) -> Result<()> {
    resample(img, edge)
        .save_with_format(path, ImageFormat::Ico)
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn resample(img: &RgbaImage, edge: u32) -> RgbaImage {
    image::imageops::resize(img, edge, edge, FilterType::Lanczos3)
}

/// Write `<name>.iconset/` with icon_NxN.png and icon_NxN@2x.png entries,
/// re-rendering the board at each native resolution instead of resampling
/// the master. Recreates the directory if it already exists.
pub fn write_iconset(
    parent: &Path,
    name: &str,
    theme: &Theme,
    font: &DigitFont,
) -> Result<PathBuf> {
    let iconset_dir = parent.join(format!("{}.iconset", name));
    if iconset_dir.exists() {
        fs::remove_dir_all(&iconset_dir)
            .with_context(|| format!("Failed to clear {}", iconset_dir.display()))?;
    }
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("Failed to create {}", iconset_dir.display()))?;

    for &size in &ICONSET_SIZES {
        let img = board::render(size, theme, font);
        save_png(&img, &iconset_dir.join(format!("icon_{0}x{0}.png", size)))?;

        let size_2x = size * 2;
        if size_2x <= ICONSET_MAX_SIZE {
            let img_2x = board::render(size_2x, theme, font);
            save_png(&img_2x, &iconset_dir.join(format!("icon_{0}x{0}@2x.png", size)))?;
        }
    }

    Ok(iconset_dir)
}
