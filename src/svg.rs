//! Legacy vector rendition of the icon, kept alongside the raster pipeline.
//!
//! The SVG is a hand-assembled document rather than a projection of the
//! theme; it predates the pixel renderer and only sketches the same motif
//! (gradient, partial grid, two mines, flag, two digits).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SVG_ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#f0f0f0;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#c0c0c0;stop-opacity:1" />
    </linearGradient>
  </defs>

  <rect width="256" height="256" fill="url(#bg)" stroke="#808080" stroke-width="4"/>

  <g stroke="#999" stroke-width="1" fill="none">
    <line x1="64" y1="64" x2="64" y2="192"/>
    <line x1="128" y1="64" x2="128" y2="192"/>
    <line x1="192" y1="64" x2="192" y2="192"/>
    <line x1="64" y1="64" x2="192" y2="64"/>
    <line x1="64" y1="128" x2="192" y2="128"/>
    <line x1="64" y1="192" x2="192" y2="192"/>
  </g>

  <circle cx="96" cy="96" r="12" fill="#333"/>
  <circle cx="160" cy="160" r="12" fill="#333"/>

  <rect x="148" y="80" width="2" height="24" fill="#654321"/>
  <polygon points="150,80 150,88 162,84" fill="#ff0000"/>

  <text x="96" y="180" font-family="Arial, sans-serif" font-size="24" font-weight="bold" fill="#0000ff" text-anchor="middle">1</text>
  <text x="160" y="116" font-family="Arial, sans-serif" font-size="24" font-weight="bold" fill="#008000" text-anchor="middle">2</text>

  <text x="128" y="40" font-family="Arial, sans-serif" font-size="20" font-weight="bold" fill="#333" text-anchor="middle">Minesweeper</text>
</svg>
"##;

pub fn write_svg(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join("icon.svg");
    fs::write(&path, SVG_ICON)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_document_is_well_formed_enough() {
        assert!(SVG_ICON.starts_with("<svg"));
        assert!(SVG_ICON.trim_end().ends_with("</svg>"));
        // Same motif as the raster design: mines, flag cloth, digits
        assert_eq!(SVG_ICON.matches("<circle").count(), 2);
        assert!(SVG_ICON.contains("<polygon"));
        assert!(SVG_ICON.contains(">1</text>"));
        assert!(SVG_ICON.contains(">2</text>"));
    }
}
