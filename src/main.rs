mod board;
mod constants;
mod draw;
mod export;
mod font;
mod svg;
mod theme;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use constants::canvas::REFERENCE_SIZE;
use constants::export::{ICNS_SOURCE_SIZE, ICO_SIZE};
use font::DigitFont;
use std::path::{Path, PathBuf};
use theme::Theme;

#[derive(Parser)]
#[command(name = "mine-icon")]
#[command(about = "Minesweeper-themed app icon generator", long_about = None)]
struct Cli {
    /// Directory the generated assets are written into (must already exist)
    #[arg(long, default_value = "assets", global = true)]
    out_dir: PathBuf,

    /// Theme file overriding the built-in palette and layout
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a macOS .iconset directory with every size iconutil expects
    Iconset {
        /// Base name of the iconset directory
        #[arg(default_value = "icon")]
        name: String,
    },
    /// Emit the legacy SVG rendition of the icon
    Svg,
    /// Write the default theme to a YAML file for hand editing
    InitTheme {
        #[arg(default_value = "icon-theme.yaml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    match cli.command {
        Some(Commands::Iconset { name }) => iconset_command(&cli.out_dir, &name, &theme),
        Some(Commands::Svg) => svg_command(&cli.out_dir),
        Some(Commands::InitTheme { path }) => init_theme_command(&path),
        None => generate_command(&cli.out_dir, &theme),
    }
}

/// Default run: render the master canvas once, then export the three fixed
/// assets and print the manual ICNS conversion steps.
fn generate_command(out_dir: &Path, theme: &Theme) -> Result<()> {
    export::ensure_out_dir(out_dir)?;

    println!("Generating minesweeper icon assets...");

    let font = DigitFont::load();
    println!("Digit font: {}", font.describe());

    let master = board::render(REFERENCE_SIZE, theme, &font);

    let png_path = out_dir.join("icon.png");
    export::save_png(&master, &png_path)?;
    println!("  ✓ {} ({1}x{1})", png_path.display(), REFERENCE_SIZE);

    let ico_path = out_dir.join("icon.ico");
    export::save_ico(&master, &ico_path, ICO_SIZE)?;
    println!("  ✓ {} ({1}x{1})", ico_path.display(), ICO_SIZE);

    let icns_png_path = out_dir.join("icon_1024.png");
    export::save_scaled_png(&master, &icns_png_path, ICNS_SOURCE_SIZE)?;
    println!("  ✓ {} ({1}x{1})", icns_png_path.display(), ICNS_SOURCE_SIZE);

    print_icns_instructions(out_dir);

    Ok(())
}

fn iconset_command(out_dir: &Path, name: &str, theme: &Theme) -> Result<()> {
    export::ensure_out_dir(out_dir)?;

    println!("Generating {}.iconset...", name);

    let font = DigitFont::load();
    println!("Digit font: {}", font.describe());

    let iconset_dir = export::write_iconset(out_dir, name, theme, &font)?;
    println!("  ✓ {}", iconset_dir.display());

    println!();
    println!("Convert it with:");
    println!("  iconutil -c icns {} -o {}", iconset_dir.display(), out_dir.join(format!("{}.icns", name)).display());

    Ok(())
}

fn svg_command(out_dir: &Path) -> Result<()> {
    export::ensure_out_dir(out_dir)?;

    let path = svg::write_svg(out_dir)?;
    println!("  ✓ {}", path.display());

    println!();
    println!("Rasterize it with ImageMagick if needed:");
    println!("  convert {} -resize 512x512 {}", path.display(), out_dir.join("icon.png").display());

    Ok(())
}

fn init_theme_command(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists, refusing to overwrite", path.display());
    }

    Theme::default()
        .save(path)
        .with_context(|| format!("Failed to write default theme to {}", path.display()))?;

    println!("  ✓ {}", path.display());
    println!("Pass it back with: mine-icon --theme {}", path.display());

    Ok(())
}

/// The ICNS bundle is assembled by the user with macOS tooling; print the
/// exact commands instead of shelling out to OS-specific utilities.
fn print_icns_instructions(out_dir: &Path) {
    let dir = out_dir.display();

    println!();
    println!("To build {}/icon.icns, run:", dir);
    println!("  mkdir icon.iconset");
    println!("  sips -z 1024 1024 {}/icon_1024.png --out icon.iconset/icon_512x512@2x.png", dir);
    println!("  sips -z 512 512 {}/icon.png --out icon.iconset/icon_512x512.png", dir);
    println!("  sips -z 512 512 {}/icon.png --out icon.iconset/icon_256x256@2x.png", dir);
    println!("  sips -z 256 256 {}/icon.png --out icon.iconset/icon_256x256.png", dir);
    println!("  sips -z 256 256 {}/icon.png --out icon.iconset/icon_128x128@2x.png", dir);
    println!("  sips -z 128 128 {}/icon.png --out icon.iconset/icon_128x128.png", dir);
    println!("  sips -z 64 64 {}/icon.png --out icon.iconset/icon_32x32@2x.png", dir);
    println!("  sips -z 32 32 {}/icon.png --out icon.iconset/icon_32x32.png", dir);
    println!("  sips -z 32 32 {}/icon.png --out icon.iconset/icon_16x16@2x.png", dir);
    println!("  sips -z 16 16 {}/icon.png --out icon.iconset/icon_16x16.png", dir);
    println!("  iconutil -c icns icon.iconset -o {}/icon.icns", dir);
}
