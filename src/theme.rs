use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::canvas::GRID_CELLS;

/// RGBA color as stored in the theme file
pub type Color = [u8; 4];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub layout: Layout,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Palette {
    #[serde(default = "default_background")]
    pub background: Color,
    /// RGB of the gradient band rows; opacity is computed per row
    #[serde(default = "default_band")]
    pub band: [u8; 3],
    #[serde(default = "default_border")]
    pub border: Color,
    #[serde(default = "default_grid")]
    pub grid: Color,
    #[serde(default = "default_mine")]
    pub mine: Color,
    #[serde(default = "default_flag_pole")]
    pub flag_pole: Color,
    #[serde(default = "default_flag_cloth")]
    pub flag_cloth: Color,
    /// Digit colors indexed by value: entry 0 colors the digit 1
    #[serde(default = "default_digit_colors")]
    pub digit_colors: Vec<Color>,
    #[serde(default = "default_digit_fallback")]
    pub digit_fallback: Color,
}

fn default_background() -> Color {
    [240, 240, 240, 255]
}

fn default_band() -> [u8; 3] {
    [200, 200, 200]
}

fn default_border() -> Color {
    [128, 128, 128, 255]
}

fn default_grid() -> Color {
    [150, 150, 150, 255]
}

fn default_mine() -> Color {
    [64, 64, 64, 255]
}

fn default_flag_pole() -> Color {
    [101, 67, 33, 255]
}

fn default_flag_cloth() -> Color {
    [255, 0, 0, 255]
}

fn default_digit_colors() -> Vec<Color> {
    // Classic minesweeper palette for 1 through 8
    vec![
        [0, 0, 255, 255],
        [0, 128, 0, 255],
        [255, 0, 0, 255],
        [0, 0, 128, 255],
        [128, 0, 0, 255],
        [0, 128, 128, 255],
        [0, 0, 0, 255],
        [128, 128, 128, 255],
    ]
}

fn default_digit_fallback() -> Color {
    [0, 0, 0, 255]
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: default_background(),
            band: default_band(),
            border: default_border(),
            grid: default_grid(),
            mine: default_mine(),
            flag_pole: default_flag_pole(),
            flag_cloth: default_flag_cloth(),
            digit_colors: default_digit_colors(),
            digit_fallback: default_digit_fallback(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Layout {
    /// Grid cells holding a mine, as (column, row)
    #[serde(default = "default_mines")]
    pub mines: Vec<[u32; 2]>,
    /// Grid cell holding the flag
    #[serde(default = "default_flag")]
    pub flag: [u32; 2],
    /// Grid cells holding a digit
    #[serde(default = "default_digits")]
    pub digits: Vec<DigitCell>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DigitCell {
    pub col: u32,
    pub row: u32,
    pub digit: char,
}

fn default_mines() -> Vec<[u32; 2]> {
    vec![[2, 2], [5, 4], [3, 6]]
}

fn default_flag() -> [u32; 2] {
    [4, 3]
}

fn default_digits() -> Vec<DigitCell> {
    vec![
        DigitCell { col: 1, row: 1, digit: '1' },
        DigitCell { col: 6, row: 2, digit: '2' },
        DigitCell { col: 4, row: 5, digit: '3' },
    ]
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            mines: default_mines(),
            flag: default_flag(),
            digits: default_digits(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            palette: Palette::default(),
            layout: Layout::default(),
        }
    }
}

impl Theme {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let theme: Theme = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        theme.validate()?;

        Ok(theme)
    }

    /// Validate theme values against the fixed 8x8 grid
    pub fn validate(&self) -> Result<()> {
        if self.layout.mines.is_empty() {
            bail!("layout.mines cannot be empty");
        }
        for &[col, row] in &self.layout.mines {
            if col >= GRID_CELLS || row >= GRID_CELLS {
                bail!("mine cell ({}, {}) is outside the {}x{} grid", col, row, GRID_CELLS, GRID_CELLS);
            }
        }

        let [col, row] = self.layout.flag;
        if col >= GRID_CELLS || row >= GRID_CELLS {
            bail!("flag cell ({}, {}) is outside the {}x{} grid", col, row, GRID_CELLS, GRID_CELLS);
        }

        for cell in &self.layout.digits {
            if cell.col >= GRID_CELLS || cell.row >= GRID_CELLS {
                bail!(
                    "digit cell ({}, {}) is outside the {}x{} grid",
                    cell.col, cell.row, GRID_CELLS, GRID_CELLS
                );
            }
            if !cell.digit.is_ascii_digit() {
                bail!("digit label {:?} is not a digit", cell.digit);
            }
        }

        if self.palette.digit_colors.is_empty() {
            bail!("palette.digit_colors cannot be empty");
        }

        Ok(())
    }

    /// Lookup table mapping a digit to its color, with a fallback for
    /// unmapped values (0 and anything past the palette).
    pub fn digit_color(&self, digit: char) -> Color {
        let Some(value) = digit.to_digit(10) else {
            return self.palette.digit_fallback;
        };
        if value == 0 {
            return self.palette.digit_fallback;
        }
        self.palette
            .digit_colors
            .get((value - 1) as usize)
            .copied()
            .unwrap_or(self.palette.digit_fallback)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize theme")?;

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write theme file {}", path.display()))?;

        Ok(())
    }
}
