/// Application-wide constants for canvas geometry, export sizes and font probing

pub mod canvas {
    /// Edge length of the reference design; all geometry scales from this
    pub const REFERENCE_SIZE: u32 = 512;

    /// Cells per side of the minefield grid
    pub const GRID_CELLS: u32 = 8;

    /// Width of the border frame at reference size
    pub const BORDER_WIDTH: u32 = 8;

    /// Width of the interior grid lines at reference size
    pub const GRID_LINE_WIDTH: u32 = 2;

    /// Width of the flag pole at reference size
    pub const FLAG_POLE_WIDTH: u32 = 3;
}

pub mod export {
    /// Edge length of the ICO output
    pub const ICO_SIZE: u32 = 256;

    /// Edge length of the PNG handed to the manual ICNS conversion
    pub const ICNS_SOURCE_SIZE: u32 = 1024;

    /// Base sizes of a macOS iconset; each also gets a @2x variant capped at 1024
    pub const ICONSET_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

    /// Largest pixel size iconutil accepts (512x512@2x)
    pub const ICONSET_MAX_SIZE: u32 = 1024;
}

pub mod font {
    /// Candidate system fonts for digit glyphs, probed in order.
    /// The first entry is a TrueType collection; the loader opens face 0.
    pub const CANDIDATES: [&str; 5] = [
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}
