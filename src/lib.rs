// Library exports for testing
pub mod board;
pub mod constants;
pub mod draw;
pub mod export;
pub mod font;
pub mod svg;
pub mod theme;
