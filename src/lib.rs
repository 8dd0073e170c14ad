//! Chromagrid - CMYK color swatch grids
//!
//! Duplicates a selected object into a grid of labeled color swatches and
//! renders the result to SVG/PNG. This library exposes modules for
//! integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
