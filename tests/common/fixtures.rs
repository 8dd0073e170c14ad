//! Test fixtures and constants.

use chromagrid::models::Shape;
use cmyk_grid::{Bounds, SourceColor};

/// Config with a 3x2 magenta sweep over an RGB origin
pub const SWEEP_CONFIG: &str = r##"
grid:
  columns: 3
  rows: 2
  spacing: 5
  variation: true
  channel: M
origin:
  x: 10
  y: 100
  width: 40
  height: 20
  fill: "#3366cc"
label:
  start_size: 12
  min_size: 4
  step: 0.5
output:
  margin: 4
  scale: 1
"##;

/// Config with no origin object
pub const NO_ORIGIN_CONFIG: &str = "grid:\n  columns: 2\n  rows: 2\n";

/// Origin geometry used across host tests
pub fn origin_bounds() -> Bounds {
    Bounds::new(10.0, 100.0, 40.0, 20.0)
}

/// The selected object for host tests
pub fn origin_shape(fill: SourceColor) -> Shape {
    Shape::new(origin_bounds(), fill)
}

/// Write `content` to a fresh config file, returning the directory guard
/// and the path.
pub fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}
