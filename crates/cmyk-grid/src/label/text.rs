use crate::color::Cmyk;

/// Format the value label printed on a cell, e.g. `C:0 M:100 Y:100 K:0`.
///
/// Each channel is rounded to the nearest whole percentage on its own.
pub fn format_label(color: Cmyk) -> String {
    let [c, m, y, k] = color.rounded();
    format!("C:{c} M:{m} Y:{y} K:{k}")
}
