//! Assertion helpers for tests.

use cmyk_grid::Cmyk;

/// Assert bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > 8 && bytes[..8] == [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert two CMYK colors match within `tolerance` on every channel
pub fn assert_cmyk_near(actual: Cmyk, expected: Cmyk, tolerance: f32) {
    let pairs = actual.to_array().into_iter().zip(expected.to_array());
    for (i, (a, e)) in pairs.enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "Channel {i} differs: {actual:?} vs {expected:?}"
        );
    }
}

/// Assert an SVG document is well-formed enough to start and end correctly
pub fn assert_svg_document(svg: &str) {
    assert!(
        svg.starts_with("<svg "),
        "Expected SVG root, got {:?}",
        &svg[..40.min(svg.len())]
    );
    assert!(svg.trim_end().ends_with("</svg>"), "Unterminated SVG");
}
