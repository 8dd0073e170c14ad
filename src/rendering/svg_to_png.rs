use crate::error::RenderError;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Largest raster edge we are willing to allocate, in pixels
pub const MAX_DIMENSION: u32 = 16_384;

/// Rasterizes grid SVG documents to RGBA PNG previews.
///
/// CMYK fills are already reduced to their RGB preview in the SVG, so this
/// is a plain rasterize-and-encode path.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a new SVG renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new SVG renderer with no custom fonts (system fonts only)
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Shared font database, also used for label measurement
    pub fn fontdb(&self) -> Arc<fontdb::Database> {
        self.fontdb.clone()
    }

    /// Render SVG to an RGBA PNG, `scale` pixels per document unit.
    pub fn render_to_png(&self, svg_data: &[u8], scale: f32) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, scale)?;
        encode_png(&pixmap)
    }

    /// Parse and rasterize SVG to an RGBA pixmap on a white background
    fn rasterize_svg(&self, svg_data: &[u8], scale: f32) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let width = (svg_size.width() * scale).ceil() as u32;
        let height = (svg_size.height() * scale).ceil() as u32;

        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(
            &tree,
            Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        tracing::debug!(width, height, "Rasterized SVG");
        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a pixmap as 8-bit RGBA PNG.
///
/// tiny-skia stores premultiplied alpha; the background is opaque white so
/// every pixel is opaque and needs no demultiplication.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(pixmap.data())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
