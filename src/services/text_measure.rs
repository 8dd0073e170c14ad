use cmyk_grid::TextExtent;
use resvg::usvg;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Measures rendered text for label font fitting
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> TextExtent;
}

/// Font-independent estimate: every glyph advances by a fixed fraction of
/// the font size.
///
/// Deterministic, so it is what tests and `--approx-text` runs use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMeasure {
    /// Glyph advance in em
    pub advance: f32,
    /// Line height in em
    pub line_height: f32,
}

impl Default for ApproxMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for ApproxMeasure {
    fn measure(&self, text: &str, font_size: f32) -> TextExtent {
        TextExtent::new(
            text.chars().count() as f32 * font_size * self.advance,
            font_size * self.line_height,
        )
    }
}

/// Measures text by laying it out with usvg against a font database.
///
/// Falls back to [`ApproxMeasure`] when no installed font matches the
/// family (usvg then drops the text node entirely).
pub struct FontMeasure {
    fontdb: Arc<fontdb::Database>,
    font_family: String,
    fallback: ApproxMeasure,
    cache: Mutex<HashMap<(String, u32), TextExtent>>,
}

impl FontMeasure {
    pub fn new(fontdb: Arc<fontdb::Database>, font_family: impl Into<String>) -> Self {
        Self {
            fontdb,
            font_family: font_family.into(),
            fallback: ApproxMeasure::default(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn layout(&self, text: &str, font_size: f32) -> Option<TextExtent> {
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4096" height="1024"><text x="0" y="{y}" font-family="{family}" font-size="{font_size}">{text}</text></svg>"#,
            y = font_size * 2.0,
            family = escape_xml(&self.font_family),
            text = escape_xml(text),
        );

        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = match usvg::Tree::from_str(&svg, &options) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::debug!(%e, "Text layout failed");
                return None;
            }
        };

        let root = tree.root();
        if root.children().is_empty() {
            return None;
        }

        let bbox = root.bounding_box();
        Some(TextExtent::new(bbox.width(), bbox.height()))
    }
}

impl TextMeasure for FontMeasure {
    fn measure(&self, text: &str, font_size: f32) -> TextExtent {
        let key = (text.to_string(), font_size.to_bits());
        if let Ok(cache) = self.cache.lock() {
            if let Some(extent) = cache.get(&key) {
                return *extent;
            }
        }

        let extent = self.layout(text, font_size).unwrap_or_else(|| {
            tracing::trace!(family = %self.font_family, "No font match, estimating text size");
            self.fallback.measure(text, font_size)
        });

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, extent);
        }
        extent
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
