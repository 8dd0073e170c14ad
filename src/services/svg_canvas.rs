use super::canvas::Canvas;
use super::text_measure::{escape_xml, TextMeasure};
use crate::error::CanvasError;
use crate::models::{Shape, ShapeId, TextLabel};
use cmyk_grid::{Bounds, Cmyk, TextExtent};

/// Share of the font size between the top of a label and its baseline
const ASCENT_RATIO: f32 = 0.8;

#[derive(Debug, Clone)]
struct PlacedShape {
    bounds: Bounds,
    fill: Cmyk,
}

/// An in-memory document that serializes to SVG.
///
/// Host coordinates are y-up (a cell's `y` is its top edge and rows grow
/// downward by subtracting); SVG output flips the axis.
pub struct SvgCanvas<M> {
    selection: Option<Shape>,
    shapes: Vec<PlacedShape>,
    labels: Vec<TextLabel>,
    font_family: String,
    measure: M,
}

impl<M: TextMeasure> SvgCanvas<M> {
    pub fn new(selection: Option<Shape>, font_family: impl Into<String>, measure: M) -> Self {
        Self {
            selection,
            shapes: Vec::new(),
            labels: Vec::new(),
            font_family: font_family.into(),
            measure,
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Fill of a created shape
    pub fn fill_of(&self, shape: ShapeId) -> Option<Cmyk> {
        self.shapes.get(shape.0).map(|s| s.fill)
    }

    /// Extent of everything placed so far, including the selection
    fn content_bounds(&self) -> Option<Bounds> {
        let mut rects = self
            .selection
            .iter()
            .map(|s| s.bounds)
            .chain(self.shapes.iter().map(|s| s.bounds));

        let first = rects.next()?;
        let (mut left, mut top, mut right, mut bottom) =
            (first.x, first.y, first.right(), first.bottom());
        for b in rects {
            left = left.min(b.x);
            top = top.max(b.y);
            right = right.max(b.right());
            bottom = bottom.min(b.bottom());
        }
        Some(Bounds::new(left, top, right - left, top - bottom))
    }

    /// Serialize the document, padded by `margin` on every side.
    ///
    /// The original selection is drawn first so the grid covers it.
    pub fn to_svg(&self, margin: f32) -> String {
        let extent = self
            .content_bounds()
            .unwrap_or_else(|| Bounds::new(0.0, 0.0, 0.0, 0.0));
        let margin = margin.max(0.0);
        let width = extent.width + 2.0 * margin;
        let height = extent.height + 2.0 * margin;

        let left = extent.x - margin;
        let top = svg_y(extent.y) - margin;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{left} {top} {width} {height}">"#
        );
        svg.push('\n');
        svg.push_str(&format!(
            r##"<rect x="{left}" y="{top}" width="{width}" height="{height}" fill="#ffffff"/>"##
        ));
        svg.push('\n');

        if let Some(selection) = &self.selection {
            write_rect(&mut svg, selection.bounds, selection.fill.to_cmyk());
        }
        for shape in &self.shapes {
            write_rect(&mut svg, shape.bounds, shape.fill);
        }

        let family = escape_xml(&self.font_family);
        for label in &self.labels {
            let [c, m, y, k] = label.color.rounded();
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" font-family="{family}" font-size="{}" fill="{}" data-cmyk="{c} {m} {y} {k}">{}</text>"#,
                label.left,
                svg_y(label.top) + label.font_size * ASCENT_RATIO,
                label.font_size,
                label.color.to_hex(),
                escape_xml(&label.text),
            ));
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Flip a host y coordinate into SVG space without producing `-0`
fn svg_y(y: f32) -> f32 {
    0.0 - y
}

fn write_rect(svg: &mut String, bounds: Bounds, fill: Cmyk) {
    let [c, m, y, k] = fill.rounded();
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" data-cmyk="{c} {m} {y} {k}"/>"#,
        bounds.x,
        svg_y(bounds.y),
        bounds.width,
        bounds.height,
        fill.to_hex(),
    ));
    svg.push('\n');
}

impl<M: TextMeasure> Canvas for SvgCanvas<M> {
    fn selection(&self) -> Option<Shape> {
        self.selection.clone()
    }

    fn duplicate(&mut self, source: &Shape, bounds: Bounds) -> Result<ShapeId, CanvasError> {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(PlacedShape {
            bounds,
            fill: source.fill.to_cmyk(),
        });
        Ok(id)
    }

    fn set_fill(&mut self, shape: ShapeId, color: Cmyk) -> Result<(), CanvasError> {
        let placed = self
            .shapes
            .get_mut(shape.0)
            .ok_or(CanvasError::UnknownShape(shape))?;
        placed.fill = color;
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: f32) -> TextExtent {
        self.measure.measure(text, font_size)
    }

    fn add_label(&mut self, label: TextLabel) -> Result<(), CanvasError> {
        self.labels.push(label);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApproxMeasure;
    use cmyk_grid::SourceColor;

    fn canvas() -> SvgCanvas<ApproxMeasure> {
        let origin = Shape::new(
            Bounds::new(0.0, 0.0, 50.0, 30.0),
            SourceColor::Rgb {
                red: 255,
                green: 0,
                blue: 0,
            },
        );
        SvgCanvas::new(Some(origin), "sans-serif", ApproxMeasure::default())
    }

    #[test]
    fn test_duplicate_inherits_source_fill() {
        let mut canvas = canvas();
        let source = canvas.selection().unwrap();
        let id = canvas
            .duplicate(&source, Bounds::new(60.0, 0.0, 50.0, 30.0))
            .unwrap();

        assert_eq!(id, ShapeId(0));
        assert_eq!(canvas.fill_of(id), Some(Cmyk::new(0.0, 100.0, 100.0, 0.0)));
    }

    #[test]
    fn test_set_fill_unknown_shape() {
        let mut canvas = canvas();
        let err = canvas.set_fill(ShapeId(4), Cmyk::BLACK).unwrap_err();
        assert_eq!(err, CanvasError::UnknownShape(ShapeId(4)));
    }

    #[test]
    fn test_to_svg_flips_y_and_pads() {
        let mut canvas = canvas();
        let source = canvas.selection().unwrap();
        let id = canvas
            .duplicate(&source, Bounds::new(0.0, -40.0, 50.0, 30.0))
            .unwrap();
        canvas.set_fill(id, Cmyk::new(0.0, 0.0, 0.0, 100.0)).unwrap();
        canvas
            .add_label(TextLabel {
                text: "C:0 M:0 Y:0 K:100".to_string(),
                left: 5.0,
                top: -64.0,
                font_size: 5.0,
                color: Cmyk::WHITE,
            })
            .unwrap();

        let svg = canvas.to_svg(10.0);
        assert!(svg.contains(r#"viewBox="-10 -10 70 90""#));
        assert!(svg.contains(r##"<rect x="0" y="40" width="50" height="30" fill="#000000" data-cmyk="0 0 0 100"/>"##));
        assert!(svg.contains(r##"<rect x="0" y="0" width="50" height="30" fill="#ff0000""##));
        assert!(svg.contains(r##"fill="#ffffff" data-cmyk="0 0 0 0">C:0 M:0 Y:0 K:100</text>"##));
        assert!(svg.contains(r#"y="68""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_canvas_serializes() {
        let canvas = SvgCanvas::new(None, "serif", ApproxMeasure::default());
        let svg = canvas.to_svg(5.0);
        assert!(svg.contains(r#"width="10" height="10""#));
    }

    #[test]
    fn test_label_text_is_escaped() {
        let mut canvas = SvgCanvas::new(None, "A&B", ApproxMeasure::default());
        canvas
            .add_label(TextLabel {
                text: "<x>".to_string(),
                left: 0.0,
                top: 0.0,
                font_size: 10.0,
                color: Cmyk::BLACK,
            })
            .unwrap();

        let svg = canvas.to_svg(0.0);
        assert!(svg.contains(r#"font-family="A&amp;B""#));
        assert!(svg.contains("&lt;x&gt;"));
        assert!(!svg.contains("<x>"));
    }
}
