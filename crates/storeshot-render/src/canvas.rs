//! Raster canvas: kurbo shapes → tiny-skia pixels.
//!
//! Geometry is built with kurbo, flattened into a tiny-skia path, and
//! filled or stroked with an opaque anti-aliased paint. The canvas is
//! always fully opaque, so its premultiplied buffer doubles as plain RGBA.

use crate::error::{RenderError, Result};
use kurbo::{Arc, BezPath, Circle, Ellipse, Line, PathEl, Point, Rect, RoundedRect, Shape, Vec2};
use storeshot_core::{Gradient, GradientDirection, Rgb};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Flattening tolerance for curves, in pixels.
const TOLERANCE: f64 = 0.1;

/// An opaque RGB raster owned by one screenshot render.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with `background`.
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidCanvas`] for zero or oversized dimensions.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            255,
        ));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // Pixmap::pixel only bounds-checks the flat index, so x past the
        // row end would read the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(c.red(), c.green(), c.blue()))
    }

    // ─── Gradient ────────────────────────────────────────────────────────

    /// Paint the whole canvas with `gradient`.
    ///
    /// Axis-aligned gradients are exact per row or column; diagonal ones
    /// are sampled once per [`GradientDirection::block_size`] block.
    pub fn fill_gradient(&mut self, gradient: &Gradient) {
        let (w, h) = (self.width(), self.height());
        match gradient.direction {
            GradientDirection::Vertical => {
                for y in 0..h {
                    let color = gradient.color_at(0, y, w, h);
                    self.fill_span(0, y, w, y + 1, color);
                }
            }
            GradientDirection::Horizontal => {
                let row: Vec<Rgb> = (0..w).map(|x| gradient.color_at(x, 0, w, h)).collect();
                let stride = w as usize * 4;
                let data = self.pixmap.data_mut();
                for line in data.chunks_exact_mut(stride) {
                    for (px, color) in line.chunks_exact_mut(4).zip(&row) {
                        px.copy_from_slice(&[color.r, color.g, color.b, 255]);
                    }
                }
            }
            GradientDirection::Diagonal | GradientDirection::DiagonalReverse => {
                let block = gradient.direction.block_size();
                for by in (0..h).step_by(block as usize) {
                    for bx in (0..w).step_by(block as usize) {
                        let color = gradient.color_at(bx, by, w, h);
                        self.fill_span(bx, by, bx + block, by + block, color);
                    }
                }
            }
        }
    }

    /// Write `color` into the pixel block `[x0, x1) × [y0, y1)`, clipped.
    fn fill_span(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb) {
        let (w, h) = (self.width(), self.height());
        let (x1, y1) = (x1.min(w), y1.min(h));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = w as usize * 4;
        let rgba = [color.r, color.g, color.b, 255];
        let data = self.pixmap.data_mut();
        for y in y0..y1 {
            let start = y as usize * stride + x0 as usize * 4;
            let end = y as usize * stride + x1 as usize * 4;
            for px in data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    // ─── Shapes ──────────────────────────────────────────────────────────

    /// Fill any kurbo shape.
    pub fn fill_shape<S: Shape>(&mut self, shape: &S, color: Rgb) {
        let Some(path) = to_skia_path(shape) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke any kurbo shape with butt caps.
    pub fn stroke_shape<S: Shape>(&mut self, shape: &S, color: Rgb, width: f32) {
        let Some(path) = to_skia_path(shape) else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }

    /// Filled axis-aligned rectangle between two corners.
    pub fn rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        self.fill_shape(&rect(x0, y0, x1, y1), color);
    }

    /// Rounded rectangle with an optional fill and an optional inset outline.
    ///
    /// The outline is drawn inside the rectangle, `width` pixels thick.
    pub fn rounded_rect(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
        fill: Option<Rgb>,
        outline: Option<(Rgb, f32)>,
    ) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let r = rect(x0, y0, x1, y1);
        let radius = (radius as f64).min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
        if let Some(color) = fill {
            self.fill_shape(&RoundedRect::from_rect(r, radius), color);
        }
        if let Some((color, width)) = outline {
            let half = width as f64 / 2.0;
            let inner = r.inset(-half);
            if inner.width() > 0.0 && inner.height() > 0.0 {
                let shape = RoundedRect::from_rect(inner, (radius - half).max(0.0));
                self.stroke_shape(&shape, color, width);
            }
        }
    }

    /// Shorthand for a filled rounded rectangle.
    pub fn fill_rounded(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, color: Rgb) {
        self.rounded_rect(x0, y0, x1, y1, radius, Some(color), None);
    }

    /// Filled circle.
    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        if r <= 0.0 {
            return;
        }
        self.fill_shape(&Circle::new(point(cx, cy), r as f64), color);
    }

    /// Filled ellipse inscribed in the box between two corners.
    pub fn ellipse(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let bounds = rect(x0, y0, x1, y1);
        self.fill_shape(&Ellipse::from_rect(bounds), color);
    }

    /// Filled closed polygon.
    pub fn polygon(&mut self, points: &[(f32, f32)], color: Rgb) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(point(first.0, first.1));
        for &(x, y) in rest {
            path.line_to(point(x, y));
        }
        path.close_path();
        self.fill_shape(&path, color);
    }

    /// Open polyline through `points`, stroked with mitered joins.
    pub fn polyline(&mut self, points: &[(f32, f32)], color: Rgb, width: f32) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(point(first.0, first.1));
        for &(x, y) in rest {
            path.line_to(point(x, y));
        }
        self.stroke_shape(&path, color, width);
    }

    /// Straight line segment of the given width.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, width: f32) {
        let segment = Line::new(point(from.0, from.1), point(to.0, to.1));
        self.stroke_shape(&segment, color, width);
    }

    /// Elliptical arc inscribed in a box, angles in degrees clockwise from +x.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        start_deg: f32,
        end_deg: f32,
        color: Rgb,
        width: f32,
    ) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let bounds = rect(x0, y0, x1, y1);
        let arc = Arc {
            center: bounds.center(),
            radii: Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
            start_angle: (start_deg as f64).to_radians(),
            sweep_angle: ((end_deg - start_deg) as f64).to_radians(),
            x_rotation: 0.0,
        };
        self.stroke_shape(&arc, color, width);
    }

    /// A square of one-pixel rows, each colored by `shade(row / size)`.
    ///
    /// Rows span `x0..=x0 + size`, matching an inclusive line per row.
    pub fn gradient_rect(&mut self, x0: f32, y0: f32, size: f32, shade: impl Fn(f64) -> Rgb) {
        let rows = size.max(0.0) as u32;
        for row in 0..rows {
            let color = shade(row as f64 / rows as f64);
            let y = y0 + row as f32;
            self.rect(x0, y, x0 + size + 1.0, y + 1.0, color);
        }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Encode as an 8-bit RGB PNG.
    ///
    /// # Errors
    /// Propagates the encoder error.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let rgb: Vec<u8> = self
            .pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&rgb)?;
            writer.finish()?;
        }
        Ok(out)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64)
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

/// Flatten a kurbo shape into a tiny-skia path. `None` for empty shapes.
fn to_skia_path<S: Shape>(shape: &S) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storeshot_core::color::{BLUE, DARK_GRAY, TEAL, WHITE};

    const DIRECTIONS: [GradientDirection; 4] = [
        GradientDirection::Vertical,
        GradientDirection::Horizontal,
        GradientDirection::Diagonal,
        GradientDirection::DiagonalReverse,
    ];

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(8, 4, BLUE).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (8, 4));
        assert_eq!(canvas.pixel(7, 3), Some(BLUE));
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
    }

    #[test]
    fn pixel_past_row_end_does_not_wrap() {
        let mut canvas = Canvas::new(8, 4, WHITE).unwrap();
        canvas.rect(0.0, 1.0, 8.0, 2.0, BLUE);
        assert_eq!(canvas.pixel(0, 1), Some(BLUE));
        // (8, 0) would alias (0, 1) in the flat buffer.
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(u32::MAX, 0), None);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, WHITE),
            Err(RenderError::InvalidCanvas { width: 0, height: 10 })
        ));
    }

    #[test]
    fn gradient_fill_keeps_dimensions() {
        for direction in DIRECTIONS {
            for (w, h) in [(1, 1), (3, 7), (37, 19), (64, 128)] {
                let mut canvas = Canvas::new(w, h, WHITE).unwrap();
                canvas.fill_gradient(&Gradient::new(direction, BLUE, TEAL));
                assert_eq!((canvas.width(), canvas.height()), (w, h), "{direction:?}");
            }
        }
    }

    #[test]
    fn vertical_gradient_rows() {
        let g = Gradient::new(GradientDirection::Vertical, BLUE, TEAL);
        let mut canvas = Canvas::new(10, 100, WHITE).unwrap();
        canvas.fill_gradient(&g);
        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
        assert_eq!(canvas.pixel(9, 0), Some(BLUE));
        assert_eq!(canvas.pixel(5, 99), Some(g.color_at(0, 99, 10, 100)));
    }

    #[test]
    fn horizontal_gradient_columns() {
        let g = Gradient::new(GradientDirection::Horizontal, TEAL, BLUE);
        let mut canvas = Canvas::new(50, 20, WHITE).unwrap();
        canvas.fill_gradient(&g);
        assert_eq!(canvas.pixel(0, 19), Some(TEAL));
        assert_eq!(canvas.pixel(30, 0), canvas.pixel(30, 19));
    }

    #[test]
    fn diagonal_gradient_is_blocky() {
        let g = Gradient::new(GradientDirection::Diagonal, BLUE, TEAL);
        let mut canvas = Canvas::new(40, 40, WHITE).unwrap();
        canvas.fill_gradient(&g);
        // Every pixel of a 4×4 block shares the block's top-left sample.
        assert_eq!(canvas.pixel(9, 10), Some(g.color_at(8, 8, 40, 40)));
        assert_eq!(canvas.pixel(11, 11), Some(g.color_at(8, 8, 40, 40)));
    }

    #[test]
    fn shapes_paint_their_interior() {
        let mut canvas = Canvas::new(100, 100, WHITE).unwrap();
        canvas.rect(10.0, 10.0, 20.0, 20.0, DARK_GRAY);
        canvas.circle(60.0, 60.0, 10.0, BLUE);
        canvas.fill_rounded(70.0, 5.0, 95.0, 30.0, 8.0, TEAL);
        assert_eq!(canvas.pixel(15, 15), Some(DARK_GRAY));
        assert_eq!(canvas.pixel(60, 60), Some(BLUE));
        assert_eq!(canvas.pixel(82, 17), Some(TEAL));
        assert_eq!(canvas.pixel(40, 40), Some(WHITE));
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut canvas = Canvas::new(100, 100, WHITE).unwrap();
        canvas.rounded_rect(10.0, 10.0, 90.0, 90.0, 10.0, None, Some((DARK_GRAY, 2.0)));
        assert_eq!(canvas.pixel(50, 50), Some(WHITE));
        assert_eq!(canvas.pixel(50, 10), Some(DARK_GRAY));
    }

    #[test]
    fn degenerate_shapes_draw_nothing() {
        let mut canvas = Canvas::new(20, 20, WHITE).unwrap();
        canvas.rect(10.0, 10.0, 5.0, 15.0, BLUE);
        canvas.circle(10.0, 10.0, 0.0, BLUE);
        canvas.ellipse(5.0, 5.0, 5.0, 9.0, BLUE);
        canvas.polygon(&[], BLUE);
        canvas.polyline(&[(3.0, 3.0)], BLUE, 2.0);
        canvas.gradient_rect(0.0, 0.0, -4.0, |_| BLUE);
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(canvas.pixel(x, y), Some(WHITE));
            }
        }
    }

    #[test]
    fn png_has_signature_and_size() {
        let canvas = Canvas::new(16, 9, TEAL).unwrap();
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(&bytes[..]);
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (16, 9));
        assert_eq!(info.color_type, png::ColorType::Rgb);
    }
}
