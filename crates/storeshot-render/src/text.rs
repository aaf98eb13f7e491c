//! Text layout and drawing.
//!
//! Text is turned into a kurbo `BezPath` in canvas coordinates and filled
//! like any other shape. Outline fonts go through ttf-parser; when a font
//! file is missing or unparsable the built-in bitmap font takes over and
//! each lit cell becomes a small square.
//!
//! Text origins are top-left with `y` on the ascender line, so the same
//! `(x, y)` places text identically regardless of the typeface.

use crate::builtin_font::{self, ADVANCE_CELLS, CELLS_PER_EM, GLYPH_COLS, GLYPH_ROWS};
use crate::canvas::Canvas;
use kurbo::{BezPath, Point, Rect, Shape};
use std::fmt;
use std::path::{Path, PathBuf};
use storeshot_core::Rgb;
use ttf_parser::{Face, OutlineBuilder, Tag};

/// Weight requested for bold text on variable fonts.
const BOLD_WEIGHT: f32 = 700.0;

// ─── Config ──────────────────────────────────────────────────────────────

/// Font files to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPaths {
    /// Regular and bold text.
    pub text: PathBuf,
    /// The app-name badge.
    pub rounded: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            text: PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
            rounded: PathBuf::from("/System/Library/Fonts/SFNSRounded.ttf"),
        }
    }
}

// ─── Typefaces ───────────────────────────────────────────────────────────

/// A loaded typeface: font file bytes, or the built-in bitmap font.
#[derive(Debug, Clone)]
pub enum Typeface {
    Outline { data: Vec<u8> },
    Builtin,
}

impl Typeface {
    /// Load the font at `path`, falling back to [`Typeface::Builtin`].
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!(
                    "font {} unavailable ({e}); using built-in font",
                    path.display()
                );
                return Typeface::Builtin;
            }
        };
        if let Err(e) = Face::parse(&data, 0) {
            log::warn!(
                "font {} is not a usable font ({e}); using built-in font",
                path.display()
            );
            return Typeface::Builtin;
        }
        log::debug!("loaded font {} ({} bytes)", path.display(), data.len());
        Typeface::Outline { data }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// Parse the face, applying `weight` on the `wght` axis if given.
    fn glyphs(&self, weight: Option<f32>) -> Glyphs<'_> {
        let Typeface::Outline { data } = self else {
            return Glyphs::Builtin;
        };
        // Verified at load time; a failure here leaves the bitmap font.
        let Ok(mut face) = Face::parse(data, 0) else {
            return Glyphs::Builtin;
        };
        if let Some(weight) = weight {
            if face.set_variation(Tag::from_bytes(b"wght"), weight).is_none() {
                log::debug!("font has no wght axis; bold text uses the default weight");
            }
        }
        Glyphs::Outline(face)
    }
}

/// Which face a piece of text is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Bold,
    /// Bold weight of the rounded face.
    Rounded,
}

/// Font files for one run, read once.
#[derive(Debug, Clone)]
pub struct FontData {
    text: Typeface,
    rounded: Typeface,
}

impl FontData {
    pub fn load(paths: &FontPaths) -> Self {
        Self {
            text: Typeface::load(&paths.text),
            rounded: Typeface::load(&paths.rounded),
        }
    }

    /// Parse every face once; the book borrows the file bytes.
    pub fn book(&self) -> FontBook<'_> {
        FontBook {
            regular: self.text.glyphs(None),
            bold: self.text.glyphs(Some(BOLD_WEIGHT)),
            rounded: self.rounded.glyphs(Some(BOLD_WEIGHT)),
        }
    }
}

/// A parsed face, or the built-in bitmap font.
enum Glyphs<'a> {
    Outline(Face<'a>),
    Builtin,
}

impl fmt::Debug for Glyphs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyphs::Outline(face) => write!(f, "Outline({} glyphs)", face.number_of_glyphs()),
            Glyphs::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Parsed faces for every [`Style`], shared by all drawing in a run.
#[derive(Debug)]
pub struct FontBook<'a> {
    regular: Glyphs<'a>,
    bold: Glyphs<'a>,
    rounded: Glyphs<'a>,
}

impl FontBook<'static> {
    /// A book using only the built-in bitmap font.
    pub fn builtin() -> Self {
        Self {
            regular: Glyphs::Builtin,
            bold: Glyphs::Builtin,
            rounded: Glyphs::Builtin,
        }
    }
}

impl FontBook<'_> {
    /// A font of `style` at `size` pixels per em.
    pub fn font(&self, size: f32, style: Style) -> Font<'_> {
        let glyphs = match style {
            Style::Regular => &self.regular,
            Style::Bold => &self.bold,
            Style::Rounded => &self.rounded,
        };
        Font {
            glyphs,
            size: size.max(1.0),
            bold: !matches!(style, Style::Regular),
        }
    }

    pub fn regular(&self, size: f32) -> Font<'_> {
        self.font(size, Style::Regular)
    }

    pub fn bold(&self, size: f32) -> Font<'_> {
        self.font(size, Style::Bold)
    }

    /// True when no outline face was loaded.
    pub fn is_builtin(&self) -> bool {
        [&self.regular, &self.bold, &self.rounded]
            .iter()
            .all(|g| matches!(g, Glyphs::Builtin))
    }
}

// ─── Fonts ───────────────────────────────────────────────────────────────

/// Ink bounds of laid-out text, relative to the text origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A typeface at a size and weight.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    glyphs: &'a Glyphs<'a>,
    size: f32,
    bold: bool,
}

impl Font<'_> {
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Ink bounding box of `text` drawn at the origin.
    pub fn measure(&self, text: &str) -> TextBounds {
        let path = self.outline(text, 0.0, 0.0);
        if path.elements().is_empty() {
            return TextBounds::default();
        }
        let bb = path.bounding_box();
        TextBounds {
            left: bb.x0 as f32,
            top: bb.y0 as f32,
            right: bb.x1 as f32,
            bottom: bb.y1 as f32,
        }
    }

    /// Draw `text` with its top-left origin at `(x, y)`.
    pub fn draw(&self, canvas: &mut Canvas, x: f32, y: f32, text: &str, color: Rgb) {
        log::trace!("text {text:?} at ({x}, {y}) size {}", self.size);
        let path = self.outline(text, x, y);
        canvas.fill_shape(&path, color);
    }

    /// Draw `text` horizontally centered in `[left, left + width)`.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas,
        left: f32,
        width: f32,
        y: f32,
        text: &str,
        color: Rgb,
    ) {
        let tw = self.measure(text).width();
        let x = left + ((width - tw) / 2.0).floor();
        self.draw(canvas, x, y, text, color);
    }

    /// Glyph outlines for `text` with origin `(x, y)`.
    fn outline(&self, text: &str, x: f32, y: f32) -> BezPath {
        match self.glyphs {
            Glyphs::Outline(face) => self.outline_with_face(face, text, x, y),
            Glyphs::Builtin => self.outline_builtin(text, x, y),
        }
    }

    /// Bold weight is already applied to `face`.
    fn outline_with_face(&self, face: &Face<'_>, text: &str, x: f32, y: f32) -> BezPath {
        let scale = self.size / face.units_per_em() as f32;
        let baseline = y + face.ascender() as f32 * scale;
        let space_advance = face
            .glyph_index(' ')
            .and_then(|id| face.glyph_hor_advance(id))
            .map_or(self.size * 0.25, |adv| adv as f32 * scale);

        let mut path = BezPath::new();
        let mut pen = x;
        for ch in text.chars() {
            let Some(id) = face.glyph_index(ch) else {
                pen += space_advance;
                continue;
            };
            let mut pen_builder = GlyphPen {
                path: &mut path,
                origin_x: pen,
                baseline,
                scale,
            };
            face.outline_glyph(id, &mut pen_builder);
            pen += face
                .glyph_hor_advance(id)
                .map_or(space_advance, |adv| adv as f32 * scale);
        }
        path
    }

    fn outline_builtin(&self, text: &str, x: f32, y: f32) -> BezPath {
        let cell = (self.size / CELLS_PER_EM) as f64;
        let embolden = if self.bold { cell * 0.5 } else { 0.0 };
        let mut path = BezPath::new();
        let mut pen = x as f64;
        for ch in text.chars() {
            if let Some(columns) = builtin_font::glyph(ch) {
                for col in 0..GLYPH_COLS {
                    for row in 0..GLYPH_ROWS {
                        if !builtin_font::is_lit(columns, col, row) {
                            continue;
                        }
                        let x0 = pen + col as f64 * cell;
                        let y0 = y as f64 + row as f64 * cell;
                        let lit = Rect::new(x0, y0, x0 + cell + embolden, y0 + cell);
                        path.extend(lit.path_elements(0.1));
                    }
                }
            }
            pen += ADVANCE_CELLS as f64 * cell;
        }
        path
    }
}

/// Receives font-unit outlines and appends them to a canvas-space path.
struct GlyphPen<'p> {
    path: &'p mut BezPath,
    origin_x: f32,
    baseline: f32,
    scale: f32,
}

impl GlyphPen<'_> {
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            (self.origin_x + x * self.scale) as f64,
            (self.baseline - y * self.scale) as f64,
        )
    }
}

impl OutlineBuilder for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.map(x1, y1), self.map(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.map(x1, y1), self.map(x2, y2), self.map(x, y));
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storeshot_core::color::{BLACK, WHITE};

    #[test]
    fn missing_font_file_falls_back_to_builtin() {
        let face = Typeface::load(Path::new("/definitely/not/a/font.ttf"));
        assert!(face.is_builtin());
    }

    #[test]
    fn garbage_font_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(Typeface::load(&path).is_builtin());
    }

    #[test]
    fn book_from_missing_files_is_builtin() {
        let data = FontData::load(&FontPaths {
            text: "/definitely/not/text.ttf".into(),
            rounded: "/definitely/not/rounded.ttf".into(),
        });
        let book = data.book();
        assert!(book.is_builtin());
        // The same book serves every measurement; results stay stable.
        let first = book.bold(72.0).measure("Travly");
        for _ in 0..3 {
            assert_eq!(book.bold(72.0).measure("Travly"), first);
        }
        assert_eq!(first, FontBook::builtin().bold(72.0).measure("Travly"));
    }

    #[test]
    fn builtin_measure_scales_with_size() {
        let book = FontBook::builtin();
        let small = book.regular(16.0).measure("Hi");
        let large = book.regular(32.0).measure("Hi");
        assert!(small.width() > 0.0);
        assert!((large.width() - 2.0 * small.width()).abs() < 0.01);
        assert!((large.height() - 2.0 * small.height()).abs() < 0.01);
    }

    #[test]
    fn builtin_glyph_geometry() {
        let book = FontBook::builtin();
        // "H" at 8 px: 1 px cells, 5 columns × 7 rows of ink from the origin.
        let b = book.regular(8.0).measure("H");
        assert_eq!(
            b,
            TextBounds {
                left: 0.0,
                top: 0.0,
                right: 5.0,
                bottom: 7.0
            }
        );
        // Bold widens the ink by half a cell.
        assert_eq!(book.bold(8.0).measure("H").width(), 5.5);
    }

    #[test]
    fn empty_and_blank_text_measure_zero() {
        let book = FontBook::builtin();
        assert_eq!(book.regular(20.0).measure(""), TextBounds::default());
        assert_eq!(book.regular(20.0).measure("   "), TextBounds::default());
    }

    #[test]
    fn unknown_characters_advance_without_ink() {
        let book = FontBook::builtin();
        let font = book.regular(8.0);
        // Non-ASCII glyph occupies a full advance (6 cells) before "H".
        assert_eq!(font.measure("éH").left, 6.0);
    }

    #[test]
    fn draw_puts_ink_on_canvas() {
        let book = FontBook::builtin();
        let mut canvas = Canvas::new(64, 32, WHITE).unwrap();
        book.bold(16.0).draw(&mut canvas, 4.0, 4.0, "T", BLACK);
        // Top bar of the T spans the first cell row (2 px tall at 16 px).
        assert_eq!(canvas.pixel(6, 5), Some(BLACK));
        assert_eq!(canvas.pixel(60, 30), Some(WHITE));
    }

    #[test]
    fn centered_text_is_symmetric() {
        let book = FontBook::builtin();
        let font = book.regular(8.0);
        let mut canvas = Canvas::new(40, 10, WHITE).unwrap();
        // "I" ink spans columns 1..4 (3 px); centered in 40 px → x = 18 + 1.
        font.draw_centered(&mut canvas, 0.0, 40.0, 1.0, "I", BLACK);
        assert_eq!(canvas.pixel(20, 2), Some(BLACK));
        assert_eq!(canvas.pixel(17, 2), Some(WHITE));
    }
}
