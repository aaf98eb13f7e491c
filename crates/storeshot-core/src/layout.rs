//! Layout geometry derived from canvas dimensions.
//!
//! Every value here is recomputed from the canvas size on each call.
//! Literal pixel offsets are authored against a 1290 px wide canvas and
//! multiplied by [`Scale`]; all results are truncated toward zero so two
//! runs always land on the same pixel grid.

/// Width, in pixels, that literal offsets are authored against.
pub const REFERENCE_WIDTH: f32 = 1290.0;

/// Marketing titles wider than this fraction of the canvas are shrunk.
pub const TITLE_MAX_WIDTH_RATIO: f32 = 0.88;

/// Shrink factor applied to an oversized title.
pub const TITLE_SHRINK: f32 = 0.85;

/// Number of page dots; one per catalog entry.
pub const PAGE_DOT_COUNT: usize = 5;

// ─── Scale ───────────────────────────────────────────────────────────────

/// Canvas width divided by [`REFERENCE_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub f32);

impl Scale {
    pub fn for_width(width: u32) -> Self {
        Scale(width as f32 / REFERENCE_WIDTH)
    }

    /// A literal reference-canvas offset scaled to this canvas.
    #[inline]
    pub fn px(self, v: f32) -> f32 {
        (v * self.0).trunc()
    }

    pub fn factor(self) -> f32 {
        self.0
    }
}

/// `trunc(length * ratio)`: a proportional offset on the pixel grid.
#[inline]
pub fn frac(length: f32, ratio: f32) -> f32 {
    (length * ratio).trunc()
}

// ─── Area ────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Area {
        Area {
            x: self.x + pad,
            y: self.y + pad,
            width: self.width - 2.0 * pad,
            height: self.height - 2.0 * pad,
        }
    }

    /// Shrink horizontally only.
    pub fn inset_x(&self, pad: f32) -> Area {
        Area {
            x: self.x + pad,
            width: self.width - 2.0 * pad,
            ..*self
        }
    }
}

// ─── Phone frame ─────────────────────────────────────────────────────────

/// Placement of the simulated phone on the marketing canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneFrame {
    pub body: Area,
    pub radius: f32,
}

impl PhoneFrame {
    /// 10 % side margins, 62 % of the height, starting at 28 % from the top.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        let margin_x = frac(w, 0.10);
        PhoneFrame {
            body: Area::new(margin_x, frac(h, 0.28), w - 2.0 * margin_x, frac(h, 0.62)),
            radius: frac(w, 0.06),
        }
    }

    /// Region the screen content is drawn into, inset from the body.
    pub fn screen(&self, scale: Scale) -> Area {
        self.body.inset(scale.px(15.0))
    }
}

// ─── Marketing copy ──────────────────────────────────────────────────────

/// Font size for the marketing title.
///
/// `measured_width` is the title's rendered width at `base_size`. Titles
/// wider than [`TITLE_MAX_WIDTH_RATIO`] of the canvas drop to
/// `trunc(base_size * TITLE_SHRINK)`.
pub fn title_font_size(base_size: f32, measured_width: f32, canvas_width: u32) -> f32 {
    if measured_width > canvas_width as f32 * TITLE_MAX_WIDTH_RATIO {
        (base_size * TITLE_SHRINK).trunc()
    } else {
        base_size
    }
}

// ─── Page dots ───────────────────────────────────────────────────────────

/// Centers and radius of the page indicator dots.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDots {
    pub centers: [(f32, f32); PAGE_DOT_COUNT],
    pub radius: f32,
}

impl PageDots {
    /// Dots are centered horizontally at 95.5 % of the canvas height.
    pub fn for_canvas(width: u32, height: u32, scale: Scale) -> Self {
        let radius = scale.px(6.0);
        let gap = scale.px(22.0);
        let y = frac(height as f32, 0.955);
        let n = PAGE_DOT_COUNT as f32;
        let total = n * 2.0 * radius + (n - 1.0) * gap;
        let start = ((width as f32 - total) / 2.0).floor();

        let mut centers = [(0.0, 0.0); PAGE_DOT_COUNT];
        for (i, c) in centers.iter_mut().enumerate() {
            *c = (start + i as f32 * (2.0 * radius + gap) + radius, y);
        }
        PageDots { centers, radius }
    }
}
