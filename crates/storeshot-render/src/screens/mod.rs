//! Mock app screens drawn inside the phone frame.
//!
//! Every screen draws the status bar and navigation bar, then lays out its
//! literal content below the nav separator. Offsets are reference pixels
//! scaled through [`Painter::px`]; proportional offsets use
//! [`frac`](storeshot_core::layout::frac) on the screen area.

mod bookings;
mod itinerary;
mod share;
mod trips;
mod weather;

use crate::canvas::Canvas;
use crate::chrome;
use crate::text::{Font, FontBook, Style};
use storeshot_core::color::{LIGHT_GRAY, OFF_WHITE};
use storeshot_core::layout::frac;
use storeshot_core::{Area, Diagnostics, LayoutDiagnostic, Rgb, Scale, ScreenKind};

/// Side margin of card content, as a fraction of the screen width.
const CONTENT_MARGIN: f32 = 0.06;

// ─── Painter ─────────────────────────────────────────────────────────────

/// Everything a screen renderer draws with.
pub struct Painter<'a> {
    pub canvas: &'a mut Canvas,
    pub fonts: &'a FontBook<'a>,
    pub diagnostics: &'a mut Diagnostics,
    pub scale: Scale,
}

impl<'a> Painter<'a> {
    pub fn new(
        canvas: &'a mut Canvas,
        fonts: &'a FontBook<'a>,
        diagnostics: &'a mut Diagnostics,
        scale: Scale,
    ) -> Self {
        Self {
            canvas,
            fonts,
            diagnostics,
            scale,
        }
    }

    /// A reference-canvas offset scaled to this canvas.
    #[inline]
    pub fn px(&self, v: f32) -> f32 {
        self.scale.px(v)
    }

    /// Font at a reference size, scaled to this canvas.
    pub fn font(&self, size: f32, style: Style) -> Font<'a> {
        self.fonts.font(self.px(size), style)
    }

    /// Ink width of `text` at a reference size.
    pub fn text_width(&self, text: &str, size: f32, style: Style) -> f32 {
        self.font(size, style).measure(text).width()
    }

    pub fn text(&mut self, x: f32, y: f32, text: &str, size: f32, style: Style, color: Rgb) {
        let font = self.font(size, style);
        font.draw(self.canvas, x, y, text, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text_centered(
        &mut self,
        left: f32,
        width: f32,
        y: f32,
        text: &str,
        size: f32,
        style: Style,
        color: Rgb,
    ) {
        let font = self.font(size, style);
        font.draw_centered(self.canvas, left, width, y, text, color);
    }

    /// Off-white card with a light gray 2 px outline.
    pub fn card(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) {
        self.canvas
            .rounded_rect(x0, y0, x1, y1, radius, Some(OFF_WHITE), Some((LIGHT_GRAY, 2.0)));
    }

    /// Whether an element ending at `bottom` stays strictly above `limit`;
    /// records a diagnostic when it does not.
    pub fn fits(
        &mut self,
        screen: ScreenKind,
        element: &'static str,
        bottom: f32,
        limit: f32,
    ) -> bool {
        self.check(bottom < limit, screen, element, bottom, limit)
    }

    /// Like [`Painter::fits`], but an element may end exactly at `limit`.
    pub fn fits_within(
        &mut self,
        screen: ScreenKind,
        element: &'static str,
        bottom: f32,
        limit: f32,
    ) -> bool {
        self.check(bottom <= limit, screen, element, bottom, limit)
    }

    fn check(
        &mut self,
        ok: bool,
        screen: ScreenKind,
        element: &'static str,
        bottom: f32,
        limit: f32,
    ) -> bool {
        if !ok {
            self.diagnostics
                .push(LayoutDiagnostic::overflow(screen, element, bottom, limit));
        }
        ok
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────────

/// Draw `kind` into the phone's screen `area`.
pub fn draw_screen(kind: ScreenKind, p: &mut Painter<'_>, area: Area) {
    log::debug!("screen {kind:?} in {area:?}");
    chrome::status_bar(p, area);
    let content_y = chrome::nav_bar(p, area, kind.nav_title());
    match kind {
        ScreenKind::TripList => trips::draw(p, area, content_y),
        ScreenKind::Itinerary => itinerary::draw(p, area, content_y),
        ScreenKind::Bookings => bookings::draw(p, area, content_y),
        ScreenKind::WeatherTravel => weather::draw(p, area, content_y),
        ScreenKind::ShareTrip => share::draw(p, area, content_y),
    }
}

/// Horizontal content band shared by the card-based screens.
fn content_band(area: Area) -> Area {
    area.inset_x(frac(area.width, CONTENT_MARGIN))
}
