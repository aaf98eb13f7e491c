//! Assembles one marketing screenshot: background, copy, badge, phone
//! frame, screen content, and page dots.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::screens::{Painter, draw_screen};
use crate::text::{Font, FontBook, Style};
use storeshot_core::color::{BLACK, DARKER_GRAY, LIGHT_GRAY, WHITE};
use storeshot_core::layout::{frac, title_font_size};
use storeshot_core::{
    APP_NAME, Diagnostics, LayoutDiagnostic, PageDots, PhoneFrame, Resolution, Scale,
    ScreenshotSpec,
};

/// Shadow layers painted under the phone body, outermost first.
const SHADOW_LAYERS: u32 = 12;

/// A finished screenshot and what was dropped while laying it out.
pub struct RenderedScreenshot {
    pub canvas: Canvas,
    pub diagnostics: Vec<LayoutDiagnostic>,
}

/// Render catalog entry `index` at `resolution`.
///
/// # Errors
/// Fails only when the canvas cannot be allocated.
pub fn render_screenshot(
    index: usize,
    spec: &ScreenshotSpec,
    resolution: &Resolution,
    fonts: &FontBook<'_>,
) -> Result<RenderedScreenshot> {
    let (w, h) = (resolution.width, resolution.height);
    let scale = Scale::for_width(w);
    log::debug!(
        "composing screenshot {} ({:?}) at {w}x{h}, scale {:.4}",
        index + 1,
        spec.screen,
        scale.factor()
    );

    let mut canvas = Canvas::new(w, h, WHITE)?;
    canvas.fill_gradient(&spec.gradient);

    let title_y = marketing_copy(&mut canvas, fonts, spec, w, h, scale);
    app_badge(&mut canvas, fonts, spec, w, title_y, scale);

    let frame = PhoneFrame::for_canvas(w, h);
    phone_body(&mut canvas, spec, &frame, h, scale);

    let mut diagnostics = Diagnostics::new();
    {
        let mut painter = Painter::new(&mut canvas, fonts, &mut diagnostics, scale);
        draw_screen(spec.screen, &mut painter, frame.screen(scale));
    }

    page_dots(&mut canvas, spec, index, w, h, scale);

    Ok(RenderedScreenshot {
        canvas,
        diagnostics: diagnostics.into_vec(),
    })
}

/// Encode a finished screenshot as PNG bytes.
pub fn render_png(canvas: &Canvas) -> Result<Vec<u8>> {
    canvas.encode_png()
}

// ─── Steps ───────────────────────────────────────────────────────────────

/// Bold title font, shrunk when `title` would overrun the canvas width.
fn title_font<'f>(fonts: &'f FontBook<'_>, title: &str, w: u32, scale: Scale) -> Font<'f> {
    let base = scale.px(72.0);
    let measured = fonts.bold(base).measure(title).width();
    let size = title_font_size(base, measured, w);
    if size < base {
        log::debug!("title {title:?} is {measured}px wide; shrinking to {size}px");
    }
    fonts.bold(size)
}

/// Title and subtitle; returns the title's y for the badge above it.
fn marketing_copy(
    canvas: &mut Canvas,
    fonts: &FontBook<'_>,
    spec: &ScreenshotSpec,
    w: u32,
    h: u32,
    scale: Scale,
) -> f32 {
    let title_y = frac(h as f32, 0.06);
    let width = w as f32;
    let title = title_font(fonts, spec.title, w, scale);
    title.draw_centered(canvas, 0.0, width, title_y, spec.title, WHITE);
    let subtitle_y = title_y + scale.px(90.0);
    fonts
        .regular(scale.px(36.0))
        .draw_centered(canvas, 0.0, width, subtitle_y, spec.subtitle, WHITE);
    title_y
}

fn app_badge(
    canvas: &mut Canvas,
    fonts: &FontBook<'_>,
    spec: &ScreenshotSpec,
    w: u32,
    title_y: f32,
    scale: Scale,
) {
    let font = fonts.font(scale.px(24.0), Style::Rounded);
    let badge_w = font.measure(APP_NAME).width() + scale.px(40.0);
    let badge_h = scale.px(38.0);
    let x = ((w as f32 - badge_w) / 2.0).floor();
    let y = title_y - scale.px(52.0);
    let fill = spec.gradient.from.lerp(WHITE, 0.25);
    canvas.fill_rounded(x, y, x + badge_w, y + badge_h, (badge_h / 2.0).floor(), fill);
    font.draw(canvas, x + scale.px(20.0), y + scale.px(7.0), APP_NAME, WHITE);
}

fn phone_body(
    canvas: &mut Canvas,
    spec: &ScreenshotSpec,
    frame: &PhoneFrame,
    h: u32,
    scale: Scale,
) {
    let body = frame.body;
    let g = &spec.gradient;
    let behind = g.from.lerp(g.to, (body.y / h as f32) as f64);

    for s in (1..=SHADOW_LAYERS).rev() {
        let alpha = 60u32.saturating_sub(s * 5);
        let color = behind.lerp(BLACK, alpha as f64 / 255.0);
        let (half, s) = ((s / 2) as f32, s as f32);
        canvas.fill_rounded(
            body.x - half,
            body.y + s,
            body.right() + half,
            body.bottom() + 2.0 * s,
            frame.radius + s,
            color,
        );
    }
    canvas.fill_rounded(body.x, body.y, body.right(), body.bottom(), frame.radius, WHITE);

    // Dynamic island
    let notch_w = frac(body.width, 0.28);
    let notch_h = scale.px(22.0);
    let notch_x = body.x + ((body.width - notch_w) / 2.0).floor();
    let notch_y = body.y + scale.px(12.0);
    canvas.fill_rounded(
        notch_x,
        notch_y,
        notch_x + notch_w,
        notch_y + notch_h,
        (notch_h / 2.0).floor(),
        DARKER_GRAY,
    );

    // Home indicator
    let bar_w = frac(body.width, 0.35);
    let bar_h = scale.px(8.0);
    let bar_x = body.x + ((body.width - bar_w) / 2.0).floor();
    let bar_y = body.bottom() - scale.px(25.0);
    canvas.fill_rounded(
        bar_x,
        bar_y,
        bar_x + bar_w,
        bar_y + bar_h,
        (bar_h / 2.0).floor(),
        LIGHT_GRAY,
    );
}

fn page_dots(
    canvas: &mut Canvas,
    spec: &ScreenshotSpec,
    index: usize,
    w: u32,
    h: u32,
    scale: Scale,
) {
    let dots = PageDots::for_canvas(w, h, scale);
    let g = &spec.gradient;
    let idle = g.from.lerp(g.to, 0.7).lerp(WHITE, 0.4);
    for (i, &(x, y)) in dots.centers.iter().enumerate() {
        let color = if i == index { WHITE } else { idle };
        canvas.circle(x, y, dots.radius, color);
    }
}
