//! iOS-style status bar and navigation bar drawn at the top of each screen.

use crate::screens::Painter;
use crate::text::Style;
use storeshot_core::Area;
use storeshot_core::color::{BLACK, CAT_GREEN, DARK_GRAY, LIGHT_GRAY};
use storeshot_core::layout::frac;

/// Clock, signal bars, wifi arcs, and battery.
pub fn status_bar(p: &mut Painter<'_>, area: Area) {
    let (px, py, pw) = (area.x, area.y, area.width);
    let fs = p.px(28.0);
    let sb_y = py + frac(fs, 0.6);
    log::trace!("status bar at y={sb_y}");

    let clock = p.fonts.bold(fs);
    clock.draw(p.canvas, px + frac(pw, 0.07), sb_y, "9:41", DARK_GRAY);

    // Battery
    let bx = px + pw - frac(pw, 0.22);
    let bw = frac(pw, 0.065);
    let bh = frac(fs, 0.55);
    let by = sb_y + frac(fs, 0.15);
    let bottom = by + bh;
    p.canvas
        .rounded_rect(bx, by, bx + bw, bottom, 3.0, None, Some((DARK_GRAY, 2.0)));
    p.canvas
        .fill_rounded(bx + 2.0, by + 2.0, bx + frac(bw, 0.75), bottom - 2.0, 2.0, CAT_GREEN);
    let quarter = (bh / 4.0).floor();
    let three_quarters = (3.0 * bh / 4.0).floor();
    p.canvas.fill_rounded(
        bx + bw,
        by + quarter,
        bx + bw + 4.0,
        by + three_quarters,
        1.0,
        DARK_GRAY,
    );

    // Signal
    let signal_x = bx - frac(pw, 0.10);
    let bar_w = frac(pw, 0.012);
    for i in 0..4 {
        let bar_h = frac(bh, 0.4 + 0.2 * i as f32);
        let x = signal_x + i as f32 * (bar_w + 4.0);
        p.canvas
            .fill_rounded(x, bottom - bar_h, x + bar_w, bottom, 2.0, DARK_GRAY);
    }

    // Wifi
    let wifi_x = signal_x - frac(pw, 0.055);
    let arc_w = 2f32.max(frac(pw, 0.004));
    for i in 0..2 {
        let r = frac(bh, 0.25 * (i + 1) as f32);
        p.canvas.arc(
            wifi_x - r,
            bottom - 2.0 * r,
            wifi_x + r,
            bottom,
            200.0,
            340.0,
            DARK_GRAY,
            arc_w,
        );
    }
    p.canvas.circle(wifi_x, bottom - 2.0, 3.0, DARK_GRAY);
}

/// Centered bold title with a separator below it.
///
/// Returns the y coordinate where screen content begins.
pub fn nav_bar(p: &mut Painter<'_>, area: Area, title: &str) -> f32 {
    let bar_y = area.y + frac(area.height, 0.07);
    let font = p.font(42.0, Style::Bold);
    let bounds = font.measure(title);
    font.draw_centered(p.canvas, area.x, area.width, bar_y, title, BLACK);

    let sep_y = bar_y + frac(bounds.height(), 1.8);
    let inset = frac(area.width, 0.05);
    p.canvas.line(
        (area.x + inset, sep_y),
        (area.right() - inset, sep_y),
        LIGHT_GRAY,
        2.0,
    );
    log::trace!("nav bar {title:?}: separator at y={sep_y}");
    sep_y + 10.0
}
