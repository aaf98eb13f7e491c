//! "Share Trip": PDF preview with placeholder text lines, and share options.

use super::{Painter, content_band};
use crate::icons::draw_icon;
use crate::text::Style;
use storeshot_core::color::{
    BLACK, BLUE, CAT_GREEN, CAT_PURPLE, DARK_GRAY, DARKER_GRAY, LIGHT_GRAY, MID_GRAY, WHITE,
};
use storeshot_core::layout::frac;
use storeshot_core::{APP_NAME, Area, IconKind, Rgb, ScreenKind};

/// Placeholder lines in the preview: color and width as a fraction of the
/// preview's inner width. Every fourth line starts a paragraph and is drawn
/// slightly taller and darker.
const PREVIEW_LINES: [(Rgb, f32); 11] = [
    (DARKER_GRAY, 1.0),
    (MID_GRAY, 0.85),
    (MID_GRAY, 0.70),
    (LIGHT_GRAY, 0.60),
    (DARKER_GRAY, 0.95),
    (MID_GRAY, 0.80),
    (MID_GRAY, 0.55),
    (LIGHT_GRAY, 0.45),
    (DARKER_GRAY, 0.90),
    (MID_GRAY, 0.75),
    (MID_GRAY, 0.50),
];

const OPTIONS: [(&str, &str, Rgb); 3] = [
    ("Share as PDF", "Generate a downloadable PDF", BLUE),
    ("Share Link", "Create a shareable web link", CAT_PURPLE),
    ("AirDrop", "Send to nearby Apple devices", CAT_GREEN),
];

pub(super) fn draw(p: &mut Painter<'_>, area: Area, content_y: f32) {
    let inner = content_band(area);
    let pdf_y = content_y + p.px(20.0);
    let pdf_h = frac(area.height, 0.52);
    let preview = Area::new(inner.x, pdf_y, inner.width, pdf_h);
    pdf_preview(p, preview);
    share_button(p, preview);

    let first_y = preview.bottom() + p.px(25.0);
    let option_h = frac(area.height, 0.08);
    let gap = p.px(10.0);
    let limit = area.bottom() - p.px(10.0);
    for (i, &(label, detail, color)) in OPTIONS.iter().enumerate() {
        let y = first_y + i as f32 * (option_h + gap);
        if !p.fits_within(ScreenKind::ShareTrip, "share-option", y + option_h, limit) {
            break;
        }
        let row = Area::new(inner.x, y, inner.width, option_h);
        share_option(p, row, label, detail, color);
    }
}

fn pdf_preview(p: &mut Painter<'_>, card: Area) {
    p.canvas.rounded_rect(
        card.x,
        card.y,
        card.right(),
        card.bottom(),
        p.px(18.0),
        Some(WHITE),
        Some((LIGHT_GRAY, 3.0)),
    );
    let margin = p.px(25.0);
    let page = card.inset(margin);

    p.text(page.x, page.y, APP_NAME, 36.0, Style::Bold, BLUE);
    let tagline_y = page.y + p.px(44.0);
    p.text(page.x, tagline_y, "Trip Itinerary", 20.0, Style::Regular, MID_GRAY);

    let divider_y = page.y + p.px(80.0);
    p.canvas
        .line((page.x, divider_y), (page.right(), divider_y), LIGHT_GRAY, 2.0);

    let title_y = divider_y + p.px(20.0);
    p.text(page.x, title_y, "Paris, France", 30.0, Style::Bold, BLACK);
    let dates = "June 15 - June 22, 2025";
    p.text(page.x, title_y + p.px(38.0), dates, 20.0, Style::Regular, DARK_GRAY);

    let first_y = title_y + p.px(80.0);
    let line_h = p.px(12.0);
    let step = line_h + p.px(18.0);
    for (i, &(color, ratio)) in PREVIEW_LINES.iter().enumerate() {
        let y = first_y + i as f32 * step;
        if !p.fits_within(ScreenKind::ShareTrip, "pdf-line", y + line_h, page.bottom()) {
            break;
        }
        let w = frac(page.width, ratio);
        let (h, color) = if i % 4 == 0 {
            (line_h + 2.0, color.lerp(WHITE, 0.3))
        } else {
            (line_h, color.lerp(WHITE, 0.5))
        };
        p.canvas
            .fill_rounded(page.x, y, page.x + w, y + h, 3.0, color);
    }
}

fn share_button(p: &mut Painter<'_>, card: Area) {
    let size = p.px(80.0);
    let cx = card.right() - p.px(50.0);
    let cy = card.bottom() - p.px(50.0);
    p.canvas.circle(cx, cy, (size / 2.0).floor(), BLUE);
    let icon = p.px(50.0);
    let offset = p.px(25.0);
    draw_icon(p.canvas, cx - offset, cy - offset, icon as u32, IconKind::Share, WHITE);
}

fn share_option(p: &mut Painter<'_>, row: Area, label: &str, detail: &str, color: Rgb) {
    log::trace!("share option {label:?} at y={}", row.y);
    p.card(row.x, row.y, row.right(), row.bottom(), p.px(14.0));
    let dot_x = row.x + p.px(30.0);
    let dot_y = row.y + (row.height / 2.0).floor();
    let dot_r = p.px(8.0);
    p.canvas.circle(dot_x, dot_y, dot_r, color);

    let x = row.x + p.px(50.0);
    p.text(x, row.y + frac(row.height, 0.12), label, 24.0, Style::Bold, BLACK);
    p.text(x, row.y + frac(row.height, 0.50), detail, 20.0, Style::Regular, MID_GRAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::text::FontBook;
    use pretty_assertions::assert_eq;
    use storeshot_core::{Diagnostics, PhoneFrame, Scale};

    fn render(height: u32) -> (Canvas, Diagnostics) {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(1290, height, WHITE).unwrap();
        let mut diagnostics = Diagnostics::new();
        let scale = Scale::for_width(1290);
        let area = PhoneFrame::for_canvas(1290, height).screen(scale);
        let mut p = Painter::new(&mut canvas, &fonts, &mut diagnostics, scale);
        let content_y = area.y + 195.0;
        draw(&mut p, area, content_y);
        (canvas, diagnostics)
    }

    #[test]
    fn full_preview_and_all_options() {
        let (canvas, diagnostics) = render(2796);
        assert!(diagnostics.is_empty());
        // Share button centered at (1086 - 50, 1897 - 50).
        assert_eq!(canvas.pixel(1036, 1820), Some(BLUE));
        // Third option's dot: rows start at 1922 and step 146 px.
        assert_eq!(canvas.pixel(234, 1922 + 292 + 68), Some(CAT_GREEN));
    }

    #[test]
    fn overflowing_lines_and_options_stop_early() {
        let (_, diagnostics) = render(1400);
        let elements: Vec<&str> = diagnostics.iter().map(|d| d.element).collect();
        assert_eq!(elements, vec!["pdf-line", "share-option"]);
    }
}
