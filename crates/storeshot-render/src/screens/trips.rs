//! "My Trips": three trip cards and a floating add button.

use super::Painter;
use crate::text::Style;
use storeshot_core::color::{BLACK, BLUE, DARK_GRAY, MID_GRAY, TRIP_COLORS, WHITE};
use storeshot_core::layout::frac;
use storeshot_core::{Area, Rgb, ScreenKind};

struct Trip {
    destination: &'static str,
    dates: &'static str,
    details: &'static str,
    accent: Rgb,
}

const TRIPS: [Trip; 3] = [
    Trip {
        destination: "Paris, France",
        dates: "Jun 15 - Jun 22, 2025",
        details: "7 days · 12 activities",
        accent: TRIP_COLORS[0],
    },
    Trip {
        destination: "Tokyo, Japan",
        dates: "Aug 3 - Aug 14, 2025",
        details: "11 days · 18 activities",
        accent: TRIP_COLORS[1],
    },
    Trip {
        destination: "Barcelona, Spain",
        dates: "Oct 1 - Oct 8, 2025",
        details: "7 days · 9 activities",
        accent: TRIP_COLORS[2],
    },
];

pub(super) fn draw(p: &mut Painter<'_>, area: Area, content_y: f32) {
    let margin = frac(area.width, 0.06);
    let card_x = area.x + margin;
    let card_w = area.width - 2.0 * margin;
    let card_h = frac(area.height, 0.20);
    let gap = frac(area.height, 0.025);
    let first_y = content_y + frac(area.height, 0.025);

    for (i, trip) in TRIPS.iter().enumerate() {
        let y = first_y + i as f32 * (card_h + gap);
        trip_card(p, trip, card_x, y, card_w, card_h);
    }

    let r = p.px(35.0);
    let fab_x = area.right() - margin - r;
    let fab_y = first_y + 3.0 * (card_h + gap) + p.px(20.0);
    let limit = area.bottom() - p.px(20.0);
    if !p.fits(ScreenKind::TripList, "fab", fab_y + r, limit) {
        return;
    }
    p.canvas.circle(fab_x, fab_y, r, BLUE);
    let plus = p.font(44.0, Style::Bold);
    let b = plus.measure("+");
    let x = fab_x - (b.width() / 2.0).floor();
    let y = fab_y - (b.height() / 2.0).floor() - p.px(4.0);
    plus.draw(p.canvas, x, y, "+", WHITE);
}

fn trip_card(p: &mut Painter<'_>, trip: &Trip, x: f32, y: f32, w: f32, h: f32) {
    log::trace!("trip card {:?} at y={y}", trip.destination);
    let radius = p.px(20.0);
    p.card(x, y, x + w, y + h, radius);

    // Left stripe: rounded on the outside, square where it meets the card.
    let stripe = p.px(8.0);
    let stripe_right = x + stripe + p.px(20.0);
    p.canvas.fill_rounded(x, y, stripe_right, y + h, radius, trip.accent);
    p.canvas.rect(x + p.px(20.0), y, stripe_right, y + h, trip.accent);

    // Photo placeholder
    let img_margin = p.px(20.0);
    let img = h - 2.0 * img_margin;
    let img_x = x + stripe + img_margin + p.px(8.0);
    let img_y = y + img_margin;
    let faded = trip.accent.lerp(WHITE, 0.3);
    p.canvas.gradient_rect(img_x, img_y, img, |t| trip.accent.lerp(faded, t * 0.5));
    p.canvas.rounded_rect(
        img_x,
        img_y,
        img_x + img,
        img_y + img,
        p.px(12.0),
        None,
        Some((trip.accent, 2.0)),
    );

    let initial = &trip.destination[..1];
    let font = p.font(48.0, Style::Bold);
    let b = font.measure(initial);
    let ix = img_x + ((img - b.width()) / 2.0).floor();
    let iy = img_y + ((img - b.height()) / 2.0).floor();
    font.draw(p.canvas, ix, iy, initial, WHITE);

    let text_x = img_x + img + p.px(20.0);
    p.text(text_x, y + frac(h, 0.22), trip.destination, 36.0, Style::Bold, BLACK);
    p.text(text_x, y + frac(h, 0.50), trip.dates, 24.0, Style::Regular, DARK_GRAY);
    p.text(text_x, y + frac(h, 0.72), trip.details, 20.0, Style::Regular, MID_GRAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::text::FontBook;
    use pretty_assertions::assert_eq;
    use storeshot_core::color::{CAT_BLUE, CAT_RED, OFF_WHITE};
    use storeshot_core::{Diagnostics, PhoneFrame, Scale};

    #[test]
    fn cards_use_trip_accents() {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(1290, 2796, WHITE).unwrap();
        let mut diagnostics = Diagnostics::new();
        let scale = Scale::for_width(1290);
        let area = PhoneFrame::for_canvas(1290, 2796).screen(scale);
        let mut p = Painter::new(&mut canvas, &fonts, &mut diagnostics, scale);
        draw(&mut p, area, 992.0);

        // Card x = 144 + 60; cards start at 992 + 42 and repeat every 382 px.
        assert_eq!(canvas.pixel(214, 1200), Some(CAT_BLUE));
        assert_eq!(canvas.pixel(214, 1582), Some(CAT_RED));
        // Right edge of the first card's body.
        assert_eq!(canvas.pixel(1070, 1100), Some(OFF_WHITE));
        assert!(diagnostics.is_empty());
        // Floating button center: x = 1146 - 60 - 35, y = 1034 + 1146 + 20.
        assert_eq!(canvas.pixel(1051, 2180), Some(BLUE));
    }
}
