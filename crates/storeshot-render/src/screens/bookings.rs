//! "Bookings": flight, hotel, and car rental cards.

use super::{Painter, content_band};
use crate::icons::draw_icon;
use crate::text::Style;
use storeshot_core::color::{
    BLACK, CAT_BLUE, CAT_GREEN, CAT_RED, DARK_GRAY, MID_GRAY, OFF_WHITE, WHITE,
};
use storeshot_core::layout::frac;
use storeshot_core::{Area, IconKind, Rgb};

const STATUS: &str = "Confirmed";

struct Booking {
    icon: IconKind,
    color: Rgb,
    title: &'static str,
    detail: &'static str,
    date: &'static str,
}

const BOOKINGS: [Booking; 3] = [
    Booking {
        icon: IconKind::Airplane,
        color: CAT_BLUE,
        title: "Delta DL123",
        detail: "JFK -> CDG",
        date: "Jun 15, 2025 - 7:30 PM",
    },
    Booking {
        icon: IconKind::Hotel,
        color: CAT_RED,
        title: "Hotel Le Marais",
        detail: "Confirmation: ABC123",
        date: "Jun 15 - Jun 22",
    },
    Booking {
        icon: IconKind::Car,
        color: CAT_GREEN,
        title: "Hertz Rental",
        detail: "Confirmation: XY789",
        date: "Jun 15 - Jun 22",
    },
];

pub(super) fn draw(p: &mut Painter<'_>, area: Area, content_y: f32) {
    let inner = content_band(area);
    let first_y = content_y + p.px(20.0);
    let card_h = frac(area.height, 0.22);
    let gap = p.px(20.0);
    for (i, booking) in BOOKINGS.iter().enumerate() {
        let y = first_y + i as f32 * (card_h + gap);
        booking_card(p, booking, inner, y, card_h);
    }
}

fn booking_card(p: &mut Painter<'_>, booking: &Booking, inner: Area, y: f32, h: f32) {
    log::trace!("booking card {:?} at y={y}", booking.title);
    let (x0, x1) = (inner.x, inner.right());
    let radius = p.px(20.0);
    p.card(x0, y, x1, y + h, radius);

    // Accent bar across the top, squared off at its lower edge.
    let bar_bottom = y + p.px(22.0);
    p.canvas.fill_rounded(x0, y, x1, bar_bottom, radius, booking.color);
    p.canvas.rect(x0, y + p.px(12.0), x1, bar_bottom, booking.color);
    p.canvas
        .rect(x0 + 1.0, bar_bottom, x1 - 1.0, y + p.px(24.0), OFF_WHITE);

    let icon_size = p.px(65.0);
    let (icon_x, icon_y) = (x0 + p.px(20.0), y + p.px(35.0));
    draw_icon(p.canvas, icon_x, icon_y, icon_size as u32, booking.icon, booking.color);

    let text_x = icon_x + icon_size + p.px(20.0);
    p.text(text_x, y + p.px(38.0), booking.title, 32.0, Style::Bold, BLACK);
    p.text(text_x, y + p.px(75.0), booking.detail, 24.0, Style::Regular, DARK_GRAY);
    p.text(text_x, y + p.px(108.0), booking.date, 20.0, Style::Regular, MID_GRAY);

    let badge_w = p.text_width(STATUS, 18.0, Style::Bold) + p.px(24.0);
    let badge_h = p.px(30.0);
    let badge_x = x1 - badge_w - p.px(18.0);
    let badge_y = y + frac(h, 0.7);
    p.canvas.fill_rounded(
        badge_x,
        badge_y,
        badge_x + badge_w,
        badge_y + badge_h,
        (badge_h / 2.0).floor(),
        CAT_GREEN.lerp(WHITE, 0.85),
    );
    let (tx, ty) = (badge_x + p.px(12.0), badge_y + p.px(5.0));
    p.text(tx, ty, STATUS, 18.0, Style::Bold, CAT_GREEN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::text::FontBook;
    use pretty_assertions::assert_eq;
    use storeshot_core::{Diagnostics, PhoneFrame, Scale};

    #[test]
    fn accent_bars_follow_booking_colors() {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(1290, 2796, WHITE).unwrap();
        let mut diagnostics = Diagnostics::new();
        let scale = Scale::for_width(1290);
        let area = PhoneFrame::for_canvas(1290, 2796).screen(scale);
        let mut p = Painter::new(&mut canvas, &fonts, &mut diagnostics, scale);
        draw(&mut p, area, 992.0);

        // Cards start at 1012 and repeat every 374 + 20 px.
        assert_eq!(canvas.pixel(645, 1028), Some(CAT_BLUE));
        assert_eq!(canvas.pixel(645, 1422), Some(CAT_RED));
        assert_eq!(canvas.pixel(645, 1816), Some(CAT_GREEN));
        // The strip under the bar restores the card color.
        assert_eq!(canvas.pixel(645, 1035), Some(OFF_WHITE));
    }
}
