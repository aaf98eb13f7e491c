//! "Paris, France": day tabs and a four-stop timeline.

use super::{Painter, content_band};
use crate::text::Style;
use storeshot_core::color::{
    BLACK, BLUE, CAT_BLUE, CAT_GREEN, CAT_RED, DARK_GRAY, LIGHT_GRAY, MID_GRAY, WHITE,
};
use storeshot_core::layout::frac;
use storeshot_core::{Area, Rgb};

const DAYS: [&str; 3] = ["Day 1", "Day 2", "Day 3"];

struct Stop {
    time: &'static str,
    title: &'static str,
    subtitle: &'static str,
    color: Rgb,
    category: &'static str,
}

const STOPS: [Stop; 4] = [
    Stop {
        time: "9:00 AM",
        title: "Cafe de Flore",
        subtitle: "Breakfast & coffee",
        color: CAT_BLUE,
        category: "Restaurant",
    },
    Stop {
        time: "11:30 AM",
        title: "Eiffel Tower",
        subtitle: "Guided tour - 2hrs",
        color: CAT_RED,
        category: "Attraction",
    },
    Stop {
        time: "2:00 PM",
        title: "Le Jules Verne",
        subtitle: "Lunch reservation",
        color: CAT_BLUE,
        category: "Restaurant",
    },
    Stop {
        time: "4:30 PM",
        title: "Hotel Le Marais",
        subtitle: "Check-in & rest",
        color: CAT_GREEN,
        category: "Hotel",
    },
];

pub(super) fn draw(p: &mut Painter<'_>, area: Area, content_y: f32) {
    let inner = content_band(area);

    let tab_y = content_y + p.px(15.0);
    let tab_w = (inner.width / 3.5).trunc();
    let tab_h = p.px(50.0);
    for (i, label) in DAYS.iter().enumerate() {
        let x = inner.x + i as f32 * (tab_w + p.px(10.0));
        let (fill, ink) = if i == 0 {
            (BLUE, WHITE)
        } else {
            (LIGHT_GRAY, DARK_GRAY)
        };
        p.canvas
            .fill_rounded(x, tab_y, x + tab_w, tab_y + tab_h, p.px(12.0), fill);
        let (tx, ty) = (x + p.px(15.0), tab_y + p.px(12.0));
        p.text(tx, ty, label, 26.0, Style::Bold, ink);
    }

    let header_y = tab_y + tab_h + p.px(25.0);
    p.text(inner.x, header_y, "Day 1 — June 15", 34.0, Style::Bold, BLACK);
    let sub_y = header_y + p.px(42.0);
    p.text(inner.x, sub_y, "4 activities planned", 22.0, Style::Regular, MID_GRAY);

    let first_y = header_y + p.px(85.0);
    let timeline_x = inner.x + p.px(110.0);
    let card_h = frac(area.height, 0.14);
    let gap = p.px(15.0);
    for (i, stop) in STOPS.iter().enumerate() {
        let y = first_y + i as f32 * (card_h + gap);
        let last = i + 1 == STOPS.len();
        timeline_stop(p, stop, inner, timeline_x, y, card_h, gap, last);
    }
}

#[allow(clippy::too_many_arguments)]
fn timeline_stop(
    p: &mut Painter<'_>,
    stop: &Stop,
    inner: Area,
    timeline_x: f32,
    y: f32,
    card_h: f32,
    gap: f32,
    last: bool,
) {
    log::trace!("timeline stop {:?} at y={y}", stop.title);
    p.text(inner.x, y + p.px(15.0), stop.time, 24.0, Style::Bold, DARK_GRAY);

    let line_x = timeline_x - p.px(15.0);
    let dot_y = y + p.px(18.0);
    if !last {
        p.canvas
            .line((line_x, dot_y), (line_x, y + card_h + gap), LIGHT_GRAY, 3.0);
    }
    p.canvas.circle(line_x, dot_y, p.px(8.0), stop.color);

    let card_x = timeline_x + p.px(10.0);
    p.card(card_x, y, inner.right(), y + card_h, p.px(16.0));
    let text_x = card_x + p.px(18.0);
    p.text(text_x, y + p.px(14.0), stop.title, 30.0, Style::Bold, BLACK);
    p.text(text_x, y + p.px(50.0), stop.subtitle, 22.0, Style::Regular, DARK_GRAY);

    let pill_y = y + p.px(80.0);
    let pill_w = p.text_width(stop.category, 18.0, Style::Regular) + p.px(20.0);
    let pill_h = p.px(28.0);
    p.canvas.fill_rounded(
        text_x,
        pill_y,
        text_x + pill_w,
        pill_y + pill_h,
        (pill_h / 2.0).floor(),
        stop.color.lerp(WHITE, 0.85),
    );
    let (tx, ty) = (text_x + p.px(10.0), pill_y + p.px(4.0));
    p.text(tx, ty, stop.category, 18.0, Style::Regular, stop.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::text::FontBook;
    use pretty_assertions::assert_eq;
    use storeshot_core::{Diagnostics, PhoneFrame, Scale};

    #[test]
    fn first_tab_is_selected() {
        let fonts = FontBook::builtin();
        let mut canvas = Canvas::new(1290, 2796, WHITE).unwrap();
        let mut diagnostics = Diagnostics::new();
        let scale = Scale::for_width(1290);
        let area = PhoneFrame::for_canvas(1290, 2796).screen(scale);
        let mut p = Painter::new(&mut canvas, &fonts, &mut diagnostics, scale);
        draw(&mut p, area, 992.0);

        // Tabs start at x = 204, y = 1007; tab width = trunc(882 / 3.5) = 252.
        assert_eq!(canvas.pixel(420, 1052), Some(BLUE));
        assert_eq!(canvas.pixel(600, 1052), Some(LIGHT_GRAY));
    }
}
