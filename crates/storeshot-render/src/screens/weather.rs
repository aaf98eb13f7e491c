//! "Weather & Travel": forecast cards, travel-time comparison, route info.

use super::{Painter, content_band};
use crate::icons::draw_icon;
use crate::text::Style;
use storeshot_core::color::{
    BLACK, BLUE, CAT_BLUE, CAT_GREEN, DARK_GRAY, LIGHT_GRAY, MID_GRAY, WHITE,
};
use storeshot_core::layout::frac;
use storeshot_core::{Area, IconKind, Rgb, ScreenKind};

struct Forecast {
    day: &'static str,
    icon: IconKind,
    temperature: &'static str,
    description: &'static str,
}

const FORECAST: [Forecast; 3] = [
    Forecast {
        day: "Mon",
        icon: IconKind::Sun,
        temperature: "72F",
        description: "Sunny",
    },
    Forecast {
        day: "Tue",
        icon: IconKind::CloudSun,
        temperature: "68F",
        description: "Partly Cloudy",
    },
    Forecast {
        day: "Wed",
        icon: IconKind::Sun,
        temperature: "75F",
        description: "Sunny",
    },
];

struct TravelTime {
    icon: IconKind,
    label: &'static str,
    duration: &'static str,
    color: Rgb,
}

const TRAVEL_TIMES: [TravelTime; 2] = [
    TravelTime {
        icon: IconKind::Car,
        label: "By Car",
        duration: "15 min",
        color: CAT_BLUE,
    },
    TravelTime {
        icon: IconKind::Walk,
        label: "Walking",
        duration: "32 min",
        color: CAT_GREEN,
    },
];

pub(super) fn draw(p: &mut Painter<'_>, area: Area, content_y: f32) {
    let inner = content_band(area);

    let section_y = content_y + p.px(20.0);
    p.text(inner.x, section_y, "Weather Forecast", 30.0, Style::Bold, BLACK);

    let cards_y = section_y + p.px(50.0);
    let spacing = p.px(12.0);
    let card_w = ((inner.width - 2.0 * spacing) / 3.0).trunc();
    let card_h = frac(area.height, 0.26);
    for (i, day) in FORECAST.iter().enumerate() {
        let x = inner.x + i as f32 * (card_w + spacing);
        forecast_card(p, day, x, cards_y, card_w, card_h);
    }

    let travel_y = cards_y + card_h + p.px(35.0);
    p.text(inner.x, travel_y, "Travel Times", 30.0, Style::Bold, BLACK);
    let card_y = travel_y + p.px(50.0);
    let card_h = frac(area.height, 0.14);
    travel_card(p, inner, card_y, card_h);

    let route_y = card_y + card_h + p.px(20.0);
    let route_h = frac(area.height, 0.08);
    let limit = area.bottom() - p.px(15.0);
    if p.fits(ScreenKind::WeatherTravel, "route-info", route_y + route_h, limit) {
        route_card(p, inner, route_y, route_h);
    }
}

fn forecast_card(p: &mut Painter<'_>, day: &Forecast, x: f32, y: f32, w: f32, h: f32) {
    log::trace!("forecast card {:?} at x={x}", day.day);
    p.card(x, y, x + w, y + h, p.px(18.0));
    p.text_centered(x, w, y + p.px(15.0), day.day, 24.0, Style::Bold, DARK_GRAY);

    let icon = p.px(70.0);
    let (icon_x, icon_y) = (x + ((w - icon) / 2.0).floor(), y + p.px(50.0));
    draw_icon(p.canvas, icon_x, icon_y, icon as u32, day.icon, DARK_GRAY);

    let (temp_y, desc_y) = (y + p.px(130.0), y + p.px(175.0));
    p.text_centered(x, w, temp_y, day.temperature, 38.0, Style::Bold, BLACK);
    p.text_centered(x, w, desc_y, day.description, 18.0, Style::Regular, MID_GRAY);
}

fn travel_card(p: &mut Painter<'_>, inner: Area, y: f32, h: f32) {
    p.card(inner.x, y, inner.right(), y + h, p.px(18.0));

    let half = (inner.width / 2.0).floor();
    let mid_y = y + (h / 2.0).floor();
    for (j, entry) in TRAVEL_TIMES.iter().enumerate() {
        let x = inner.x + j as f32 * half;
        if j == 1 {
            let inset = p.px(15.0);
            p.canvas.line((x, y + inset), (x, y + h - inset), LIGHT_GRAY, 2.0);
        }
        let icon = p.px(50.0);
        let (icon_x, icon_y) = (x + p.px(20.0), mid_y - (icon / 2.0).floor());
        draw_icon(p.canvas, icon_x, icon_y, icon as u32, entry.icon, entry.color);

        let text_x = x + p.px(80.0);
        p.text(text_x, mid_y - p.px(25.0), entry.duration, 34.0, Style::Bold, BLACK);
        p.text(text_x, mid_y + p.px(12.0), entry.label, 20.0, Style::Regular, MID_GRAY);
    }
}

fn route_card(p: &mut Painter<'_>, inner: Area, y: f32, h: f32) {
    p.canvas.rounded_rect(
        inner.x,
        y,
        inner.right(),
        y + h,
        p.px(14.0),
        Some(BLUE.lerp(WHITE, 0.9)),
        Some((BLUE.lerp(WHITE, 0.7), 2.0)),
    );
    let x = inner.x + p.px(20.0);
    let route = "Eiffel Tower -> Le Jules Verne";
    p.text(x, y + frac(h, 0.15), route, 24.0, Style::Bold, BLUE);
    let note = "1.2 km - Scenic route available";
    p.text(x, y + frac(h, 0.55), note, 22.0, Style::Regular, DARK_GRAY);
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
    fn route_card_drawn_when_it_fits() {
        let (canvas, diagnostics) = render(2796);
        assert!(diagnostics.is_empty());
        // Route card spans y 1847..1983 on the full-size canvas; sample its fill
        // right of the text.
        assert_eq!(canvas.pixel(1070, 1900), Some(BLUE.lerp(WHITE, 0.9)));
    }

    #[test]
    fn route_card_skipped_on_short_screens() {
        let (_, diagnostics) = render(1100);
        let elements: Vec<&str> = diagnostics.iter().map(|d| d.element).collect();
        assert_eq!(elements, vec!["route-info"]);
    }
}
