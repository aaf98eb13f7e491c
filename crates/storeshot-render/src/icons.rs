//! Small vector icons drawn into a square bounding box.
//!
//! Coordinates are derived from the box center and a characteristic radius;
//! integer divisions on `size` are kept so icons land on the same pixels at
//! every scale.

use crate::canvas::Canvas;
use smallvec::{SmallVec, smallvec};
use storeshot_core::IconKind;
use storeshot_core::Rgb;
use storeshot_core::color::{
    AIRPLANE_BACKDROP, CAR_BACKDROP, CLOUD_GRAY, CLOUD_LIGHT_GRAY, DARKER_GRAY, HOTEL_BACKDROP,
    SUN_YELLOW, WHITE,
};

type Polygon = SmallVec<[(f32, f32); 4]>;

/// Draw `kind` inside the `size × size` box at `(x, y)`, tinted with `accent`.
///
/// Weather icons use fixed colors and ignore `accent`.
pub fn draw_icon(canvas: &mut Canvas, x: f32, y: f32, size: u32, kind: IconKind, accent: Rgb) {
    log::trace!("icon {kind} at ({x}, {y}) size {size}");
    let half = (size / 2) as f32;
    let g = Glyph {
        cx: x + half,
        cy: y + half,
        size,
    };
    match kind {
        IconKind::Airplane => g.airplane(canvas, accent),
        IconKind::Hotel => g.hotel(canvas, accent),
        IconKind::Car => g.car(canvas, accent),
        IconKind::Sun => g.sun(canvas),
        IconKind::Cloud => g.cloud(canvas),
        IconKind::CloudSun => g.cloud_sun(canvas),
        IconKind::Walk => g.walk(canvas, accent),
        IconKind::Share => g.share(canvas, accent),
    }
}

struct Glyph {
    cx: f32,
    cy: f32,
    size: u32,
}

impl Glyph {
    /// Radius of the backdrop disc: half the box less a 4 px margin.
    fn radius(&self) -> f32 {
        (self.size / 2) as f32 - 4.0
    }

    fn quarter(&self) -> f32 {
        (self.size / 4) as f32
    }

    fn stroke(&self, min: u32, divisor: u32) -> f32 {
        min.max(self.size / divisor) as f32
    }

    fn backdrop(&self, canvas: &mut Canvas, color: Rgb) {
        canvas.circle(self.cx, self.cy, self.radius(), color);
    }

    fn airplane(&self, canvas: &mut Canvas, accent: Rgb) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius());
        self.backdrop(canvas, AIRPLANE_BACKDROP);

        let wings: Polygon = smallvec![
            (cx - r * 0.7, cy),
            (cx, cy - r * 0.5),
            (cx + r * 0.7, cy),
            (cx, cy + r * 0.2),
        ];
        canvas.polygon(&wings, accent);
        canvas.rect(cx - r * 0.12, cy - r * 0.7, cx + r * 0.12, cy + r * 0.6, accent);
        let tail: Polygon = smallvec![
            (cx - r * 0.35, cy + r * 0.4),
            (cx, cy + r * 0.15),
            (cx + r * 0.35, cy + r * 0.4),
        ];
        canvas.polygon(&tail, accent);
    }

    fn hotel(&self, canvas: &mut Canvas, accent: Rgb) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius());
        self.backdrop(canvas, HOTEL_BACKDROP);

        let (bw, bh) = (r * 0.8, r);
        let (bx, by) = (cx - bw / 2.0, cy - bh / 2.0);
        canvas.rect(bx, by, bx + bw, by + bh, accent);

        let window = bw * 0.2;
        let gap = bw * 0.1;
        for row in 0..2 {
            for col in 0..2 {
                let wx = bx + gap + col as f32 * (window + gap * 1.5);
                let wy = by + gap + row as f32 * (window + gap);
                canvas.rect(wx, wy, wx + window, wy + window, WHITE);
            }
        }

        let door = bw * 0.25;
        let dx = cx - door / 2.0;
        canvas.rect(dx, by + bh - bh * 0.35, dx + door, by + bh, WHITE);
    }

    fn car(&self, canvas: &mut Canvas, accent: Rgb) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius());
        self.backdrop(canvas, CAR_BACKDROP);

        let (bw, bh) = (r * 1.2, r * 0.4);
        let bx = cx - bw / 2.0;
        let by = cy - bh / 2.0 + r * 0.1;
        canvas.fill_rounded(bx, by, bx + bw, by + bh, bh * 0.3, accent);

        let (rw, rh) = (bw * 0.5, bh * 0.7);
        let rx = cx - rw / 2.0;
        let ry = by - rh + 2.0;
        canvas.fill_rounded(rx, ry, rx + rw, ry + rh, rh * 0.4, accent);

        let wheel = bh * 0.3;
        for at in [0.15, 0.85] {
            canvas.circle(bx + bw * at, by + bh, wheel, DARKER_GRAY);
        }
    }

    fn sun(&self, canvas: &mut Canvas) {
        let r = (self.size / 3) as f32;
        canvas.circle(self.cx, self.cy, r, SUN_YELLOW);
        self.rays(canvas, (self.cx, self.cy), r + 4.0, r * 1.5, self.stroke(3, 20));
    }

    fn cloud(&self, canvas: &mut Canvas) {
        let (cx, cy, r) = (self.cx, self.cy, self.quarter());
        for (l, t, rt, b) in [
            (1.5, 0.3, 1.5, 1.0),
            (0.8, 1.0, 0.5, 0.1),
            (0.2, 1.2, 1.2, 0.0),
        ] {
            canvas.ellipse(cx - r * l, cy - r * t, cx + r * rt, cy + r * b, CLOUD_GRAY);
        }
    }

    fn cloud_sun(&self, canvas: &mut Canvas) {
        let (cx, cy) = (self.cx, self.cy);
        let sr = self.quarter();
        let sun = (cx - sr * 0.5, cy - sr * 0.7);
        canvas.circle(sun.0, sun.1, sr * 0.6, SUN_YELLOW);
        self.rays(canvas, sun, sr * 0.6 + 2.0, sr, self.stroke(2, 25));

        let r = self.quarter();
        for (l, t, rt, b) in [
            (1.3, 0.1, 1.3, 1.0),
            (0.7, 0.7, 0.4, 0.2),
            (0.1, 0.9, 1.1, 0.1),
        ] {
            canvas.ellipse(cx - r * l, cy - r * t, cx + r * rt, cy + r * b, CLOUD_LIGHT_GRAY);
        }
    }

    /// Eight rays at 45° steps between radii `inner` and `outer`.
    fn rays(&self, canvas: &mut Canvas, center: (f32, f32), inner: f32, outer: f32, width: f32) {
        for step in 0..8 {
            let (sin, cos) = (step as f32 * 45.0).to_radians().sin_cos();
            canvas.line(
                (center.0 + cos * inner, center.1 + sin * inner),
                (center.0 + cos * outer, center.1 + sin * outer),
                SUN_YELLOW,
                width,
            );
        }
    }

    fn walk(&self, canvas: &mut Canvas, accent: Rgb) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius());
        let w = self.stroke(3, 18);
        canvas.circle(cx, cy - r * 0.7, r * 0.2, accent);

        let hip = (cx, cy + r * 0.15);
        let shoulder = (cx, cy - r * 0.25);
        canvas.line((cx, cy - r * 0.5), hip, accent, w);
        canvas.line(hip, (cx - r * 0.3, cy + r * 0.65), accent, w);
        canvas.line(hip, (cx + r * 0.3, cy + r * 0.65), accent, w);
        canvas.line(shoulder, (cx - r * 0.35, cy + r * 0.05), accent, w);
        canvas.line(shoulder, (cx + r * 0.35, cy - r * 0.05), accent, w);
    }

    fn share(&self, canvas: &mut Canvas, accent: Rgb) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius());
        let w = self.stroke(4, 12);

        let tip = (cx, cy - r * 0.6);
        canvas.line(tip, (cx, cy + r * 0.2), accent, w);
        canvas.line((cx - r * 0.3, cy - r * 0.3), tip, accent, w);
        canvas.line((cx + r * 0.3, cy - r * 0.3), tip, accent, w);

        let (left, right) = (cx - r * 0.5, cx + r * 0.5);
        let (top, bottom) = (cy - r * 0.05, cy + r * 0.6);
        let tray: Polygon = smallvec![(left, top), (left, bottom), (right, bottom), (right, top)];
        canvas.polyline(&tray, accent, w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storeshot_core::color::{BLUE, CAT_RED};

    fn blank() -> Canvas {
        Canvas::new(120, 120, WHITE).unwrap()
    }

    fn ink(canvas: &Canvas) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(WHITE))
            .count()
    }

    #[test]
    fn every_icon_draws_inside_its_box() {
        for kind in IconKind::ALL {
            let mut canvas = blank();
            draw_icon(&mut canvas, 20.0, 20.0, 80, kind, BLUE);
            assert!(ink(&canvas) > 0, "{kind} drew nothing");
            for y in 0..120 {
                for x in 0..120 {
                    let inside = (16..=104).contains(&x) && (16..=104).contains(&y);
                    if !inside {
                        assert_eq!(canvas.pixel(x, y), Some(WHITE), "{kind} leaked at {x},{y}");
                    }
                }
            }
        }
    }

    #[test]
    fn airplane_sits_on_light_blue_disc() {
        let mut canvas = blank();
        draw_icon(&mut canvas, 0.0, 0.0, 100, IconKind::Airplane, CAT_RED);
        // r = 46; fuselage covers the center, the disc covers (50, 85).
        assert_eq!(canvas.pixel(50, 50), Some(CAT_RED));
        assert_eq!(canvas.pixel(50, 88), Some(AIRPLANE_BACKDROP));
    }

    #[test]
    fn sun_ignores_accent() {
        let mut canvas = blank();
        draw_icon(&mut canvas, 0.0, 0.0, 90, IconKind::Sun, CAT_RED);
        assert_eq!(canvas.pixel(45, 45), Some(SUN_YELLOW));
        let red = (0..90)
            .flat_map(|y| (0..90).map(move |x| (x, y)))
            .any(|(x, y)| canvas.pixel(x, y) == Some(CAT_RED));
        assert!(!red);
    }

    #[test]
    fn hotel_has_white_door() {
        let mut canvas = blank();
        draw_icon(&mut canvas, 0.0, 0.0, 100, IconKind::Hotel, CAT_RED);
        // r = 46, building 36.8 × 46 from y = 27; door spans y 57..73.
        assert_eq!(canvas.pixel(50, 68), Some(WHITE));
        assert_eq!(canvas.pixel(36, 68), Some(CAT_RED));
    }
}
