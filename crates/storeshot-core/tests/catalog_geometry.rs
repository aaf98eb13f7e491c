//! Integration tests: catalog × resolutions → output paths and geometry.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use storeshot_core::layout::frac;
use storeshot_core::{PageDots, PhoneFrame, RESOLUTIONS, SCREENSHOTS, Scale, output_path};

// ─── Output naming ───────────────────────────────────────────────────────

#[test]
fn every_combination_has_a_distinct_path() {
    let base = Path::new("/tmp/shots");
    let paths: HashSet<PathBuf> = RESOLUTIONS
        .iter()
        .flat_map(|r| (0..SCREENSHOTS.len()).map(move |i| output_path(base, r, i)))
        .collect();

    assert_eq!(paths.len(), 10);
    assert!(paths.contains(Path::new("/tmp/shots/6.7/screenshot_1.png")));
    assert!(paths.contains(Path::new("/tmp/shots/6.5/screenshot_5.png")));
}

// ─── Geometry ────────────────────────────────────────────────────────────

#[test]
fn phone_frame_fits_inside_every_canvas() {
    for r in RESOLUTIONS {
        let frame = PhoneFrame::for_canvas(r.width, r.height);
        let screen = frame.screen(Scale::for_width(r.width));

        assert!(frame.body.x > 0.0 && frame.body.right() < r.width as f32);
        assert!(frame.body.y > 0.0 && frame.body.bottom() < r.height as f32);
        assert!(screen.x > frame.body.x && screen.right() < frame.body.right());
        assert!(screen.y > frame.body.y && screen.bottom() < frame.body.bottom());
    }
}

#[test]
fn page_dots_sit_below_the_phone() {
    for r in RESOLUTIONS {
        let scale = Scale::for_width(r.width);
        let frame = PhoneFrame::for_canvas(r.width, r.height);
        let dots = PageDots::for_canvas(r.width, r.height, scale);
        for (x, y) in dots.centers {
            assert!(y - dots.radius > frame.body.bottom());
            assert!(x - dots.radius >= 0.0 && x + dots.radius <= r.width as f32);
        }
    }
}

#[test]
fn geometry_is_recomputed_identically() {
    for r in RESOLUTIONS {
        assert_eq!(
            PhoneFrame::for_canvas(r.width, r.height),
            PhoneFrame::for_canvas(r.width, r.height)
        );
    }
    assert_eq!(frac(2796.0, 0.06), 167.0);
}
