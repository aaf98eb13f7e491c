//! The fixed screenshot catalog and target resolutions.
//!
//! Order matters: a screenshot's position in [`SCREENSHOTS`] is its
//! output index (1-based in file names) and its highlighted page dot.

use crate::color::{BLUE, Rgb, TEAL};
use crate::gradient::{Gradient, GradientDirection};
use std::path::{Path, PathBuf};

// ─── Screens ─────────────────────────────────────────────────────────────

/// Which mock app screen is drawn inside the phone frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// "My Trips": three trip cards and a floating add button.
    TripList,
    /// "Paris, France": day tabs and a four-stop timeline.
    Itinerary,
    /// "Bookings": flight, hotel, and car rental cards.
    Bookings,
    /// "Weather & Travel": forecast cards and travel-time comparison.
    WeatherTravel,
    /// "Share Trip": PDF preview and share options.
    ShareTrip,
}

impl ScreenKind {
    /// Navigation bar title shown at the top of the mock screen.
    pub const fn nav_title(self) -> &'static str {
        match self {
            ScreenKind::TripList => "My Trips",
            ScreenKind::Itinerary => "Paris, France",
            ScreenKind::Bookings => "Bookings",
            ScreenKind::WeatherTravel => "Weather & Travel",
            ScreenKind::ShareTrip => "Share Trip",
        }
    }
}

/// One marketing screenshot: copy, background, and screen content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gradient: Gradient,
    pub screen: ScreenKind,
}

pub const SCREENSHOTS: [ScreenshotSpec; 5] = [
    ScreenshotSpec {
        title: "Plan Your Perfect Trip",
        subtitle: "Organize every detail of your journey",
        gradient: Gradient::new(GradientDirection::Vertical, BLUE, TEAL),
        screen: ScreenKind::TripList,
    },
    ScreenshotSpec {
        title: "Day-by-Day Itinerary",
        subtitle: "Every stop, perfectly organized",
        gradient: Gradient::new(GradientDirection::Diagonal, Rgb::new(0, 100, 220), TEAL),
        screen: ScreenKind::Itinerary,
    },
    ScreenshotSpec {
        title: "Track All Your Bookings",
        subtitle: "Flights, hotels, and rentals in one place",
        gradient: Gradient::new(GradientDirection::Horizontal, TEAL, BLUE),
        screen: ScreenKind::Bookings,
    },
    ScreenshotSpec {
        title: "Weather & Travel Times",
        subtitle: "Know what to expect, always",
        gradient: Gradient::new(
            GradientDirection::DiagonalReverse,
            BLUE,
            Rgb::new(0, 180, 120),
        ),
        screen: ScreenKind::WeatherTravel,
    },
    ScreenshotSpec {
        title: "Share Your Itinerary",
        subtitle: "Export and share with anyone",
        gradient: Gradient::new(GradientDirection::Vertical, Rgb::new(0, 80, 200), TEAL),
        screen: ScreenKind::ShareTrip,
    },
];

/// App name shown in the badge above the title and in the PDF preview.
pub const APP_NAME: &str = "Travly";

// ─── Resolutions ─────────────────────────────────────────────────────────

/// A target display size, labelled by its diagonal in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const RESOLUTIONS: [Resolution; 2] = [
    Resolution {
        label: "6.7",
        width: 1290,
        height: 2796,
    },
    Resolution {
        label: "6.5",
        width: 1284,
        height: 2778,
    },
];

/// Look up a resolution by label (`"6.7"`, `"6.5"`).
pub fn resolution(label: &str) -> Option<Resolution> {
    RESOLUTIONS.into_iter().find(|r| r.label == label)
}

// ─── Output naming ───────────────────────────────────────────────────────

/// File name for the screenshot at zero-based `index`.
pub fn file_name(index: usize) -> String {
    format!("screenshot_{}.png", index + 1)
}

/// `<base>/<label>/screenshot_<index + 1>.png`
pub fn output_path(base: &Path, resolution: &Resolution, index: usize) -> PathBuf {
    base.join(resolution.label).join(file_name(index))
}
