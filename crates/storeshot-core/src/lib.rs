pub mod catalog;
pub mod color;
pub mod diagnostics;
pub mod gradient;
pub mod icon;
pub mod layout;

pub use catalog::{
    APP_NAME, RESOLUTIONS, Resolution, SCREENSHOTS, ScreenKind, ScreenshotSpec, output_path,
};
pub use color::Rgb;
pub use diagnostics::{Diagnostics, LayoutDiagnostic, Severity};
pub use gradient::{Gradient, GradientDirection};
pub use icon::{IconKind, UnknownIcon};
pub use layout::{Area, PageDots, PhoneFrame, Scale};
