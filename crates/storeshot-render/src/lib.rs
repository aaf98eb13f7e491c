//! storeshot-render: rasterizes the Travly marketing screenshots.
//!
//! Geometry is built with kurbo and filled by tiny-skia on the CPU; text is
//! outlined with ttf-parser, falling back to a built-in bitmap font. The
//! output is deterministic for a given font set.

pub mod builtin_font;
pub mod canvas;
pub mod chrome;
pub mod compose;
pub mod error;
pub mod generate;
pub mod icons;
pub mod screens;
pub mod text;

pub use canvas::Canvas;
pub use compose::{RenderedScreenshot, render_png, render_screenshot};
pub use error::{RenderError, Result};
pub use generate::{DEFAULT_OUTPUT_BASE, GeneratedShot, GeneratorConfig, generate_all};
pub use icons::draw_icon;
pub use screens::{Painter, draw_screen};
pub use text::{Font, FontBook, FontData, FontPaths, Style, TextBounds, Typeface};
