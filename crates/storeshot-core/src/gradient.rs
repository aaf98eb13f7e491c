//! Two-stop background gradients.
//!
//! A [`Gradient`] only knows how to answer "what color goes here"; the
//! render crate decides how finely to sample it.

use crate::color::Rgb;

/// Axis along which a background gradient blends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Top → bottom.
    Vertical,
    /// Left → right.
    Horizontal,
    /// Top-left → bottom-right, weighted 0.4 horizontal / 0.6 vertical.
    Diagonal,
    /// Top-right → bottom-left, weighted 0.4 horizontal / 0.6 vertical.
    DiagonalReverse,
}

impl GradientDirection {
    /// Side length of the square blocks the fill is sampled at.
    /// Axis-aligned gradients are exact per row/column.
    pub const fn block_size(self) -> u32 {
        match self {
            Self::Vertical | Self::Horizontal => 1,
            Self::Diagonal | Self::DiagonalReverse => 4,
        }
    }
}

/// A background gradient: direction plus start and end colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub direction: GradientDirection,
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const fn new(direction: GradientDirection, from: Rgb, to: Rgb) -> Self {
        Self {
            direction,
            from,
            to,
        }
    }

    /// Interpolation position of pixel `(x, y)` on a `width × height` canvas.
    /// Always in `[0.0, 1.0]`.
    pub fn position(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let fx = x as f64 / width.max(1) as f64;
        let fy = y as f64 / height.max(1) as f64;
        let t = match self.direction {
            GradientDirection::Vertical => fy,
            GradientDirection::Horizontal => fx,
            GradientDirection::Diagonal => fx * 0.4 + fy * 0.6,
            GradientDirection::DiagonalReverse => {
                let rx = (width as f64 - x as f64) / width.max(1) as f64;
                rx * 0.4 + fy * 0.6
            }
        };
        t.clamp(0.0, 1.0)
    }

    /// Color of pixel `(x, y)` on a `width × height` canvas.
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Rgb {
        self.from.lerp(self.to, self.position(x, y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, TEAL};
    use pretty_assertions::assert_eq;

    #[test]
    fn vertical_depends_only_on_row() {
        let g = Gradient::new(GradientDirection::Vertical, BLUE, TEAL);
        assert_eq!(g.color_at(0, 0, 100, 200), BLUE);
        assert_eq!(g.color_at(99, 0, 100, 200), BLUE);
        assert_eq!(g.color_at(0, 150, 100, 200), g.color_at(77, 150, 100, 200));
    }

    #[test]
    fn horizontal_depends_only_on_column() {
        let g = Gradient::new(GradientDirection::Horizontal, TEAL, BLUE);
        assert_eq!(g.color_at(0, 50, 100, 200), TEAL);
        assert_eq!(g.color_at(40, 0, 100, 200), g.color_at(40, 199, 100, 200));
    }

    #[test]
    fn diagonal_weights() {
        let g = Gradient::new(GradientDirection::Diagonal, BLUE, TEAL);
        let t = g.position(50, 100, 100, 200);
        assert!((t - (0.5 * 0.4 + 0.5 * 0.6)).abs() < 1e-9);

        let r = Gradient::new(GradientDirection::DiagonalReverse, BLUE, TEAL);
        // Mirrored horizontally: left edge carries the full 0.4 weight.
        assert!((r.position(0, 0, 100, 200) - 0.4).abs() < 1e-9);
        assert!(r.position(100, 0, 100, 200).abs() < 1e-9);
    }

    #[test]
    fn position_is_clamped() {
        for direction in [
            GradientDirection::Vertical,
            GradientDirection::Horizontal,
            GradientDirection::Diagonal,
            GradientDirection::DiagonalReverse,
        ] {
            let g = Gradient::new(direction, BLUE, TEAL);
            for (x, y) in [(0, 0), (500, 900), (1000, 1000), (0, 5000)] {
                let t = g.position(x, y, 1000, 1000);
                assert!((0.0..=1.0).contains(&t), "{direction:?} t={t}");
            }
        }
    }

    #[test]
    fn zero_sized_canvas_does_not_divide_by_zero() {
        let g = Gradient::new(GradientDirection::DiagonalReverse, BLUE, TEAL);
        let t = g.position(0, 0, 0, 0);
        assert!(t.is_finite());
    }
}
