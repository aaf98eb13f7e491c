//! RGB colors, linear interpolation, and the fixed palette.
//!
//! Colors are opaque 8-bit triples. The only way colors are combined is
//! [`Rgb::lerp`]; every tint, shadow, and pill background in the
//! screenshots is a blend of two palette entries.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────

/// Opaque RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate between `self` and `other`.
    ///
    /// `t` is clamped to `[0.0, 1.0]`. Each channel is truncated toward
    /// zero, so `t = 0.0` yields `self` and `t = 1.0` yields `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Emit as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";
        let mut out = String::with_capacity(7);
        out.push('#');
        for byte in [self.r, self.g, self.b] {
            out.push(HEX_CHARS[(byte >> 4) as usize] as char);
            out.push(HEX_CHARS[(byte & 0xF) as usize] as char);
        }
        out
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────

pub const BLUE: Rgb = Rgb::new(0, 122, 255);
pub const TEAL: Rgb = Rgb::new(52, 199, 89);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const OFF_WHITE: Rgb = Rgb::new(248, 248, 250);
pub const LIGHT_GRAY: Rgb = Rgb::new(230, 230, 235);
pub const MID_GRAY: Rgb = Rgb::new(199, 199, 204);
pub const DARK_GRAY: Rgb = Rgb::new(72, 72, 74);
pub const DARKER_GRAY: Rgb = Rgb::new(44, 44, 46);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

// Category colors
pub const CAT_BLUE: Rgb = Rgb::new(0, 122, 255);
pub const CAT_RED: Rgb = Rgb::new(255, 59, 48);
pub const CAT_GREEN: Rgb = Rgb::new(52, 199, 89);
pub const CAT_ORANGE: Rgb = Rgb::new(255, 149, 0);
pub const CAT_PURPLE: Rgb = Rgb::new(175, 82, 222);

/// Accent colors for the trip cards, in card order.
pub const TRIP_COLORS: [Rgb; 3] = [CAT_BLUE, CAT_RED, CAT_ORANGE];

// Icon tints
pub const SUN_YELLOW: Rgb = Rgb::new(255, 204, 0);
pub const CLOUD_GRAY: Rgb = Rgb::new(200, 210, 220);
pub const CLOUD_LIGHT_GRAY: Rgb = Rgb::new(210, 218, 226);
pub const AIRPLANE_BACKDROP: Rgb = Rgb::new(235, 245, 255);
pub const HOTEL_BACKDROP: Rgb = Rgb::new(255, 240, 235);
pub const CAR_BACKDROP: Rgb = Rgb::new(235, 255, 240);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn between(x: u8, a: u8, b: u8) -> bool {
        x >= a.min(b) && x <= a.max(b)
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let pairs = [
            (BLUE, TEAL),
            (TEAL, BLUE),
            (BLACK, WHITE),
            (Rgb::new(0, 100, 220), CAT_PURPLE),
        ];
        for (a, b) in pairs {
            assert_eq!(a.lerp(b, 0.0), a);
            assert_eq!(a.lerp(b, 1.0), b);
        }
    }

    #[test]
    fn lerp_channels_stay_between_sources() {
        let a = Rgb::new(0, 200, 37);
        let b = Rgb::new(255, 3, 37);
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let c = a.lerp(b, t);
            assert!(between(c.r, a.r, b.r), "r out of range at t={t}: {c:?}");
            assert!(between(c.g, a.g, b.g), "g out of range at t={t}: {c:?}");
            assert!(between(c.b, a.b, b.b), "b out of range at t={t}: {c:?}");
        }
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(BLUE.lerp(TEAL, -3.0), BLUE);
        assert_eq!(BLUE.lerp(TEAL, 7.5), TEAL);
        assert_eq!(BLUE.lerp(TEAL, f64::NAN), BLUE);
    }

    #[test]
    fn lerp_truncates_toward_zero() {
        // 0 + (255 - 0) * 0.85 = 216.75
        assert_eq!(BLACK.lerp(WHITE, 0.85), Rgb::new(216, 216, 216));
        // Pill tint used by the itinerary category badges.
        assert_eq!(CAT_RED.lerp(WHITE, 0.85), Rgb::new(255, 225, 223));
    }

    #[test]
    fn hex_output() {
        assert_eq!(BLUE.to_hex(), "#007AFF");
        assert_eq!(format!("{TEAL}"), "#34C759");
        assert_eq!(Rgb::from((1, 2, 255)).to_hex(), "#0102FF");
    }
}
