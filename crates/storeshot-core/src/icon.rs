//! Named icon kinds drawn by the render crate.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the hand-drawn vector icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Airplane,
    Hotel,
    Car,
    Sun,
    Cloud,
    CloudSun,
    Walk,
    Share,
}

impl IconKind {
    pub const ALL: [IconKind; 8] = [
        IconKind::Airplane,
        IconKind::Hotel,
        IconKind::Car,
        IconKind::Sun,
        IconKind::Cloud,
        IconKind::CloudSun,
        IconKind::Walk,
        IconKind::Share,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IconKind::Airplane => "airplane",
            IconKind::Hotel => "hotel",
            IconKind::Car => "car",
            IconKind::Sun => "sun",
            IconKind::Cloud => "cloud",
            IconKind::CloudSun => "cloud_sun",
            IconKind::Walk => "walk",
            IconKind::Share => "share",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an icon name is not one of [`IconKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown icon `{0}`")]
pub struct UnknownIcon(pub String);

impl FromStr for IconKind {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_names_parse() {
        for kind in IconKind::ALL {
            assert_eq!(kind.name().parse::<IconKind>(), Ok(kind));
        }
        assert_eq!("cloud_sun".parse::<IconKind>(), Ok(IconKind::CloudSun));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "rocket".parse::<IconKind>().unwrap_err();
        assert_eq!(err, UnknownIcon("rocket".into()));
        assert_eq!(err.to_string(), "unknown icon `rocket`");
        assert!("Airplane".parse::<IconKind>().is_err());
    }
}
