use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// The closed palette a shape can be painted with.
///
/// Only these colors survive a save/load round trip, so the set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
}

// token, rgb
const PALETTE: [(ShapeColor, &str, [u8; 3]); 5] = [
    (ShapeColor::Red, "RED", [255, 0, 0]),
    (ShapeColor::Blue, "BLUE", [0, 0, 255]),
    (ShapeColor::Green, "GREEN", [0, 255, 0]),
    (ShapeColor::Yellow, "YELLOW", [255, 255, 0]),
    (ShapeColor::Orange, "ORANGE", [255, 200, 0]),
];

/// Channel factor applied to get the selection shade
const DARKER_FACTOR: f64 = 0.7;

impl ShapeColor {
    pub const ALL: [ShapeColor; 5] = [
        ShapeColor::Red,
        ShapeColor::Blue,
        ShapeColor::Green,
        ShapeColor::Yellow,
        ShapeColor::Orange,
    ];

    fn entry(self) -> &'static (ShapeColor, &'static str, [u8; 3]) {
        // PALETTE is ordered like the enum
        &PALETTE[self as usize]
    }

    /// The token written to scene files
    pub fn token(self) -> &'static str {
        self.entry().1
    }

    /// Human readable name for menus
    pub fn label(self) -> &'static str {
        match self {
            ShapeColor::Red => "Red",
            ShapeColor::Blue => "Blue",
            ShapeColor::Green => "Green",
            ShapeColor::Yellow => "Yellow",
            ShapeColor::Orange => "Orange",
        }
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.entry().2;
        Color32::from_rgb(r, g, b)
    }

    /// The shade used to paint a selected shape
    pub fn darker(self) -> Color32 {
        let [r, g, b] = self.entry().2;
        let scale = |c: u8| (f64::from(c) * DARKER_FACTOR) as u8;
        Color32::from_rgb(scale(r), scale(g), scale(b))
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ShapeColor {
    type Err = ShapeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .find(|(_, name, _)| *name == token)
            .map(|(color, _, _)| *color)
            .ok_or_else(|| ShapeError::UnsupportedColor(token.to_owned()))
    }
}

impl TryFrom<Color32> for ShapeColor {
    type Error = ShapeError;

    fn try_from(value: Color32) -> Result<Self, Self::Error> {
        PALETTE
            .iter()
            .find(|(_, _, [r, g, b])| Color32::from_rgb(*r, *g, *b) == value)
            .map(|(color, _, _)| *color)
            .ok_or_else(|| ShapeError::UnsupportedColor(format!("{:?}", value)))
    }
}

impl From<ShapeColor> for Color32 {
    fn from(color: ShapeColor) -> Self {
        color.to_color32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_mapping_is_bidirectional() {
        for color in ShapeColor::ALL {
            assert_eq!(color.token().parse::<ShapeColor>().unwrap(), color);
            assert_eq!(ShapeColor::try_from(color.to_color32()).unwrap(), color);
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "PURPLE".parse::<ShapeColor>().unwrap_err();
        assert!(matches!(err, ShapeError::UnsupportedColor(ref t) if t == "PURPLE"));

        // tokens are case sensitive
        assert!("red".parse::<ShapeColor>().is_err());
    }

    #[test]
    fn test_foreign_color32_is_rejected() {
        let result = ShapeColor::try_from(Color32::from_rgb(1, 2, 3));
        assert!(matches!(result, Err(ShapeError::UnsupportedColor(_))));
    }

    #[test]
    fn test_darker_shade() {
        assert_eq!(ShapeColor::Red.darker(), Color32::from_rgb(178, 0, 0));
        assert_eq!(ShapeColor::Orange.darker(), Color32::from_rgb(178, 140, 0));
        for color in ShapeColor::ALL {
            assert_ne!(color.darker(), color.to_color32());
        }
    }
}
