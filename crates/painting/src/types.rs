use std::ops::{BitAnd, BitOr};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offset
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 8-bit RGB color
///
/// Layout is `[r, g, b]` so a pixel slice casts directly to packed RGB8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background sentinel. Every bit is set, so `BLANK & c == c` and
    /// `BLANK | c == BLANK` for any color `c`. Layers and masks rely on this.
    pub const BLANK: Self = Self::rgb(255, 255, 255);

    /// Every bit clear. Marks "inside the boundary" on a mask.
    pub const INK: Self = Self::rgb(0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn is_blank(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl BitAnd for Color {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::rgb(self.r & rhs.r, self.g & rhs.g, self.b & rhs.b)
    }
}

impl BitOr for Color {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::rgb(self.r | rhs.r, self.g | rhs.g, self.b | rhs.b)
    }
}

/// The fixed palette the design is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    DarkRed,
    Red,
    DarkOrange,
    Orange,
    Yellow,
    LightYellow,
    White,
    Violet,
    DarkViolet,
    DarkGreen,
    Green,
    Black,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::DarkRed,
        PaletteColor::Red,
        PaletteColor::DarkOrange,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::LightYellow,
        PaletteColor::White,
        PaletteColor::Violet,
        PaletteColor::DarkViolet,
        PaletteColor::DarkGreen,
        PaletteColor::Green,
        PaletteColor::Black,
    ];

    pub const fn color(self) -> Color {
        match self {
            PaletteColor::DarkRed => Color::rgb(170, 0, 0),
            PaletteColor::Red => Color::rgb(240, 0, 0),
            PaletteColor::DarkOrange => Color::rgb(255, 80, 0),
            PaletteColor::Orange => Color::rgb(255, 120, 0),
            PaletteColor::Yellow => Color::rgb(255, 200, 0),
            PaletteColor::LightYellow => Color::rgb(255, 250, 214),
            PaletteColor::White => Color::BLANK,
            PaletteColor::Violet => Color::rgb(140, 20, 100),
            PaletteColor::DarkViolet => Color::rgb(100, 0, 80),
            PaletteColor::DarkGreen => Color::rgb(0, 120, 0),
            PaletteColor::Green => Color::rgb(0, 175, 65),
            PaletteColor::Black => Color::INK,
        }
    }
}

impl From<PaletteColor> for Color {
    fn from(value: PaletteColor) -> Self {
        value.color()
    }
}

/// Stroke thickness for circles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Thickness {
    /// Single-pixel outline
    #[default]
    Outline,
    /// Solid disk
    Filled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_and_identity() {
        for entry in PaletteColor::ALL {
            let c = entry.color();
            assert_eq!(Color::BLANK & c, c);
            assert_eq!(c & Color::BLANK, c);
        }
        assert_eq!(Color::BLANK & Color::BLANK, Color::BLANK);
    }

    #[test]
    fn test_blank_absorbs_or() {
        for entry in PaletteColor::ALL {
            assert_eq!(entry.color() | Color::BLANK, Color::BLANK);
            assert_eq!(entry.color() | Color::INK, entry.color());
        }
    }

    #[test]
    fn test_palette_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for entry in PaletteColor::ALL {
            assert!(seen.insert(entry.color()), "duplicate {entry:?}");
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_color_cast_to_bytes() {
        let pixels = [Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
    }
}
