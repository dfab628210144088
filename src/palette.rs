//! Palette Table - Fixed Color Schemes
//!
//! Lookups never fail: unknown scheme names resolve to blue.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SCHEME: &str = "blue";

/// Ordered (primary, secondary, tertiary) colors used for one logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [RGB8; 3],
}

const fn hex(rgb: u32) -> RGB8 {
    RGB8 {
        r: (rgb >> 16) as u8,
        g: (rgb >> 8) as u8,
        b: rgb as u8,
    }
}

pub const PALETTES: [Palette; 7] = [
    Palette { name: "blue", colors: [hex(0x1e40af), hex(0x3b82f6), hex(0x60a5fa)] },
    Palette { name: "red", colors: [hex(0xdc2626), hex(0xef4444), hex(0xf87171)] },
    Palette { name: "green", colors: [hex(0x16a34a), hex(0x22c55e), hex(0x4ade80)] },
    Palette { name: "purple", colors: [hex(0x7c3aed), hex(0x8b5cf6), hex(0xa78bfa)] },
    Palette { name: "orange", colors: [hex(0xea580c), hex(0xf97316), hex(0xfb923c)] },
    Palette { name: "dark", colors: [hex(0x1f2937), hex(0x374151), hex(0x6b7280)] },
    Palette { name: "gold", colors: [hex(0xd97706), hex(0xf59e0b), hex(0xfbbf24)] },
];

impl Palette {
    /// Resolve a color scheme name, falling back to blue.
    pub fn resolve(scheme: &str) -> Palette {
        PALETTES
            .iter()
            .find(|p| p.name == scheme)
            .copied()
            .unwrap_or(PALETTES[0])
    }

    pub fn primary(&self) -> RGB8 {
        self.colors[0]
    }

    pub fn secondary(&self) -> RGB8 {
        self.colors[1]
    }

    pub fn tertiary(&self) -> RGB8 {
        self.colors[2]
    }

    /// Color at `index`, wrapping around the palette length.
    pub fn cycle(&self, index: usize) -> RGB8 {
        self.colors[index % self.colors.len()]
    }

    pub fn hex_codes(&self) -> [String; 3] {
        self.colors.map(to_hex)
    }
}

pub fn to_hex(color: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Serializable view of a palette for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteSummary {
    pub name: String,
    pub colors: Vec<String>,
}

impl From<&Palette> for PaletteSummary {
    fn from(p: &Palette) -> Self {
        Self {
            name: p.name.to_string(),
            colors: p.hex_codes().to_vec(),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.hex_codes();
        write!(f, "{} [{}, {}, {}]", self.name, a, b, c)
    }
}
