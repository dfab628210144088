//! Font Provider - Best Available Font
//!
//! Two tiers: a preferred TrueType face found along the configured paths,
//! then the built-in 8x8 bitmap font. The bitmap tier cannot fail.

use font8x8::UnicodeFonts;
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::{Path, PathBuf};

const BITMAP_CELL: u32 = 8;

/// Ink extent of a rendered string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Holds the preferred TrueType face when one could be loaded.
pub struct FontProvider {
    preferred: Option<Font>,
    source: Option<PathBuf>,
}

impl FontProvider {
    /// Try each candidate path in order; keep the first that parses.
    pub fn load(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match load_truetype(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "loaded preferred font");
                    return Self {
                        preferred: Some(font),
                        source: Some(path.clone()),
                    };
                }
                Err(reason) => {
                    tracing::debug!(path = %path.display(), %reason, "font candidate unavailable");
                }
            }
        }
        tracing::debug!("no preferred font found, using built-in bitmap font");
        Self::bitmap_only()
    }

    pub fn bitmap_only() -> Self {
        Self {
            preferred: None,
            source: None,
        }
    }

    pub fn has_preferred(&self) -> bool {
        self.preferred.is_some()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The best font available at `size` pixels.
    pub fn best_available(&self, size: f32) -> LogoFont<'_> {
        match &self.preferred {
            Some(font) => LogoFont::TrueType { font, px: size },
            None => LogoFont::Bitmap {
                scale: ((size / BITMAP_CELL as f32) as u32).max(1),
            },
        }
    }
}

fn load_truetype(path: &Path) -> Result<Font, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|e| e.to_string())
}

#[derive(Clone, Copy)]
pub enum LogoFont<'a> {
    TrueType { font: &'a Font, px: f32 },
    Bitmap { scale: u32 },
}

impl<'a> LogoFont<'a> {
    pub fn measure(&self, text: &str) -> TextSize {
        match self {
            LogoFont::TrueType { font, px } => {
                let (left, top, right, bottom) = ink_bounds(font, *px, text);
                TextSize {
                    width: (right - left).max(0) as u32,
                    height: (bottom - top).max(0) as u32,
                }
            }
            LogoFont::Bitmap { scale } => {
                let cell = BITMAP_CELL.saturating_mul(*scale);
                let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                if chars == 0 {
                    TextSize::default()
                } else {
                    TextSize {
                        width: chars.saturating_mul(cell),
                        height: cell,
                    }
                }
            }
        }
    }

    /// Visit every covered pixel, with coordinates relative to the ink box's
    /// top-left corner.
    pub fn for_each_pixel(&self, text: &str, mut visit: impl FnMut(i32, i32, u8)) {
        match self {
            LogoFont::TrueType { font, px } => {
                let (left, top, _, _) = ink_bounds(font, *px, text);
                let mut pen = 0.0f32;
                for ch in text.chars() {
                    let (metrics, coverage) = font.rasterize(ch, *px);
                    let gx = pen.round() as i32 + metrics.xmin - left;
                    let gy = -(metrics.ymin + metrics.height as i32) - top;
                    for row in 0..metrics.height {
                        for col in 0..metrics.width {
                            let value = coverage[row * metrics.width + col];
                            if value > 0 {
                                visit(gx + col as i32, gy + row as i32, value);
                            }
                        }
                    }
                    pen += metrics.advance_width;
                }
            }
            LogoFont::Bitmap { scale } => {
                let scale = i32::try_from(*scale).unwrap_or(i32::MAX);
                let cell = (BITMAP_CELL as i32).saturating_mul(scale);
                for (i, ch) in text.chars().enumerate() {
                    // stop once a glyph cell would leave i32 coordinate space
                    let origin = match i32::try_from(i).ok().and_then(|i| i.checked_mul(cell)) {
                        Some(origin) if origin <= i32::MAX - cell => origin,
                        _ => break,
                    };
                    let glyph = bitmap_glyph(ch);
                    for (row, bits) in glyph.iter().enumerate() {
                        for bit in 0..8 {
                            if (*bits >> bit) & 1 == 0 {
                                continue;
                            }
                            let x0 = origin + bit * scale;
                            let y0 = row as i32 * scale;
                            for dy in 0..scale {
                                for dx in 0..scale {
                                    visit(x0 + dx, y0 + dy, 255);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Basic Latin, then Latin-1 Supplement, then '?'.
fn bitmap_glyph(ch: char) -> [u8; 8] {
    font8x8::BASIC_FONTS
        .get(ch)
        .or_else(|| font8x8::LATIN_FONTS.get(ch))
        .or_else(|| font8x8::BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// (left, top, right, bottom) of the inked area, baseline at y = 0.
fn ink_bounds(font: &Font, px: f32, text: &str) -> (i32, i32, i32, i32) {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    let mut pen = 0.0f32;
    for ch in text.chars() {
        let metrics = font.metrics(ch, px);
        if metrics.width > 0 && metrics.height > 0 {
            let left = pen.round() as i32 + metrics.xmin;
            let right = left + metrics.width as i32;
            let bottom = -metrics.ymin;
            let top = bottom - metrics.height as i32;
            bounds = Some(match bounds {
                Some((l, t, r, b)) => (l.min(left), t.min(top), r.max(right), b.max(bottom)),
                None => (left, top, right, bottom),
            });
        }
        pen += metrics.advance_width;
    }
    bounds.unwrap_or((0, 0, 0, 0))
}
