//! Raster Canvas - Fixed 1000x1000 Drawing Surface
//!
//! Shapes go through tiny-skia; text is blended from the font provider's
//! coverage; export converts to 8-bit RGB and writes PNG.

use rgb::RGB8;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Rect, Stroke, Transform};

use crate::font::{LogoFont, TextSize};
use crate::generator::GenerateError;

pub const CANVAS_SIZE: u32 = 1000;

/// Where a piece of text landed on the canvas (ink box top-left plus size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Top-left position that centers a box of `size` horizontally, and
/// vertically unless `target_y` is given. Halves floor toward negative
/// infinity.
pub fn centered_position(size: TextSize, target_y: Option<i32>) -> (i32, i32) {
    let x = centered_offset(size.width);
    let y = target_y.unwrap_or_else(|| centered_offset(size.height));
    (x, y)
}

fn centered_offset(extent: u32) -> i32 {
    let offset = (CANVAS_SIZE as i64 - extent as i64).div_euclid(2);
    i32::try_from(offset).unwrap_or(i32::MIN)
}

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Fresh white canvas.
    pub fn new() -> Result<Self, GenerateError> {
        let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE).ok_or(GenerateError::CanvasAllocation)?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Filled axis-aligned rectangle from (left, top) to (right, bottom).
    pub fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: RGB8) {
        if let Some(rect) = Rect::from_ltrb(left, top, right, bottom) {
            self.pixmap.fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: RGB8) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: RGB8) {
        if let Some(path) = polygon_path(points, true) {
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: RGB8) {
        if let Some(path) = polygon_path(points, false) {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    /// Draw `text` with its ink box's top-left at (x, y). Pixels outside the
    /// canvas are clipped.
    pub fn draw_text(&mut self, text: &str, font: &LogoFont<'_>, x: i32, y: i32, color: RGB8) {
        let width = self.pixmap.width() as i64;
        let height = self.pixmap.height() as i64;
        let pixels = self.pixmap.pixels_mut();
        font.for_each_pixel(text, |dx, dy, coverage| {
            let px = x as i64 + dx as i64;
            let py = y as i64 + dy as i64;
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let idx = (py * width + px) as usize;
            pixels[idx] = blend(pixels[idx], color, coverage);
        });
    }

    /// Measure `text` and draw it centered; returns where it landed.
    pub fn draw_text_centered(
        &mut self,
        text: &str,
        font: &LogoFont<'_>,
        target_y: Option<i32>,
        color: RGB8,
    ) -> TextPlacement {
        let size = font.measure(text);
        let (x, y) = centered_position(size, target_y);
        self.draw_text(text, font, x, y, color);
        TextPlacement {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<RGB8> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            RGB8 {
                r: c.red(),
                g: c.green(),
                b: c.blue(),
            }
        })
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut out = image::RgbImage::new(self.pixmap.width(), self.pixmap.height());
        for (src, dst) in self.pixmap.pixels().iter().zip(out.pixels_mut()) {
            let c = src.demultiply();
            *dst = image::Rgb([c.red(), c.green(), c.blue()]);
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> Result<(), GenerateError> {
        self.to_rgb_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| GenerateError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn paint(color: RGB8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn polygon_path(points: &[(f32, f32)], close: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Source-over blend of an opaque color at `coverage` onto an opaque pixel.
fn blend(dst: PremultipliedColorU8, color: RGB8, coverage: u8) -> PremultipliedColorU8 {
    let a = coverage as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    PremultipliedColorU8::from_rgba(
        mix(color.r, dst.red()),
        mix(color.g, dst.green()),
        mix(color.b, dst.blue()),
        255,
    )
    .unwrap_or(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

    #[test]
    fn test_new_canvas_is_white_and_fixed_size() {
        let canvas = Canvas::new().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (CANVAS_SIZE, CANVAS_SIZE));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(999, 999), Some(WHITE));
    }

    #[test]
    fn test_centered_position() {
        let size = TextSize { width: 200, height: 100 };
        assert_eq!(centered_position(size, None), (400, 450));
        assert_eq!(centered_position(size, Some(800)), (400, 800));
    }

    #[test]
    fn test_wide_text_goes_negative() {
        let size = TextSize { width: 1200, height: 10 };
        assert_eq!(centered_position(size, Some(0)).0, -100);
    }

    #[test]
    fn test_odd_overflow_floors() {
        let size = TextSize { width: 1001, height: 1003 };
        assert_eq!(centered_position(size, None), (-1, -2));
        let size = TextSize { width: 999, height: 10 };
        assert_eq!(centered_position(size, None).0, 0);
    }

    #[test]
    fn test_huge_extent_does_not_wrap() {
        let size = TextSize { width: u32::MAX, height: u32::MAX };
        let (x, y) = centered_position(size, None);
        assert!(x < 0 && y < 0);
        assert_eq!(x, ((1000i64 - u32::MAX as i64) / 2 - 1) as i32);
    }

    #[test]
    fn test_fill_circle_center() {
        let mut canvas = Canvas::new().unwrap();
        canvas.fill_circle(500.0, 500.0, 100.0, RED);
        assert_eq!(canvas.pixel(500, 500), Some(RED));
        assert_eq!(canvas.pixel(500, 350), Some(WHITE));
    }

    #[test]
    fn test_fill_polygon() {
        let mut canvas = Canvas::new().unwrap();
        canvas.fill_polygon(&[(100.0, 100.0), (300.0, 100.0), (300.0, 300.0), (100.0, 300.0)], RED);
        assert_eq!(canvas.pixel(200, 200), Some(RED));
        assert_eq!(canvas.pixel(50, 50), Some(WHITE));
    }

    #[test]
    fn test_degenerate_shapes_are_ignored() {
        let mut canvas = Canvas::new().unwrap();
        canvas.fill_polygon(&[], RED);
        canvas.fill_rect(10.0, 10.0, 5.0, 5.0, RED);
        assert_eq!(canvas.pixel(7, 7), Some(WHITE));
    }

    #[test]
    fn test_text_is_clipped_not_panicking() {
        let mut canvas = Canvas::new().unwrap();
        let font = LogoFont::Bitmap { scale: 40 };
        let placed = canvas.draw_text_centered("Overflowing Name", &font, Some(900), RED);
        assert!(placed.x < 0);
    }

    #[test]
    fn test_centered_text_marks_pixels() {
        let mut canvas = Canvas::new().unwrap();
        let font = LogoFont::Bitmap { scale: 10 };
        let placed = canvas.draw_text_centered("H", &font, None, RED);
        assert_eq!(placed, TextPlacement { x: 460, y: 460, width: 80, height: 80 });
        // left stem of the 8x8 'H'
        assert_eq!(canvas.pixel(465, 465), Some(RED));
    }

    #[test]
    fn test_rgb_export_dimensions() {
        let canvas = Canvas::new().unwrap();
        let img = canvas.to_rgb_image();
        assert_eq!(img.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        assert_eq!(img.get_pixel(10, 10), &image::Rgb([255, 255, 255]));
    }
}
