//! Layouts - One Drawing Routine per Category
//!
//! Each layout supplies only its geometry; canvas setup and saving belong to
//! the generator.

use std::f32::consts::PI;

use rgb::RGB8;

use crate::canvas::Canvas;
use crate::category::Category;
use crate::font::FontProvider;
use crate::palette::Palette;

const CENTER: f32 = 500.0;
const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
const SHADOW: RGB8 = RGB8 { r: 0xcc, g: 0xcc, b: 0xcc };

/// Everything a layout may read while drawing.
pub struct DrawContext<'a> {
    pub company_name: &'a str,
    pub industry: &'a str,
    pub palette: Palette,
    pub fonts: &'a FontProvider,
}

/// Layout trait - draws one category onto a fresh white canvas
pub trait LogoLayout: Send + Sync {
    fn category(&self) -> Category;
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>);
}

pub fn layout_for(category: Category) -> &'static dyn LogoLayout {
    match category {
        Category::Wordmark => &Wordmark,
        Category::Lettermark => &Lettermark,
        Category::Pictorial => &Pictorial,
        Category::Abstract => &Abstract,
        Category::Combination => &Combination,
        Category::Emblem => &Emblem,
    }
}

/// First letter of each of the first two words, uppercased.
pub fn initials(company_name: &str) -> String {
    company_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn polar(cx: f32, cy: f32, radius: f32, degrees: f32) -> (f32, f32) {
    let theta = degrees * PI / 180.0;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

fn hexagon(cx: f32, cy: f32, radius: f32) -> Vec<(f32, f32)> {
    (0..6).map(|i| polar(cx, cy, radius, i as f32 * 60.0)).collect()
}

fn is_tech(industry: &str) -> bool {
    matches!(industry, "technology" | "software")
}

// --- Concrete Layouts ---

pub struct Wordmark;

impl LogoLayout for Wordmark {
    fn category(&self) -> Category {
        Category::Wordmark
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        let font = ctx.fonts.best_available(120.0);
        let size = font.measure(ctx.company_name);
        let (x, y) = crate::canvas::centered_position(size, None);

        canvas.draw_text(ctx.company_name, &font, x.saturating_add(3), y.saturating_add(3), SHADOW);
        canvas.draw_text(ctx.company_name, &font, x, y, ctx.palette.primary());

        let bar_y = (y as i64 + size.height as i64 + 20) as f32;
        canvas.fill_rect(
            x as f32,
            bar_y,
            (x as i64 + size.width as i64) as f32,
            bar_y + 8.0,
            ctx.palette.secondary(),
        );
    }
}

pub struct Lettermark;

impl LogoLayout for Lettermark {
    fn category(&self) -> Category {
        Category::Lettermark
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        canvas.fill_circle(CENTER, CENTER, 400.0, ctx.palette.primary());
        canvas.fill_circle(CENTER, CENTER, 350.0, ctx.palette.secondary());

        let font = ctx.fonts.best_available(280.0);
        canvas.draw_text_centered(&initials(ctx.company_name), &font, None, WHITE);
    }
}

pub struct Pictorial;

impl Pictorial {
    fn draw_tech_icon(canvas: &mut Canvas, palette: &Palette) {
        for i in 0..3 {
            for j in 0..3 {
                let x = 300.0 + i as f32 * 200.0;
                let y = 200.0 + j as f32 * 150.0;
                canvas.fill_rect(x - 20.0, y - 20.0, x + 20.0, y + 20.0, palette.primary());
                if i < 2 {
                    canvas.fill_rect(x + 20.0, y - 5.0, x + 180.0, y + 5.0, palette.secondary());
                }
                if j < 2 {
                    canvas.fill_rect(x - 5.0, y + 20.0, x + 5.0, y + 130.0, palette.secondary());
                }
            }
        }
    }

    fn draw_finance_icon(canvas: &mut Canvas, palette: &Palette) {
        let trend = [(200.0, 600.0), (400.0, 300.0), (600.0, 400.0), (800.0, 200.0)];
        canvas.stroke_polyline(&trend, 20.0, palette.primary());
        canvas.fill_polygon(&[(800.0, 200.0), (750.0, 220.0), (750.0, 180.0)], palette.primary());
    }

    fn draw_creative_icon(canvas: &mut Canvas, palette: &Palette) {
        let handle = [
            (CENTER - 50.0, CENTER + 200.0),
            (CENTER - 30.0, CENTER + 200.0),
            (CENTER + 10.0, CENTER - 100.0),
            (CENTER - 10.0, CENTER - 100.0),
        ];
        canvas.fill_polygon(&handle, palette.tertiary());

        let tip = [
            (CENTER - 10.0, CENTER - 100.0),
            (CENTER + 10.0, CENTER - 100.0),
            (CENTER + 30.0, CENTER - 150.0),
            (CENTER - 30.0, CENTER - 150.0),
        ];
        canvas.fill_polygon(&tip, palette.primary());
    }

    fn draw_generic_icon(canvas: &mut Canvas, palette: &Palette) {
        let triangle = [
            (CENTER, CENTER - 200.0),
            (CENTER + 173.0, CENTER + 100.0),
            (CENTER - 173.0, CENTER + 100.0),
        ];
        canvas.fill_polygon(&triangle, palette.primary());
        canvas.fill_circle(CENTER, CENTER, 100.0, palette.secondary());
    }
}

impl LogoLayout for Pictorial {
    fn category(&self) -> Category {
        Category::Pictorial
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        match ctx.industry {
            "technology" | "software" => Self::draw_tech_icon(canvas, &ctx.palette),
            "finance" | "consulting" => Self::draw_finance_icon(canvas, &ctx.palette),
            "creative" | "design" => Self::draw_creative_icon(canvas, &ctx.palette),
            _ => Self::draw_generic_icon(canvas, &ctx.palette),
        }

        let font = ctx.fonts.best_available(60.0);
        canvas.draw_text_centered(ctx.company_name, &font, Some(800), ctx.palette.primary());
    }
}

pub struct Abstract;

impl LogoLayout for Abstract {
    fn category(&self) -> Category {
        Category::Abstract
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        for i in 0..6 {
            let angle = i as f32 * 60.0;
            let outer = polar(CENTER, CENTER, 200.0, angle);
            let inner = polar(CENTER, CENTER, 100.0, angle + 30.0);
            canvas.fill_polygon(&[(CENTER, CENTER), outer, inner], ctx.palette.cycle(i));
        }

        let font = ctx.fonts.best_available(80.0);
        canvas.draw_text_centered(ctx.company_name, &font, Some(800), ctx.palette.primary());
    }
}

pub struct Combination;

impl LogoLayout for Combination {
    fn category(&self) -> Category {
        Category::Combination
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        let (cx, cy, size) = (CENTER, 300.0, 150.0);
        if is_tech(ctx.industry) {
            canvas.fill_polygon(&hexagon(cx, cy, size), ctx.palette.primary());
        } else {
            canvas.fill_circle(cx, cy, size, ctx.palette.primary());
        }

        let font = ctx.fonts.best_available(100.0);
        canvas.draw_text_centered(ctx.company_name, &font, Some(600), ctx.palette.primary());
    }
}

pub struct Emblem;

impl LogoLayout for Emblem {
    fn category(&self) -> Category {
        Category::Emblem
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext<'_>) {
        let shield = [
            (CENTER, 100.0),
            (CENTER + 200.0, 200.0),
            (CENTER + 200.0, 600.0),
            (CENTER, 800.0),
            (CENTER - 200.0, 600.0),
            (CENTER - 200.0, 200.0),
        ];
        canvas.fill_polygon(&shield, ctx.palette.primary());

        let inset = [
            (CENTER, 150.0),
            (CENTER + 150.0, 230.0),
            (CENTER + 150.0, 570.0),
            (CENTER, 750.0),
            (CENTER - 150.0, 570.0),
            (CENTER - 150.0, 230.0),
        ];
        canvas.fill_polygon(&inset, ctx.palette.secondary());

        let font = ctx.fonts.best_available(150.0);
        canvas.draw_text_centered(&initials(ctx.company_name), &font, None, WHITE);

        // banner
        let banner_y = 850.0;
        canvas.fill_rect(200.0, banner_y - 30.0, 800.0, banner_y + 30.0, ctx.palette.tertiary());
        let small = ctx.fonts.best_available(40.0);
        canvas.draw_text_centered(ctx.company_name, &small, Some(banner_y as i32 - 15), WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(category: Category, name: &str, industry: &str, scheme: &str) -> Canvas {
        let fonts = FontProvider::bitmap_only();
        let ctx = DrawContext {
            company_name: name,
            industry,
            palette: Palette::resolve(scheme),
            fonts: &fonts,
        };
        let mut canvas = Canvas::new().unwrap();
        layout_for(category).draw(&mut canvas, &ctx);
        canvas
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Acme Corp"), "AC");
        assert_eq!(initials("Acme"), "A");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
        assert_eq!(initials("acme corp holdings"), "AC");
        assert_eq!(initials("  zen   garden "), "ZG");
    }

    #[test]
    fn test_layout_for_matches_category() {
        for c in Category::ALL {
            assert_eq!(layout_for(c).category(), c);
        }
    }

    #[test]
    fn test_lettermark_rings() {
        let canvas = draw(Category::Lettermark, "Acme Corp", "finance", "red");
        let p = Palette::resolve("red");
        // between r=350 and r=400
        assert_eq!(canvas.pixel(500, 125), Some(p.primary()));
        assert_eq!(canvas.pixel(500, 200), Some(p.secondary()));
        assert_eq!(canvas.pixel(10, 10), Some(WHITE));
    }

    #[test]
    fn test_pictorial_icon_by_industry() {
        let p = Palette::resolve("green");

        let tech = draw(Category::Pictorial, "Acme", "technology", "green");
        assert_eq!(tech.pixel(300, 200), Some(p.primary()));
        assert_eq!(tech.pixel(400, 200), Some(p.secondary()));

        let generic = draw(Category::Pictorial, "Acme", "retail", "green");
        assert_eq!(generic.pixel(500, 500), Some(p.secondary()));
        assert_eq!(generic.pixel(500, 330), Some(p.primary()));

        let creative = draw(Category::Pictorial, "Acme", "design", "green");
        assert_eq!(creative.pixel(500, 380), Some(p.primary()));
    }

    #[test]
    fn test_abstract_wedges_cycle_palette() {
        let canvas = draw(Category::Abstract, "Acme", "art", "orange");
        let p = Palette::resolve("orange");
        // wedge 0 spans 0..30 degrees, wedge 3 spans 180..210
        let (x0, y0) = polar(CENTER, CENTER, 80.0, 15.0);
        let (x3, y3) = polar(CENTER, CENTER, 80.0, 195.0);
        assert_eq!(canvas.pixel(x0 as u32, y0 as u32), Some(p.primary()));
        assert_eq!(canvas.pixel(x3 as u32, y3 as u32), Some(p.primary()));
        let (x1, y1) = polar(CENTER, CENTER, 80.0, 75.0);
        assert_eq!(canvas.pixel(x1 as u32, y1 as u32), Some(p.secondary()));
    }

    #[test]
    fn test_combination_symbol() {
        let p = Palette::resolve("blue");
        let hex = draw(Category::Combination, "Acme Corp", "software", "blue");
        assert_eq!(hex.pixel(500, 300), Some(p.primary()));
        // hexagon vertices sit on the x axis; the top edge is at 300 - 150*sin(60)
        assert_eq!(hex.pixel(500, 160), Some(WHITE));

        let circle = draw(Category::Combination, "Acme Corp", "retail", "blue");
        assert_eq!(circle.pixel(500, 160), Some(p.primary()));
    }

    #[test]
    fn test_emblem_banner() {
        let canvas = draw(Category::Emblem, "", "legal", "gold");
        let p = Palette::resolve("gold");
        assert_eq!(canvas.pixel(210, 850), Some(p.tertiary()));
        assert_eq!(canvas.pixel(500, 120), Some(p.primary()));
        assert_eq!(canvas.pixel(500, 300), Some(p.secondary()));
    }

    #[test]
    fn test_wordmark_bar_under_text() {
        let canvas = draw(Category::Wordmark, "Zen", "retail", "purple");
        let p = Palette::resolve("purple");
        // bitmap font at 120px: 3 cells of 120, text box 360x120 at (320, 440)
        assert_eq!(canvas.pixel(330, 440 + 120 + 24), Some(p.secondary()));
        assert_eq!(canvas.pixel(330, 440 + 120 + 10), Some(WHITE));
    }

    #[test]
    fn test_every_layout_handles_blank_names() {
        for c in Category::ALL {
            let canvas = draw(c, "", "unknown", "nope");
            assert_eq!((canvas.width(), canvas.height()), (1000, 1000));
        }
    }
}
