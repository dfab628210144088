//! LogoForge Core - Procedural Logo Generator
//!
//! # Guarantees
//! 1. Every logo is a 1000x1000 RGB PNG
//! 2. Palette lookups never fail
//! 3. Missing fonts degrade, never error
//! 4. Randomness is injected, never hidden
//! 5. Nothing survives a call except the written file

pub mod palette;
pub mod category;
pub mod font;
pub mod canvas;
pub mod layouts;
pub mod generator;
pub mod config;
pub mod logging;
pub mod service;

pub use palette::{Palette, PaletteSummary, PALETTES};
pub use category::{select_category, Category};
pub use font::{FontProvider, LogoFont, TextSize};
pub use canvas::{Canvas, CANVAS_SIZE};
pub use layouts::{initials, layout_for, DrawContext, LogoLayout};
pub use generator::{logo_filename, GenerateError, GeneratedLogo, LogoGenerator, LogoRequest};
pub use config::GeneratorConfig;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
