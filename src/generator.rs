//! Logo Generator - Single Entry Point
//!
//! Selects a category, draws the matching layout on a fresh canvas and writes
//! the PNG into the scratch directory. Nothing is retained between calls.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::category::{select_category, Category};
use crate::config::GeneratorConfig;
use crate::font::FontProvider;
use crate::layouts::{layout_for, DrawContext};
use crate::palette::Palette;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not allocate canvas")]
    CanvasAllocation,

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoRequest {
    pub company_name: String,
    pub industry: String,
    /// Accepted and echoed back; no layout reads it yet.
    pub style: String,
    pub color_scheme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLogo {
    pub file_path: PathBuf,
    pub category: Category,
    pub company_name: String,
    pub industry: String,
    pub style: String,
    pub color_scheme: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedLogo {
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// `{category}_{name}.png`, spaces to underscores, lowercased.
pub fn logo_filename(category: Category, company_name: &str) -> String {
    let slug: String = company_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();
    format!("{}_{}.png", category, slug)
}

pub struct LogoGenerator {
    output_dir: PathBuf,
    fonts: FontProvider,
}

impl LogoGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            fonts: FontProvider::load(&config.font_paths),
        }
    }

    pub fn with_fonts(output_dir: impl Into<PathBuf>, fonts: FontProvider) -> Self {
        Self {
            output_dir: output_dir.into(),
            fonts,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn fonts(&self) -> &FontProvider {
        &self.fonts
    }

    /// Pick a category with `rng`, then render it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &LogoRequest,
        rng: &mut R,
    ) -> Result<GeneratedLogo, GenerateError> {
        let category = select_category(&request.company_name, &request.industry, rng);
        tracing::debug!(%category, industry = %request.industry, "selected logo category");
        self.render(category, request)
    }

    /// Render a specific category; no randomness involved.
    pub fn render(&self, category: Category, request: &LogoRequest) -> Result<GeneratedLogo, GenerateError> {
        let palette = Palette::resolve(&request.color_scheme);
        let ctx = DrawContext {
            company_name: &request.company_name,
            industry: &request.industry,
            palette,
            fonts: &self.fonts,
        };

        let mut canvas = Canvas::new()?;
        layout_for(category).draw(&mut canvas, &ctx);

        fs::create_dir_all(&self.output_dir)?;
        let file_path = self.output_dir.join(logo_filename(category, &request.company_name));
        canvas.save_png(&file_path)?;

        tracing::info!(
            %category,
            palette = palette.name,
            path = %file_path.display(),
            "logo written"
        );

        Ok(GeneratedLogo {
            file_path,
            category,
            company_name: request.company_name.clone(),
            industry: request.industry.clone(),
            style: request.style.clone(),
            color_scheme: request.color_scheme.clone(),
            generated_at: Utc::now(),
        })
    }

    /// Read back a previously generated file by bare filename.
    pub fn read_image(&self, filename: &str) -> Result<Vec<u8>, GenerateError> {
        let mut components = Path::new(filename).components();
        let bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !bare || filename.contains(['/', '\\']) {
            return Err(GenerateError::ImageNotFound(filename.to_string()));
        }
        let path = self.output_dir.join(filename);
        if !path.is_file() {
            return Err(GenerateError::ImageNotFound(filename.to_string()));
        }
        Ok(fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_derivation() {
        assert_eq!(logo_filename(Category::Wordmark, "Acme Corp"), "wordmark_acme_corp.png");
        assert_eq!(logo_filename(Category::Emblem, "Zen"), "emblem_zen.png");
        assert_eq!(logo_filename(Category::Abstract, ""), "abstract_.png");
    }

    #[test]
    fn test_filename_keeps_file_in_scratch_dir() {
        assert_eq!(logo_filename(Category::Lettermark, "A/B Labs"), "lettermark_a_b_labs.png");
        assert_eq!(logo_filename(Category::Lettermark, "..\\x"), "lettermark_.._x.png");
    }

    #[test]
    fn test_read_image_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let generator = LogoGenerator::with_fonts(dir.path(), FontProvider::bitmap_only());
        for name in ["", ".", "..", "../etc/passwd", "a/b.png", "a\\b.png", "/etc/passwd", "missing.png"] {
            assert!(matches!(
                generator.read_image(name),
                Err(GenerateError::ImageNotFound(_))
            ));
        }
    }

    #[test]
    fn test_read_image_accepts_dotted_names() {
        let dir = tempfile::tempdir().unwrap();
        let generator = LogoGenerator::with_fonts(dir.path(), FontProvider::bitmap_only());
        for name in ["emblem_acme_inc..png", "wordmark_a..b.png", "..hidden.png"] {
            fs::write(dir.path().join(name), b"png").unwrap();
            assert_eq!(generator.read_image(name).unwrap(), b"png");
        }
    }

    #[test]
    fn test_render_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logos").join("out");
        let generator = LogoGenerator::with_fonts(&nested, FontProvider::bitmap_only());
        let request = LogoRequest {
            company_name: "Acme Corp".into(),
            industry: "finance".into(),
            style: "modern".into(),
            color_scheme: "dark".into(),
        };
        let logo = generator.render(Category::Wordmark, &request).unwrap();
        assert_eq!(logo.file_path, nested.join("wordmark_acme_corp.png"));
        assert_eq!(logo.file_name(), "wordmark_acme_corp.png");
        assert!(logo.file_path.is_file());
    }
}
