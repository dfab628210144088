//! Service Shapes - Request/Response Bodies for the Web Layer
//!
//! Routing and transport live outside this crate; these functions are what a
//! handler calls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::generator::{GenerateError, LogoGenerator, LogoRequest};
use crate::ENGINE_VERSION;

pub const SERVICE_NAME: &str = "AI Logo Generator";

/// Body of `POST /generate-logo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLogoBody {
    pub company_name: String,
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_color_scheme")]
    pub color_scheme: String,
}

fn default_industry() -> String {
    "technology".to_string()
}

fn default_style() -> String {
    "modern".to_string()
}

fn default_color_scheme() -> String {
    crate::palette::DEFAULT_SCHEME.to_string()
}

impl From<GenerateLogoBody> for LogoRequest {
    fn from(body: GenerateLogoBody) -> Self {
        Self {
            company_name: body.company_name,
            industry: body.industry,
            style: body.style,
            color_scheme: body.color_scheme,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLogoResponse {
    pub success: bool,
    pub message: String,
    pub logo_path: String,
    pub logo_url: String,
    pub company_name: String,
    pub industry: String,
    pub style: String,
    pub color_scheme: String,
    pub category: Category,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn generation_failed(err: &GenerateError) -> Self {
        Self {
            success: false,
            error: format!("Logo generation failed: {}", err),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// `POST /generate-logo`
pub fn generate_logo<R: Rng + ?Sized>(
    generator: &LogoGenerator,
    body: GenerateLogoBody,
    rng: &mut R,
) -> Result<GenerateLogoResponse, ErrorResponse> {
    let request = LogoRequest::from(body);
    match generator.generate(&request, rng) {
        Ok(logo) => Ok(GenerateLogoResponse {
            success: true,
            message: "Professional logo generated successfully".to_string(),
            logo_path: logo.file_path.display().to_string(),
            logo_url: format!("/images/{}", logo.file_name()),
            company_name: logo.company_name,
            industry: logo.industry,
            style: logo.style,
            color_scheme: logo.color_scheme,
            category: logo.category,
            generated_at: logo.generated_at,
        }),
        Err(e) => {
            tracing::warn!(error = %e, company = %request.company_name, "logo generation failed");
            Err(ErrorResponse::generation_failed(&e))
        }
    }
}

/// `GET /images/{filename}`
pub fn image(generator: &LogoGenerator, filename: &str) -> Result<Vec<u8>, GenerateError> {
    generator.read_image(filename)
}

/// `GET /`
pub fn info() -> ServiceInfo {
    ServiceInfo {
        message: format!("{} API", SERVICE_NAME),
        version: ENGINE_VERSION.to_string(),
        status: "operational".to_string(),
        categories: Category::ALL.to_vec(),
    }
}

/// `GET /health`
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body: GenerateLogoBody = serde_json::from_str(r#"{"company_name": "Zen"}"#).unwrap();
        assert_eq!(body.industry, "technology");
        assert_eq!(body.style, "modern");
        assert_eq!(body.color_scheme, "blue");
    }

    #[test]
    fn test_body_requires_company_name() {
        assert!(serde_json::from_str::<GenerateLogoBody>(r#"{"industry": "art"}"#).is_err());
    }

    #[test]
    fn test_info_lists_all_categories() {
        let info = info();
        assert_eq!(info.status, "operational");
        assert_eq!(info.categories.len(), 6);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["categories"][0], "wordmark");
    }

    #[test]
    fn test_health() {
        let json = serde_json::to_value(health()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "healthy", "service": "AI Logo Generator"}));
    }

    #[test]
    fn test_error_response_carries_cause() {
        let err = GenerateError::ImageNotFound("x.png".into());
        let resp = ErrorResponse::generation_failed(&err);
        assert!(!resp.success);
        assert_eq!(resp.error, "Logo generation failed: Image not found: x.png");
    }
}
