//! Journal analysis from captured images and uploaded PDFs

pub mod prompts;
mod validation;

use std::path::Path;
use std::time::Instant;

use base64::Engine as _;

use crate::error::{require_non_empty, Error, Result};
use crate::extract;
use crate::model::AnalysisResult;
use crate::service::gemini::wire::GenerationConfig;
use crate::service::gemini::{Attachment, GeminiClient};
use validation::RawAnalysis;

/// Service producing SINTA assessments from journal documents.
pub struct AnalysisService {
    client: GeminiClient,
}

impl AnalysisService {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Assess a photographed journal page (base64 JPEG).
    pub async fn analyze_image(&self, base64_image: &str) -> Result<AnalysisResult> {
        require_non_empty(base64_image, "base64_image")?;
        self.analyze(
            prompts::IMAGE_ANALYSIS_PROMPT,
            Attachment::jpeg(base64_image),
            GenerationConfig::ANALYSIS_IMAGE,
        )
        .await
    }

    /// Assess a complete journal PDF already encoded as base64.
    pub async fn analyze_pdf(&self, base64_pdf: &str) -> Result<AnalysisResult> {
        require_non_empty(base64_pdf, "base64_pdf")?;
        self.analyze(
            prompts::PDF_ANALYSIS_PROMPT,
            Attachment::pdf(base64_pdf),
            GenerationConfig::ANALYSIS_PDF,
        )
        .await
    }

    /// Read a PDF from disk, encode it, and assess it.
    pub async fn analyze_pdf_file(&self, path: &Path) -> Result<AnalysisResult> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| Error::DocumentRead {
                path: path.to_path_buf(),
                source,
            })?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        self.analyze_pdf(&encoded).await
    }

    /// Extract visible text from a page image with no assessment.
    pub async fn extract_text(&self, base64_image: &str) -> Result<String> {
        require_non_empty(base64_image, "base64_image")?;
        self.client
            .complete_multimodal(prompts::OCR_PROMPT, Attachment::jpeg(base64_image), None)
            .await
    }

    async fn analyze(
        &self,
        prompt: &str,
        attachment: Attachment,
        generation: GenerationConfig,
    ) -> Result<AnalysisResult> {
        let start = Instant::now();
        let mime_type = attachment.mime_type;

        tracing::debug!(
            model = %self.client.model(),
            mime_type,
            "Initiating journal analysis"
        );

        let raw = self
            .client
            .complete_multimodal(prompt, attachment, Some(generation))
            .await?;
        let extracted: RawAnalysis = extract::extract_payload(&raw)?;
        let result = validation::validate(extracted);

        tracing::info!(
            model = %self.client.model(),
            mime_type,
            elapsed_ms = start.elapsed().as_millis() as u64,
            level = %result.sinta_level,
            weaknesses = result.weaknesses.len(),
            "Journal analysis completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InputValidationError};
    use crate::model::Config;

    fn offline_service() -> AnalysisService {
        let mut config = Config::new("test-key").unwrap();
        config.base_url = "http://127.0.0.1:9".to_string();
        AnalysisService::new(GeminiClient::new(config))
    }

    #[tokio::test]
    async fn empty_image_is_rejected_before_any_request() {
        let service = offline_service();
        let err = service.analyze_image("").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(InputValidationError::EmptyField {
                field: "base64_image"
            })
        ));
    }

    #[tokio::test]
    async fn missing_pdf_file_surfaces_read_error() {
        let service = offline_service();
        let err = service
            .analyze_pdf_file(Path::new("/nonexistent/journal.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DocumentRead { .. }));
    }
}
