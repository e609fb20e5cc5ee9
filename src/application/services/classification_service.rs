use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    LlmClient, LlmClientError, PageExtractor, PageExtractorError,
};
use crate::domain::{BatchResult, Category, ClassificationResult, Document};

use super::abstract_locator::locate_abstract;
use super::classification_prompt::{build_classification_input, CLASSIFICATION_SYSTEM_PROMPT};
use super::model_catalog::{ModelCatalog, ModelProfile};

/// One uploaded document plus its raw bytes, request-scoped.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub document: Document,
    pub data: Vec<u8>,
}

/// Batch orchestrator: runs the full extraction and classification
/// pipeline per document, strictly in input order, isolating every
/// per-document fault into that document's result row.
pub struct ClassificationService<P, L>
where
    P: PageExtractor,
    L: LlmClient,
{
    page_extractor: Arc<P>,
    llm_client: Arc<L>,
    catalog: ModelCatalog,
    document_timeout: Duration,
}

impl<P, L> ClassificationService<P, L>
where
    P: PageExtractor,
    L: LlmClient,
{
    pub fn new(
        page_extractor: Arc<P>,
        llm_client: Arc<L>,
        catalog: ModelCatalog,
        document_timeout: Duration,
    ) -> Self {
        Self {
            page_extractor,
            llm_client,
            catalog,
            document_timeout,
        }
    }

    /// Processes a batch sequentially. One bad document never aborts the
    /// batch; result order matches input order by construction.
    #[tracing::instrument(skip(self, files), fields(batch_size = files.len()))]
    pub async fn classify_batch(
        &self,
        files: &[UploadedFile],
        logical_model: Option<&str>,
    ) -> Result<BatchResult, BatchError> {
        if files.is_empty() {
            return Err(BatchError::EmptyBatch);
        }

        let profile = self.catalog.resolve(logical_model);
        tracing::info!(
            model = %profile.id,
            model_label = %profile.label,
            "Starting batch classification"
        );

        let mut results = Vec::with_capacity(files.len());

        for file in files {
            let filename = file.document.filename.clone();

            let outcome = tokio::time::timeout(
                self.document_timeout,
                self.classify_document(&file.data, &file.document, profile),
            )
            .await;

            let result = match outcome {
                Ok(Ok((category, pages_processed))) => {
                    tracing::info!(
                        filename = %filename,
                        category = %category,
                        ?pages_processed,
                        "Document classified"
                    );
                    ClassificationResult::success(filename, category, pages_processed)
                }
                Ok(Err(e)) => {
                    tracing::warn!(filename = %filename, error = %e, "Document failed");
                    ClassificationResult::failure(filename, e.to_string())
                }
                Err(_) => {
                    tracing::warn!(filename = %filename, "Document timed out");
                    ClassificationResult::failure(
                        filename,
                        format!(
                            "document processing exceeded {}s",
                            self.document_timeout.as_secs()
                        ),
                    )
                }
            };

            results.push(result);
        }

        Ok(BatchResult::new(results))
    }

    async fn classify_document(
        &self,
        data: &[u8],
        document: &Document,
        profile: &ModelProfile,
    ) -> Result<(Category, Vec<u32>), ClassificationError> {
        let pages = self.page_extractor.extract_pages(data, document).await?;

        if pages.is_empty() {
            return Err(ClassificationError::NoPages);
        }

        let selection = locate_abstract(&pages);
        let input = build_classification_input(&pages, &selection);

        let reply = self
            .llm_client
            .complete(
                &profile.id,
                profile.temperature,
                CLASSIFICATION_SYSTEM_PROMPT,
                &input,
            )
            .await?;

        let category = Category::from_label(&reply)
            .ok_or(ClassificationError::UnknownCategory(reply))?;

        let pages_processed = selection
            .iter()
            .map(|&index| pages[index].number)
            .collect();

        Ok((category, pages_processed))
    }
}

/// Faults isolated to a single document.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("page extraction: {0}")]
    Extraction(#[from] PageExtractorError),
    #[error("document contains no pages")]
    NoPages,
    #[error("classification request: {0}")]
    Completion(#[from] LlmClientError),
    #[error("model returned an unrecognized category: {0:?}")]
    UnknownCategory(String),
}

/// Faults outside the per-document isolation boundary.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("batch contains no documents")]
    EmptyBatch,
}
