use async_trait::async_trait;

use crate::domain::{Document, Page};

/// Turns a raw document buffer into its ordered page sequence.
///
/// Pages with no extractable text are kept as empty strings. A buffer that
/// cannot be parsed at all, or a fault while extracting any single page,
/// fails the whole document; pages are never silently skipped.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    async fn extract_pages(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Page>, PageExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("failed to extract page {page}: {reason}")]
    PageExtractionFailed { page: u32, reason: String },
    #[error("extraction timed out")]
    Timeout,
}
