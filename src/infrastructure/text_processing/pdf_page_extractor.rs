use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{PageExtractor, PageExtractorError};
use crate::domain::{ContentType, Document, Page};

use super::text_sanitizer::sanitize_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// `lopdf`-backed page extractor. Parsing is synchronous CPU-bound work,
/// so it runs on the blocking pool under a bounded timeout.
#[derive(Default)]
pub struct PdfPageExtractor;

impl PdfPageExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_all_pages(data: &[u8]) -> Result<Vec<Page>, PageExtractorError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| PageExtractorError::InvalidDocument(e.to_string()))?;

        let page_map = doc.get_pages();
        let mut pages = Vec::with_capacity(page_map.len());

        // get_pages() keys are 1-based and iterate in document order. A
        // fault on any single page fails the whole document so pages are
        // never silently missing from the sequence.
        for (page_number, _object_id) in page_map {
            let raw = doc.extract_text(&[page_number]).map_err(|e| {
                PageExtractorError::PageExtractionFailed {
                    page: page_number,
                    reason: e.to_string(),
                }
            })?;

            pages.push(Page::new(page_number, sanitize_page_text(&raw)));
        }

        Ok(pages)
    }
}

#[async_trait]
impl PageExtractor for PdfPageExtractor {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, size_bytes = document.size_bytes)
    )]
    async fn extract_pages(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Page>, PageExtractorError> {
        if document.content_type != ContentType::Pdf {
            return Err(PageExtractorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let buffer = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_all_pages(&buffer)),
        )
        .await
        .map_err(|_| PageExtractorError::Timeout)?
        .map_err(|e| PageExtractorError::InvalidDocument(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(pages)
    }
}
