use serde::{Deserialize, Serialize};

use super::category::Category;

/// Outcome for a single uploaded document. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub filename: String,
    pub category: Category,
    pub pages_processed: Vec<u32>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassificationResult {
    pub fn success(filename: String, category: Category, pages_processed: Vec<u32>) -> Self {
        Self {
            filename,
            category,
            pages_processed,
            success: true,
            error: None,
        }
    }

    pub fn failure(filename: String, error: String) -> Self {
        Self {
            filename,
            category: Category::Error,
            pages_processed: Vec::new(),
            success: false,
            error: Some(error),
        }
    }
}

/// Aggregated batch outcome, in input-file order. `total` always equals
/// `results.len()` regardless of per-document failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub total: usize,
    pub results: Vec<ClassificationResult>,
}

impl BatchResult {
    pub fn new(results: Vec<ClassificationResult>) -> Self {
        Self {
            total: results.len(),
            results,
        }
    }
}
