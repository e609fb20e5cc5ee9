mod abstract_locator;
mod classification_prompt;
mod classification_service;
mod model_catalog;

pub use abstract_locator::{locate_abstract, ABSTRACT_KEYWORDS};
pub use classification_prompt::{
    build_classification_input, CLASSIFICATION_SYSTEM_PROMPT, MAX_INPUT_CHARS,
};
pub use classification_service::{
    BatchError, ClassificationError, ClassificationService, UploadedFile,
};
pub use model_catalog::{ModelCatalog, ModelProfile, DEFAULT_MODEL_KEY};
