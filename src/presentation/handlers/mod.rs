mod classify;
mod filename;
mod health;

pub use classify::{classify_handler, ErrorResponse, MODEL_FIELD, PDF_FILES_FIELD};
pub use filename::decode_multipart_filename;
pub use health::health_handler;
