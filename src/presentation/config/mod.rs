mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ConfigError, LlmSettings, LoggingSettings, PipelineSettings, ServerSettings, Settings,
    UploadSettings,
};
