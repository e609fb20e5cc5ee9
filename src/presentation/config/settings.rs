use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub upload: UploadSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    /// Sent as the `HTTP-Referer` header identifying the calling origin.
    pub referer: String,
    /// Sent as the `X-Title` header, the app's display title.
    pub app_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_files: usize,
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Body limit for the whole multipart request.
    pub fn max_body_bytes(&self) -> usize {
        self.max_files * self.max_file_size_bytes()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub document_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MAX_FILES: usize = 20;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 50;
const DEFAULT_DOCUMENT_TIMEOUT_SECS: u64 = 120;

impl Settings {
    /// Loads configuration from the environment. The API key is required;
    /// everything else has a default. Failures surface at startup, not at
    /// the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingVar("OPENROUTER_API_KEY"))?;

        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: parse_env("SERVER_PORT", 3000)?,
            },
            llm: LlmSettings {
                api_key,
                base_url: env_or("OPENROUTER_BASE_URL", DEFAULT_BASE_URL),
                referer: env_or("APP_REFERER", "http://localhost:3000"),
                app_title: env_or("APP_TITLE", "Thesis Classifier"),
            },
            upload: UploadSettings {
                max_files: parse_env("UPLOAD_MAX_FILES", DEFAULT_MAX_FILES)?,
                max_file_size_mb: parse_env("UPLOAD_MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB)?,
            },
            pipeline: PipelineSettings {
                document_timeout_secs: parse_env(
                    "DOCUMENT_TIMEOUT_SECS",
                    DEFAULT_DOCUMENT_TIMEOUT_SECS,
                )?,
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info"),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
        Err(_) => Ok(default),
    }
}
