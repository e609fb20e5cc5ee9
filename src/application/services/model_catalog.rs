use std::collections::HashMap;

/// Concrete remote model selection for one logical name.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfile {
    /// Provider-side model identifier sent on the wire.
    pub id: String,
    /// Human-readable name for logs and display.
    pub label: String,
    pub temperature: f32,
}

/// Maps caller-facing logical model names to `ModelProfile`s.
///
/// Resolution never fails: an unrecognized or absent logical name falls
/// back to the default entry. Adding a model is a data change via
/// `insert`, not a code change.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: HashMap<String, ModelProfile>,
    default_key: String,
}

pub const DEFAULT_MODEL_KEY: &str = "gpt-4o-mini";

impl ModelCatalog {
    /// The built-in catalog. `gpt-4o-mini` is the default entry.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "gpt-4o-mini".to_string(),
            ModelProfile {
                id: "openai/gpt-4o-mini".to_string(),
                label: "GPT-4o mini".to_string(),
                temperature: 0.2,
            },
        );
        entries.insert(
            "typhoon".to_string(),
            ModelProfile {
                id: "scb10x/llama3.1-typhoon2-70b-instruct".to_string(),
                label: "Typhoon 2 70B".to_string(),
                temperature: 0.2,
            },
        );
        entries.insert(
            "gemini-flash".to_string(),
            ModelProfile {
                id: "google/gemini-2.0-flash-001".to_string(),
                label: "Gemini 2.0 Flash".to_string(),
                temperature: 0.3,
            },
        );

        Self {
            entries,
            default_key: DEFAULT_MODEL_KEY.to_string(),
        }
    }

    pub fn insert(&mut self, logical_name: impl Into<String>, profile: ModelProfile) {
        self.entries.insert(logical_name.into(), profile);
    }

    /// Resolves a logical name to a profile. `None` or an unknown name
    /// resolves to the default entry.
    pub fn resolve(&self, logical_name: Option<&str>) -> &ModelProfile {
        logical_name
            .and_then(|name| self.entries.get(name))
            .unwrap_or_else(|| {
                self.entries
                    .get(&self.default_key)
                    .expect("catalog always contains its default entry")
            })
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
