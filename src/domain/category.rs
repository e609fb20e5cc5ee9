use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed taxonomy of project categories. `Error` is a sentinel for pipeline
/// failures and is never produced by label parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web-application")]
    WebApplication,
    #[serde(rename = "Mobile-application")]
    MobileApplication,
    #[serde(rename = "Hardware/IoT & Network")]
    HardwareIotNetwork,
    #[serde(rename = "Digital Image Processing")]
    DigitalImageProcessing,
    Other,
    Error,
}

impl Category {
    /// The five categories the model is allowed to answer with.
    pub const CLASSIFIABLE: [Category; 5] = [
        Category::WebApplication,
        Category::MobileApplication,
        Category::HardwareIotNetwork,
        Category::DigitalImageProcessing,
        Category::Other,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Category::WebApplication => "Web-application",
            Category::MobileApplication => "Mobile-application",
            Category::HardwareIotNetwork => "Hardware/IoT & Network",
            Category::DigitalImageProcessing => "Digital Image Processing",
            Category::Other => "Other",
            Category::Error => "Error",
        }
    }

    /// Parses a model reply against the closed taxonomy. Matching is
    /// case-insensitive on the trimmed reply; anything else is rejected so
    /// an explanatory sentence never leaks through as a category.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::CLASSIFIABLE
            .into_iter()
            .find(|c| c.as_label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
