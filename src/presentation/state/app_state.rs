use std::sync::Arc;

use crate::application::ports::{LlmClient, PageExtractor};
use crate::application::services::ClassificationService;
use crate::presentation::config::Settings;

pub struct AppState<P, L>
where
    P: PageExtractor,
    L: LlmClient,
{
    pub classification_service: Arc<ClassificationService<P, L>>,
    pub settings: Settings,
}

impl<P, L> Clone for AppState<P, L>
where
    P: PageExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            classification_service: Arc::clone(&self.classification_service),
            settings: self.settings.clone(),
        }
    }
}
