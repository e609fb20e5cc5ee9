use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use bangmod::application::services::{ClassificationService, ModelCatalog};
use bangmod::infrastructure::llm::OpenRouterClient;
use bangmod::infrastructure::observability::{init_tracing, TracingConfig};
use bangmod::infrastructure::text_processing::PdfPageExtractor;
use bangmod::presentation::config::Settings;
use bangmod::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    // Everything the pipeline needs is constructed here, before the
    // listener accepts its first request.
    let page_extractor = Arc::new(PdfPageExtractor::new());
    let llm_client = Arc::new(OpenRouterClient::new(&settings.llm));

    let classification_service = Arc::new(ClassificationService::new(
        page_extractor,
        llm_client,
        ModelCatalog::builtin(),
        Duration::from_secs(settings.pipeline.document_timeout_secs),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    let state = AppState {
        classification_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
