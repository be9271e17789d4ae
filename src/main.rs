use std::sync::Arc;

use tower_http::cors::CorsLayer;

use zodiac_ai::config::AppConfig;
use zodiac_ai::dashboard::{DashboardRouteState, dashboard_routes};
use zodiac_ai::horoscope::HoroscopeService;
use zodiac_ai::llm::{LlmConfig, create_provider};
use zodiac_ai::onboarding::{Handoff, OnboardingFlow, OnboardingRouteState, onboarding_routes};
use zodiac_ai::profile::{FileStorage, KvStorage, ProfileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("  export GEMINI_API_KEY=...");
        std::process::exit(1);
    });

    eprintln!("✨ Zodiac AI v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Data dir: {}", config.data_dir.display());
    eprintln!("   API: http://0.0.0.0:{}/api\n", config.port);

    // ── Storage ─────────────────────────────────────────────────────────
    let storage: Arc<dyn KvStorage> = Arc::new(FileStorage::new(config.data_dir.clone()));
    let store = Arc::new(ProfileStore::new(storage));

    // ── Onboarding ──────────────────────────────────────────────────────
    let flow = Arc::new(OnboardingFlow::new(Arc::clone(&store)));
    match flow.init().await {
        Handoff::Dashboard => tracing::info!("Profile complete, onboarding bypassed"),
        Handoff::Wizard(step) => tracing::info!(step = %step, "Onboarding active"),
    }

    // ── Horoscope ───────────────────────────────────────────────────────
    let llm = create_provider(&LlmConfig {
        api_key: config.api_key.clone(),
        model: config.model.clone(),
    });
    let horoscope = Arc::new(HoroscopeService::new(llm));

    // ── HTTP surface ────────────────────────────────────────────────────
    let app = onboarding_routes(OnboardingRouteState {
        flow: Arc::clone(&flow),
    })
    .merge(dashboard_routes(DashboardRouteState {
        store: Arc::clone(&store),
        horoscope,
    }))
    .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Zodiac AI listening");
    axum::serve(listener, app).await?;

    Ok(())
}
