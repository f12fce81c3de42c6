use anyhow::Context;
use importer::SeedOutcome;
use storage::Database;
use tower_http::trace::TraceLayer;
use web::{
    config::Config,
    features::auth::services::TokenExchange,
    routes::{cors_layer, router},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fitness coaching API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let outcome = importer::seed_workout_history(db.pool(), &config.seed_csv_path)
        .await
        .context("Failed to seed workout history")?;
    if let SeedOutcome::Seeded(summary) = outcome {
        tracing::info!(
            "Seeded {} workouts ({} sets) from {}",
            summary.workouts,
            summary.sets,
            config.seed_csv_path.display()
        );
    }

    let auth = TokenExchange::new(config.auth.clone(), reqwest::Client::new());
    match auth.configuration_error() {
        Some(error) => tracing::warn!("Token exchange unavailable: {}", error),
        None => tracing::info!("Token exchange configured"),
    }

    let app = router(AppState::new(db, auth))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "OpenAPI document available at http://{}/api-docs/openapi.json",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
