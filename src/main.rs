use clap::Parser;
use gitgrade::{
    analysis::Analyzer,
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gitgrade=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Analyze { repo, json } => {
            if let Err(e) = commands::analyze(settings.github, &repo, json).await {
                eprintln!("{}", commands::format_error(&e));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting GitGrade server");
    info!("GitHub API: {}", settings.github.api_base_url());
    info!(
        "GitHub request timeout: {}s (no retries)",
        settings.github.timeout_secs
    );

    let analyzer = Analyzer::new(settings.github.clone())?;

    let state = AppState {
        analyzer,
        settings: settings.clone(),
    };

    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("\n========================================");
    println!("GitGrade - GitHub Repository Analyzer");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nEndpoints:");
    println!("  GET  /");
    println!("  GET  /analyze?repo=<url>");
    println!("  GET  /api/analyze?repo=<url>");
    println!("  GET  /health");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
