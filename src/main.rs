use clap::Parser;
use recipefinder::{
    cli::{commands, Cli, Commands},
    config::Settings,
    domain::events::EventBus,
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipefinder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    let mut bus = EventBus::new();
    bus.subscribe(commands::log_event);
    let facade = commands::build_facade(&settings, bus)?;

    match cli.command {
        Commands::Search {
            have,
            exclude,
            keyword,
            strategy,
            limit,
        } => {
            commands::search(&facade, &settings, have, exclude, keyword, &strategy, limit).await?;
        }
        Commands::Details { id } => {
            commands::details(&facade, &id).await?;
        }
    }

    Ok(())
}
