use assetlink::{
    cli::{commands, Cli, Commands},
    config::Settings,
    resolver::ImageResolver,
    Result,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,assetlink=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;

    // Handle commands
    match cli.command {
        Commands::Resolve {
            reference,
            base_url,
            json,
        } => {
            let resolver = make_resolver(&settings, base_url)?;
            commands::resolve(&resolver, &reference, json)?;
        }
        Commands::Classify { reference } => {
            commands::classify_reference(&reference);
        }
        Commands::Batch { input, base_url } => {
            let resolver = make_resolver(&settings, base_url)?;
            commands::batch(&resolver, &input)?;
        }
    }

    Ok(())
}

fn make_resolver(settings: &Settings, base_url: Option<String>) -> Result<ImageResolver> {
    let mut settings = settings.clone();

    // Override settings with CLI arguments
    if let Some(base_url) = base_url {
        settings.resolver.base_url = base_url;
    }
    settings.validate()?;

    Ok(ImageResolver::from_settings(&settings))
}
