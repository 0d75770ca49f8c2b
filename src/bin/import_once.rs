use clap::Parser;
use movie_sync::utils::{error::ErrorSeverity, logger, validation::Validate};
use movie_sync::{AppConfig, AppState, CliConfig};

#[derive(Parser)]
#[command(name = "movie-sync-import")]
#[command(about = "Run a single TMDB to Strapi import pass and exit")]
struct Args {
    #[command(flatten)]
    common: CliConfig,

    /// Delete every stored movie before importing
    #[arg(long)]
    purge_first: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    logger::init_logger(args.common.verbose, args.common.json_logs);

    let config = AppConfig::load(&args.common)?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let state = AppState::from_config(&config);

    if args.purge_first {
        let deleted = state.purger.purge_all().await?;
        println!("🗑️ Deleted {} movies", deleted);
    }

    match state.importer.run().await {
        Ok(summary) => {
            println!("✅ {}", summary.message());
            println!("📊 Total movies processed: {}", summary.total_movies_processed);
        }
        Err(e) => {
            tracing::error!(
                "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
