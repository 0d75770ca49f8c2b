use clap::Parser;
use movie_sync::utils::{error::ErrorSeverity, logger, validation::Validate};
use movie_sync::{create_router, AppConfig, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 讀取 .env (若存在)
    dotenv::dotenv().ok();

    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting movie-sync server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match AppConfig::load(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = if e.severity() == ErrorSeverity::Critical { 3 } else { 1 };
            std::process::exit(exit_code);
        }
    };

    tracing::info!("🎬 TMDB: {}", config.catalog.base_url);
    tracing::info!("🗄️ Strapi: {}", config.store.base_url);

    let app = create_router(AppState::from_config(&config));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("🚀 Listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
