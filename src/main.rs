use clap::Parser;
use consult_import::core::ConfigProvider;
use consult_import::utils::{logger, validation::Validate};
use consult_import::{
    CliConfig, ConsultationPipeline, EtlEngine, ImportError, LocalStorage, TomlConfig,
};

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, ImportError> {
    config.validate()?;

    let storage = LocalStorage::default();
    let pipeline = ConsultationPipeline::new(storage, config);
    EtlEngine::new(pipeline).run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting consult-import");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match config.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(toml_config) => {
                tracing::info!("Loaded configuration from {}", path);
                run(toml_config).await
            }
            Err(e) => Err(e),
        },
        None => run(config).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Import failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
