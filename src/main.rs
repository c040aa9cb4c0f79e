use anyhow::Context;
use clap::Parser;
use std::io;
use user_registry::core::ConfigProvider;
use user_registry::utils::{logger, validation::Validate};
use user_registry::{CliConfig, Console, LocalStorage, TomlConfig, UserSession};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            // 載入 TOML 配置
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            logger::init_cli_logger(cli.verbose, config.log_level());
            tracing::info!("📁 Configuration loaded from: {}", path);
            run(config)
        }
        None => {
            logger::init_cli_logger(cli.verbose, None);
            run(cli)
        }
    }
}

fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "Starting user-registry (data: {}/{}, export: {}/{})",
        config.data_dir(),
        config.data_file(),
        config.data_dir(),
        config.export_file()
    );

    let storage = LocalStorage::new(config.data_dir());
    let session = UserSession::new(storage, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(session, stdin.lock(), stdout.lock());
    console.run().context("console session ended with an error")?;

    Ok(())
}
