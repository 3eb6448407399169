use clap::Parser;
use flight_finder::utils::{logger, validation::Validate};
use flight_finder::{CliConfig, LocalStorage, SearchEngine};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting flight-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和搜尋引擎
    let storage = LocalStorage::new(config.base_dir.clone());
    let engine = SearchEngine::new(storage, config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match engine.run(&mut input, &mut output) {
        Ok(()) => {
            tracing::info!("✅ Search session completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Search session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                flight_finder::utils::error::ErrorSeverity::Low => 0,
                flight_finder::utils::error::ErrorSeverity::Medium => 2,
                flight_finder::utils::error::ErrorSeverity::High => 1,
                flight_finder::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
