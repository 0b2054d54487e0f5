use clap::Parser;
use employee_seed::utils::error::SeedError;
use employee_seed::utils::{logger, validation::Validate};
use employee_seed::{app, CliConfig};

fn exit_with(e: &SeedError) -> ! {
    tracing::error!(
        "❌ Seed generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    if config.dry_run {
        let result = app::dry_run(&settings).and_then(|records| {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
            Ok(records.len())
        });
        match result {
            Ok(count) => tracing::info!("🔍 Dry run: {} employee rows are valid", count),
            Err(e) => exit_with(&e),
        }
        return;
    }

    match app::run(&settings) {
        Ok(report) => {
            tracing::info!(
                "✅ Generated {} inserts, output: {}",
                report.record_count,
                report.destination
            );
        }
        Err(e) => exit_with(&e),
    }
}
