use clap::Parser;
use population_insights::core::inspect::available_years;
use population_insights::utils::error::ErrorSeverity;
use population_insights::utils::{logger, validation::Validate};
use population_insights::{
    CliConfig, DashboardEngine, DashboardPipeline, InsightError, LocalStorage,
};

fn exit_code(e: &InsightError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &InsightError) {
    tracing::error!(
        "❌ Dashboard generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting population-insights CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.list_years {
        match available_years(&config.input).await {
            Ok(years) => years.iter().for_each(|year| println!("{}", year)),
            Err(e) => {
                report_failure(&e);
                std::process::exit(exit_code(&e));
            }
        }
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = DashboardPipeline::new(storage, config);
    let engine = DashboardEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Dashboard generated successfully!");
            println!("✅ Dashboard generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            report_failure(&e);
            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
