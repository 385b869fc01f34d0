use anyhow::Context;
use clap::Parser;
use population_insights::core::inspect::dry_run;
use population_insights::core::ConfigProvider;
use population_insights::utils::{logger, validation::Validate};
use population_insights::{DashboardEngine, DashboardPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-dashboard")]
#[command(about = "Population dashboard generator with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dashboard.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the selected year from config
    #[arg(long)]
    year: Option<i32>,

    /// Bundle the output into a zip archive, regardless of config
    #[arg(long, conflicts_with = "no_zip")]
    zip: bool,

    /// Write plain files only, regardless of config
    #[arg(long)]
    no_zip: bool,

    /// Dry run - show what would be generated without writing anything
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn compress_override(&self) -> Option<bool> {
        match (self.zip, self.no_zip) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Dashboard: {}", config.dashboard.name);
    tracing::info!("   Country: {}", ConfigProvider::country(config));
    tracing::info!("   Source: {}", config.source());
    tracing::info!("   Output: {}", config.output_path());
    match ConfigProvider::selected_year(config) {
        Some(year) => tracing::info!("   Selected year: {}", year),
        None => tracing::info!("   Selected year: earliest in dataset"),
    }
    if config.compress_output() {
        tracing::info!("   Archive: {}", config.archive_name());
    }
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let report = dry_run(config)
        .await
        .with_context(|| format!("Failed to read population data from {}", config.source()))?;

    if let (Some(first), Some(last)) = (report.first_year(), report.latest_year()) {
        tracing::info!(
            "🔍 Would render {} dashboard pages ({}-{}), {} files in total",
            report.years.len(),
            first,
            last,
            report.artifact_count
        );
    }
    if !report.selected_year_present {
        tracing::warn!(
            "⚠️ Selected year {} is not in the dataset",
            report.selected_year
        );
    }
    if let Some(archive) = &report.archive {
        tracing::info!("🔍 Would bundle output into {}", archive);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logging() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based dashboard generator");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 命令列覆蓋設定
    if let Some(year) = args.year {
        config
            .selection
            .get_or_insert(population_insights::config::toml_config::SelectionSection {
                year: None,
            })
            .year = Some(year);
        tracing::info!("🔧 Selected year overridden to: {}", year);
    }
    if let Some(zip) = args.compress_override() {
        config.output.compress = Some(zip);
        tracing::info!("🔧 Compression overridden to: {}", zip);
    }

    config.validate().context("Configuration validation failed")?;
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        return perform_dry_run(&config).await;
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = DashboardPipeline::new(storage, config);
    let engine = DashboardEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Dashboard generated successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            Err(anyhow::Error::new(e).context("Dashboard generation failed"))
        }
    }
}
