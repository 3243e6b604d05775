use anyhow::Context;
use clap::Parser;
use daily_deposit::app::render;
use daily_deposit::config::toml_config::TomlConfig;
use daily_deposit::core::batch::read_requests;
use daily_deposit::core::{ConfigProvider, ExportFormat};
use daily_deposit::utils::error::DepositError;
use daily_deposit::utils::{logger, validation::Validate};
use daily_deposit::{DepositSession, LocalStorage, SessionExporter};
use serde_json::json;

#[derive(Parser)]
#[command(name = "batch-deposit")]
#[command(about = "Run a CSV file of deposit submissions through one session")]
struct Args {
    /// CSV with header name,daily_deposit,interest_rate,maturity_days,serial_number
    input: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print outcomes as JSON lines
    #[arg(long)]
    json: bool,

    /// Override export formats from config
    #[arg(long, value_enum, value_delimiter = ',')]
    export: Option<Vec<ExportFormat>>,

    /// Override output path from config
    #[arg(long)]
    output_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    if args.json || config.logging.json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Some(formats) = args.export.clone() {
        config.export.formats = formats;
        tracing::info!("🔧 Export formats overridden to: {:?}", config.export.formats);
    }
    if let Some(path) = args.output_path.clone() {
        config.export.output_path = path;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(session = config.session_name(), input = %args.input, "🚀 Starting batch run");

    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("failed to open input '{}'", args.input))?;
    let rows = read_requests(file)
        .with_context(|| format!("failed to read submissions from '{}'", args.input))?;

    let mut session = DepositSession::seeded();
    let mut rejected = 0usize;

    // row numbers are 1-based and exclude the header
    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;
        let result = row.and_then(|request| session.submit(&request).map_err(DepositError::from));

        match result {
            Ok(outcome) => {
                if args.json {
                    let line = json!({ "row": row_number, "result": "processed", "outcome": outcome });
                    println!("{}", line);
                } else {
                    println!("#{}", row_number);
                    print!("{}", render::render_outcome(&outcome, config.currency_symbol()));
                    println!();
                }
            }
            Err(e) => {
                rejected += 1;
                tracing::warn!(row = row_number, "row rejected: {}", e);
                if args.json {
                    let line = json!({ "row": row_number, "result": "rejected", "error": e.to_string() });
                    println!("{}", line);
                } else {
                    println!("#{} rejected: {}", row_number, e.user_friendly_message());
                    println!();
                }
            }
        }
    }

    if !args.json {
        print!("{}", render::render_history(session.history()));
        println!();
        print!("{}", render::render_fake_notes(config.currency_symbol()));
    }

    tracing::info!(
        processed = session.history().len(),
        flagged = session.history().flagged_count(),
        rejected,
        "✅ Batch run complete"
    );

    if !config.export_formats().is_empty() {
        let storage = LocalStorage::new(config.output_path());
        let target = storage.base_path().display().to_string();
        let files = SessionExporter::new(storage)
            .export(session.history(), config.export_formats())
            .await
            .with_context(|| format!("failed to export to '{}'", target))?;
        tracing::info!("📁 Exported {} to {}", files.join(", "), target);
    }

    Ok(())
}
