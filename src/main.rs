use clap::Parser;
use daily_deposit::app::prompt::{is_quit_command, RawSubmission};
use daily_deposit::app::render;
use daily_deposit::core::ConfigProvider;
use daily_deposit::utils::error::{DepositError, ErrorSeverity};
use daily_deposit::utils::{logger, validation::Validate};
use daily_deposit::{CliConfig, DepositSession, LocalStorage, SessionExporter};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.merged() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                cli.config.as_deref().unwrap_or_default(),
                e.user_friendly_message()
            );
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!(session = config.session_name(), "Starting daily-deposit session");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Merged config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Some(denomination) = cli.denomination {
        print!("{}", render::render_denomination(config.currency_symbol(), denomination));
        return Ok(());
    }

    println!("🏦 Daily Deposit Account System of 'X' Bank");
    println!("Enter your deposit details and bank note serial number below.");
    println!("Type 'quit' at the name prompt (or press Ctrl-D) to finish.");

    let mut session = DepositSession::seeded();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(raw) = read_submission(&mut lines).await? {
        let request = match raw.into_request() {
            Ok(request) => request,
            Err(e) => {
                report_input_error(&e);
                continue;
            }
        };

        match session.submit(&request) {
            Ok(outcome) => {
                println!();
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                } else {
                    print!("{}", render::render_outcome(&outcome, config.currency_symbol()));
                    println!();
                    print!("{}", render::render_fake_notes(config.currency_symbol()));
                }
                println!();
                print!("{}", render::render_history(session.history()));
            }
            Err(e) => report_input_error(&DepositError::from(e)),
        }
    }

    tracing::info!(
        submissions = session.history().len(),
        flagged = session.history().flagged_count(),
        "session finished"
    );

    if !config.export_formats().is_empty() {
        let storage = LocalStorage::new(config.output_path());
        let target = storage.base_path().display().to_string();
        let exporter = SessionExporter::new(storage);
        match exporter
            .export(session.history(), config.export_formats())
            .await
        {
            Ok(files) => {
                println!("📁 Session exported to {}: {}", target, files.join(", "));
            }
            Err(e) => {
                tracing::error!(
                    "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());

                let exit_code = match e.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
    }

    Ok(())
}

/// Prompts for one submission. `None` means the user is done.
async fn read_submission(lines: &mut InputLines) -> std::io::Result<Option<RawSubmission>> {
    println!();
    let Some(name) = prompt(lines, "Enter your name: ").await? else {
        return Ok(None);
    };
    if is_quit_command(&name) {
        return Ok(None);
    }

    let mut raw = RawSubmission {
        name,
        ..RawSubmission::default()
    };
    let fields: [(&str, &mut String); 4] = [
        ("Enter the daily depositing amount: ", &mut raw.daily_deposit),
        ("Enter the interest rate you desire (e.g. 0.04): ", &mut raw.interest_rate),
        ("Enter the number of days: ", &mut raw.maturity_days),
        ("Enter the bank note serial number: ", &mut raw.serial_number),
    ];
    for (label, slot) in fields {
        match prompt(lines, label).await? {
            Some(value) => *slot = value,
            None => return Ok(None),
        }
    }

    Ok(Some(raw))
}

async fn prompt(lines: &mut InputLines, label: &str) -> std::io::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    lines.next_line().await
}

fn report_input_error(e: &DepositError) {
    tracing::warn!("submission rejected: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
