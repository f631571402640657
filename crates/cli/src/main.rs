mod config;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mono_report_core::services::report::{generate_report, statement_stats};
use mono_report_core::time::{format_date, today_range, yesterday_range};
use mono_report_core::ExpenseReporter;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "mono-report",
    version,
    about = "Fetches the day's Monobank statement and posts the expense digest to Telegram"
)]
struct Cli {
    /// Report on the previous civil day instead of today
    #[arg(long)]
    yesterday: bool,

    /// Print the report instead of sending it to Telegram
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        let message = err.to_string();
        eprintln!("❌ Помилка: {message}");
        if message.contains("MONO_TOKEN") || message.contains("TG_BOT_TOKEN") {
            eprintln!("Перевірте правильність токенів у environment variables");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let dry_run = cli.dry_run || config.dry_run;

    let reporter = ExpenseReporter::new(
        &config.mono_token,
        &config.mono_account_id,
        &config.tg_bot_token,
        &config.tg_chat_id,
    );

    let range = if cli.yesterday {
        yesterday_range()
    } else {
        today_range()
    };

    info!(date = %format_date(range.start), "fetching Monobank statement");
    let transactions = reporter.fetch_statement(range).await?;

    let stats = statement_stats(&transactions);
    info!(
        total = stats.total,
        expenses = stats.expenses,
        "statement received"
    );

    let report = generate_report(&transactions, range);

    if dry_run {
        info!("dry run: skipping Telegram delivery");
        println!("{report}");
        return Ok(());
    }

    reporter.deliver_report(&report).await?;
    info!("report delivered to Telegram");

    Ok(())
}
