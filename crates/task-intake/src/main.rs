/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive create-task TUI, or a one-shot submission from flags
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

mod tui;

use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use task_intake::display::confirmation_rows;
use task_intake::{AppConfig, DraftInput, SubmitOutcome, Submitter, TaskStore, complete};
use task_intake_client::TaskStatus;

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "task-intake", version, about = "Create case tasks against the task backend")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Override api.base_url from the config file
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive form (default)
    Tui,
    /// Validate and submit one task from flags
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "pending")]
    status: TaskStatus,
    /// YYYY-MM-DD, local time zone
    #[arg(long = "due-date", value_name = "DATE", default_value = "")]
    due_date: String,
    /// Validate and print the request body without sending it
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = AppConfig::load(args.config_path.as_deref())?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_buffer = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
            init_tracing(&args.log_level, Some(LogWriterFactory::new(log_buffer.clone())))?;
            let client = config.client()?;
            tui::run_tui(client, log_buffer).await
        }
        Command::Submit(submit) => {
            init_tracing(&args.log_level, None)?;
            run_submit(&config, submit).await
        }
    }
}

fn init_tracing(log_level: &str, tui_writer: Option<LogWriterFactory>) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match tui_writer {
        Some(writer) => builder.with_ansi(false).with_writer(writer).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    result
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

async fn run_submit(config: &AppConfig, args: SubmitArgs) -> Result<()> {
    let input = DraftInput {
        title: args.title,
        description: args.description,
        status: args.status,
        due_date: args.due_date,
    };
    let submitter = Submitter::new(config.client()?);
    let mut store = TaskStore::new();

    let today = submitter.today();
    let Some(payload) = submitter.prepare_input(&mut store, &input, today) else {
        for (field, message) in store.state().form_errors().iter() {
            eprintln!("{}: {message}", field.label());
        }
        bail!("task is invalid; nothing was sent");
    };

    if args.dry_run {
        let body = serde_json::to_string_pretty(payload.request()).context("encode request")?;
        println!("{body}");
        info!("dry-run requested; request not sent");
        return Ok(());
    }

    info!(
        url = %submitter.api().base_url(),
        path = submitter.api().create_task_path(),
        "submitting task"
    );
    let result = submitter.api().create_task(payload.request()).await;
    match complete(&mut store, result) {
        SubmitOutcome::Created(task) => {
            println!("Task created successfully");
            for (label, value) in confirmation_rows(&task, &Local) {
                println!("{label}: {value}");
            }
            Ok(())
        }
        SubmitOutcome::Failed | SubmitOutcome::Invalid => {
            let state = store.state();
            for (field, message) in state.form_errors().iter() {
                eprintln!("{}: {message}", field.label());
            }
            let message = state.error().unwrap_or("Failed to create task");
            Err(anyhow!("{message}"))
        }
    }
}
