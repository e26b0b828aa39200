//! CLI entrypoint for doc-analyzer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use analyzer_application::{
    AnalysisParams, CredentialSource, NoProgress, ProgressNotifier, Reply, SessionController,
    require_credential,
};
use analyzer_domain::{Command, Document, Model, SAMPLE_RESUME};
use analyzer_infrastructure::{ConfigLoader, FileConfig, GeminiLlmGateway};
use analyzer_presentation::output::formatter::for_format;
use analyzer_presentation::{
    ChatRepl, Cli, CliCommand, ConsoleFormatter, DocumentArgs, FormApp, OutputConfig,
    OutputFormatter, ProgressReporter, ReplConfig,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    ConsoleFormatter::set_color_enabled(config.output.color);

    let model: Model = match &cli.model {
        Some(name) => {
            let Ok(model) = name.parse::<Model>();
            model
        }
        None => config.gemini.parse_model(),
    };
    let params = AnalysisParams::default().with_model(model);

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        show_progress: !cli.quiet && config.repl.show_progress,
    };

    info!("Starting doc-analyzer (model: {})", params.model);

    // === Dependency Injection ===
    let credentials = config.gemini.credential_source();
    let gateway = Arc::new(GeminiLlmGateway::new(config.gemini.gateway_config()));

    match cli.subcommand_or_default() {
        command @ (CliCommand::Summarize { .. } | CliCommand::Ask { .. }) => {
            run_batch(command, &credentials, gateway, params, &output).await
        }
        CliCommand::Chat { document } => {
            let controller = SessionController::new(gateway, params, credentials.resolve());
            let repl_config = ReplConfig::with_history_file(config.repl.history_file.as_deref());
            let mut repl = ChatRepl::new(controller, output, repl_config);
            repl.run(document.read().context("Failed to read document")?)
                .await?;
            Ok(())
        }
        CliCommand::Form { document } => {
            let controller = SessionController::new(gateway, params, credentials.resolve());
            let text = document
                .read()
                .context("Failed to read document")?
                .unwrap_or_else(|| SAMPLE_RESUME.to_string());
            FormApp::new(controller, text).run().await?;
            Ok(())
        }
    }
}

/// One request, printed to stdout, then exit
async fn run_batch(
    command: CliCommand,
    credentials: &dyn CredentialSource,
    gateway: Arc<GeminiLlmGateway>,
    params: AnalysisParams,
    output: &OutputConfig,
) -> Result<()> {
    // Refuse to start without a key; nothing has been sent yet
    let credential = require_credential(credentials)?;

    let document = load_batch_document(command.document())?;
    let model = params.model.clone();

    let mut controller = SessionController::new(gateway, params, Some(credential));
    controller.load_document(document)?;

    let session_command = match command {
        CliCommand::Ask { question, .. } => Command::Ask(question),
        _ => Command::Summarize,
    };

    let progress: Box<dyn ProgressNotifier> = if output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    };

    match controller
        .dispatch(session_command, progress.as_ref())
        .await
    {
        Reply::Outcome(outcome) => {
            println!("{}", for_format(output.format).format(&outcome, &model));
            Ok(())
        }
        Reply::Rejected(message) | Reply::CredentialRequired(message) => bail!(message),
        Reply::Exited => Ok(()),
    }
}

/// Read `--file`/`--text`, falling back to the sample when neither is given
fn load_batch_document(args: &DocumentArgs) -> Result<Document> {
    if !args.is_given() {
        eprintln!(
            "{}",
            ConsoleFormatter::info("No document given; using the built-in sample resume.")
        );
        return Ok(Document::sample());
    }

    let text = args
        .read()
        .context("Failed to read document")?
        .unwrap_or_default();
    Ok(Document::try_new(text)?)
}
