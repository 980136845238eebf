//! CLI entrypoint for quote-generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use quotes_application::{
    ActivityLogger, NoSyncProgress, QuoteSession, SyncProgressNotifier, SyncQuotesUseCase,
};
use quotes_infrastructure::{
    ACTIVITY_LOG_FILE, ConfigLoader, FileConfig, HttpQuoteSource, JsonFileStorage,
    JsonlActivityLogger, MemorySessionStorage, Severity,
};
use quotes_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, QuoteApp, QuoteRepl, ReplConfig, SyncSpinner,
};
use std::sync::Arc;
use tracing::{error, info, warn};
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

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    info!("Starting quote-generator");

    let command = cli.command();

    if command == Command::Config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Configuration has errors; fix them or run with --no-config");
    }

    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }

    let output_config = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output_config.apply();

    // === Dependency Injection ===
    let app = build_app(&config)?;

    match run(app, command, &cli, &config, &output_config).await {
        Ok(()) => Ok(()),
        Err(message) => {
            eprintln!("{}", ConsoleFormatter::error(&message));
            drop(guard);
            std::process::exit(1);
        }
    }
}

fn build_app(config: &FileConfig) -> Result<QuoteApp> {
    let data_dir = config.storage.resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let activity: Option<Arc<dyn ActivityLogger>> = if config.logging.activity_log {
        JsonlActivityLogger::new(data_dir.join(ACTIVITY_LOG_FILE))
            .map(|logger| Arc::new(logger) as Arc<dyn ActivityLogger>)
    } else {
        None
    };

    let mut session = QuoteSession::open(
        Arc::new(JsonFileStorage::new(&data_dir)),
        Arc::new(MemorySessionStorage::new()),
    );
    if let Some(logger) = &activity {
        session = session.with_activity_logger(logger.clone());
    }

    let mut app = QuoteApp::new(session);

    if config.sync.enabled {
        let remote = HttpQuoteSource::new(
            config.sync.endpoint.clone(),
            config.sync.limit,
            config.sync.timeout(),
        )?;
        info!("Sync endpoint: {}", remote.endpoint());

        let mut sync = SyncQuotesUseCase::new(Arc::new(remote));
        if let Some(logger) = activity {
            sync = sync.with_activity_logger(logger);
        }
        app = app.with_sync(sync, config.sync.to_settings());
    }

    Ok(app)
}

/// Dispatch one command. Errors come back as the message to print.
async fn run(
    mut app: QuoteApp,
    command: Command,
    cli: &Cli,
    config: &FileConfig,
    output: &OutputConfig,
) -> Result<(), String> {
    let printed = match command {
        Command::Show { category } => app.show(category.as_deref()),
        Command::Add {
            text,
            category,
            publish,
        } => app.add(&text, &category, publish).await,
        Command::Categories => Ok(app.categories().trim_end().to_string()),
        Command::List { category, output: format } => {
            let format = format.map(Into::into).unwrap_or(output.format);
            Ok(app.list(category.as_deref(), format).trim_end().to_string())
        }
        Command::Export { file, stdout } => {
            if stdout {
                Ok(app.export_json())
            } else {
                app.export_to(&file)
            }
        }
        Command::Import { file } => app.import_from(&file),
        Command::Sync { watch } => {
            let progress: Box<dyn SyncProgressNotifier> = if cli.quiet {
                Box::new(NoSyncProgress)
            } else {
                Box::new(SyncSpinner::new())
            };
            if watch {
                return watch_until_ctrl_c(&mut app, progress.as_ref()).await;
            }
            app.sync(progress.as_ref()).await
        }
        Command::Repl => {
            let repl_config =
                ReplConfig::in_data_dir(&config.storage.resolve_data_dir(), !cli.quiet);
            return QuoteRepl::new(app, repl_config)
                .run()
                .await
                .map_err(|e| e.to_string());
        }
        Command::Config => Ok(String::new()),
    };

    let printed = printed.map_err(|e| e.to_string())?;
    if !printed.is_empty() {
        println!("{}", printed);
    }
    Ok(())
}

async fn watch_until_ctrl_c(
    app: &mut QuoteApp,
    progress: &dyn SyncProgressNotifier,
) -> Result<(), String> {
    if !app.settings().enabled {
        return Err("Sync is disabled in the configuration".to_string());
    }
    println!(
        "Syncing every {}s, press Ctrl-C to stop",
        app.settings().interval.as_secs()
    );

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let runs = app.watch(progress, shutdown).await.map_err(|e| e.to_string())?;
    info!("Watch finished after {} runs", runs);
    Ok(())
}
