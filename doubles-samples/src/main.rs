use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::{Map, Source, Value, ValueKind};
use slog::{Drain, Fuse, Level, Logger, debug};

use doubles_common::StdResult;
use doubles_samples::commands::{CheckLogFilenameCommand, UserCommands};
use doubles_samples::{CommandContext, DefaultConfiguration};

#[derive(Parser, Debug, Clone)]
#[clap(name = "doubles")]
#[clap(
    about = "Run the test doubles samples with their real collaborators.",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// Available commands
    #[clap(subcommand)]
    command: DoublesCommands,

    /// Run Mode.
    #[clap(long, env = "RUN_MODE", default_value = "dev")]
    run_mode: String,

    /// Verbosity level (-v=warning, -vv=info, -vvv=debug, -vvvv=trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory where configuration file is located.
    #[clap(long, default_value = "./config")]
    config_directory: PathBuf,

    /// Override configuration directory where the users are stored.
    #[clap(long)]
    data_directory: Option<PathBuf>,

    /// Override configuration minimum length of log filenames.
    #[clap(long)]
    min_log_name_length: Option<usize>,

    /// Enable JSON output for logs displayed according to verbosity level
    #[clap(long)]
    log_format_json: bool,
}

impl Args {
    pub fn execute(&self, root_logger: Logger) -> StdResult<bool> {
        debug!(
            root_logger,
            "Doubles CLI version: {}",
            env!("CARGO_PKG_VERSION")
        );
        debug!(root_logger, "Run Mode: {}", self.run_mode);
        let filename = format!("{}/{}.json", self.config_directory.display(), self.run_mode);
        debug!(root_logger, "Reading configuration file '{filename}'.");
        let config_builder = config::Config::builder()
            .add_source(DefaultConfiguration::default())
            .add_source(config::File::with_name(&filename).required(false))
            .add_source(config::Environment::default())
            .add_source(self.clone());
        let context = CommandContext::new(config_builder, root_logger);

        self.command.execute(&context)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Error,
            1 => Level::Warning,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn build_logger(&self) -> Logger {
        let drain: Fuse<slog_async::Async> = if self.log_format_json {
            let drain = slog_bunyan::with_name("doubles", std::io::stderr())
                .set_pretty(false)
                .build()
                .fuse();
            let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

            slog_async::Async::new(drain).build().fuse()
        } else {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = slog_term::CompactFormat::new(decorator).build().fuse();
            let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

            slog_async::Async::new(drain).build().fuse()
        };

        Logger::root(Arc::new(drain), slog::o!())
    }
}

impl Source for Args {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut map = Map::new();
        let namespace = "clap arguments".to_string();

        if let Some(data_directory) = &self.data_directory {
            map.insert(
                "data_directory".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(data_directory.to_string_lossy().to_string()),
                ),
            );
        }

        if let Some(min_log_name_length) = self.min_log_name_length {
            map.insert(
                "min_log_name_length".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(min_log_name_length as u64),
                ),
            );
        }

        Ok(map)
    }
}

#[derive(Subcommand, Debug, Clone)]
enum DoublesCommands {
    /// Check if a filename can be used as a log file
    #[clap(arg_required_else_help = true)]
    CheckLogFilename(CheckLogFilenameCommand),

    /// Save and load users
    #[clap(subcommand)]
    User(UserCommands),
}

impl DoublesCommands {
    pub fn execute(&self, context: &CommandContext) -> StdResult<bool> {
        match self {
            Self::CheckLogFilename(cmd) => cmd.execute(context),
            Self::User(cmd) => cmd.execute(context),
        }
    }
}

fn main() -> StdResult<ExitCode> {
    let args = Args::parse();
    let logger = args.build_logger();

    let succeeded = args.execute(logger)?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
