use crate::client::ConfigClient;
use crate::error::{AppError, Result};
use crate::models::{Action, LifecycleEnv};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Lifecycle executable for the config client component
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lifecycle action to run (install, configure)
    #[arg(value_parser = parse_action, required_unless_present = "list_actions")]
    pub action: Option<Action>,

    /// Command description file prepared by the host
    #[arg(value_name = "COMMAND_JSON")]
    pub command_json: Option<PathBuf>,

    /// Base directory of the service package
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Structured output file expected by the host
    #[arg(value_name = "STRUCTURED_OUTPUT")]
    pub structured_output: Option<PathBuf>,

    /// Host log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(value_name = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Scratch directory
    #[arg(value_name = "TMP_DIR")]
    pub tmp_dir: Option<PathBuf>,

    /// Any further values the host appends
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    /// Print the supported actions and exit
    #[arg(long, conflicts_with = "action")]
    pub list_actions: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_action(s: &str) -> Result<Action> {
    s.parse()
}

impl Cli {
    /// Builds the environment value handed to the lifecycle handlers.
    pub fn env(&self) -> LifecycleEnv {
        LifecycleEnv {
            command_json: self.command_json.clone(),
            base_dir: self.base_dir.clone(),
            structured_output: self.structured_output.clone(),
            log_level: self.log_level.clone(),
            tmp_dir: self.tmp_dir.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Log level used when `RUST_LOG` is not set.
    pub fn default_level(&self) -> LevelFilter {
        if self.verbose {
            return LevelFilter::DEBUG;
        }
        self.env().level_filter().unwrap_or(LevelFilter::WARN)
    }

    /// `RUST_LOG` if present, otherwise `default_level`.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(self.default_level().into()))
    }
}

/// CLI application
#[derive(Default)]
pub struct App {
    client: ConfigClient,
}

impl App {
    pub fn new() -> Self {
        Self {
            client: ConfigClient::new(),
        }
    }

    /// Run the CLI application, writing action output to `out`.
    pub fn run<W: Write>(&self, cli: &Cli, out: &mut W) -> Result<()> {
        if cli.list_actions {
            for action in Action::ALL {
                writeln!(out, "{}", action)?;
            }
            out.flush()?;
            return Ok(());
        }

        let action = cli
            .action
            .ok_or_else(|| AppError::Cli("no action given".to_string()))?;
        let env = cli.env();

        info!(%action, "Running lifecycle action");
        self.client.execute(action, &env, out)?;
        info!(%action, "Lifecycle action finished");

        Ok(())
    }
}
