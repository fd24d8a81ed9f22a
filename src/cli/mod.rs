//! Command-line interface.

pub mod completions;
pub mod dump;
pub mod output;

use clap::Parser;

use crate::core::config::Config;
use crate::core::constants::{DEFAULT_FILENAME, PROJECT_ENV};
use crate::core::service::GcpSecretManager;
use crate::core::writer::Format;
use crate::error::Result;

const EXAMPLES: &str = "\
Examples:
  Dump all secrets of a project to .env:
    secretdump my-project

  Only secrets labeled env=stage:
    secretdump my-project --filter labels.env=stage

  Dump to .env.json:
    secretdump my-project --format json

  Dump to cookiemonster.env in key/value format:
    secretdump my-project --filename cookiemonster.env

  Dump to cypress.env.json:
    secretdump my-project --format json --filename cypress.env

  Print to the terminal:
    secretdump my-project --format stdout";

/// Secretdump - dump Google Cloud Secret Manager secrets.
#[derive(Parser, Debug)]
#[command(
    name = "secretdump",
    about = "Dump the latest value of every secret in a Google Cloud project",
    version,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// ID or name of the Google Cloud project
    #[arg(
        value_name = "PROJECT_ID",
        env = PROJECT_ENV,
        required_unless_present = "completions"
    )]
    pub project_id: Option<String>,

    /// Filter secrets, e.g. labels.env=stage (evaluated by Secret Manager)
    #[arg(long, env = "SECRETDUMP_FILTER")]
    pub filter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Env, env = "SECRETDUMP_FORMAT")]
    pub format: OutputFormat,

    /// Output filename; json format appends .json
    #[arg(long, default_value = DEFAULT_FILENAME, env = "SECRETDUMP_FILENAME")]
    pub filename: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output formats accepted by `--format`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// KEY='value' lines in a file
    Env,
    /// A JSON object in <filename>.json
    Json,
    /// KEY=value lines on standard output
    Stdout,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Env => Format::Env,
            OutputFormat::Json => Format::Json,
            OutputFormat::Stdout => Format::Stdout,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Cli {
    /// Resolve the arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProject` if the project id is missing or unusable.
    pub fn config(&self) -> Result<Config> {
        Config::new(
            self.project_id.clone().unwrap_or_default(),
            self.filter.clone(),
            self.format.into(),
            self.filename.clone(),
        )
    }
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    output::set_quiet(cli.quiet);

    if let Some(shell) = cli.completions {
        return completions::execute(shell);
    }

    let config = cli.config()?;
    let service = GcpSecretManager::connect()?;
    let stdout = std::io::stdout();
    dump::run(&service, &config, &mut stdout.lock())?;
    Ok(())
}
