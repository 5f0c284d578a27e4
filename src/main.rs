//! termprompt CLI
//!
//! Run any prompt from the shell and print the answer.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use termprompt::platform::detect_profile;
use termprompt::prompt::{CheckboxConfig, ListConfig, Prompter};
use termprompt::report::{Answer, OutputFormat, format_answer};
use termprompt::{Error, Profile};

/// Environment variable holding the log filter, e.g. `termprompt=debug`.
const LOG_ENV: &str = "TERMPROMPT_LOG";

/// Conventional exit status after SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "termprompt")]
#[command(about = "Ask interactive questions in the terminal")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormatArg,

    /// Terminal profile (escape sequences and glyphs)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    profile: ProfileArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one of several choices
    List {
        /// Choices, in display order
        #[arg(required = true)]
        choices: Vec<String>,

        /// Question to ask
        #[arg(long, default_value = "Choose")]
        message: String,

        /// Dimmed text after the question
        #[arg(long)]
        hint: Option<String>,

        /// Rows shown at once (default: all)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Pick any number of choices
    Checkbox {
        /// Choices, in display order
        #[arg(required = true)]
        choices: Vec<String>,

        /// Question to ask
        #[arg(long, default_value = "Choose")]
        message: String,

        /// Dimmed text after the question
        #[arg(long)]
        hint: Option<String>,

        /// Rows shown at once
        #[arg(long, default_value_t = termprompt::prompt::DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Fewest choices that may be submitted
        #[arg(long)]
        min: Option<usize>,

        /// Most choices that may be selected
        #[arg(long)]
        max: Option<usize>,
    },

    /// Answer yes or no
    Confirm {
        /// Question to ask
        message: String,

        /// Start on Yes instead of No
        #[arg(long)]
        default: bool,
    },

    /// Type a line of text
    Input {
        /// Question to ask
        message: String,

        /// Answer when nothing is typed
        #[arg(long)]
        default: Option<String>,

        /// Dimmed text shown while empty
        #[arg(long)]
        hint: Option<String>,
    },

    /// Type a secret; the screen shows only the mask
    Password {
        /// Question to ask
        message: String,

        /// Character drawn in place of each typed character
        #[arg(long, default_value_t = termprompt::prompt::input::DEFAULT_MASK)]
        mask: char,
    },

    /// Type a non-negative decimal number
    Number {
        /// Question to ask
        message: String,

        /// Answer when nothing is typed
        #[arg(long)]
        default: Option<String>,

        /// Dimmed text shown while empty
        #[arg(long)]
        hint: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ProfileArg {
    Auto,
    Legacy,
    Modern,
}

impl ProfileArg {
    fn resolve(self) -> Profile {
        match self {
            ProfileArg::Auto => detect_profile(),
            ProfileArg::Legacy => Profile::Legacy,
            ProfileArg::Modern => Profile::Modern,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let prompter = Prompter::with_profile(cli.profile.resolve());
    match ask(&prompter, cli.command) {
        Ok(answer) => {
            println!("{}", format_answer(&answer, cli.format.into()));
            ExitCode::SUCCESS
        }
        Err(Error::Interrupted) => {
            eprintln!();
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr and are off unless `TERMPROMPT_LOG` asks for them,
/// so they never land inside the prompt region by accident.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// COMMANDS
// ============================================================================

fn ask(prompter: &Prompter, command: Commands) -> termprompt::Result<Answer> {
    match command {
        Commands::List {
            choices,
            message,
            hint,
            page_size,
        } => {
            let defaults = prompter.list_config(message);
            let config = ListConfig {
                hint: hint.unwrap_or_default(),
                page_size: page_size.unwrap_or(defaults.page_size),
                ..defaults
            };
            let choices = choices.into_iter().map(termprompt::Choice::plain).collect();
            prompter.list_object(config, choices).map(Answer::Text)
        }

        Commands::Checkbox {
            choices,
            message,
            hint,
            page_size,
            min,
            max,
        } => {
            let defaults = prompter.checkbox_config(message);
            let config = CheckboxConfig {
                hint: hint.unwrap_or_default(),
                page_size,
                min_selection: min.unwrap_or(defaults.min_selection),
                max_selection: max.unwrap_or(defaults.max_selection),
                ..defaults
            };
            let choices = choices.into_iter().map(termprompt::Choice::plain).collect();
            prompter.checkbox_object(config, choices).map(Answer::Many)
        }

        Commands::Confirm { message, default } => prompter.confirm(message, default).map(Answer::Flag),

        Commands::Input {
            message,
            default,
            hint,
        } => {
            let config = prompter
                .input_config(message)
                .with_default(default.unwrap_or_default())
                .with_hint(hint.unwrap_or_default());
            prompter.input(config).map(Answer::Text)
        }

        Commands::Password { message, mask } => prompter.password(message, mask).map(Answer::Text),

        Commands::Number {
            message,
            default,
            hint,
        } => {
            let config = prompter
                .input_config(message)
                .with_default(default.unwrap_or_default())
                .with_hint(hint.unwrap_or_default());
            prompter.number(config).map(Answer::Number)
        }
    }
}
