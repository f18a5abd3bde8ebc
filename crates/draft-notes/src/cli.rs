use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drafts",
    version,
    about = "Manage GitLab merge request draft notes"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "DRAFTS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitLab API URL including the version path (overrides config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Personal access token (overrides config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Project ID or path with namespace, e.g. "group/project"
    #[arg(long, short = 'p', global = true)]
    pub project: Option<String>,

    /// Log HTTP requests to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List draft notes on a merge request
    #[command(visible_alias = "ls")]
    List {
        /// Merge request IID
        mr: u64,
        /// Page number
        #[arg(long)]
        page: Option<u64>,
        /// Results per page
        #[arg(long)]
        per_page: Option<u64>,
        /// Field to order by
        #[arg(long)]
        order_by: Option<String>,
        /// Sort direction
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },
    /// Show a single draft note
    Get {
        /// Merge request IID
        mr: u64,
        /// Draft note ID
        id: u64,
    },
    /// Create a draft note
    #[command(visible_alias = "new")]
    Create {
        /// Merge request IID
        mr: u64,
        /// Note text (markdown)
        #[arg(long, short = 'n')]
        note: String,
        /// SHA of the commit the note belongs to
        #[arg(long)]
        commit: Option<String>,
        /// Discussion ID to reply to
        #[arg(long, value_name = "DISCUSSION")]
        reply_to: Option<String>,
        /// Resolve the discussion when the note is published
        #[arg(long)]
        resolve: bool,
    },
    /// Update a draft note
    #[command(visible_alias = "edit")]
    Update {
        /// Merge request IID
        mr: u64,
        /// Draft note ID
        id: u64,
        /// New note text
        #[arg(long, short = 'n')]
        note: Option<String>,
    },
    /// Delete a draft note
    #[command(visible_alias = "rm")]
    Delete {
        /// Merge request IID
        mr: u64,
        /// Draft note ID
        id: u64,
    },
    /// Publish a single draft note
    Publish {
        /// Merge request IID
        mr: u64,
        /// Draft note ID
        id: u64,
    },
    /// Publish all of your draft notes on a merge request
    PublishAll {
        /// Merge request IID
        mr: u64,
    },
    /// Inspect configuration
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (token redacted)
    Show,
    /// Show the config file paths that are searched
    Path,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "drafts", &mut std::io::stdout());
    }
}
