use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "everydog",
    bin_name = "everydog",
    version,
    about = "Browse The Dog API breed catalog by group and origin",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load breeds from a saved JSON payload instead of the API
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub source: Option<PathBuf>,

    /// Extra configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Override the breed list endpoint
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// Facet selections given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only breeds in this group (exact match)
    #[arg(long, short = 'g', value_name = "GROUP")]
    pub group: Option<String>,

    /// Only breeds from this origin (exact match)
    #[arg(long, short = 'o', value_name = "ORIGIN")]
    pub origin: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List breeds, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the breed groups available as filters
    #[command(display_order = 2)]
    Groups,

    /// List the origins available as filters
    #[command(display_order = 3)]
    Origins,

    /// Show full detail for one breed (by id or name)
    ///
    /// The breed is looked up in the whole catalog; --group/--origin only
    /// change the status line printed under the detail.
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Breed id or name (e.g. 3, "Shiba Inu")
        #[arg(required = true, num_args = 1..)]
        selector: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Interactive session reading events from stdin
    #[command(display_order = 5)]
    Browse,
}
