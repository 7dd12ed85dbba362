use clap::{Parser, Subcommand};

/// Command-line interface definition for rHeatlog
/// CLI application to turn a daily activity log into calendar heatmaps
#[derive(Parser)]
#[command(
    name = "rheatlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a one-year activity calendar (SVG) per category and embed it into documentation pages",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the activity log path (CSV)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for unknown or missing keys")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the four calendar images
    Render {
        /// Reference date (YYYY-MM-DD); defaults to today in the configured UTC offset
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Output root; images are written to <DIR>/images/
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: String,
    },

    /// Show the grid layout computed for a reference date
    Layout {
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        #[arg(long = "labels", help = "Also list month labels")]
        labels: bool,
    },

    /// Build the documentation site: render images and substitute page markers
    Build {
        #[arg(long, value_name = "DIR", help = "Docs source directory (overrides config)")]
        docs: Option<String>,

        #[arg(long, value_name = "DIR", help = "Site output directory (overrides config)")]
        site: Option<String>,

        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}
