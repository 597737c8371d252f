use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTimetable
/// CLI application to inspect a generated class timetable and export it
#[derive(Parser)]
#[command(
    name = "rtimetable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect a generated class timetable by year, day and section, and export it to XLSX, PDF, JSON or CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the held schedule path (useful for tests or side-by-side schedules)
    #[arg(global = true, long = "schedule", value_name = "FILE")]
    pub schedule: Option<String>,

    /// Academic years to include, e.g. --years 1,3 (default from config)
    #[arg(global = true, long = "years", value_delimiter = ',', value_name = "YEARS")]
    pub years: Option<Vec<u8>>,

    /// Disable colours in terminal output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Grouped by academic year, then by session type
    Table,
    /// Grouped by weekday
    Day,
    /// One table per day: sections as rows, time slots as columns
    Grid,
}

impl View {
    pub fn from_name(name: &str) -> Option<Self> {
        <View as ValueEnum>::from_str(name, true).ok()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Load a generated timetable, replacing the one currently held
    Load {
        /// Bare JSON array of sessions or a generator response; `-` reads stdin
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show the held timetable
    Show {
        #[arg(long, value_enum, help = "View to render (default from config)")]
        view: Option<View>,

        #[arg(long, help = "Print the view as JSON instead of a table")]
        json: bool,
    },

    /// Print timetable statistics and the list of sections
    Stats,

    /// Print a data-summary or validation response from the generator
    Summary {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the held timetable
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
