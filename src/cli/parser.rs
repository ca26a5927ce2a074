use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftgrid
/// CLI application to plan a weekly staff schedule with SQLite
#[derive(Parser)]
#[command(
    name = "rshiftgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly staff scheduling grid: plan shifts, total hours, save per week and export HTML",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the current week, or switch to the week containing DATE
    Week {
        /// Any date of the week (YYYY-MM-DD or "today")
        date: Option<String>,
    },

    /// Show the working grid
    List {
        #[arg(long = "saved", help = "List the weeks that have a saved schedule")]
        saved: bool,
    },

    /// Add a row to the grid
    Add {
        #[arg(long = "staff", help = "Staff member for the new row (default: first in the list)")]
        staff: Option<String>,
    },

    /// Delete a row from the grid
    Del {
        /// Row number (1-based, as shown by `list`)
        row: usize,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Assign a staff member to a row
    Assign {
        /// Row number (1-based)
        row: usize,
        /// Staff name, as listed by `staff --list`
        staff: String,
    },

    /// Set the shift of one day
    Set {
        /// Row number (1-based)
        row: usize,
        /// Day: mon..sun or 1..7
        day: String,
        /// Start time (10:00AM .. 9:30PM, half-hour steps; 24h HH:MM accepted)
        start: String,
        /// End time
        end: String,
    },

    /// Mark one day as not scheduled
    Clear {
        /// Row number (1-based)
        row: usize,
        /// Day: mon..sun or 1..7
        day: String,
    },

    /// Save the grid under the current week
    Save,

    /// Load the schedule saved for the week containing DATE
    Load {
        /// Any date of the week (YYYY-MM-DD or "today")
        date: String,
    },

    /// Start over with a single empty row
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Manage the staff list
    Staff {
        #[arg(long = "list", help = "Print the staff list")]
        list: bool,

        #[arg(long = "add", value_name = "NAME", help = "Add a staff member")]
        add: Option<String>,

        #[arg(long = "del", value_name = "N", help = "Remove the staff member at position N (1-based)")]
        del: Option<usize>,
    },

    /// Print the weekly message for one row
    Message {
        /// Row number (1-based)
        row: usize,
    },

    /// Export the grid for sharing
    Export {
        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: Schedule_<today>.<ext> in export_dir)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Rebuild the grid rows from the autosaved layout (times are reset)
    Restore,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
