use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftdesk
/// CLI console for consultation-desk staffing and settings
#[derive(Parser)]
#[command(
    name = "shiftdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A staffing console CLI: working hours, consultant breaks, and monthly schedules",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for invalid values")]
        check: bool,
    },

    /// Show the tenant settings: working hours, holidays, break and
    /// lunch policies, consultation-acceptance flags
    Settings {
        /// Emit the settings as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Per-day staffing view: status table or gantt chart
    Day {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Render the schedule gantt chart instead of the status table
        #[arg(long)]
        gantt: bool,

        /// Filter consultants by name, email, department or title
        #[arg(long, short)]
        search: Option<String>,

        /// Page number (consultants per page set in the config)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Emit the overview as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// Monthly staffing calendar
    Month {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,

        /// Emit the calendar data as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },
}
