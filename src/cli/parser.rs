use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchclock
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal punch clock: punch in, punch out, and review daily and weekly work time",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Write defaults for missing fields to the file")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Punch in (start the clock)
    In {
        /// Punch-in time today (HH:MM); defaults to now
        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Punch out (stop the clock and book the time)
    Out {
        /// Punch-out time today (HH:MM); defaults to now
        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Show whether the clock is running and how far the day has come
    Status,

    /// Show one 7-day window, day by day
    Week {
        /// Weeks back from the current one
        #[arg(long, short, default_value_t = 0)]
        offset: i64,

        /// Monday to Sunday instead of the configured policy
        #[arg(long, conflicts_with = "rolling")]
        aligned: bool,

        /// Last 7 days instead of the configured policy
        #[arg(long)]
        rolling: bool,
    },

    /// Show totals of the last 8 weeks, most recent first
    Weeks,

    /// Correct the punch times of a day
    Edit {
        /// Date (YYYY-MM-DD)
        date: String,

        /// New punch-in time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        /// New punch-out time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        /// The punch-out time falls on the following day
        #[arg(long = "next-day", requires = "end")]
        next_day: bool,
    },
}
