use crate::export::ExportFormat;
use crate::store::Table;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for phdplanner
#[derive(Parser)]
#[command(
    name = "phdplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan a PhD application: professors, scholarships, correspondence and milestones",
    long_about = None
)]
pub struct Cli {
    /// Override the workbook (a .sqlite file, a CSV directory or `memory:`)
    #[arg(global = true, long = "workbook", value_name = "LOCATOR")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the workbook
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Professor tracker
    Prof {
        #[command(subcommand)]
        action: ProfAction,
    },

    /// Scholarship tracker
    Sch {
        #[command(subcommand)]
        action: SchAction,
    },

    /// Communication log
    Comm {
        #[command(subcommand)]
        action: CommAction,
    },

    /// Application timeline
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Show headline numbers and upcoming deadlines
    Dashboard,

    /// Check credentials, workbook access and worksheet layout
    Check,

    /// Export one table
    Export {
        #[arg(long, value_enum)]
        table: Table,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

// ---------------------------
// Professors
// ---------------------------

#[derive(Subcommand)]
pub enum ProfAction {
    /// Add a professor
    Add(ProfFields),
    /// List professors
    List {
        #[arg(long, help = "Country contains (case-insensitive)")]
        country: Option<String>,
        #[arg(long, help = "Exact contact status, or All")]
        status: Option<String>,
        #[arg(long, help = "Search name, university and research interests")]
        search: Option<String>,
    },
    /// Edit a professor by ID
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ProfFields,
        #[arg(long, conflicts_with = "response_date", help = "Clear the response date")]
        clear_response_date: bool,
    },
    /// Delete a professor by ID
    Del { id: i64 },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub university: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long = "interests")]
    pub research_interests: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long, help = "Not Contacted, Contacted, Replied, Ongoing or Closed")]
    pub status: Option<String>,
    #[arg(long = "response-date", value_name = "YYYY-MM-DD")]
    pub response_date: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

// ---------------------------
// Scholarships
// ---------------------------

#[derive(Subcommand)]
pub enum SchAction {
    /// Add a scholarship
    Add(SchFields),
    /// List scholarships
    List {
        #[arg(long, help = "Country contains (case-insensitive)")]
        country: Option<String>,
        #[arg(long, help = "Exact status, or All")]
        status: Option<String>,
        #[arg(long = "due-within", value_name = "DAYS", help = "Deadline at most DAYS away")]
        due_within: Option<i64>,
        #[arg(
            long,
            conflicts_with = "due_within",
            help = "Deadline within the configured window"
        )]
        soon: bool,
    },
    /// Edit a scholarship by ID
    Edit {
        id: i64,
        #[command(flatten)]
        fields: SchFields,
        #[arg(long, conflicts_with = "deadline", help = "Clear the deadline")]
        clear_deadline: bool,
    },
    /// Delete a scholarship by ID
    Del { id: i64 },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SchFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub deadline: Option<String>,
    #[arg(long)]
    pub eligibility: Option<String>,
    #[arg(long)]
    pub funding: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long, help = "To Explore, Applied, Shortlisted, Accepted or Rejected")]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

// ---------------------------
// Communication
// ---------------------------

#[derive(Subcommand)]
pub enum CommAction {
    /// Log a message; an incoming e-mail marks the professor as Replied
    Add(CommFields),
    /// List communication entries
    List {
        #[arg(long, help = "Professor contains (case-insensitive)")]
        professor: Option<String>,
        #[arg(long = "type", help = "Exact message type, or All")]
        message_type: Option<String>,
    },
    /// Edit an entry by ID
    Edit {
        id: i64,
        #[command(flatten)]
        fields: CommFields,
        #[arg(long, conflicts_with = "follow_up", help = "Clear the follow-up date")]
        clear_follow_up: bool,
    },
    /// Delete an entry by ID
    Del { id: i64 },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommFields {
    #[arg(long)]
    pub professor: Option<String>,
    #[arg(
        long = "type",
        help = "Email (Outgoing), Email (Incoming), Call, Meeting or Other"
    )]
    pub message_type: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Defaults to today")]
    pub date: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long = "next-action")]
    pub next_action: Option<String>,
    #[arg(long = "follow-up", value_name = "YYYY-MM-DD")]
    pub follow_up: Option<String>,
}

// ---------------------------
// Timeline
// ---------------------------

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a milestone
    Add(TaskFields),
    /// List milestones ordered by date
    List {
        #[arg(long, help = "Exact status, or All")]
        status: Option<String>,
    },
    /// Edit a milestone by ID
    Edit {
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Delete a milestone by ID
    Del { id: i64 },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TaskFields {
    #[arg(long)]
    pub task: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
    #[arg(long, help = "Pending, In Progress, Completed or On Hold")]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}
