//! CLI command definitions and argument parsing.

use camp_domain::RecordId;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Camps - manage curricula, locations, camps and instructors.
#[derive(Debug, Parser)]
#[command(name = "camps")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides the config file)
    #[arg(short, long, global = true, env = "CAMPS_DB")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage curricula
    #[command(subcommand)]
    Curriculum(CurriculumAction),

    /// Manage locations
    #[command(subcommand)]
    Location(LocationAction),

    /// Manage camps
    #[command(subcommand)]
    Camp(CampAction),

    /// Manage instructors
    #[command(subcommand)]
    Instructor(InstructorAction),

    /// Manage instructor assignments
    #[command(subcommand)]
    Assign(AssignAction),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigAction),
}

/// Active/inactive filter shared by the list commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct StatusFilter {
    /// Only active records
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Only inactive records
    #[arg(long)]
    pub inactive: bool,
}

impl StatusFilter {
    /// The filter as an optional flag value
    pub fn as_option(&self) -> Option<bool> {
        match (self.active, self.inactive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Curriculum actions.
#[derive(Debug, Subcommand)]
pub enum CurriculumAction {
    /// Add a curriculum
    Add {
        /// Curriculum name
        name: String,
        /// Lowest rating the curriculum suits
        #[arg(long)]
        min: i64,
        /// Highest rating the curriculum suits
        #[arg(long)]
        max: i64,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
        /// Create the curriculum inactive
        #[arg(long)]
        inactive: bool,
    },

    /// List curricula
    List {
        #[command(flatten)]
        status: StatusFilter,
        /// Only curricula suitable for this rating
        #[arg(short, long)]
        rating: Option<i64>,
        /// Sort by name
        #[arg(short, long)]
        alphabetical: bool,
    },

    /// Show one curriculum
    Show {
        /// Curriculum ID
        id: RecordId,
    },

    /// Change a curriculum
    Update {
        /// Curriculum ID
        id: RecordId,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New minimum rating
        #[arg(long)]
        min: Option<i64>,
        /// New maximum rating
        #[arg(long)]
        max: Option<i64>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a curriculum no camp uses
    Delete {
        /// Curriculum ID
        id: RecordId,
    },
}

/// Location actions.
#[derive(Debug, Subcommand)]
pub enum LocationAction {
    /// Add a location
    Add {
        /// Location name
        name: String,
        /// Seats available
        #[arg(long)]
        capacity: i64,
        /// Create the location inactive
        #[arg(long)]
        inactive: bool,
    },

    /// List locations
    List {
        #[command(flatten)]
        status: StatusFilter,
    },

    /// Change a location
    Update {
        /// Location ID
        id: RecordId,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New capacity
        #[arg(long)]
        capacity: Option<i64>,
        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },
}

/// Camp time slot filter.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SlotArg {
    /// Morning (`am`)
    Morning,
    /// Afternoon (`pm`)
    Afternoon,
}

/// Camp ordering.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CampOrderArg {
    /// By curriculum name
    Alphabetical,
    /// By start date, then end date
    Chronological,
}

/// Camp actions.
#[derive(Debug, Subcommand)]
pub enum CampAction {
    /// Schedule a camp
    Add(CampAddArgs),

    /// List camps
    List(CampListArgs),

    /// Show one camp with its instructors
    Show {
        /// Camp ID
        id: RecordId,
    },

    /// Change a camp
    Update(CampUpdateArgs),

    /// Mark a camp inactive and release its instructors
    Deactivate {
        /// Camp ID
        id: RecordId,
    },
}

/// Arguments for scheduling a camp.
#[derive(Debug, Args)]
pub struct CampAddArgs {
    /// Curriculum ID
    #[arg(long)]
    pub curriculum: RecordId,

    /// Location ID
    #[arg(long)]
    pub location: RecordId,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day (YYYY-MM-DD); defaults to the first day
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Time slot (`am` or `pm`)
    #[arg(long)]
    pub slot: String,

    /// Price per student
    #[arg(long, default_value = "0")]
    pub cost: f64,

    /// Enrollment cap
    #[arg(long)]
    pub max_students: Option<i64>,
}

/// Arguments for listing camps.
#[derive(Debug, Default, Args)]
pub struct CampListArgs {
    #[command(flatten)]
    pub status: StatusFilter,

    /// Only camps in this slot
    #[arg(short, long, value_enum)]
    pub slot: Option<SlotArg>,

    /// Only camps starting today or later
    #[arg(long, conflicts_with = "past")]
    pub upcoming: bool,

    /// Only camps that ended today or earlier
    #[arg(long)]
    pub past: bool,

    /// Only camps teaching this curriculum
    #[arg(long)]
    pub curriculum: Option<RecordId>,

    /// Result ordering
    #[arg(short, long, value_enum)]
    pub order: Option<CampOrderArg>,
}

/// Arguments for changing a camp.
#[derive(Debug, Default, Args)]
pub struct CampUpdateArgs {
    /// Camp ID
    pub id: RecordId,

    /// New curriculum ID
    #[arg(long)]
    pub curriculum: Option<RecordId>,

    /// New location ID
    #[arg(long)]
    pub location: Option<RecordId>,

    /// New first day
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// New last day
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// New time slot
    #[arg(long)]
    pub slot: Option<String>,

    /// New price
    #[arg(long)]
    pub cost: Option<f64>,

    /// New enrollment cap
    #[arg(long, conflicts_with = "no_max_students")]
    pub max_students: Option<i64>,

    /// Remove the enrollment cap
    #[arg(long)]
    pub no_max_students: bool,

    /// Set the active flag
    #[arg(long)]
    pub active: Option<bool>,
}

/// Instructor actions.
#[derive(Debug, Subcommand)]
pub enum InstructorAction {
    /// Add an instructor
    Add {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address
        email: String,
        /// Phone number (any punctuation)
        #[arg(short, long)]
        phone: Option<String>,
        /// Short biography
        #[arg(short, long)]
        bio: Option<String>,
    },

    /// List instructors
    List {
        #[command(flatten)]
        status: StatusFilter,
        /// Only instructors without a bio
        #[arg(long)]
        needs_bio: bool,
        /// Sort by last name, then first name
        #[arg(short, long)]
        alphabetical: bool,
    },

    /// Show one instructor with their camps
    Show {
        /// Instructor ID
        id: RecordId,
    },

    /// Change an instructor
    Update {
        /// Instructor ID
        id: RecordId,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New phone number (empty to clear)
        #[arg(short, long)]
        phone: Option<String>,
        /// New biography (empty to clear)
        #[arg(short, long)]
        bio: Option<String>,
        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },
}

/// Assignment actions.
#[derive(Debug, Subcommand)]
pub enum AssignAction {
    /// Assign an instructor to a camp
    Add {
        /// Camp ID
        camp: RecordId,
        /// Instructor ID
        instructor: RecordId,
    },

    /// Remove an instructor from a camp
    Remove {
        /// Camp ID
        camp: RecordId,
        /// Instructor ID
        instructor: RecordId,
    },

    /// List instructors assigned to a camp
    List {
        /// Camp ID
        camp: RecordId,
    },
}

/// Business rule presets for a new configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RulesPreset {
    /// Default rating bounds and email TLDs
    #[default]
    Standard,
    /// Accept any email TLD
    Permissive,
    /// Reject unrated curricula
    Strict,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a configuration file with default settings
    Init {
        /// Business rule preset for the `[validation]` section
        #[arg(long, value_enum, default_value_t)]
        preset: RulesPreset,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration in effect
    Show,
}

impl From<RulesPreset> for camp_validator::ValidationConfig {
    fn from(preset: RulesPreset) -> Self {
        match preset {
            RulesPreset::Standard => camp_validator::ValidationConfig::default(),
            RulesPreset::Permissive => camp_validator::ValidationConfig::permissive(),
            RulesPreset::Strict => camp_validator::ValidationConfig::strict(),
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<SlotArg> for camp_domain::TimeSlot {
    fn from(slot: SlotArg) -> Self {
        match slot {
            SlotArg::Morning => camp_domain::TimeSlot::Am,
            SlotArg::Afternoon => camp_domain::TimeSlot::Pm,
        }
    }
}
