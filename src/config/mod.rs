pub mod roster;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{CourseId, FacultyId, StudentId};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "university-registry")]
#[command(about = "Load a university roster and look up enrollments and teaching assignments")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to a TOML roster to load before running the command")]
    pub roster: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Course ids a student is enrolled in
    StudentCourses { id: StudentId },
    /// Course ids a faculty member teaches
    FacultyCourses { id: FacultyId },
    /// Student ids enrolled in a course
    CourseStudents { id: CourseId },
    /// Record counts per registry
    Summary,
}
