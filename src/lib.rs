pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{roster::Roster, toml_config::UniversityConfig};
pub use core::{
    course_registry::CourseRegistry,
    faculty_registry::FacultyRegistry,
    store::{DuplicatePolicy, RecordStore},
    student_registry::StudentRegistry,
    university::{FacadeOptions, Summary, University},
};
pub use domain::model::{
    Course, CourseId, EntityKind, Faculty, FacultyId, Student, StudentId, UNASSIGNED_FACULTY,
};
pub use utils::error::{RegistryError, Result};
