pub mod course_registry;
pub mod faculty_registry;
pub mod store;
pub mod student_registry;
pub mod university;

pub use crate::domain::model::{Course, Faculty, Student};
pub use crate::domain::ports::Record;
pub use crate::utils::error::Result;
