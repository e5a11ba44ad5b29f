//! TOML seed files replayed through the [`University`] facade.
//!
//! ```toml
//! [[students]]
//! id = 1
//! name = "Alice"
//!
//! [[faculty]]
//! id = 9
//! name = "Dr. Smith"
//!
//! [[courses]]
//! id = 101
//! name = "CS101"
//! faculty_id = 9
//! students = [1]
//! ```

use crate::config::toml_config::substitute_env_vars;
use crate::core::university::University;
use crate::domain::model::{CourseId, FacultyId, StudentId, UNASSIGNED_FACULTY};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub students: Vec<PersonEntry>,
    pub faculty: Vec<PersonEntry>,
    pub courses: Vec<CourseEntry>,
    pub assignments: Vec<AssignmentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub faculty_id: FacultyId,
    #[serde(default)]
    pub students: Vec<StudentId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub faculty_id: FacultyId,
    pub course_id: CourseId,
}

impl Roster {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Adds every record, then every enrollment, then every assignment.
    /// Stops at the first error; records added before it stay in place.
    pub fn apply(&self, university: &University) -> Result<()> {
        for student in &self.students {
            university.add_student(student.id, &student.name)?;
        }
        for faculty in &self.faculty {
            university.add_faculty(faculty.id, &faculty.name)?;
        }
        for course in &self.courses {
            university.add_course(course.id, &course.name, course.faculty_id)?;
        }

        let mut enrollments = 0usize;
        for course in &self.courses {
            for &student_id in &course.students {
                university.enroll_in_course(student_id, course.id)?;
                enrollments += 1;
            }
        }
        for assignment in &self.assignments {
            university.assign_course(assignment.faculty_id, assignment.course_id)?;
        }

        tracing::info!(
            students = self.students.len(),
            faculty = self.faculty.len(),
            courses = self.courses.len(),
            enrollments,
            assignments = self.assignments.len(),
            listed_without_faculty = self.unassigned_courses().count(),
            "roster applied"
        );
        Ok(())
    }

    pub fn unassigned_courses(&self) -> impl Iterator<Item = &CourseEntry> {
        self.courses
            .iter()
            .filter(|course| course.faculty_id == UNASSIGNED_FACULTY)
    }
}
