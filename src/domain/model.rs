use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub type StudentId = u32;
pub type FacultyId = u32;
pub type CourseId = u32;

/// Faculty id stored on a course that nobody teaches yet.
pub const UNASSIGNED_FACULTY: FacultyId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Student,
    Faculty,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Student => "student",
            EntityKind::Faculty => "faculty",
            EntityKind::Course => "course",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Courses the student is enrolled in.
    pub courses: BTreeSet<CourseId>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    /// Courses this faculty member teaches.
    pub courses: BTreeSet<CourseId>,
}

impl Faculty {
    pub fn new(id: FacultyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub faculty_id: FacultyId,
    pub students: BTreeSet<StudentId>,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>, faculty_id: FacultyId) -> Self {
        Self {
            id,
            name: name.into(),
            faculty_id,
            students: BTreeSet::new(),
        }
    }

    pub fn has_faculty(&self) -> bool {
        self.faculty_id != UNASSIGNED_FACULTY
    }
}
