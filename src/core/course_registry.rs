use crate::core::store::{DuplicatePolicy, RecordStore};
use crate::domain::model::{Course, CourseId, FacultyId, StudentId};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Owns course records: the teaching faculty id and the enrolled student ids.
///
/// `faculty_id` is stored as given; whether it names a real faculty member
/// is for the caller to decide.
#[derive(Default)]
pub struct CourseRegistry {
    store: RecordStore<Course>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            store: RecordStore::new(policy),
        }
    }

    pub fn add_course(&self, id: CourseId, name: &str, faculty_id: FacultyId) -> Result<()> {
        self.store.insert(Course::new(id, name, faculty_id))?;
        tracing::debug!(course_id = id, faculty_id, "course added");
        Ok(())
    }

    pub fn enroll_student(&self, course_id: CourseId, student_id: StudentId) -> Result<()> {
        self.store.update(course_id, |course| {
            course.students.insert(student_id);
        })
    }

    pub fn get_course_students(&self, course_id: CourseId) -> Result<BTreeSet<StudentId>> {
        self.store.read(course_id, |course| course.students.clone())
    }

    pub fn get_course_faculty(&self, course_id: CourseId) -> Result<FacultyId> {
        self.store.read(course_id, |course| course.faculty_id)
    }

    pub fn get_course(&self, course_id: CourseId) -> Result<Course> {
        self.store.get(course_id)
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.store.contains(course_id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn ids(&self) -> Vec<CourseId> {
        self.store.ids()
    }

    pub(crate) fn store(&self) -> &RecordStore<Course> {
        &self.store
    }
}
