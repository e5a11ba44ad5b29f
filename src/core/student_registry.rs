use crate::core::store::{DuplicatePolicy, RecordStore};
use crate::domain::model::{CourseId, Student, StudentId};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Owns student records and the course ids each student is enrolled in.
///
/// Enrolling here only touches the student's own set; the course side is
/// kept in step by [`University`](crate::core::university::University).
#[derive(Default)]
pub struct StudentRegistry {
    store: RecordStore<Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            store: RecordStore::new(policy),
        }
    }

    pub fn add_student(&self, id: StudentId, name: &str) -> Result<()> {
        self.store.insert(Student::new(id, name))?;
        tracing::debug!(student_id = id, "student added");
        Ok(())
    }

    /// Records `course_id` on the student. The course itself is not checked.
    pub fn enroll_in_course(&self, student_id: StudentId, course_id: CourseId) -> Result<()> {
        self.store.update(student_id, |student| {
            student.courses.insert(course_id);
        })
    }

    pub fn get_student_courses(&self, student_id: StudentId) -> Result<BTreeSet<CourseId>> {
        self.store.read(student_id, |student| student.courses.clone())
    }

    pub fn get_student(&self, student_id: StudentId) -> Result<Student> {
        self.store.get(student_id)
    }

    pub fn contains(&self, student_id: StudentId) -> bool {
        self.store.contains(student_id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn ids(&self) -> Vec<StudentId> {
        self.store.ids()
    }

    pub(crate) fn store(&self) -> &RecordStore<Student> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_has_no_courses() {
        let registry = StudentRegistry::new();
        registry.add_student(1, "Alice").unwrap();
        assert!(registry.get_student_courses(1).unwrap().is_empty());
    }

    #[test]
    fn test_enroll_is_idempotent() {
        let registry = StudentRegistry::new();
        registry.add_student(1, "Alice").unwrap();
        registry.enroll_in_course(1, 101).unwrap();
        registry.enroll_in_course(1, 101).unwrap();
        assert_eq!(
            registry.get_student_courses(1).unwrap(),
            BTreeSet::from([101])
        );
    }

    #[test]
    fn test_enroll_unknown_student_fails() {
        let registry = StudentRegistry::new();
        let err = registry.enroll_in_course(999, 101).unwrap_err();
        assert!(err.is_not_found());
        assert!(registry.get_student_courses(999).unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_add_rejected_by_default() {
        let registry = StudentRegistry::new();
        registry.add_student(1, "Alice").unwrap();
        assert!(registry.add_student(1, "Bob").is_err());
        assert_eq!(registry.get_student(1).unwrap().name, "Alice");
        assert_eq!(registry.len(), 1);
    }
}
