use crate::core::store::{DuplicatePolicy, RecordStore};
use crate::domain::model::{CourseId, EntityKind, Faculty, FacultyId, UNASSIGNED_FACULTY};
use crate::utils::error::{RegistryError, Result};
use std::collections::BTreeSet;

/// Owns faculty records and the course ids each member teaches.
#[derive(Default)]
pub struct FacultyRegistry {
    store: RecordStore<Faculty>,
}

impl FacultyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            store: RecordStore::new(policy),
        }
    }

    pub fn add_faculty(&self, id: FacultyId, name: &str) -> Result<()> {
        check_faculty_id(id)?;
        self.store.insert(Faculty::new(id, name))?;
        tracing::debug!(faculty_id = id, "faculty added");
        Ok(())
    }

    pub fn assign_course(&self, faculty_id: FacultyId, course_id: CourseId) -> Result<()> {
        self.store.update(faculty_id, |faculty| {
            faculty.courses.insert(course_id);
        })
    }

    pub fn get_faculty_courses(&self, faculty_id: FacultyId) -> Result<BTreeSet<CourseId>> {
        self.store.read(faculty_id, |faculty| faculty.courses.clone())
    }

    pub fn get_faculty(&self, faculty_id: FacultyId) -> Result<Faculty> {
        self.store.get(faculty_id)
    }

    pub fn contains(&self, faculty_id: FacultyId) -> bool {
        self.store.contains(faculty_id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn ids(&self) -> Vec<FacultyId> {
        self.store.ids()
    }

    pub(crate) fn store(&self) -> &RecordStore<Faculty> {
        &self.store
    }
}

/// Id `0` marks an unassigned course and can never name a faculty member.
pub(crate) fn check_faculty_id(id: FacultyId) -> Result<()> {
    if id == UNASSIGNED_FACULTY {
        return Err(RegistryError::ReservedId {
            kind: EntityKind::Faculty,
            id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_course() {
        let registry = FacultyRegistry::new();
        registry.add_faculty(9, "Dr. Smith").unwrap();
        registry.assign_course(9, 101).unwrap();
        registry.assign_course(9, 102).unwrap();
        registry.assign_course(9, 101).unwrap();
        assert_eq!(
            registry.get_faculty_courses(9).unwrap(),
            BTreeSet::from([101, 102])
        );
    }

    #[test]
    fn test_assign_unknown_faculty_fails() {
        let registry = FacultyRegistry::new();
        assert!(registry.assign_course(9, 101).unwrap_err().is_not_found());
        assert!(registry.get_faculty_courses(9).unwrap_err().is_not_found());
    }

    #[test]
    fn test_unassigned_id_is_reserved() {
        let registry = FacultyRegistry::new();
        let err = registry.add_faculty(UNASSIGNED_FACULTY, "Nobody").unwrap_err();
        assert!(matches!(err, RegistryError::ReservedId { id: 0, .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_overwrite_policy_resets_courses() {
        let registry = FacultyRegistry::with_policy(DuplicatePolicy::Overwrite);
        registry.add_faculty(9, "Dr. Smith").unwrap();
        registry.assign_course(9, 101).unwrap();
        registry.add_faculty(9, "Dr. Jones").unwrap();

        let faculty = registry.get_faculty(9).unwrap();
        assert_eq!(faculty.name, "Dr. Jones");
        assert!(faculty.courses.is_empty());
    }
}
