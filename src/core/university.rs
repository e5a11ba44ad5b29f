//! Facade over the student, faculty and course registries.
//!
//! Relationship operations keep both sides of each link in step. They hold
//! the write locks of every registry they touch, always acquired in the order
//! students, faculty, courses.

use crate::config::toml_config::UniversityConfig;
use crate::core::course_registry::CourseRegistry;
use crate::core::faculty_registry::{check_faculty_id, FacultyRegistry};
use crate::core::store::{lookup, lookup_mut, DuplicatePolicy};
use crate::core::student_registry::StudentRegistry;
use crate::domain::model::{
    Course, CourseId, EntityKind, Faculty, FacultyId, Student, StudentId, UNASSIGNED_FACULTY,
};
use crate::utils::error::{RegistryError, Result};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacadeOptions {
    /// Reject `add_course` when a non-zero faculty id is not registered.
    pub strict_faculty_references: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub students: usize,
    pub faculty: usize,
    pub courses: usize,
}

#[derive(Default)]
pub struct University {
    students: StudentRegistry,
    faculty: FacultyRegistry,
    courses: CourseRegistry,
    options: FacadeOptions,
}

impl University {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &UniversityConfig) -> Self {
        let policy = config.registry.duplicate_ids;
        Self::from_parts(
            StudentRegistry::with_policy(policy),
            FacultyRegistry::with_policy(policy),
            CourseRegistry::with_policy(policy),
            FacadeOptions {
                strict_faculty_references: config.facade.strict_faculty_references,
            },
        )
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::from_parts(
            StudentRegistry::with_policy(policy),
            FacultyRegistry::with_policy(policy),
            CourseRegistry::with_policy(policy),
            FacadeOptions::default(),
        )
    }

    pub fn from_parts(
        students: StudentRegistry,
        faculty: FacultyRegistry,
        courses: CourseRegistry,
        options: FacadeOptions,
    ) -> Self {
        Self {
            students,
            faculty,
            courses,
            options,
        }
    }

    pub fn student_ids(&self) -> Vec<StudentId> {
        self.students.ids()
    }

    pub fn faculty_ids(&self) -> Vec<FacultyId> {
        self.faculty.ids()
    }

    pub fn course_ids(&self) -> Vec<CourseId> {
        self.courses.ids()
    }

    pub fn options(&self) -> FacadeOptions {
        self.options
    }

    pub fn add_student(&self, student_id: StudentId, name: &str) -> Result<()> {
        let store = self.students.store();
        let mut students = store.write_guard();
        let mut courses = self.courses.store().write_guard();

        let replaced = store
            .insert_locked(&mut students, Student::new(student_id, name))
            .inspect_err(|e| tracing::warn!("add_student rejected: {}", e))?;
        if let Some(old) = replaced {
            for course_id in &old.courses {
                if let Some(course) = courses.get_mut(course_id) {
                    course.students.remove(&student_id);
                }
            }
            tracing::debug!(student_id, "student record overwritten");
        }

        tracing::debug!(student_id, "student added");
        Ok(())
    }

    /// Enrolls the student in the course, updating both records.
    pub fn enroll_in_course(&self, student_id: StudentId, course_id: CourseId) -> Result<()> {
        self.enroll(student_id, course_id, EntityKind::Student)
    }

    /// Same as [`Self::enroll_in_course`], addressed from the course side:
    /// a missing course is reported ahead of a missing student.
    pub fn enroll_student(&self, course_id: CourseId, student_id: StudentId) -> Result<()> {
        self.enroll(student_id, course_id, EntityKind::Course)
    }

    fn enroll(&self, student_id: StudentId, course_id: CourseId, subject: EntityKind) -> Result<()> {
        let mut students = self.students.store().write_guard();
        let mut courses = self.courses.store().write_guard();

        let link = (
            lookup_mut(&mut *students, student_id),
            lookup_mut(&mut *courses, course_id),
        );
        let rejection = match link {
            (Ok(student), Ok(course)) => {
                student.courses.insert(course_id);
                course.students.insert(student_id);
                None
            }
            (Err(student_err), Err(course_err)) => Some(match subject {
                EntityKind::Course => course_err,
                _ => student_err,
            }),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Some(e),
        };
        if let Some(e) = rejection {
            tracing::warn!(student_id, course_id, "enrollment rejected: {}", e);
            return Err(e);
        }

        tracing::debug!(student_id, course_id, "student enrolled");
        Ok(())
    }

    pub fn get_student_courses(&self, student_id: StudentId) -> Result<BTreeSet<CourseId>> {
        self.students.get_student_courses(student_id)
    }

    /// Adds a faculty member. Courses that already name `faculty_id` as
    /// their teacher are picked up into the new record's taught set.
    pub fn add_faculty(&self, faculty_id: FacultyId, name: &str) -> Result<()> {
        check_faculty_id(faculty_id)
            .inspect_err(|e| tracing::warn!("add_faculty rejected: {}", e))?;
        let store = self.faculty.store();
        let mut faculty = store.write_guard();
        let mut courses = self.courses.store().write_guard();

        let replaced = store
            .insert_locked(&mut faculty, Faculty::new(faculty_id, name))
            .inspect_err(|e| tracing::warn!("add_faculty rejected: {}", e))?;
        if let Some(old) = replaced {
            for course_id in &old.courses {
                if let Some(course) = courses.get_mut(course_id) {
                    if course.faculty_id == faculty_id {
                        course.faculty_id = UNASSIGNED_FACULTY;
                    }
                }
            }
            tracing::debug!(faculty_id, "faculty record overwritten");
        }

        let taught: Vec<CourseId> = courses
            .values()
            .filter(|course| course.faculty_id == faculty_id)
            .map(|course| course.id)
            .collect();
        if !taught.is_empty() {
            lookup_mut(&mut *faculty, faculty_id)?.courses.extend(&taught);
            tracing::debug!(
                faculty_id,
                courses = taught.len(),
                "faculty linked to existing courses"
            );
        }

        tracing::debug!(faculty_id, "faculty added");
        Ok(())
    }

    /// Makes `faculty_id` the teacher of `course_id`.
    ///
    /// A course has one teacher, so a previous teacher loses the course from
    /// their taught set.
    pub fn assign_course(&self, faculty_id: FacultyId, course_id: CourseId) -> Result<()> {
        let mut faculty = self.faculty.store().write_guard();
        let mut courses = self.courses.store().write_guard();

        let reject = |e: &RegistryError| {
            tracing::warn!(faculty_id, course_id, "assignment rejected: {}", e)
        };
        if let Err(e) = lookup(&*faculty, faculty_id) {
            reject(&e);
            return Err(e);
        }
        let course = lookup_mut(&mut *courses, course_id).inspect_err(reject)?;

        let previous = std::mem::replace(&mut course.faculty_id, faculty_id);
        if previous != faculty_id {
            if let Some(previous_faculty) = faculty.get_mut(&previous) {
                previous_faculty.courses.remove(&course_id);
                tracing::debug!(course_id, previous, "course reassigned");
            }
        }
        lookup_mut(&mut *faculty, faculty_id)?
            .courses
            .insert(course_id);

        tracing::debug!(faculty_id, course_id, "course assigned");
        Ok(())
    }

    pub fn get_faculty_courses(&self, faculty_id: FacultyId) -> Result<BTreeSet<CourseId>> {
        self.faculty.get_faculty_courses(faculty_id)
    }

    /// Adds a course. When `faculty_id` names a registered faculty member the
    /// course is also added to their taught set.
    pub fn add_course(&self, course_id: CourseId, name: &str, faculty_id: FacultyId) -> Result<()> {
        let mut students = self.students.store().write_guard();
        let mut faculty = self.faculty.store().write_guard();
        let store = self.courses.store();
        let mut courses = store.write_guard();

        if faculty_id != UNASSIGNED_FACULTY && !faculty.contains_key(&faculty_id) {
            if self.options.strict_faculty_references {
                let err = RegistryError::not_found(EntityKind::Faculty, faculty_id);
                tracing::warn!(course_id, "add_course rejected: {}", err);
                return Err(err);
            }
            tracing::warn!(course_id, faculty_id, "course references unregistered faculty");
        }

        let replaced = store
            .insert_locked(&mut courses, Course::new(course_id, name, faculty_id))
            .inspect_err(|e| tracing::warn!("add_course rejected: {}", e))?;
        if let Some(old) = replaced {
            for student_id in &old.students {
                if let Some(student) = students.get_mut(student_id) {
                    student.courses.remove(&course_id);
                }
            }
            if let Some(old_teacher) = faculty.get_mut(&old.faculty_id) {
                old_teacher.courses.remove(&course_id);
            }
            tracing::debug!(course_id, "course record overwritten");
        }

        if let Some(teacher) = faculty.get_mut(&faculty_id) {
            teacher.courses.insert(course_id);
        }

        tracing::debug!(course_id, faculty_id, "course added");
        Ok(())
    }

    pub fn get_course_students(&self, course_id: CourseId) -> Result<BTreeSet<StudentId>> {
        self.courses.get_course_students(course_id)
    }

    pub fn get_student(&self, student_id: StudentId) -> Result<Student> {
        self.students.get_student(student_id)
    }

    pub fn get_faculty(&self, faculty_id: FacultyId) -> Result<Faculty> {
        self.faculty.get_faculty(faculty_id)
    }

    pub fn get_course(&self, course_id: CourseId) -> Result<Course> {
        self.courses.get_course(course_id)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            students: self.students.len(),
            faculty: self.faculty.len(),
            courses: self.courses.len(),
        }
    }
}
