use std::collections::BTreeSet;
use university_registry::{
    CourseRegistry, DuplicatePolicy, EntityKind, FacadeOptions, FacultyRegistry, RegistryError,
    StudentRegistry, University, UNASSIGNED_FACULTY,
};

/// Every link recorded on one side of a relationship is recorded on the other.
fn assert_links_symmetric(university: &University) {
    for student_id in university.student_ids() {
        for course_id in university.get_student_courses(student_id).unwrap() {
            assert!(
                university
                    .get_course_students(course_id)
                    .unwrap()
                    .contains(&student_id),
                "course {} is missing student {}",
                course_id,
                student_id
            );
        }
    }
    for faculty_id in university.faculty_ids() {
        for course_id in university.get_faculty_courses(faculty_id).unwrap() {
            assert_eq!(
                university.get_course(course_id).unwrap().faculty_id,
                faculty_id,
                "course {} does not name faculty {}",
                course_id,
                faculty_id
            );
        }
    }
    for course_id in university.course_ids() {
        for student_id in university.get_course_students(course_id).unwrap() {
            assert!(university
                .get_student_courses(student_id)
                .unwrap()
                .contains(&course_id));
        }
        let teacher = university.get_course(course_id).unwrap().faculty_id;
        if let Ok(taught) = university.get_faculty_courses(teacher) {
            assert!(
                taught.contains(&course_id),
                "faculty {} is missing course {}",
                teacher,
                course_id
            );
        }
    }
}

#[test]
fn test_student_enrollment_scenario() {
    let university = University::new();
    university.add_student(1, "Alice").unwrap();
    university.add_course(101, "CS101", 9).unwrap();
    university.enroll_in_course(1, 101).unwrap();

    assert_eq!(university.get_student_courses(1).unwrap(), BTreeSet::from([101]));
}

#[test]
fn test_faculty_assignment_scenario() {
    let university = University::new();
    university.add_faculty(9, "Dr. Smith").unwrap();
    university.add_course(101, "CS101", 9).unwrap();
    university.assign_course(9, 101).unwrap();

    assert_eq!(university.get_faculty_courses(9).unwrap(), BTreeSet::from([101]));
    assert_eq!(university.get_course(101).unwrap().faculty_id, 9);
}

#[test]
fn test_enroll_unknown_student_is_not_found() {
    let university = University::new();
    university.add_course(101, "CS101", 9).unwrap();

    let err = university.enroll_in_course(999, 101).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::NotFound {
            kind: EntityKind::Student,
            id: 999
        }
    ));
    assert!(university.get_course_students(101).unwrap().is_empty());
}

#[test]
fn test_new_records_start_empty() {
    let university = University::new();
    for id in [1, 2, 3] {
        university.add_student(id, "student").unwrap();
        university.add_faculty(id, "faculty").unwrap();
        university
            .add_course(id, "course", UNASSIGNED_FACULTY)
            .unwrap();
        assert!(university.get_student_courses(id).unwrap().is_empty());
        assert!(university.get_faculty_courses(id).unwrap().is_empty());
        assert!(university.get_course_students(id).unwrap().is_empty());
    }
}

#[test]
fn test_lookups_on_missing_ids_fail() {
    let university = University::new();
    assert!(university.get_student_courses(1).unwrap_err().is_not_found());
    assert!(university.get_faculty_courses(1).unwrap_err().is_not_found());
    assert!(university.get_course_students(1).unwrap_err().is_not_found());
    assert!(university.assign_course(1, 1).unwrap_err().is_not_found());
}

#[test]
fn test_repeated_enrollment_is_idempotent() {
    let university = University::new();
    university.add_student(1, "Alice").unwrap();
    university.add_course(101, "CS101", UNASSIGNED_FACULTY).unwrap();

    university.enroll_in_course(1, 101).unwrap();
    university.enroll_student(101, 1).unwrap();
    university.enroll_in_course(1, 101).unwrap();

    assert_eq!(university.get_student_courses(1).unwrap().len(), 1);
    assert_eq!(university.get_course_students(101).unwrap().len(), 1);
}

#[test]
fn test_relationships_stay_symmetric() {
    let university = University::new();
    for id in 1..=4 {
        university.add_student(id, &format!("student-{}", id)).unwrap();
    }
    university.add_faculty(9, "Dr. Smith").unwrap();
    university.add_faculty(10, "Dr. Jones").unwrap();
    for id in 101..=103 {
        university.add_course(id, &format!("course-{}", id), 9).unwrap();
    }

    university.enroll_in_course(1, 101).unwrap();
    university.enroll_in_course(1, 102).unwrap();
    university.enroll_student(103, 2).unwrap();
    university.enroll_in_course(3, 101).unwrap();
    university.assign_course(10, 102).unwrap();

    assert_links_symmetric(&university);
    assert_eq!(university.get_faculty_courses(9).unwrap(), BTreeSet::from([101, 103]));
    assert_eq!(university.get_faculty_courses(10).unwrap(), BTreeSet::from([102]));
}

#[test]
fn test_per_registry_enrollment_is_one_sided() {
    let students = StudentRegistry::new();
    let courses = CourseRegistry::new();
    students.add_student(1, "Alice").unwrap();
    courses.add_course(101, "CS101", 9).unwrap();

    students.enroll_in_course(1, 101).unwrap();

    assert!(students.get_student_courses(1).unwrap().contains(&101));
    assert!(courses.get_course_students(101).unwrap().is_empty());
}

#[test]
fn test_registries_compose_into_facade() {
    let students = StudentRegistry::new();
    students.add_student(1, "Alice").unwrap();
    let university = University::from_parts(
        students,
        FacultyRegistry::new(),
        CourseRegistry::new(),
        FacadeOptions::default(),
    );

    assert_eq!(university.get_student(1).unwrap().name, "Alice");
    assert_eq!(university.summary().students, 1);
}

#[test]
fn test_independent_universities_do_not_share_state() {
    let north = University::new();
    let south = University::new();
    north.add_student(1, "Alice").unwrap();

    assert!(north.get_student_courses(1).is_ok());
    assert!(south.get_student_courses(1).unwrap_err().is_not_found());
}

#[test]
fn test_duplicate_ids_rejected_by_default() {
    let university = University::new();
    university.add_student(1, "Alice").unwrap();
    university.add_course(101, "CS101", UNASSIGNED_FACULTY).unwrap();
    university.enroll_in_course(1, 101).unwrap();

    let err = university.add_student(1, "Impostor").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::AlreadyExists {
            kind: EntityKind::Student,
            id: 1
        }
    ));
    assert_eq!(university.get_student(1).unwrap().name, "Alice");
    assert_eq!(university.get_course_students(101).unwrap(), BTreeSet::from([1]));
}

#[test]
fn test_overwrite_policy_replaces_and_unlinks() {
    let university = University::with_policy(DuplicatePolicy::Overwrite);
    university.add_student(1, "Alice").unwrap();
    university.add_course(101, "CS101", UNASSIGNED_FACULTY).unwrap();
    university.enroll_in_course(1, 101).unwrap();

    university.add_student(1, "Alice Again").unwrap();

    assert_eq!(university.get_student(1).unwrap().name, "Alice Again");
    assert!(university.get_student_courses(1).unwrap().is_empty());
    assert!(university.get_course_students(101).unwrap().is_empty());
}

#[test]
fn test_course_added_before_its_faculty() {
    let university = University::new();
    university.add_course(101, "CS101", 9).unwrap();
    university.add_course(102, "CS102", 9).unwrap();
    university.add_faculty(9, "Dr. Smith").unwrap();

    assert_eq!(university.get_faculty_courses(9).unwrap(), BTreeSet::from([101, 102]));
    assert_eq!(university.get_course(101).unwrap().faculty_id, 9);
    assert_links_symmetric(&university);
}

#[test]
fn test_dangling_teacher_replaced_by_assignment() {
    let university = University::new();
    university.add_faculty(10, "Dr. Jones").unwrap();
    university.add_course(101, "CS101", 9).unwrap();
    university.assign_course(10, 101).unwrap();

    university.add_faculty(9, "Dr. Smith").unwrap();

    assert!(university.get_faculty_courses(9).unwrap().is_empty());
    assert_eq!(university.get_faculty_courses(10).unwrap(), BTreeSet::from([101]));
    assert_links_symmetric(&university);
}

#[test]
fn test_reassignment_after_faculty_overwrite() {
    let university = University::with_policy(DuplicatePolicy::Overwrite);
    university.add_faculty(9, "Dr. Smith").unwrap();
    university.add_faculty(10, "Dr. Jones").unwrap();
    university.add_course(101, "CS101", 9).unwrap();

    university.add_faculty(9, "Dr. Smith Jr.").unwrap();
    assert!(!university.get_course(101).unwrap().has_faculty());
    assert_links_symmetric(&university);

    university.assign_course(10, 101).unwrap();
    university.assign_course(9, 101).unwrap();

    assert_eq!(university.get_faculty_courses(9).unwrap(), BTreeSet::from([101]));
    assert!(university.get_faculty_courses(10).unwrap().is_empty());
    assert_links_symmetric(&university);
}

#[test]
fn test_reassignment_after_course_overwrite() {
    let university = University::with_policy(DuplicatePolicy::Overwrite);
    university.add_student(1, "Alice").unwrap();
    university.add_faculty(9, "Dr. Smith").unwrap();
    university.add_faculty(10, "Dr. Jones").unwrap();
    university.add_course(101, "CS101", 9).unwrap();
    university.enroll_in_course(1, 101).unwrap();

    university.add_course(101, "CS101 (revised)", 10).unwrap();
    university.assign_course(9, 101).unwrap();
    university.enroll_student(101, 1).unwrap();

    assert_eq!(university.get_faculty_courses(9).unwrap(), BTreeSet::from([101]));
    assert!(university.get_faculty_courses(10).unwrap().is_empty());
    assert_eq!(university.get_course_students(101).unwrap(), BTreeSet::from([1]));
    assert_links_symmetric(&university);
}

#[test]
fn test_faculty_id_zero_is_reserved() {
    let university = University::new();
    let err = university.add_faculty(UNASSIGNED_FACULTY, "Nobody").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::ReservedId {
            kind: EntityKind::Faculty,
            id: 0
        }
    ));

    university.add_course(101, "CS101", UNASSIGNED_FACULTY).unwrap();
    assert!(!university.get_course(101).unwrap().has_faculty());
    assert!(university.faculty_ids().is_empty());
    assert!(university
        .assign_course(UNASSIGNED_FACULTY, 101)
        .unwrap_err()
        .is_not_found());
    assert_links_symmetric(&university);
}

#[test]
fn test_enroll_reports_primary_subject_first() {
    let university = University::new();

    let from_student = university.enroll_in_course(1, 101).unwrap_err();
    assert!(matches!(
        from_student,
        RegistryError::NotFound {
            kind: EntityKind::Student,
            id: 1
        }
    ));

    let from_course = university.enroll_student(101, 1).unwrap_err();
    assert!(matches!(
        from_course,
        RegistryError::NotFound {
            kind: EntityKind::Course,
            id: 101
        }
    ));
}
