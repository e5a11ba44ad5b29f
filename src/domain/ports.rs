use crate::domain::model::{Course, EntityKind, Faculty, Student};

/// A record that can live in a [`RecordStore`](crate::core::store::RecordStore).
pub trait Record: Clone + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> u32;
}

impl Record for Student {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Faculty {
    const KIND: EntityKind = EntityKind::Faculty;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Course {
    const KIND: EntityKind = EntityKind::Course;

    fn id(&self) -> u32 {
        self.id
    }
}
