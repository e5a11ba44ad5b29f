//! Lock-guarded keyed storage shared by the three registries.
//!
//! Each [`RecordStore`] owns one `HashMap` behind a `parking_lot::RwLock`:
//! lookups take the shared lock and may run in parallel, mutations take the
//! exclusive lock for the duration of a single map operation.

use crate::domain::ports::Record;
use crate::utils::error::{RegistryError, Result};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub(crate) type Records<R> = HashMap<u32, R>;

/// What happens when a record is added under an id that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `AlreadyExists` and keep the existing record.
    #[default]
    Reject,
    /// Replace the existing record, dropping its relationship set.
    Overwrite,
}

pub struct RecordStore<R: Record> {
    records: RwLock<Records<R>>,
    policy: DuplicatePolicy,
}

impl<R: Record> RecordStore<R> {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts `record`, returning the record it replaced under `Overwrite`.
    pub fn insert(&self, record: R) -> Result<Option<R>> {
        let mut records = self.records.write();
        self.insert_locked(&mut records, record)
    }

    /// Runs `f` against the record under the exclusive lock.
    pub fn update<T>(&self, id: u32, f: impl FnOnce(&mut R) -> T) -> Result<T> {
        let mut records = self.records.write();
        lookup_mut(&mut *records, id).map(f)
    }

    /// Runs `f` against the record under the shared lock.
    pub fn read<T>(&self, id: u32, f: impl FnOnce(&R) -> T) -> Result<T> {
        let records = self.records.read();
        lookup(&*records, id).map(f)
    }

    pub fn get(&self, id: u32) -> Result<R> {
        self.read(id, R::clone)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// All ids currently stored, ascending.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.records.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub(crate) fn read_guard(&self) -> RwLockReadGuard<'_, Records<R>> {
        self.records.read()
    }

    pub(crate) fn write_guard(&self) -> RwLockWriteGuard<'_, Records<R>> {
        self.records.write()
    }

    /// Insert against a map the caller has already locked through [`Self::write_guard`].
    pub(crate) fn insert_locked(&self, records: &mut Records<R>, record: R) -> Result<Option<R>> {
        let id = record.id();
        if records.contains_key(&id) && self.policy == DuplicatePolicy::Reject {
            return Err(RegistryError::already_exists(R::KIND, id));
        }
        Ok(records.insert(id, record))
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

pub(crate) fn lookup<R: Record>(records: &Records<R>, id: u32) -> Result<&R> {
    records
        .get(&id)
        .ok_or_else(|| RegistryError::not_found(R::KIND, id))
}

pub(crate) fn lookup_mut<R: Record>(records: &mut Records<R>, id: u32) -> Result<&mut R> {
    records
        .get_mut(&id)
        .ok_or_else(|| RegistryError::not_found(R::KIND, id))
}
