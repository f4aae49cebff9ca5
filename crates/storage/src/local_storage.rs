use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use fitflex_domain as domain;
use fitflex_web_app::log;
use gloo_storage::Storage as GlooStorage;
use serde::{Deserialize, Serialize};

use crate::rest;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

const KEY_LOG: &str = "log";
const KEY_PREFIX_EXERCISE: &str = "exercise_";

#[must_use]
pub fn exercise_key(id: &domain::ExerciseID) -> String {
    format!("{KEY_PREFIX_EXERCISE}{id}")
}

impl domain::ExerciseCacheRepository for LocalStorage {
    fn read_cache_entry(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<Option<domain::CacheEntry>, domain::CacheError> {
        match gloo_storage::LocalStorage::get::<CacheEntry>(exercise_key(id)) {
            Ok(entry) => domain::CacheEntry::try_from(entry).map(Some),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(None),
                err => Err(domain::CacheError::Read(err.to_string())),
            },
        }
    }

    fn write_cache_entry(
        &self,
        id: &domain::ExerciseID,
        entry: &domain::CacheEntry,
    ) -> Result<(), domain::CacheError> {
        gloo_storage::LocalStorage::set(exercise_key(id), CacheEntry::from(entry))
            .map_err(|err| domain::CacheError::Write(err.to_string()))
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::prepend(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

/// Persisted form of a cache entry.
///
/// The exercise is kept in the form returned by the exercise database, the timestamp in
/// milliseconds since the Unix epoch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub data: rest::Exercise,
    pub timestamp: i64,
}

impl From<&domain::CacheEntry> for CacheEntry {
    fn from(value: &domain::CacheEntry) -> Self {
        CacheEntry {
            data: value.exercise.clone().into(),
            timestamp: value.timestamp.timestamp_millis(),
        }
    }
}

impl TryFrom<CacheEntry> for domain::CacheEntry {
    type Error = domain::CacheError;

    fn try_from(value: CacheEntry) -> Result<Self, Self::Error> {
        let timestamp: DateTime<Utc> = DateTime::from_timestamp_millis(value.timestamp)
            .ok_or_else(|| {
                domain::CacheError::Read(format!("invalid timestamp {}", value.timestamp))
            })?;
        Ok(domain::CacheEntry {
            exercise: value.data.into(),
            timestamp,
        })
    }
}
