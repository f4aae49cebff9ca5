//! Exercise cache
//!
//! Single exercises are kept in a local store for a limited time. A lookup is answered from the
//! store while the stored entry is younger than the time-to-live; otherwise the exercise is
//! fetched again and the entry is replaced. Entries are never removed, expired entries are only
//! overwritten on the next successful fetch of the same exercise.
//!
//! In-flight requests are not de-duplicated. Concurrent lookups of the same exercise each fetch
//! and each write the store; the last successful fetch wins.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, error, warn};

use crate::{CacheError, Exercise, ExerciseID, ReadError};

pub const DEFAULT_TTL: TimeDelta = TimeDelta::hours(24);

pub trait ExerciseCacheRepository {
    fn read_cache_entry(&self, id: &ExerciseID) -> Result<Option<CacheEntry>, CacheError>;
    fn write_cache_entry(&self, id: &ExerciseID, entry: &CacheEntry) -> Result<(), CacheError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub exercise: Exercise,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ExerciseCache<R, C = SystemClock> {
    repository: R,
    clock: C,
    ttl: TimeDelta,
}

impl<R: ExerciseCacheRepository> ExerciseCache<R> {
    pub fn new(repository: R, ttl: TimeDelta) -> Self {
        Self::with_clock(repository, SystemClock, ttl)
    }
}

impl<R: ExerciseCacheRepository, C: Clock> ExerciseCache<R, C> {
    pub fn with_clock(repository: R, clock: C, ttl: TimeDelta) -> Self {
        Self {
            repository,
            clock,
            ttl,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// An entry is valid while it is younger than the time-to-live.
    pub fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.clock.now().signed_duration_since(entry.timestamp) >= self.ttl
    }

    /// Return the stored exercise if there is a valid entry for `id`.
    ///
    /// Entries that cannot be read are treated as absent.
    pub fn get(&self, id: &ExerciseID) -> Option<Exercise> {
        match self.repository.read_cache_entry(id) {
            Ok(Some(entry)) => {
                if self.is_expired(&entry) {
                    debug!("cache entry for exercise {id} expired");
                    None
                } else {
                    Some(entry.exercise)
                }
            }
            Ok(None) => None,
            Err(err) => {
                warn!("ignoring cache entry for exercise {id}: {err}");
                None
            }
        }
    }

    /// Store `exercise` under `id`, stamped with the current time.
    pub fn put(&self, id: &ExerciseID, exercise: &Exercise) -> Result<(), CacheError> {
        self.repository.write_cache_entry(
            id,
            &CacheEntry {
                exercise: exercise.clone(),
                timestamp: self.clock.now(),
            },
        )
    }

    /// Return the exercise from the cache or, if there is no valid entry, from `fetch`.
    ///
    /// A successful fetch replaces the stored entry. A failed fetch leaves the store untouched.
    /// Failing to write the store is logged and does not fail the lookup.
    pub async fn get_exercise<F, Fut>(
        &self,
        id: &ExerciseID,
        fetch: F,
    ) -> Result<Exercise, ReadError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Exercise, ReadError>>,
    {
        if let Some(exercise) = self.get(id) {
            return Ok(exercise);
        }

        let exercise = fetch().await?;

        if let Err(err) = self.put(id, &exercise) {
            error!("failed to write exercise {id} into cache: {err}");
        }

        Ok(exercise)
    }
}
