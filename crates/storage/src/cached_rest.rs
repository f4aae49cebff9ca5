//! Cached REST
//!
//! The remote services act as the authoritative data source. Single exercises are additionally
//! kept in a local cache, so that revisiting an exercise within the time-to-live of the cache
//! does not require a request. Lists and taxonomies are always requested.

use fitflex_domain as domain;
use fitflex_web_app::Config;

use super::local_storage::LocalStorage;
use super::rest::{GlooNetSendRequest, REST, SendRequest};

pub struct CachedREST<S: SendRequest, R = LocalStorage, C = domain::SystemClock> {
    pub rest: REST<S>,
    pub cache: domain::ExerciseCache<R, C>,
}

impl CachedREST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            rest: REST::new(config),
            cache: domain::ExerciseCache::new(LocalStorage, config.cache_ttl()),
        }
    }
}

impl<S, R, C> domain::CatalogueRepository for CachedREST<S, R, C>
where
    S: SendRequest,
    R: domain::ExerciseCacheRepository,
    C: domain::Clock,
{
    async fn read_body_parts(&self) -> Result<Vec<domain::Category>, domain::ReadError> {
        self.rest.read_body_parts().await
    }

    async fn read_equipment(&self) -> Result<Vec<domain::Category>, domain::ReadError> {
        self.rest.read_equipment().await
    }

    async fn read_exercises_by_category(
        &self,
        category_type: domain::CategoryType,
        category: &str,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.rest
            .read_exercises_by_category(category_type, category)
            .await
    }

    async fn read_exercises_by_name(
        &self,
        term: &domain::SearchTerm,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.rest.read_exercises_by_name(term).await
    }

    async fn read_exercise(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        self.cache
            .get_exercise(id, || self.rest.read_exercise(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use domain::CatalogueRepository;
    use futures::executor::block_on;
    use gloo_net::http::{Request, Response};
    use pretty_assertions::assert_eq;

    use crate::rest::Endpoints;

    use super::*;

    #[test]
    fn test_read_exercise_from_valid_cache_entry() {
        let cached_rest = cached_rest_with_response(None);
        cached_rest
            .cache
            .repository()
            .insert(exercise(), now() - TimeDelta::hours(23));

        assert_eq!(
            block_on(cached_rest.read_exercise(&"0025".into())).unwrap(),
            exercise()
        );
        assert!(cached_rest.rest.sender.request.borrow().is_none());
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use serde_json::json;
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::rest;

        use super::*;

        fn response() -> Option<Result<Response, gloo_net::Error>> {
            Some(
                Response::builder()
                    .status(200)
                    .json(&json!(rest::Exercise::from(exercise()))),
            )
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_without_cache_entry() {
            let cached_rest = cached_rest_with_response(response());

            assert_eq!(
                cached_rest.read_exercise(&"0025".into()).await.unwrap(),
                exercise()
            );
            assert!(cached_rest.rest.sender.request.borrow().is_some());
            assert_eq!(
                cached_rest
                    .cache
                    .repository()
                    .entries
                    .borrow()
                    .get(&domain::ExerciseID::from("0025")),
                Some(&domain::CacheEntry {
                    exercise: exercise(),
                    timestamp: now(),
                })
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_with_expired_cache_entry() {
            let cached_rest = cached_rest_with_response(response());
            let mut stale = exercise();
            stale.name = "bench press".to_string();
            cached_rest
                .cache
                .repository()
                .insert(stale, now() - TimeDelta::hours(24));

            assert_eq!(
                cached_rest.read_exercise(&"0025".into()).await.unwrap(),
                exercise()
            );
            assert_eq!(
                cached_rest
                    .cache
                    .repository()
                    .entries
                    .borrow()
                    .get(&domain::ExerciseID::from("0025"))
                    .map(|entry| entry.exercise.name.clone()),
                Some("barbell bench press".to_string())
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_failure_leaves_cache_untouched() {
            let cached_rest = cached_rest_with_response(None);

            assert!(matches!(
                cached_rest.read_exercise(&"0025".into()).await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
            assert!(cached_rest.cache.repository().entries.borrow().is_empty());
        }

        #[wasm_bindgen_test]
        async fn test_read_exercises_is_not_cached() {
            let cached_rest = cached_rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&json!([rest::Exercise::from(exercise())])),
            ));

            assert_eq!(
                cached_rest
                    .read_exercises_by_category(domain::CategoryType::Equipment, "barbell")
                    .await
                    .unwrap(),
                vec![exercise()]
            );
            assert!(cached_rest.cache.repository().entries.borrow().is_empty());
        }
    }

    fn exercise() -> domain::Exercise {
        domain::Exercise {
            id: "0025".into(),
            name: "barbell bench press".to_string(),
            target: "pectorals".to_string(),
            equipment: "barbell".to_string(),
            body_part: "chest".to_string(),
            gif_url: String::new(),
            instructions: vec![],
            secondary_muscles: vec![],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn cached_rest_with_response(
        response: Option<Result<Response, gloo_net::Error>>,
    ) -> CachedREST<MockSendRequest, InMemory, FixedClock> {
        let sender = MockSendRequest {
            request: RefCell::new(None),
            response: RefCell::new(response),
        };
        let config = Config {
            rapid_api_key: "secret".to_string(),
            ..Config::default()
        };
        CachedREST {
            rest: REST {
                sender,
                endpoints: Endpoints::from(&config),
            },
            cache: domain::ExerciseCache::with_clock(
                InMemory::default(),
                FixedClock(now()),
                config.cache_ttl(),
            ),
        }
    }

    #[derive(Default)]
    struct InMemory {
        entries: RefCell<HashMap<domain::ExerciseID, domain::CacheEntry>>,
    }

    impl InMemory {
        fn insert(&self, exercise: domain::Exercise, timestamp: DateTime<Utc>) {
            self.entries.borrow_mut().insert(
                exercise.id.clone(),
                domain::CacheEntry {
                    exercise,
                    timestamp,
                },
            );
        }
    }

    impl domain::ExerciseCacheRepository for InMemory {
        fn read_cache_entry(
            &self,
            id: &domain::ExerciseID,
        ) -> Result<Option<domain::CacheEntry>, domain::CacheError> {
            Ok(self.entries.borrow().get(id).cloned())
        }

        fn write_cache_entry(
            &self,
            id: &domain::ExerciseID,
            entry: &domain::CacheEntry,
        ) -> Result<(), domain::CacheError> {
            self.entries.borrow_mut().insert(id.clone(), entry.clone());
            Ok(())
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl domain::Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct MockSendRequest {
        request: RefCell<Option<Request>>,
        response: RefCell<Option<Result<Response, gloo_net::Error>>>,
    }

    impl SendRequest for MockSendRequest {
        async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
            *self.request.borrow_mut() = Some(request);
            (*self.response.borrow_mut())
                .take()
                .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
        }
    }
}
