//! REST
//!
//! Two remote services provide the catalogue. The taxonomy service lists muscles and equipment,
//! the exercise database lists and describes exercises. Only the exercise database requires
//! credentials, which are sent as request headers.

use fitflex_domain as domain;
use fitflex_web_app::Config;
use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

pub const HEADER_HOST: &str = "X-RapidAPI-Host";
pub const HEADER_KEY: &str = "X-RapidAPI-Key";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub endpoints: Endpoints,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sender: GlooNetSendRequest,
            endpoints: Endpoints::from(config),
        }
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch<T: DeserializeOwned>(
        &self,
        api: Api,
        url: Result<Url, url::ParseError>,
    ) -> Result<T, domain::ReadError> {
        let url = url.map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        let mut builder = Request::get(url.as_str());
        if api == Api::ExerciseDB {
            builder = builder
                .header(HEADER_HOST, &self.endpoints.exercise_db_host)
                .header(HEADER_KEY, &self.endpoints.rapid_api_key);
        }
        let request = builder
            .build()
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;

        let response = self.sender.send_request(request).await.map_err(|err| {
            debug!("failed to send request to {url}: {err}");
            domain::StorageError::NoConnection
        })?;

        if let Some(err) = api.classify(response.status()) {
            return Err(err.into());
        }

        response
            .json::<T>()
            .await
            .map_err(|err| domain::ReadError::MissingData(format!("{url}: {err}")))
    }
}

impl<S: SendRequest> domain::CatalogueRepository for REST<S> {
    async fn read_body_parts(&self) -> Result<Vec<domain::Category>, domain::ReadError> {
        let page: TaxonomyPage = self.fetch(Api::Taxonomy, self.endpoints.muscles()).await?;
        Ok(page.into())
    }

    async fn read_equipment(&self) -> Result<Vec<domain::Category>, domain::ReadError> {
        let page: TaxonomyPage = self.fetch(Api::Taxonomy, self.endpoints.equipment()).await?;
        Ok(page.into())
    }

    async fn read_exercises_by_category(
        &self,
        category_type: domain::CategoryType,
        category: &str,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let exercises: Vec<Exercise> = self
            .fetch(
                Api::ExerciseDB,
                self.endpoints
                    .exercises_by_category(category_type, category),
            )
            .await?;
        Ok(exercises.into_iter().map(domain::Exercise::from).collect())
    }

    async fn read_exercises_by_name(
        &self,
        term: &domain::SearchTerm,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let exercises: Vec<Exercise> = self
            .fetch(Api::ExerciseDB, self.endpoints.exercises_by_name(term))
            .await?;
        Ok(exercises.into_iter().map(domain::Exercise::from).collect())
    }

    async fn read_exercise(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        let exercise: Exercise = self
            .fetch(Api::ExerciseDB, self.endpoints.exercise(id))
            .await?;
        if exercise.id.trim().is_empty() {
            return Err(domain::ReadError::MissingData(format!("exercise {id}")));
        }
        Ok(exercise.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    ExerciseDB,
    Taxonomy,
}

impl Api {
    /// Map a response status to a storage error, or `None` for a successful response.
    ///
    /// Credential and rate limit errors are only reported by the exercise database.
    #[must_use]
    pub fn classify(self, status: u16) -> Option<domain::StorageError> {
        match (self, status) {
            (_, 200..=299) => None,
            (Api::ExerciseDB, 401 | 403) => Some(domain::StorageError::Unauthorized(status)),
            (Api::ExerciseDB, 429) => Some(domain::StorageError::RateLimited),
            _ => Some(domain::StorageError::Status(status)),
        }
    }
}

/// Request URLs of both services.
///
/// Path segments are percent-encoded. The base URLs are validated when the configuration is
/// loaded, a base URL that cannot be parsed anyway results in an error for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    exercise_db: String,
    exercise_db_host: String,
    rapid_api_key: String,
    taxonomy: String,
}

impl From<&Config> for Endpoints {
    fn from(config: &Config) -> Self {
        Self {
            exercise_db: config.exercise_db_url.clone(),
            exercise_db_host: config.exercise_db_host.clone(),
            rapid_api_key: config.rapid_api_key.clone(),
            taxonomy: config.taxonomy_url.clone(),
        }
    }
}

impl Endpoints {
    pub fn muscles(&self) -> Result<Url, url::ParseError> {
        join(&self.taxonomy, &["muscle", ""])
    }

    pub fn equipment(&self) -> Result<Url, url::ParseError> {
        join(&self.taxonomy, &["equipment", ""])
    }

    pub fn exercises_by_category(
        &self,
        category_type: domain::CategoryType,
        category: &str,
    ) -> Result<Url, url::ParseError> {
        join(
            &self.exercise_db,
            &["exercises", category_type.segment(), category],
        )
    }

    pub fn exercises_by_name(&self, term: &domain::SearchTerm) -> Result<Url, url::ParseError> {
        join(&self.exercise_db, &["exercises", "name", term.as_str()])
    }

    pub fn exercise(&self, id: &domain::ExerciseID) -> Result<Url, url::ParseError> {
        join(&self.exercise_db, &["exercises", "exercise", id.as_str()])
    }
}

fn join(base: &str, segments: &[&str]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub body_part: String,
    #[serde(default)]
    pub gif_url: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            id: value.id.into(),
            name: value.name,
            target: value.target,
            equipment: value.equipment,
            body_part: value.body_part,
            gif_url: value.gif_url,
            instructions: value.instructions,
            secondary_muscles: value.secondary_muscles,
        }
    }
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Exercise {
            id: value.id.to_string(),
            name: value.name,
            target: value.target,
            equipment: value.equipment,
            body_part: value.body_part,
            gif_url: value.gif_url,
            instructions: value.instructions,
            secondary_muscles: value.secondary_muscles,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl From<Category> for domain::Category {
    fn from(value: Category) -> Self {
        domain::Category {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyPage {
    pub results: Vec<Category>,
}

impl From<TaxonomyPage> for Vec<domain::Category> {
    fn from(value: TaxonomyPage) -> Self {
        value
            .results
            .into_iter()
            .map(domain::Category::from)
            .collect()
    }
}
