use log::{debug, error};

use crate::{
    Category, CategoryType, Exercise, ExerciseID, ExerciseListing, ReadError, SearchError,
    SearchTerm,
};

#[allow(async_fn_in_trait)]
pub trait CatalogueRepository {
    async fn read_body_parts(&self) -> Result<Vec<Category>, ReadError>;
    async fn read_equipment(&self) -> Result<Vec<Category>, ReadError>;
    async fn read_exercises_by_category(
        &self,
        category_type: CategoryType,
        category: &str,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_name(&self, term: &SearchTerm) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogueService {
    async fn get_body_parts(&self) -> Result<Vec<Category>, ReadError>;
    async fn get_equipment(&self) -> Result<Vec<Category>, ReadError>;
    async fn get_exercises_by_category(
        &self,
        category_type: CategoryType,
        category: &str,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn search_exercises(&self, term: &SearchTerm) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError>;

    async fn get_taxonomy(&self, category_type: CategoryType) -> Result<Vec<Category>, ReadError> {
        match category_type {
            CategoryType::BodyPart => self.get_body_parts().await,
            CategoryType::Equipment => self.get_equipment().await,
        }
    }

    async fn list_category(&self, category_type: CategoryType, category: &str) -> ExerciseListing {
        ExerciseListing::for_category(
            category,
            self.get_exercises_by_category(category_type, category)
                .await,
        )
    }

    /// Validate `input` and search for exercises by name.
    ///
    /// Invalid input is rejected before any request is made.
    async fn search(&self, input: &str) -> Result<ExerciseListing, SearchError> {
        let term = SearchTerm::new(input)?;
        Ok(ExerciseListing::for_search(
            self.search_exercises(&term).await,
        ))
    }
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: expr) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogueRepository> CatalogueService for Service<R> {
    async fn get_body_parts(&self) -> Result<Vec<Category>, ReadError> {
        log_on_error!(self.repository.read_body_parts(), "get", "body parts")
    }

    async fn get_equipment(&self) -> Result<Vec<Category>, ReadError> {
        log_on_error!(self.repository.read_equipment(), "get", "equipment")
    }

    async fn get_exercises_by_category(
        &self,
        category_type: CategoryType,
        category: &str,
    ) -> Result<Vec<Exercise>, ReadError> {
        let category = category.to_lowercase();
        log_on_error!(
            self.repository
                .read_exercises_by_category(category_type, &category),
            "get",
            format!("exercises for {category_type} {category}")
        )
    }

    async fn search_exercises(&self, term: &SearchTerm) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises_by_name(term),
            "search",
            format!("exercises named {term}")
        )
    }

    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        if id.is_empty() {
            return Err(ReadError::MissingData("exercise ID".to_string()));
        }
        log_on_error!(
            self.repository.read_exercise(id),
            "get",
            format!("exercise {id}")
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::StorageError;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        requests: RefCell<Vec<String>>,
        exercises: Vec<Exercise>,
        error: Option<u16>,
    }

    impl FakeRepository {
        fn record(&self, request: String) -> Result<(), ReadError> {
            self.requests.borrow_mut().push(request);
            match self.error {
                Some(401) => Err(StorageError::Unauthorized(401).into()),
                Some(429) => Err(StorageError::RateLimited.into()),
                Some(0) => Err(StorageError::NoConnection.into()),
                Some(status) => Err(StorageError::Status(status).into()),
                None => Ok(()),
            }
        }
    }

    impl CatalogueRepository for FakeRepository {
        async fn read_body_parts(&self) -> Result<Vec<Category>, ReadError> {
            self.record("muscle".to_string())?;
            Ok(CategoryType::BodyPart.categories())
        }

        async fn read_equipment(&self) -> Result<Vec<Category>, ReadError> {
            self.record("equipment".to_string())?;
            Ok(CategoryType::Equipment.categories())
        }

        async fn read_exercises_by_category(
            &self,
            category_type: CategoryType,
            category: &str,
        ) -> Result<Vec<Exercise>, ReadError> {
            self.record(format!("{category_type}/{category}"))?;
            Ok(self.exercises.clone())
        }

        async fn read_exercises_by_name(
            &self,
            term: &SearchTerm,
        ) -> Result<Vec<Exercise>, ReadError> {
            self.record(format!("name/{term}"))?;
            Ok(self.exercises.clone())
        }

        async fn read_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
            self.record(format!("exercise/{id}"))?;
            self.exercises
                .iter()
                .find(|e| e.id == *id)
                .cloned()
                .ok_or(ReadError::MissingData(format!("exercise {id}")))
        }
    }

    fn exercise() -> Exercise {
        Exercise {
            id: "0001".into(),
            name: "3/4 sit-up".to_string(),
            target: "abs".to_string(),
            equipment: "body weight".to_string(),
            body_part: "waist".to_string(),
            gif_url: String::new(),
            instructions: vec![],
            secondary_muscles: vec![],
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn test_search_with_blank_term_makes_no_request(#[case] input: &str) {
        let service = Service::new(FakeRepository::default());

        assert_eq!(block_on(service.search(input)), Err(SearchError::Empty));
        assert!(service.repository.requests.borrow().is_empty());
    }

    #[test]
    fn test_search() {
        let service = Service::new(FakeRepository {
            exercises: vec![exercise()],
            ..FakeRepository::default()
        });

        assert_eq!(
            block_on(service.search(" sit-up ")),
            Ok(ExerciseListing::Exercises(vec![exercise()]))
        );
        assert_eq!(*service.repository.requests.borrow(), vec!["name/sit-up"]);
    }

    #[test]
    fn test_search_without_results() {
        let service = Service::new(FakeRepository::default());

        assert_eq!(
            block_on(service.search("zzz")),
            Ok(ExerciseListing::Empty(
                "No exercises found. Try a different search term.".to_string()
            ))
        );
    }

    #[test]
    fn test_get_exercises_by_category_lowercases_category() {
        let service = Service::new(FakeRepository::default());

        block_on(service.get_exercises_by_category(CategoryType::Equipment, "Body Weight"))
            .unwrap();
        block_on(service.get_exercises_by_category(CategoryType::BodyPart, "UPPER LEGS")).unwrap();

        assert_eq!(
            *service.repository.requests.borrow(),
            vec!["equipment/body weight", "bodyPart/upper legs"]
        );
    }

    #[rstest]
    #[case(None, ExerciseListing::Empty("No exercises found for neck. Try selecting a different category.".to_string()))]
    #[case(Some(429), ExerciseListing::Error("API rate limit exceeded. Please try again later".to_string()))]
    #[case(Some(401), ExerciseListing::Error("API key error: Please check your API credentials".to_string()))]
    #[case(Some(0), ExerciseListing::Error("Failed to fetch exercises. Please try again later.".to_string()))]
    #[case(Some(500), ExerciseListing::Error("Failed to fetch exercises. Please try again later.".to_string()))]
    fn test_list_category(#[case] error: Option<u16>, #[case] expected: ExerciseListing) {
        let service = Service::new(FakeRepository {
            error,
            ..FakeRepository::default()
        });

        assert_eq!(
            block_on(service.list_category(CategoryType::BodyPart, "neck")),
            expected
        );
    }

    #[test]
    fn test_get_taxonomy() {
        let service = Service::new(FakeRepository::default());

        assert_eq!(
            block_on(service.get_taxonomy(CategoryType::BodyPart))
                .unwrap()
                .len(),
            10
        );
        assert_eq!(
            block_on(service.get_taxonomy(CategoryType::Equipment))
                .unwrap()
                .len(),
            28
        );
        assert_eq!(
            *service.repository.requests.borrow(),
            vec!["muscle", "equipment"]
        );
    }

    #[test]
    fn test_get_exercise() {
        let service = Service::new(FakeRepository {
            exercises: vec![exercise()],
            ..FakeRepository::default()
        });

        assert_eq!(
            block_on(service.get_exercise(&"0001".into())).unwrap(),
            exercise()
        );
        assert!(matches!(
            block_on(service.get_exercise(&"0002".into())),
            Err(ReadError::MissingData(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_get_exercise_with_blank_id_makes_no_request(#[case] id: &str) {
        let service = Service::new(FakeRepository {
            exercises: vec![exercise()],
            ..FakeRepository::default()
        });

        assert!(matches!(
            block_on(service.get_exercise(&id.into())),
            Err(ReadError::MissingData(_))
        ));
        assert!(service.repository.requests.borrow().is_empty());
    }
}
