use std::sync::Arc;

use tracing::{debug, instrument};

use models::person::{Person, PersonInput};

use crate::errors::ServiceError;
use crate::person::repository::PersonRepository;

/// `LIKE` pattern for a name search. A missing name yields `%%`, which matches
/// every row.
pub fn like_pattern(name: Option<&str>) -> String {
    format!("%{}%", name.unwrap_or_default())
}

/// The six persons operations. No validation and no re-reads: each call is a
/// single repository statement plus a mapping of its result.
#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        let persons = self.repo.list().await?;
        debug!(count = persons.len(), "listed persons");
        Ok(persons)
    }

    pub async fn get(&self, id: i32) -> Result<Person, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("person", id))
    }

    #[instrument(skip(self))]
    pub async fn search(&self, name: Option<&str>) -> Result<Vec<Person>, ServiceError> {
        self.repo.search(&like_pattern(name)).await
    }

    /// Insert and return the payload with the storage-generated id.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: PersonInput) -> Result<Person, ServiceError> {
        let id = self.repo.insert(&input).await?;
        Ok(input.into_person(id))
    }

    /// The returned person echoes `input` with the path id; the row is not
    /// read back.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: PersonInput) -> Result<Person, ServiceError> {
        match self.repo.update(id, &input).await? {
            0 => Err(ServiceError::not_found("person", id)),
            _ => Ok(input.into_person(id)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await? {
            0 => Err(ServiceError::not_found("person", id)),
            _ => Ok(()),
        }
    }
}
