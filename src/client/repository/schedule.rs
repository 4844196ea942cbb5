//! Class scheduling: the people a class can be assigned to, and class creation.

use crate::client::api::envelope::{CreateClassResponse, PeopleResponse};
use crate::client::api::{endpoints, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::shared::models::{ClassDraft, ClassSession, Person};
use crate::shared::{ClientError, Outcome};

const PROFESSORS_FALLBACK: &str = "Error al obtener profesores";
const STUDENTS_FALLBACK: &str = "Error al obtener estudiantes";
const CREATE_CLASS_FALLBACK: &str = "Error al crear la clase";

#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    gateway: Gateway,
}

impl ScheduleRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn professors(&self) -> Outcome<Vec<Person>> {
        let result = self
            .gateway
            .fetch::<PeopleResponse>(&endpoints::professors(), RequestBody::Empty, PROFESSORS_FALLBACK)
            .await;
        settle("professors", result)
    }

    pub async fn students(&self) -> Outcome<Vec<Person>> {
        let result = self
            .gateway
            .fetch::<PeopleResponse>(&endpoints::students(), RequestBody::Empty, STUDENTS_FALLBACK)
            .await;
        settle("students", result)
    }

    /// Create a class. Date and time are normalised to `yyyy-mm-dd` and
    /// `HH:MM` where they can be parsed.
    ///
    /// The created class is `None` when the backend only acknowledges.
    pub async fn create_class(&self, draft: ClassDraft) -> Outcome<Option<ClassSession>> {
        settle("create_class", self.try_create_class(draft).await)
    }

    async fn try_create_class(&self, draft: ClassDraft) -> Result<Option<ClassSession>, ClientError> {
        let request = draft.into_request();
        tracing::debug!(
            "Creating class {:?} on {} at {} for {} students",
            request.name,
            request.date,
            request.time,
            request.students.len()
        );
        let body = RequestBody::json(&request)?;
        self.gateway
            .fetch::<CreateClassResponse>(&endpoints::create_class(), body, CREATE_CLASS_FALLBACK)
            .await
    }
}
