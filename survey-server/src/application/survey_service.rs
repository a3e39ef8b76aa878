use async_trait::async_trait;

use crate::data::survey_repository::SurveyRepository;
use crate::domain::error::DomainError;
use crate::domain::surveyor::{SurveyorFilter, Surveyors};

#[async_trait]
pub(crate) trait SurveyUseCase: Send + Sync {
    async fn get_surveyors(&self, filter: SurveyorFilter) -> Result<Surveyors, DomainError>;
}

pub(crate) struct SurveyService<R: SurveyRepository> {
    repo: R,
}

impl<R: SurveyRepository> SurveyService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: SurveyRepository> SurveyUseCase for SurveyService<R> {
    async fn get_surveyors(&self, filter: SurveyorFilter) -> Result<Surveyors, DomainError> {
        self.repo.get_surveyors(filter).await
    }
}
