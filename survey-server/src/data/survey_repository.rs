use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::surveyor::{SurveyorFilter, Surveyors};

#[async_trait]
pub(crate) trait SurveyRepository: Send + Sync {
    async fn get_surveyors(&self, filter: SurveyorFilter) -> Result<Surveyors, DomainError>;
}
