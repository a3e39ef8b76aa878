use async_trait::async_trait;

use crate::data::survey_repository::SurveyRepository;
use crate::domain::error::{BusinessError, DomainError, ErrorCode};
use crate::domain::surveyor::{SurveyorFilter, Surveyors};

// TODO 永続化層が決まったら実装を置き換える
#[derive(Debug, Clone, Default)]
pub(crate) struct StubSurveyRepository;

#[async_trait]
impl SurveyRepository for StubSurveyRepository {
    async fn get_surveyors(&self, _filter: SurveyorFilter) -> Result<Surveyors, DomainError> {
        Err(BusinessError::new(ErrorCode::Exclusion, vec!["xxxx".to_string()]).into())
    }
}
