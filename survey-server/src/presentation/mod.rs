use std::sync::Arc;

use crate::application::sample_service::SamplesUseCase;
use crate::application::survey_service::SurveyUseCase;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) samples_uc: Arc<dyn SamplesUseCase>,
    pub(crate) surveyors_uc: Arc<dyn SurveyUseCase>,
}

impl AppState {
    pub(crate) fn new(
        samples_uc: Arc<dyn SamplesUseCase>,
        surveyors_uc: Arc<dyn SurveyUseCase>,
    ) -> Self {
        Self {
            samples_uc,
            surveyors_uc,
        }
    }
}
