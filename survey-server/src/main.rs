use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::sample_service::SampleService;
use application::survey_service::SurveyService;
use data::repositories::stub::sample_repository::StubSampleRepository;
use data::repositories::stub::survey_repository::StubSurveyRepository;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let samples_uc = Arc::new(SampleService::new(StubSampleRepository));
    let surveyors_uc = Arc::new(SurveyService::new(StubSurveyRepository));
    let state = AppState::new(samples_uc, surveyors_uc);

    server::run_http(&settings, state).await
}
