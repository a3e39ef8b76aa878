use utoipa::OpenApi;

use crate::presentation::app_error::ErrorResponse;
use crate::presentation::handlers::samples::{GetSampleResponse, GetSamplesQuery};
use crate::presentation::handlers::surveyors::{GetSurveyorResponse, GetSurveyorsQuery};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::surveyors::get_surveyors,
        crate::presentation::handlers::samples::get_samples
    ),
    components(
        schemas(
            GetSurveyorsQuery,
            GetSurveyorResponse,
            GetSamplesQuery,
            GetSampleResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "surveyors", description = "調査員の検索"),
        (name = "samples", description = "実験用エンドポイント")
    )
)]
pub(crate) struct ApiDoc;
