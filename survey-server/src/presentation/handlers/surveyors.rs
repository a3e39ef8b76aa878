use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use utoipa::ToSchema;
use validator::Validate;

use super::alphanumeric;
use crate::domain::surveyor::{Surveyor, SurveyorFilter};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppResult, ErrorResponse};
use crate::presentation::extract::ValidatedQuery;

#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct GetSurveyorsQuery {
    /// 任意。英数字2文字以内
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "office-id", default)]
    #[validate(length(max = 2), custom(function = alphanumeric))]
    pub(crate) office_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct GetSurveyorResponse {
    #[schema(example = "000001")]
    pub(crate) id: String,
    #[schema(example = "調査員1")]
    pub(crate) name: String,
}

impl From<Surveyor> for GetSurveyorResponse {
    fn from(surveyor: Surveyor) -> Self {
        Self {
            id: surveyor.id,
            name: surveyor.name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/surveyors",
    tag = "surveyors",
    params(
        ("office-id" = Option<String>, Query, description = "任意。英数字2文字以内")
    ),
    responses(
        (status = 200, description = "調査員のリスト", body = [GetSurveyorResponse]),
        (status = 400, description = "リクエスト形式不正", body = ErrorResponse),
        (status = 500, description = "想定外のエラー", body = ErrorResponse)
    )
)]
pub(crate) async fn get_surveyors(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GetSurveyorsQuery>,
) -> AppResult<(StatusCode, Json<Vec<GetSurveyorResponse>>)> {
    let filter = SurveyorFilter {
        office_id: query.office_id.unwrap_or_default(),
        ..SurveyorFilter::default()
    };
    let surveyors = state.surveyors_uc.get_surveyors(filter).await?;

    let res: Vec<GetSurveyorResponse> = surveyors
        .into_iter()
        .map(GetSurveyorResponse::from)
        .collect();
    Ok((StatusCode::OK, Json(res)))
}
