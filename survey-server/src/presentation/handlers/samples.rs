use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, StringWithSeparator, formats::CommaSeparator, serde_as};
use utoipa::ToSchema;
use validator::Validate;

use super::{alphanumeric, uuid_format};
use crate::domain::sample::Sample;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppResult, ErrorResponse};
use crate::presentation::extract::ValidatedQuery;

#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct GetSamplesQuery {
    /// 必須。英数字3文字
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required, length(equal = 3), custom(function = alphanumeric))]
    pub(crate) q1: Option<String>,

    /// 任意。2〜3文字
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(min = 2, max = 3))]
    pub(crate) q2: Option<String>,

    /// 任意。UUID形式
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(custom(function = uuid_format))]
    pub(crate) uuid: Option<String>,

    /// 任意。メールアドレス形式
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(email)]
    pub(crate) email: Option<String>,

    /// 任意。整数のカンマ区切り
    #[serde_as(as = "Option<StringWithSeparator<CommaSeparator, i64>>")]
    #[serde(rename = "intArray", default)]
    pub(crate) int_array: Option<Vec<i64>>,

    /// 任意。YYYY-MM-DD
    #[serde(rename = "dateUtc", default)]
    pub(crate) date_utc: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct GetSampleResponse {
    #[schema(example = "11111")]
    pub(crate) id: String,
    #[schema(example = "サンプル1")]
    pub(crate) name: String,
}

impl From<Sample> for GetSampleResponse {
    fn from(sample: Sample) -> Self {
        Self {
            id: sample.id,
            name: sample.name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/samples",
    tag = "samples",
    params(
        ("q1" = String, Query, description = "必須。英数字3文字"),
        ("q2" = Option<String>, Query, description = "任意。2〜3文字"),
        ("uuid" = Option<String>, Query, description = "任意。UUID形式"),
        ("email" = Option<String>, Query, description = "任意。メールアドレス形式"),
        ("intArray" = Option<String>, Query, description = "任意。整数のカンマ区切り"),
        ("dateUtc" = Option<String>, Query, description = "任意。YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "取得結果", body = [GetSampleResponse]),
        (status = 400, description = "不正なリクエスト", body = ErrorResponse),
        (status = 500, description = "想定外のエラー", body = ErrorResponse)
    )
)]
pub(crate) async fn get_samples(
    State(state): State<AppState>,
    ValidatedQuery(_query): ValidatedQuery<GetSamplesQuery>,
) -> AppResult<(StatusCode, Json<Vec<GetSampleResponse>>)> {
    let samples = state.samples_uc.get_samples().await?;

    let res: Vec<GetSampleResponse> = samples.into_iter().map(GetSampleResponse::from).collect();
    Ok((StatusCode::OK, Json(res)))
}
