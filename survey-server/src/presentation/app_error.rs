use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::error::{BusinessError, DomainError, ErrorCode, SystemError};

/// ハンドラーが返すエラー。レスポンスへの変換はここで一元的に行う。
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct AppError(#[from] DomainError);

pub(crate) type AppResult<T> = Result<T, AppError>;

impl From<BusinessError> for AppError {
    fn from(err: BusinessError) -> Self {
        Self(err.into())
    }
}

impl From<SystemError> for AppError {
    fn from(err: SystemError) -> Self {
        Self(err.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err.into())
    }
}

/// エラーレスポンスの構造体。
/// Swaggerのドキュメント生成用に各ハンドラーから参照される。
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorResponse {
    #[schema(value_type = String, example = "INVALID_REQUEST")]
    pub(crate) code: ErrorCode,
    #[schema(example = "リクエストの形式が不正です")]
    pub(crate) message: String,
    #[schema(example = json!(["aaa", "bbb", "ccc"]))]
    pub(crate) details: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, details) = match self.0 {
            DomainError::Business(err) => (err.code(), err.into_details()),
            DomainError::System(err) => {
                // 業務エラー以外はログに残し、クライアントには固定のINTERNALのみ返す
                error!(
                    "System Error: {} cause chain: {:?}",
                    err.message(),
                    err.cause_chain()
                );
                (ErrorCode::Internal, Vec::new())
            }
            DomainError::Other(err) => {
                error!("System Error: {err:#}");
                (ErrorCode::Internal, Vec::new())
            }
        };

        let status = StatusCode::from_u16(code.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            code,
            message: code.message().to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}

/// バリデーションエラーから詳細メッセージのリストを生成する。
/// フィールドごとに最初に違反したルールを1件、フィールド名順で返す。
pub(crate) fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .filter_map(|(field, field_errors)| {
            field_errors
                .first()
                .map(|err| format!("field '{field}' failed constraint '{}'", err.code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use validator::Validate;

    use super::{AppError, validation_details};
    use crate::domain::error::{BusinessError, ErrorCode, SystemError};

    fn app_with_error(err: impl Fn() -> AppError + Clone + Send + Sync + 'static) -> Router {
        Router::new().route("/dummy", get(move || async move { Err::<(), _>(err()) }))
    }

    async fn get_dummy(app: Router) -> (u16, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dummy")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("request must not fail");

        let status = response.status().as_u16();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body must be readable")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).expect("body must be JSON");
        (status, body)
    }

    #[tokio::test]
    async fn business_error_is_reported_with_its_own_code() {
        let app = app_with_error(|| {
            BusinessError::new(
                ErrorCode::Exclusion,
                vec!["xxxx".to_string(), "yyyy".to_string()],
            )
            .into()
        });

        let (status, body) = get_dummy(app).await;

        assert_eq!(status, 409);
        assert_eq!(
            body,
            json!({
                "code": "EXCLUSION",
                "message": "すでに削除されています",
                "details": ["xxxx", "yyyy"],
            })
        );
    }

    #[tokio::test]
    async fn system_error_is_reported_as_internal() {
        let app =
            app_with_error(|| SystemError::new("zzzzz", Some(anyhow!("error"))).into());

        let (status, body) = get_dummy(app).await;

        assert_eq!(status, 500);
        assert_eq!(
            body,
            json!({
                "code": "INTERNAL",
                "message": "想定外のエラーが発生しました",
                "details": [],
            })
        );
    }

    #[tokio::test]
    async fn untyped_error_is_reported_as_internal() {
        let app = app_with_error(|| anyhow!("error").into());

        let (status, body) = get_dummy(app).await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL");
        assert_eq!(body["details"], json!([]));
    }

    #[tokio::test]
    async fn business_error_with_no_details_serializes_empty_array() {
        let app = app_with_error(|| BusinessError::new(ErrorCode::NotFound, Vec::new()).into());

        let (status, body) = get_dummy(app).await;

        assert_eq!(status, 404);
        assert_eq!(body["details"], json!([]));
    }

    #[tokio::test]
    async fn classification_is_idempotent() {
        let make =
            || app_with_error(|| BusinessError::new(ErrorCode::Exclusion, Vec::new()).into());

        let first = get_dummy(make()).await;
        let second = get_dummy(make()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn later_error_supersedes_earlier_one() {
        // ハンドラー内で複数のエラーが発生した場合、最後のものが分類される
        let app = app_with_error(|| {
            let flagged: Vec<AppError> = vec![
                BusinessError::new(ErrorCode::Exclusion, vec!["xxxx".to_string()]).into(),
                SystemError::new("zzzzz", Some(anyhow!("error"))).into(),
            ];
            flagged
                .into_iter()
                .last()
                .expect("at least one error is flagged")
        });

        let (status, body) = get_dummy(app).await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL");
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(required)]
        q1: Option<String>,
        #[validate(length(min = 2))]
        q2: String,
    }

    #[test]
    fn validation_details_names_field_and_rule_per_failure() {
        let probe = Probe {
            q1: None,
            q2: "1".to_string(),
        };

        let errors = probe.validate().expect_err("probe must be invalid");
        let details = validation_details(&errors);

        assert_eq!(
            details,
            [
                "field 'q1' failed constraint 'required'",
                "field 'q2' failed constraint 'length'",
            ]
        );
    }

    #[test]
    fn validation_details_reports_single_failing_field() {
        let probe = Probe {
            q1: None,
            q2: "ok".to_string(),
        };

        let errors = probe.validate().expect_err("probe must be invalid");
        let details = validation_details(&errors);

        assert_eq!(details, ["field 'q1' failed constraint 'required'"]);
    }
}
