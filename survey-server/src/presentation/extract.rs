use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::error::{BusinessError, ErrorCode};
use crate::presentation::app_error::{AppError, validation_details};

/// クエリ文字列をバインドし、宣言されたルールで検証する抽出器。
///
/// バインド失敗・検証失敗のどちらも `INVALID_REQUEST` の業務エラーに変換されるため、
/// ハンドラー本体が不正な入力を受け取ることはない。
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidatedQuery<T>(pub(crate) T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            // フィールド単位で列挙できないバインドエラーは、そのままのメッセージを1件返す
            .map_err(|rejection| invalid_request(vec![rejection.body_text()]))?;

        value
            .validate()
            .map_err(|errors| invalid_request(validation_details(&errors)))?;

        Ok(Self(value))
    }
}

fn invalid_request(details: Vec<String>) -> AppError {
    BusinessError::new(ErrorCode::InvalidRequest, details).into()
}
