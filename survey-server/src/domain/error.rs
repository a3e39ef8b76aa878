use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// アプリ固有のエラーコード。
///
/// ステータスとユーザー向けメッセージはコードごとに固定で、起動後に変わることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ErrorCode {
    InvalidRequest,
    NotFound,
    Exclusion,
    Internal,
}

impl ErrorCode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Exclusion => "EXCLUSION",
            Self::Internal => "INTERNAL",
        }
    }

    pub(crate) const fn status(self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::NotFound => 404,
            Self::Exclusion => 409,
            Self::Internal => 500,
        }
    }

    /// ユーザーに見せるメッセージ
    pub(crate) const fn message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "リクエストの形式が不正です",
            Self::NotFound => "データがありません",
            Self::Exclusion => "すでに削除されています",
            Self::Internal => "想定外のエラーが発生しました",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 業務エラーを表現するエラー。
///
/// クライアント起因の想定内の失敗。`code` と `details` は構築後に変更されない。
#[derive(Debug)]
pub(crate) struct BusinessError {
    code: ErrorCode,
    details: Vec<String>,
}

impl BusinessError {
    pub(crate) fn new(code: ErrorCode, details: Vec<String>) -> Self {
        Self { code, details }
    }

    pub(crate) fn code(&self) -> ErrorCode {
        self.code
    }

    pub(crate) fn details(&self) -> &[String] {
        &self.details
    }

    pub(crate) fn into_details(self) -> Vec<String> {
        self.details
    }
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} details: {:?}",
            self.code,
            self.code.message(),
            self.details
        )
    }
}

impl std::error::Error for BusinessError {}

/// 想定外のエラーを表現するエラー。
///
/// `cause` は診断専用で、クライアントへのレスポンスには決して含めない。
#[derive(Debug)]
pub(crate) struct SystemError {
    message: String,
    cause: Option<anyhow::Error>,
}

impl SystemError {
    pub(crate) fn new(message: impl Into<String>, cause: Option<anyhow::Error>) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    /// 原因エラーの連鎖を外側から順に文字列化する。運用ログ出力用。
    pub(crate) fn cause_chain(&self) -> Vec<String> {
        match &self.cause {
            Some(cause) => cause.chain().map(ToString::to_string).collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(
                f,
                "[{}] {} cause: {:#}",
                ErrorCode::Internal,
                self.message,
                cause
            ),
            None => write!(f, "[{}] {}", ErrorCode::Internal, self.message),
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(AsRef::<dyn std::error::Error + 'static>::as_ref)
    }
}

/// ハンドラーまで伝播するエラーの閉じた分類。
///
/// 業務エラーは分類を保ったまま伝播し、それ以外はすべてレポート段階で
/// `Internal` に落とされる。
#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error(transparent)]
    Business(#[from] BusinessError),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{BusinessError, ErrorCode, SystemError};

    #[test]
    fn error_code_attributes_are_fixed() {
        let cases = [
            (ErrorCode::InvalidRequest, 400, "リクエストの形式が不正です"),
            (ErrorCode::NotFound, 404, "データがありません"),
            (ErrorCode::Exclusion, 409, "すでに削除されています"),
            (ErrorCode::Internal, 500, "想定外のエラーが発生しました"),
        ];

        for (code, status, message) in cases {
            assert_eq!(code.status(), status);
            assert_eq!(code.message(), message);
        }
    }

    #[test]
    fn business_error_exposes_code_and_details() {
        let err = BusinessError::new(
            ErrorCode::Exclusion,
            vec!["xxxx".to_string(), "yyyy".to_string()],
        );

        assert_eq!(err.code(), ErrorCode::Exclusion);
        assert_eq!(err.details(), ["xxxx", "yyyy"]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("[EXCLUSION]"));
        assert!(rendered.contains("xxxx"));
    }

    #[test]
    fn business_error_allows_empty_details() {
        let err = BusinessError::new(ErrorCode::NotFound, Vec::new());
        assert!(err.details().is_empty());
    }

    #[test]
    fn system_error_walks_cause_chain() {
        let cause = anyhow!("xxx").context("yyy").context("zzz");
        let err = SystemError::new("aaaa", Some(cause));

        assert_eq!(err.cause_chain(), ["zzz", "yyy", "xxx"]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("[INTERNAL] aaaa cause:"));
        assert!(rendered.contains("xxx"));
    }

    #[test]
    fn system_error_without_cause_has_empty_chain() {
        let err = SystemError::new("aaaa", None);
        assert!(err.cause_chain().is_empty());
        assert_eq!(err.to_string(), "[INTERNAL] aaaa");
        assert!(std::error::Error::source(&err).is_none());
    }
}
