use uuid::Uuid;
use validator::ValidationError;

pub(crate) mod samples;
pub(crate) mod surveyors;

/// ASCII英数字のみを許可する
pub(crate) fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanum"))
    }
}

/// UUID形式のみを許可する
pub(crate) fn uuid_format(value: &str) -> Result<(), ValidationError> {
    match Uuid::parse_str(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("uuid")),
    }
}
