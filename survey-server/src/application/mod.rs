pub(crate) mod sample_service;
pub(crate) mod survey_service;
