use async_trait::async_trait;

use crate::data::sample_repository::SampleRepository;
use crate::domain::error::{BusinessError, DomainError, ErrorCode};
use crate::domain::sample::Samples;

// TODO 永続化層が決まったら実装を置き換える
#[derive(Debug, Clone, Default)]
pub(crate) struct StubSampleRepository;

#[async_trait]
impl SampleRepository for StubSampleRepository {
    async fn get_samples(&self) -> Result<Samples, DomainError> {
        Err(BusinessError::new(ErrorCode::Exclusion, vec!["xxxx".to_string()]).into())
    }
}
