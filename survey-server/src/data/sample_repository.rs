use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::sample::Samples;

#[async_trait]
pub(crate) trait SampleRepository: Send + Sync {
    async fn get_samples(&self) -> Result<Samples, DomainError>;
}
