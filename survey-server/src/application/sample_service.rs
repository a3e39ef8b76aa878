use anyhow::anyhow;
use async_trait::async_trait;

use crate::data::sample_repository::SampleRepository;
use crate::domain::error::{DomainError, SystemError};
use crate::domain::sample::Samples;

#[async_trait]
pub(crate) trait SamplesUseCase: Send + Sync {
    async fn get_samples(&self) -> Result<Samples, DomainError>;
}

pub(crate) struct SampleService<R: SampleRepository> {
    repo: R,
}

impl<R: SampleRepository> SampleService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: SampleRepository> SamplesUseCase for SampleService<R> {
    /// 実験用のユースケース。原因の連鎖を持つシステムエラーを返し、
    /// エラーレポート経路を通しで確認できるようにしている。
    async fn get_samples(&self) -> Result<Samples, DomainError> {
        if let Err(_err) = self.repo.get_samples().await {
            // TODO リポジトリ実装後はここでエラーを伝播する
        }

        let cause = anyhow!("xxx").context("yyy").context("zzz");
        Err(SystemError::new("aaaa", Some(cause)).into())
    }
}
