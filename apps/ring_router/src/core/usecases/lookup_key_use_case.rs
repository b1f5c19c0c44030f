use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::trace;

use crate::core::{
    domain::{
        models::{
            AppError,
            usecases::{LookupKeyUseCaseInput, LookupKeyUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    usecases::require,
};

pub struct LookupKeyUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl LookupKeyUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

#[async_trait]
impl UseCase for LookupKeyUseCase {
    type Input = LookupKeyUseCaseInput;
    type Output = LookupKeyUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: LookupKeyUseCaseInput,
    ) -> Result<LookupKeyUseCaseOutput, AppError> {
        let node_ids = if input.replicas == 1 {
            vec![self.hasher_service.get_node_id(&input.pool, &input.key)?]
        } else {
            self.hasher_service
                .get_replica_ids(&input.pool, &input.key, input.replicas)?
        };

        trace!(pool = %input.pool, key = %input.key, ?node_ids, "key resolved");

        Ok(LookupKeyUseCaseOutput { node_ids })
    }
}

#[async_trait]
impl UseCaseValidatable for LookupKeyUseCase {
    async fn validate(&self, input: &LookupKeyUseCaseInput) -> Result<(), AppError> {
        require(&input.pool, "Pool")?;
        require(&input.key, "Key")?;

        if input.replicas == 0 {
            return Err(AppError::BadRequest(
                "Replica count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
