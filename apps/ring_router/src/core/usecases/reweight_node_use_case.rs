use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::{
    domain::{
        models::{
            AppError,
            usecases::{ReweightNodeUseCaseInput, ReweightNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    usecases::require,
};

pub struct ReweightNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl ReweightNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

#[async_trait]
impl UseCase for ReweightNodeUseCase {
    type Input = ReweightNodeUseCaseInput;
    type Output = ReweightNodeUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: ReweightNodeUseCaseInput,
    ) -> Result<ReweightNodeUseCaseOutput, AppError> {
        self.hasher_service
            .reweight_node(&input.pool, &input.node_id, input.weight)?;

        info!(pool = %input.pool, node = %input.node_id, weight = input.weight, "node reweighted");

        Ok(ReweightNodeUseCaseOutput { success: true })
    }
}

#[async_trait]
impl UseCaseValidatable for ReweightNodeUseCase {
    async fn validate(&self, input: &ReweightNodeUseCaseInput) -> Result<(), AppError> {
        require(&input.pool, "Pool")?;
        require(&input.node_id, "Node id")?;

        if input.weight == 0 {
            return Err(AppError::BadRequest("Weight must be at least 1".to_string()));
        }

        Ok(())
    }
}
