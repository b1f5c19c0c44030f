use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::{
    domain::{
        models::{
            AppError,
            usecases::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    usecases::require,
};

pub struct RemoveNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl RemoveNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

#[async_trait]
impl UseCase for RemoveNodeUseCase {
    type Input = RemoveNodeUseCaseInput;
    type Output = RemoveNodeUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: RemoveNodeUseCaseInput,
    ) -> Result<RemoveNodeUseCaseOutput, AppError> {
        self.hasher_service
            .remove_node(&input.pool, &input.node_id)?;

        info!(pool = %input.pool, node = %input.node_id, "node removed");

        Ok(RemoveNodeUseCaseOutput { success: true })
    }
}

#[async_trait]
impl UseCaseValidatable for RemoveNodeUseCase {
    async fn validate(&self, input: &RemoveNodeUseCaseInput) -> Result<(), AppError> {
        require(&input.pool, "Pool")?;
        require(&input.node_id, "Node id")
    }
}
