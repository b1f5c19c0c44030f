use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::{
    domain::{
        models::{
            AppError,
            usecases::{AddNodeUseCaseInput, AddNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    usecases::require,
};

pub struct AddNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl AddNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

#[async_trait]
impl UseCase for AddNodeUseCase {
    type Input = AddNodeUseCaseInput;
    type Output = AddNodeUseCaseOutput;
    type Error = AppError;

    async fn execute(&self, input: AddNodeUseCaseInput) -> Result<AddNodeUseCaseOutput, AppError> {
        self.hasher_service
            .add_node(&input.pool, &input.node_id, input.weight)?;

        info!(pool = %input.pool, node = %input.node_id, weight = input.weight, "node added");

        Ok(AddNodeUseCaseOutput { success: true })
    }
}

#[async_trait]
impl UseCaseValidatable for AddNodeUseCase {
    async fn validate(&self, input: &AddNodeUseCaseInput) -> Result<(), AppError> {
        require(&input.pool, "Pool")?;
        require(&input.node_id, "Node id")?;

        if input.weight == 0 {
            return Err(AppError::BadRequest("Weight must be at least 1".to_string()));
        }

        Ok(())
    }
}
