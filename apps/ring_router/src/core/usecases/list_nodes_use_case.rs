use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;

use crate::core::{
    domain::{
        models::{
            AppError,
            usecases::{ListNodesUseCaseInput, ListNodesUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    usecases::require,
};

pub struct ListNodesUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl ListNodesUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

#[async_trait]
impl UseCase for ListNodesUseCase {
    type Input = ListNodesUseCaseInput;
    type Output = ListNodesUseCaseOutput;
    type Error = AppError;

    async fn execute(
        &self,
        input: ListNodesUseCaseInput,
    ) -> Result<ListNodesUseCaseOutput, AppError> {
        Ok(ListNodesUseCaseOutput {
            nodes: self.hasher_service.list_nodes(&input.pool),
        })
    }
}

#[async_trait]
impl UseCaseValidatable for ListNodesUseCase {
    async fn validate(&self, input: &ListNodesUseCaseInput) -> Result<(), AppError> {
        require(&input.pool, "Pool")
    }
}
