use std::sync::Arc;

use app_core::UseCaseValidatable;

use crate::core::{
    domain::{
        models::{
            AppError, Command, Response,
            usecases::{
                AddNodeUseCaseInput, ListNodesUseCaseInput, LookupKeyUseCaseInput,
                RemoveNodeUseCaseInput, ReweightNodeUseCaseInput,
            },
        },
        services::ConsistentHasherService,
    },
    usecases::{
        AddNodeUseCase, ListNodesUseCase, LookupKeyUseCase, RemoveNodeUseCase,
        ReweightNodeUseCase,
    },
};

pub struct RequestControllerService {
    hasher_service: Arc<dyn ConsistentHasherService>,
    add_node_use_case: AddNodeUseCase,
    remove_node_use_case: RemoveNodeUseCase,
    reweight_node_use_case: ReweightNodeUseCase,
    lookup_key_use_case: LookupKeyUseCase,
    list_nodes_use_case: ListNodesUseCase,
}

impl RequestControllerService {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self {
            add_node_use_case: AddNodeUseCase::new(hasher_service.clone()),
            remove_node_use_case: RemoveNodeUseCase::new(hasher_service.clone()),
            reweight_node_use_case: ReweightNodeUseCase::new(hasher_service.clone()),
            lookup_key_use_case: LookupKeyUseCase::new(hasher_service.clone()),
            list_nodes_use_case: ListNodesUseCase::new(hasher_service.clone()),
            hasher_service,
        }
    }

    pub async fn handle(&self, cmd: Command) -> Response {
        match self.dispatch(cmd).await {
            Ok(response) => response,
            Err(e) => Response::Error(e.to_string()),
        }
    }

    async fn dispatch(&self, cmd: Command) -> Result<Response, AppError> {
        match cmd {
            Command::Add {
                pool,
                node_id,
                weight,
            } => {
                self.add_node_use_case
                    .validate_and_execute(AddNodeUseCaseInput {
                        pool,
                        node_id,
                        weight,
                    })
                    .await?;
                Ok(Response::Ok)
            }
            Command::Remove { pool, node_id } => {
                self.remove_node_use_case
                    .validate_and_execute(RemoveNodeUseCaseInput { pool, node_id })
                    .await?;
                Ok(Response::Ok)
            }
            Command::Reweight {
                pool,
                node_id,
                weight,
            } => {
                self.reweight_node_use_case
                    .validate_and_execute(ReweightNodeUseCaseInput {
                        pool,
                        node_id,
                        weight,
                    })
                    .await?;
                Ok(Response::Ok)
            }
            Command::Lookup { pool, key } => {
                let output = self
                    .lookup_key_use_case
                    .validate_and_execute(LookupKeyUseCaseInput {
                        pool,
                        key,
                        replicas: 1,
                    })
                    .await?;

                output
                    .node_ids
                    .into_iter()
                    .next()
                    .map(Response::Node)
                    .ok_or_else(|| AppError::BadRequest("No owner resolved".to_string()))
            }
            Command::Replicas { pool, key, count } => {
                let output = self
                    .lookup_key_use_case
                    .validate_and_execute(LookupKeyUseCaseInput {
                        pool,
                        key,
                        replicas: count,
                    })
                    .await?;
                Ok(Response::Nodes(output.node_ids))
            }
            Command::Nodes { pool } => {
                let output = self
                    .list_nodes_use_case
                    .validate_and_execute(ListNodesUseCaseInput { pool })
                    .await?;
                Ok(Response::Members(output.nodes))
            }
            Command::Pools => Ok(Response::Pools(self.hasher_service.pools())),
            Command::Hash { key } => Ok(Response::Hash(self.hasher_service.create_hash(&key))),
            Command::Quit => Ok(Response::Bye),
            Command::Invalid(usage) => Err(AppError::BadRequest(usage)),
            Command::Unknown(other) => Err(AppError::BadRequest(format!(
                "unknown command {other}"
            ))),
        }
    }
}
