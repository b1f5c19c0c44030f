use std::sync::Arc;

use tracing::info;

use crate::{
    core::{
        domain::{models::AppError, services::ConsistentHasherService},
        services::RequestControllerService,
    },
    infrastructure::{adapters::services::PooledRingService, config::RouterConfig},
};

pub struct RingRouterModule {
    pub hasher_service: Arc<PooledRingService>,
    pub request_controller_service: Arc<RequestControllerService>,
}

impl RingRouterModule {
    pub fn build_from_config(config: &RouterConfig) -> Result<Self, AppError> {
        let hasher_service = PooledRingService::new_shared(config.ring);

        for node in &config.bootstrap {
            hasher_service.add_node(&node.pool, &node.node_id, node.weight)?;
            info!(pool = %node.pool, node = %node.node_id, weight = node.weight, "bootstrap node added");
        }

        let request_controller_service =
            Arc::new(RequestControllerService::new(hasher_service.clone()));

        Ok(Self {
            hasher_service,
            request_controller_service,
        })
    }
}
