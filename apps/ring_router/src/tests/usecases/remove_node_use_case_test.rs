#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};
    use hash_ring::{NodeId, RingError};

    use crate::{
        core::{
            domain::models::{AppError, usecases::RemoveNodeUseCaseInput},
            usecases::RemoveNodeUseCase,
        },
        tests::test_mocks::MockHasher,
    };

    #[tokio::test]
    async fn validate_fails_when_node_id_is_empty() {
        let uc = RemoveNodeUseCase::new(Arc::new(MockHasher::new()));

        let input = RemoveNodeUseCaseInput {
            pool: "cache".into(),
            node_id: "".into(),
        };
        let err = uc.validate(&input).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn removes_node_from_pool() {
        let hasher = Arc::new(MockHasher::new());
        let uc = RemoveNodeUseCase::new(hasher.clone());

        let out = uc
            .validate_and_execute(RemoveNodeUseCaseInput {
                pool: "cache".into(),
                node_id: "n1".into(),
            })
            .await
            .expect("remove should succeed");

        assert!(out.success);
        assert_eq!(
            hasher.last_remove_node.lock().clone(),
            Some(("cache".to_string(), "n1".to_string()))
        );
    }

    #[tokio::test]
    async fn unknown_node_is_reported() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_remove_node_result(Err(RingError::NodeNotFound(NodeId::new("ghost"))));
        let uc = RemoveNodeUseCase::new(hasher);

        let err = uc
            .execute(RemoveNodeUseCaseInput {
                pool: "cache".into(),
                node_id: "ghost".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "node ghost not found");
    }
}
