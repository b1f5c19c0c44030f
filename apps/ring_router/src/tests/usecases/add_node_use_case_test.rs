#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};
    use hash_ring::{NodeId, RingError};

    use crate::{
        core::{
            domain::models::{AppError, usecases::AddNodeUseCaseInput},
            usecases::AddNodeUseCase,
        },
        tests::test_mocks::MockHasher,
    };

    fn input(pool: &str, node_id: &str, weight: u32) -> AddNodeUseCaseInput {
        AddNodeUseCaseInput {
            pool: pool.into(),
            node_id: node_id.into(),
            weight,
        }
    }

    #[tokio::test]
    async fn validate_fails_when_pool_is_empty() {
        let uc = AddNodeUseCase::new(Arc::new(MockHasher::new()));

        let err = uc.validate(&input("", "n1", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Pool is empty"));
    }

    #[tokio::test]
    async fn validate_fails_when_node_id_is_empty() {
        let uc = AddNodeUseCase::new(Arc::new(MockHasher::new()));

        let err = uc.validate(&input("cache", "", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Node id is empty"));
    }

    #[tokio::test]
    async fn validate_fails_when_weight_is_zero() {
        let hasher = Arc::new(MockHasher::new());
        let uc = AddNodeUseCase::new(hasher.clone());

        let err = uc
            .validate_and_execute(input("cache", "n1", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        // never reached the service
        assert!(hasher.last_add_node.lock().is_none());
    }

    #[tokio::test]
    async fn adds_node_with_weight() {
        let hasher = Arc::new(MockHasher::new());
        let uc = AddNodeUseCase::new(hasher.clone());

        let out = uc
            .validate_and_execute(input("cache", "n1", 3))
            .await
            .expect("add should succeed");

        assert!(out.success);
        assert_eq!(
            hasher.last_add_node.lock().clone(),
            Some(("cache".to_string(), "n1".to_string(), 3))
        );
    }

    #[tokio::test]
    async fn propagates_ring_error() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_add_node_result(Err(RingError::NodeAlreadyExists(NodeId::new("n1"))));
        let uc = AddNodeUseCase::new(hasher);

        let err = uc.execute(input("cache", "n1", 1)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Ring(RingError::NodeAlreadyExists(id)) if id == "n1"
        ));
    }
}
